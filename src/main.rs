//! CLI entry point for contrast-audit.

use std::fmt::Display;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr, eyre};
use palette::Srgb;
use serde::Serialize;
use tracing::debug;

use contrast_audit::audit::Audit;
use contrast_audit::cli::{Cli, Command, OutputFormat, resolve_color};
use contrast_audit::color::{parse_hex, to_hex};
use contrast_audit::config::AuditConfig;
use contrast_audit::logging::init_logging;
use contrast_audit::rating::{Rating, TextSize, WcagLevel, classify, meets_standard, threshold};
use contrast_audit::suggest::{Suggestion, suggest};
use contrast_audit::tokens::DESIGN_TOKENS;
use contrast_audit::wcag::contrast_ratio;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "contrast-audit", &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let _guard = init_logging(cli.log_file.as_deref(), Some(cli.log_level.as_str()));

    let config = AuditConfig::load(cli.config.as_deref(), &cli.to_config_overrides())
        .wrap_err("Failed to load configuration")?;

    if let Some(ref path) = cli.save_config {
        config
            .save(path)
            .wrap_err_with(|| format!("Failed to write config to {}", path.display()))?;
        eprintln!("Saved configuration to {}", path.display());
    }

    let ok = match cli.selected_command() {
        Command::Report => run_report(&config, cli.format)?,
        Command::Check {
            foreground,
            background,
            level,
            size,
        } => run_check(&foreground, &background, level, size, cli.format)?,
        Command::Suggest {
            foreground,
            background,
        } => run_suggest(&foreground, &background, config.audit.target_ratio, cli.format)?,
        Command::Tokens => run_tokens(cli.format)?,
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Print a value in the requested format.
fn emit<T: Serialize + Display>(value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{value}"),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(value).wrap_err("Failed to serialize to JSON")?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(value).wrap_err("Failed to serialize to YAML")?;
            print!("{yaml}");
        }
    }
    Ok(())
}

fn parse_pair(foreground: &str, background: &str) -> Result<(Srgb<u8>, Srgb<u8>)> {
    let fg = resolve_color(foreground)
        .map_err(|e| eyre!("Invalid foreground color '{}': {}", foreground, e))?;
    let bg = resolve_color(background)
        .map_err(|e| eyre!("Invalid background color '{}': {}", background, e))?;
    Ok((fg, bg))
}

fn run_report(config: &AuditConfig, format: OutputFormat) -> Result<bool> {
    // Built once here; read-only for the rest of the run
    let catalog = config.catalog().wrap_err("Invalid combination in config")?;
    debug!(combinations = catalog.len(), "running audit");

    let audit = Audit::run(&catalog, config);
    emit(&audit, format)?;
    Ok(audit.exit_ok())
}

#[derive(Debug, Serialize)]
struct CheckOutput {
    foreground: String,
    background: String,
    ratio: f64,
    rating: Rating,
    level: WcagLevel,
    size: TextSize,
    required: f64,
    meets: bool,
}

impl Display for CheckOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} on {}", self.foreground, self.background)?;
        writeln!(f, "Contrast: {:.2}:1 ({})", self.ratio, self.rating.level)?;
        writeln!(
            f,
            "{} for {} text requires {}:1: {}",
            self.level,
            self.size,
            self.required,
            if self.meets { "pass" } else { "fail" }
        )
    }
}

fn run_check(
    foreground: &str,
    background: &str,
    level: WcagLevel,
    size: TextSize,
    format: OutputFormat,
) -> Result<bool> {
    let (fg, bg) = parse_pair(foreground, background)?;
    let ratio = contrast_ratio(fg, bg);
    let required = threshold(level, size);

    let output = CheckOutput {
        foreground: to_hex(fg),
        background: to_hex(bg),
        ratio,
        rating: classify(ratio),
        level,
        size,
        required,
        meets: meets_standard(fg, bg, level, size),
    };
    emit(&output, format)?;
    Ok(output.meets)
}

#[derive(Debug, Serialize)]
struct SuggestOutput {
    foreground: String,
    background: String,
    original_ratio: f64,
    target: f64,
    suggestion: Suggestion,
}

impl Display for SuggestOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} on {}: {:.2}:1",
            self.foreground, self.background, self.original_ratio
        )?;
        let suggested = to_hex(self.suggestion.color);
        if self.suggestion.reached {
            writeln!(
                f,
                "Suggested: {} ({:.2}:1, target {:.1}:1)",
                suggested, self.suggestion.ratio, self.target
            )
        } else {
            writeln!(
                f,
                "Target {:.1}:1 not reached; best: {} ({:.2}:1)",
                self.target, suggested, self.suggestion.ratio
            )
        }
    }
}

fn run_suggest(
    foreground: &str,
    background: &str,
    target: f64,
    format: OutputFormat,
) -> Result<bool> {
    let (fg, bg) = parse_pair(foreground, background)?;
    let output = SuggestOutput {
        foreground: to_hex(fg),
        background: to_hex(bg),
        original_ratio: contrast_ratio(fg, bg),
        target,
        suggestion: suggest(fg, bg, target),
    };
    emit(&output, format)?;
    Ok(output.suggestion.reached)
}

#[derive(Debug, Serialize)]
struct TokenRow {
    name: &'static str,
    hex: &'static str,
    on_white: f64,
    on_black: f64,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct TokenTable(Vec<TokenRow>);

impl Display for TokenTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:<16} {:<8} {:>9} {:>9}", "token", "hex", "on white", "on black")?;
        for row in &self.0 {
            writeln!(
                f,
                "{:<16} {:<8} {:>8.2}:1 {:>7.2}:1",
                row.name, row.hex, row.on_white, row.on_black
            )?;
        }
        Ok(())
    }
}

fn run_tokens(format: OutputFormat) -> Result<bool> {
    let white = Srgb::new(255u8, 255, 255);
    let black = Srgb::new(0u8, 0, 0);

    let rows = DESIGN_TOKENS
        .iter()
        .map(|&(name, hex)| {
            let color = parse_hex(hex).map_err(|e| eyre!("Token '{}': {}", name, e))?;
            Ok(TokenRow {
                name,
                hex,
                on_white: contrast_ratio(color, white),
                on_black: contrast_ratio(color, black),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    emit(&TokenTable(rows), format)?;
    Ok(true)
}
