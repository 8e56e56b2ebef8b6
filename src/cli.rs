//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use csscolorparser::Color as CssColor;
use palette::Srgb;

use crate::config::{AuditOverrides, ConfigOverrides};
use crate::rating::{TextSize, WcagLevel};
use crate::tokens;

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    #[default]
    Text,
    /// JSON
    Json,
    /// YAML
    Yaml,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Audit every catalog combination (default)
    Report,
    /// Rate a single foreground/background pair
    Check {
        /// Foreground: hex, any CSS color, or a design token name
        foreground: String,
        /// Background: hex, any CSS color, or a design token name
        background: String,
        /// Conformance level to test against
        #[arg(long, value_enum, default_value_t = WcagLevel::Aa)]
        level: WcagLevel,
        /// Text size class
        #[arg(long, value_enum, default_value_t = TextSize::Normal)]
        size: TextSize,
    },
    /// Suggest a foreground that reaches the target ratio
    Suggest {
        /// Foreground: hex, any CSS color, or a design token name
        foreground: String,
        /// Background: hex, any CSS color, or a design token name
        background: String,
    },
    /// List design tokens with their contrast on white and black
    Tokens,
}

/// WCAG contrast audit for the storefront design system.
#[derive(Parser, Debug)]
#[command(name = "contrast-audit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Target contrast ratio for recommendations and suggestions (default 4.5)
    #[arg(long, global = true)]
    pub target: Option<f64>,

    /// Audit only combinations from the config file
    #[arg(long, global = true)]
    pub no_builtin: bool,

    /// Load configuration from TOML file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Save the effective configuration to TOML file
    #[arg(long, value_name = "FILE", global = true)]
    pub save_config: Option<PathBuf>,

    /// Log file path (stderr if not specified)
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    pub log_level: String,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    /// The subcommand to run, defaulting to `report`.
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Report)
    }

    /// Config values explicitly set on the command line.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            audit: AuditOverrides {
                target_ratio: self.target,
                include_builtin: self.no_builtin.then_some(false),
            },
        }
    }
}

/// Resolve a color argument: design token name, else any CSS color.
pub fn resolve_color(input: &str) -> Result<Srgb<u8>, String> {
    let source = tokens::lookup(input).unwrap_or(input);
    let css_color: CssColor = source
        .parse()
        .map_err(|e| format!("Invalid color '{}': {}", input, e))?;
    let [r, g, b, _a] = css_color.to_rgba8();
    Ok(Srgb::new(r, g, b))
}
