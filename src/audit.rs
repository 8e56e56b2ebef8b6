//! Full accessibility audit: report summary, critical pairs, recommendations.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::color::to_hex;
use crate::config::AuditConfig;
use crate::rating::{Level, thresholds};
use crate::report::{ContrastReport, Status, generate_report};
use crate::suggest::suggest;

const TITLE: &str = "🎨 Premier Bio Labs - WCAG Color Contrast Report";
const RULE_WIDTH: usize = 60;

/// Bucket sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub passing: usize,
    pub warnings: usize,
    pub failing: usize,
}

/// Rating of one critical combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriticalResult {
    pub label: String,
    pub key: String,
    pub ratio: f64,
    pub level: Level,
    pub status: Status,
}

/// A suggested replacement foreground for a combination below the target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub name: String,
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub suggested: String,
    pub suggested_ratio: f64,
    /// Whether the suggestion meets the target ratio
    pub reached: bool,
}

impl Recommendation {
    fn message(&self, target: f64) -> String {
        if self.reached {
            format!(
                "• {}: change {} to {} on {} for {:.2}:1 (target {:.1}:1)",
                self.name, self.foreground, self.suggested, self.background, self.suggested_ratio, target
            )
        } else {
            format!(
                "• {}: {} on {} cannot reach {:.1}:1 by lightness alone (best {} at {:.2}:1); \
                 reserve this pair for decorative use",
                self.name, self.foreground, self.background, target, self.suggested, self.suggested_ratio
            )
        }
    }
}

/// Result of auditing a catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Audit {
    pub summary: Summary,
    pub report: ContrastReport,
    pub critical: Vec<CriticalResult>,
    pub recommendations: Vec<Recommendation>,
    pub target_ratio: f64,
}

impl Audit {
    /// Audit `catalog` with the critical list, recommendation keys and target
    /// from `config`.
    pub fn run(catalog: &Catalog, config: &AuditConfig) -> Self {
        let report = generate_report(catalog);
        let target = config.audit.target_ratio;

        let mut critical = Vec::new();
        for entry in &config.critical {
            let Some(combo) = catalog.get(&entry.key) else {
                warn!(key = %entry.key, "critical combination not in catalog, skipping");
                continue;
            };

            let rating = combo.rating();
            critical.push(CriticalResult {
                label: entry.label.clone(),
                key: entry.key.clone(),
                ratio: combo.ratio,
                level: rating.level,
                status: Status::from_rating(&rating),
            });
        }

        let mut recommendations = Vec::new();
        for key in &config.audit.recommend {
            let Some(combo) = catalog.get(key) else {
                debug!(%key, "recommendation key not in catalog, skipping");
                continue;
            };
            if combo.ratio >= target {
                continue;
            }

            let suggestion = suggest(combo.foreground, combo.background, target);
            recommendations.push(Recommendation {
                name: combo.name.clone(),
                foreground: to_hex(combo.foreground),
                background: to_hex(combo.background),
                ratio: combo.ratio,
                suggested: to_hex(suggestion.color),
                suggested_ratio: suggestion.ratio,
                reached: suggestion.reached,
            });
        }

        let summary = Summary {
            passing: report.passing.len(),
            warnings: report.warnings.len(),
            failing: report.failing.len(),
        };
        info!(
            passing = summary.passing,
            warnings = summary.warnings,
            failing = summary.failing,
            "audit complete"
        );

        Self {
            summary,
            report,
            critical,
            recommendations,
            target_ratio: target,
        }
    }

    /// True when no combination fails outright.
    pub fn exit_ok(&self) -> bool {
        !self.report.has_failures()
    }

    /// Render the console audit.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Audit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(f, "\n{TITLE}")?;
        writeln!(f, "{heavy}")?;

        writeln!(f, "\n📊 Summary:")?;
        writeln!(f, "✅ Passing: {} combinations", self.summary.passing)?;
        writeln!(f, "⚠️  Warnings: {} combinations", self.summary.warnings)?;
        writeln!(f, "❌ Failing: {} combinations", self.summary.failing)?;

        writeln!(f, "\n📋 Detailed Results:")?;
        writeln!(f, "{light}")?;
        for (heading, lines) in [
            ("✅ PASSING (AA or better):", &self.report.passing),
            ("⚠️  WARNINGS (Large text only):", &self.report.warnings),
            ("❌ FAILING (Below AA):", &self.report.failing),
        ] {
            if lines.is_empty() {
                continue;
            }
            writeln!(f, "\n{heading}")?;
            for line in lines {
                writeln!(f, "  {line}")?;
            }
        }

        writeln!(f, "\n🔍 Critical Combinations:")?;
        writeln!(f, "{light}")?;
        for c in &self.critical {
            writeln!(
                f,
                "{} {}: {:.2}:1 ({})",
                c.status.icon(),
                c.label,
                c.ratio,
                c.level
            )?;
        }

        writeln!(f, "\n💡 Recommendations:")?;
        writeln!(f, "{light}")?;
        if self.recommendations.is_empty() {
            writeln!(f, "✨ All critical combinations meet WCAG AA standards!")?;
        } else {
            for rec in &self.recommendations {
                writeln!(f, "{}", rec.message(self.target_ratio))?;
            }
        }

        writeln!(f, "\n{heavy}")?;
        writeln!(f, "📚 WCAG Standards:")?;
        writeln!(f, "  • AA Normal Text: {}:1 minimum", thresholds::AA_NORMAL)?;
        writeln!(f, "  • AA Large Text (18px+): {}:1 minimum", thresholds::AA_LARGE)?;
        writeln!(f, "  • AAA Normal Text: {}:1 minimum", thresholds::AAA_NORMAL)?;
        writeln!(f, "  • AAA Large Text: {}:1 minimum", thresholds::AA_NORMAL)?;
        writeln!(f, "\n✨ Report generated successfully!")
    }
}
