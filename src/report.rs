//! Bucketed pass/warn/fail report over a catalog.

use serde::Serialize;

use crate::catalog::{Catalog, ColorCombination};
use crate::rating::Rating;

/// Which report bucket a rating falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// AA for all text
    Pass,
    /// AA for large text only
    Warn,
    Fail,
}

impl Status {
    pub fn from_rating(rating: &Rating) -> Self {
        if rating.passes.normal_aa {
            Self::Pass
        } else if rating.passes.large_aa {
            Self::Warn
        } else {
            Self::Fail
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Pass => "✅",
            Self::Warn => "⚠️",
            Self::Fail => "❌",
        }
    }
}

/// Human-readable report lines grouped by status, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContrastReport {
    pub passing: Vec<String>,
    pub warnings: Vec<String>,
    pub failing: Vec<String>,
}

impl ContrastReport {
    pub fn has_failures(&self) -> bool {
        !self.failing.is_empty()
    }

    pub fn total(&self) -> usize {
        self.passing.len() + self.warnings.len() + self.failing.len()
    }
}

fn report_line(combo: &ColorCombination, status: Status) -> String {
    let detail = match status {
        Status::Pass => "Passes AA for all text",
        Status::Warn => "Only passes AA for large text",
        Status::Fail => "Fails WCAG standards",
    };
    format!(
        "{} {}: {:.2}:1 ({})",
        status.icon(),
        combo.name,
        combo.ratio,
        detail
    )
}

/// Classify every combination in the catalog.
pub fn generate_report(catalog: &Catalog) -> ContrastReport {
    let mut report = ContrastReport::default();

    for combo in catalog {
        let status = Status::from_rating(&combo.rating());
        let line = report_line(combo, status);
        match status {
            Status::Pass => report.passing.push(line),
            Status::Warn => report.warnings.push(line),
            Status::Fail => report.failing.push(line),
        }
    }

    report
}
