//! Classification of contrast ratios against WCAG conformance thresholds.

use std::fmt;

use clap::ValueEnum;
use palette::Srgb;
use serde::{Deserialize, Serialize, Serializer};

use crate::wcag::contrast_ratio;

/// WCAG thresholds.
pub mod thresholds {
    /// AA for large text
    pub const AA_LARGE: f64 = 3.0;
    /// AA for normal text, AAA for large text
    pub const AA_NORMAL: f64 = 4.5;
    /// AAA for normal text
    pub const AAA_NORMAL: f64 = 7.0;
}

/// Conformance level reached by a ratio, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Fail,
    AaLargeOnly,
    Aa,
    Aaa,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::AaLargeOnly => "AA (large text only)",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Independent pass flags for each text size / level pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Passes {
    pub normal_aa: bool,
    pub normal_aaa: bool,
    pub large_aa: bool,
    pub large_aaa: bool,
}

/// Level plus pass flags for a single ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rating {
    pub level: Level,
    pub passes: Passes,
}

/// Classify a contrast ratio. Boundaries are inclusive.
pub fn classify(ratio: f64) -> Rating {
    let level = if ratio >= thresholds::AAA_NORMAL {
        Level::Aaa
    } else if ratio >= thresholds::AA_NORMAL {
        Level::Aa
    } else if ratio >= thresholds::AA_LARGE {
        Level::AaLargeOnly
    } else {
        Level::Fail
    };

    Rating {
        level,
        passes: Passes {
            normal_aa: ratio >= thresholds::AA_NORMAL,
            normal_aaa: ratio >= thresholds::AAA_NORMAL,
            large_aa: ratio >= thresholds::AA_LARGE,
            large_aaa: ratio >= thresholds::AA_NORMAL,
        },
    }
}

/// Target conformance level.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WcagLevel {
    #[default]
    Aa,
    Aaa,
}

/// Text size class. Large is 18pt, or 14pt bold, and up.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        })
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Large => "large",
        })
    }
}

/// Minimum ratio required for a level at a text size.
pub fn threshold(level: WcagLevel, size: TextSize) -> f64 {
    match (level, size) {
        (WcagLevel::Aa, TextSize::Large) => thresholds::AA_LARGE,
        (WcagLevel::Aa, TextSize::Normal) | (WcagLevel::Aaa, TextSize::Large) => {
            thresholds::AA_NORMAL
        }
        (WcagLevel::Aaa, TextSize::Normal) => thresholds::AAA_NORMAL,
    }
}

/// Whether `fg` on `bg` meets `level` for text of the given size.
pub fn meets_standard(fg: Srgb<u8>, bg: Srgb<u8>, level: WcagLevel, size: TextSize) -> bool {
    contrast_ratio(fg, bg) >= threshold(level, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered() {
        assert!(Level::Fail < Level::AaLargeOnly);
        assert!(Level::AaLargeOnly < Level::Aa);
        assert!(Level::Aa < Level::Aaa);
    }

    #[test]
    fn labels() {
        assert_eq!(classify(21.0).level.to_string(), "AAA");
        assert_eq!(classify(5.0).level.to_string(), "AA");
        assert_eq!(classify(3.5).level.to_string(), "AA (large text only)");
        assert_eq!(classify(1.0).level.to_string(), "Fail");
    }

    #[test]
    fn threshold_table() {
        assert_eq!(threshold(WcagLevel::Aa, TextSize::Large), 3.0);
        assert_eq!(threshold(WcagLevel::Aa, TextSize::Normal), 4.5);
        assert_eq!(threshold(WcagLevel::Aaa, TextSize::Large), 4.5);
        assert_eq!(threshold(WcagLevel::Aaa, TextSize::Normal), 7.0);
    }
}
