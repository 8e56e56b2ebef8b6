//! Named foreground/background pairs tracked by the audit.
//!
//! Ratios are computed once when the catalog is built. The catalog is
//! immutable afterwards and is passed by reference from `main`.

use palette::Srgb;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::color::{parse_hex_or_black, to_hex};
use crate::rating::{Rating, classify};
use crate::tokens::{
    ACCENT, ERROR, GREY_50, GREY_60, GREY_70, GREY_90, INFO, PRIMARY, SECONDARY, SUCCESS,
    WARNING, WHITE,
};
use crate::wcag::contrast_ratio;

/// Built-in combinations as `(name, foreground, background)`.
pub const BUILTIN_COMBINATIONS: [(&str, &str, &str); 16] = [
    // Primary
    ("primaryOnWhite", PRIMARY, WHITE),
    ("whiteOnPrimary", WHITE, PRIMARY),
    // Secondary
    ("secondaryOnWhite", SECONDARY, WHITE),
    ("primaryOnSecondary", PRIMARY, SECONDARY),
    // Accent
    ("accentOnWhite", ACCENT, WHITE),
    ("whiteOnAccent", WHITE, ACCENT),
    // Text
    ("textPrimaryOnWhite", GREY_90, WHITE),
    ("textSecondaryOnWhite", GREY_60, WHITE),
    ("textTertiaryOnWhite", GREY_50, WHITE),
    // Grey
    ("grey60OnWhite", GREY_60, WHITE),
    ("grey70OnWhite", GREY_70, WHITE),
    ("grey90OnWhite", GREY_90, WHITE),
    // Semantic
    ("successOnWhite", SUCCESS, WHITE),
    ("errorOnWhite", ERROR, WHITE),
    ("warningOnWhite", WARNING, WHITE),
    ("infoOnWhite", INFO, WHITE),
];

fn serialize_hex<S: Serializer>(color: &Srgb<u8>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_hex(*color))
}

/// A named color pair with its contrast ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorCombination {
    pub name: String,
    #[serde(serialize_with = "serialize_hex")]
    pub foreground: Srgb<u8>,
    #[serde(serialize_with = "serialize_hex")]
    pub background: Srgb<u8>,
    pub ratio: f64,
}

impl ColorCombination {
    pub fn new(name: impl Into<String>, foreground: Srgb<u8>, background: Srgb<u8>) -> Self {
        Self {
            name: name.into(),
            foreground,
            background,
            ratio: contrast_ratio(foreground, background),
        }
    }

    /// Build from hex strings. Malformed hex becomes black.
    pub fn from_hex(name: impl Into<String>, foreground: &str, background: &str) -> Self {
        Self::new(
            name,
            parse_hex_or_black(foreground),
            parse_hex_or_black(background),
        )
    }

    pub fn rating(&self) -> Rating {
        classify(self.ratio)
    }
}

/// Ordered, read-only table of combinations.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    combinations: Vec<ColorCombination>,
}

impl Catalog {
    /// Build the built-in design-system catalog.
    pub fn builtin() -> Self {
        Self::build(true, std::iter::empty())
    }

    /// Build a catalog from the built-in table (optionally) followed by `extra`.
    ///
    /// A later entry whose name is already present replaces the earlier one
    /// in place, so catalog order follows first appearance.
    pub fn build(
        include_builtin: bool,
        extra: impl IntoIterator<Item = ColorCombination>,
    ) -> Self {
        let builtin = include_builtin
            .then(|| {
                BUILTIN_COMBINATIONS
                    .iter()
                    .map(|(name, fg, bg)| ColorCombination::from_hex(*name, fg, bg))
            })
            .into_iter()
            .flatten();

        let mut combinations: Vec<ColorCombination> = Vec::new();
        for combo in builtin.chain(extra) {
            match combinations.iter_mut().find(|c| c.name == combo.name) {
                Some(existing) => *existing = combo,
                None => combinations.push(combo),
            }
        }

        debug!(count = combinations.len(), include_builtin, "built catalog");
        Self { combinations }
    }

    pub fn get(&self, name: &str) -> Option<&ColorCombination> {
        self.combinations.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorCombination> {
        self.combinations.iter()
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ColorCombination;
    type IntoIter = std::slice::Iter<'a, ColorCombination>;

    fn into_iter(self) -> Self::IntoIter {
        self.combinations.iter()
    }
}
