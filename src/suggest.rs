//! Foreground adjustment search for failing color pairs.
//!
//! The search shifts all three channels by the same signed amount, so it
//! only ever walks a color toward black or toward white. Hue is not
//! preserved, and against mid-luminance backgrounds the target may be
//! unreachable within the attempt budget. Callers that need a guarantee
//! should check [`Suggestion::reached`].

use palette::Srgb;
use serde::Serialize;
use tracing::debug;

use crate::color::to_hex;
use crate::wcag::{contrast_ratio, relative_luminance};

/// Default target, WCAG AA for normal text.
pub const DEFAULT_TARGET_RATIO: f64 = 4.5;

/// Maximum number of candidates tried, including the unshifted color.
pub const MAX_ATTEMPTS: i32 = 20;

/// Per-attempt channel shift; attempt `i` shifts by `STEP * i`.
pub const STEP: i32 = 10;

/// Outcome of a suggestion search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Suggestion {
    #[serde(serialize_with = "serialize_hex")]
    pub color: Srgb<u8>,
    /// Contrast of `color` against the background
    pub ratio: f64,
    /// Whether `ratio` meets the requested target
    pub reached: bool,
}

fn serialize_hex<S: serde::Serializer>(color: &Srgb<u8>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&to_hex(*color))
}

fn shift(channel: u8, delta: i32) -> u8 {
    (i32::from(channel) + delta).clamp(0, 255) as u8
}

/// Search for a foreground that reaches `target_ratio` against `bg`.
///
/// Returns `fg` unchanged when it already meets the target. Otherwise the
/// best candidate found is returned, even if it falls short.
pub fn suggest(fg: Srgb<u8>, bg: Srgb<u8>, target_ratio: f64) -> Suggestion {
    let current = contrast_ratio(fg, bg);
    if current >= target_ratio {
        return Suggestion {
            color: fg,
            ratio: current,
            reached: true,
        };
    }

    // Light backgrounds need a darker foreground
    let step = if relative_luminance(bg) > 0.5 { -STEP } else { STEP };

    let mut best = fg;
    let mut best_ratio = current;
    let mut attempt = 0;
    while attempt < MAX_ATTEMPTS && best_ratio < target_ratio {
        let delta = step * attempt;
        let candidate = Srgb::new(
            shift(fg.red, delta),
            shift(fg.green, delta),
            shift(fg.blue, delta),
        );
        let ratio = contrast_ratio(candidate, bg);
        if ratio > best_ratio {
            best = candidate;
            best_ratio = ratio;
        }
        attempt += 1;
    }

    debug!(
        fg = %to_hex(fg),
        bg = %to_hex(bg),
        target_ratio,
        attempts = attempt,
        best = %to_hex(best),
        best_ratio,
        "contrast suggestion search finished"
    );

    Suggestion {
        color: best,
        ratio: best_ratio,
        reached: best_ratio >= target_ratio,
    }
}

/// Search for a better foreground, returning only the color.
///
/// See [`suggest`] for the achieved ratio.
///
/// ```
/// use palette::Srgb;
/// use contrast_audit::suggest::{suggest_better_contrast, DEFAULT_TARGET_RATIO};
///
/// let white = Srgb::new(255u8, 255, 255);
/// let grey = Srgb::new(0x99u8, 0x99, 0x99);
/// let darker = suggest_better_contrast(grey, white, DEFAULT_TARGET_RATIO);
/// assert_eq!(darker, Srgb::new(0x71, 0x71, 0x71));
/// ```
pub fn suggest_better_contrast(fg: Srgb<u8>, bg: Srgb<u8>, target_ratio: f64) -> Srgb<u8> {
    suggest(fg, bg, target_ratio).color
}
