//! WCAG 2.x relative luminance and contrast ratio.

use palette::Srgb;

use crate::color::parse_hex_or_black;

/// Luminance coefficients for sRGB primaries
const COEF_R: f64 = 0.2126;
const COEF_G: f64 = 0.7152;
const COEF_B: f64 = 0.0722;

/// Linear segment cutoff of the sRGB transfer curve, as written in WCAG 2.x
const LINEAR_CUTOFF: f64 = 0.03928;

/// Flare term added to both luminances
const FLARE: f64 = 0.05;

/// Lowest possible contrast ratio (identical colors)
pub const MIN_RATIO: f64 = 1.0;
/// Highest possible contrast ratio (black on white)
pub const MAX_RATIO: f64 = 21.0;

/// Linearize a single 8-bit sRGB channel.
fn srgb_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= LINEAR_CUTOFF {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of an sRGB color, in `[0, 1]`.
pub fn relative_luminance(color: Srgb<u8>) -> f64 {
    COEF_R * srgb_to_linear(color.red)
        + COEF_G * srgb_to_linear(color.green)
        + COEF_B * srgb_to_linear(color.blue)
}

/// Contrast ratio from two pre-computed luminance values.
///
/// Order does not matter; the lighter value is always the numerator.
pub fn contrast_from_luminances(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + FLARE) / (darker + FLARE)
}

/// WCAG contrast ratio between two colors, in `[1, 21]`.
///
/// # Example
///
/// ```
/// use palette::Srgb;
/// use contrast_audit::wcag::contrast_ratio;
///
/// let black = Srgb::new(0u8, 0, 0);
/// let white = Srgb::new(255u8, 255, 255);
/// assert!((contrast_ratio(black, white) - 21.0).abs() < 1e-6);
/// assert_eq!(contrast_ratio(black, white), contrast_ratio(white, black));
/// ```
pub fn contrast_ratio(fg: Srgb<u8>, bg: Srgb<u8>) -> f64 {
    contrast_from_luminances(relative_luminance(fg), relative_luminance(bg))
}

/// Contrast ratio between two hex strings.
///
/// Malformed input is treated as black.
pub fn contrast_ratio_hex(fg: &str, bg: &str) -> f64 {
    contrast_ratio(parse_hex_or_black(fg), parse_hex_or_black(bg))
}
