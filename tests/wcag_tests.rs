use approx::assert_relative_eq;
use contrast_audit::color::parse_hex_or_black;
use contrast_audit::wcag::{
    contrast_from_luminances, contrast_ratio, contrast_ratio_hex, relative_luminance,
};
use palette::Srgb;

/// A spread of colors covering greys, primaries and the brand palette.
fn sample_colors() -> Vec<Srgb<u8>> {
    let mut colors: Vec<Srgb<u8>> = (0u8..=255)
        .step_by(17)
        .map(|i| Srgb::new(i, i.wrapping_mul(97), i.wrapping_mul(193)))
        .collect();
    colors.extend(
        [
            "#00363d", "#c6dcdf", "#ecb157", "#1A1A1A", "#666666", "#10B981", "#EF4444", "#FFFFFF",
        ]
            .iter()
            .map(|hex| parse_hex_or_black(hex)),
    );
    colors
}

#[test]
fn test_luminance_extremes() {
    assert_relative_eq!(relative_luminance(Srgb::new(0, 0, 0)), 0.0);
    assert_relative_eq!(
        relative_luminance(Srgb::new(255, 255, 255)),
        1.0,
        epsilon = 1e-9
    );
}

#[test]
fn test_luminance_channel_weights() {
    assert_relative_eq!(
        relative_luminance(Srgb::new(255, 0, 0)),
        0.2126,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        relative_luminance(Srgb::new(0, 255, 0)),
        0.7152,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        relative_luminance(Srgb::new(0, 0, 255)),
        0.0722,
        epsilon = 1e-9
    );
}

#[test]
fn test_luminance_linear_segment() {
    // 10/255 is below the 0.03928 cutoff, so it is divided by 12.92
    let expected = (10.0 / 255.0) / 12.92;
    assert_relative_eq!(
        relative_luminance(Srgb::new(10, 10, 10)),
        expected,
        epsilon = 1e-12
    );
}

#[test]
fn test_black_on_white_is_21() {
    let ratio = contrast_ratio(Srgb::new(0, 0, 0), Srgb::new(255, 255, 255));
    assert_relative_eq!(ratio, 21.0, epsilon = 1e-6);
}

#[test]
fn test_identity_is_one() {
    for color in sample_colors() {
        assert_relative_eq!(contrast_ratio(color, color), 1.0);
    }
}

#[test]
fn test_symmetry_and_range() {
    let colors = sample_colors();
    for &a in &colors {
        for &b in &colors {
            let ab = contrast_ratio(a, b);
            let ba = contrast_ratio(b, a);
            assert_eq!(ab, ba, "ratio not symmetric for {a:?} / {b:?}");
            assert!((1.0..=21.0 + 1e-9).contains(&ab), "ratio {ab} out of range");
        }
    }
}

#[test]
fn test_only_black_white_reaches_max() {
    let colors = sample_colors();
    for &a in &colors {
        for &b in &colors {
            let is_black_white = (a == Srgb::new(0, 0, 0) && b == Srgb::new(255, 255, 255))
                || (b == Srgb::new(0, 0, 0) && a == Srgb::new(255, 255, 255));
            if !is_black_white {
                assert!(contrast_ratio(a, b) < 21.0 - 1e-6);
            }
        }
    }
}

#[test]
fn test_from_luminances_is_order_independent() {
    assert_eq!(
        contrast_from_luminances(0.2, 0.8),
        contrast_from_luminances(0.8, 0.2)
    );
    assert_relative_eq!(contrast_from_luminances(1.0, 0.0), 21.0, epsilon = 1e-9);
}

#[test]
fn test_known_pairs() {
    // Reference values from WebAIM's contrast checker
    assert_relative_eq!(contrast_ratio_hex("#767676", "#ffffff"), 4.54, epsilon = 0.01);
    assert_relative_eq!(contrast_ratio_hex("#00363d", "#FFFFFF"), 13.17, epsilon = 0.01);
    assert_relative_eq!(contrast_ratio_hex("#666666", "#FFFFFF"), 5.74, epsilon = 0.01);
}

#[test]
fn test_white_on_warm_gold_fails_normal_aa() {
    let ratio = contrast_ratio_hex("#FFFFFF", "#ecb157");
    assert!(ratio < 4.5);
    assert_relative_eq!(ratio, 1.91, epsilon = 0.01);
}

#[test]
fn test_near_black_text_exceeds_12() {
    let ratio = contrast_ratio_hex("#1A1A1A", "#FFFFFF");
    assert!(ratio > 12.0);
}

#[test]
fn test_malformed_hex_is_black() {
    assert_eq!(
        contrast_ratio_hex("zzz", "#ffffff"),
        contrast_ratio_hex("#000000", "#ffffff")
    );
}
