//! Storefront design tokens.
//!
//! Hex values of the brand, grey and semantic palettes. The built-in audit
//! catalog is composed from these.

pub const PRIMARY: &str = "#00363d";
pub const PRIMARY_HOVER: &str = "#002329";
pub const PRIMARY_LIGHT: &str = "#004d56";
pub const SECONDARY: &str = "#c6dcdf";
pub const SECONDARY_DARK: &str = "#a5c4c8";
pub const SECONDARY_LIGHT: &str = "#e0eef0";
pub const ACCENT: &str = "#ecb157";
pub const ACCENT_HOVER: &str = "#d99c3f";
pub const ACCENT_LIGHT: &str = "#f5c778";

pub const WHITE: &str = "#FFFFFF";
pub const GREY_50: &str = "#999999";
pub const GREY_60: &str = "#666666";
pub const GREY_70: &str = "#4D4D4D";
pub const GREY_90: &str = "#1A1A1A";

pub const SUCCESS: &str = "#10B981";
pub const WARNING: &str = "#F59E0B";
pub const ERROR: &str = "#EF4444";
pub const INFO: &str = "#3B82F6";

/// Every named token, in palette order.
pub const DESIGN_TOKENS: &[(&str, &str)] = &[
    ("primary", PRIMARY),
    ("primary-hover", PRIMARY_HOVER),
    ("primary-light", PRIMARY_LIGHT),
    ("secondary", SECONDARY),
    ("secondary-dark", SECONDARY_DARK),
    ("secondary-light", SECONDARY_LIGHT),
    ("accent", ACCENT),
    ("accent-hover", ACCENT_HOVER),
    ("accent-light", ACCENT_LIGHT),
    ("grey-0", WHITE),
    ("grey-5", "#FAFAFA"),
    ("grey-10", "#F6F6F6"),
    ("grey-15", "#F0F0F0"),
    ("grey-20", "#E0E0E0"),
    ("grey-30", "#CCCCCC"),
    ("grey-40", "#B3B3B3"),
    ("grey-50", GREY_50),
    ("grey-60", GREY_60),
    ("grey-70", GREY_70),
    ("grey-80", "#333333"),
    ("grey-90", GREY_90),
    ("grey-95", "#0D0D0D"),
    ("grey-100", "#000000"),
    ("success", SUCCESS),
    ("success-light", "#D1FAE5"),
    ("success-dark", "#059669"),
    ("warning", WARNING),
    ("warning-light", "#FEF3C7"),
    ("warning-dark", "#D97706"),
    ("error", ERROR),
    ("error-light", "#FEE2E2"),
    ("error-dark", "#DC2626"),
    ("info", INFO),
    ("info-light", "#DBEAFE"),
    ("info-dark", "#2563EB"),
];

/// Look up a token's hex value by name (case-insensitive).
pub fn lookup(name: &str) -> Option<&'static str> {
    DESIGN_TOKENS
        .iter()
        .find(|(token, _)| token.eq_ignore_ascii_case(name))
        .map(|(_, hex)| *hex)
}
