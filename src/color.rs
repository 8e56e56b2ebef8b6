//! Hex color parsing.
//!
//! The engine only understands six-digit hex (`#rrggbb` or `rrggbb`). Inputs in
//! other CSS formats are handled at the CLI boundary via `csscolorparser`.

use std::fmt;

use palette::Srgb;

/// Error returned by [`parse_hex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Input was empty (or only `#`)
    Empty,
    /// Digit count other than six
    InvalidLength(usize),
    /// Non-hex character
    InvalidDigit(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty color string"),
            Self::InvalidLength(n) => write!(f, "expected 6 hex digits, found {}", n),
            Self::InvalidDigit(c) => write!(f, "invalid hex digit '{}'", c),
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Parse a six-digit hex color with an optional leading `#`.
///
/// Shorthand (`#fff`), named colors and functional syntax are rejected.
///
/// ```
/// use contrast_audit::color::parse_hex;
///
/// let teal = parse_hex("#00363d").unwrap();
/// assert_eq!((teal.red, teal.green, teal.blue), (0, 54, 61));
/// assert!(parse_hex("#fff").is_err());
/// ```
pub fn parse_hex(input: &str) -> Result<Srgb<u8>, ParseColorError> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.is_empty() {
        return Err(ParseColorError::Empty);
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidDigit(bad));
    }
    if digits.len() != 6 {
        return Err(ParseColorError::InvalidLength(digits.len()));
    }

    // All six bytes are ASCII hex digits at this point
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
    match (channel(0), channel(2), channel(4)) {
        (Ok(r), Ok(g), Ok(b)) => Ok(Srgb::new(r, g, b)),
        _ => Err(ParseColorError::InvalidLength(digits.len())),
    }
}

/// Parse a hex color, falling back to black on malformed input.
///
/// Callers cannot distinguish black from unparseable input. Use [`parse_hex`]
/// where that matters.
pub fn parse_hex_or_black(input: &str) -> Srgb<u8> {
    parse_hex(input).unwrap_or_else(|err| {
        tracing::debug!(input, %err, "unparseable color, using black");
        Srgb::new(0, 0, 0)
    })
}

/// Format a color as lowercase `#rrggbb`.
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}
