//! Hex color parsing for material inputs.
//!
//! Color pickers hand out `#rrggbb` strings. Base colors want them on a 0-1
//! scale, emissive colors keep the raw 0-255 channel values.

use glint_math::Color;
use thiserror::Error;

/// Errors that can occur while parsing a hex color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Expected 6 hex digits, got {0} characters")]
    InvalidLength(usize),

    #[error("Invalid hex digits in color: {0}")]
    InvalidDigits(String),
}

pub type ColorResult<T> = Result<T, ColorParseError>;

/// Parse `#rrggbb` (leading `#` optional) into its byte channels.
pub fn parse_hex_color(hex: &str) -> ColorResult<[u8; 3]> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 {
        return Err(ColorParseError::InvalidLength(digits.len()));
    }

    // from_str_radix alone would accept a leading sign
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidDigits(hex.to_string()));
    }
    let packed = u32::from_str_radix(digits, 16)
        .map_err(|_| ColorParseError::InvalidDigits(hex.to_string()))?;

    Ok([
        ((packed >> 16) & 0xff) as u8,
        ((packed >> 8) & 0xff) as u8,
        (packed & 0xff) as u8,
    ])
}

/// Parse a hex color into 0-1 channels (base/albedo convention).
pub fn hex_to_unit_color(hex: &str) -> ColorResult<Color> {
    Ok(hex_to_raw_color(hex)? / 255.0)
}

/// Parse a hex color into raw 0-255 channels (emissive convention).
pub fn hex_to_raw_color(hex: &str) -> ColorResult<Color> {
    let [r, g, b] = parse_hex_color(hex)?;
    Ok(Color::new(r as f64, g as f64, b as f64))
}
