//! Hex color decoding (`#RRGGBB`, `RRGGBB`, `#RGB`, `RGB`).

use crate::color::Rgb8;
use crate::error::{PurgeError, malformed};

/// Decode a hex color string.
///
/// Any number of leading `#` are stripped. Three-digit shorthand is expanded
/// by doubling every digit (`F80` → `FF8800`). Only ASCII hex digits are
/// accepted; surrounding whitespace is an error.
pub fn parse_hex(input: &str) -> Result<Rgb8, PurgeError> {
    let digits = input.trim_start_matches('#');

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed(input, "contains non-hex characters"));
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(malformed(input, "expected 3 or 6 hex digits")),
    };

    let value = u32::from_str_radix(&expanded, 16)
        .map_err(|_| malformed(input, "contains non-hex characters"))?;

    Ok(Rgb8::new(
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    ))
}
