use std::str::FromStr;

use thiserror::Error;

use crate::{Color, named::named_color};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex color length {0}, expected #RGB, #RGBA, #RRGGBB or #RRGGBBAA")]
    InvalidLength(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidHex(char),
    #[error("unknown color name {0:?}")]
    UnknownName(String),
}

/// Parse a color from text.
///
/// The allowed formats are:
/// * `#RGB`
/// * `#RGBA`
/// * `#RRGGBB`
/// * `#RRGGBBAA`
/// * an SVG color name such as `steelblue`
///
/// Hex digits and names are case-insensitive. Surrounding whitespace is
/// ignored.
pub fn parse_color(text: &str) -> Result<Color, ColorParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ColorParseError::Empty);
    }

    match text.strip_prefix('#') {
        Some(digits) => parse_hex(digits),
        None => named_color(text).ok_or_else(|| ColorParseError::UnknownName(text.to_string())),
    }
}

fn parse_hex(digits: &str) -> Result<Color, ColorParseError> {
    let len = digits.chars().count();
    if !matches!(len, 3 | 4 | 6 | 8) {
        return Err(ColorParseError::InvalidLength(len + 1));
    }

    let n = digits
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|v| v as u8)
                .ok_or(ColorParseError::InvalidHex(c))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let short = |v: u8| v * 16 + v;
    let long = |hi: u8, lo: u8| (hi << 4) | lo;

    Ok(match n.as_slice() {
        &[r, g, b] => Color::rgb(short(r), short(g), short(b)),
        &[r, g, b, a] => Color::rgba(short(r), short(g), short(b), short(a)),
        &[r1, r0, g1, g0, b1, b0] => Color::rgb(long(r1, r0), long(g1, g0), long(b1, b0)),
        &[r1, r0, g1, g0, b1, b0, a1, a0] => Color::rgba(
            long(r1, r0),
            long(g1, g0),
            long(b1, b0),
            long(a1, a0),
        ),
        _ => return Err(ColorParseError::InvalidLength(len + 1)),
    })
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}
