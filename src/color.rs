use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::num::ParseIntError;
use std::ops::Index;
use std::str::FromStr;

use thiserror::Error;

/// An sRGB color with components in `[0, 1]`.
///
/// Parsed from and written as `#rgb` or `#rrggbb` hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color([f64; 3]);

impl Color {
    pub const GRAY: Color = Color([128. / 255., 128. / 255., 128. / 255.]);
    pub const RED: Color = Color([1., 0., 0.]);
    pub const NAVY: Color = Color([0., 0., 128. / 255.]);
    pub const WHITE: Color = Color([1., 1., 1.]);
}

impl Index<usize> for Color {
    type Output = f64;
    fn index(&'_ self, i: usize) -> &'_ Self::Output {
        &self.0[i]
    }
}

impl From<[f64; 3]> for Color {
    fn from(color: [f64; 3]) -> Self {
        Self(color)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}",
            (self[0] * 255.).round() as u8,
            (self[1] * 255.).round() as u8,
            (self[2] * 255.).round() as u8
        )
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[derive(Debug, Error)]
pub enum ColorParseError {
    #[error("{0}")]
    Int(#[from] ParseIntError),
    #[error("Unexpected length {0} should be 3 or 6")]
    Length(usize),
    #[error("Color should be preceded by a pound symbol")]
    MissingPound,
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let hex = input
            .strip_prefix('#')
            .ok_or(ColorParseError::MissingPound)?;
        let parsed = u32::from_str_radix(hex, 16)?;
        let mut res = [0.; 3];
        match hex.len() {
            3 => {
                for (i, res_i) in res.iter_mut().enumerate() {
                    // Hex shorthand: convert 0xFFF into 1.0, 1.0, 1.0
                    let digit = (parsed >> (8 - 4 * i) & 0xF) as u8;
                    *res_i = (digit << 4 | digit) as f64 / 255.;
                }
            }
            6 => {
                for (i, res_i) in res.iter_mut().enumerate() {
                    *res_i = ((parsed >> (16 - 8 * i) & 0xFF) as u8) as f64 / 255.;
                }
            }
            other => return Err(ColorParseError::Length(other)),
        }
        Ok(Self(res))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, ColorParseError};

    #[test]
    fn test_parse_long_hex() {
        let color: Color = "#000080".parse().unwrap();
        assert_eq!(color, Color::NAVY);
        assert_eq!(color.to_string(), "#000080");
    }

    #[test]
    fn test_parse_short_hex() {
        let color: Color = "#f00".parse().unwrap();
        assert_eq!(color, Color::RED);
        assert_eq!("#888".parse::<Color>().unwrap().to_string(), "#888888");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "808080".parse::<Color>(),
            Err(ColorParseError::MissingPound)
        ));
        assert!(matches!(
            "#8080".parse::<Color>(),
            Err(ColorParseError::Length(4))
        ));
        assert!(matches!(
            "#gggggg".parse::<Color>(),
            Err(ColorParseError::Int(_))
        ));
    }

    #[test]
    fn test_serde_uses_hex() {
        let json = serde_json::to_string(&Color::GRAY).unwrap();
        assert_eq!(json, "\"#808080\"");
        assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), Color::GRAY);
    }
}
