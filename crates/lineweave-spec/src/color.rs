//! Hex color newtype.
//!
//! Colors travel through the system as `#rrggbb` strings at the edges and
//! as packed RGB bytes internally. Serialization uses the string form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error produced when parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("hex color must be 6 hex digits with an optional leading '#', got {0:?}")]
    InvalidFormat(String),
}

/// An opaque RGB color, printed and parsed as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor([u8; 3]);

impl HexColor {
    /// Create a color from individual channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Create a color from a packed `0xrrggbb` literal.
    pub const fn from_u32(rgb: u32) -> Self {
        Self([(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8])
    }

    /// RGB channels in order.
    pub const fn channels(&self) -> [u8; 3] {
        self.0
    }

    pub const fn r(&self) -> u8 {
        self.0[0]
    }

    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    pub const fn b(&self) -> u8 {
        self.0[2]
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

impl FromStr for HexColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidFormat(s.to_string()));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ParseColorError::InvalidFormat(s.to_string()))
        };
        Ok(Self([parse(0..2)?, parse(2..4)?, parse(4..6)?]))
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_with_and_without_hash() {
        let a: HexColor = "#dc202e".parse().unwrap();
        let b: HexColor = "dc202e".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.channels(), [0xdc, 0x20, 0x2e]);
    }

    #[test]
    fn test_display_round_trip() {
        let color = HexColor::from_u32(0x040b2d);
        let parsed: HexColor = color.to_string().parse().unwrap();
        assert_eq!(color, parsed);
        assert_eq!(color.to_string(), "#040b2d");
    }

    #[test]
    fn test_invalid_strings_rejected() {
        assert!("#fff".parse::<HexColor>().is_err());
        assert!("#gggggg".parse::<HexColor>().is_err());
        assert!("".parse::<HexColor>().is_err());
        assert!("#dc202e0".parse::<HexColor>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let color = HexColor::new(0xff, 0x48, 0xe6);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#ff48e6\"");
        let back: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }
}
