//! 24-bit RGB colour values.

use crate::error::ParseColorError;
use std::fmt;
use std::str::FromStr;

/// An opaque 24-bit RGB colour.
///
/// Displays and parses as `#rrggbb`. Parsing is case-insensitive; the
/// three-digit shorthand is not accepted.
///
/// # Examples
///
/// ```
/// use antgrid_core::Color;
///
/// let c: Color = "#39D353".parse().unwrap();
/// assert_eq!(c, Color::rgb(0x39, 0xd3, 0x53));
/// assert_eq!(c.to_string(), "#39d353");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(u32);

impl Color {
    /// Build a colour from its red, green, and blue channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Build a colour from a packed `0xRRGGBB` value. Bits above 24 are dropped.
    pub const fn from_u32(packed: u32) -> Self {
        Self(packed & 0x00ff_ffff)
    }

    /// The packed `0xRRGGBB` value.
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Red, green, and blue channels.
    pub const fn channels(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(ParseColorError::MissingHash)?;
        if digits.len() != 6 {
            return Err(ParseColorError::BadLength { len: digits.len() });
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit {
                input: s.to_string(),
            });
        }
        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| ParseColorError::InvalidDigit {
                input: s.to_string(),
            })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_lower_and_upper_case() {
        assert_eq!("#00ff00".parse::<Color>().unwrap(), Color::rgb(0, 255, 0));
        assert_eq!("#00FF00".parse::<Color>().unwrap(), Color::rgb(0, 255, 0));
    }

    #[test]
    fn parse_rejects_malformed() {
        assert_eq!(
            "00ff00".parse::<Color>(),
            Err(ParseColorError::MissingHash)
        );
        assert_eq!(
            "#0f0".parse::<Color>(),
            Err(ParseColorError::BadLength { len: 3 })
        );
        assert!(matches!(
            "#00gg00".parse::<Color>(),
            Err(ParseColorError::InvalidDigit { .. })
        ));
        // A leading sign would be accepted by from_str_radix.
        assert!("#+12345".parse::<Color>().is_err());
    }

    #[test]
    fn channels_unpack() {
        assert_eq!(Color::from_u32(0x161b22).channels(), (0x16, 0x1b, 0x22));
        assert_eq!(Color::from_u32(0xff12_3456).to_u32(), 0x12_3456);
    }

    proptest! {
        #[test]
        fn display_parse_roundtrip(packed in 0u32..=0x00ff_ffff) {
            let c = Color::from_u32(packed);
            prop_assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
        }
    }
}
