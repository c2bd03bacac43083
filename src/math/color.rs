use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Packed 32-bit pixel color.
///
/// Byte 0 (least significant) is red, byte 1 green, byte 2 blue and byte 3
/// alpha. Alpha is carried in memory but never written to disk.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x0000_0000);
    pub const WHITE: Color = Color(0x00FF_FFFF);

    /// Build a color from channels, alpha left at zero
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((r as u32) | ((g as u32) << 8) | ((b as u32) << 16))
    }

    pub const fn r(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    pub const fn b(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    pub const fn a(self) -> u8 {
        ((self.0 >> 24) & 0xFF) as u8
    }

    /// The three bytes persisted for this pixel
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }

    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Parse `0xAABBGGRR` (raw packed value), `#RRGGBB` (channel order) or a
    /// plain decimal packed value. Signs and inner whitespace are rejected.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            return parse_digits(hex, 16).map(Self);
        }
        if let Some(hex) = text.strip_prefix('#') {
            if hex.len() != 6 {
                return None;
            }
            let rgb = parse_digits(hex, 16)?;
            return Some(Self::from_rgb(
                (rgb >> 16) as u8,
                (rgb >> 8) as u8,
                rgb as u8,
            ));
        }
        parse_digits(text, 10).map(Self)
    }
}

/// `from_str_radix` without its leading `+`/`-` tolerance
fn parse_digits(digits: &str, radix: u32) -> Option<u32> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u32::from_str_radix(digits, radix).ok()
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Self(packed)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// Scene files may spell colors as plain numbers or as hex strings
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Packed(u32),
    Text(String),
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match ColorRepr::deserialize(deserializer)? {
            ColorRepr::Packed(packed) => Ok(Color(packed)),
            ColorRepr::Text(text) => Color::parse(&text)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid color: {text:?}"))),
        }
    }
}
