use serde::{Serialize, Serializer};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE:       Self = Self::rgba(0xff, 0xff, 0xff, 0xff);
    pub const RED:         Self = Self::rgba(0xff, 0x00, 0x00, 0xff);
    pub const GREY:        Self = Self::rgba(0x55, 0x55, 0x55, 0xff);
    pub const DARK_RED:    Self = Self::rgba(0x55, 0x00, 0x00, 0xff);
    pub const SHADE:       Self = Self::rgba(0x00, 0x00, 0x00, 0x90); // #00000090
    pub const TRANSPARENT: Self = Self::rgba(0x00, 0x00, 0x00, 0x00);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        match hex.len() {
            6 => Some(Self::rgba(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
                0xff,
            )),
            8 => Some(Self::rgba(
                byte(&hex[0..2])?,
                byte(&hex[2..4])?,
                byte(&hex[4..6])?,
                byte(&hex[6..8])?,
            )),
            _ => None,
        }
    }

    /// `#rrggbbaa`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }

    /// Parse `hex`, warning and falling back to `fallback` when it is malformed.
    pub fn from_hex_or(hex: &str, fallback: Self) -> Self {
        Self::from_hex(hex).unwrap_or_else(|| {
            tracing::warn!("invalid color {hex:?}; using {}", fallback.to_hex());
            fallback
        })
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_rgba() {
        assert_eq!(Color::from_hex("#ff8000"), Some(Color::rgba(0xff, 0x80, 0x00, 0xff)));
        assert_eq!(Color::from_hex("#00000090"), Some(Color::SHADE));
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["ff8000", "#ff80", "#gg0000", "#ff80000", "#ffé000"] {
            assert_eq!(Color::from_hex(bad), None, "{bad}");
        }
    }

    #[test]
    fn hex_round_trip_and_fallback() {
        assert_eq!(Color::RED.to_hex(), "#ff0000ff");
        assert_eq!(Color::from_hex_or("nope", Color::GREY), Color::GREY);
    }
}
