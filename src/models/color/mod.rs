// Color model
// Plain RGBA value shared by palettes, settings and the flip-card painter

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    pub fn from_hex_str(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            3 => {
                let channel = |idx: usize| -> Option<u8> {
                    let nibble = u8::from_str_radix(&hex[idx..idx + 1], 16).ok()?;
                    Some(nibble * 17)
                };
                Some(RgbaColor::opaque(channel(0)?, channel(1)?, channel(2)?))
            }
            6 | 8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = if hex.len() == 8 {
                    u8::from_str_radix(&hex[6..8], 16).ok()?
                } else {
                    255
                };
                Some(RgbaColor::new(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Lowercase `#rrggbb`; alpha is dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for RgbaColor {
    fn default() -> Self {
        RgbaColor::new(0, 0, 0, 255)
    }
}
