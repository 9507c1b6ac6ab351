//! Flip-card colour palettes.
//!
//! A palette is plain configuration handed to the painter each frame; the
//! countdown engine never sees colours.

use std::fmt;

use crate::models::color::RgbaColor;
use crate::models::settings::Settings;

/// Fallback produced by [`to_hex`] for colours it cannot read.
pub const FALLBACK_HEX: &str = "#222222";

/// Darkening applied to a custom face colour to get the lower card half.
const FACE_BOTTOM_SHADE: i32 = -14;
/// Darkening applied to a custom digit colour to get the upper digit tint.
const DIGIT_TOP_SHADE: i32 = -30;

/// Captions keep the digit colour only if it reads at least this well
/// against the face.
const LABEL_MIN_CONTRAST: f32 = 3.0;
const LABEL_LIGHT: RgbaColor = RgbaColor::opaque(255, 255, 255);
const LABEL_DARK: RgbaColor = RgbaColor::opaque(0, 0, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipPalette {
    pub face: RgbaColor,
    pub face_bottom: RgbaColor,
    pub digit: RgbaColor,
    pub digit_top: RgbaColor,
}

impl FlipPalette {
    const fn from_rgb(face: u32, face_bottom: u32, digit: u32, digit_top: u32) -> Self {
        Self {
            face: rgb(face),
            face_bottom: rgb(face_bottom),
            digit: rgb(digit),
            digit_top: rgb(digit_top),
        }
    }

    /// Replace the face colour; the lower half follows slightly darker.
    pub fn with_face(mut self, face: RgbaColor) -> Self {
        self.face = face;
        self.face_bottom = shade_color(face, FACE_BOTTOM_SHADE);
        self
    }

    /// Replace the digit colour; the upper tint follows darker.
    pub fn with_digit(mut self, digit: RgbaColor) -> Self {
        self.digit = digit;
        self.digit_top = shade_color(digit, DIGIT_TOP_SHADE);
        self
    }

    /// Colour for the MIN/SEC captions drawn below the cards: the digit
    /// colour when it stands out from the face, otherwise plain white or
    /// black, whichever stands out more.
    pub fn label_color(&self) -> RgbaColor {
        if contrast_ratio(self.digit, self.face) >= LABEL_MIN_CONTRAST {
            self.digit
        } else if contrast_ratio(LABEL_LIGHT, self.face) >= contrast_ratio(LABEL_DARK, self.face)
        {
            LABEL_LIGHT
        } else {
            LABEL_DARK
        }
    }
}

impl Default for FlipPalette {
    fn default() -> Self {
        PalettePreset::Tangerine.palette()
    }
}

/// Preset and colours to show at launch. Custom colours in the config are
/// layered over the named preset and switch the selector to `Custom`.
pub fn startup_palette(settings: &Settings) -> (PalettePreset, FlipPalette) {
    let preset = PalettePreset::from_name(&settings.palette);
    let mut palette = preset.palette();
    if settings.face_color.is_none() && settings.digit_color.is_none() {
        return (preset, palette);
    }

    if let Some(face) = settings.face_color.as_deref() {
        let face = to_hex(face);
        palette.face = hex_color(&face);
        palette.face_bottom = hex_color(&shade(&face, FACE_BOTTOM_SHADE));
    }
    if let Some(digit) = settings.digit_color.as_deref() {
        let digit = to_hex(digit);
        palette.digit = hex_color(&digit);
        palette.digit_top = hex_color(&shade(&digit, DIGIT_TOP_SHADE));
    }
    (PalettePreset::Custom, palette)
}

fn hex_color(hex: &str) -> RgbaColor {
    RgbaColor::from_hex_str(hex).unwrap_or_default()
}

const fn rgb(value: u32) -> RgbaColor {
    RgbaColor::opaque((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PalettePreset {
    Tangerine,
    Juice,
    Indigo,
    Mint,
    Tomato,
    /// Colours picked by hand; selecting it leaves the current palette alone.
    Custom,
}

impl PalettePreset {
    pub const BUILT_IN: [PalettePreset; 5] = [
        PalettePreset::Tangerine,
        PalettePreset::Juice,
        PalettePreset::Indigo,
        PalettePreset::Mint,
        PalettePreset::Tomato,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PalettePreset::Tangerine => "tangerine",
            PalettePreset::Juice => "juice",
            PalettePreset::Indigo => "indigo",
            PalettePreset::Mint => "mint",
            PalettePreset::Tomato => "tomato",
            PalettePreset::Custom => "custom",
        }
    }

    /// Unknown names map to tangerine.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "juice" => PalettePreset::Juice,
            "indigo" => PalettePreset::Indigo,
            "mint" => PalettePreset::Mint,
            "tomato" => PalettePreset::Tomato,
            "custom" => PalettePreset::Custom,
            _ => PalettePreset::Tangerine,
        }
    }

    /// Colours for this preset. `Custom` has none of its own and yields
    /// tangerine; use [`PalettePreset::apply`] to keep hand-picked colours.
    pub fn palette(&self) -> FlipPalette {
        match self {
            PalettePreset::Tangerine | PalettePreset::Custom => {
                FlipPalette::from_rgb(0x2b1e11, 0x4a3a2a, 0xfffef8, 0xffd7a0)
            }
            PalettePreset::Juice => FlipPalette::from_rgb(0x183028, 0x23463c, 0xe8fff9, 0x9ff0d1),
            PalettePreset::Indigo => FlipPalette::from_rgb(0x1f1b3a, 0x322b5e, 0xf1efff, 0xb9b3ff),
            PalettePreset::Mint => FlipPalette::from_rgb(0x10332f, 0x174a46, 0xeafff8, 0xb8fff0),
            PalettePreset::Tomato => FlipPalette::from_rgb(0x2c0f0f, 0x4a1a1a, 0xffecec, 0xffb3b3),
        }
    }

    /// Palette after selecting this preset while `current` is showing.
    pub fn apply(&self, current: FlipPalette) -> FlipPalette {
        match self {
            PalettePreset::Custom => current,
            preset => preset.palette(),
        }
    }
}

impl fmt::Display for PalettePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}

/// Normalise a colour string to `#rrggbb`.
///
/// Accepts `#rgb`, `#rrggbb` and `rgb(r, g, b)` / `rgba(r, g, b, a)`;
/// anything else becomes [`FALLBACK_HEX`].
pub fn to_hex(color: &str) -> String {
    let trimmed = color.trim();
    if trimmed.starts_with('#') {
        return RgbaColor::from_hex_str(trimmed)
            .map(|parsed| parsed.to_hex())
            .unwrap_or_else(|| FALLBACK_HEX.to_string());
    }

    parse_css_rgb(trimmed)
        .map(|parsed| parsed.to_hex())
        .unwrap_or_else(|| FALLBACK_HEX.to_string())
}

fn parse_css_rgb(value: &str) -> Option<RgbaColor> {
    let lower = value.to_ascii_lowercase();
    let body = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))?;

    let mut channels = body
        .split(|c: char| c == ',' || c == ')')
        .map(str::trim)
        .map(|part| part.parse::<u16>().ok().map(|v| v.min(255) as u8));

    let r = channels.next()??;
    let g = channels.next()??;
    let b = channels.next()??;
    Some(RgbaColor::opaque(r, g, b))
}

/// Lighten (positive) or darken (negative) a hex colour by `percent` of
/// full scale on every channel. Unreadable input is shaded from black.
pub fn shade(hex: &str, percent: i32) -> String {
    let base = RgbaColor::from_hex_str(hex).unwrap_or_default();
    shade_color(base, percent).to_hex()
}

pub fn shade_color(color: RgbaColor, percent: i32) -> RgbaColor {
    // Halves round towards positive infinity.
    let delta = (255.0 * percent as f32 / 100.0 + 0.5).floor() as i32;
    let adjust = |channel: u8| -> u8 { (i32::from(channel) + delta).clamp(0, 255) as u8 };
    RgbaColor::new(adjust(color.r), adjust(color.g), adjust(color.b), color.a)
}

fn contrast_ratio(a: RgbaColor, b: RgbaColor) -> f32 {
    let (la, lb) = (luminance(a), luminance(b));
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Perceived brightness in `0.0..=1.0` on linearised sRGB channels.
fn luminance(color: RgbaColor) -> f32 {
    let linear = |channel: u8| {
        let v = f32::from(channel) / 255.0;
        if v <= 0.04045 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(color.r) + 0.7152 * linear(color.g) + 0.0722 * linear(color.b)
}
