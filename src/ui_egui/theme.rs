//! Bridges between palette colours and egui.

use egui::Color32;

use crate::models::color::RgbaColor;
use crate::services::palette::{shade_color, FlipPalette};

/// How much darker than the card face the window background is.
const BACKGROUND_SHADE: i32 = -6;

pub fn rgba_to_color32(color: RgbaColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

pub fn color32_to_rgba(color: Color32) -> RgbaColor {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    RgbaColor::new(r, g, b, a)
}

/// Window background behind the cards.
pub fn background_color(palette: &FlipPalette) -> Color32 {
    rgba_to_color32(shade_color(palette.face, BACKGROUND_SHADE))
}

/// Apply the palette to egui's global visuals.
pub fn apply_to_context(palette: &FlipPalette, ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    let background = background_color(palette);
    visuals.panel_fill = background;
    visuals.window_fill = rgba_to_color32(palette.face);
    visuals.widgets.inactive.bg_fill = rgba_to_color32(palette.face_bottom);
    visuals.widgets.hovered.bg_fill = rgba_to_color32(palette.face_bottom);
    visuals.selection.bg_fill = rgba_to_color32(palette.digit_top);
    ctx.set_visuals(visuals);
}
