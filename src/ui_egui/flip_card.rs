//! Painter for the flip-card digits.
//!
//! Each card is split at a hinge line. While a flip runs, the outgoing upper
//! half folds down onto the hinge during the first half of the animation and
//! the incoming lower half unfolds below it during the second half.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Rounding, Stroke, Vec2};

use super::theme::rgba_to_color32;
use crate::services::countdown::DigitDisplay;
use crate::services::palette::FlipPalette;

/// Length of one flip in seconds.
pub const FLIP_SECONDS: f64 = 0.6;

const CARD_ROUNDING: f32 = 8.0;
const CARD_GAP: f32 = 18.0;
const HINGE_GAP: f32 = 2.0;
const LABEL_HEIGHT: f32 = 22.0;
const CARD_ASPECT: f32 = 0.78;

/// Tracks the flip animation of one card against the display's generation.
#[derive(Debug, Clone, Copy)]
pub struct FlipAnimation {
    generation: u64,
    started_at: Option<f64>,
}

impl FlipAnimation {
    /// Start in sync with `display` so its initial value does not animate.
    pub fn for_display(display: &DigitDisplay) -> Self {
        Self {
            generation: display.generation(),
            started_at: None,
        }
    }

    /// Restart from the beginning whenever a new generation shows up, even
    /// if the previous flip has not finished.
    pub fn observe(&mut self, generation: u64, now: f64) {
        if generation != self.generation {
            self.generation = generation;
            self.started_at = Some(now);
        }
    }

    /// Progress in `0.0..1.0`, or `None` when no flip is running.
    pub fn progress(&self, now: f64) -> Option<f32> {
        let started_at = self.started_at?;
        let t = ((now - started_at) / FLIP_SECONDS).max(0.0);
        (t < 1.0).then_some(t as f32)
    }
}

/// Colours used for one frame of the clock.
pub struct FlipStyle {
    pub face_top: Color32,
    pub face_bottom: Color32,
    pub digit_top: Color32,
    pub digit_bottom: Color32,
    pub label: Color32,
    /// Outline drawn while the completion highlight is on.
    pub highlight: Option<Stroke>,
}

impl FlipStyle {
    pub fn new(palette: &FlipPalette, finishing_phase: Option<f64>) -> Self {
        let highlight = finishing_phase.map(|phase| {
            let pulse = (phase * 3.0) % 1.0;
            let alpha = 255 - (pulse * 255.0) as u8 / 2;
            let accent = palette.digit_top;
            Stroke::new(
                4.0,
                Color32::from_rgba_unmultiplied(accent.r, accent.g, accent.b, alpha),
            )
        });

        Self {
            face_top: rgba_to_color32(palette.face),
            face_bottom: rgba_to_color32(palette.face_bottom),
            digit_top: rgba_to_color32(palette.digit_top),
            digit_bottom: rgba_to_color32(palette.digit),
            label: rgba_to_color32(palette.label_color()),
            highlight,
        }
    }
}

/// Lay out and paint the minutes and seconds cards centered in `area`.
/// Returns true while any flip is still animating.
pub fn paint_clock(
    painter: &Painter,
    area: Rect,
    cards: [(&DigitDisplay, &mut FlipAnimation); 2],
    style: &FlipStyle,
    now: f64,
) -> bool {
    let card_height = (area.height() - LABEL_HEIGHT)
        .min((area.width() - CARD_GAP) / 2.0 / CARD_ASPECT)
        .max(40.0);
    let card_size = Vec2::new(card_height * CARD_ASPECT, card_height);
    let total_width = card_size.x * 2.0 + CARD_GAP;
    let origin = Pos2::new(
        area.center().x - total_width / 2.0,
        area.center().y - (card_height + LABEL_HEIGHT) / 2.0,
    );

    let mut animating = false;
    for (index, (display, animation)) in cards.into_iter().enumerate() {
        let min = origin + Vec2::new(index as f32 * (card_size.x + CARD_GAP), 0.0);
        let rect = Rect::from_min_size(min, card_size);

        animation.observe(display.generation(), now);
        let progress = animation.progress(now);
        animating |= progress.is_some();

        paint_card(painter, rect, display, progress, style);

        painter.text(
            Pos2::new(rect.center().x, rect.bottom() + LABEL_HEIGHT / 2.0 + 2.0),
            Align2::CENTER_CENTER,
            display.label(),
            FontId::proportional(13.0),
            style.label,
        );
    }

    animating
}

fn paint_card(
    painter: &Painter,
    rect: Rect,
    display: &DigitDisplay,
    progress: Option<f32>,
    style: &FlipStyle,
) {
    let hinge = rect.center().y;
    let top = Rect::from_min_max(rect.min, Pos2::new(rect.max.x, hinge - HINGE_GAP / 2.0));
    let bottom = Rect::from_min_max(Pos2::new(rect.min.x, hinge + HINGE_GAP / 2.0), rect.max);
    let font = FontId::monospace(rect.height() * 0.62);
    let faces = display.faces();

    let top_rounding = Rounding {
        nw: CARD_ROUNDING,
        ne: CARD_ROUNDING,
        sw: 0.0,
        se: 0.0,
    };
    let bottom_rounding = Rounding {
        nw: 0.0,
        ne: 0.0,
        sw: CARD_ROUNDING,
        se: CARD_ROUNDING,
    };

    let half = |area: Rect, rounding: Rounding, fill: Color32, text: &str, color: Color32| {
        let clipped = painter.with_clip_rect(area);
        clipped.rect_filled(area, rounding, fill);
        clipped.text(rect.center(), Align2::CENTER_CENTER, text, font.clone(), color);
    };

    // Static upper half always shows the incoming value.
    half(top, top_rounding, style.face_top, &faces.top, style.digit_top);

    match progress {
        None => {
            half(
                bottom,
                bottom_rounding,
                style.face_bottom,
                &faces.back_bottom,
                style.digit_bottom,
            );
        }
        Some(t) if t < 0.5 => {
            // Outgoing value stays on the lower half until the flap lands.
            half(bottom, bottom_rounding, style.face_bottom, &faces.bottom, style.digit_bottom);
            let fold = 1.0 - t * 2.0;
            let flap = Rect::from_min_max(
                Pos2::new(top.min.x, top.max.y - top.height() * fold),
                top.max,
            );
            half(flap, top_rounding, shade(style.face_top, fold), &faces.back, style.digit_top);
        }
        Some(t) => {
            half(bottom, bottom_rounding, style.face_bottom, &faces.bottom, style.digit_bottom);
            let unfold = (t - 0.5) * 2.0;
            let flap = Rect::from_min_max(
                bottom.min,
                Pos2::new(bottom.max.x, bottom.min.y + bottom.height() * unfold),
            );
            half(
                flap,
                bottom_rounding,
                shade(style.face_bottom, unfold),
                &faces.back_bottom,
                style.digit_bottom,
            );
        }
    }

    if let Some(stroke) = style.highlight {
        painter.rect_stroke(rect, Rounding::same(CARD_ROUNDING), stroke);
    }
}

/// Darken a flap as it turns edge-on.
fn shade(color: Color32, facing: f32) -> Color32 {
    let factor = 0.6 + 0.4 * facing.clamp(0.0, 1.0);
    let scale = |channel: u8| (channel as f32 * factor).round() as u8;
    Color32::from_rgb(scale(color.r()), scale(color.g()), scale(color.b()))
}
