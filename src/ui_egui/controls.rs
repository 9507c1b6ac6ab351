//! Minute/second inputs and the start, pause and reset buttons.

use egui::{RichText, TextEdit};

use crate::services::countdown::CountdownCommand;

const INPUT_WIDTH: f32 = 38.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Countdown(CountdownCommand),
    OpenSettings,
}

/// Render the control bar. Returns the button pressed this frame, if any.
pub fn render_controls(
    ui: &mut egui::Ui,
    minutes_input: &mut String,
    seconds_input: &mut String,
    running: bool,
) -> Option<ControlAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label("Min");
        ui.add_enabled(
            !running,
            TextEdit::singleline(minutes_input)
                .desired_width(INPUT_WIDTH)
                .char_limit(3),
        );
        ui.label("Sec");
        ui.add_enabled(
            !running,
            TextEdit::singleline(seconds_input)
                .desired_width(INPUT_WIDTH)
                .char_limit(3),
        );

        ui.separator();

        if ui
            .add_enabled(!running, egui::Button::new("▶ Start"))
            .on_hover_text("Start (Space)")
            .clicked()
        {
            action = Some(ControlAction::Countdown(CountdownCommand::Start));
        }
        if ui
            .add_enabled(running, egui::Button::new("⏸ Pause"))
            .on_hover_text("Pause (Space)")
            .clicked()
        {
            action = Some(ControlAction::Countdown(CountdownCommand::Pause));
        }
        if ui
            .button("↺ Reset")
            .on_hover_text("Reload the inputs (R)")
            .clicked()
        {
            action = Some(ControlAction::Countdown(CountdownCommand::Reset));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(RichText::new("⚙").size(16.0))
                .on_hover_text("Colors")
                .clicked()
            {
                action = Some(ControlAction::OpenSettings);
            }
        });
    });

    action
}
