//! Colour settings overlay: preset picker plus manual face/digit pickers.

use egui::color_picker::{color_edit_button_srgba, Alpha};

use super::theme::{color32_to_rgba, rgba_to_color32};
use crate::models::color::RgbaColor;
use crate::services::palette::{FlipPalette, PalettePreset};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsCommand {
    SelectPreset(PalettePreset),
    SetFaceColor(RgbaColor),
    SetDigitColor(RgbaColor),
    SetNotifications(bool),
}

/// Render the overlay while `open` is true. Closing the window clears `open`.
pub fn render_settings_overlay(
    ctx: &egui::Context,
    open: &mut bool,
    preset: PalettePreset,
    palette: &FlipPalette,
    notifications_enabled: bool,
) -> Vec<SettingsCommand> {
    let mut commands = Vec::new();
    let mut window_open = *open;

    egui::Window::new("Settings")
        .open(&mut window_open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Grid::new("settings_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Preset:");
                    let mut selected = preset;
                    egui::ComboBox::from_id_source("preset_combo")
                        .selected_text(selected.to_string())
                        .show_ui(ui, |ui| {
                            for option in PalettePreset::BUILT_IN {
                                ui.selectable_value(&mut selected, option, option.to_string());
                            }
                            ui.selectable_value(
                                &mut selected,
                                PalettePreset::Custom,
                                PalettePreset::Custom.to_string(),
                            );
                        });
                    if selected != preset {
                        commands.push(SettingsCommand::SelectPreset(selected));
                    }
                    ui.end_row();

                    ui.label("Card color:");
                    let mut face = rgba_to_color32(palette.face);
                    if color_edit_button_srgba(ui, &mut face, Alpha::Opaque).changed() {
                        commands.push(SettingsCommand::SetFaceColor(color32_to_rgba(face)));
                    }
                    ui.end_row();

                    ui.label("Digit color:");
                    let mut digit = rgba_to_color32(palette.digit);
                    if color_edit_button_srgba(ui, &mut digit, Alpha::Opaque).changed() {
                        commands.push(SettingsCommand::SetDigitColor(color32_to_rgba(digit)));
                    }
                    ui.end_row();

                    ui.label("Notify when done:");
                    let mut notify = notifications_enabled;
                    if ui.checkbox(&mut notify, "").changed() {
                        commands.push(SettingsCommand::SetNotifications(notify));
                    }
                    ui.end_row();
                });

            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(format!(
                    "Face {}  ·  Digits {}",
                    palette.face.to_hex(),
                    palette.digit.to_hex()
                ))
                .weak()
                .monospace(),
            );
        });

    *open = window_open;
    commands
}
