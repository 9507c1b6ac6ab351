// Flip Countdown Application
// Main entry point

use flip_countdown::services::settings::SettingsService;
use flip_countdown::ui_egui::FlipCountdownApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Flip Countdown");

    let settings_service = SettingsService::new();
    if let Some(path) = settings_service.path() {
        log::debug!("Reading settings from {}", path.display());
    }
    let settings = settings_service.load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Flip Countdown")
            .with_inner_size([440.0, 320.0])
            .with_min_inner_size([320.0, 220.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Flip Countdown",
        options,
        Box::new(move |cc| Ok(Box::new(FlipCountdownApp::new(cc, settings)))),
    )
}
