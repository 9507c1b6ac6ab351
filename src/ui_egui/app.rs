use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration as StdDuration;

use super::controls::{render_controls, ControlAction};
use super::flip_card::{paint_clock, FlipAnimation, FlipStyle};
use super::repaint_waker::RepaintWaker;
use super::settings_overlay::{render_settings_overlay, SettingsCommand};
use super::theme;
use crate::models::settings::Settings;
use crate::services::countdown::{
    CountdownCommand, CountdownController, CountdownEngine, IntervalScheduler,
};
use crate::services::notification::NotificationService;
use crate::services::palette::{startup_palette, FlipPalette, PalettePreset};

const IDLE_REPAINT: StdDuration = StdDuration::from_secs(1);

pub struct FlipCountdownApp {
    controller: CountdownController<IntervalScheduler>,
    preset: PalettePreset,
    palette: FlipPalette,
    show_settings: bool,
    /// Shared with the completion callback
    notifications: Rc<RefCell<NotificationService>>,
    /// Keeps ticks flowing while the window gets no frames
    waker: Option<RepaintWaker>,
    minutes_flip: FlipAnimation,
    seconds_flip: FlipAnimation,
}

impl eframe::App for FlipCountdownApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }
}

impl FlipCountdownApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let (preset, palette) = startup_palette(&settings);
        theme::apply_to_context(&palette, &cc.egui_ctx);

        let notifications = Rc::new(RefCell::new(NotificationService::new(
            settings.notifications_enabled,
        )));

        let mut controller = CountdownController::new(
            CountdownEngine::new(IntervalScheduler::new()),
            settings.initial_minutes.to_string(),
            settings.initial_seconds.to_string(),
        );
        let notifier = Rc::clone(&notifications);
        let duration = controller.loaded_seconds_handle();
        controller.engine_mut().set_on_finish(move || {
            if let Err(err) = notifier.borrow().show_countdown_finished(duration.get()) {
                log::warn!("Failed to show completion notification: {err:?}");
            }
        });

        let ctx = cc.egui_ctx.clone();
        let waker = match RepaintWaker::spawn(move || ctx.request_repaint()) {
            Ok(waker) => Some(waker),
            Err(err) => {
                log::warn!("Failed to start repaint waker: {err}");
                None
            }
        };

        let minutes_flip = FlipAnimation::for_display(controller.engine().minutes_display());
        let seconds_flip = FlipAnimation::for_display(controller.engine().seconds_display());

        log::info!(
            "Flip countdown ready: {}s loaded, palette {}",
            controller.engine().remaining(),
            preset.name()
        );

        Self {
            controller,
            preset,
            palette,
            show_settings: false,
            notifications,
            waker,
            minutes_flip,
            seconds_flip,
        }
    }

    fn handle_update(&mut self, ctx: &egui::Context) {
        let outcome = self.controller.engine_mut().pump();
        if outcome.ticks > 0 || outcome.pulse_ended {
            log::trace!("pump: {:?}", outcome);
        }

        self.handle_keyboard_shortcuts(ctx);

        let mut action = None;
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(6.0);
            let running = self.controller.engine().is_running();
            let (minutes_input, seconds_input) = self.controller.inputs_mut();
            action = render_controls(ui, minutes_input, seconds_input, running);
            ui.add_space(6.0);
        });
        match action {
            Some(ControlAction::Countdown(command)) => self.controller.apply(command),
            Some(ControlAction::OpenSettings) => self.show_settings = true,
            None => {}
        }

        let now = ctx.input(|i| i.time);
        let animating = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let area = ui.available_rect_before_wrap();
                let engine = self.controller.engine();
                let finishing_phase = engine.is_finishing_pulse().then_some(now);
                let style = FlipStyle::new(&self.palette, finishing_phase);
                paint_clock(
                    ui.painter(),
                    area,
                    [
                        (engine.minutes_display(), &mut self.minutes_flip),
                        (engine.seconds_display(), &mut self.seconds_flip),
                    ],
                    &style,
                    now,
                )
            })
            .inner;

        if self.show_settings {
            let commands = render_settings_overlay(
                ctx,
                &mut self.show_settings,
                self.preset,
                &self.palette,
                self.notifications.borrow().is_enabled(),
            );
            for command in commands {
                self.apply_settings_command(ctx, command);
            }
        }

        let engine = self.controller.engine();
        let next_wakeup = engine.next_wakeup();
        if let (Some(waker), Some(wait)) = (&self.waker, next_wakeup) {
            waker.arm(wait);
        }
        if animating || engine.is_finishing_pulse() {
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(next_wakeup.unwrap_or(IDLE_REPAINT).min(IDLE_REPAINT));
        }
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let (toggle, reset, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if toggle {
            self.controller.apply(CountdownCommand::Toggle);
        }
        if reset {
            self.controller.apply(CountdownCommand::Reset);
        }
        if escape {
            self.show_settings = false;
        }
    }

    fn apply_settings_command(&mut self, ctx: &egui::Context, command: SettingsCommand) {
        match command {
            SettingsCommand::SelectPreset(preset) => {
                self.preset = preset;
                self.palette = preset.apply(self.palette);
            }
            SettingsCommand::SetFaceColor(color) => {
                self.preset = PalettePreset::Custom;
                self.palette = self.palette.with_face(color);
            }
            SettingsCommand::SetDigitColor(color) => {
                self.preset = PalettePreset::Custom;
                self.palette = self.palette.with_digit(color);
            }
            SettingsCommand::SetNotifications(enabled) => {
                self.notifications.borrow_mut().set_enabled(enabled);
            }
        }
        theme::apply_to_context(&self.palette, ctx);
    }
}
