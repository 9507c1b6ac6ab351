use anyhow::Result;
use chrono::{DateTime, Local};
use notify_rust::{Notification, Timeout};

const FINISHED_SUMMARY: &str = "Countdown finished";

/// Service for displaying system notifications
pub struct NotificationService {
    enabled: bool,
}

impl NotificationService {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Announce that a countdown of `duration_seconds` ran out.
    pub fn show_countdown_finished(&self, duration_seconds: u32) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let body = finished_message(duration_seconds, Local::now());
        Notification::new()
            .summary(FINISHED_SUMMARY)
            .body(&body)
            .timeout(Timeout::Milliseconds(10000))
            .show()
            .map_err(|e| anyhow::anyhow!("Failed to show notification: {}", e))?;

        Ok(())
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new(true)
    }
}

fn finished_message(duration_seconds: u32, at: DateTime<Local>) -> String {
    format!(
        "{:02}:{:02} timer ended at {}",
        duration_seconds / 60,
        duration_seconds % 60,
        at.format("%H:%M:%S")
    )
}
