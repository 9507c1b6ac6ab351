// Settings module
// Startup configuration read from config.toml

use serde::Deserialize;

pub const MAX_INPUT_MINUTES: u32 = 99;
pub const MAX_INPUT_SECONDS: u32 = 59;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Minutes loaded into the inputs at startup
    pub initial_minutes: u32,
    /// Seconds loaded into the inputs at startup
    pub initial_seconds: u32,
    /// Palette preset name ("tangerine", "juice", "indigo", "mint", "tomato")
    pub palette: String,
    /// Custom card face colour (`#rgb`, `#rrggbb` or `rgb(...)`), overriding the preset
    pub face_color: Option<String>,
    /// Custom digit colour, same formats as `face_color`
    pub digit_color: Option<String>,
    pub notifications_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_minutes: 5,
            initial_seconds: 0,
            palette: "tangerine".to_string(),
            face_color: None,
            digit_color: None,
            notifications_enabled: true,
        }
    }
}

impl Settings {
    /// Clamp the initial duration into what the input fields can hold.
    pub fn normalized(mut self) -> Self {
        self.initial_minutes = self.initial_minutes.min(MAX_INPUT_MINUTES);
        self.initial_seconds = self.initial_seconds.min(MAX_INPUT_SECONDS);
        self
    }

    pub fn initial_total_seconds(&self) -> u32 {
        self.initial_minutes * 60 + self.initial_seconds
    }
}
