mod app;
mod controls;
pub mod flip_card;
mod repaint_waker;
mod settings_overlay;
pub mod theme;

pub use app::FlipCountdownApp;
