#![warn(clippy::pedantic)]

pub mod render;
pub mod settings;

pub use settings::{Settings, SettingsRepository, SettingsService};
