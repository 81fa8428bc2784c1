#![warn(clippy::pedantic)]

pub mod advisor;
pub mod log;
pub mod service;
pub mod settings;

pub use advisor::Advisor;
pub use service::Service;
pub use settings::{Settings, SettingsRepository, SettingsService, Theme};

pub const APP_NAME: &str = "Running AI Coach";
pub const APP_VERSION: &str = "1.0.0";
pub const AI_MODEL: &str = "Google Gemini";
pub const APP_DESCRIPTION: &str = "AI-powered running guidance";
