use log::error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;

#[allow(async_fn_in_trait)]
pub trait SettingsService {
    async fn get_settings(&self) -> Result<Settings, String>;
    async fn set_settings(&self, settings: Settings) -> Result<(), String>;
}

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, String>;
    async fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

/// Settings are stored as a whole, missing fields fall back to their defaults.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the chat backend
    pub api_base_url: String,
    /// Time after which a backend request is considered failed
    pub timeout_ms: u32,
    pub theme: Theme,
}

impl Settings {
    /// # Errors
    ///
    /// Returns an error if the base URL is blank or the timeout is zero.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_base_url.trim().is_empty() {
            return Err("API base URL must not be empty".to_string());
        }
        if self.timeout_ms == 0 {
            return Err("timeout must be greater than zero".to_string());
        }
        Ok(())
    }

    /// Full URL of a backend endpoint, e.g. `endpoint("/chat")`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    #[must_use]
    pub fn current_theme(&self) -> Theme {
        match self.theme {
            Theme::System => {
                let Some(window) = web_sys::window() else {
                    error!("failed to access window to determine preferred color scheme");
                    return Theme::Light;
                };
                match window.match_media("(prefers-color-scheme: dark)") {
                    Ok(Some(media_query_list)) if media_query_list.matches() => Theme::Dark,
                    Ok(Some(_)) => Theme::Light,
                    Ok(None) => {
                        error!("failed to determine preferred color scheme");
                        Theme::Light
                    }
                    Err(_) => {
                        error!("failed to match media to determine preferred color scheme");
                        Theme::Light
                    }
                }
            }
            Theme::Light | Theme::Dark => self.theme,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            theme: Theme::System,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    System,
    Light,
    Dark,
}
