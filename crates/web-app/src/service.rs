use std::collections::VecDeque;

use ::log::warn;

use crate::{Settings, SettingsRepository, SettingsService, log};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: log::Repository> log::Service for Service<R> {
    fn get_log_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.repository.read_entries()
    }

    fn add_log_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        self.repository.write_entry(entry)
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    /// Stored settings that fail validation are replaced by the defaults.
    async fn get_settings(&self) -> Result<Settings, String> {
        let settings = self.repository.read_settings().await?;
        if let Err(err) = settings.validate() {
            warn!("ignored stored settings: {err}");
            return Ok(Settings::default());
        }
        Ok(settings)
    }

    async fn set_settings(&self, settings: Settings) -> Result<(), String> {
        settings.validate()?;
        self.repository.write_settings(settings).await
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, sync::Mutex};

    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{Theme, log::Service as _};

    #[derive(Default)]
    struct Repository {
        settings: RefCell<Option<Settings>>,
    }

    impl SettingsRepository for Repository {
        async fn read_settings(&self) -> Result<Settings, String> {
            Ok(self.settings.borrow().clone().unwrap_or_default())
        }

        async fn write_settings(&self, settings: Settings) -> Result<(), String> {
            *self.settings.borrow_mut() = Some(settings);
            Ok(())
        }
    }

    #[derive(Default)]
    struct LogRepository {
        entries: Mutex<VecDeque<log::Entry>>,
    }

    impl log::Repository for LogRepository {
        fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
            Ok(self.entries.lock().unwrap().clone())
        }

        fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
            log::prepend(&mut self.entries.lock().unwrap(), entry);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_settings() {
        let service = Service::new(Repository::default());

        assert_eq!(service.get_settings().await.unwrap(), Settings::default());

        let settings = Settings {
            api_base_url: "https://coach.example.org".to_string(),
            ..Settings::default()
        };
        service.set_settings(settings.clone()).await.unwrap();

        assert_eq!(service.get_settings().await.unwrap(), settings);
    }

    #[rstest]
    #[case(" ", 30_000)]
    #[case("http://localhost:8000", 0)]
    #[tokio::test]
    async fn test_set_settings_invalid(#[case] api_base_url: &str, #[case] timeout_ms: u32) {
        let service = Service::new(Repository::default());

        assert!(
            service
                .set_settings(Settings {
                    api_base_url: api_base_url.to_string(),
                    timeout_ms,
                    ..Settings::default()
                })
                .await
                .is_err()
        );
        assert_eq!(service.get_settings().await.unwrap(), Settings::default());
    }

    #[rstest]
    #[case("http://localhost:8000", 0)]
    #[case("", 30_000)]
    #[tokio::test]
    async fn test_get_settings_invalid_stored(
        #[case] api_base_url: &str,
        #[case] timeout_ms: u32,
    ) {
        let service = Service::new(Repository {
            settings: RefCell::new(Some(Settings {
                api_base_url: api_base_url.to_string(),
                timeout_ms,
                theme: Theme::Dark,
            })),
        });

        assert_eq!(service.get_settings().await.unwrap(), Settings::default());
    }

    #[test]
    fn test_log_entries() {
        let service = Service::new(LogRepository::default());
        let time = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap();

        service
            .add_log_entry(log::Entry::new(time, ::log::Level::Info, "a".to_string()))
            .unwrap();
        service
            .add_log_entry(log::Entry::new(time, ::log::Level::Error, "b".to_string()))
            .unwrap();

        assert_eq!(
            service
                .get_log_entries()
                .unwrap()
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>(),
            vec!["b", "a"]
        );
    }
}
