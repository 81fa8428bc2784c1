use std::collections::VecDeque;

use ::log::debug;
use gloo_storage::Storage as GlooStorage;
use runwell_domain as domain;
use runwell_web_app::{Settings, SettingsRepository, log};
use serde::{Serialize, de::DeserializeOwned};

const KEY_USER_ID: &str = "running_coach_user_id";
const KEY_USERNAME: &str = "running_coach_username";
const KEY_SETTINGS: &str = "settings";
const KEY_LOG: &str = "log";

fn read<T>(key: &str) -> Result<Option<T>, gloo_storage::errors::StorageError>
where
    T: DeserializeOwned,
{
    match gloo_storage::LocalStorage::get(key) {
        Ok(value) => Ok(Some(value)),
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
        Err(err) => Err(err),
    }
}

fn write<T: Serialize>(key: &str, value: T) -> Result<(), domain::StorageError> {
    gloo_storage::LocalStorage::set(key, value)
        .map_err(|err| domain::StorageError::Other(err.into()))
}

/// Identity of the runner on this device.
#[derive(Clone, Copy, Default)]
pub struct Identity;

impl domain::SessionRepository for Identity {
    async fn read_session(&self) -> Result<Option<domain::Session>, domain::ReadError> {
        let Some(user_id) = read::<u32>(KEY_USER_ID)
            .map_err(|err| domain::StorageError::Other(err.into()))?
        else {
            return Ok(None);
        };

        let name = match read::<String>(KEY_USERNAME) {
            Ok(name) => name.and_then(|name| domain::Name::new(&name).ok()),
            Err(err) => {
                debug!("failed to read username: {err}");
                None
            }
        };

        Ok(Some(domain::Session {
            user_id: user_id.into(),
            name,
        }))
    }

    async fn write_session(&self, session: &domain::Session) -> Result<(), domain::UpdateError> {
        write(KEY_USER_ID, *session.user_id)?;
        match session.name {
            Some(ref name) => write(KEY_USERNAME, name.to_string())?,
            None => gloo_storage::LocalStorage::delete(KEY_USERNAME),
        }
        Ok(())
    }

    async fn delete_session(&self) -> Result<(), domain::DeleteError> {
        gloo_storage::LocalStorage::delete(KEY_USER_ID);
        gloo_storage::LocalStorage::delete(KEY_USERNAME);
        Ok(())
    }
}

pub struct UI;

impl SettingsRepository for UI {
    async fn read_settings(&self) -> Result<Settings, String> {
        read(KEY_SETTINGS)
            .map(Option::unwrap_or_default)
            .map_err(|err| err.to_string())
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), String> {
        gloo_storage::LocalStorage::set(KEY_SETTINGS, settings).map_err(|err| err.to_string())
    }
}

pub struct Log;

impl log::Repository for Log {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        read(KEY_LOG)
            .map(Option::unwrap_or_default)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        log::prepend(&mut entries, entry);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    #[cfg(target_arch = "wasm32")]
    mod wasm {
        use pretty_assertions::assert_eq;
        use runwell_domain::SessionRepository;
        use runwell_web_app::{Theme, log::Repository};
        use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

        use super::super::*;

        wasm_bindgen_test_configure!(run_in_browser);

        #[wasm_bindgen_test]
        async fn test_session() {
            gloo_storage::LocalStorage::clear();

            assert_eq!(Identity.read_session().await.unwrap(), None);

            let session = domain::Session {
                user_id: 7.into(),
                name: Some(domain::Name::new("Runner_1700000000000").unwrap()),
            };
            Identity.write_session(&session).await.unwrap();

            assert_eq!(
                gloo_storage::LocalStorage::get::<u32>(KEY_USER_ID).unwrap(),
                7
            );
            assert_eq!(Identity.read_session().await.unwrap(), Some(session));

            Identity.delete_session().await.unwrap();

            assert_eq!(Identity.read_session().await.unwrap(), None);
        }

        #[wasm_bindgen_test]
        async fn test_session_invalid_username() {
            gloo_storage::LocalStorage::clear();
            gloo_storage::LocalStorage::set(KEY_USER_ID, 7).unwrap();
            gloo_storage::LocalStorage::set(KEY_USERNAME, " ").unwrap();

            assert_eq!(
                Identity.read_session().await.unwrap(),
                Some(domain::Session {
                    user_id: 7.into(),
                    name: None,
                })
            );
        }

        #[wasm_bindgen_test]
        async fn test_settings() {
            gloo_storage::LocalStorage::clear();

            assert_eq!(UI.read_settings().await.unwrap(), Settings::default());

            let settings = Settings {
                theme: Theme::Dark,
                ..Settings::default()
            };
            UI.write_settings(settings.clone()).await.unwrap();

            assert_eq!(UI.read_settings().await.unwrap(), settings);
        }

        #[wasm_bindgen_test]
        fn test_log() {
            gloo_storage::LocalStorage::clear();

            assert!(Log.read_entries().unwrap().is_empty());

            for i in 0..=log::MAX_ENTRIES {
                Log.write_entry(log::Entry {
                    time: String::new(),
                    level: ::log::Level::Info,
                    message: i.to_string(),
                })
                .unwrap();
            }

            let entries = Log.read_entries().unwrap();

            assert_eq!(entries.len(), log::MAX_ENTRIES);
            assert_eq!(entries[0].message, log::MAX_ENTRIES.to_string());
        }
    }
}
