use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::{Local, NaiveDateTime};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

/// Number of entries kept in the persistent log.
pub const MAX_ENTRIES: usize = 100;

pub static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

#[allow(clippy::missing_errors_doc)]
pub trait Service {
    fn get_log_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn add_log_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

impl Entry {
    #[must_use]
    pub fn new(time: NaiveDateTime, level: Level, message: String) -> Self {
        Self {
            time: time.format("%b %d %H:%M:%S").to_string(),
            level,
            message,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Adds an entry to the front of the log, dropping the oldest entries beyond `MAX_ENTRIES`.
pub fn prepend(entries: &mut VecDeque<Entry>, entry: Entry) {
    entries.push_front(entry);
    entries.truncate(MAX_ENTRIES);
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(storage: Arc<Mutex<dyn Repository>>) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(storage);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Debug))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();

        match record.level() {
            Level::Error => gloo_console::error!(message.clone()),
            Level::Warn => gloo_console::warn!(message.clone()),
            Level::Info => gloo_console::info!(message.clone()),
            Level::Debug | Level::Trace => gloo_console::debug!(message.clone()),
        }

        let Ok(log) = LOG.lock() else {
            return;
        };

        if let Some(ref repository) = *log {
            if let Ok(repository) = repository.lock() {
                let _ = repository.write_entry(Entry::new(
                    Local::now().naive_local(),
                    record.level(),
                    message,
                ));
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(message: &str) -> Entry {
        Entry::new(
            NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(7, 5, 9)
                .unwrap(),
            Level::Warn,
            message.to_string(),
        )
    }

    #[test]
    fn test_entry_new() {
        assert_eq!(
            entry("failed to send chat message: no connection"),
            Entry {
                time: "May 01 07:05:09".to_string(),
                level: Level::Warn,
                message: "failed to send chat message: no connection".to_string(),
            }
        );
    }

    #[test]
    fn test_entry_serialization() {
        assert_eq!(
            serde_json::to_value(entry("foo")).unwrap(),
            serde_json::json!({
                "time": "May 01 07:05:09",
                "level": "Warn",
                "message": "foo",
            })
        );
    }

    #[test]
    fn test_prepend() {
        let mut entries = VecDeque::new();

        for i in 0..=MAX_ENTRIES {
            prepend(&mut entries, entry(&i.to_string()));
        }

        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries.front().unwrap().message, MAX_ENTRIES.to_string());
        assert_eq!(entries.back().unwrap().message, "1");
    }
}
