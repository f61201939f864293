//! Typed accessors over the scalar settings keys.
//!
//! Reads fail soft: an unreadable or unparsable value behaves like an
//! absent one and the default applies. Writes report their fault so a
//! caller that just asked for the change can say it didn't stick.

use tracing::warn;

use super::{LocalStore, KEY_APP_LANGUAGE, KEY_CITY_NAME, KEY_REMINDER_TIME};
use crate::error::StorageError;
use crate::reminder::ReminderTime;

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_CITY_NAME: &str = "Halifax";

/// Persistent app settings (reminder time, language, city name).
///
/// The admin flag is deliberately NOT here: it is session-scoped and
/// lives in [`crate::session::Session`], never in durable storage.
pub struct Settings<'a> {
    storage: &'a LocalStore,
}

impl<'a> Settings<'a> {
    pub fn new(storage: &'a LocalStore) -> Self {
        Self { storage }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("failed to read {key}: {e}");
                None
            }
        }
    }

    /// The configured daily reminder time, if any.
    pub fn reminder_time(&self) -> Option<ReminderTime> {
        let raw = self.read(KEY_REMINDER_TIME)?;
        match raw.parse() {
            Ok(time) => Some(time),
            Err(e) => {
                warn!("ignoring stored reminder time {raw:?}: {e}");
                None
            }
        }
    }

    /// Set or clear the daily reminder time.
    pub fn set_reminder_time(&self, time: Option<ReminderTime>) -> Result<(), StorageError> {
        match time {
            Some(time) => self.storage.set(KEY_REMINDER_TIME, &time.to_string()),
            None => self.storage.remove(KEY_REMINDER_TIME),
        }
    }

    /// UI language code, "en" when unset.
    pub fn language(&self) -> String {
        self.read(KEY_APP_LANGUAGE)
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
    }

    pub fn set_language(&self, code: &str) -> Result<(), StorageError> {
        self.storage.set(KEY_APP_LANGUAGE, code)
    }

    /// Community city name, "Halifax" when unset.
    pub fn city_name(&self) -> String {
        self.read(KEY_CITY_NAME)
            .unwrap_or_else(|| DEFAULT_CITY_NAME.to_string())
    }

    /// Set the city name. Names empty after trimming are ignored.
    pub fn set_city_name(&self, name: &str) -> Result<(), StorageError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        self.storage.set(KEY_CITY_NAME, trimmed)
    }
}
