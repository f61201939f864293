mod local;
pub mod settings;

pub use local::LocalStore;
pub use settings::Settings;

use std::path::PathBuf;

/// Storage key for the active prayer list (JSON-encoded array).
pub const KEY_PRAYER_LIST: &str = "prayerList";
/// Storage key for the pending prayer list (JSON-encoded array).
pub const KEY_PENDING_PRAYER_LIST: &str = "pendingPrayerList";
/// Storage key for the daily reminder time (HH:MM string, absent when unset).
pub const KEY_REMINDER_TIME: &str = "prayerReminderTime";
/// Storage key for the UI language code.
pub const KEY_APP_LANGUAGE: &str = "appLanguage";
/// Storage key for the community city name.
pub const KEY_CITY_NAME: &str = "cityName";

/// Returns `~/.config/prayerboard[-dev]/` based on PRAYERBOARD_ENV.
///
/// Set PRAYERBOARD_ENV=dev to use the development data directory, or
/// PRAYERBOARD_DATA_DIR to point at an explicit directory (tests use this).
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let dir = if let Ok(explicit) = std::env::var("PRAYERBOARD_DATA_DIR") {
        PathBuf::from(explicit)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");

        let env = std::env::var("PRAYERBOARD_ENV").unwrap_or_else(|_| "production".to_string());

        if env == "dev" {
            base_dir.join("prayerboard-dev")
        } else {
            base_dir.join("prayerboard")
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
