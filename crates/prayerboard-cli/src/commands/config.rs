//! Settings commands for CLI.

use clap::Subcommand;

use prayerboard_core::storage::LocalStore;
use prayerboard_core::{ConfigError, Settings};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a setting value (language | city)
    Get { key: String },
    /// Set a setting value
    Set { key: String, value: String },
    /// List all settings
    List,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let storage = LocalStore::open()?;
    let settings = Settings::new(&storage);

    match action {
        ConfigAction::Get { key } => match key.as_str() {
            "language" => println!("{}", settings.language()),
            "city" => println!("{}", settings.city_name()),
            other => return Err(ConfigError::UnknownKey(other.to_string()).into()),
        },
        ConfigAction::Set { key, value } => match key.as_str() {
            "language" => {
                settings.set_language(&value)?;
                println!("language = {value}");
            }
            "city" => {
                settings.set_city_name(&value)?;
                println!("city = {}", settings.city_name());
            }
            other => return Err(ConfigError::UnknownKey(other.to_string()).into()),
        },
        ConfigAction::List => {
            let listing = serde_json::json!({
                "language": settings.language(),
                "city": settings.city_name(),
                "reminderTime": settings.reminder_time().map(|t| t.to_string()),
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
    }
    Ok(())
}
