//! AI text commands: sample prayers and translation.
//!
//! Both calls fail soft in the core; these commands always print
//! something usable and never exit nonzero over a service fault.

use clap::Subcommand;

use prayerboard_core::locales;
use prayerboard_core::storage::LocalStore;
use prayerboard_core::{Settings, TextService};

#[derive(Subcommand)]
pub enum AiAction {
    /// Compose a sample prayer for a request
    Sample {
        /// The request to pray over
        topic: String,
        /// Language code (default: configured language)
        #[arg(long)]
        language: Option<String>,
    },
    /// Translate text
    Translate {
        /// Text to translate
        text: String,
        /// Target language code (default: configured language)
        #[arg(long)]
        to: Option<String>,
    },
}

pub fn run(action: AiAction) -> Result<(), Box<dyn std::error::Error>> {
    let storage = LocalStore::open()?;
    let settings = Settings::new(&storage);
    let service = TextService::from_env();
    let runtime = tokio::runtime::Runtime::new()?;

    match action {
        AiAction::Sample { topic, language } => {
            let code = language.unwrap_or_else(|| settings.language());
            let name = locales::language_name(&code);
            let sample = runtime.block_on(service.generate_sample(&topic, name));
            println!("{sample}");
        }
        AiAction::Translate { text, to } => {
            let code = to.unwrap_or_else(|| settings.language());
            let name = locales::language_name(&code);
            let translated = runtime.block_on(service.translate(&text, name));
            println!("{translated}");
        }
    }
    Ok(())
}
