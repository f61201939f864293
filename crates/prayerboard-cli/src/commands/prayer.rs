//! Prayer request commands for CLI.

use std::io::{self, BufRead, Write};

use chrono::Utc;
use clap::Subcommand;

use prayerboard_core::locales;
use prayerboard_core::prayer::confirm::CONFIRM_WINDOW_SECS;
use prayerboard_core::storage::LocalStore;
use prayerboard_core::{DeleteConfirmation, PrayerStore, Settings, TextService, TranslationCache};

use super::common;

#[derive(Subcommand)]
pub enum PrayerAction {
    /// Add a prayer directly to the board (admin)
    Add {
        /// Prayer text
        text: String,
        /// Admin password
        #[arg(long)]
        password: String,
    },
    /// Submit a prayer for moderation
    Submit {
        /// Prayer text
        text: String,
    },
    /// List the prayers on the board
    List {
        /// Language code to display in (default: configured language)
        #[arg(long)]
        language: Option<String>,
    },
    /// Delete a prayer from the board (admin)
    Delete {
        /// Prayer ID
        id: String,
        /// Admin password
        #[arg(long)]
        password: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Toggle the featured tag on a prayer (admin)
    Toggle {
        /// Prayer ID
        id: String,
        /// Admin password
        #[arg(long)]
        password: String,
    },
    /// Edit a prayer's text (admin)
    Update {
        /// Prayer ID
        id: String,
        /// New text
        text: String,
        /// Admin password
        #[arg(long)]
        password: String,
    },
    /// Record that you prayed for a request
    Amen {
        /// Prayer ID
        id: String,
    },
}

pub fn run(action: PrayerAction) -> Result<(), Box<dyn std::error::Error>> {
    let storage = LocalStore::open()?;

    match action {
        PrayerAction::Add { text, password } => {
            let _session = common::admin_session(&password)?;
            let text = common::require_text(&text)?;
            let mut store = PrayerStore::load(&storage);
            let prayer = store.add_direct(text);
            println!("Prayer added: {}", prayer.id);
            println!("{}", serde_json::to_string_pretty(&prayer)?);
        }
        PrayerAction::Submit { text } => {
            let text = common::require_text(&text)?;
            let mut store = PrayerStore::load(&storage);
            let prayer = store.submit_for_approval(text);
            println!("Prayer submitted for approval: {}", prayer.id);
            println!("{}", serde_json::to_string_pretty(&prayer)?);
        }
        PrayerAction::List { language } => {
            let store = PrayerStore::load(&storage);
            let settings = Settings::new(&storage);
            let language = language.unwrap_or_else(|| settings.language());
            let cache = translations_for(&language, &store)?;
            let view: Vec<serde_json::Value> = store
                .active()
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "id": p.id,
                        "text": cache.display_text(p, &language),
                        "isMain": p.is_main,
                        "prayedCount": p.prayed_count,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        PrayerAction::Delete { id, password, yes } => {
            let _session = common::admin_session(&password)?;
            if !yes && !confirm_delete(&id)? {
                println!("Prayer kept: {id}");
                return Ok(());
            }
            let mut store = PrayerStore::load(&storage);
            match store.delete(&id) {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("Prayer not found: {id}"),
            }
        }
        PrayerAction::Toggle { id, password } => {
            let _session = common::admin_session(&password)?;
            let mut store = PrayerStore::load(&storage);
            match store.toggle_main(&id) {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("Prayer not found: {id}"),
            }
        }
        PrayerAction::Update { id, text, password } => {
            let _session = common::admin_session(&password)?;
            let mut store = PrayerStore::load(&storage);
            match store.update(&id, &text) {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("Prayer unchanged: {id}"),
            }
        }
        PrayerAction::Amen { id } => {
            let mut store = PrayerStore::load(&storage);
            match store.increment_prayed(&id) {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("Prayer not found: {id}"),
            }
        }
    }
    Ok(())
}

/// Ask for confirmation on stdin, inside the soft-confirmation window.
/// An answer that arrives after the window closed no longer deletes.
fn confirm_delete(id: &str) -> Result<bool, Box<dyn std::error::Error>> {
    let mut confirmation = DeleteConfirmation::new();
    confirmation.begin(id, Utc::now());

    print!("Delete this prayer? [y/N] (confirm within {CONFIRM_WINDOW_SECS}s) ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    if !answer.trim().eq_ignore_ascii_case("y") {
        confirmation.cancel();
        return Ok(false);
    }
    Ok(confirmation.confirm(id, Utc::now()).is_some())
}

/// Fetch any missing translations for the active list.
///
/// The cache is display state for this invocation only; a failed or
/// slow translation just leaves the source text showing.
fn translations_for(
    language: &str,
    store: &PrayerStore,
) -> Result<TranslationCache, Box<dyn std::error::Error>> {
    let mut cache = TranslationCache::new();
    if !locales::needs_translation(language) {
        return Ok(cache);
    }
    let service = TextService::from_env();
    let language_name = locales::language_name(language);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let missing: Vec<(String, String)> = cache
            .missing(language, store.active())
            .iter()
            .map(|p| (p.id.clone(), p.text.clone()))
            .collect();
        for (id, text) in missing {
            let translated = service.translate(&text, language_name).await;
            cache.insert(language, id, translated);
        }
    });
    Ok(cache)
}
