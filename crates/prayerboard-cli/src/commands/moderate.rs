//! Moderation commands for community submissions (admin only).

use clap::Subcommand;

use prayerboard_core::storage::LocalStore;
use prayerboard_core::PrayerStore;

use super::common;

#[derive(Subcommand)]
pub enum ModerateAction {
    /// List submissions awaiting approval
    List {
        /// Admin password
        #[arg(long)]
        password: String,
    },
    /// Approve a submission onto the board
    Approve {
        /// Prayer ID
        id: String,
        /// Admin password
        #[arg(long)]
        password: String,
    },
    /// Reject a submission
    Reject {
        /// Prayer ID
        id: String,
        /// Admin password
        #[arg(long)]
        password: String,
    },
}

pub fn run(action: ModerateAction) -> Result<(), Box<dyn std::error::Error>> {
    let storage = LocalStore::open()?;

    match action {
        ModerateAction::List { password } => {
            let _session = common::admin_session(&password)?;
            let store = PrayerStore::load(&storage);
            println!("{}", serde_json::to_string_pretty(store.pending())?);
        }
        ModerateAction::Approve { id, password } => {
            let _session = common::admin_session(&password)?;
            let mut store = PrayerStore::load(&storage);
            match store.approve(&id) {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("Submission not found: {id}"),
            }
        }
        ModerateAction::Reject { id, password } => {
            let _session = common::admin_session(&password)?;
            let mut store = PrayerStore::load(&storage);
            match store.reject(&id) {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("Submission not found: {id}"),
            }
        }
    }
    Ok(())
}
