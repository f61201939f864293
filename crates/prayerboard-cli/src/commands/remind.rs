//! Daily reminder commands.
//!
//! `remind run` is the long-running driver: it sleeps on the armed
//! deadline and re-evaluates on every wake, so edits to the configured
//! time or the board made by other invocations are picked up at each
//! firing rather than never.

use chrono::{Local, Utc};
use clap::Subcommand;

use prayerboard_core::storage::LocalStore;
use prayerboard_core::{
    Event, Notification, Notifier, PrayerStore, ReminderScheduler, ReminderTime, SchedulerState,
    Settings,
};

use crate::notify::ConsoleNotifier;

#[derive(Subcommand)]
pub enum RemindAction {
    /// Set the daily reminder time (HH:MM)
    Set {
        /// Time of day, e.g. 07:30
        time: String,
    },
    /// Clear the daily reminder
    Clear,
    /// Show the reminder configuration and scheduler state
    Status,
    /// Run the reminder loop in the foreground
    Run {
        /// Fire at most once, then exit
        #[arg(long)]
        once: bool,
    },
}

pub fn run(action: RemindAction) -> Result<(), Box<dyn std::error::Error>> {
    let storage = LocalStore::open()?;
    let settings = Settings::new(&storage);

    match action {
        RemindAction::Set { time } => {
            let time: ReminderTime = time.parse()?;
            settings.set_reminder_time(Some(time))?;
            println!("Reminder set for {time} daily");
        }
        RemindAction::Clear => {
            settings.set_reminder_time(None)?;
            println!("Reminder cleared");
        }
        RemindAction::Status => {
            let store = PrayerStore::load(&storage);
            let notifier = ConsoleNotifier::from_env();
            let mut scheduler = ReminderScheduler::new();
            let state = scheduler.evaluate(
                Local::now().naive_local(),
                settings.reminder_time(),
                notifier.permission(),
                store.active().len(),
            );
            let status = serde_json::json!({
                "time": settings.reminder_time().map(|t| t.to_string()),
                "permission": notifier.permission(),
                "activePrayers": store.active().len(),
                "scheduler": state,
            });
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        RemindAction::Run { once } => run_loop(&storage, once)?,
    }
    Ok(())
}

fn run_loop(storage: &LocalStore, once: bool) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::new(storage);
    let mut notifier = ConsoleNotifier::from_env();
    notifier.request_permission();
    let mut scheduler = ReminderScheduler::new();
    let mut rng = rand::thread_rng();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        loop {
            let store = PrayerStore::load(storage);
            let now = Local::now().naive_local();
            let state = scheduler.evaluate(
                now,
                settings.reminder_time(),
                notifier.permission(),
                store.active().len(),
            );

            let deadline = match state {
                SchedulerState::Idle => {
                    let idle = Event::ReminderIdle { at: Utc::now() };
                    println!("{}", serde_json::to_string_pretty(&idle)?);
                    return Ok::<(), Box<dyn std::error::Error>>(());
                }
                SchedulerState::Armed { deadline } => deadline,
            };
            let armed = Event::ReminderArmed {
                deadline,
                at: Utc::now(),
            };
            println!("{}", serde_json::to_string_pretty(&armed)?);

            let wait = (deadline - now).to_std().unwrap_or_default();
            tokio::time::sleep(wait).await;

            // Reload: the board may have changed while we slept.
            let store = PrayerStore::load(storage);
            let now = Local::now().naive_local();
            let fired = scheduler.fire(
                now,
                settings.reminder_time(),
                notifier.permission(),
                store.active(),
                &mut rng,
            );
            if let Some(fired) = fired {
                if let Event::ReminderFired { text, .. } = &fired {
                    notifier.show(&Notification::reminder(text))?;
                }
                println!("{}", serde_json::to_string_pretty(&fired)?);
            }
            if once {
                return Ok(());
            }
        }
    })
}
