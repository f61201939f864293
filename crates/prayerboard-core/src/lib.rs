//! # Prayerboard Core Library
//!
//! This library provides the core business logic for the Prayerboard
//! community prayer-request board. It implements a CLI-first philosophy
//! where all operations are available via a standalone CLI binary, with
//! any GUI layer being a thin shell over the same core library.
//!
//! ## Architecture
//!
//! - **Prayer Store**: two moderated collections (`active`, `pending`)
//!   and every lifecycle transition between them, persisted as full
//!   snapshots on each mutation
//! - **Reminder Scheduler**: a wall-clock-based state machine that arms
//!   one daily deadline and recomputes it on every relevant change
//! - **Storage**: SQLite-backed key-value store plus typed settings
//! - **Text Service**: fail-soft translation and sample-prayer
//!   generation over an external generative API
//!
//! ## Key Components
//!
//! - [`PrayerStore`]: lifecycle engine for prayer requests
//! - [`ReminderScheduler`]: daily reminder state machine
//! - [`LocalStore`] / [`Settings`]: durable local state
//! - [`TextService`] / [`TranslationCache`]: multilingual display
//! - [`Session`] / [`AdminGate`]: explicit session-scoped admin state

pub mod ai;
pub mod error;
pub mod events;
pub mod locales;
pub mod notify;
pub mod prayer;
pub mod reminder;
pub mod session;
pub mod storage;

pub use ai::{TextService, TranslationCache};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use notify::{Notification, NotificationPermission, Notifier};
pub use prayer::{seed_prayers, DeleteConfirmation, PrayerRequest, PrayerStore};
pub use reminder::{next_fire_instant, ReminderScheduler, ReminderTime, SchedulerState};
pub use session::{AdminGate, Session};
pub use storage::{LocalStore, Settings};
