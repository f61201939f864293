use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::prayer::PrayerRequest;

/// Every state change in the system produces an Event.
/// The CLI prints them; a GUI layer would subscribe to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    PrayerAdded {
        prayer: PrayerRequest,
        at: DateTime<Utc>,
    },
    PrayerSubmitted {
        prayer: PrayerRequest,
        at: DateTime<Utc>,
    },
    PrayerApproved {
        id: String,
        at: DateTime<Utc>,
    },
    PrayerRejected {
        id: String,
        at: DateTime<Utc>,
    },
    PrayerDeleted {
        id: String,
        at: DateTime<Utc>,
    },
    PrayerUpdated {
        id: String,
        at: DateTime<Utc>,
    },
    MainToggled {
        id: String,
        is_main: bool,
        at: DateTime<Utc>,
    },
    PrayedCountIncremented {
        id: String,
        prayed_count: u32,
        at: DateTime<Utc>,
    },
    /// The scheduler armed a one-shot deadline (local wall-clock time).
    ReminderArmed {
        deadline: NaiveDateTime,
        at: DateTime<Utc>,
    },
    /// The scheduler dropped its deadline and went idle.
    ReminderIdle {
        at: DateTime<Utc>,
    },
    /// The daily reminder fired and named a prayer.
    ReminderFired {
        prayer_id: String,
        text: String,
        at: DateTime<Utc>,
    },
}
