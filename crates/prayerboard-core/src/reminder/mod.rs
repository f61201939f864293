//! Daily reminder scheduling.
//!
//! The scheduler is a wall-clock-based state machine. It does not own a
//! timer - the caller sleeps on the armed deadline and reports back.
//!
//! ## State Transitions
//!
//! ```text
//! Idle <-> Armed { deadline }
//! ```
//!
//! Every re-evaluation drops the previous deadline unconditionally and
//! recomputes from the current wall clock, configured time, permission,
//! and active-prayer count. Firing picks a prayer uniformly at random
//! and immediately re-evaluates, which yields an approximately-24h
//! cadence that self-corrects for drift and suspended timers.

use chrono::{Duration, NaiveDateTime, NaiveTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::events::Event;
use crate::notify::NotificationPermission;
use crate::prayer::PrayerRequest;

/// A configured hour:minute of the local day, parsed from "HH:MM".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReminderTime(NaiveTime);

impl ReminderTime {
    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl FromStr for ReminderTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s, "%H:%M")
            .map(Self)
            .map_err(|_| ValidationError::InvalidTimeOfDay { input: s.into() })
    }
}

impl fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// The next instant the reminder is due, strictly after `now`.
///
/// Today's occurrence of the configured hour:minute if that is still in
/// the future, otherwise the same hour:minute tomorrow.
pub fn next_fire_instant(now: NaiveDateTime, time: ReminderTime) -> NaiveDateTime {
    let today = now.date().and_time(time.time());
    if today > now {
        today
    } else {
        today + Duration::days(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SchedulerState {
    /// No reminder configured, no permission, or nothing to announce.
    Idle,
    /// Exactly one outstanding deadline.
    Armed { deadline: NaiveDateTime },
}

/// Reminder scheduler.
///
/// Holds at most one deadline. The caller re-runs [`evaluate`] whenever
/// the configured time, the permission, or the active collection
/// changes, and calls [`fire`] when the deadline passes.
///
/// [`evaluate`]: ReminderScheduler::evaluate
/// [`fire`]: ReminderScheduler::fire
#[derive(Debug, Clone)]
pub struct ReminderScheduler {
    state: SchedulerState,
}

impl Default for ReminderScheduler {
    fn default() -> Self {
        Self {
            state: SchedulerState::Idle,
        }
    }
}

impl ReminderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Time remaining until the armed deadline, `None` when idle.
    pub fn time_until_fire(&self, now: NaiveDateTime) -> Option<Duration> {
        match self.state() {
            SchedulerState::Armed { deadline } => Some(deadline - now),
            SchedulerState::Idle => None,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Drop any outstanding deadline and recompute.
    ///
    /// Cancelling is unconditional and idempotent. The scheduler stays
    /// idle unless a time is configured, permission is granted, and at
    /// least one active prayer exists.
    pub fn evaluate(
        &mut self,
        now: NaiveDateTime,
        time: Option<ReminderTime>,
        permission: NotificationPermission,
        active_count: usize,
    ) -> SchedulerState {
        // Step 1: drop any outstanding deadline, armed or not.
        self.state = SchedulerState::Idle;
        if let Some(time) = time {
            if permission.is_granted() && active_count > 0 {
                self.state = SchedulerState::Armed {
                    deadline: next_fire_instant(now, time),
                };
            }
        }
        self.state
    }

    /// The deadline passed: pick a prayer, then re-evaluate for the
    /// next occurrence.
    ///
    /// Selection is uniform over the active collection as it stands
    /// now, not as it stood when the deadline was armed. The returned
    /// event names the chosen prayer; the caller turns it into a
    /// notification.
    pub fn fire<R: Rng>(
        &mut self,
        now: NaiveDateTime,
        time: Option<ReminderTime>,
        permission: NotificationPermission,
        active: &[PrayerRequest],
        rng: &mut R,
    ) -> Option<Event> {
        let fired = pick_random(active, rng).map(|p| Event::ReminderFired {
            prayer_id: p.id.clone(),
            text: p.text.clone(),
            at: Utc::now(),
        });
        self.evaluate(now, time, permission, active.len());
        fired
    }
}

/// Uniform random selection by index. `None` for an empty list.
pub fn pick_random<'a, R: Rng>(
    prayers: &'a [PrayerRequest],
    rng: &mut R,
) -> Option<&'a PrayerRequest> {
    if prayers.is_empty() {
        return None;
    }
    prayers.get(rng.gen_range(0..prayers.len()))
}
