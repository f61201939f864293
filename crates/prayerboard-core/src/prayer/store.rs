//! Prayer request store and lifecycle transitions.
//!
//! The store owns two ordered collections:
//!
//! ```text
//! pending --approve--> active --delete--> (gone)
//!    |                   |
//!  reject            edit / toggle main / increment prayed
//! ```
//!
//! Every mutation writes the affected collection back to storage as a
//! full JSON snapshot in the same call. Storage faults are logged and
//! swallowed; a failed write never fails the mutation, and a failed
//! read falls back to the seed list. Id-keyed operations on ids that
//! are not where the operation looks are silent no-ops, so the UI can
//! retry them idempotently.

use chrono::Utc;
use tracing::warn;

use super::{seed_prayers, PrayerRequest};
use crate::events::Event;
use crate::storage::{LocalStore, KEY_PENDING_PRAYER_LIST, KEY_PRAYER_LIST};

/// The two moderated collections, loaded once and kept in memory.
///
/// All operations are synchronous; persistence happens strictly after
/// the in-memory mutation, in the same call.
pub struct PrayerStore<'a> {
    storage: &'a LocalStore,
    active: Vec<PrayerRequest>,
    pending: Vec<PrayerRequest>,
}

impl<'a> PrayerStore<'a> {
    /// Load both collections from storage.
    ///
    /// Absent, corrupt, or unparsable data falls back to the seed list
    /// for `active` and an empty `pending` list. Never fails.
    pub fn load(storage: &'a LocalStore) -> Self {
        let active = Self::load_list(storage, KEY_PRAYER_LIST).unwrap_or_else(seed_prayers);
        let pending = Self::load_list(storage, KEY_PENDING_PRAYER_LIST).unwrap_or_default();
        Self {
            storage,
            active,
            pending,
        }
    }

    fn load_list(storage: &LocalStore, key: &str) -> Option<Vec<PrayerRequest>> {
        match storage.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(list) => Some(list),
                Err(e) => {
                    warn!("unreadable {key} snapshot, using fallback: {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("failed to read {key}: {e}");
                None
            }
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Prayers visible to everyone, in insertion order.
    pub fn active(&self) -> &[PrayerRequest] {
        &self.active
    }

    /// Community submissions awaiting moderation, in insertion order.
    pub fn pending(&self) -> &[PrayerRequest] {
        &self.pending
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Append an administrator-authored prayer directly to `active`.
    ///
    /// Emptiness of `text` is the caller's precondition; the store does
    /// not validate it.
    pub fn add_direct(&mut self, text: impl Into<String>) -> PrayerRequest {
        let prayer = PrayerRequest::new(text);
        self.active.push(prayer.clone());
        self.persist_active();
        prayer
    }

    /// Append a community submission to `pending`.
    pub fn submit_for_approval(&mut self, text: impl Into<String>) -> PrayerRequest {
        let prayer = PrayerRequest::new(text);
        self.pending.push(prayer.clone());
        self.persist_pending();
        prayer
    }

    /// Move a pending prayer into `active`, unchanged.
    /// No-op when the id is not in `pending`.
    pub fn approve(&mut self, id: &str) -> Option<Event> {
        let idx = self.pending.iter().position(|p| p.id == id)?;
        let prayer = self.pending.remove(idx);
        self.active.push(prayer);
        self.persist_pending();
        self.persist_active();
        Some(Event::PrayerApproved {
            id: id.to_string(),
            at: Utc::now(),
        })
    }

    /// Remove a pending prayer. No-op when the id is not in `pending`.
    pub fn reject(&mut self, id: &str) -> Option<Event> {
        let idx = self.pending.iter().position(|p| p.id == id)?;
        self.pending.remove(idx);
        self.persist_pending();
        Some(Event::PrayerRejected {
            id: id.to_string(),
            at: Utc::now(),
        })
    }

    /// Remove an active prayer. No-op when the id is not in `active`.
    /// Rejection is the only removal path for pending entries.
    pub fn delete(&mut self, id: &str) -> Option<Event> {
        let idx = self.active.iter().position(|p| p.id == id)?;
        self.active.remove(idx);
        self.persist_active();
        Some(Event::PrayerDeleted {
            id: id.to_string(),
            at: Utc::now(),
        })
    }

    /// Flip the featured tag on an active prayer.
    ///
    /// Not exclusive: toggling one entry never clears the tag on
    /// another, so any number of prayers may be featured at once.
    pub fn toggle_main(&mut self, id: &str) -> Option<Event> {
        let prayer = self.active.iter_mut().find(|p| p.id == id)?;
        prayer.is_main = !prayer.is_main;
        let is_main = prayer.is_main;
        self.persist_active();
        Some(Event::MainToggled {
            id: id.to_string(),
            is_main,
            at: Utc::now(),
        })
    }

    /// Replace the text of the prayer with `id`, wherever it is found.
    ///
    /// An administrator may edit either collection, so both are patched
    /// defensively. Text that is empty after trimming leaves everything
    /// unchanged.
    pub fn update(&mut self, id: &str, new_text: &str) -> Option<Event> {
        let trimmed = new_text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let mut found = false;
        for prayer in self.active.iter_mut().filter(|p| p.id == id) {
            prayer.text = trimmed.to_string();
            found = true;
        }
        if found {
            self.persist_active();
        }
        let mut found_pending = false;
        for prayer in self.pending.iter_mut().filter(|p| p.id == id) {
            prayer.text = trimmed.to_string();
            found_pending = true;
        }
        if found_pending {
            self.persist_pending();
        }
        if !(found || found_pending) {
            return None;
        }
        Some(Event::PrayerUpdated {
            id: id.to_string(),
            at: Utc::now(),
        })
    }

    /// Count one more prayer for an active request.
    /// No-op for missing ids and for entries still in `pending`.
    pub fn increment_prayed(&mut self, id: &str) -> Option<Event> {
        let prayer = self.active.iter_mut().find(|p| p.id == id)?;
        prayer.prayed_count += 1;
        let prayed_count = prayer.prayed_count;
        self.persist_active();
        Some(Event::PrayedCountIncremented {
            id: id.to_string(),
            prayed_count,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn persist_active(&self) {
        Self::persist(self.storage, KEY_PRAYER_LIST, &self.active);
    }

    fn persist_pending(&self) {
        Self::persist(self.storage, KEY_PENDING_PRAYER_LIST, &self.pending);
    }

    /// Full-collection snapshot write. Faults are logged, never raised.
    fn persist(storage: &LocalStore, key: &str, list: &[PrayerRequest]) {
        let json = match serde_json::to_string(list) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to encode {key}: {e}");
                return;
            }
        };
        if let Err(e) = storage.set(key, &json) {
            warn!("failed to write {key}: {e}");
        }
    }
}
