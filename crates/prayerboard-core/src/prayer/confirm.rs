//! Soft-confirmation window for deletes.
//!
//! Deleting asks the user again, and the question quietly withdraws
//! itself after a few seconds. The window is plain wall-clock
//! arithmetic over a caller-supplied "now", so the timing is testable
//! without a timer primitive.

use chrono::{DateTime, Duration, Utc};

/// How long a delete request stays confirmable.
pub const CONFIRM_WINDOW_SECS: i64 = 5;

/// At most one delete is ever awaiting confirmation.
#[derive(Debug, Clone, Default)]
pub struct DeleteConfirmation {
    pending: Option<(String, DateTime<Utc>)>,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the confirmation window for `id`, replacing any earlier one.
    pub fn begin(&mut self, id: impl Into<String>, now: DateTime<Utc>) {
        self.pending = Some((id.into(), now));
    }

    /// Close the window without deleting.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether `id` is still awaiting confirmation at `now`.
    pub fn is_pending(&self, id: &str, now: DateTime<Utc>) -> bool {
        match &self.pending {
            Some((pending_id, opened_at)) => {
                pending_id == id && now - *opened_at <= Duration::seconds(CONFIRM_WINDOW_SECS)
            }
            None => false,
        }
    }

    /// Confirm the delete for `id`.
    ///
    /// Returns the id to delete when the window is still open for that
    /// id; otherwise a no-op. Either way the window is closed.
    pub fn confirm(&mut self, id: &str, now: DateTime<Utc>) -> Option<String> {
        let confirmed = self.is_pending(id, now);
        let taken = self.pending.take();
        if confirmed {
            taken.map(|(pending_id, _)| pending_id)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> DateTime<Utc> {
        "2026-08-08T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn confirm_inside_window_yields_id() {
        let mut confirm = DeleteConfirmation::new();
        confirm.begin("p1", t0());
        let within = t0() + Duration::seconds(3);
        assert_eq!(confirm.confirm("p1", within).as_deref(), Some("p1"));
    }

    #[test]
    fn confirm_after_window_is_noop() {
        let mut confirm = DeleteConfirmation::new();
        confirm.begin("p1", t0());
        let late = t0() + Duration::seconds(CONFIRM_WINDOW_SECS + 1);
        assert!(confirm.confirm("p1", late).is_none());
        // The stale window is gone, not resurrectable.
        assert!(!confirm.is_pending("p1", late));
    }

    #[test]
    fn cancel_closes_the_window() {
        let mut confirm = DeleteConfirmation::new();
        confirm.begin("p1", t0());
        confirm.cancel();
        assert!(confirm.confirm("p1", t0()).is_none());
    }

    #[test]
    fn confirm_for_a_different_id_is_noop() {
        let mut confirm = DeleteConfirmation::new();
        confirm.begin("p1", t0());
        assert!(confirm.confirm("p2", t0()).is_none());
    }

    #[test]
    fn begin_replaces_earlier_window() {
        let mut confirm = DeleteConfirmation::new();
        confirm.begin("p1", t0());
        confirm.begin("p2", t0() + Duration::seconds(1));
        assert!(!confirm.is_pending("p1", t0() + Duration::seconds(2)));
        assert!(confirm.is_pending("p2", t0() + Duration::seconds(2)));
    }
}
