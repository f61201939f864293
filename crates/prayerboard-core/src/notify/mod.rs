//! Notification permission and display seam.

use serde::{Deserialize, Serialize};

/// Tri-state permission to show notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPermission {
    Granted,
    Denied,
    /// Not yet decided.
    Default,
}

impl NotificationPermission {
    pub fn is_granted(self) -> bool {
        self == NotificationPermission::Granted
    }
}

/// A titled notification with a body string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    /// The daily reminder payload for a chosen prayer's text.
    pub fn reminder(text: &str) -> Self {
        Self {
            title: "It's time to pray".to_string(),
            body: format!("Let's pray for: {text}"),
        }
    }
}

/// Every notification backend implements this trait.
/// Backends are stateless between calls; permission is host state.
pub trait Notifier {
    /// Current permission as the host reports it.
    fn permission(&self) -> NotificationPermission;

    /// Ask the host for permission. Returns the resulting state.
    fn request_permission(&mut self) -> NotificationPermission {
        self.permission() // default: nothing to ask
    }

    /// Display a notification.
    fn show(&self, notification: &Notification) -> Result<(), Box<dyn std::error::Error>>;
}
