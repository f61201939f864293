//! Console notification backend.

use prayerboard_core::{Notification, NotificationPermission, Notifier};

/// Environment variable overriding the notification permission
/// (granted | denied | default).
pub const PERMISSION_ENV: &str = "PRAYERBOARD_NOTIFICATIONS";

/// Prints notifications to stdout. Running the reminder driver in a
/// terminal counts as permission, unless the environment says no.
pub struct ConsoleNotifier {
    permission: NotificationPermission,
}

impl ConsoleNotifier {
    pub fn from_env() -> Self {
        let permission = match std::env::var(PERMISSION_ENV).as_deref() {
            Ok("denied") => NotificationPermission::Denied,
            Ok("default") => NotificationPermission::Default,
            _ => NotificationPermission::Granted,
        };
        Self { permission }
    }
}

impl Notifier for ConsoleNotifier {
    fn permission(&self) -> NotificationPermission {
        self.permission
    }

    fn request_permission(&mut self) -> NotificationPermission {
        if self.permission == NotificationPermission::Default {
            self.permission = NotificationPermission::Granted;
        }
        self.permission
    }

    fn show(&self, notification: &Notification) -> Result<(), Box<dyn std::error::Error>> {
        println!("\n== {} ==", notification.title);
        println!("{}", notification.body);
        Ok(())
    }
}
