//! Admin gate and session state.
//!
//! A shared-secret check, not a security control. The admin flag is
//! session-scoped: it lives in the `Session` value for the lifetime of
//! the process and is never written to durable storage.

/// Environment variable overriding the shared admin secret.
pub const ADMIN_PASSWORD_ENV: &str = "PRAYERBOARD_ADMIN_PASSWORD";

const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Shared-secret gate for administrator actions.
#[derive(Debug, Clone)]
pub struct AdminGate {
    secret: String,
}

impl AdminGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Gate configured from the environment, with the stock default.
    pub fn from_env() -> Self {
        let secret = std::env::var(ADMIN_PASSWORD_ENV)
            .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());
        Self { secret }
    }

    pub fn verify(&self, password: &str) -> bool {
        password == self.secret
    }
}

/// Session-scoped state, passed explicitly to whoever needs it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    is_admin: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Attempt admin login. Returns whether the session is now admin.
    pub fn login(&mut self, gate: &AdminGate, password: &str) -> bool {
        if gate.verify(password) {
            self.is_admin = true;
        }
        self.is_admin
    }

    pub fn logout(&mut self) {
        self.is_admin = false;
    }
}
