//! Shared helpers for CLI commands.

use prayerboard_core::{AdminGate, Session, ValidationError};

/// Build an admin session from a supplied password, or fail with the
/// board's standard message.
pub fn admin_session(password: &str) -> Result<Session, Box<dyn std::error::Error>> {
    let gate = AdminGate::from_env();
    let mut session = Session::new();
    if !session.login(&gate, password) {
        return Err("Incorrect password.".into());
    }
    Ok(session)
}

/// Trim user-supplied text, rejecting input that is empty afterwards.
/// The store treats non-emptiness as a precondition; this is the
/// submission boundary that enforces it.
pub fn require_text(text: &str) -> Result<String, Box<dyn std::error::Error>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyText {
            field: "text".into(),
        }
        .into());
    }
    Ok(trimmed.to_string())
}
