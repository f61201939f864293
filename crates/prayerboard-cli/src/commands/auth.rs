//! Admin session check.
//!
//! The gate is a shared secret, not a security control. Each CLI
//! invocation is its own session; admin-gated commands take the
//! password directly and build their session from it.

use clap::Subcommand;

use super::common;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Verify the admin password
    Login {
        /// Admin password
        password: String,
    },
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AuthAction::Login { password } => {
            let session = common::admin_session(&password)?;
            let status = serde_json::json!({ "isAdmin": session.is_admin() });
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }
    Ok(())
}
