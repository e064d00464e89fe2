//! Ephemeral admin session flag.
//!
//! # Invariants
//! - The flag only decides which UI section is visible; it never gates
//!   repository calls.
//! - A failed login leaves the flag untouched.
//! - The flag is never persisted; it resets with the process.

use crate::repo::auth::AuthGate;
use crate::repo::RepoResult;

/// In-memory admin session state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminSession {
    authenticated: bool,
}

impl AdminSession {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Verifies `password` through `gate`; marks the session authenticated
    /// only on success.
    pub fn login(&mut self, gate: &impl AuthGate, password: &str) -> RepoResult<()> {
        gate.verify(password)?;
        self.authenticated = true;
        Ok(())
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}
