//! Admin credential gate.
//!
//! # Responsibility
//! - Compare submitted passwords against the stored credential.
//! - Overwrite the credential after verifying the old one.
//!
//! # Invariants
//! - Comparison and storage are plaintext equality; no hashing, no
//!   strength policy. The gate is a UI boundary, not an access-control
//!   layer: repository calls stay reachable regardless of auth outcome.

use crate::repo::{RepoError, RepoResult};
use crate::store::{BlobStore, ADMIN_PASSWORD_KEY, DEFAULT_ADMIN_PASSWORD};
use log::{info, warn};

/// Credential verification contract.
pub trait AuthGate {
    /// Succeeds iff `password` equals the stored credential.
    fn verify(&self, password: &str) -> RepoResult<()>;
    /// Replaces the credential after checking `old` against the current one.
    fn change_password(&self, old: &str, new: &str) -> RepoResult<()>;
}

/// Key-value backed credential gate.
///
/// Falls back to the seeded default credential when the key was never
/// written.
pub struct KvAuthGate<'s> {
    store: &'s BlobStore,
}

impl<'s> KvAuthGate<'s> {
    pub fn new(store: &'s BlobStore) -> Self {
        Self { store }
    }

    fn stored_password(&self) -> RepoResult<String> {
        Ok(self
            .store
            .get(ADMIN_PASSWORD_KEY)?
            .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string()))
    }
}

impl AuthGate for KvAuthGate<'_> {
    fn verify(&self, password: &str) -> RepoResult<()> {
        if password == self.stored_password()? {
            return Ok(());
        }
        warn!("event=auth_verify module=auth status=denied");
        Err(RepoError::Auth("incorrect password".to_string()))
    }

    fn change_password(&self, old: &str, new: &str) -> RepoResult<()> {
        if old != self.stored_password()? {
            warn!("event=auth_change module=auth status=denied");
            return Err(RepoError::Auth("old password is incorrect".to_string()));
        }
        // Overwrites unconditionally; the new value is not policed.
        self.store.set(ADMIN_PASSWORD_KEY, new)?;
        info!("event=auth_change module=auth status=ok");
        Ok(())
    }
}
