//! In-memory identity store.

use std::sync::Mutex;

use portal_core::identity::{IdentityStore, StoredIdentity};
use portal_core::{PortalError, Result};

/// Process-local identity store, used by tests and fixture sessions.
#[derive(Debug, Default)]
pub struct InMemoryIdentityStore {
    record: Mutex<Option<StoredIdentity>>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: StoredIdentity) -> Self {
        Self {
            record: Mutex::new(Some(record)),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<StoredIdentity>>> {
        self.record
            .lock()
            .map_err(|e| PortalError::internal(format!("Identity store lock poisoned: {}", e)))
    }
}

impl IdentityStore for InMemoryIdentityStore {
    fn load(&self) -> Result<Option<StoredIdentity>> {
        Ok(self.lock()?.clone())
    }

    fn save(&self, identity: &StoredIdentity) -> Result<()> {
        *self.lock()? = Some(identity.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.lock()? = None;
        Ok(())
    }
}
