use std::sync::Arc;

use crate::error::Result;
use crate::identity::{IdentityStore, SessionIdentity, StoredIdentity};

/// Read/write/clear handle over the identity store.
///
/// Passed explicitly into every protected view entry point instead of being
/// read from ambient state. Cloning shares the same underlying store.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn IdentityStore>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn IdentityStore>) -> Self {
        Self { store }
    }

    /// Reads the raw stored record.
    pub fn read(&self) -> Result<Option<StoredIdentity>> {
        self.store.load()
    }

    /// Writes a new identity, replacing any prior one.
    pub fn write(&self, identity: &SessionIdentity, display_name: Option<&str>) -> Result<()> {
        let record = StoredIdentity::from_identity(identity, display_name);
        self.store.save(&record)?;
        tracing::info!("[SessionContext] Session identity written: role={}", identity.role());
        Ok(())
    }

    /// Erases role, user id and display name together.
    pub fn clear(&self) -> Result<()> {
        self.store.clear()?;
        tracing::info!("[SessionContext] Session identity cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortalError;
    use std::sync::Mutex;

    struct MockIdentityStore {
        record: Mutex<Option<StoredIdentity>>,
    }

    impl MockIdentityStore {
        fn new() -> Self {
            Self {
                record: Mutex::new(None),
            }
        }
    }

    impl IdentityStore for MockIdentityStore {
        fn load(&self) -> Result<Option<StoredIdentity>> {
            Ok(self.record.lock().unwrap().clone())
        }

        fn save(&self, identity: &StoredIdentity) -> Result<()> {
            *self.record.lock().unwrap() = Some(identity.clone());
            Ok(())
        }

        fn clear(&self) -> Result<()> {
            *self.record.lock().unwrap() = None;
            Ok(())
        }
    }

    struct BrokenIdentityStore;

    impl IdentityStore for BrokenIdentityStore {
        fn load(&self) -> Result<Option<StoredIdentity>> {
            Err(PortalError::io("disk on fire"))
        }

        fn save(&self, _identity: &StoredIdentity) -> Result<()> {
            Err(PortalError::io("disk on fire"))
        }

        fn clear(&self) -> Result<()> {
            Err(PortalError::io("disk on fire"))
        }
    }

    #[test]
    fn test_write_replaces_prior_identity() {
        let context = SessionContext::new(Arc::new(MockIdentityStore::new()));

        context
            .write(&SessionIdentity::User { owner_id: 2 }, Some("Ervin Howell"))
            .unwrap();
        context.write(&SessionIdentity::Admin, None).unwrap();

        let stored = context.read().unwrap().unwrap();
        assert_eq!(stored.identity(), Some(SessionIdentity::Admin));
        assert!(stored.user_id.is_none());
        assert!(stored.user_name.is_none());
    }

    #[test]
    fn test_clear_erases_everything() {
        let context = SessionContext::new(Arc::new(MockIdentityStore::new()));
        context
            .write(&SessionIdentity::User { owner_id: 4 }, Some("Patricia"))
            .unwrap();

        context.clear().unwrap();

        assert!(context.read().unwrap().is_none());
    }

    #[test]
    fn test_clones_share_the_store() {
        let context = SessionContext::new(Arc::new(MockIdentityStore::new()));
        let other = context.clone();

        context.write(&SessionIdentity::Admin, None).unwrap();

        let stored = other.read().unwrap().unwrap();
        assert_eq!(stored.identity(), Some(SessionIdentity::Admin));
    }

    #[test]
    fn test_unreadable_store_surfaces_error() {
        let context = SessionContext::new(Arc::new(BrokenIdentityStore));
        assert!(context.read().is_err());
        assert!(context.clear().is_err());
    }
}
