//! File-backed identity store.

use std::path::PathBuf;

use portal_core::Result;
use portal_core::identity::{IdentityStore, StoredIdentity};

use crate::paths::PortalPaths;
use crate::storage::AtomicTomlFile;

/// Persists the session identity as `identity.toml`.
///
/// The record has no expiry; it survives restarts until `clear`, which
/// deletes the file so every key disappears at once.
pub struct FileIdentityStore {
    file: AtomicTomlFile<StoredIdentity>,
}

impl FileIdentityStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    /// Opens the store at the resolved `identity.toml` path.
    pub fn open(paths: &PortalPaths) -> Result<Self> {
        Ok(Self::new(paths.identity_file()?))
    }
}

impl IdentityStore for FileIdentityStore {
    fn load(&self) -> Result<Option<StoredIdentity>> {
        Ok(self.file.load()?)
    }

    fn save(&self, identity: &StoredIdentity) -> Result<()> {
        self.file.save(identity)?;
        tracing::debug!(
            "[FileIdentityStore] Saved identity to {}",
            self.file.path().display()
        );
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.file.remove()?;
        tracing::debug!(
            "[FileIdentityStore] Removed {}",
            self.file.path().display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::identity::{SessionContext, SessionIdentity};
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_identity_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PortalPaths::with_base(temp_dir.path());

        let context = SessionContext::new(Arc::new(FileIdentityStore::open(&paths).unwrap()));
        context
            .write(&SessionIdentity::User { owner_id: 4 }, Some("Patricia Lebsack"))
            .unwrap();

        let reopened = FileIdentityStore::open(&paths).unwrap();
        let stored = reopened.load().unwrap().unwrap();
        assert_eq!(stored.user_id.as_deref(), Some("4"));
        assert_eq!(stored.display_name(), Some("Patricia Lebsack"));
        assert_eq!(stored.identity(), Some(SessionIdentity::User { owner_id: 4 }));
    }

    #[test]
    fn test_file_uses_persistence_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("identity.toml");
        let store = FileIdentityStore::new(path.clone());

        store
            .save(&StoredIdentity::from_identity(
                &SessionIdentity::User { owner_id: 2 },
                Some("Ervin Howell"),
            ))
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("role = \"user\""));
        assert!(content.contains("userId = \"2\""));
        assert!(content.contains("userName = \"Ervin Howell\""));
    }

    #[test]
    fn test_clear_removes_every_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("identity.toml");
        let store = FileIdentityStore::new(path.clone());

        store
            .save(&StoredIdentity::from_identity(&SessionIdentity::Admin, None))
            .unwrap();
        store.clear().unwrap();

        assert!(!path.exists());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_hand_edited_incomplete_record_loads_but_is_not_an_identity() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("identity.toml");
        std::fs::write(&path, "role = \"user\"\n").unwrap();

        let stored = FileIdentityStore::new(path).load().unwrap().unwrap();
        assert!(stored.identity().is_none());
    }
}
