//! Identity store trait.

use crate::error::Result;
use crate::identity::StoredIdentity;

/// Persistence for the current session's identity record.
///
/// The record survives restarts of the client and has no expiry; only
/// [`IdentityStore::clear`] removes it. Operations are synchronous so the
/// access guard can read the resident record in the same tick as the view
/// entry, before any content fetch is issued.
pub trait IdentityStore: Send + Sync {
    /// Loads the stored record, `Ok(None)` when nothing is stored.
    fn load(&self) -> Result<Option<StoredIdentity>>;

    /// Replaces any prior record.
    fn save(&self, identity: &StoredIdentity) -> Result<()>;

    /// Removes every key of the record together.
    fn clear(&self) -> Result<()>;
}
