//! Content provider trait.
//!
//! The external, read-only source of accounts, content items and reactions.

use async_trait::async_trait;

use crate::account::{Account, AccountId, AccountProfile};
use crate::content::{ContentItem, ItemId, Reaction, ReactionId};
use crate::error::Result;

/// Resource names used in fetch errors and logs.
pub const ACCOUNTS: &str = "users";
pub const ITEMS: &str = "posts";
pub const REACTIONS: &str = "comments";

/// Keyed, read-only access to the remote content collections.
///
/// Implementations decode every record strictly at this boundary; callers
/// only ever see validated domain values. Collection fetches fail with
/// [`PortalError::FetchFailed`]. Single-id lookups return `Ok(None)` when the
/// provider does not know the id.
///
/// [`PortalError::FetchFailed`]: crate::error::PortalError::FetchFailed
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn fetch_accounts(&self) -> Result<Vec<Account>>;

    async fn fetch_account_profile(&self, id: AccountId) -> Result<Option<AccountProfile>>;

    async fn fetch_items(&self) -> Result<Vec<ContentItem>>;

    async fn fetch_item(&self, id: ItemId) -> Result<Option<ContentItem>>;

    async fn fetch_reactions(&self) -> Result<Vec<Reaction>>;

    async fn fetch_reaction(&self, id: ReactionId) -> Result<Option<Reaction>>;
}
