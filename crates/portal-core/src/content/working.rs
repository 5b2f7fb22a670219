//! The working collection a listing view operates on.

use crate::account::AccountId;
use crate::identity::SessionIdentity;

use super::local_id::LocalIdAllocator;
use super::model::{ContentItem, ItemId, Reaction};
use super::scope::ScopedContent;

/// Owner id recorded on items an admin authors locally. No account has it.
pub const ADMIN_AUTHOR_ID: AccountId = 0;

/// Scoped items and reactions plus the edits made during this session.
///
/// Edits never reach the content provider: adding prepends a locally-owned
/// item, deleting drops it from this collection only. Search is only
/// offered here, over already-scoped records.
#[derive(Debug, Clone)]
pub struct WorkingCollection {
    identity: SessionIdentity,
    items: Vec<ContentItem>,
    reactions: Vec<Reaction>,
    local_ids: LocalIdAllocator,
}

impl WorkingCollection {
    pub fn new(identity: SessionIdentity, scoped: ScopedContent) -> Self {
        Self {
            identity,
            items: scoped.items,
            reactions: scoped.reactions,
            local_ids: LocalIdAllocator::new(),
        }
    }

    /// An empty collection, used when fetching failed.
    pub fn empty(identity: SessionIdentity) -> Self {
        Self::new(identity, ScopedContent::default())
    }

    pub fn identity(&self) -> &SessionIdentity {
        &self.identity
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items whose title or body contains `query`, ignoring case.
    ///
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&ContentItem> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.matches_lowercase(&needle))
            .collect()
    }

    pub fn reactions_for(&self, item_id: ItemId) -> Vec<&Reaction> {
        self.reactions
            .iter()
            .filter(|reaction| reaction.parent_item_id == item_id)
            .collect()
    }

    /// Prepends an item authored in this session.
    ///
    /// Returns `None` without changing anything when title or body is blank.
    pub fn add_local(&mut self, title: &str, body: &str) -> Option<&ContentItem> {
        if title.trim().is_empty() || body.trim().is_empty() {
            return None;
        }

        let item = ContentItem {
            id: self.local_ids.next_id(),
            owner_id: self.identity.owner_id().unwrap_or(ADMIN_AUTHOR_ID),
            title: title.to_string(),
            body: body.to_string(),
        };
        tracing::debug!("[WorkingCollection] Added local item id={}", item.id);
        self.items.insert(0, item);
        self.items.first()
    }

    /// Removes an item and its reactions. Deleting an absent id is a no-op.
    ///
    /// Returns whether anything was removed.
    pub fn delete(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            self.reactions.retain(|reaction| reaction.parent_item_id != id);
            tracing::debug!("[WorkingCollection] Deleted item id={}", id);
        }
        removed
    }
}
