//! Content item and reaction domain models.

use serde::Serialize;

use crate::account::AccountId;

/// Content item identifier.
///
/// Provider-issued ids are positive. Items added locally during a session
/// take ids from the negative range so the two can never collide.
pub type ItemId = i64;

/// Reaction (comment) identifier.
pub type ReactionId = i64;

/// Returns true for ids handed out by [`LocalIdAllocator`].
///
/// [`LocalIdAllocator`]: super::LocalIdAllocator
pub fn is_local_id(id: ItemId) -> bool {
    id < 0
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: ItemId,
    pub owner_id: AccountId,
    pub title: String,
    pub body: String,
}

impl ContentItem {
    /// True when the item was authored in the current session.
    pub fn is_local(&self) -> bool {
        is_local_id(self.id)
    }

    /// Case-insensitive substring match on title or body.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.body.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub id: ReactionId,
    pub parent_item_id: ItemId,
    pub author_name: String,
    pub author_email: String,
    pub body: String,
}

impl Reaction {
    pub fn author_initial(&self) -> Option<char> {
        self.author_name.chars().next()
    }
}
