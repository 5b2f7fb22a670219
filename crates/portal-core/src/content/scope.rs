//! Role-based scoping of content collections.

use std::collections::HashSet;

use crate::account::Account;
use crate::identity::SessionIdentity;

use super::model::{ContentItem, ItemId, Reaction};

/// The records visible to one identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopedContent {
    pub items: Vec<ContentItem>,
    pub reactions: Vec<Reaction>,
}

/// Filters items and their reactions down to what `identity` may see.
///
/// Admin sees both collections unchanged. A user sees the items it owns
/// plus any locally-authored item, in source order, and only the reactions
/// whose parent is one of those items.
pub fn scope(
    identity: &SessionIdentity,
    items: Vec<ContentItem>,
    reactions: Vec<Reaction>,
) -> ScopedContent {
    let owner_id = match identity {
        SessionIdentity::Admin => return ScopedContent { items, reactions },
        SessionIdentity::User { owner_id } => *owner_id,
    };

    let items: Vec<ContentItem> = items
        .into_iter()
        .filter(|item| item.owner_id == owner_id || item.is_local())
        .collect();

    let visible: HashSet<ItemId> = items.iter().map(|item| item.id).collect();
    let reactions: Vec<Reaction> = reactions
        .into_iter()
        .filter(|reaction| visible.contains(&reaction.parent_item_id))
        .collect();

    tracing::debug!(
        "[scope] owner_id={} visible_items={} visible_reactions={}",
        owner_id,
        visible.len(),
        reactions.len()
    );

    ScopedContent { items, reactions }
}

/// Filters the account directory the same way: admin sees every account, a
/// user sees only its own record.
pub fn scope_accounts(identity: &SessionIdentity, accounts: Vec<Account>) -> Vec<Account> {
    match identity {
        SessionIdentity::Admin => accounts,
        SessionIdentity::User { owner_id } => accounts
            .into_iter()
            .filter(|account| account.id == *owner_id)
            .collect(),
    }
}
