//! The protected, scoped post listing.

use std::collections::HashSet;

use portal_core::content::{ContentItem, ItemId, Reaction, WorkingCollection, scope};
use portal_core::guard::RedirectTask;
use portal_core::identity::SessionIdentity;
use portal_core::navigation::Route;
use portal_core::{PortalError, Result};

use crate::context::AppContext;
use crate::protected::{Entry, enter_protected};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    /// Guard denied entry; a redirect to login is pending.
    Unauthorized,
    Ready,
}

/// State of one visit to the listing.
///
/// Dropping the view tears it down, which cancels a pending redirect.
pub struct ListingView {
    ctx: AppContext,
    status: ViewStatus,
    collection: Option<WorkingCollection>,
    expanded: HashSet<ItemId>,
    message: Option<String>,
    redirect: Option<RedirectTask>,
}

impl ListingView {
    /// Enters the listing: guard first, then items and reactions together.
    ///
    /// A denied entry returns immediately in the unauthorized state without
    /// touching the provider. A failed fetch yields a ready view with an
    /// empty collection and a message.
    pub async fn enter(ctx: AppContext) -> Self {
        let identity = match enter_protected(&ctx, Route::Posts) {
            Entry::Admitted(identity) => identity,
            Entry::Denied(redirect) => return Self::denied(ctx, redirect),
        };

        let provider = ctx.provider.clone();
        let fetched = tokio::try_join!(provider.fetch_items(), provider.fetch_reactions());

        let (collection, message) = match fetched {
            Ok((items, reactions)) => (
                WorkingCollection::new(identity.clone(), scope(&identity, items, reactions)),
                None,
            ),
            Err(e) => {
                tracing::error!("[ListingView] Failed to load posts: {}", e);
                (WorkingCollection::empty(identity), Some(e.user_message()))
            }
        };

        Self {
            ctx,
            status: ViewStatus::Ready,
            collection: Some(collection),
            expanded: HashSet::new(),
            message,
            redirect: None,
        }
    }

    fn denied(ctx: AppContext, redirect: RedirectTask) -> Self {
        Self {
            ctx,
            status: ViewStatus::Unauthorized,
            collection: None,
            expanded: HashSet::new(),
            message: Some(PortalError::Unauthorized.user_message()),
            redirect: Some(redirect),
        }
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == ViewStatus::Unauthorized
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn identity(&self) -> Option<&SessionIdentity> {
        self.collection.as_ref().map(WorkingCollection::identity)
    }

    pub fn items(&self) -> &[ContentItem] {
        self.collection
            .as_ref()
            .map(WorkingCollection::items)
            .unwrap_or_default()
    }

    pub fn search(&self, query: &str) -> Vec<&ContentItem> {
        self.collection
            .as_ref()
            .map(|c| c.search(query))
            .unwrap_or_default()
    }

    pub fn reactions_for(&self, id: ItemId) -> Vec<&Reaction> {
        self.collection
            .as_ref()
            .map(|c| c.reactions_for(id))
            .unwrap_or_default()
    }

    /// Adds a locally-authored item; blank input changes nothing.
    pub fn add_local(&mut self, title: &str, body: &str) -> Option<ItemId> {
        self.collection
            .as_mut()?
            .add_local(title, body)
            .map(|item| item.id)
    }

    /// Removes an item from the working collection. Admin only.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` when the view was never admitted
    /// - `Forbidden` for a user identity
    pub fn delete(&mut self, id: ItemId) -> Result<bool> {
        let collection = self.collection.as_mut().ok_or(PortalError::Unauthorized)?;
        if !collection.identity().is_admin() {
            return Err(PortalError::Forbidden("delete posts".to_string()));
        }
        self.expanded.remove(&id);
        Ok(collection.delete(id))
    }

    /// Shows or hides an item's reactions. Returns whether it is now shown.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn is_expanded(&self, id: ItemId) -> bool {
        self.expanded.contains(&id)
    }

    /// Takes the pending redirect, e.g. to await it.
    pub fn take_redirect(&mut self) -> Option<RedirectTask> {
        self.redirect.take()
    }

    /// Clears the identity, then leaves for the login entry.
    pub fn logout(mut self) -> Result<()> {
        self.redirect.take();
        self.ctx.session.clear()?;
        self.ctx.navigator.navigate(Route::Login);
        Ok(())
    }
}
