//! The public account directory and profile pages.

use portal_core::account::{Account, AccountId, AccountProfile, DirectoryQuery};
use portal_core::navigation::Route;
use portal_core::{PortalError, Result};

use crate::context::AppContext;

pub struct DirectoryView {
    accounts: Vec<Account>,
    message: Option<String>,
}

impl DirectoryView {
    /// Loads the directory. A failed fetch leaves an empty list and a message.
    pub async fn enter(ctx: &AppContext) -> Self {
        ctx.navigator.navigate(Route::Users);

        match ctx.provider.fetch_accounts().await {
            Ok(accounts) => Self {
                accounts,
                message: None,
            },
            Err(e) => {
                tracing::error!("[DirectoryView] Failed to load users: {}", e);
                Self {
                    accounts: Vec::new(),
                    message: Some(e.user_message()),
                }
            }
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn list(&self, query: &DirectoryQuery) -> Vec<&Account> {
        query.apply(&self.accounts)
    }
}

/// Loads one account's profile page.
///
/// # Errors
///
/// `NotFound` for an unknown id, `FetchFailed` when the provider fails.
pub async fn load_profile(ctx: &AppContext, id: AccountId) -> Result<AccountProfile> {
    ctx.navigator.navigate(Route::UserProfile(id));

    ctx.provider
        .fetch_account_profile(id)
        .await
        .inspect_err(|e| tracing::error!("[load_profile] Failed to load user {}: {}", id, e))?
        .ok_or_else(|| PortalError::not_found("User", id.to_string()))
}
