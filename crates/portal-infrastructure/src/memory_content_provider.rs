//! In-memory content provider backed by fixture data.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use portal_core::account::{Account, AccountId, AccountProfile};
use portal_core::content::{ContentItem, ItemId, Reaction, ReactionId};
use portal_core::provider::{ACCOUNTS, ContentProvider, ITEMS, REACTIONS};
use portal_core::{PortalError, Result};

use crate::dto::{AccountDto, AccountProfileDto, ItemDto, ReactionDto, decode_collection};

/// Fixture file layout: the three provider collections side by side.
#[derive(Debug, Default, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    users: Vec<Value>,
    #[serde(default)]
    posts: Vec<Value>,
    #[serde(default)]
    comments: Vec<Value>,
}

/// Serves fixed collections and records every call it receives.
#[derive(Debug, Default)]
pub struct InMemoryContentProvider {
    accounts: Vec<Account>,
    profiles: Vec<AccountProfile>,
    items: Vec<ContentItem>,
    reactions: Vec<Reaction>,
    failing: AtomicBool,
    failing_resources: Mutex<HashSet<&'static str>>,
    calls: Mutex<HashMap<&'static str, usize>>,
}

impl InMemoryContentProvider {
    pub fn new(accounts: Vec<Account>, items: Vec<ContentItem>, reactions: Vec<Reaction>) -> Self {
        Self {
            accounts,
            items,
            reactions,
            ..Self::default()
        }
    }

    pub fn with_profiles(mut self, profiles: Vec<AccountProfile>) -> Self {
        self.profiles = profiles;
        self
    }

    /// Decodes a fixture document with the same DTOs the HTTP provider uses.
    pub fn from_fixture_json(content: &str) -> Result<Self> {
        let fixture: FixtureFile = serde_json::from_str(content)?;

        let users = Value::Array(fixture.users);
        let accounts = decode_fixture::<AccountDto, Account>(ACCOUNTS, users.clone())?;
        let profiles = decode_fixture::<AccountProfileDto, AccountProfile>(ACCOUNTS, users)?;
        let items = decode_fixture::<ItemDto, ContentItem>(ITEMS, Value::Array(fixture.posts))?;
        let reactions =
            decode_fixture::<ReactionDto, Reaction>(REACTIONS, Value::Array(fixture.comments))?;

        tracing::debug!(
            "[InMemoryContentProvider] Loaded {} accounts, {} items, {} reactions",
            accounts.len(),
            items.len(),
            reactions.len()
        );

        Ok(Self::new(accounts, items, reactions).with_profiles(profiles))
    }

    pub fn from_fixture_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_fixture_json(&content)
    }

    /// Makes every subsequent fetch fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Makes fetches of one resource fail.
    pub fn fail_resource(&self, resource: &'static str) {
        if let Ok(mut failing) = self.failing_resources.lock() {
            failing.insert(resource);
        }
    }

    /// Total number of fetches received.
    pub fn calls(&self) -> usize {
        self.calls
            .lock()
            .map(|calls| calls.values().sum())
            .unwrap_or_default()
    }

    /// Number of fetches received for one resource.
    pub fn calls_for(&self, resource: &str) -> usize {
        self.calls
            .lock()
            .ok()
            .and_then(|calls| calls.get(resource).copied())
            .unwrap_or_default()
    }

    fn record_call(&self, resource: &'static str) -> Result<()> {
        if let Ok(mut calls) = self.calls.lock() {
            *calls.entry(resource).or_default() += 1;
        }

        let resource_failing = self
            .failing_resources
            .lock()
            .map(|failing| failing.contains(resource))
            .unwrap_or(false);

        if self.failing.load(Ordering::SeqCst) || resource_failing {
            return Err(PortalError::fetch_failed(resource, "provider unavailable"));
        }
        Ok(())
    }
}

fn decode_fixture<D, T>(resource: &'static str, value: Value) -> Result<Vec<T>>
where
    D: serde::de::DeserializeOwned + TryInto<T, Error = crate::dto::DecodeError>,
{
    let decoded = decode_collection::<D, T>(value)
        .map_err(|e| PortalError::config(format!("Invalid {} fixture: {}", resource, e)))?;
    if decoded.rejected > 0 {
        tracing::warn!(
            "[InMemoryContentProvider] Rejected {} malformed {} fixture record(s)",
            decoded.rejected,
            resource
        );
    }
    Ok(decoded.records)
}

#[async_trait]
impl ContentProvider for InMemoryContentProvider {
    async fn fetch_accounts(&self) -> Result<Vec<Account>> {
        self.record_call(ACCOUNTS)?;
        Ok(self.accounts.clone())
    }

    async fn fetch_account_profile(&self, id: AccountId) -> Result<Option<AccountProfile>> {
        self.record_call(ACCOUNTS)?;
        Ok(self.profiles.iter().find(|p| p.account.id == id).cloned())
    }

    async fn fetch_items(&self) -> Result<Vec<ContentItem>> {
        self.record_call(ITEMS)?;
        Ok(self.items.clone())
    }

    async fn fetch_item(&self, id: ItemId) -> Result<Option<ContentItem>> {
        self.record_call(ITEMS)?;
        Ok(self.items.iter().find(|item| item.id == id).cloned())
    }

    async fn fetch_reactions(&self) -> Result<Vec<Reaction>> {
        self.record_call(REACTIONS)?;
        Ok(self.reactions.clone())
    }

    async fn fetch_reaction(&self, id: ReactionId) -> Result<Option<Reaction>> {
        self.record_call(REACTIONS)?;
        Ok(self.reactions.iter().find(|r| r.id == id).cloned())
    }
}
