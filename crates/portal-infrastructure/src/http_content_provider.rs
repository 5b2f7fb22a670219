//! HTTP content provider.
//!
//! Talks to a JSONPlaceholder-shaped REST API: `/users`, `/posts`,
//! `/comments` and their `/{id}` lookups.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use portal_core::account::{Account, AccountId, AccountProfile};
use portal_core::config::ProviderConfig;
use portal_core::content::{ContentItem, ItemId, Reaction, ReactionId};
use portal_core::provider::{ACCOUNTS, ContentProvider, ITEMS, REACTIONS};
use portal_core::{PortalError, Result};

use crate::dto::{
    AccountDto, AccountProfileDto, DecodeError, ItemDto, ReactionDto, decode_collection,
    decode_record,
};

pub struct HttpContentProvider {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpContentProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(config.base_url.clone(), config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GETs `path` as JSON. `Ok(None)` means the provider answered 404.
    async fn get_json(&self, resource: &'static str, path: &str) -> Result<Option<Value>> {
        let url = self.url(path);
        tracing::debug!("[HttpContentProvider] GET {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| PortalError::fetch_failed(resource, format!("request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(PortalError::fetch_failed(
                resource,
                format!("provider returned {}", status),
            ));
        }

        let value = response
            .json::<Value>()
            .await
            .map_err(|e| PortalError::fetch_failed(resource, format!("invalid JSON: {}", e)))?;
        Ok(Some(value))
    }

    async fn get_collection<D, T>(&self, resource: &'static str) -> Result<Vec<T>>
    where
        D: DeserializeOwned + TryInto<T, Error = DecodeError>,
    {
        let value = self
            .get_json(resource, resource)
            .await?
            .ok_or_else(|| PortalError::fetch_failed(resource, "provider returned 404 Not Found"))?;

        let decoded = decode_collection::<D, T>(value)
            .map_err(|e| PortalError::fetch_failed(resource, e.to_string()))?;
        if decoded.rejected > 0 {
            tracing::warn!(
                "[HttpContentProvider] Rejected {} malformed {} record(s)",
                decoded.rejected,
                resource
            );
        }
        Ok(decoded.records)
    }

    async fn get_record<D, T>(&self, resource: &'static str, id: i64) -> Result<Option<T>>
    where
        D: DeserializeOwned + TryInto<T, Error = DecodeError>,
    {
        let Some(value) = self.get_json(resource, &format!("{}/{}", resource, id)).await? else {
            return Ok(None);
        };

        decode_record::<D, T>(value).map(Some).map_err(|e| {
            tracing::warn!(
                "[HttpContentProvider] Rejected malformed {} record {}: {}",
                resource,
                id,
                e
            );
            PortalError::fetch_failed(resource, e.to_string())
        })
    }
}

#[async_trait]
impl ContentProvider for HttpContentProvider {
    async fn fetch_accounts(&self) -> Result<Vec<Account>> {
        self.get_collection::<AccountDto, Account>(ACCOUNTS).await
    }

    async fn fetch_account_profile(&self, id: AccountId) -> Result<Option<AccountProfile>> {
        self.get_record::<AccountProfileDto, AccountProfile>(ACCOUNTS, id)
            .await
    }

    async fn fetch_items(&self) -> Result<Vec<ContentItem>> {
        self.get_collection::<ItemDto, ContentItem>(ITEMS).await
    }

    async fn fetch_item(&self, id: ItemId) -> Result<Option<ContentItem>> {
        self.get_record::<ItemDto, ContentItem>(ITEMS, id).await
    }

    async fn fetch_reactions(&self) -> Result<Vec<Reaction>> {
        self.get_collection::<ReactionDto, Reaction>(REACTIONS).await
    }

    async fn fetch_reaction(&self, id: ReactionId) -> Result<Option<Reaction>> {
        self.get_record::<ReactionDto, Reaction>(REACTIONS, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let provider = HttpContentProvider::new("https://example.test/", Duration::from_secs(1));
        assert_eq!(provider.base_url(), "https://example.test");
        assert_eq!(provider.url("users"), "https://example.test/users");
        assert_eq!(provider.url("/posts/3"), "https://example.test/posts/3");
    }

    #[test]
    fn test_from_config_uses_defaults() {
        let provider = HttpContentProvider::from_config(&ProviderConfig::default());
        assert_eq!(provider.base_url(), "https://jsonplaceholder.typicode.com");
        assert_eq!(provider.timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_a_fetch_failure() {
        // Port 9 (discard) is closed on test hosts; the connection is refused.
        let provider = HttpContentProvider::new("http://127.0.0.1:9", Duration::from_secs(2));

        let err = provider.fetch_items().await.unwrap_err();
        assert!(err.is_fetch_failed());
        assert!(err.to_string().contains("posts"));

        let err = provider.fetch_account_profile(1).await.unwrap_err();
        assert!(err.is_fetch_failed());
    }
}
