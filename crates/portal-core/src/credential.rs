//! Credential verification.

use crate::account::Account;
use crate::config::AdminCredential;
use crate::error::{PortalError, Result};
use crate::identity::SessionIdentity;
use crate::provider::ContentProvider;

/// A successful verification: the identity plus the display name to cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedLogin {
    pub identity: SessionIdentity,
    pub display_name: Option<String>,
}

/// Checks an email/password pair against the admin credential and the
/// account directory.
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    admin: AdminCredential,
}

impl CredentialVerifier {
    pub fn new(admin: AdminCredential) -> Self {
        Self { admin }
    }

    /// Verifies the pair, fetching the directory only when the admin pair
    /// does not match.
    ///
    /// # Errors
    ///
    /// - `DirectoryUnavailable` when the directory cannot be fetched
    /// - `InvalidCredentials` when no account matches
    pub async fn verify(
        &self,
        email: &str,
        password: &str,
        directory: &dyn ContentProvider,
    ) -> Result<VerifiedLogin> {
        if self.admin.matches(email, password) {
            tracing::debug!("[CredentialVerifier] Admin credential matched");
            return Ok(VerifiedLogin {
                identity: SessionIdentity::Admin,
                display_name: None,
            });
        }

        let accounts = directory.fetch_accounts().await.map_err(|e| {
            tracing::error!("[CredentialVerifier] Account directory unavailable: {}", e);
            PortalError::directory_unavailable(e.to_string())
        })?;

        self.verify_against(email, password, &accounts)
    }

    /// Verifies the pair against an already-fetched directory.
    pub fn verify_against(
        &self,
        email: &str,
        password: &str,
        accounts: &[Account],
    ) -> Result<VerifiedLogin> {
        if self.admin.matches(email, password) {
            return Ok(VerifiedLogin {
                identity: SessionIdentity::Admin,
                display_name: None,
            });
        }

        accounts
            .iter()
            .find(|account| account.email_matches(email))
            .filter(|account| account.login_handle == password)
            .map(|account| VerifiedLogin {
                identity: SessionIdentity::User {
                    owner_id: account.id,
                },
                display_name: Some(account.display_name.clone()),
            })
            .ok_or(PortalError::InvalidCredentials)
    }
}
