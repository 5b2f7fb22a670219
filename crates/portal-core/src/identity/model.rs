//! Session identity domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::account::AccountId;

/// Privilege level of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// Who is currently authenticated, and at what privilege level.
///
/// A `User` always carries the id of the account it logged in as; an
/// incomplete user identity cannot be constructed. Incomplete records only
/// exist as [`StoredIdentity`] and are rejected by the access guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionIdentity {
    Admin,
    User { owner_id: AccountId },
}

impl SessionIdentity {
    pub fn role(&self) -> Role {
        match self {
            Self::Admin => Role::Admin,
            Self::User { .. } => Role::User,
        }
    }

    /// The account id this identity is scoped to; `None` for admin.
    pub fn owner_id(&self) -> Option<AccountId> {
        match self {
            Self::Admin => None,
            Self::User { owner_id } => Some(*owner_id),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// The raw identity record as persisted by an [`IdentityStore`].
///
/// Field names match the persistence keys: `role`, `userId` (string-encoded
/// integer) and the optional `userName` display-name cache. Any field may be
/// missing or malformed on disk, so nothing here is trusted until
/// [`StoredIdentity::identity`] validates it.
///
/// [`IdentityStore`]: super::IdentityStore
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredIdentity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl StoredIdentity {
    /// Builds the record written on successful login.
    ///
    /// `userId` and `userName` are only written for user sessions.
    pub fn from_identity(identity: &SessionIdentity, display_name: Option<&str>) -> Self {
        match identity {
            SessionIdentity::Admin => Self {
                role: Some(Role::Admin.to_string()),
                user_id: None,
                user_name: None,
            },
            SessionIdentity::User { owner_id } => Self {
                role: Some(Role::User.to_string()),
                user_id: Some(owner_id.to_string()),
                user_name: display_name.map(str::to_string),
            },
        }
    }

    /// Parses the record into a complete identity.
    ///
    /// Returns `None` for a missing or unknown role, and for a user role
    /// without a parseable `userId`.
    pub fn identity(&self) -> Option<SessionIdentity> {
        let role: Role = self.role.as_deref()?.parse().ok()?;
        match role {
            Role::Admin => Some(SessionIdentity::Admin),
            Role::User => {
                let owner_id = self.user_id.as_deref()?.trim().parse().ok()?;
                Some(SessionIdentity::User { owner_id })
            }
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }
}
