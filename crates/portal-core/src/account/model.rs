//! Account domain model.

use serde::Serialize;

/// Account identifier as issued by the content provider.
pub type AccountId = i64;

/// A directory account.
///
/// Immutable and sourced read-only from the content provider; `id` is
/// unique within the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountId,
    pub display_name: String,
    /// Doubles as the account's password when logging in.
    pub login_handle: String,
    pub email: String,
}

impl Account {
    /// Case-insensitive exact match on email.
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }

    /// First character of the display name, used as an avatar glyph.
    pub fn initial(&self) -> Option<char> {
        self.display_name.chars().next()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub geo: Geo,
}

/// The extended record returned by a single-account lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountProfile {
    pub account: Account,
    pub phone: String,
    pub address: Address,
}

impl AccountProfile {
    /// Embeddable map link centred on the account's coordinates.
    pub fn map_link(&self) -> String {
        format!(
            "https://www.google.com/maps?q={},{}&z=15&output=embed",
            self.address.geo.lat, self.address.geo.lng
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account {
            id: 1,
            display_name: "Leanne Graham".to_string(),
            login_handle: "Bret".to_string(),
            email: "Sincere@april.biz".to_string(),
        }
    }

    #[test]
    fn test_email_matches_ignores_case() {
        let account = account();
        assert!(account.email_matches("sincere@april.biz"));
        assert!(account.email_matches("SINCERE@APRIL.BIZ"));
        assert!(!account.email_matches("sincere@april.biz "));
        assert!(!account.email_matches("sincere@april"));
    }

    #[test]
    fn test_initial() {
        assert_eq!(account().initial(), Some('L'));
    }

    #[test]
    fn test_map_link() {
        let profile = AccountProfile {
            account: account(),
            phone: "1-770-736-8031 x56442".to_string(),
            address: Address {
                street: "Kulas Light".to_string(),
                city: "Gwenborough".to_string(),
                geo: Geo {
                    lat: "-37.3159".to_string(),
                    lng: "81.1496".to_string(),
                },
            },
        };
        assert_eq!(
            profile.map_link(),
            "https://www.google.com/maps?q=-37.3159,81.1496&z=15&output=embed"
        );
    }
}
