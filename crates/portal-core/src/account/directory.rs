//! Client-side search and sort over the public account directory.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::model::Account;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Search text plus sort direction for the directory listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryQuery {
    pub search: String,
    pub order: SortOrder,
}

impl DirectoryQuery {
    pub fn new(search: impl Into<String>, order: SortOrder) -> Self {
        Self {
            search: search.into(),
            order,
        }
    }

    /// Keeps accounts whose display name or login handle contains the
    /// search text (case-insensitive), sorted by display name.
    pub fn apply<'a>(&self, accounts: &'a [Account]) -> Vec<&'a Account> {
        let needle = self.search.to_lowercase();
        let mut matched: Vec<&Account> = accounts
            .iter()
            .filter(|a| {
                a.display_name.to_lowercase().contains(&needle)
                    || a.login_handle.to_lowercase().contains(&needle)
            })
            .collect();

        matched.sort_by(|a, b| {
            let ordering = compare_names(&a.display_name, &b.display_name);
            match self.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        matched
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: i64, name: &str, handle: &str) -> Account {
        Account {
            id,
            display_name: name.to_string(),
            login_handle: handle.to_string(),
            email: format!("{}@example.com", handle.to_lowercase()),
        }
    }

    fn directory() -> Vec<Account> {
        vec![
            account(1, "Leanne Graham", "Bret"),
            account(2, "Ervin Howell", "Antonette"),
            account(3, "Clementine Bauch", "Samantha"),
            account(4, "patricia Lebsack", "Karianne"),
        ]
    }

    fn ids(accounts: &[&Account]) -> Vec<i64> {
        accounts.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_empty_search_sorts_ascending() {
        let accounts = directory();
        let result = DirectoryQuery::default().apply(&accounts);
        assert_eq!(ids(&result), vec![3, 2, 1, 4]);
    }

    #[test]
    fn test_descending_order() {
        let accounts = directory();
        let result = DirectoryQuery::new("", SortOrder::Desc).apply(&accounts);
        assert_eq!(ids(&result), vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_search_matches_name_or_handle() {
        let accounts = directory();
        assert_eq!(ids(&DirectoryQuery::new("GRAHAM", SortOrder::Asc).apply(&accounts)), vec![1]);
        assert_eq!(ids(&DirectoryQuery::new("samantha", SortOrder::Asc).apply(&accounts)), vec![3]);
        assert_eq!(ids(&DirectoryQuery::new("an", SortOrder::Asc).apply(&accounts)), vec![3, 2, 1, 4]);
        assert!(DirectoryQuery::new("zzz", SortOrder::Asc).apply(&accounts).is_empty());
    }

    #[test]
    fn test_sort_order_parses() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("sideways".parse::<SortOrder>().is_err());
    }
}
