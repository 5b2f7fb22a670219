//! Account domain module.
//!
//! - `model`: directory accounts and extended profiles
//! - `directory`: search and sort for the public directory listing

mod directory;
mod model;

pub use directory::{DirectoryQuery, SortOrder};
pub use model::{Account, AccountId, AccountProfile, Address, Geo};
