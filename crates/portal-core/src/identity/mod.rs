//! Session identity module.
//!
//! # Module Structure
//!
//! - `model`: validated [`SessionIdentity`], its [`Role`], and the raw
//!   persisted [`StoredIdentity`] record
//! - `store`: the [`IdentityStore`] persistence trait
//! - `context`: [`SessionContext`], the read/write/clear handle injected into
//!   every protected view

mod context;
mod model;
mod store;

pub use context::SessionContext;
pub use model::{Role, SessionIdentity, StoredIdentity};
pub use store::IdentityStore;
