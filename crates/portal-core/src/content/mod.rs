//! Content domain module.
//!
//! - `model`: content items, reactions and their ids
//! - `local_id`: non-colliding ids for locally-authored items
//! - `scope`: role-based filtering of raw collections
//! - `working`: the editable, searchable collection behind a listing view

mod local_id;
mod model;
mod scope;
mod working;

pub use local_id::LocalIdAllocator;
pub use model::{ContentItem, ItemId, Reaction, ReactionId, is_local_id};
pub use scope::{ScopedContent, scope, scope_accounts};
pub use working::{ADMIN_AUTHOR_ID, WorkingCollection};
