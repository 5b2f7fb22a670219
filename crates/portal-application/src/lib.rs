//! Application layer for the portal.
//!
//! Each view coordinates the guard, the content provider and the identity
//! store through an [`AppContext`]; none of them crash on failure, every
//! error degrades to a visible message.

pub mod auth_usecase;
pub mod context;
pub mod directory_view;
pub mod listing_view;
pub mod protected;
pub mod registration_view;
pub mod summary_view;

pub use auth_usecase::AuthUseCase;
pub use context::AppContext;
pub use directory_view::{DirectoryView, load_profile};
pub use listing_view::{ListingView, ViewStatus};
pub use registration_view::RegistrationView;
pub use summary_view::SummaryView;
