//! Domain model and access rules for the role-scoped content portal.
//!
//! Everything here is free of I/O: stores and providers are traits that the
//! infrastructure crate implements.

pub mod account;
pub mod aggregate;
pub mod config;
pub mod content;
pub mod credential;
pub mod error;
pub mod guard;
pub mod identity;
pub mod navigation;
pub mod provider;
pub mod registration;

// Re-export common error type
pub use error::{PortalError, Result};
