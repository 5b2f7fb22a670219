pub mod config_service;
pub mod dto;
pub mod file_identity_store;
pub mod http_content_provider;
pub mod logging;
pub mod memory_content_provider;
pub mod memory_identity_store;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::file_identity_store::FileIdentityStore;
pub use crate::http_content_provider::HttpContentProvider;
pub use crate::memory_content_provider::InMemoryContentProvider;
pub use crate::memory_identity_store::InMemoryIdentityStore;
pub use crate::paths::PortalPaths;
