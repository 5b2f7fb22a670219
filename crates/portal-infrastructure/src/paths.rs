//! Unified path management for portal files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/portal/            # Config directory
//! ├── config.toml              # Application configuration
//! ├── identity.toml            # Persisted session identity
//! └── logs/                    # Application logs
//!     └── portal.log.YYYY-MM-DD
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

const APP_DIR: &str = "portal";

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("Cannot find config directory")]
    ConfigDirNotFound,
}

impl From<PathError> for portal_core::PortalError {
    fn from(err: PathError) -> Self {
        portal_core::PortalError::config(err.to_string())
    }
}

/// Resolves portal paths, optionally rooted at an explicit state directory.
///
/// Without an override every path lives under the platform config directory
/// (`dirs::config_dir()/portal`).
#[derive(Debug, Clone, Default)]
pub struct PortalPaths {
    base: Option<PathBuf>,
}

impl PortalPaths {
    pub fn new(base: Option<PathBuf>) -> Self {
        Self { base }
    }

    pub fn with_base(base: impl AsRef<Path>) -> Self {
        Self::new(Some(base.as_ref().to_path_buf()))
    }

    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    pub fn identity_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("identity.toml"))
    }

    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }
}
