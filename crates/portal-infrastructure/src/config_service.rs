//! Configuration service implementation.
//!
//! Loads the portal configuration from `config.toml`, writing the default
//! file on first run.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use portal_core::Result;
use portal_core::config::PortalConfig;

use crate::paths::PortalPaths;
use crate::storage::AtomicTomlFile;

/// Loads and caches the portal configuration.
#[derive(Clone)]
pub struct ConfigService {
    path: PathBuf,
    config: Arc<RwLock<Option<PortalConfig>>>,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Uses the resolved `config.toml` location.
    pub fn open(paths: &PortalPaths) -> Result<Self> {
        Ok(Self::new(paths.config_file()?))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Gets the configuration, loading it from file if not cached.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be parsed, or when the
    /// default file cannot be written.
    pub fn get_config(&self) -> Result<PortalConfig> {
        if let Ok(read_lock) = self.config.read() {
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load_config()?;

        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    fn load_config(&self) -> Result<PortalConfig> {
        let file = AtomicTomlFile::<PortalConfig>::new(self.path.clone());

        match file.load()? {
            Some(config) => {
                tracing::debug!("[ConfigService] Loaded {}", self.path.display());
                Ok(config)
            }
            None => {
                let config = PortalConfig::default();
                file.save(&config)?;
                tracing::info!(
                    "[ConfigService] Wrote default configuration to {}",
                    self.path.display()
                );
                Ok(config)
            }
        }
    }
}
