//! Composition root: configuration, logging, storage and provider wiring.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use portal_application::AppContext;
use portal_core::config::PortalConfig;
use portal_core::provider::ContentProvider;
use portal_infrastructure::logging::{LogGuard, init_logging};
use portal_infrastructure::{
    ConfigService, FileIdentityStore, HttpContentProvider, InMemoryContentProvider, PortalPaths,
};

/// Path overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub state_dir: Option<PathBuf>,
    pub fixture: Option<PathBuf>,
}

/// A wired-up portal. Keep it alive for the whole run; it owns the log writer.
pub struct Portal {
    pub ctx: AppContext,
    pub config: PortalConfig,
    _log_guard: Option<LogGuard>,
}

impl Portal {
    pub fn bootstrap(overrides: &Overrides) -> Result<Self> {
        let paths = PortalPaths::new(overrides.state_dir.clone());

        let config_service = match &overrides.config {
            Some(path) => ConfigService::new(path.clone()),
            None => ConfigService::open(&paths).context("Failed to resolve config path")?,
        };
        let config = config_service
            .get_config()
            .with_context(|| format!("Failed to load {}", config_service.path().display()))?;

        let logs_dir = paths.logs_dir().context("Failed to resolve logs directory")?;
        let log_guard = match init_logging(&config.logging, &logs_dir) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Warning: logging disabled: {}", e);
                None
            }
        };

        let provider: Arc<dyn ContentProvider> = match &overrides.fixture {
            Some(path) => Arc::new(
                InMemoryContentProvider::from_fixture_file(path)
                    .with_context(|| format!("Failed to load fixture {}", path.display()))?,
            ),
            None => Arc::new(HttpContentProvider::from_config(&config.provider)),
        };

        let store = Arc::new(FileIdentityStore::open(&paths).context("Failed to open identity store")?);

        tracing::info!(
            "[Portal] Started with provider {}",
            overrides
                .fixture
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| config.provider.base_url.clone())
        );

        Ok(Self {
            ctx: AppContext::new(&config, provider, store),
            config,
            _log_guard: log_guard,
        })
    }
}
