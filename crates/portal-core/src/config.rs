//! Portal configuration model.
//!
//! Loaded from `config.toml`; every section and field falls back to its
//! default so a partial file (or none at all) is valid.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::aggregate::ChartShape;

pub const DEFAULT_PROVIDER_URL: &str = "https://jsonplaceholder.typicode.com";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@admin.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 1500;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub provider: ProviderConfig,
    pub admin: AdminCredential,
    pub guard: GuardConfig,
    pub registration: RegistrationConfig,
    pub dashboard: DashboardConfig,
    pub logging: LoggingConfig,
}

/// Where the external content provider lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PROVIDER_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// The fixed administrative credential pair.
///
/// Compared verbatim; it is never looked up in the account directory.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminCredential {
    pub email: String,
    pub password: String,
}

impl Default for AdminCredential {
    fn default() -> Self {
        Self {
            email: DEFAULT_ADMIN_EMAIL.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl AdminCredential {
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

impl std::fmt::Debug for AdminCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredential")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Delay between a guard denial and the redirect to the login entry.
    pub redirect_delay_ms: u64,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
        }
    }
}

impl GuardConfig {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// How long the confirmation message stays visible.
    pub confirmation_secs: u64,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            confirmation_secs: 5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Chart shape used when none is requested.
    pub default_shape: ChartShape,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base level directive, e.g. "info" or "debug".
    pub level: String,
    /// Mirror log lines to stderr in addition to the log file.
    pub console: bool,
    /// Per-target level overrides (target -> level).
    pub targets: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console: false,
            targets: HashMap::new(),
        }
    }
}
