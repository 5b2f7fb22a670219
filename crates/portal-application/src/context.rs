//! Shared handles every view works through.

use std::sync::Arc;
use std::time::Duration;

use portal_core::config::PortalConfig;
use portal_core::credential::CredentialVerifier;
use portal_core::guard::AccessGuard;
use portal_core::identity::{IdentityStore, SessionContext};
use portal_core::navigation::{Navigator, Route};
use portal_core::provider::ContentProvider;

/// Provider, identity, navigation and access rules for one running portal.
///
/// Cloning is cheap and shares every handle.
#[derive(Clone)]
pub struct AppContext {
    pub provider: Arc<dyn ContentProvider>,
    pub session: SessionContext,
    pub navigator: Navigator,
    pub guard: AccessGuard,
    pub verifier: CredentialVerifier,
    pub confirmation_for: Duration,
}

impl AppContext {
    pub fn new(
        config: &PortalConfig,
        provider: Arc<dyn ContentProvider>,
        store: Arc<dyn IdentityStore>,
    ) -> Self {
        Self {
            provider,
            session: SessionContext::new(store),
            navigator: Navigator::new(Route::Login),
            guard: AccessGuard::from_config(&config.guard),
            verifier: CredentialVerifier::new(config.admin.clone()),
            confirmation_for: Duration::from_secs(config.registration.confirmation_secs),
        }
    }
}
