//! Access guard for protected views.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::GuardConfig;
use crate::identity::{SessionIdentity, StoredIdentity};
use crate::navigation::{Navigator, Route};

/// Outcome of the admission check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Admitted(SessionIdentity),
    Denied,
}

impl Admission {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted(_))
    }

    pub fn identity(&self) -> Option<&SessionIdentity> {
        match self {
            Admission::Admitted(identity) => Some(identity),
            Admission::Denied => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AccessGuard {
    redirect_delay: Duration,
}

impl AccessGuard {
    pub fn new(redirect_delay: Duration) -> Self {
        Self { redirect_delay }
    }

    pub fn from_config(config: &GuardConfig) -> Self {
        Self::new(config.redirect_delay())
    }

    pub fn redirect_delay(&self) -> Duration {
        self.redirect_delay
    }

    /// Admits a complete stored identity; anything else is denied.
    ///
    /// Synchronous: reads only the already-resident record.
    pub fn admit(&self, stored: Option<&StoredIdentity>) -> Admission {
        match stored.and_then(StoredIdentity::identity) {
            Some(identity) => {
                tracing::debug!("[AccessGuard] Admitted {:?}", identity);
                Admission::Admitted(identity)
            }
            None => {
                tracing::info!("[AccessGuard] Denied: no complete identity");
                Admission::Denied
            }
        }
    }

    /// Schedules the one-shot redirect from `from` to the login route.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule_redirect(&self, navigator: &Navigator, from: Route) -> RedirectTask {
        RedirectTask::spawn(navigator.clone(), from, self.redirect_delay)
    }
}

impl Default for AccessGuard {
    fn default() -> Self {
        Self::from_config(&GuardConfig::default())
    }
}

/// A pending deferred redirect, cancelled when dropped.
#[derive(Debug)]
pub struct RedirectTask {
    token: CancellationToken,
    handle: Option<JoinHandle<bool>>,
}

impl RedirectTask {
    fn spawn(navigator: Navigator, from: Route, delay: Duration) -> Self {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    tracing::debug!("[RedirectTask] Cancelled before firing on {}", from);
                    false
                }
                _ = tokio::time::sleep(delay) => navigator.redirect_from(from, Route::Login),
            }
        });

        Self {
            token,
            handle: Some(handle),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Waits for the timer and reports whether it navigated.
    pub async fn fired(mut self) -> bool {
        match self.handle.take() {
            Some(handle) => handle.await.unwrap_or(false),
            None => false,
        }
    }
}

impl Drop for RedirectTask {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
