//! Login and logout.

use portal_core::Result;
use portal_core::credential::VerifiedLogin;
use portal_core::identity::StoredIdentity;
use portal_core::navigation::Route;

use crate::context::AppContext;

/// Verifies credentials and owns the identity lifecycle.
pub struct AuthUseCase {
    ctx: AppContext,
}

impl AuthUseCase {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    /// Verifies the pair, persists the identity and moves to the listing.
    ///
    /// A failed attempt leaves any previously stored identity untouched.
    ///
    /// # Errors
    ///
    /// - `InvalidCredentials` / `DirectoryUnavailable` from verification
    /// - store errors when the identity cannot be written
    pub async fn login(&self, email: &str, password: &str) -> Result<VerifiedLogin> {
        self.ctx.navigator.navigate(Route::Login);
        tracing::debug!("[AuthUseCase] Login attempt for {}", email);

        let login = self
            .ctx
            .verifier
            .verify(email, password, self.ctx.provider.as_ref())
            .await
            .inspect_err(|e| tracing::info!("[AuthUseCase] Login rejected: {}", e))?;

        self.ctx
            .session
            .write(&login.identity, login.display_name.as_deref())?;
        self.ctx.navigator.navigate(Route::Posts);
        Ok(login)
    }

    /// Erases the stored identity, then navigates to the login entry.
    pub fn logout(&self) -> Result<()> {
        self.ctx.session.clear()?;
        self.ctx.navigator.navigate(Route::Login);
        Ok(())
    }

    /// The raw stored record, if any.
    pub fn whoami(&self) -> Result<Option<StoredIdentity>> {
        self.ctx.session.read()
    }
}
