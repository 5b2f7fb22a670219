//! Entry into guarded views.

use portal_core::guard::{Admission, RedirectTask};
use portal_core::identity::SessionIdentity;
use portal_core::navigation::Route;

use crate::context::AppContext;

/// Result of entering a protected route.
#[derive(Debug)]
pub enum Entry {
    Admitted(SessionIdentity),
    /// Rejected; the pending redirect is cancelled if this value is dropped.
    Denied(RedirectTask),
}

/// Navigates to `route` and runs the admission check.
///
/// The check reads only resident identity state, so it completes before the
/// caller can issue any fetch. A denial schedules the deferred redirect.
pub fn enter_protected(ctx: &AppContext, route: Route) -> Entry {
    debug_assert!(route.is_protected(), "{} is not a guarded route", route);
    ctx.navigator.navigate(route);

    let stored = ctx.session.read().unwrap_or_else(|e| {
        tracing::warn!("[enter_protected] Identity store unreadable, denying: {}", e);
        None
    });

    match ctx.guard.admit(stored.as_ref()) {
        Admission::Admitted(identity) => Entry::Admitted(identity),
        Admission::Denied => {
            tracing::warn!("[enter_protected] Unauthorized entry to {}", route);
            Entry::Denied(ctx.guard.schedule_redirect(&ctx.navigator, route))
        }
    }
}
