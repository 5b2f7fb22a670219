//! The protected dashboard summarizing users, posts and comments.

use portal_core::aggregate::{
    AggregateViewModel, CategorySource, ChartShape, ChartSpec, aggregate, render,
};
use portal_core::content::{scope, scope_accounts};
use portal_core::guard::RedirectTask;
use portal_core::navigation::Route;
use portal_core::{PortalError, Result};

use crate::context::AppContext;
use crate::listing_view::ViewStatus;
use crate::protected::{Entry, enter_protected};

pub const USERS_LABEL: &str = "Users";
pub const POSTS_LABEL: &str = "Posts";
pub const COMMENTS_LABEL: &str = "Comments";

pub struct SummaryView {
    status: ViewStatus,
    model: Option<AggregateViewModel>,
    shape: ChartShape,
    message: Option<String>,
    redirect: Option<RedirectTask>,
}

impl SummaryView {
    /// Enters the dashboard and aggregates the three scoped collections.
    ///
    /// The three fetches run together and the aggregate is built only once
    /// all of them succeed; any failure leaves no aggregate at all.
    pub async fn enter(ctx: &AppContext) -> Self {
        let identity = match enter_protected(ctx, Route::Dashboard) {
            Entry::Admitted(identity) => identity,
            Entry::Denied(redirect) => {
                return Self {
                    status: ViewStatus::Unauthorized,
                    model: None,
                    shape: ChartShape::default(),
                    message: Some(PortalError::Unauthorized.user_message()),
                    redirect: Some(redirect),
                };
            }
        };

        let provider = ctx.provider.clone();
        let fetched = tokio::try_join!(
            provider.fetch_accounts(),
            provider.fetch_items(),
            provider.fetch_reactions()
        );

        let (model, message) = match fetched {
            Ok((accounts, items, reactions)) => {
                let accounts = scope_accounts(&identity, accounts);
                let scoped = scope(&identity, items, reactions);
                let model = aggregate([
                    CategorySource::of(USERS_LABEL, &accounts),
                    CategorySource::of(POSTS_LABEL, &scoped.items),
                    CategorySource::of(COMMENTS_LABEL, &scoped.reactions),
                ]);
                tracing::debug!("[SummaryView] Aggregated total={}", model.total);
                (Some(model), None)
            }
            Err(e) => {
                tracing::error!("[SummaryView] Failed to load dashboard data: {}", e);
                (None, Some(failure_message(&e)))
            }
        };

        Self {
            status: ViewStatus::Ready,
            model,
            shape: ChartShape::default(),
            message,
            redirect: None,
        }
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == ViewStatus::Unauthorized
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn model(&self) -> Option<&AggregateViewModel> {
        self.model.as_ref()
    }

    pub fn shape(&self) -> ChartShape {
        self.shape
    }

    pub fn set_shape(&mut self, shape: ChartShape) {
        self.shape = shape;
    }

    /// Renders the aggregate in the current shape.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when entry was denied, `FetchFailed` when nothing loaded.
    pub fn chart(&self) -> Result<ChartSpec> {
        if self.is_unauthorized() {
            return Err(PortalError::Unauthorized);
        }
        self.model
            .as_ref()
            .map(|model| render(model, self.shape))
            .ok_or_else(|| PortalError::fetch_failed("dashboard data", "nothing loaded"))
    }

    pub fn take_redirect(&mut self) -> Option<RedirectTask> {
        self.redirect.take()
    }
}

/// The dashboard renders no list, so a failed fetch gets its own wording.
fn failure_message(err: &PortalError) -> String {
    match err {
        PortalError::FetchFailed { resource, .. } => {
            format!("Could not load {}. The dashboard is unavailable.", resource)
        }
        other => other.user_message(),
    }
}
