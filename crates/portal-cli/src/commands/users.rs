use anyhow::Result;

use portal_application::{AppContext, DirectoryView, load_profile};
use portal_core::account::{AccountId, DirectoryQuery, SortOrder};

use crate::render;

pub async fn list(ctx: &AppContext, search: Option<&str>, sort: SortOrder) -> Result<()> {
    let view = DirectoryView::enter(ctx).await;
    if let Some(message) = view.message() {
        render::notice(message);
    }
    let query = DirectoryQuery::new(search.unwrap_or_default(), sort);
    render::accounts(&view.list(&query));
    Ok(())
}

pub async fn show(ctx: &AppContext, id: AccountId) -> Result<()> {
    match load_profile(ctx, id).await {
        Ok(profile) => render::profile(&profile),
        Err(e) => render::error(&e),
    }
    Ok(())
}
