use anyhow::Result;

use portal_application::{AppContext, ListingView};
use portal_core::content::ItemId;

use super::follow_redirect;
use crate::render;

/// One-shot listing: enter, optionally expand one post, print.
pub async fn run(ctx: &AppContext, search: Option<&str>, expand: Option<ItemId>) -> Result<()> {
    let mut view = ListingView::enter(ctx.clone()).await;
    if view.is_unauthorized() {
        let redirect = view.take_redirect();
        follow_redirect(view.message(), redirect).await;
        return Ok(());
    }

    if let Some(id) = expand {
        view.toggle(id);
    }
    show(&view, search);
    Ok(())
}

pub fn show(view: &ListingView, search: Option<&str>) {
    let items = view.search(search.unwrap_or(""));
    render::items(view, &items);
}
