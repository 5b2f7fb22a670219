use anyhow::Result;

use portal_application::{AppContext, SummaryView};
use portal_core::aggregate::ChartShape;

use super::follow_redirect;
use crate::render;

pub async fn run(ctx: &AppContext, shape: ChartShape) -> Result<()> {
    let mut view = SummaryView::enter(ctx).await;
    if view.is_unauthorized() {
        let redirect = view.take_redirect();
        follow_redirect(view.message(), redirect).await;
        return Ok(());
    }

    view.set_shape(shape);
    match view.chart() {
        Ok(spec) => render::chart(&spec),
        Err(_) => render::notice(view.message().unwrap_or("Nothing to show.")),
    }
    Ok(())
}
