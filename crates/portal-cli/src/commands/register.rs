use anyhow::Result;
use chrono::Utc;
use colored::Colorize;

use portal_application::{AppContext, RegistrationView};
use portal_core::registration::RegistrationForm;

use crate::render;

pub fn run(ctx: &AppContext, form: RegistrationForm) -> Result<()> {
    let mut view = RegistrationView::enter(ctx);
    view.form = form;

    if let Some(link) = view.map_preview_link() {
        println!("Map preview: {}", link.underline());
    }

    let submitted = view.submit(Utc::now()).map(|confirmation| confirmation.message);
    match submitted {
        Ok(message) => render::success(message),
        Err(_) => {
            for error in view.errors() {
                eprintln!("{} {}", format!("{}:", error.field).red().bold(), error.message);
            }
        }
    }
    Ok(())
}
