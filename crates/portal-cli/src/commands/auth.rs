use anyhow::Result;
use colored::Colorize;

use portal_application::{AppContext, AuthUseCase};

use crate::render;

pub async fn login(ctx: &AppContext, email: &str, password: &str) -> Result<()> {
    match AuthUseCase::new(ctx.clone()).login(email, password).await {
        Ok(login) => {
            let name = login.display_name.as_deref().unwrap_or("admin");
            render::success(&format!("Logged in as {} ({})", name, login.identity.role()));
        }
        Err(e) => render::error(&e),
    }
    Ok(())
}

pub fn logout(ctx: &AppContext) -> Result<()> {
    AuthUseCase::new(ctx.clone()).logout()?;
    render::success("Logged out.");
    Ok(())
}

pub fn whoami(ctx: &AppContext) -> Result<()> {
    let stored = AuthUseCase::new(ctx.clone()).whoami()?;
    match stored.as_ref().and_then(|s| s.identity().map(|identity| (s, identity))) {
        Some((stored, identity)) => {
            let name = stored.display_name().unwrap_or("admin");
            println!("{} ({})", name.bold(), identity.role());
        }
        None => println!("{}", "Not logged in.".bright_black()),
    }
    Ok(())
}
