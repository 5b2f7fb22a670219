//! Command handlers shared by one-shot subcommands and the shell.
//!
//! Handlers print failures and return `Ok`; only wiring problems surface as
//! errors.

pub mod auth;
pub mod dashboard;
pub mod posts;
pub mod register;
pub mod users;

use colored::Colorize;
use portal_application::AppContext;
use portal_core::guard::RedirectTask;
use portal_core::navigation::Route;

use crate::render;

/// Shows the rejection, then waits out the deferred redirect.
pub async fn follow_redirect(message: Option<&str>, redirect: Option<RedirectTask>) {
    render::notice(message.unwrap_or("Unauthorized"));
    if let Some(redirect) = redirect {
        if redirect.fired().await {
            render::notice("Redirected to /login. Sign in with `login <EMAIL> <PASSWORD>`.");
        }
    }
}

pub fn about(ctx: &AppContext) {
    ctx.navigator.navigate(Route::About);
    println!("{}", "Portal".bold());
    println!("Browse posts and comments scoped to your account, and see a dashboard of");
    println!("users, posts and comments. Admins see everything; users see their own posts.");
}
