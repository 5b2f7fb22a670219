//! Interactive session that keeps one listing view alive between commands,
//! so local posts, deletions and expanded comments survive until `posts`
//! reloads it.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use portal_application::{AppContext, ListingView};
use portal_core::aggregate::ChartShape;
use portal_core::content::ItemId;

use crate::bootstrap::Portal;
use crate::commands::{self, follow_redirect};
use crate::render;

const COMMANDS: &[&str] = &[
    "posts", "search", "expand", "add", "delete", "dashboard", "users", "user", "login", "logout",
    "whoami", "about", "help", "quit",
];

#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let head = line.split_whitespace().next().unwrap_or("");
        if self.commands.iter().any(|c| c == head) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() || line.contains(' ') {
            return None;
        }
        self.commands
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for CliHelper {}

fn print_help() {
    let lines = [
        ("posts", "reload posts for the current identity"),
        ("search <text>", "filter loaded posts by title or body"),
        ("expand <id>", "show or hide a post's comments"),
        ("add <title> | <body>", "add a local post"),
        ("delete <id>", "delete a post (admin only)"),
        ("dashboard [donut|bar|column]", "show counts"),
        ("users [text]", "browse the user directory"),
        ("user <id>", "show a user's profile"),
        ("login <email> <password>", "sign in"),
        ("logout", "sign out"),
        ("whoami", "show the current identity"),
        ("about", "what this portal is"),
        ("quit", "exit"),
    ];
    for (usage, about) in lines {
        println!("  {:<30} {}", usage.bright_cyan(), about.bright_black());
    }
}

fn parse_id(arg: &str) -> Option<ItemId> {
    match arg.trim().parse() {
        Ok(id) => Some(id),
        Err(_) => {
            render::notice(&format!("Not a valid id: {:?}", arg.trim()));
            None
        }
    }
}

/// Loads the listing, waiting out the redirect when the guard denies entry.
async fn open_listing(ctx: &AppContext) -> Option<ListingView> {
    let mut view = ListingView::enter(ctx.clone()).await;
    if view.is_unauthorized() {
        let redirect = view.take_redirect();
        follow_redirect(view.message(), redirect).await;
        return None;
    }
    commands::posts::show(&view, None);
    Some(view)
}

fn with_listing(listing: &mut Option<ListingView>, f: impl FnOnce(&mut ListingView)) {
    match listing.as_mut() {
        Some(view) => f(view),
        None => render::notice("No posts loaded. Run `posts` first."),
    }
}

pub async fn run(portal: &Portal) -> Result<()> {
    let ctx = &portal.ctx;
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== Portal ===".bright_magenta().bold());
    println!("{}", "Type 'help' for commands, or 'quit' to exit.".bright_black());
    println!();

    let mut listing: Option<ListingView> = None;

    loop {
        let line = match rl.readline(&format!("{} >> ", ctx.navigator.current())) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(trimmed);

        let (command, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
        let rest = rest.trim();

        match command {
            "quit" | "exit" => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            "help" => print_help(),
            "posts" => listing = open_listing(ctx).await,
            "search" => with_listing(&mut listing, |view| commands::posts::show(view, Some(rest))),
            "expand" => {
                if let Some(id) = parse_id(rest) {
                    with_listing(&mut listing, |view| {
                        view.toggle(id);
                        commands::posts::show(view, None);
                    });
                }
            }
            "add" => {
                let (title, body) = rest.split_once('|').unwrap_or((rest, ""));
                with_listing(&mut listing, |view| match view.add_local(title.trim(), body.trim()) {
                    Some(id) => render::success(&format!("Added local post {}", id)),
                    None => render::notice("Both a title and a body are required."),
                });
            }
            "delete" => {
                if let Some(id) = parse_id(rest) {
                    with_listing(&mut listing, |view| match view.delete(id) {
                        Ok(true) => render::success(&format!("Deleted post {}", id)),
                        Ok(false) => render::notice(&format!("No post {}", id)),
                        Err(e) => render::error(&e),
                    });
                }
            }
            "dashboard" => {
                let shape = if rest.is_empty() {
                    portal.config.dashboard.default_shape
                } else {
                    match rest.parse::<ChartShape>() {
                        Ok(shape) => shape,
                        Err(_) => {
                            render::notice("Shape must be donut, bar or column.");
                            continue;
                        }
                    }
                };
                commands::dashboard::run(ctx, shape).await?;
            }
            "users" => {
                let search = (!rest.is_empty()).then_some(rest);
                commands::users::list(ctx, search, Default::default()).await?;
            }
            "user" => match rest.parse() {
                Ok(id) => commands::users::show(ctx, id).await?,
                Err(_) => render::notice(&format!("Not a valid id: {:?}", rest)),
            },
            "login" => match rest.split_once(' ') {
                Some((email, password)) => {
                    listing = None;
                    commands::auth::login(ctx, email, password.trim()).await?;
                }
                None => render::notice("Usage: login <email> <password>"),
            },
            "logout" => {
                match listing.take() {
                    Some(view) => {
                        view.logout()?;
                        render::success("Logged out.");
                    }
                    None => commands::auth::logout(ctx)?,
                }
            }
            "whoami" => commands::auth::whoami(ctx)?,
            "about" => commands::about(ctx),
            _ => println!("{}", "Unknown command".bright_black()),
        }
    }

    Ok(())
}
