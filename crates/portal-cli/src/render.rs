//! Terminal rendering for views.

use colored::Colorize;

use portal_application::ListingView;
use portal_core::PortalError;
use portal_core::account::{Account, AccountProfile};
use portal_core::aggregate::{ChartSpec, Slice};
use portal_core::content::ContentItem;

const BAR_WIDTH: usize = 40;

pub fn error(err: &PortalError) {
    eprintln!("{}", err.user_message().red());
}

pub fn notice(message: &str) {
    println!("{}", message.yellow());
}

pub fn success(message: &str) {
    println!("{}", message.bright_green());
}

pub fn items(view: &ListingView, items: &[&ContentItem]) {
    if let Some(message) = view.message() {
        notice(message);
    }
    if items.is_empty() {
        println!("{}", "No posts.".bright_black());
        return;
    }

    for item in items {
        let id = if item.is_local() {
            format!("[{}] (local)", item.id)
        } else {
            format!("[{}]", item.id)
        };
        println!("{} {}", id.bright_black(), item.title.bold());
        println!("    {}", item.body);

        let reactions = view.reactions_for(item.id);
        if view.is_expanded(item.id) {
            for reaction in reactions {
                let initial = reaction.author_initial().unwrap_or('?');
                println!(
                    "    {} {} <{}>",
                    format!("({})", initial).cyan(),
                    reaction.author_name.cyan(),
                    reaction.author_email.bright_black()
                );
                println!("        {}", reaction.body);
            }
        } else if !reactions.is_empty() {
            println!("    {}", format!("{} comment(s)", reactions.len()).bright_black());
        }
    }
}

fn bar(value: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    "#".repeat(value * BAR_WIDTH / max)
}

fn slice_line(slice: &Slice) -> String {
    format!(
        "{:<10} {:>6} {:>7}  {}",
        slice.label,
        slice.value,
        slice.data_label,
        "#".repeat((slice.percentage / 100.0 * BAR_WIDTH as f64).round() as usize)
    )
}

pub fn chart(spec: &ChartSpec) {
    match spec {
        ChartSpec::PartToWhole { slices, total } => {
            for slice in slices {
                println!("{}", slice_line(slice));
            }
            println!("{}", format!("Total: {}", total).bold());
        }
        ChartSpec::SingleSeries { categories, series } => {
            let max = series.values.iter().copied().max().unwrap_or(0);
            println!("{}", series.name.bold());
            for (label, value) in categories.iter().zip(&series.values) {
                println!("{:<10} {:>6}  {}", label, value, bar(*value, max).green());
            }
        }
        ChartSpec::PerCategory { series, .. } => {
            let max = series
                .iter()
                .flat_map(|s| s.values.iter().copied())
                .max()
                .unwrap_or(0);
            for s in series {
                for value in &s.values {
                    println!("{:<10} {:>6}  {}", s.name, value, bar(*value, max).blue());
                }
            }
        }
    }
}

pub fn accounts(accounts: &[&Account]) {
    if accounts.is_empty() {
        println!("{}", "No users.".bright_black());
        return;
    }
    for account in accounts {
        let initial = account.initial().unwrap_or('?');
        println!(
            "{} {} {} {} {}",
            format!("[{}]", account.id).bright_black(),
            format!("({})", initial).cyan(),
            account.display_name.bold(),
            format!("@{}", account.login_handle).cyan(),
            account.email.bright_black()
        );
    }
}

pub fn profile(profile: &AccountProfile) {
    let account = &profile.account;
    println!("{}", account.display_name.bold());
    println!("  Username: {}", account.login_handle);
    println!("  Email:    {}", account.email);
    println!("  Phone:    {}", profile.phone);
    println!(
        "  Address:  {}, {}",
        profile.address.street, profile.address.city
    );
    println!("  Map:      {}", profile.map_link().underline());
}
