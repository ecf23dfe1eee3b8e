//! Interactive terminal front end for the login form.
//!
//! # Usage
//!
//! ```bash
//! # Log in against users.json
//! cargo run -- login
//!
//! # Preselect a fiscal year and use another user list
//! cargo run -- login --fiscal-year 2080/081 --users /srv/health/users.json
//!
//! # Show the fiscal-year options
//! cargo run -- fiscal-years
//!
//! # Check that a user list loads
//! cargo run -- users check
//! ```
//!
//! See [`fiscal_login::config`] for environment variables.

use fiscal_login::config::{self, Config};
use fiscal_login::prelude::*;
use fiscal_login::telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password, Select};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, mpsc};

/// Fiscal-year login for the health records tool.
#[derive(Parser)]
#[command(name = "fiscal-login")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Open the interactive login form
    Login {
        /// Preselected fiscal year (defaults to DEFAULT_FISCAL_YEAR)
        #[arg(short, long)]
        fiscal_year: Option<String>,

        /// User list to check against (defaults to USERS_FILE)
        #[arg(short, long)]
        users: Option<PathBuf>,
    },

    /// List selectable fiscal years
    FiscalYears,

    /// User list operations
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
}

/// User list subcommands.
#[derive(Subcommand)]
enum UsersAction {
    /// Load the user list and report problems
    Check {
        #[arg(short, long)]
        users: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Failed to load configuration")?;
    telemetry::init_tracing(&config)?;
    config.print_summary();

    match cli.command {
        Commands::Login { fiscal_year, users } => run_login(&config, fiscal_year, users).await?,
        Commands::FiscalYears => list_fiscal_years(&config)?,
        Commands::Users { action } => match action {
            UsersAction::Check { users } => check_users(&config, users).await?,
        },
    }

    Ok(())
}

/// Runs the login form until the user logs in or gives up.
///
/// # Flow
///
/// 1. Select fiscal year
/// 2. Enter username; confirming moves on to the password
/// 3. Enter password and submit
/// 4. On failure show the errors, offer the forgot-password notice, retry
async fn run_login(
    config: &Config,
    fiscal_year: Option<String>,
    users: Option<PathBuf>,
) -> Result<()> {
    let catalog = config.fiscal_year_catalog()?;

    if let Some(ref label) = fiscal_year
        && !catalog.contains(label)
    {
        anyhow::bail!(
            "Unknown fiscal year '{}', expected one of: {}",
            label,
            catalog.options().join(", ")
        );
    }

    let users_file = users.unwrap_or_else(|| config.users_file.clone());
    let directory = Arc::new(JsonFileUserDirectory::new(users_file));

    let (session_tx, session_rx) = mpsc::channel::<(User, String)>();
    let options = LoginOptions {
        initial_fiscal_year: fiscal_year,
        messages: config.messages(),
    };
    let controller = LoginController::new(directory, options, move |user, fiscal_year| {
        let _ = session_tx.send((user.clone(), fiscal_year.to_string()));
    });

    println!("{}", "🛡  Smart Health System Login".bright_blue().bold());
    println!();

    loop {
        let view = controller.view();

        let selected = Select::new()
            .with_prompt("Fiscal year")
            .items(catalog.options())
            .default(catalog.position(&view.form.fiscal_year).unwrap_or(0))
            .interact()?;
        controller.on_field_change(Field::FiscalYear, catalog.options()[selected].clone());

        let username: String = Input::new()
            .with_prompt("Username")
            .with_initial_text(view.form.username)
            .allow_empty(true)
            .interact_text()?;
        controller.on_field_change(Field::Username, username);
        controller.on_username_enter_key();

        let password = Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?;
        controller.on_field_change(Field::Password, password);

        println!("{}", "⏳ Checking credentials...".bright_black());

        match controller.submit().await {
            SubmitOutcome::Succeeded => {
                let (user, fiscal_year) = session_rx
                    .try_recv()
                    .context("Login succeeded without a session")?;
                print_welcome(&user, &fiscal_year);
                return Ok(());
            }
            SubmitOutcome::Ignored => continue,
            SubmitOutcome::Invalid | SubmitOutcome::Rejected | SubmitOutcome::Failed => {
                print_errors(&controller.errors());
            }
        }

        let forgot = Confirm::new()
            .with_prompt("Forgot your password?")
            .default(false)
            .interact()?;
        if forgot {
            controller.toggle_forgot_password_notice();
            if let Some(notice) = controller.forgot_password_notice() {
                println!("  {} {}", "ℹ".bright_cyan(), notice.cyan());
            }
            controller.toggle_forgot_password_notice();
        }

        let retry = Confirm::new()
            .with_prompt("Try again?")
            .default(true)
            .interact()?;
        if !retry {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
        println!();
    }
}

fn print_errors(errors: &ErrorState) {
    println!();
    if let Some(ref banner) = errors.form {
        println!("  {} {}", "⚠".red(), banner.message.red().bold());
    }
    for field in errors.invalid_fields() {
        if let Some(error) = errors.field(field) {
            println!(
                "  {} {}: {}",
                "•".red(),
                field.as_str().bright_white(),
                error.message.red()
            );
        }
    }
    println!();
}

fn print_welcome(user: &User, fiscal_year: &str) {
    println!();
    println!("{}", "✅ Login successful!".green().bold());
    println!();
    println!("  User:        {}", user.username.cyan());
    if let Some(name) = user.profile.get("fullName").and_then(|v| v.as_str()) {
        println!("  Name:        {}", name.cyan());
    }
    if let Some(role) = user.profile.get("role").and_then(|v| v.as_str()) {
        println!("  Role:        {}", role.cyan());
    }
    println!("  Fiscal year: {}", fiscal_year.bright_yellow().bold());
    println!();
}

/// Prints the fiscal-year options, marking the default.
fn list_fiscal_years(config: &Config) -> Result<()> {
    let catalog = config.fiscal_year_catalog()?;

    println!("{}", "📅 Fiscal Years".bright_blue().bold());
    println!();
    for option in catalog.options() {
        if option == catalog.default_label() {
            println!("  {} {}", option.bright_white().bold(), "(default)".green());
        } else {
            println!("  {}", option);
        }
    }
    println!();

    Ok(())
}

/// Loads a user list and reports its size and duplicate usernames.
///
/// Duplicates are reported, not rejected; the first entry wins at login.
async fn check_users(config: &Config, users: Option<PathBuf>) -> Result<()> {
    let users_file = users.unwrap_or_else(|| config.users_file.clone());
    let directory = JsonFileUserDirectory::new(&users_file);

    println!(
        "{} {}",
        "🔍 Checking user list".bright_blue(),
        users_file.display().to_string().bright_white()
    );

    let users = directory
        .users()
        .await
        .with_context(|| format!("Failed to load {}", users_file.display()))?;

    let duplicates = duplicate_usernames(&users);

    println!(
        "  Users: {}",
        users.len().to_string().bright_green().bold()
    );

    if duplicates.is_empty() {
        println!("{}", "✅ User list OK".green().bold());
    } else {
        for (name, count) in &duplicates {
            println!(
                "  {} '{}' appears {} times",
                "⚠".yellow(),
                name.yellow(),
                count
            );
        }
    }

    Ok(())
}

/// Usernames that login cannot tell apart, with how often each appears.
///
/// Login lowercases the stored name and compares it to the trimmed input, so
/// stored names are folded for case only.
fn duplicate_usernames(users: &[User]) -> Vec<(String, usize)> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    for user in users {
        *seen.entry(user.username.to_lowercase()).or_default() += 1;
    }
    let mut duplicates: Vec<_> = seen.into_iter().filter(|(_, n)| *n > 1).collect();
    duplicates.sort();
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_ignore_case() {
        let users = vec![
            User::new("nurse1", "a"),
            User::new("NURSE1", "b"),
            User::new("admin", "c"),
        ];

        assert_eq!(duplicate_usernames(&users), vec![("nurse1".to_string(), 2)]);
    }

    #[test]
    fn test_padded_stored_name_is_not_a_duplicate() {
        let users = vec![User::new("nurse1", "a"), User::new(" nurse1", "b")];

        assert!(duplicate_usernames(&users).is_empty());
    }
}
