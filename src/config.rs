//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the form is
//! shown.
//!
//! ```bash
//! export USERS_FILE="users.json"
//! export DEFAULT_FISCAL_YEAR="2081/082"
//! export FISCAL_YEARS="2080/081,2081/082,2082/083"
//! export LOCALE="ne"
//! ```
//!
//! ## Optional Variables
//!
//! - `USERS_FILE` - JSON user list (default: `users.json`)
//! - `DEFAULT_FISCAL_YEAR` - preselected fiscal year (default: `2081/082`)
//! - `FISCAL_YEARS` - comma-separated fiscal-year options (default: built-in list)
//! - `LOCALE` - message language, `en` or `ne` (default: `en`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::domain::entities::{DEFAULT_FISCAL_YEAR, FiscalYearCatalog};
use crate::domain::messages::{Locale, Messages};

/// Login tool configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub users_file: PathBuf,
    pub default_fiscal_year: String,
    /// Select options; empty means the built-in list.
    pub fiscal_years: Vec<String>,
    pub locale: Locale,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `LOCALE` names an unsupported language.
    pub fn from_env() -> Result<Self> {
        let users_file = env::var("USERS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("users.json"));

        let default_fiscal_year =
            env::var("DEFAULT_FISCAL_YEAR").unwrap_or_else(|_| DEFAULT_FISCAL_YEAR.to_string());

        let fiscal_years = env::var("FISCAL_YEARS")
            .map(|v| FiscalYearCatalog::parse_options(&v))
            .unwrap_or_default();

        let locale = match env::var("LOCALE") {
            Ok(v) => v
                .parse::<Locale>()
                .map_err(anyhow::Error::msg)
                .context("Invalid LOCALE")?,
            Err(_) => Locale::default(),
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            users_file,
            default_fiscal_year,
            fiscal_years,
            locale,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `default_fiscal_year` is not among the fiscal-year options
    /// - `users_file` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.users_file.as_os_str().is_empty() {
            anyhow::bail!("USERS_FILE must not be empty");
        }

        self.fiscal_year_catalog()
            .context("Invalid fiscal year configuration")?;

        Ok(())
    }

    /// Fiscal-year select options with the configured default.
    ///
    /// # Errors
    ///
    /// Returns an error if the default is not one of the options.
    pub fn fiscal_year_catalog(&self) -> Result<FiscalYearCatalog> {
        let options = if self.fiscal_years.is_empty() {
            FiscalYearCatalog::default().options().to_vec()
        } else {
            self.fiscal_years.clone()
        };

        FiscalYearCatalog::new(options, self.default_fiscal_year.clone()).map_err(anyhow::Error::msg)
    }

    pub fn messages(&self) -> Messages {
        Messages::new(self.locale)
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Users file: {}", self.users_file.display());
        tracing::info!("  Default fiscal year: {}", self.default_fiscal_year);
        if !self.fiscal_years.is_empty() {
            tracing::info!("  Fiscal years: {}", self.fiscal_years.join(", "));
        }
        tracing::info!("  Locale: {}", self.locale);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
