//! # Fiscal Login
//!
//! Login form controller for an internal health-records tool: the user picks
//! a fiscal year, enters a username and password, and on success the caller
//! receives the matched user together with the selected fiscal year.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - form model, validation rules, messages, user directory trait
//! - **Application Layer** ([`application`]) - the [`LoginController`] state machine
//! - **Infrastructure Layer** ([`infrastructure`]) - user directory backends
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use fiscal_login::prelude::*;
//!
//! # async fn run() {
//! let directory = Arc::new(InMemoryUserDirectory::new(vec![User::new("nurse1", "pw123")]));
//! let controller = LoginController::new(directory, LoginOptions::default(), |user, fiscal_year| {
//!     println!("{} logged in for {fiscal_year}", user.username);
//! });
//!
//! controller.on_field_change(Field::Username, "nurse1");
//! controller.on_field_change(Field::Password, "pw123");
//! assert!(controller.submit().await.is_success());
//! # }
//! ```
//!
//! ## Configuration
//!
//! The bundled CLI reads its settings from environment variables via
//! [`config::Config`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub mod config;
pub mod telemetry;

pub use application::services::LoginController;
pub use error::{DirectoryError, LoginError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LoginController, LoginOptions, LoginView};
    pub use crate::domain::entities::{FiscalYearCatalog, User};
    pub use crate::domain::form::{ErrorKind, ErrorState, Field, FormState};
    pub use crate::domain::messages::{Locale, Messages};
    pub use crate::domain::repositories::UserDirectory;
    pub use crate::domain::state::{SubmissionPhase, SubmitOutcome};
    pub use crate::error::{DirectoryError, LoginError};
    pub use crate::infrastructure::directory::{InMemoryUserDirectory, JsonFileUserDirectory};
}
