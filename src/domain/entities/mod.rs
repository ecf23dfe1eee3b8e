//! Core entities of the login flow.
//!
//! - [`User`] - a known user with credentials and an open profile
//! - [`FiscalYearCatalog`] - the options of the fiscal-year select

pub mod fiscal_year;
pub mod user;

pub use fiscal_year::{DEFAULT_FISCAL_YEAR, FiscalYearCatalog};
pub use user::User;
