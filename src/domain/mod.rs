//! Domain layer: the login form model and its rules.
//!
//! - [`entities`] - users and the fiscal-year catalogue
//! - [`form`] - field values and error state
//! - [`validation`] - submission-time field rules
//! - [`messages`] - localized message table
//! - [`state`] - submission phases and outcomes
//! - [`repositories`] - the user directory contract
//!
//! Nothing here depends on the infrastructure layer or on a runtime.

pub mod entities;
pub mod form;
pub mod messages;
pub mod repositories;
pub mod state;
pub mod validation;
