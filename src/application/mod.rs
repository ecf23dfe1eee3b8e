//! Application layer orchestrating the login flow.
//!
//! Services consume the repository traits of the domain layer and expose the
//! operations a presentation layer binds to.
//!
//! # Available Services
//!
//! - [`services::login_controller::LoginController`] - login form state machine

pub mod services;
