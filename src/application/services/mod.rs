//! Business logic services for the application layer.

pub mod login_controller;

pub use login_controller::{
    LoginController, LoginOptions, LoginSuccessHandler, LoginView, SUBMIT_LATENCY,
};
