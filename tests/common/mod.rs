#![allow(dead_code)]

use fiscal_login::prelude::*;
use std::sync::{Arc, Mutex};

/// Every `(username, fiscal_year)` pair the success callback received.
pub type Sessions = Arc<Mutex<Vec<(User, String)>>>;

pub fn nurse() -> User {
    User::new("nurse1", "pw123").with_profile("role", "nurse")
}

pub fn admin() -> User {
    User::new("Admin", "Secret1").with_profile("fullName", "System Administrator")
}

pub fn create_test_controller<R: UserDirectory>(directory: Arc<R>) -> (LoginController<R>, Sessions) {
    create_test_controller_with(directory, LoginOptions::default())
}

pub fn create_test_controller_with<R: UserDirectory>(
    directory: Arc<R>,
    options: LoginOptions,
) -> (LoginController<R>, Sessions) {
    let sessions: Sessions = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&sessions);

    let controller = LoginController::new(directory, options, move |user: &User, fiscal_year: &str| {
        recorder
            .lock()
            .unwrap()
            .push((user.clone(), fiscal_year.to_string()));
    });

    (controller, sessions)
}

pub fn in_memory(users: Vec<User>) -> Arc<InMemoryUserDirectory> {
    Arc::new(InMemoryUserDirectory::new(users))
}

pub fn fill<R: UserDirectory>(
    controller: &LoginController<R>,
    fiscal_year: &str,
    username: &str,
    password: &str,
) {
    controller.on_field_change(Field::FiscalYear, fiscal_year);
    controller.on_field_change(Field::Username, username);
    controller.on_field_change(Field::Password, password);
}

/// A directory whose backing store is always down.
pub struct UnavailableDirectory;

#[async_trait::async_trait]
impl UserDirectory for UnavailableDirectory {
    async fn users(&self) -> Result<Vec<User>, DirectoryError> {
        Err(DirectoryError::Unavailable("database offline".to_string()))
    }
}
