//! User entity as supplied by the user directory.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A known user of the system.
///
/// Passwords are stored and compared in plaintext; the directory is an
/// internal low-security list. Everything besides the credentials lives in
/// `profile` and is passed through to the login callback untouched.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl User {
    /// Creates a user with an empty profile.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            profile: Map::new(),
        }
    }

    /// Adds a profile attribute.
    pub fn with_profile(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.profile.insert(key.into(), value.into());
        self
    }

    /// Returns true if `input` names this user.
    ///
    /// Surrounding whitespace in the input is ignored and case is folded.
    pub fn matches_username(&self, input: &str) -> bool {
        self.username.to_lowercase() == input.trim().to_lowercase()
    }

    /// Returns true if `input` is exactly this user's password.
    pub fn matches_password(&self, input: &str) -> bool {
        self.password == input
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("password", &"***")
            .field("profile", &self.profile)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_username_match_ignores_case_and_whitespace() {
        let user = User::new("Admin", "Secret1");

        assert!(user.matches_username(" admin "));
        assert!(user.matches_username("ADMIN"));
        assert!(!user.matches_username("admin2"));
    }

    #[test]
    fn test_password_match_is_exact() {
        let user = User::new("Admin", "Secret1");

        assert!(user.matches_password("Secret1"));
        assert!(!user.matches_password("secret1"));
        assert!(!user.matches_password(" Secret1"));
    }

    #[test]
    fn test_profile_is_flattened() {
        let user: User = serde_json::from_value(json!({
            "username": "nurse1",
            "password": "pw123",
            "fullName": "Sita Sharma",
            "role": "nurse"
        }))
        .unwrap();

        assert_eq!(user.username, "nurse1");
        assert_eq!(user.profile.get("role"), Some(&json!("nurse")));
        assert_eq!(user.profile.len(), 2);

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["fullName"], "Sita Sharma");
    }

    #[test]
    fn test_debug_hides_password() {
        let user = User::new("nurse1", "pw123").with_profile("role", "nurse");
        let debug = format!("{user:?}");

        assert!(debug.contains("nurse1"));
        assert!(!debug.contains("pw123"));
    }
}
