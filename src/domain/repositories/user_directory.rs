//! Repository trait for the list of known users.

use crate::domain::entities::User;
use crate::error::DirectoryError;
use async_trait::async_trait;

/// Read-only source of the users a login is checked against.
///
/// The login controller reads the full list once per submission and performs
/// the credential match itself, so implementations only have to produce the
/// current snapshot in a stable order.
///
/// # Implementations
///
/// - [`crate::infrastructure::directory::InMemoryUserDirectory`] - caller-owned list
/// - [`crate::infrastructure::directory::JsonFileUserDirectory`] - JSON file on disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Returns every known user, in directory order.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] if the backing store cannot be read or
    /// holds malformed records.
    async fn users(&self) -> Result<Vec<User>, DirectoryError>;
}
