//! User directory read from a JSON file.

use crate::domain::entities::User;
use crate::domain::repositories::UserDirectory;
use crate::error::DirectoryError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads users from a JSON array of user records.
///
/// The file is re-read on every lookup so edits are picked up without a
/// restart.
///
/// # File Format
///
/// ```json
/// [
///   { "username": "nurse1", "password": "pw123", "fullName": "Sita Sharma" }
/// ]
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileUserDirectory {
    path: PathBuf,
}

impl JsonFileUserDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl UserDirectory for JsonFileUserDirectory {
    async fn users(&self) -> Result<Vec<User>, DirectoryError> {
        let path_display = self.path.display().to_string();

        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|source| DirectoryError::Io {
                path: path_display.clone(),
                source,
            })?;

        let users: Vec<User> =
            serde_json::from_slice(&raw).map_err(|source| DirectoryError::Malformed {
                path: path_display.clone(),
                source,
            })?;

        debug!(path = %path_display, count = users.len(), "Loaded user directory");

        Ok(users)
    }
}
