//! Caller-owned in-memory user list.

use crate::domain::entities::User;
use crate::domain::repositories::UserDirectory;
use crate::error::DirectoryError;
use async_trait::async_trait;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// A user directory backed by a list the caller keeps up to date.
///
/// Each lookup clones the current snapshot, so a [`replace`](Self::replace)
/// racing with a submission affects only later submissions.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Swaps in a new user list.
    pub fn replace(&self, users: Vec<User>) {
        debug!(count = users.len(), "Replacing in-memory user list");
        *self.users.write().unwrap_or_else(PoisonError::into_inner) = users;
    }

    pub fn len(&self) -> usize {
        self.users.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn users(&self) -> Result<Vec<User>, DirectoryError> {
        Ok(self
            .users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}
