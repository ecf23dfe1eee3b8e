//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::directory`; mock
//! implementations are generated via `mockall` for unit tests.

pub mod user_directory;

pub use user_directory::UserDirectory;

#[cfg(test)]
pub use user_directory::MockUserDirectory;
