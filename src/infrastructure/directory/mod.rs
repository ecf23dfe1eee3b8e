//! [`UserDirectory`](crate::domain::repositories::UserDirectory) implementations.

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryUserDirectory;
pub use json_file::JsonFileUserDirectory;
