//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`directory`] - user directory backends (in-memory list, JSON file)

pub mod directory;
