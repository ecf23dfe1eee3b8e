//! Error taxonomy for the login flow.
//!
//! Every failure a submission can hit is one of three kinds:
//!
//! - **Validation** - a required field is missing; shown inline per field
//! - **Credential mismatch** - input is complete but matches no user
//! - **System** - the user directory could not be read
//!
//! [`crate::application::services::LoginController::submit`] converts all of
//! them into [`crate::domain::form::ErrorState`] updates, so none of these
//! values reach the embedding UI directly.

use crate::domain::form::{ErrorKind, ErrorState};
use crate::domain::state::SubmitOutcome;
use thiserror::Error;

/// Failure while reading the user directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read user directory {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed user directory {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("user directory unavailable: {0}")]
    Unavailable(String),
}

/// Outcome of a failed submission, before it is projected onto the form.
#[derive(Debug, Error)]
pub enum LoginError {
    /// One or more required fields are empty.
    #[error("login form has missing fields")]
    Validation(ErrorState),

    /// No user matched username and password jointly.
    #[error("incorrect username or password")]
    CredentialMismatch,

    /// Anything unexpected during the credential check.
    #[error("system problem during login: {0}")]
    System(#[from] DirectoryError),
}

impl LoginError {
    /// Form-level error kind shown to the user, if any.
    ///
    /// Validation failures are reported per field, so they have none.
    pub fn form_kind(&self) -> Option<ErrorKind> {
        match self {
            LoginError::Validation(_) => None,
            LoginError::CredentialMismatch => Some(ErrorKind::IncorrectCredentials),
            LoginError::System(_) => Some(ErrorKind::SystemProblem),
        }
    }

    /// What `submit` reports for this failure.
    pub fn outcome(&self) -> SubmitOutcome {
        match self {
            LoginError::Validation(_) => SubmitOutcome::Invalid,
            LoginError::CredentialMismatch => SubmitOutcome::Rejected,
            LoginError::System(_) => SubmitOutcome::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_kind_mapping() {
        assert_eq!(LoginError::Validation(ErrorState::default()).form_kind(), None);
        assert_eq!(
            LoginError::CredentialMismatch.form_kind(),
            Some(ErrorKind::IncorrectCredentials)
        );
        assert_eq!(
            LoginError::System(DirectoryError::Unavailable("down".to_string())).form_kind(),
            Some(ErrorKind::SystemProblem)
        );
    }

    #[test]
    fn test_outcome_mapping() {
        assert_eq!(
            LoginError::Validation(ErrorState::default()).outcome(),
            SubmitOutcome::Invalid
        );
        assert_eq!(LoginError::CredentialMismatch.outcome(), SubmitOutcome::Rejected);
        assert_eq!(
            LoginError::System(DirectoryError::Unavailable("down".to_string())).outcome(),
            SubmitOutcome::Failed
        );
    }

    #[test]
    fn test_directory_error_converts_to_system() {
        let err: LoginError = DirectoryError::Unavailable("timeout".to_string()).into();
        assert!(matches!(err, LoginError::System(_)));
        assert!(err.to_string().contains("timeout"));
    }
}
