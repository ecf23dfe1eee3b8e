//! Submission state machine types.

use serde::Serialize;

/// Where the form is in its submission lifecycle.
///
/// ```text
/// Idle ──submit──▶ Validating ──invalid──▶ Failed
///                      │
///                    valid
///                      ▼
///                  Checking ──match──▶ Succeeded
///                      └──mismatch / error──▶ Failed
/// ```
///
/// Editing a field while not `Checking` returns the form to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Checking,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    /// True while a credential check is in flight.
    pub fn is_loading(self) -> bool {
        self == SubmissionPhase::Checking
    }
}

/// What a single `submit` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was already in flight; nothing happened.
    Ignored,
    /// Field validation failed; no check was performed.
    Invalid,
    /// Credentials matched and the success callback ran.
    Succeeded,
    /// Credentials matched no user.
    Rejected,
    /// The check itself failed.
    Failed,
}

impl SubmitOutcome {
    pub fn is_success(self) -> bool {
        self == SubmitOutcome::Succeeded
    }
}
