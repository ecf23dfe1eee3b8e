//! Submission-time validation of the login form.

use crate::domain::form::{ErrorKind, ErrorState, Field, FormError, FormState};
use crate::domain::messages::Messages;
use crate::error::LoginError;
use validator::{Validate, ValidationError};

/// Rejects values that are empty once surrounding whitespace is removed.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Checks every required field and builds a fresh [`ErrorState`].
///
/// The result holds exactly one entry per empty field and never a
/// form-level error. Callers treat an error state without field errors as
/// "valid".
pub fn validate_form(form: &FormState, messages: &Messages) -> ErrorState {
    let mut errors = ErrorState::default();

    if let Err(failures) = form.validate() {
        let failed = failures.errors();
        for field in Field::ALL {
            if failed.contains_key(rule_key(field)) {
                errors.set_field(field, FormError::new(required_kind(field), messages));
            }
        }
    }

    errors
}

/// Gate in front of the credential check.
///
/// # Errors
///
/// Returns [`LoginError::Validation`] carrying the per-field errors if any
/// required field is empty.
pub fn require_complete(form: &FormState, messages: &Messages) -> Result<(), LoginError> {
    let errors = validate_form(form, messages);
    if errors.has_field_errors() {
        return Err(LoginError::Validation(errors));
    }
    Ok(())
}

/// Key the derive reports a field's failures under.
fn rule_key(field: Field) -> &'static str {
    match field {
        Field::FiscalYear => "fiscal_year",
        Field::Username => "username",
        Field::Password => "password",
    }
}

fn required_kind(field: Field) -> ErrorKind {
    match field {
        Field::FiscalYear => ErrorKind::SelectFiscalYear,
        Field::Username => ErrorKind::EnterUsername,
        Field::Password => ErrorKind::EnterPassword,
    }
}
