//! Login form model: field values and the errors bound to them.

use crate::domain::messages::Messages;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// An input control on the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FiscalYear,
    Username,
    Password,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::FiscalYear, Field::Username, Field::Password];

    /// Stable control name, as bound by the presentation layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::FiscalYear => "fiscalYear",
            Field::Username => "username",
            Field::Password => "password",
        }
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fiscalYear" => Ok(Field::FiscalYear),
            "username" => Ok(Field::Username),
            "password" => Ok(Field::Password),
            other => Err(format!("unknown form field '{other}'")),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current values of the form controls.
///
/// The validation rules are checked only at submission time, through
/// [`crate::domain::validation::validate_form`].
#[derive(Clone, Default, PartialEq, Eq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    #[validate(length(min = 1))]
    pub fiscal_year: String,

    #[validate(custom(function = "crate::domain::validation::not_blank"))]
    pub username: String,

    /// Never trimmed: a single space is a valid password.
    #[validate(length(min = 1))]
    #[serde(skip_serializing)]
    pub password: String,
}

impl FormState {
    /// Empty credentials with a preselected fiscal year.
    pub fn with_fiscal_year(fiscal_year: impl Into<String>) -> Self {
        Self {
            fiscal_year: fiscal_year.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FiscalYear => &self.fiscal_year,
            Field::Username => &self.username,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FiscalYear => &mut self.fiscal_year,
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
        };
        *slot = value.into();
    }
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("fiscal_year", &self.fiscal_year)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Kind of error shown on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    SelectFiscalYear,
    EnterUsername,
    EnterPassword,
    IncorrectCredentials,
    SystemProblem,
}

/// A user-visible error with its resolved text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FormError {
    pub fn new(kind: ErrorKind, messages: &Messages) -> Self {
        Self {
            kind,
            message: messages.error(kind).to_string(),
        }
    }
}

/// Inline per-field errors plus the form-level banner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorState {
    pub fiscal_year: Option<FormError>,
    pub username: Option<FormError>,
    pub password: Option<FormError>,
    pub form: Option<FormError>,
}

impl ErrorState {
    pub fn field(&self, field: Field) -> Option<&FormError> {
        self.slot(field).as_ref()
    }

    pub fn set_field(&mut self, field: Field, error: FormError) {
        *self.slot_mut(field) = Some(error);
    }

    pub fn clear_field(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn has_field_errors(&self) -> bool {
        Field::ALL.iter().any(|f| self.field(*f).is_some())
    }

    pub fn is_empty(&self) -> bool {
        !self.has_field_errors() && self.form.is_none()
    }

    /// Fields that currently carry an error, in form order.
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.field(*f).is_some())
            .collect()
    }

    fn slot(&self, field: Field) -> &Option<FormError> {
        match field {
            Field::FiscalYear => &self.fiscal_year,
            Field::Username => &self.username,
            Field::Password => &self.password,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<FormError> {
        match field {
            Field::FiscalYear => &mut self.fiscal_year,
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::messages::Locale;

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
        assert!("remember".parse::<Field>().is_err());
    }

    #[test]
    fn test_form_state_get_set() {
        let mut form = FormState::with_fiscal_year("2081/082");
        form.set(Field::Username, "nurse1");
        form.set(Field::Password, "pw123");

        assert_eq!(form.get(Field::FiscalYear), "2081/082");
        assert_eq!(form.get(Field::Username), "nurse1");
        assert_eq!(form.get(Field::Password), "pw123");
    }

    #[test]
    fn test_form_state_debug_hides_password() {
        let mut form = FormState::default();
        form.set(Field::Password, "Secret1");

        assert!(!format!("{form:?}").contains("Secret1"));
    }

    #[test]
    fn test_error_state_clear_field_leaves_others() {
        let messages = Messages::new(Locale::English);
        let mut errors = ErrorState::default();
        errors.set_field(
            Field::Username,
            FormError::new(ErrorKind::EnterUsername, &messages),
        );
        errors.set_field(
            Field::Password,
            FormError::new(ErrorKind::EnterPassword, &messages),
        );

        errors.clear_field(Field::Username);

        assert!(errors.field(Field::Username).is_none());
        assert_eq!(
            errors.field(Field::Password).map(|e| e.kind),
            Some(ErrorKind::EnterPassword)
        );
        assert_eq!(errors.invalid_fields(), vec![Field::Password]);
    }

    #[test]
    fn test_error_state_is_empty() {
        let messages = Messages::default();
        let mut errors = ErrorState::default();
        assert!(errors.is_empty());

        errors.form = Some(FormError::new(ErrorKind::SystemProblem, &messages));
        assert!(!errors.is_empty());
        assert!(!errors.has_field_errors());

        errors.clear_all();
        assert!(errors.is_empty());
    }
}
