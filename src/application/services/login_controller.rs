//! Login form controller: validation and credential submission.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::domain::entities::{DEFAULT_FISCAL_YEAR, User};
use crate::domain::form::{ErrorKind, ErrorState, Field, FormError, FormState};
use crate::domain::messages::Messages;
use crate::domain::repositories::UserDirectory;
use crate::domain::state::{SubmissionPhase, SubmitOutcome};
use crate::domain::validation::{require_complete, validate_form};
use crate::error::LoginError;

/// Simulated latency of the credential check.
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(800);

/// Called with the matched user and the fiscal year the form was submitted with.
pub type LoginSuccessHandler = Arc<dyn Fn(&User, &str) + Send + Sync>;

/// Construction options for [`LoginController`].
#[derive(Debug, Clone, Default)]
pub struct LoginOptions {
    /// Preselected fiscal year; [`DEFAULT_FISCAL_YEAR`] when `None`.
    pub initial_fiscal_year: Option<String>,
    pub messages: Messages,
}

/// Everything a presentation layer binds to, as one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginView {
    pub form: FormState,
    pub errors: ErrorState,
    pub phase: SubmissionPhase,
    pub is_loading: bool,
    pub focus: Field,
    pub show_forgot_password_notice: bool,
    pub show_password: bool,
    pub remember_me: bool,
}

#[derive(Debug)]
struct ControllerState {
    form: FormState,
    errors: ErrorState,
    phase: SubmissionPhase,
    focus: Field,
    show_forgot_password_notice: bool,
    show_password: bool,
    remember_me: bool,
}

struct Inner<R> {
    directory: Arc<R>,
    on_login_success: LoginSuccessHandler,
    messages: Messages,
    state: Mutex<ControllerState>,
}

impl<R> Inner<R> {
    fn state(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// State machine behind the login form.
///
/// Owns the form values, their errors, and the submission phase. Cloning
/// yields another handle to the same form, which is how event handlers and
/// the render loop share it.
///
/// # Submission Flow
///
/// 1. Ignore the call if a check is already in flight
/// 2. Validate fields; on failure keep the inline errors and stop
/// 3. Clear all errors and enter [`SubmissionPhase::Checking`]
/// 4. Wait [`SUBMIT_LATENCY`], then read the [`UserDirectory`]
/// 5. Match the username (trimmed, case-insensitive) and the password (exact)
/// 6. Run the success callback, or set the form-level error
/// 7. Leave `Checking`
///
/// The check works on a copy of the form taken at step 3; edits made while
/// it runs are kept but do not affect it.
pub struct LoginController<R> {
    inner: Arc<Inner<R>>,
}

impl<R> Clone for LoginController<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R> fmt::Debug for LoginController<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginController")
            .field("state", &*self.inner.state())
            .finish_non_exhaustive()
    }
}

impl<R: UserDirectory> LoginController<R> {
    /// Creates a controller for a freshly mounted form.
    pub fn new<F>(directory: Arc<R>, options: LoginOptions, on_login_success: F) -> Self
    where
        F: Fn(&User, &str) + Send + Sync + 'static,
    {
        let fiscal_year = options
            .initial_fiscal_year
            .unwrap_or_else(|| DEFAULT_FISCAL_YEAR.to_string());

        let state = ControllerState {
            form: FormState::with_fiscal_year(fiscal_year),
            errors: ErrorState::default(),
            phase: SubmissionPhase::Idle,
            focus: Field::FiscalYear,
            show_forgot_password_notice: false,
            show_password: false,
            remember_me: false,
        };

        Self {
            inner: Arc::new(Inner {
                directory,
                on_login_success: Arc::new(on_login_success),
                messages: options.messages,
                state: Mutex::new(state),
            }),
        }
    }

    /// Stores a new field value.
    ///
    /// Clears that field's error and the form-level error; other fields keep
    /// theirs. No validation happens here.
    pub fn on_field_change(&self, field: Field, value: impl Into<String>) {
        let mut state = self.inner.state();
        state.form.set(field, value);
        state.errors.clear_field(field);
        state.errors.form = None;
        if !state.phase.is_loading() {
            state.phase = SubmissionPhase::Idle;
        }
    }

    /// Confirm key on the username field: focus moves to the password.
    ///
    /// Returns the field that now has focus.
    pub fn on_username_enter_key(&self) -> Field {
        let mut state = self.inner.state();
        state.focus = Field::Password;
        state.focus
    }

    /// Records which control the user focused.
    pub fn set_focus(&self, field: Field) {
        self.inner.state().focus = field;
    }

    /// Re-runs the field rules, replacing the whole error state.
    ///
    /// Returns `true` if every field is valid.
    pub fn validate(&self) -> bool {
        let mut state = self.inner.state();
        state.errors = validate_form(&state.form, &self.inner.messages);
        !state.errors.has_field_errors()
    }

    /// Submits the form.
    ///
    /// Never fails: every problem ends up in the error state, and the outcome
    /// only reports which branch was taken.
    pub async fn submit(&self) -> SubmitOutcome {
        let snapshot = {
            let mut state = self.inner.state();

            if state.phase.is_loading() {
                debug!("Submission already in progress, ignoring");
                return SubmitOutcome::Ignored;
            }

            state.phase = SubmissionPhase::Validating;

            if let Err(err) = require_complete(&state.form, &self.inner.messages) {
                state.phase = SubmissionPhase::Failed;
                let outcome = err.outcome();
                if let LoginError::Validation(errors) = err {
                    debug!(fields = ?errors.invalid_fields(), "Login form failed validation");
                    state.errors = errors;
                }
                return outcome;
            }

            state.errors.clear_all();
            state.phase = SubmissionPhase::Checking;
            state.form.clone()
        };

        let mut finalizer = Finalizer::new(&self.inner);

        info!(
            username = %snapshot.username.trim(),
            fiscal_year = %snapshot.fiscal_year,
            "Checking login credentials"
        );

        match self.check_credentials(&snapshot).await {
            Ok(user) => {
                info!(username = %user.username, fiscal_year = %snapshot.fiscal_year, "Login succeeded");
                (self.inner.on_login_success)(&user, &snapshot.fiscal_year);
                finalizer.complete(SubmissionPhase::Succeeded, None);
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                if let LoginError::System(source) = &err {
                    error!(error = %source, "Login check failed");
                } else {
                    warn!(username = %snapshot.username.trim(), error = %err, "Login rejected");
                }
                finalizer.complete(SubmissionPhase::Failed, err.form_kind());
                err.outcome()
            }
        }
    }

    async fn check_credentials(&self, form: &FormState) -> Result<User, LoginError> {
        tokio::time::sleep(SUBMIT_LATENCY).await;

        let users = self.inner.directory.users().await?;

        users
            .into_iter()
            .find(|u| u.matches_username(&form.username) && u.matches_password(&form.password))
            .ok_or(LoginError::CredentialMismatch)
    }

    /// Shows or hides the "contact your administrator" notice.
    ///
    /// Returns the new visibility.
    pub fn toggle_forgot_password_notice(&self) -> bool {
        let mut state = self.inner.state();
        state.show_forgot_password_notice = !state.show_forgot_password_notice;
        state.show_forgot_password_notice
    }

    /// Notice text while it is shown.
    pub fn forgot_password_notice(&self) -> Option<&'static str> {
        self.inner
            .state()
            .show_forgot_password_notice
            .then(|| self.inner.messages.forgot_password_notice())
    }

    /// Switches the password control between masked and plain text.
    pub fn toggle_password_visibility(&self) -> bool {
        let mut state = self.inner.state();
        state.show_password = !state.show_password;
        state.show_password
    }

    /// "Remember me" checkbox. Purely cosmetic; nothing is persisted.
    pub fn toggle_remember_me(&self) -> bool {
        let mut state = self.inner.state();
        state.remember_me = !state.remember_me;
        state.remember_me
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state().phase.is_loading()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.inner.state().phase
    }

    pub fn form(&self) -> FormState {
        self.inner.state().form.clone()
    }

    pub fn errors(&self) -> ErrorState {
        self.inner.state().errors.clone()
    }

    pub fn messages(&self) -> &Messages {
        &self.inner.messages
    }

    /// Snapshot of all bindable state.
    pub fn view(&self) -> LoginView {
        let state = self.inner.state();
        LoginView {
            form: state.form.clone(),
            errors: state.errors.clone(),
            phase: state.phase,
            is_loading: state.phase.is_loading(),
            focus: state.focus,
            show_forgot_password_notice: state.show_forgot_password_notice,
            show_password: state.show_password,
            remember_me: state.remember_me,
        }
    }
}

/// Leaves the `Checking` phase when a submission ends.
///
/// If the submit future is dropped mid-check, or the success callback
/// panics, the form returns to `Idle` instead of staying locked.
struct Finalizer<'a, R> {
    inner: &'a Inner<R>,
    done: bool,
}

impl<'a, R> Finalizer<'a, R> {
    fn new(inner: &'a Inner<R>) -> Self {
        Self { inner, done: false }
    }

    fn complete(&mut self, phase: SubmissionPhase, form_error: Option<ErrorKind>) {
        let mut state = self.inner.state();
        state.phase = phase;
        if let Some(kind) = form_error {
            state.errors.form = Some(FormError::new(kind, &self.inner.messages));
        }
        self.done = true;
    }
}

impl<R> Drop for Finalizer<'_, R> {
    fn drop(&mut self) {
        if self.done {
            return;
        }
        let mut state = self.inner.state();
        if state.phase.is_loading() {
            state.phase = SubmissionPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserDirectory;
    use crate::error::DirectoryError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_controller(
        directory: MockUserDirectory,
    ) -> (LoginController<MockUserDirectory>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let controller = LoginController::new(
            Arc::new(directory),
            LoginOptions::default(),
            move |_user: &User, _fy: &str| {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        );
        (controller, calls)
    }

    fn fill(controller: &LoginController<MockUserDirectory>, username: &str, password: &str) {
        controller.on_field_change(Field::Username, username);
        controller.on_field_change(Field::Password, password);
    }

    #[tokio::test(start_paused = true)]
    async fn test_directory_failure_sets_system_problem() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_users()
            .times(1)
            .returning(|| Err(DirectoryError::Unavailable("connection reset".to_string())));

        let (controller, calls) = counting_controller(directory);
        fill(&controller, "nurse1", "pw123");

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!controller.is_loading());
        let errors = controller.errors();
        assert!(!errors.has_field_errors());
        assert_eq!(
            errors.form.map(|e| e.kind),
            Some(ErrorKind::SystemProblem)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_form_never_reads_directory() {
        let mut directory = MockUserDirectory::new();
        directory.expect_users().times(0);

        let (controller, calls) = counting_controller(directory);
        fill(&controller, "   ", "pw123");

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(controller.phase(), SubmissionPhase::Failed);
        assert!(controller.errors().field(Field::Username).is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_submit_checks_once() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_users()
            .times(1)
            .returning(|| Ok(vec![User::new("nurse1", "pw123")]));

        let (controller, calls) = counting_controller(directory);
        fill(&controller, "nurse1", "pw123");

        let (first, second) = tokio::join!(controller.submit(), controller.submit());

        let mut outcomes = [first, second];
        outcomes.sort_by_key(|o| *o == SubmitOutcome::Ignored);
        assert_eq!(outcomes, [SubmitOutcome::Succeeded, SubmitOutcome::Ignored]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!controller.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_submission_unlocks_form() {
        let mut directory = MockUserDirectory::new();
        directory.expect_users().times(0);

        let (controller, _calls) = counting_controller(directory);
        fill(&controller, "nurse1", "pw123");

        let pending = controller.submit();
        let timed_out = tokio::time::timeout(Duration::from_millis(10), pending).await;

        assert!(timed_out.is_err());
        assert!(!controller.is_loading());
        assert_eq!(controller.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_initial_state() {
        let (controller, _calls) = counting_controller(MockUserDirectory::new());
        let view = controller.view();

        assert_eq!(view.form.fiscal_year, DEFAULT_FISCAL_YEAR);
        assert!(view.form.username.is_empty());
        assert!(view.errors.is_empty());
        assert_eq!(view.phase, SubmissionPhase::Idle);
        assert!(!view.is_loading);
        assert!(!view.show_forgot_password_notice);
        assert!(!view.remember_me);
    }

    #[test]
    fn test_toggles_leave_form_untouched() {
        let (controller, _calls) = counting_controller(MockUserDirectory::new());
        controller.on_field_change(Field::Username, "nurse1");
        let before = controller.form();

        assert!(controller.toggle_forgot_password_notice());
        assert!(controller.forgot_password_notice().is_some());
        assert!(controller.toggle_password_visibility());
        assert!(controller.toggle_remember_me());
        assert!(!controller.toggle_forgot_password_notice());
        assert!(controller.forgot_password_notice().is_none());

        assert_eq!(controller.form(), before);
        assert!(controller.errors().is_empty());
        assert_eq!(controller.phase(), SubmissionPhase::Idle);
    }
}
