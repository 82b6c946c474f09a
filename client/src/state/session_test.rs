use std::cell::RefCell;

use async_trait::async_trait;

use super::*;
use crate::net::types::AuthUser;
use crate::state::toast::ToastKind;

fn session(token: &str, expires_at: Option<i64>) -> Session {
    Session {
        access_token: token.to_owned(),
        refresh_token: Some(format!("{token}-refresh")),
        expires_at,
        user: AuthUser { id: "user-1".to_owned(), email: Some("nurse@clinic.test".to_owned()) },
    }
}

#[derive(Default)]
struct FakeAuth {
    sign_in_result: Option<Result<Session, BackendError>>,
    sign_up_result: Option<Result<SignUpOutcome, BackendError>>,
    sign_out_fails: bool,
    refresh_fails: bool,
    calls: RefCell<Vec<&'static str>>,
}

impl FakeAuth {
    fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl AuthBackend for FakeAuth {
    async fn sign_in(&self, _credentials: &Credentials) -> Result<Session, BackendError> {
        self.calls.borrow_mut().push("sign_in");
        self.sign_in_result.clone().unwrap_or(Err(BackendError::Unavailable))
    }

    async fn sign_up(&self, _credentials: &Credentials) -> Result<SignUpOutcome, BackendError> {
        self.calls.borrow_mut().push("sign_up");
        self.sign_up_result.clone().unwrap_or(Err(BackendError::Unavailable))
    }

    async fn sign_out(&self, _session: &Session) -> Result<(), BackendError> {
        self.calls.borrow_mut().push("sign_out");
        if self.sign_out_fails {
            return Err(BackendError::Transport("offline".to_owned()));
        }
        Ok(())
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, BackendError> {
        self.calls.borrow_mut().push("refresh");
        if self.refresh_fails {
            return Err(BackendError::Api { status: 400, message: "Invalid Refresh Token".to_owned() });
        }
        Ok(session(&format!("fresh-from-{refresh_token}"), Some(9_999)))
    }
}

fn valid_sign_up() -> SignUpForm {
    SignUpForm {
        email: "nurse@clinic.test".to_owned(),
        password: "longenough".to_owned(),
        confirm_password: "longenough".to_owned(),
    }
}

// =============================================================
// State transitions
// =============================================================

#[test]
fn default_state_is_loading_without_session() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn every_event_ends_loading() {
    for event in [
        AuthEvent::InitialSession(None),
        AuthEvent::InitialSession(Some(session("a", None))),
        AuthEvent::SignedIn(session("b", None)),
        AuthEvent::TokenRefreshed(session("c", None)),
        AuthEvent::SignedOut,
    ] {
        let mut state = SessionState::default();
        let expected = event.session().cloned();
        state.apply(event);
        assert!(!state.loading);
        assert_eq!(state.session, expected);
    }
}

#[test]
fn signed_out_clears_session() {
    let mut state = SessionState::default();
    state.apply(AuthEvent::SignedIn(session("a", None)));
    assert_eq!(state.user_email(), Some("nurse@clinic.test"));
    state.apply(AuthEvent::SignedOut);
    assert_eq!(state.session, None);
    assert_eq!(state.user_email(), None);
}

#[test]
fn publish_updates_shared_state() {
    let state = RefCell::new(SessionState::default());
    publish(&state, AuthEvent::SignedIn(session("a", None)));
    assert!(state.borrow().is_authenticated());
}

// =============================================================
// Form validation
// =============================================================

#[test]
fn email_shape_checks() {
    assert!(is_valid_email("nurse@clinic.test"));
    assert!(is_valid_email("  a.b@c.org "));
    assert!(!is_valid_email("nurse"));
    assert!(!is_valid_email("@clinic.test"));
    assert!(!is_valid_email("nurse@"));
    assert!(!is_valid_email("nurse@clinic"));
    assert!(!is_valid_email("a@b@c.test"));
    assert!(!is_valid_email("nu rse@clinic.test"));
}

#[test]
fn sign_in_requires_email_and_password() {
    let errors = SignInForm::default().validate().unwrap_err();
    assert_eq!(error_for(&errors, FormField::Email), Some("Email is required"));
    assert_eq!(error_for(&errors, FormField::Password), Some("Password is required"));

    let form = SignInForm { email: " nurse@clinic.test ".to_owned(), password: "x".to_owned() };
    let credentials = form.validate().unwrap();
    assert_eq!(credentials.email, "nurse@clinic.test");
}

#[test]
fn sign_up_rejects_short_password() {
    let form = SignUpForm { password: "short".to_owned(), confirm_password: "short".to_owned(), ..valid_sign_up() };
    let errors = form.validate().unwrap_err();
    assert_eq!(error_for(&errors, FormField::Password), Some("Password must be at least 8 characters long"));
    assert_eq!(error_for(&errors, FormField::ConfirmPassword), None);
}

#[test]
fn sign_up_rejects_mismatched_confirmation() {
    let form = SignUpForm { confirm_password: "different1".to_owned(), ..valid_sign_up() };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors, vec![FieldError::new(FormField::ConfirmPassword, "Passwords do not match")]);
}

#[test]
fn backend_message_is_shown_verbatim() {
    let api = BackendError::Api { status: 400, message: "Invalid login credentials".to_owned() };
    assert_eq!(auth_failure_message(&api, "Failed to sign in"), "Invalid login credentials");
    let blank = BackendError::Api { status: 500, message: " ".to_owned() };
    assert_eq!(auth_failure_message(&blank, "Failed to sign in"), "Failed to sign in");
    assert_eq!(auth_failure_message(&BackendError::Unavailable, "Failed to sign up"), "Failed to sign up");
}

// =============================================================
// Flows
// =============================================================

#[tokio::test]
async fn sign_in_success_publishes_session() {
    let auth = FakeAuth { sign_in_result: Some(Ok(session("a", None))), ..FakeAuth::default() };
    let state = RefCell::new(SessionState::default());
    let toasts = RefCell::new(ToastState::default());
    let form = SignInForm { email: "nurse@clinic.test".to_owned(), password: "secret".to_owned() };

    assert!(sign_in(&auth, &form, &state, &toasts).await.is_ok());

    assert_eq!(state.borrow().session, Some(session("a", None)));
    assert!(toasts.borrow().toasts().is_empty());
}

#[tokio::test]
async fn sign_in_failure_toasts_backend_message() {
    let auth = FakeAuth {
        sign_in_result: Some(Err(BackendError::Api { status: 400, message: "Invalid login credentials".to_owned() })),
        ..FakeAuth::default()
    };
    let state = RefCell::new(SessionState::default());
    let toasts = RefCell::new(ToastState::default());
    let form = SignInForm { email: "nurse@clinic.test".to_owned(), password: "wrong".to_owned() };

    assert!(sign_in(&auth, &form, &state, &toasts).await.is_ok());

    assert!(!state.borrow().is_authenticated());
    let toasts = toasts.borrow();
    let toast = toasts.latest().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Invalid login credentials");
}

#[tokio::test]
async fn invalid_sign_up_never_calls_backend() {
    let auth = FakeAuth::default();
    let state = RefCell::new(SessionState::default());
    let toasts = RefCell::new(ToastState::default());
    let form = SignUpForm { confirm_password: "mismatch!".to_owned(), ..valid_sign_up() };

    let errors = sign_up(&auth, &form, &state, &toasts).await.unwrap_err();

    assert_eq!(error_for(&errors, FormField::ConfirmPassword), Some("Passwords do not match"));
    assert!(auth.calls().is_empty());
    assert!(toasts.borrow().toasts().is_empty());
}

#[tokio::test]
async fn sign_up_needing_confirmation_keeps_user_signed_out() {
    let auth = FakeAuth { sign_up_result: Some(Ok(SignUpOutcome::ConfirmationSent)), ..FakeAuth::default() };
    let state = RefCell::new(SessionState::default());
    let toasts = RefCell::new(ToastState::default());

    assert!(sign_up(&auth, &valid_sign_up(), &state, &toasts).await.is_ok());

    assert!(!state.borrow().is_authenticated());
    assert_eq!(toasts.borrow().latest().unwrap().message, SIGN_UP_CONFIRM_MESSAGE);
}

#[tokio::test]
async fn auto_confirmed_sign_up_signs_in() {
    let auth = FakeAuth {
        sign_up_result: Some(Ok(SignUpOutcome::SignedIn(session("new", None)))),
        ..FakeAuth::default()
    };
    let state = RefCell::new(SessionState::default());
    let toasts = RefCell::new(ToastState::default());

    assert!(sign_up(&auth, &valid_sign_up(), &state, &toasts).await.is_ok());

    assert_eq!(state.borrow().session, Some(session("new", None)));
    assert_eq!(toasts.borrow().latest().unwrap().kind, ToastKind::Success);
}

#[tokio::test]
async fn sign_out_clears_session_even_when_backend_fails() {
    let auth = FakeAuth { sign_out_fails: true, ..FakeAuth::default() };
    let state = RefCell::new(SessionState::default());
    state.borrow_mut().apply(AuthEvent::SignedIn(session("a", None)));

    sign_out(&auth, &state).await;

    assert_eq!(auth.calls(), vec!["sign_out"]);
    assert_eq!(state.borrow().session, None);
}

#[tokio::test]
async fn sign_out_without_session_skips_backend() {
    let auth = FakeAuth::default();
    let state = RefCell::new(SessionState::default());

    sign_out(&auth, &state).await;

    assert!(auth.calls().is_empty());
    assert!(!state.borrow().loading);
}

#[tokio::test]
async fn restore_without_stored_session_finishes_loading() {
    let auth = FakeAuth::default();
    let state = RefCell::new(SessionState::default());

    restore_session(&auth, None, 1_000, &state).await;

    assert_eq!(*state.borrow(), SessionState { session: None, loading: false });
    assert!(auth.calls().is_empty());
}

#[tokio::test]
async fn restore_keeps_live_session() {
    let auth = FakeAuth::default();
    let state = RefCell::new(SessionState::default());
    let stored = session("live", Some(2_000));

    restore_session(&auth, Some(stored.clone()), 1_000, &state).await;

    assert_eq!(state.borrow().session, Some(stored));
    assert!(auth.calls().is_empty());
}

#[tokio::test]
async fn restore_refreshes_expired_session() {
    let auth = FakeAuth::default();
    let state = RefCell::new(SessionState::default());

    restore_session(&auth, Some(session("old", Some(1_000))), 1_000, &state).await;

    assert_eq!(auth.calls(), vec!["refresh"]);
    let state = state.borrow();
    assert_eq!(state.session.as_ref().map(|s| s.access_token.as_str()), Some("fresh-from-old-refresh"));
    assert!(!state.loading);
}

#[tokio::test]
async fn restore_signs_out_when_refresh_fails() {
    let auth = FakeAuth { refresh_fails: true, ..FakeAuth::default() };
    let state = RefCell::new(SessionState::default());

    restore_session(&auth, Some(session("old", Some(10))), 1_000, &state).await;

    assert_eq!(state.borrow().session, None);
    assert!(!state.borrow().loading);
}

#[tokio::test]
async fn restore_signs_out_expired_session_without_refresh_token() {
    let auth = FakeAuth::default();
    let state = RefCell::new(SessionState::default());
    let stored = Session { refresh_token: None, ..session("old", Some(10)) };

    restore_session(&auth, Some(stored), 1_000, &state).await;

    assert!(auth.calls().is_empty());
    assert_eq!(state.borrow().session, None);
}

#[tokio::test]
async fn session_expiring_after_restore_is_refreshed_before_next_call() {
    let auth = FakeAuth::default();
    let state = RefCell::new(SessionState::default());
    restore_session(&auth, Some(session("live", Some(2_000))), 1_000, &state).await;
    assert!(auth.calls().is_empty());

    let current = current_session(&auth, &state, 3_000).await;

    assert_eq!(auth.calls(), vec!["refresh"]);
    let token = current.as_ref().map(|s| s.access_token.as_str());
    assert_eq!(token, Some("fresh-from-live-refresh"));
    assert_eq!(state.borrow().session, current);
}

#[tokio::test]
async fn live_session_is_used_without_backend_call() {
    let auth = FakeAuth::default();
    let state = RefCell::new(SessionState::default());
    let live = session("live", Some(2_000));
    publish(&state, AuthEvent::SignedIn(live.clone()));

    assert_eq!(current_session(&auth, &state, 1_000).await, Some(live));
    assert!(auth.calls().is_empty());
}

#[tokio::test]
async fn failed_refresh_before_call_signs_out() {
    let auth = FakeAuth { refresh_fails: true, ..FakeAuth::default() };
    let state = RefCell::new(SessionState::default());
    publish(&state, AuthEvent::SignedIn(session("old", Some(10))));

    assert_eq!(current_session(&auth, &state, 1_000).await, None);
    assert_eq!(auth.calls(), vec!["refresh"]);
    assert!(!state.borrow().is_authenticated());
}

#[tokio::test]
async fn no_session_means_no_call() {
    let auth = FakeAuth::default();
    let state = RefCell::new(SessionState { session: None, loading: false });

    assert_eq!(current_session(&auth, &state, 1_000).await, None);
    assert!(auth.calls().is_empty());
}
