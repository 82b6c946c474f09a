//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell provides one `RwSignal<SessionState>` as context. Route
//! guards read it to decide redirects; auth pages and the startup restore
//! write it, always through [`publish`], so every change is persisted.
//!
//! Submit handlers never navigate. They publish an event and the guard
//! installed by `util::auth` reacts to the new state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::Shared;
use super::toast::ToastState;
use crate::net::backend::{AuthBackend, BackendError};
use crate::net::types::{Credentials, Session, SignUpOutcome};
use crate::util::storage;

/// Minimum accepted password length at sign-up.
pub const MIN_PASSWORD_LEN: usize = 8;

pub const SIGN_UP_CONFIRM_MESSAGE: &str = "Signup successful! Please check your email to confirm your account.";
pub const SIGN_UP_SUCCESS_MESSAGE: &str = "Signup successful!";

/// Current session plus whether the initial restore is still running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn user_email(&self) -> Option<&str> {
        self.session.as_ref().and_then(|s| s.user.email.as_deref())
    }

    /// The single transition function for session changes.
    pub fn apply(&mut self, event: AuthEvent) {
        self.session = match event {
            AuthEvent::InitialSession(session) => session,
            AuthEvent::SignedIn(session) | AuthEvent::TokenRefreshed(session) => Some(session),
            AuthEvent::SignedOut => None,
        };
        self.loading = false;
    }
}

/// Session change notifications.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    /// Result of the startup restore; `None` means no stored session.
    InitialSession(Option<Session>),
    SignedIn(Session),
    TokenRefreshed(Session),
    SignedOut,
}

impl AuthEvent {
    /// Session that should be persisted after this event.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::InitialSession(session) => session.as_ref(),
            Self::SignedIn(session) | Self::TokenRefreshed(session) => Some(session),
            Self::SignedOut => None,
        }
    }
}

/// Apply `event` to the shared state and mirror the result to storage.
pub fn publish<S: Shared<SessionState>>(state: &S, event: AuthEvent) {
    storage::save_session(event.session());
    state.update_with(|s| s.apply(event));
}

// =============================================================================
// FORMS
// =============================================================================

/// Input on the sign-in / sign-up forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Email,
    Password,
    ConfirmPassword,
}

/// Inline validation message for one form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    fn new(field: FormField, message: &str) -> Self {
        Self { field, message: message.to_owned() }
    }
}

/// Find the message for `field`, if any.
#[must_use]
pub fn error_for(errors: &[FieldError], field: FormField) -> Option<&str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message.as_str())
}

/// A local part and a dotted domain around a single `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

fn email_error(email: &str) -> Option<FieldError> {
    if email.trim().is_empty() {
        Some(FieldError::new(FormField::Email, "Email is required"))
    } else if is_valid_email(email) {
        None
    } else {
        Some(FieldError::new(FormField::Email, "Please enter a valid email address"))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    /// # Errors
    ///
    /// Returns every failing field when the email is malformed or the
    /// password is empty.
    pub fn validate(&self) -> Result<Credentials, Vec<FieldError>> {
        let mut errors: Vec<FieldError> = email_error(&self.email).into_iter().collect();
        if self.password.is_empty() {
            errors.push(FieldError::new(FormField::Password, "Password is required"));
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Credentials { email: self.email.trim().to_owned(), password: self.password.clone() })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    /// # Errors
    ///
    /// Returns every failing field: malformed email, short password, or a
    /// confirmation that differs from the password.
    pub fn validate(&self) -> Result<Credentials, Vec<FieldError>> {
        let mut errors: Vec<FieldError> = email_error(&self.email).into_iter().collect();
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(FieldError::new(FormField::Password, "Password must be at least 8 characters long"));
        }
        if self.password != self.confirm_password {
            errors.push(FieldError::new(FormField::ConfirmPassword, "Passwords do not match"));
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Credentials { email: self.email.trim().to_owned(), password: self.password.clone() })
    }
}

/// User-facing text for a failed auth call: the backend's own message when
/// it sent one, otherwise `fallback`.
#[must_use]
pub fn auth_failure_message(error: &BackendError, fallback: &str) -> String {
    match error {
        BackendError::Api { message, .. } if !message.trim().is_empty() => message.clone(),
        _ => fallback.to_owned(),
    }
}

// =============================================================================
// FLOWS
// =============================================================================

/// Validate and submit the sign-in form.
///
/// # Errors
///
/// Returns field errors without calling the backend when the form is
/// invalid. Backend failures are reported as a toast and return `Ok`.
pub async fn sign_in<A, S, T>(auth: &A, form: &SignInForm, session: &S, toasts: &T) -> Result<(), Vec<FieldError>>
where
    A: AuthBackend + ?Sized,
    S: Shared<SessionState>,
    T: Shared<ToastState>,
{
    let credentials = form.validate()?;
    match auth.sign_in(&credentials).await {
        Ok(signed_in) => publish(session, AuthEvent::SignedIn(signed_in)),
        Err(e) => {
            leptos::logging::warn!("sign in failed: {e}");
            toasts.update_with(|t| t.error(auth_failure_message(&e, "Failed to sign in")));
        }
    }
    Ok(())
}

/// Validate and submit the sign-up form.
///
/// # Errors
///
/// Returns field errors without calling the backend when the form is
/// invalid. Backend failures are reported as a toast and return `Ok`.
pub async fn sign_up<A, S, T>(auth: &A, form: &SignUpForm, session: &S, toasts: &T) -> Result<(), Vec<FieldError>>
where
    A: AuthBackend + ?Sized,
    S: Shared<SessionState>,
    T: Shared<ToastState>,
{
    let credentials = form.validate()?;
    match auth.sign_up(&credentials).await {
        Ok(SignUpOutcome::SignedIn(signed_in)) => {
            toasts.update_with(|t| t.success(SIGN_UP_SUCCESS_MESSAGE));
            publish(session, AuthEvent::SignedIn(signed_in));
        }
        Ok(SignUpOutcome::ConfirmationSent) => {
            toasts.update_with(|t| t.success(SIGN_UP_CONFIRM_MESSAGE));
        }
        Err(e) => {
            leptos::logging::warn!("sign up failed: {e}");
            toasts.update_with(|t| t.error(auth_failure_message(&e, "Failed to sign up")));
        }
    }
    Ok(())
}

/// End the session. The local session is dropped even if the backend call
/// fails.
pub async fn sign_out<A, S>(auth: &A, session: &S)
where
    A: AuthBackend + ?Sized,
    S: Shared<SessionState>,
{
    let current = session.read_with(|s| s.session.clone()).flatten();
    if let Some(current) = current {
        if let Err(e) = auth.sign_out(&current).await {
            leptos::logging::warn!("sign out failed: {e}");
        }
    }
    publish(session, AuthEvent::SignedOut);
}

/// Refresh an expired session. `None` means the session is still live and
/// nothing changed.
async fn refresh_if_expired<A>(auth: &A, session: &Session, now: i64) -> Option<AuthEvent>
where
    A: AuthBackend + ?Sized,
{
    if !session.is_expired(now) {
        return None;
    }
    let Some(token) = session.refresh_token.as_deref() else {
        return Some(AuthEvent::SignedOut);
    };
    match auth.refresh(token).await {
        Ok(refreshed) => Some(AuthEvent::TokenRefreshed(refreshed)),
        Err(e) => {
            leptos::logging::warn!("session refresh failed: {e}");
            Some(AuthEvent::SignedOut)
        }
    }
}

/// Resolve the stored session at startup, refreshing it when expired.
pub async fn restore_session<A, S>(auth: &A, stored: Option<Session>, now: i64, session: &S)
where
    A: AuthBackend + ?Sized,
    S: Shared<SessionState>,
{
    let event = match stored {
        Some(stored) => refresh_if_expired(auth, &stored, now)
            .await
            .unwrap_or(AuthEvent::InitialSession(Some(stored))),
        None => AuthEvent::InitialSession(None),
    };
    publish(session, event);
}

/// Session to attach to the next backend call. A session that expired
/// since it was restored is refreshed first; a failed refresh signs out.
pub async fn current_session<A, S>(auth: &A, session: &S, now: i64) -> Option<Session>
where
    A: AuthBackend + ?Sized,
    S: Shared<SessionState>,
{
    let current = session.read_with(|s| s.session.clone()).flatten()?;
    match refresh_if_expired(auth, &current, now).await {
        None => Some(current),
        Some(event) => {
            let fresh = event.session().cloned();
            publish(session, event);
            fresh
        }
    }
}
