//! Route paths and the session redirect guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page installs the same guard so access rules live in one place.
//! Redirects are a function of (path, session state) only; submit handlers
//! publish session events and let the guard move the user.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

pub const LANDING_PATH: &str = "/";
pub const SIGNIN_PATH: &str = "/signin";
pub const SIGNUP_PATH: &str = "/signup";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Anyone.
    Public,
    /// Only visitors without a session.
    GuestOnly,
    /// Only signed-in users.
    SignedIn,
}

impl Access {
    #[must_use]
    pub fn for_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        if path == SIGNIN_PATH || path == SIGNUP_PATH {
            Self::GuestOnly
        } else if path == DASHBOARD_PATH || path.starts_with("/dashboard/") {
            Self::SignedIn
        } else {
            Self::Public
        }
    }
}

/// Where to send the user viewing `path`, or `None` to stay.
///
/// Nothing redirects until the startup session restore has finished.
#[must_use]
pub fn redirect_for(path: &str, state: &SessionState) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    match (Access::for_path(path), state.is_authenticated()) {
        (Access::SignedIn, false) => Some(LANDING_PATH),
        (Access::GuestOnly, true) => Some(DASHBOARD_PATH),
        _ => None,
    }
}

/// Re-evaluate [`redirect_for`] for `path` whenever the session changes.
pub fn install_session_redirect<F>(session: RwSignal<SessionState>, path: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let target = session.with(|state| redirect_for(path, state));
        if let Some(target) = target {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
