//! Sign-in page: email + password against the auth backend.
//!
//! Success publishes `SignedIn`; the session guard then moves the user to
//! the dashboard.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::Backend;
use crate::state::session::{self, FieldError, FormField, SessionState, SignInForm};
use crate::state::toast::ToastState;
use crate::util::auth::{SIGNIN_PATH, SIGNUP_PATH, install_session_redirect};

#[component]
pub fn SignInPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let backend = expect_context::<Backend>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_session_redirect(session_state, SIGNIN_PATH, use_navigate());

    let form = RwSignal::new(SignInForm::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        errors.set(Vec::new());
        let submitted = form.get_untracked();
        leptos::task::spawn_local(async move {
            let client = backend.client(session_state);
            if let Err(field_errors) = session::sign_in(&client, &submitted, &session_state, &toasts).await {
                errors.try_set(field_errors);
            }
            busy.try_set(false);
        });
    };

    let error_text = move |field| move || errors.with(|e| session::error_for(e, field).map(str::to_owned));

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit novalidate=true>
                <h1>"Sign In"</h1>
                <label class="auth-card__label">
                    "Email"
                    <input
                        class="auth-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <FieldMessage text=Signal::derive(error_text(FormField::Email))/>
                <label class="auth-card__label">
                    "Password"
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                <FieldMessage text=Signal::derive(error_text(FormField::Password))/>
                <button class="btn btn--primary auth-card__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                </button>
                <p class="auth-card__switch">
                    "No account? "
                    <a href=SIGNUP_PATH>"Sign up"</a>
                </p>
            </form>
        </div>
    }
}

/// Inline error under an auth form input.
#[component]
pub fn FieldMessage(text: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || text.with(Option::is_some)>
            <p class="auth-card__error">{move || text.get().unwrap_or_default()}</p>
        </Show>
    }
}
