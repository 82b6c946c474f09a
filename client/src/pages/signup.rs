//! Sign-up page with client-side checks before the backend is called.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::signin::FieldMessage;
use crate::app::Backend;
use crate::state::session::{self, FieldError, FormField, SessionState, SignUpForm};
use crate::state::toast::ToastState;
use crate::util::auth::{SIGNIN_PATH, SIGNUP_PATH, install_session_redirect};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let backend = expect_context::<Backend>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_session_redirect(session_state, SIGNUP_PATH, use_navigate());

    let form = RwSignal::new(SignUpForm::default());
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
            match session::sign_up(&client, &submitted, &session_state, &toasts).await {
                Ok(()) => {
                    form.try_update(|f| {
                        f.password.clear();
                        f.confirm_password.clear();
                    });
                }
                Err(field_errors) => {
                    errors.try_set(field_errors);
                }
            }
            busy.try_set(false);
        });
    };

    let error_text = move |field| move || errors.with(|e| session::error_for(e, field).map(str::to_owned));

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit novalidate=true>
                <h1>"Create Account"</h1>
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
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                <FieldMessage text=Signal::derive(error_text(FormField::Password))/>
                <label class="auth-card__label">
                    "Confirm Password"
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                    />
                </label>
                <FieldMessage text=Signal::derive(error_text(FormField::ConfirmPassword))/>
                <button class="btn btn--primary auth-card__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                </button>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href=SIGNIN_PATH>"Sign in"</a>
                </p>
            </form>
        </div>
    }
}
