//! Public landing page.

use leptos::prelude::*;

use crate::app::Backend;
use crate::state::session::{self, SessionState};
use crate::util::auth::{DASHBOARD_PATH, SIGNIN_PATH, SIGNUP_PATH};

#[component]
pub fn HomePage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let backend = expect_context::<Backend>();

    let on_sign_out = move |_| {
        leptos::task::spawn_local(async move {
            let client = backend.client(session_state);
            session::sign_out(&client, &session_state).await;
        });
    };

    view! {
        <div class="home-page">
            <img class="home-page__logo" src="/logo.png" alt="Medical Supply Inventory"/>
            <h1>"Medical Supply Inventory"</h1>
            <p class="home-page__subtitle">"Track stock, lots, and expiration dates in one place."</p>
            <Show
                when=move || session_state.with(SessionState::is_authenticated)
                fallback=|| {
                    view! {
                        <nav class="home-page__actions">
                            <a class="btn btn--primary" href=SIGNIN_PATH>
                                "Sign In"
                            </a>
                            <a class="btn" href=SIGNUP_PATH>
                                "Sign Up"
                            </a>
                        </nav>
                    }
                }
            >
                <nav class="home-page__actions">
                    <a class="btn btn--primary" href=DASHBOARD_PATH>
                        "Go to Dashboard"
                    </a>
                    <button class="btn" on:click=on_sign_out>
                        "Sign Out"
                    </button>
                </nav>
            </Show>
        </div>
    }
}
