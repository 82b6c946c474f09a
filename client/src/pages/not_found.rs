//! Fallback for unknown routes.

use leptos::prelude::*;

use crate::util::auth::LANDING_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"Page not found."</p>
            <a class="btn" href=LANDING_PATH>
                "Back to home"
            </a>
        </div>
    }
}
