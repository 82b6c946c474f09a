//! Toast stack rendered in the corner of every page.

use leptos::prelude::*;

use crate::state::toast::{DISMISS_AFTER_MS, Toast, ToastKind, ToastState};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.with(|t| t.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| view! { <ToastCard toast=toast toasts=toasts/> }
            />
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = toast.id;
    let class = match toast.kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    };

    #[cfg(feature = "hydrate")]
    {
        let timer = gloo_timers::callback::Timeout::new(DISMISS_AFTER_MS, move || {
            toasts.try_update(|t| t.dismiss(id));
        });
        timer.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = DISMISS_AFTER_MS;

    view! {
        <div class=class>
            <span class="toast__message">{toast.message}</span>
            <button class="toast__close" title="Dismiss" on:click=move |_| toasts.update(|t| t.dismiss(id))>
                "×"
            </button>
        </div>
    }
}
