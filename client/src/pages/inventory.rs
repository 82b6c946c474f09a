//! Dashboard page: the session-gated inventory table and its dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns one `RwSignal<InventoryState>`. It loads every record on
//! mount, renders the filtered subset, and routes dialog actions into the
//! state machine in `state::inventory`. Backend calls run on
//! `spawn_local`; completions that land after unmount hit a disposed signal
//! and are dropped.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::Backend;
use crate::components::filter_bar::FilterBar;
use crate::components::item_detail_dialog::ItemDetailDialog;
use crate::components::item_form_dialog::ItemFormDialog;
use crate::components::item_table::ItemTable;
use crate::net::types::SupplyItem;
use crate::state::inventory::{self, DialogState, InventoryState};
use crate::state::session::{self, SessionState};
use crate::state::toast::ToastState;
use crate::util::auth::{DASHBOARD_PATH, install_session_redirect};

#[component]
pub fn InventoryPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let backend = expect_context::<Backend>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_session_redirect(session_state, DASHBOARD_PATH, use_navigate());

    let inventory = RwSignal::new(InventoryState::default());
    let saving = RwSignal::new(false);

    // Load once the session is known; a guest is redirected instead.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        let ready = session_state.with(|s| !s.loading && s.is_authenticated());
        if !ready || requested.get_untracked() {
            return;
        }
        requested.set(true);
        leptos::task::spawn_local(async move {
            let client = backend.fresh_client(session_state).await;
            inventory::load_items(&client, &inventory, &toasts).await;
        });
    });

    let on_close = Callback::new(move |()| inventory.update(InventoryState::close_dialog));
    let on_edit = Callback::new(move |item: SupplyItem| inventory.update(|s| s.begin_edit(item)));
    let on_save = Callback::new(move |()| {
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        leptos::task::spawn_local(async move {
            let client = backend.fresh_client(session_state).await;
            inventory::save_item(&client, &inventory, &toasts).await;
            saving.try_set(false);
        });
    });

    let on_sign_out = move |_| {
        leptos::task::spawn_local(async move {
            let client = backend.client(session_state);
            session::sign_out(&client, &session_state).await;
        });
    };

    // Draft edits must not rebuild the open dialog.
    let dialog = Memo::new(move |_| inventory.with(|s| s.dialog.clone()));
    let user_email = move || session_state.with(|s| s.user_email().unwrap_or_default().to_owned());

    view! {
        <Show
            when=move || session_state.with(|s| !s.loading && s.is_authenticated())
            fallback=move || {
                view! {
                    <div class="inventory-page">
                        <p>
                            {move || {
                                if session_state.with(|s| s.loading) { "Loading..." } else { "Redirecting..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="inventory-page">
                <header class="inventory-page__header toolbar">
                    <span class="toolbar__title">"Medical Supplies"</span>
                    <span class="toolbar__spacer"></span>
                    <span class="toolbar__self">{user_email}</span>
                    <button class="btn btn--primary" on:click=move |_| inventory.update(InventoryState::begin_create)>
                        "+ New Item"
                    </button>
                    <button class="btn toolbar__logout" on:click=on_sign_out>
                        "Sign Out"
                    </button>
                </header>

                <FilterBar inventory=inventory/>

                <Show
                    when=move || !inventory.with(|s| s.loading && s.items.is_empty())
                    fallback=move || view! { <p class="inventory-page__loading">"Loading medical supplies..."</p> }
                >
                    <ItemTable inventory=inventory/>
                </Show>

                {move || match dialog.get() {
                    DialogState::Closed => ().into_any(),
                    DialogState::Viewing(item) => {
                        view! { <ItemDetailDialog item=item on_close=on_close on_edit=on_edit/> }.into_any()
                    }
                    DialogState::Editing(_) => {
                        view! {
                            <ItemFormDialog
                                inventory=inventory
                                title="Edit Item"
                                busy=saving
                                on_cancel=on_close
                                on_save=on_save
                            />
                        }
                            .into_any()
                    }
                    DialogState::Creating => {
                        view! {
                            <ItemFormDialog
                                inventory=inventory
                                title="New Item"
                                busy=saving
                                on_cancel=on_close
                                on_save=on_save
                            />
                        }
                            .into_any()
                    }
                }}
            </div>
        </Show>
    }
}
