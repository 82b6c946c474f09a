//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::net::api::{SupabaseClient, now_secs};
use crate::net::config::{BackendConfig, META_ANON_KEY, META_URL};
use crate::pages::{
    home::HomePage, inventory::InventoryPage, not_found::NotFoundPage, signin::SignInPage, signup::SignUpPage,
};
use crate::state::session::{SessionState, current_session};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The host provides a `BackendConfig` context; it is rendered into meta
/// tags so the hydrated client reads the same values the server was started
/// with.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let backend = use_context::<BackendConfig>().unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_URL content=backend.url/>
                <meta name=META_ANON_KEY content=backend.anon_key/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Backend settings handed to pages, which build a client per call.
#[derive(Clone, Copy)]
pub struct Backend(StoredValue<BackendConfig>);

impl Backend {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self(StoredValue::new(config))
    }

    /// Client authorized as the current session's user, if any.
    #[must_use]
    pub fn client(self, session: RwSignal<SessionState>) -> SupabaseClient {
        let config = self.0.try_get_value().unwrap_or_default();
        let current = session.try_with_untracked(|s| s.session.clone()).flatten();
        SupabaseClient::new(config).with_session(current.as_ref())
    }

    /// Like [`Backend::client`], but an expired session is refreshed (or
    /// signed out) before it is attached.
    pub async fn fresh_client(self, session: RwSignal<SessionState>) -> SupabaseClient {
        let config = self.0.try_get_value().unwrap_or_default();
        let anon = SupabaseClient::new(config.clone());
        let current = current_session(&anon, &session, now_secs()).await;
        SupabaseClient::new(config).with_session(current.as_ref())
    }
}

/// Root application component.
///
/// Provides session, toast, and backend contexts, restores any stored
/// session, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<BackendConfig>()
        .or_else(BackendConfig::from_document)
        .unwrap_or_default();
    if !config.is_configured() {
        leptos::logging::warn!("backend is not configured; data and auth calls will fail");
    }
    let backend = Backend::new(config);
    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(backend);
    provide_context(session);
    provide_context(toasts);

    // Effects only run in the browser, so the restore never touches SSR.
    Effect::new(move |_| {
        let stored = crate::util::storage::load_session();
        let client = backend.client(session);
        leptos::task::spawn_local(async move {
            let now = now_secs();
            crate::state::session::restore_session(&client, stored, now, &session).await;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/medsupply.css"/>
        <Title text="Medical Supply Inventory"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("signin") view=SignInPage/>
                    <Route path=StaticSegment("signup") view=SignUpPage/>
                    <Route path=StaticSegment("dashboard") view=InventoryPage/>
                </Routes>
            </main>
        </Router>
        <Toaster/>
    }
}
