//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::auth::AuthState;
use crate::util::browser::stored_token;

/// Root application component.
///
/// Restores the session from `localStorage` and keeps it in sync when another
/// tab signs in or out.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::from_token(stored_token().as_deref()));
    provide_context(auth);

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::storage, move |ev| {
            if ev.key().as_deref() == Some(crate::state::auth::TOKEN_STORAGE_KEY) {
                auth.set(AuthState::from_token(ev.new_value().as_deref()));
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Title text="Carlot"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
