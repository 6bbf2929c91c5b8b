//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, question::QuestionPage};
use crate::state::auth::AuthState;
use crate::state::colors::ColorTableState;
use crate::state::gallery::GalleryState;

/// Root application component.
///
/// Provides the shared state contexts, restores the session user from the
/// persisted token, starts the one-shot color-table fetch, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let colors = RwSignal::new(ColorTableState::default());
    let gallery = RwSignal::new(GalleryState::default());

    provide_context(auth);
    provide_context(colors);
    provide_context(gallery);

    #[cfg(feature = "csr")]
    {
        use crate::state::auth::SESSION_TOKEN_KEY;
        use crate::state::colors::ColorTable;

        let stored = crate::util::storage::load_string(SESSION_TOKEN_KEY);
        auth.set(AuthState::from_token(stored.as_deref()));

        leptos::task::spawn_local(async move {
            let table = match crate::net::github::fetch_language_colors().await {
                Ok(entries) => {
                    ColorTable::from_entries(entries.into_iter().map(|(name, entry)| (name, entry.color)))
                }
                Err(e) => {
                    // Widgets still render, every language on the fallback color.
                    log::error!("language color table fetch failed: {e}");
                    ColorTable::new()
                }
            };
            colors.set(ColorTableState {
                table,
                loaded: true,
            });
        });
    }

    view! {
        <Title text="Portfolio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("question") view=QuestionPage/>
            </Routes>
        </Router>
    }
}
