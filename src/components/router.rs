//! Application router component.
//!
//! Handles URL-based routing with hash history. Uses native `hashchange`
//! events instead of leptos_router.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the route signal is derived from `#/path`
//! - **Sidebar never re-renders on navigation**: only the page area swaps
//! - **Unknown hashes** are rewritten to `#/` without a history entry

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::pages::{
    AskPage, CompetitorsPage, IcpPage, ObjectionsPage, OverviewPage, TranscriptsPage, WinLossPage,
};
use crate::components::sidebar::Sidebar;
use crate::models::Route;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

/// Main application router.
///
/// Sets up hash-based routing with the following structure:
/// - `#/` → Overview
/// - `#/win-loss`, `#/competitors`, `#/objections`, `#/icp`,
///   `#/transcripts`, `#/ask` → the matching page
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let route = ctx.route;

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(sync_route());
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let initial = sync_route();
    if route.get_untracked() != initial {
        route.set(initial);
    }

    Effect::new(move |_| {
        tracing::debug!(route = ?route.get(), "navigated");
    });

    view! {
        <div class=css::layout>
            <Sidebar />
            <main class=css::main>
                {move || match route.get() {
                    Route::Overview => view! { <OverviewPage /> }.into_any(),
                    Route::WinLoss => view! { <WinLossPage /> }.into_any(),
                    Route::Competitors => view! { <CompetitorsPage /> }.into_any(),
                    Route::Objections => view! { <ObjectionsPage /> }.into_any(),
                    Route::Icp => view! { <IcpPage /> }.into_any(),
                    Route::Transcripts => view! { <TranscriptsPage /> }.into_any(),
                    Route::Ask => view! { <AskPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Route for the current hash, normalizing unknown hashes to the overview.
fn sync_route() -> Route {
    let hash = dom::get_hash();
    match Route::from_hash(&hash) {
        Some(route) => route,
        None => {
            tracing::debug!(hash = %hash, "unknown route");
            let route = Route::Overview;
            dom::replace_hash(&route.to_hash());
            route
        }
    }
}
