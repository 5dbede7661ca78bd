//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and
//! application-level setup following Leptos conventions.

use leptos::prelude::*;
use winloss_core::query::QueryCache;
use winloss_core::{ApiClient, ApiConfig};

use crate::components::AppRouter;
use crate::models::Route;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and accessed from any child
/// with `use_context::<AppContext>()`. All fields are arena handles, so the
/// context is `Copy`.
///
/// The query cache is `Rc`-based and lives in local storage; it is shared by
/// every query hook so that pages observing the same key share requests and
/// results.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// HTTP client for the analytics API.
    pub api: StoredValue<ApiClient>,
    /// Process-wide query cache.
    pub cache: StoredValue<QueryCache, LocalStorage>,
    /// Current page, derived from the URL hash.
    pub route: RwSignal<Route>,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            api: StoredValue::new(ApiClient::new(config)),
            cache: StoredValue::new_local(QueryCache::new()),
            route: RwSignal::new(Route::current()),
        }
    }

    pub fn client(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn query_cache(&self) -> QueryCache {
        self.cache.get_value()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(ApiConfig::default());
    tracing::info!(base_url = %ctx.client().config().base_url, "starting dashboard");
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fatal>
                    <div class=css::fatalBody>
                        <h1 class=css::fatalTitle>"Something went wrong"</h1>
                        <p class=css::fatalText>
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details class=css::fatalDetails>
                            <summary>"Error details"</summary>
                            <ul>
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            class=css::fatalButton
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
