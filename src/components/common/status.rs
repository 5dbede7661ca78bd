//! Loading and error indicators shared by every query-backed view.

use leptos::prelude::*;
use winloss_core::ApiError;

use crate::hooks::Query;

stylance::import_crate_style!(css, "src/components/common/common.module.css");

#[component]
pub fn Loading(#[prop(default = "Loading...")] label: &'static str) -> impl IntoView {
    view! {
        <div class=css::loading role="status">
            <span class=css::spinner></span>
            <span>{label}</span>
        </div>
    }
}

#[component]
pub fn ErrorBanner(error: ApiError) -> impl IntoView {
    let detail = match error.status() {
        Some(status) => format!("The server answered {status}."),
        None if error.is_transport() => "The analytics service could not be reached.".to_string(),
        None => "The response could not be read.".to_string(),
    };
    view! {
        <div class=css::error role="alert">
            <strong>"Failed to load data. "</strong>
            <span>{detail}</span>
            <span class=css::errorDetail>{error.to_string()}</span>
        </div>
    }
}

/// Render a query's error, loading indicator and data, in that order.
///
/// Stale data stays visible next to a refresh error.
pub fn query_view<T, V>(
    query: Query<T>,
    render: impl Fn(&T) -> V + Send + Sync + 'static,
) -> impl IntoView
where
    T: Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || {
        let state = query.state();
        let error = state.error.map(|error| view! { <ErrorBanner error=error /> });
        let loading = state.is_loading.then(|| view! { <Loading /> });
        let data = state.data.map(|data| render(&data));
        view! { {error} {loading} {data} }
    }
}
