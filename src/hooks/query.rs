//! Reactive bridge from [`QueryObserver`] to Leptos signals.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_use::use_window_focus;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;
use winloss_core::ApiError;
use winloss_core::query::{QueryKey, QueryObserver, QueryOptions, QueryState, Refresh};

use crate::app::AppContext;

/// Handle to one query, returned by [`use_query`] and the endpoint hooks.
///
/// `Copy`: both fields are arena handles owned by the calling component.
pub struct Query<T: 'static> {
    state: RwSignal<QueryState<T>>,
    observer: StoredValue<QueryObserver<T>, LocalStorage>,
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Query<T> {}

impl<T: Send + Sync + 'static> Query<T> {
    /// Current state. Tracks the signal when called in a reactive scope.
    pub fn state(&self) -> QueryState<T> {
        self.state.get()
    }

    pub fn data(&self) -> Option<Arc<T>> {
        self.state.with(|s| s.data.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading)
    }

    pub fn is_validating(&self) -> bool {
        self.state.with(|s| s.is_validating)
    }

    pub fn error(&self) -> Option<ApiError> {
        self.state.with(|s| s.error.clone())
    }

    /// Refetch the current key regardless of freshness.
    pub fn revalidate(&self) {
        drive(self.observer.with_value(|o| o.revalidate()));
    }
}

fn drive(refresh: Option<Refresh>) {
    if let Some(refresh) = refresh {
        spawn_local(refresh);
    }
}

/// Observe the query identified by `key`, fetching `T` from the key's URL.
///
/// `key` is re-evaluated reactively; returning `None` disables fetching and
/// resets the state. Queries with `revalidate_on_focus` refetch stale data
/// when the window regains focus.
pub fn use_query<T>(
    key: impl Fn() -> Option<QueryKey> + 'static,
    options: QueryOptions,
) -> Query<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let client = ctx.client();

    let observer = QueryObserver::new(ctx.query_cache(), options, move |key: &QueryKey| {
        let client = client.clone();
        let key = key.clone();
        async move { client.get::<T>(&key).await }
    });

    let state = RwSignal::new(QueryState::default());
    observer.subscribe(move |next| {
        let _ = state.try_set(next.clone());
    });
    let observer = StoredValue::new_local(observer);

    Effect::new(move |_| {
        let key = key();
        drive(observer.with_value(|o| o.set_key(key)));
    });

    if options.revalidate_on_focus {
        let focused = use_window_focus();
        Effect::new(move |was_focused: Option<bool>| {
            let focused = focused.get();
            if was_focused == Some(false) && focused {
                drive(observer.with_value(|o| o.on_focus()));
            }
            focused
        });
    }

    Query { state, observer }
}
