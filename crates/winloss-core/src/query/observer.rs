//! Per-consumer view of one query at a time.
//!
//! A [`QueryObserver`] tracks the key a consumer currently cares about and
//! exposes `{ data, is_loading, error }` for it. Requests go through the
//! shared [`QueryCache`], so observers of the same key share one network
//! call. Results for a key the observer has since moved away from are
//! dropped when they arrive; there is no abort.
//!
//! The observer never spawns. Operations that need a request return the
//! future that performs it, and the caller drives it on its executor.

use std::cell::RefCell;
use std::future::Future;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use super::{QueryCache, QueryKey, QueryOptions};
use crate::error::ApiError;

/// Builds the request for a key.
pub type Fetcher<T> = Rc<dyn Fn(&QueryKey) -> LocalBoxFuture<'static, Result<T, ApiError>>>;

/// Called with the new state after every change.
pub type Listener<T> = Rc<dyn Fn(&QueryState<T>)>;

/// Future that performs a fetch and applies its result.
pub type Refresh = LocalBoxFuture<'static, ()>;

/// State exposed to the presentation layer.
#[derive(Debug)]
pub struct QueryState<T> {
    /// Last successful payload for the current key.
    pub data: Option<Arc<T>>,
    /// No data yet for the current key and a request is outstanding.
    pub is_loading: bool,
    /// A request for the current key is outstanding, with or without data.
    pub is_validating: bool,
    /// Error from the most recent request for the current key.
    pub error: Option<ApiError>,
}

impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            is_loading: self.is_loading,
            is_validating: self.is_validating,
            error: self.error.clone(),
        }
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            is_validating: false,
            error: None,
        }
    }
}

struct ObserverInner<T> {
    cache: QueryCache,
    fetcher: Fetcher<T>,
    options: QueryOptions,
    key: RefCell<Option<QueryKey>>,
    state: RefCell<QueryState<T>>,
    listener: RefCell<Option<Listener<T>>>,
}

/// Observes one [`QueryKey`] at a time through a shared [`QueryCache`].
pub struct QueryObserver<T> {
    inner: Rc<ObserverInner<T>>,
}

impl<T> Clone for QueryObserver<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Send + Sync + 'static> QueryObserver<T> {
    /// Create an observer with no key. It stays idle until [`set_key`](Self::set_key).
    pub fn new<F, Fut>(cache: QueryCache, options: QueryOptions, fetcher: F) -> Self
    where
        F: Fn(&QueryKey) -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let fetcher: Fetcher<T> = Rc::new(move |key| fetcher(key).boxed_local());
        Self {
            inner: Rc::new(ObserverInner {
                cache,
                fetcher,
                options,
                key: RefCell::new(None),
                state: RefCell::new(QueryState::default()),
                listener: RefCell::new(None),
            }),
        }
    }

    /// Register the change listener, replacing any previous one.
    pub fn subscribe(&self, listener: impl Fn(&QueryState<T>) + 'static) {
        *self.inner.listener.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn key(&self) -> Option<QueryKey> {
        self.inner.key.borrow().clone()
    }

    pub fn options(&self) -> QueryOptions {
        self.inner.options
    }

    pub fn state(&self) -> QueryState<T> {
        self.inner.state.borrow().clone()
    }

    /// Switch to a new key, or to `None` to disable fetching.
    ///
    /// The state immediately reflects what the cache holds for the new key.
    /// Returns the request to drive when the key has no fresh entry.
    pub fn set_key(&self, key: Option<QueryKey>) -> Option<Refresh> {
        if *self.inner.key.borrow() == key {
            return None;
        }
        *self.inner.key.borrow_mut() = key.clone();

        let Some(key) = key else {
            self.replace_state(QueryState::default());
            return None;
        };

        let cache = &self.inner.cache;
        let fresh = cache.is_fresh(&key, self.inner.options.dedupe_interval_ms);
        if fresh && !cache.is_in_flight(&key) {
            tracing::debug!(key = %key, "serving fresh cache entry");
            let snap = cache.snapshot::<T>(&key);
            self.replace_state(QueryState {
                data: snap.data,
                error: snap.error,
                ..QueryState::default()
            });
            return None;
        }

        Some(self.run(key))
    }

    /// Fetch the current key regardless of freshness.
    pub fn revalidate(&self) -> Option<Refresh> {
        let key = self.key()?;
        Some(self.run(key))
    }

    /// React to the application regaining focus.
    pub fn on_focus(&self) -> Option<Refresh> {
        if !self.inner.options.revalidate_on_focus {
            return None;
        }
        let key = self.key()?;
        if self
            .inner
            .cache
            .is_fresh(&key, self.inner.options.dedupe_interval_ms)
        {
            return None;
        }
        Some(self.run(key))
    }

    fn run(&self, key: QueryKey) -> Refresh {
        let snap = self.inner.cache.snapshot::<T>(&key);
        self.replace_state(QueryState {
            is_loading: snap.data.is_none(),
            is_validating: true,
            data: snap.data,
            error: snap.error,
        });

        let request = self.inner.cache.fetch(&key, (self.inner.fetcher)(&key));
        let observer: Weak<ObserverInner<T>> = Rc::downgrade(&self.inner);

        async move {
            let result = request.await;
            if let Some(inner) = observer.upgrade() {
                QueryObserver { inner }.apply(&key, result);
            }
        }
        .boxed_local()
    }

    fn apply(&self, key: &QueryKey, result: Result<Arc<T>, ApiError>) {
        if self.inner.key.borrow().as_ref() != Some(key) {
            tracing::debug!(key = %key, "discarding result for a key no longer observed");
            return;
        }
        let mut next = self.state();
        match result {
            Ok(data) => {
                next.data = Some(data);
                next.error = None;
            }
            Err(err) => next.error = Some(err),
        }
        next.is_loading = false;
        next.is_validating = false;
        self.replace_state(next);
    }

    fn replace_state(&self, state: QueryState<T>) {
        *self.inner.state.borrow_mut() = state.clone();
        let listener = self.inner.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(&state);
        }
    }
}
