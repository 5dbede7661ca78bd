//! Shared response cache with in-flight request de-duplication.
//!
//! One [`QueryCache`] is constructed per application start and handed to
//! every consumer; clones share the same store. All access happens on the
//! single UI thread, so the store lives behind `Rc<RefCell<..>>`.
//!
//! Payloads are stored type-erased as `Arc<dyn Any>` and treated as
//! immutable snapshots: consumers get `Arc<T>` handles and never mutate
//! them in place.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};

use super::QueryKey;
use crate::error::ApiError;

/// Type-erased cached payload.
pub type Payload = Arc<dyn Any + Send + Sync>;

/// Millisecond clock used to stamp entries.
pub type Clock = Rc<dyn Fn() -> f64>;

type SharedFetch = Shared<LocalBoxFuture<'static, Result<Payload, ApiError>>>;

/// Last known state of one key.
#[derive(Clone, Default)]
struct CacheEntry {
    data: Option<Payload>,
    error: Option<ApiError>,
    updated_at: Option<f64>,
}

struct CacheInner {
    entries: HashMap<QueryKey, CacheEntry>,
    in_flight: HashMap<QueryKey, SharedFetch>,
    clock: Clock,
}

/// Typed view of a cache entry.
#[derive(Debug)]
pub struct Snapshot<T> {
    pub data: Option<Arc<T>>,
    pub error: Option<ApiError>,
    pub in_flight: bool,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            in_flight: false,
        }
    }
}

/// Process-wide store of query results keyed by [`QueryKey`].
#[derive(Clone)]
pub struct QueryCache {
    inner: Rc<RefCell<CacheInner>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::with_clock(Rc::new(now_ms))
    }

    /// Create a cache that stamps entries with a custom clock.
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            inner: Rc::new(RefCell::new(CacheInner {
                entries: HashMap::new(),
                in_flight: HashMap::new(),
                clock,
            })),
        }
    }

    /// Cached payload for `key`, if one exists and has type `T`.
    pub fn get<T: Send + Sync + 'static>(&self, key: &QueryKey) -> Option<Arc<T>> {
        let data = self.inner.borrow().entries.get(key)?.data.clone()?;
        data.downcast::<T>().ok()
    }

    /// Last recorded error for `key`.
    pub fn error(&self, key: &QueryKey) -> Option<ApiError> {
        self.inner.borrow().entries.get(key)?.error.clone()
    }

    /// Data, error and in-flight status for `key` in one borrow.
    pub fn snapshot<T: Send + Sync + 'static>(&self, key: &QueryKey) -> Snapshot<T> {
        let inner = self.inner.borrow();
        let in_flight = inner.in_flight.contains_key(key);
        match inner.entries.get(key) {
            Some(entry) => Snapshot {
                data: entry.data.clone().and_then(|d| d.downcast::<T>().ok()),
                error: entry.error.clone(),
                in_flight,
            },
            None => Snapshot {
                in_flight,
                ..Snapshot::default()
            },
        }
    }

    /// Seed or overwrite the payload for `key`, clearing any error.
    pub fn set<T: Send + Sync + 'static>(&self, key: &QueryKey, value: T) {
        let mut inner = self.inner.borrow_mut();
        let now = (inner.clock)();
        inner.entries.insert(
            key.clone(),
            CacheEntry {
                data: Some(Arc::new(value)),
                error: None,
                updated_at: Some(now),
            },
        );
    }

    /// Drop the entry for `key`. An outstanding request is left running and
    /// will repopulate the entry when it completes.
    pub fn invalidate(&self, key: &QueryKey) {
        self.inner.borrow_mut().entries.remove(key);
    }

    /// Drop every entry.
    pub fn invalidate_all(&self) {
        self.inner.borrow_mut().entries.clear();
    }

    /// Whether `key` completed a fetch within the last `interval_ms`.
    pub fn is_fresh(&self, key: &QueryKey, interval_ms: f64) -> bool {
        let inner = self.inner.borrow();
        let now = (inner.clock)();
        inner
            .entries
            .get(key)
            .and_then(|e| e.updated_at)
            .is_some_and(|at| now - at < interval_ms)
    }

    pub fn is_in_flight(&self, key: &QueryKey) -> bool {
        self.inner.borrow().in_flight.contains_key(key)
    }

    pub fn in_flight_count(&self) -> usize {
        self.inner.borrow().in_flight.len()
    }

    /// Fetch `key`, attaching to an outstanding request when there is one.
    ///
    /// `request` is only polled when no request for `key` is in flight;
    /// otherwise it is dropped without ever running. The entry is updated
    /// once when the underlying request completes, whether or not any caller
    /// is still awaiting it. Success replaces the payload and clears the
    /// error. Failure records the error and keeps the last good payload.
    pub fn fetch<T, Fut>(
        &self,
        key: &QueryKey,
        request: Fut,
    ) -> impl Future<Output = Result<Arc<T>, ApiError>> + use<T, Fut>
    where
        T: Send + Sync + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let existing = self.inner.borrow().in_flight.get(key).cloned();
        let shared = match existing {
            Some(shared) => {
                tracing::debug!(key = %key, "attaching to in-flight request");
                shared
            }
            None => {
                tracing::debug!(key = %key, "starting request");
                let shared = self.start(key.clone(), request);
                self.inner
                    .borrow_mut()
                    .in_flight
                    .insert(key.clone(), shared.clone());
                shared
            }
        };

        let key = key.clone();
        async move {
            let payload = shared.await?;
            payload
                .downcast::<T>()
                .map_err(|_| ApiError::TypeMismatch(key.to_string()))
        }
    }

    fn start<T, Fut>(&self, key: QueryKey, request: Fut) -> SharedFetch
    where
        T: Send + Sync + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let store: Weak<RefCell<CacheInner>> = Rc::downgrade(&self.inner);
        async move {
            let result = request.await.map(|value| Arc::new(value) as Payload);
            if let Some(inner) = store.upgrade() {
                complete(&mut inner.borrow_mut(), &key, &result);
            }
            result
        }
        .boxed_local()
        .shared()
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

fn complete(inner: &mut CacheInner, key: &QueryKey, result: &Result<Payload, ApiError>) {
    inner.in_flight.remove(key);
    let now = (inner.clock)();
    let entry = inner.entries.entry(key.clone()).or_default();
    entry.updated_at = Some(now);
    match result {
        Ok(payload) => {
            entry.data = Some(payload.clone());
            entry.error = None;
        }
        Err(err) => {
            tracing::warn!(key = %key, error = %err, "request failed");
            entry.error = Some(err.clone());
        }
    }
}

/// Wall-clock milliseconds.
fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn key(path: &str) -> QueryKey {
        QueryKey::new(path)
    }

    #[test]
    fn test_set_and_get() {
        let cache = QueryCache::new();
        cache.set(&key("/a"), vec![1u32, 2, 3]);
        assert_eq!(cache.get::<Vec<u32>>(&key("/a")).as_deref(), Some(&vec![1, 2, 3]));
        assert!(cache.get::<String>(&key("/a")).is_none());
        assert!(cache.get::<Vec<u32>>(&key("/b")).is_none());
    }

    #[test]
    fn test_invalidate() {
        let cache = QueryCache::new();
        cache.set(&key("/a"), 1u8);
        cache.invalidate(&key("/a"));
        assert!(cache.get::<u8>(&key("/a")).is_none());
        assert!(!cache.is_fresh(&key("/a"), 10_000.0));
    }

    #[test]
    fn test_freshness_follows_clock() {
        let now = Rc::new(Cell::new(1_000.0));
        let clock = {
            let now = now.clone();
            Rc::new(move || now.get())
        };
        let cache = QueryCache::with_clock(clock);
        cache.set(&key("/a"), 1u8);
        assert!(cache.is_fresh(&key("/a"), 2_000.0));
        now.set(3_500.0);
        assert!(!cache.is_fresh(&key("/a"), 2_000.0));
    }

    #[tokio::test]
    async fn test_fetch_populates_entry() {
        let cache = QueryCache::new();
        let value = cache
            .fetch(&key("/a"), async { Ok::<_, ApiError>("hello".to_string()) })
            .await
            .unwrap();
        assert_eq!(value.as_str(), "hello");
        assert_eq!(cache.get::<String>(&key("/a")).as_deref().map(String::as_str), Some("hello"));
        assert_eq!(cache.in_flight_count(), 0);
    }

    #[tokio::test]
    async fn test_failure_keeps_last_good_payload() {
        let cache = QueryCache::new();
        cache.set(&key("/a"), 7u32);
        let err = cache
            .fetch(&key("/a"), async {
                Err::<u32, _>(ApiError::Http {
                    status: 500,
                    status_text: "Internal Server Error".to_string(),
                })
            })
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));

        let snap = cache.snapshot::<u32>(&key("/a"));
        assert_eq!(snap.data.as_deref(), Some(&7));
        assert_eq!(snap.error, Some(err));
    }

    #[tokio::test]
    async fn test_type_mismatch_is_reported() {
        let cache = QueryCache::new();
        let first = cache.fetch(&key("/a"), async { Ok::<_, ApiError>(1u32) });
        let second = cache.fetch(&key("/a"), async { Ok::<_, ApiError>("x".to_string()) });
        let (first, second) = futures::join!(first, second);
        assert_eq!(*first.unwrap(), 1);
        assert!(matches!(second, Err(ApiError::TypeMismatch(_))));
    }
}
