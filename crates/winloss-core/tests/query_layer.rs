//! Behavior of the cached query layer against a scripted backend.
//!
//! The backend parks every request on a oneshot channel so tests decide
//! when, and in which order, responses arrive.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use futures::FutureExt;
use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;

use winloss_core::ApiError;
use winloss_core::query::{QueryCache, QueryKey, QueryObserver, QueryOptions, Refresh};

type Reply = Result<String, ApiError>;

#[derive(Clone, Default)]
struct Backend {
    calls: Rc<RefCell<Vec<QueryKey>>>,
    pending: Rc<RefCell<HashMap<QueryKey, Vec<oneshot::Sender<Reply>>>>>,
}

impl Backend {
    fn fetcher(&self) -> impl Fn(&QueryKey) -> LocalBoxFuture<'static, Reply> + 'static {
        let backend = self.clone();
        move |key: &QueryKey| {
            let backend = backend.clone();
            let key = key.clone();
            async move {
                let (tx, rx) = oneshot::channel();
                backend.calls.borrow_mut().push(key.clone());
                backend.pending.borrow_mut().entry(key).or_default().push(tx);
                rx.await
                    .unwrap_or_else(|_| Err(ApiError::Transport("backend dropped".to_string())))
            }
            .boxed_local()
        }
    }

    fn respond(&self, key: &QueryKey, reply: Reply) {
        let senders = self.pending.borrow_mut().remove(key).unwrap_or_default();
        assert!(!senders.is_empty(), "no pending request for {key}");
        for tx in senders {
            let _ = tx.send(reply.clone());
        }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

struct Harness {
    pool: LocalPool,
    backend: Backend,
    cache: QueryCache,
    now: Rc<Cell<f64>>,
}

impl Harness {
    fn new() -> Self {
        let now = Rc::new(Cell::new(0.0));
        let clock = {
            let now = now.clone();
            Rc::new(move || now.get())
        };
        Self {
            pool: LocalPool::new(),
            backend: Backend::default(),
            cache: QueryCache::with_clock(clock),
            now,
        }
    }

    fn observer(&self, options: QueryOptions) -> QueryObserver<String> {
        QueryObserver::new(self.cache.clone(), options, self.backend.fetcher())
    }

    fn drive(&mut self, refresh: Option<Refresh>) {
        if let Some(refresh) = refresh {
            self.pool.spawner().spawn_local(refresh).unwrap();
        }
        self.pool.run_until_stalled();
    }

    fn respond(&mut self, key: &QueryKey, reply: Reply) {
        self.backend.respond(key, reply);
        self.pool.run_until_stalled();
    }

    fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

fn ok(s: &str) -> Reply {
    Ok(s.to_string())
}

fn server_error() -> ApiError {
    ApiError::Http {
        status: 500,
        status_text: "Internal Server Error".to_string(),
    }
}

fn data(observer: &QueryObserver<String>) -> Option<String> {
    observer.state().data.map(|d| d.as_ref().clone())
}

#[test]
fn test_concurrent_observers_share_one_request() {
    let mut h = Harness::new();
    let key = QueryKey::new("/analytics/overview");
    let first = h.observer(QueryOptions::default());
    let second = h.observer(QueryOptions::default());

    let a = first.set_key(Some(key.clone()));
    let b = second.set_key(Some(key.clone()));
    h.drive(a);
    h.drive(b);
    assert_eq!(h.backend.call_count(), 1);
    assert!(first.state().is_loading);
    assert!(second.state().is_loading);

    h.respond(&key, ok("metrics"));
    assert_eq!(data(&first).as_deref(), Some("metrics"));
    assert_eq!(data(&second).as_deref(), Some("metrics"));
    assert!(!first.state().is_loading);
    assert_eq!(h.cache.in_flight_count(), 0);
}

#[test]
fn test_cache_fetch_deduplicates_by_key() {
    let mut h = Harness::new();
    let key = QueryKey::new("/deals").param("stage", "closedwon");
    let same = QueryKey::new("/deals")
        .opt_param::<&str>("industry", None)
        .param("stage", "closedwon");
    let fetch = h.backend.fetcher();

    let results = Rc::new(RefCell::new(Vec::new()));
    for k in [&key, &same] {
        let request = h.cache.fetch(k, fetch(k));
        let results = results.clone();
        h.pool
            .spawner()
            .spawn_local(async move {
                let value = request.await.unwrap();
                results.borrow_mut().push(value.as_ref().clone());
            })
            .unwrap();
    }
    h.pool.run_until_stalled();
    assert_eq!(h.backend.call_count(), 1);

    h.respond(&key, ok("deals"));
    assert_eq!(*results.borrow(), vec!["deals".to_string(), "deals".to_string()]);
}

#[test]
fn test_late_response_for_previous_key_is_ignored() {
    let mut h = Harness::new();
    let a = QueryKey::new("/transcripts/deal/a");
    let b = QueryKey::new("/transcripts/deal/b");
    let observer = h.observer(QueryOptions::default());

    let fa = observer.set_key(Some(a.clone()));
    h.drive(fa);
    let fb = observer.set_key(Some(b.clone()));
    h.drive(fb);
    assert!(observer.state().is_loading);

    h.respond(&b, ok("deal b"));
    assert_eq!(data(&observer).as_deref(), Some("deal b"));

    h.respond(&a, ok("deal a"));
    assert_eq!(data(&observer).as_deref(), Some("deal b"));
    assert_eq!(observer.key(), Some(b.clone()));

    // The orphaned request still populated its own entry.
    assert_eq!(h.cache.get::<String>(&a).as_deref().map(String::as_str), Some("deal a"));

    let back = observer.set_key(Some(a.clone()));
    assert!(back.is_none(), "fresh entry must be reused");
    assert_eq!(data(&observer).as_deref(), Some("deal a"));
    assert_eq!(h.backend.call_count(), 2);
}

#[test]
fn test_switch_back_attaches_to_in_flight_request() {
    let mut h = Harness::new();
    let a = QueryKey::new("/insights/icp");
    let b = QueryKey::new("/insights/positioning");
    let observer = h.observer(QueryOptions::insight());

    let f = observer.set_key(Some(a.clone()));
    h.drive(f);
    let f = observer.set_key(Some(b.clone()));
    h.drive(f);
    let f = observer.set_key(Some(a.clone()));
    h.drive(f);
    assert_eq!(h.backend.call_count(), 2);

    h.respond(&b, ok("positioning"));
    assert_eq!(data(&observer), None);
    assert!(observer.state().is_loading);

    h.respond(&a, ok("icp"));
    assert_eq!(data(&observer).as_deref(), Some("icp"));
    assert!(!observer.state().is_loading);
}

#[test]
fn test_disabled_key_never_fetches() {
    let mut h = Harness::new();
    let observer = h.observer(QueryOptions::default());
    let f = observer.set_key(None);
    assert!(f.is_none());
    h.drive(f);

    let state = observer.state();
    assert!(state.data.is_none());
    assert!(!state.is_loading);
    assert!(state.error.is_none());
    assert_eq!(h.backend.call_count(), 0);
}

#[test]
fn test_disabling_clears_previous_state() {
    let mut h = Harness::new();
    let key = QueryKey::new("/transcripts/deal/a");
    let observer = h.observer(QueryOptions::default());
    let f = observer.set_key(Some(key.clone()));
    h.drive(f);
    h.respond(&key, ok("a"));

    assert!(observer.set_key(None).is_none());
    assert!(observer.state().data.is_none());
    assert!(!observer.state().is_loading);
}

#[test]
fn test_background_revalidation_keeps_loading_false() {
    let mut h = Harness::new();
    let key = QueryKey::new("/analytics/objections");
    let observer = h.observer(QueryOptions::default());
    let f = observer.set_key(Some(key.clone()));
    h.drive(f);
    h.respond(&key, ok("v1"));

    let f = observer.revalidate();
    h.drive(f);
    let state = observer.state();
    assert!(!state.is_loading);
    assert!(state.is_validating);
    assert_eq!(data(&observer).as_deref(), Some("v1"));

    h.respond(&key, ok("v2"));
    assert_eq!(data(&observer).as_deref(), Some("v2"));
    assert!(!observer.state().is_validating);
}

#[test]
fn test_failure_keeps_previous_payload() {
    let mut h = Harness::new();
    let key = QueryKey::new("/analytics/competitors");
    let observer = h.observer(QueryOptions::default());
    let f = observer.set_key(Some(key.clone()));
    h.drive(f);
    h.respond(&key, ok("competitors"));

    let f = observer.revalidate();
    h.drive(f);
    h.respond(&key, Err(server_error()));

    let state = observer.state();
    assert_eq!(state.data.as_deref().map(String::as_str), Some("competitors"));
    assert_eq!(state.error, Some(server_error()));
    assert!(!state.is_loading);

    // A later success clears the error.
    let f = observer.revalidate();
    h.drive(f);
    h.respond(&key, ok("competitors v2"));
    assert!(observer.state().error.is_none());
}

#[test]
fn test_failure_without_data_resolves_loading() {
    let mut h = Harness::new();
    let key = QueryKey::new("/analytics/icp");
    let observer = h.observer(QueryOptions::default());
    let f = observer.set_key(Some(key.clone()));
    h.drive(f);
    assert!(observer.state().is_loading);

    h.respond(&key, Err(ApiError::Transport("connection refused".to_string())));
    let state = observer.state();
    assert!(state.data.is_none());
    assert!(!state.is_loading);
    assert!(state.error.is_some_and(|e| e.is_transport()));
}

#[test]
fn test_insight_ignores_focus() {
    let mut h = Harness::new();
    let key = QueryKey::new("/insights/icp");
    let observer = h.observer(QueryOptions::insight());
    let f = observer.set_key(Some(key.clone()));
    h.drive(f);
    h.respond(&key, ok("icp narrative"));

    h.advance(60_000.0);
    for _ in 0..3 {
        let f = observer.on_focus();
        assert!(f.is_none());
        h.drive(f);
    }
    assert_eq!(h.backend.call_count(), 1);
    assert_eq!(data(&observer).as_deref(), Some("icp narrative"));
}

#[test]
fn test_default_query_revalidates_on_focus_when_stale() {
    let mut h = Harness::new();
    let key = QueryKey::new("/analytics/overview");
    let observer = h.observer(QueryOptions::default());
    let f = observer.set_key(Some(key.clone()));
    h.drive(f);
    h.respond(&key, ok("v1"));

    // Within the dedupe window focus is a no-op.
    assert!(observer.on_focus().is_none());

    h.advance(5_000.0);
    let f = observer.on_focus();
    assert!(f.is_some());
    h.drive(f);
    assert_eq!(h.backend.call_count(), 2);
    assert!(!observer.state().is_loading);
}

#[test]
fn test_stale_entry_is_refetched_on_key_change() {
    let mut h = Harness::new();
    let a = QueryKey::new("/analytics/breakdown/industry");
    let b = QueryKey::new("/analytics/breakdown/source");
    let observer = h.observer(QueryOptions::default());

    let f = observer.set_key(Some(a.clone()));
    h.drive(f);
    h.respond(&a, ok("industry"));
    let f = observer.set_key(Some(b.clone()));
    h.drive(f);
    h.respond(&b, ok("source"));

    h.advance(10_000.0);
    let f = observer.set_key(Some(a.clone()));
    assert!(f.is_some());
    // Stale data shows immediately while revalidating.
    let state = observer.state();
    assert_eq!(state.data.as_deref().map(String::as_str), Some("industry"));
    assert!(!state.is_loading);
    h.drive(f);
    assert_eq!(h.backend.call_count(), 3);
}

#[test]
fn test_listener_sees_every_transition() {
    let mut h = Harness::new();
    let key = QueryKey::new("/deals/recent").param("limit", "8");
    let observer = h.observer(QueryOptions::default());
    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = seen.clone();
        observer.subscribe(move |state| seen.borrow_mut().push((state.is_loading, state.data.is_some())));
    }

    let f = observer.set_key(Some(key.clone()));
    h.drive(f);
    h.respond(&key, ok("recent"));
    assert_eq!(*seen.borrow(), vec![(true, false), (false, true)]);
}
