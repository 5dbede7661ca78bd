//! Cached query layer.
//!
//! - [`QueryKey`] - canonical request identity
//! - [`QueryCache`] - shared store with in-flight de-duplication
//! - [`QueryObserver`] - `{ data, is_loading, error }` for one consumer
//! - [`QueryOptions`] - revalidation behavior per query

mod cache;
mod key;
mod observer;
mod options;

pub use cache::{Clock, Payload, QueryCache, Snapshot};
pub use key::QueryKey;
pub use observer::{Fetcher, Listener, QueryObserver, QueryState, Refresh};
pub use options::QueryOptions;
