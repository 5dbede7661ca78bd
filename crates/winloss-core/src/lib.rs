//! Platform-neutral core of the win/loss analytics dashboard.
//!
//! - [`api`] - HTTP client and endpoint catalogue for the analytics backend
//! - [`query`] - cached query layer with request de-duplication
//! - [`markdown`] - markdown-lite renderer for AI text
//! - [`ask`] - ask-AI conversation state
//! - [`models`] - response shapes
//! - [`error`] - [`ApiError`]
//! - [`config`] - defaults and [`ApiConfig`]

pub mod api;
pub mod ask;
pub mod config;
pub mod error;
pub mod markdown;
pub mod models;
pub mod query;

pub use api::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
