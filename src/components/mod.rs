//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`sidebar`] - Page navigation
//! - [`pages`] - One view per route
//! - [`common`] - Metric cards, AI insight box, loading and error indicators

pub mod common;
pub mod pages;
pub mod router;
pub mod sidebar;

pub use router::AppRouter;
