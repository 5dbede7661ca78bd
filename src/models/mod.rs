//! View-side models.
//!
//! API response shapes live in [`winloss_core::models`]; this module holds
//! what only the browser application needs:
//! - [`Route`] - hash-based page navigation
//! - [`Trend`], [`ThreatLevel`] - display classifications

mod display;
mod route;

pub use display::{ThreatLevel, Trend};
pub use route::Route;
