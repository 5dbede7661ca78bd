//! Utility modules for DOM access, formatting and HTML rendering.
//!
//! Provides:
//! - [`dom`] - hash and scrolling helpers
//! - [`format`] - money, rate and duration formatting
//! - [`insight_html`], [`chat_html`] - markdown-lite with sanitization

pub mod dom;
pub mod format;
mod html;

pub use html::{chat_html, insight_html};
