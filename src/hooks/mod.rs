//! Reactive hooks bridging the core to Leptos signals.
//!
//! - `use_query` - generic cached query bound to a reactive key
//! - endpoint hooks such as [`use_overview`] and [`use_ai_insight`]
//! - [`use_ask`] - ask-AI conversation

mod api;
mod ask;
mod query;

pub use api::{
    use_ai_insight, use_breakdown, use_competitors, use_deal_transcripts, use_deals, use_icp,
    use_objections, use_overview, use_recent_deals, use_signals, use_transcript, use_transcripts,
};
pub use ask::{AskState, use_ask};
pub use query::Query;
