//! Response shapes of the analytics API.
//!
//! - [`Deal`], [`Company`], [`Contact`] - CRM records
//! - [`OverviewMetrics`], [`BreakdownItem`], [`CompetitorMetrics`],
//!   [`ObjectionTheme`], [`IcpProfile`], [`StrategicSignals`] - aggregates
//! - [`AiInsight`], [`AskResponse`], [`ChatMessage`] - AI text
//! - [`Transcript`], [`DealTranscripts`], [`TranscriptPage`] - call transcripts

mod analytics;
mod deal;
mod insight;
mod transcript;

pub use analytics::{
    BreakdownItem, CompetitorMetrics, ConversationTheme, IcpProfile, ObjectionTheme,
    OverviewMetrics, StrategicSignal, StrategicSignals,
};
pub use deal::{Company, Contact, Deal, DealFilter, DealStage, ReasonCount, top_loss_reasons};
pub use insight::{AiInsight, AskRequest, AskResponse, ChatMessage, ChatRole};
pub use transcript::{
    Attendee, DealTranscripts, Sentence, Transcript, TranscriptFilter, TranscriptListItem,
    TranscriptPage, TranscriptSummary,
};
