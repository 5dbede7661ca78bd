//! Sales call transcripts linked to deals.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    pub display_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSummary {
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub action_items: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub topics_discussed: Vec<String>,
}

/// One spoken line, timed in seconds from the start of the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub speaker_name: String,
    pub text: String,
    pub start_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub id: String,
    pub title: String,
    pub date: String,
    /// Call length in seconds.
    pub duration: f64,
    #[serde(default)]
    pub meeting_attendees: Vec<Attendee>,
    #[serde(default)]
    pub summary: TranscriptSummary,
    #[serde(default)]
    pub sentences: Vec<Sentence>,
    #[serde(default)]
    pub transcript_url: Option<String>,
}

/// `GET /transcripts/deal/{dealId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealTranscripts {
    pub deal_id: String,
    pub deal_name: String,
    pub transcript_count: u32,
    #[serde(default)]
    pub transcripts: Vec<Transcript>,
}

/// Search result row without sentences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptListItem {
    pub id: String,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// `GET /transcripts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptPage {
    pub total: u32,
    pub count: u32,
    #[serde(default)]
    pub transcripts: Vec<TranscriptListItem>,
}

/// Filters accepted by `GET /transcripts`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptFilter {
    pub participant_email: Option<String>,
    pub contact_id: Option<String>,
    pub limit: Option<u32>,
}
