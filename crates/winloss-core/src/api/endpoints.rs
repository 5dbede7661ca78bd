//! Endpoint catalogue of the analytics API.
//!
//! Each endpoint has a key builder (used by the query layer for identity)
//! and a typed method on [`ApiClient`].

use std::fmt;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{
    AiInsight, AskRequest, AskResponse, BreakdownItem, CompetitorMetrics, Deal, DealFilter,
    DealTranscripts, IcpProfile, ObjectionTheme, OverviewMetrics, StrategicSignals, Transcript,
    TranscriptFilter, TranscriptPage,
};
use crate::query::QueryKey;

/// Dimension for `GET /analytics/breakdown/{dimension}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Industry,
    DealSize,
    Source,
    CompanySize,
    BuyerTitle,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Self::Industry,
        Self::DealSize,
        Self::Source,
        Self::CompanySize,
        Self::BuyerTitle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Industry => "industry",
            Self::DealSize => "deal_size",
            Self::Source => "source",
            Self::CompanySize => "company_size",
            Self::BuyerTitle => "buyer_title",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Industry => "Industry",
            Self::DealSize => "Deal Size",
            Self::Source => "Lead Source",
            Self::CompanySize => "Company Size",
            Self::BuyerTitle => "Buyer Title",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named narrative insight for `GET /insights/{type}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InsightKind {
    WinLossSummary,
    Icp,
    Positioning,
    Competitors,
    SalesScripts,
    /// Any other prompt type the backend knows about.
    Custom(String),
}

impl InsightKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::WinLossSummary => "win-loss-summary",
            Self::Icp => "icp",
            Self::Positioning => "positioning",
            Self::Competitors => "competitors",
            Self::SalesScripts => "sales-scripts",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Key builders
// =============================================================================

fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

pub fn overview() -> QueryKey {
    QueryKey::new("/analytics/overview")
}

pub fn breakdown(dimension: Dimension) -> QueryKey {
    QueryKey::new(format!("/analytics/breakdown/{dimension}"))
}

pub fn competitors() -> QueryKey {
    QueryKey::new("/analytics/competitors")
}

pub fn objections() -> QueryKey {
    QueryKey::new("/analytics/objections")
}

pub fn icp() -> QueryKey {
    QueryKey::new("/analytics/icp")
}

pub fn signals() -> QueryKey {
    QueryKey::new("/analytics/signals")
}

pub fn deals(filter: &DealFilter) -> QueryKey {
    QueryKey::new("/deals")
        .opt_param("stage", filter.stage.map(|s| s.as_str()))
        .opt_param("industry", filter.industry.as_deref())
        .opt_param("source", filter.source.as_deref())
}

pub fn recent_deals(limit: u32) -> QueryKey {
    QueryKey::new("/deals/recent").param("limit", limit.to_string())
}

pub fn insight<K, V>(kind: &InsightKind, params: impl IntoIterator<Item = (K, V)>) -> QueryKey
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    QueryKey::new(format!("/insights/{}", segment(kind.as_str()))).params(params)
}

pub fn ask() -> QueryKey {
    QueryKey::new("/insights/ask")
}

pub fn deal_transcripts(deal_id: &str) -> QueryKey {
    QueryKey::new(format!("/transcripts/deal/{}", segment(deal_id)))
}

pub fn transcript(id: &str) -> QueryKey {
    QueryKey::new(format!("/transcripts/{}", segment(id)))
}

pub fn transcripts(filter: &TranscriptFilter) -> QueryKey {
    QueryKey::new("/transcripts")
        .opt_param("participant_email", filter.participant_email.as_deref())
        .opt_param("contact_id", filter.contact_id.as_deref())
        .opt_param("limit", filter.limit.filter(|l| *l > 0).map(|l| l.to_string()))
}

// =============================================================================
// Typed requests
// =============================================================================

impl ApiClient {
    pub async fn overview(&self) -> Result<OverviewMetrics, ApiError> {
        self.get(&overview()).await
    }

    pub async fn breakdown(&self, dimension: Dimension) -> Result<Vec<BreakdownItem>, ApiError> {
        self.get(&breakdown(dimension)).await
    }

    pub async fn competitors(&self) -> Result<Vec<CompetitorMetrics>, ApiError> {
        self.get(&competitors()).await
    }

    pub async fn objections(&self) -> Result<Vec<ObjectionTheme>, ApiError> {
        self.get(&objections()).await
    }

    pub async fn icp(&self) -> Result<IcpProfile, ApiError> {
        self.get(&icp()).await
    }

    pub async fn signals(&self) -> Result<StrategicSignals, ApiError> {
        self.get(&signals()).await
    }

    pub async fn deals(&self, filter: &DealFilter) -> Result<Vec<Deal>, ApiError> {
        self.get(&deals(filter)).await
    }

    pub async fn recent_deals(&self, limit: u32) -> Result<Vec<Deal>, ApiError> {
        self.get(&recent_deals(limit)).await
    }

    pub async fn insight(&self, kind: &InsightKind) -> Result<AiInsight, ApiError> {
        self.get(&insight::<&str, &str>(kind, [])).await
    }

    /// Submit a free-form question. Never cached.
    pub async fn ask(&self, question: &str) -> Result<AskResponse, ApiError> {
        let body = AskRequest {
            question: question.to_string(),
        };
        self.post(&ask(), &body).await
    }

    pub async fn deal_transcripts(&self, deal_id: &str) -> Result<DealTranscripts, ApiError> {
        self.get(&deal_transcripts(deal_id)).await
    }

    pub async fn transcript(&self, id: &str) -> Result<Transcript, ApiError> {
        self.get(&transcript(id)).await
    }

    pub async fn transcripts(&self, filter: &TranscriptFilter) -> Result<TranscriptPage, ApiError> {
        self.get(&transcripts(filter)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DealStage;

    #[test]
    fn test_deal_filter_keys() {
        let won = deals(&DealFilter {
            stage: Some(DealStage::ClosedWon),
            ..Default::default()
        });
        let won_no_industry = deals(&DealFilter {
            stage: Some(DealStage::ClosedWon),
            industry: None,
            source: Some(String::new()),
        });
        let lost = deals(&DealFilter {
            stage: Some(DealStage::ClosedLost),
            ..Default::default()
        });
        assert_eq!(won, won_no_industry);
        assert_ne!(won, lost);
        assert_eq!(won.to_string(), "/deals?stage=closedwon");
        assert_eq!(deals(&DealFilter::default()).to_string(), "/deals");
    }

    #[test]
    fn test_path_keys() {
        assert_eq!(
            breakdown(Dimension::BuyerTitle).to_string(),
            "/analytics/breakdown/buyer_title"
        );
        assert_eq!(recent_deals(8).to_string(), "/deals/recent?limit=8");
        assert_eq!(deal_transcripts("d 1").to_string(), "/transcripts/deal/d%201");
        assert_eq!(
            insight(&InsightKind::SalesScripts, [("competitor", "ZetaFlow")]).to_string(),
            "/insights/sales-scripts?competitor=ZetaFlow"
        );
        assert_eq!(
            insight::<&str, &str>(&InsightKind::Positioning, []).to_string(),
            "/insights/positioning"
        );
    }

    #[test]
    fn test_transcript_filter_skips_zero_limit() {
        let key = transcripts(&TranscriptFilter {
            contact_id: Some("c9".to_string()),
            limit: Some(0),
            ..Default::default()
        });
        assert_eq!(key.to_string(), "/transcripts?contact_id=c9");
    }

    #[test]
    fn test_dimension_parse() {
        assert_eq!(Dimension::parse("company_size"), Some(Dimension::CompanySize));
        assert_eq!(Dimension::parse("region"), None);
    }
}
