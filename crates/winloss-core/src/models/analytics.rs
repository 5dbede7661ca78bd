//! Aggregates computed by the analytics backend.

use serde::{Deserialize, Serialize};

/// Headline KPIs from `GET /analytics/overview`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewMetrics {
    pub total_deals: u32,
    pub won_deals: u32,
    pub lost_deals: u32,
    pub win_rate: f64,
    pub total_revenue: f64,
    pub avg_deal_size: f64,
    pub avg_cycle_won: f64,
    pub avg_cycle_lost: f64,
}

/// One row of `GET /analytics/breakdown/{dimension}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub category: String,
    pub total: u32,
    pub won: u32,
    pub lost: u32,
    pub win_rate: f64,
    pub avg_deal_size: f64,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorMetrics {
    pub competitor: String,
    pub deals_faced: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
    pub avg_deal_size: f64,
    #[serde(default)]
    pub top_loss_reasons: Vec<String>,
    #[serde(default)]
    pub industries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectionTheme {
    pub objection: String,
    pub frequency: u32,
    pub percentage: f64,
    #[serde(default)]
    pub industries: Vec<String>,
    pub win_rate_when_raised: f64,
}

/// Ideal customer profile recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcpProfile {
    #[serde(default)]
    pub industries: Vec<String>,
    pub employee_range: String,
    pub deal_size_range: String,
    #[serde(default)]
    pub buyer_titles: Vec<String>,
    #[serde(default)]
    pub preferred_sources: Vec<String>,
    pub avg_cycle_days: f64,
    pub win_rate: f64,
    /// Between 0 and 1; rates elsewhere are percentages.
    pub confidence: f64,
}

/// One strategic signal card (growth lever, revenue leak, ICP fit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicSignal {
    pub headline: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub metric: Option<String>,
}

/// Recurring theme mined from call transcripts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTheme {
    pub theme: String,
    pub frequency: u32,
    #[serde(default)]
    pub deal_pct: f64,
    #[serde(default)]
    pub impact_level: Option<String>,
    #[serde(default)]
    pub sample_quote: Option<String>,
    #[serde(default)]
    pub sample_source: Option<String>,
    #[serde(default)]
    pub win_rate_when_raised: Option<f64>,
}

/// Bundle returned by `GET /analytics/signals`.
///
/// `kpis` is passed through as-is; its members vary with the backend version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicSignals {
    #[serde(default)]
    pub kpis: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub growth_lever: Option<StrategicSignal>,
    #[serde(default)]
    pub revenue_leak: Option<StrategicSignal>,
    #[serde(default)]
    pub icp_fit: Option<StrategicSignal>,
    #[serde(default)]
    pub conversation_themes: Vec<ConversationTheme>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signals_tolerate_missing_sections() {
        let json = r#"{
            "kpis": {"pipeline_velocity": 1.4},
            "growth_lever": {"headline": "Referral deals close 2x faster", "detail": "", "metric": "62%"},
            "conversation_themes": [{"theme": "Pricing", "frequency": 14}]
        }"#;
        let signals: StrategicSignals = serde_json::from_str(json).unwrap();
        assert!(signals.revenue_leak.is_none());
        assert_eq!(signals.conversation_themes[0].theme, "Pricing");
        assert_eq!(
            signals.growth_lever.and_then(|g| g.metric).as_deref(),
            Some("62%")
        );
        assert!(signals.kpis.contains_key("pipeline_velocity"));
    }
}
