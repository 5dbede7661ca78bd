//! One hook per analytics endpoint.
//!
//! Keys come from [`winloss_core::api::endpoints`], so two components asking
//! for the same data observe the same cache entry.

use leptos::prelude::*;
use winloss_core::api::endpoints;
use winloss_core::api::{Dimension, InsightKind};
use winloss_core::models::{
    AiInsight, BreakdownItem, CompetitorMetrics, Deal, DealFilter, DealTranscripts, IcpProfile,
    ObjectionTheme, OverviewMetrics, StrategicSignals, Transcript, TranscriptFilter,
    TranscriptPage,
};
use winloss_core::query::QueryOptions;

use super::query::{Query, use_query};

pub fn use_overview() -> Query<OverviewMetrics> {
    use_query(|| Some(endpoints::overview()), QueryOptions::default())
}

pub fn use_breakdown(dimension: Signal<Dimension>) -> Query<Vec<BreakdownItem>> {
    use_query(
        move || Some(endpoints::breakdown(dimension.get())),
        QueryOptions::default(),
    )
}

pub fn use_competitors() -> Query<Vec<CompetitorMetrics>> {
    use_query(|| Some(endpoints::competitors()), QueryOptions::default())
}

pub fn use_objections() -> Query<Vec<ObjectionTheme>> {
    use_query(|| Some(endpoints::objections()), QueryOptions::default())
}

pub fn use_icp() -> Query<IcpProfile> {
    use_query(|| Some(endpoints::icp()), QueryOptions::default())
}

pub fn use_signals() -> Query<StrategicSignals> {
    use_query(|| Some(endpoints::signals()), QueryOptions::default())
}

pub fn use_deals(filter: Signal<DealFilter>) -> Query<Vec<Deal>> {
    use_query(
        move || Some(endpoints::deals(&filter.get())),
        QueryOptions::default(),
    )
}

pub fn use_recent_deals(limit: u32) -> Query<Vec<Deal>> {
    use_query(
        move || Some(endpoints::recent_deals(limit)),
        QueryOptions::default(),
    )
}

/// AI narrative for `kind`. Not revalidated on focus.
pub fn use_ai_insight(kind: InsightKind) -> Query<AiInsight> {
    use_query(
        move || Some(endpoints::insight::<&str, &str>(&kind, [])),
        QueryOptions::insight(),
    )
}

/// Transcripts for a deal; idle while no deal is selected.
pub fn use_deal_transcripts(deal_id: Signal<Option<String>>) -> Query<DealTranscripts> {
    use_query(
        move || deal_id.get().map(|id| endpoints::deal_transcripts(&id)),
        QueryOptions::default(),
    )
}

/// A single transcript; idle while `id` is `None`.
pub fn use_transcript(id: Signal<Option<String>>) -> Query<Transcript> {
    use_query(
        move || id.get().map(|id| endpoints::transcript(&id)),
        QueryOptions::default(),
    )
}

pub fn use_transcripts(filter: Signal<TranscriptFilter>) -> Query<TranscriptPage> {
    use_query(
        move || Some(endpoints::transcripts(&filter.get())),
        QueryOptions::default(),
    )
}
