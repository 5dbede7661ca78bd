use leptos::prelude::*;
use winloss_core::api::InsightKind;
use winloss_core::models::IcpProfile;

use super::PageHeader;
use crate::components::common::{InsightBox, query_view};
use crate::hooks::use_icp;
use crate::utils::format::{format_days, format_percent};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Ideal customer profile derived from won deals.
#[component]
pub fn IcpPage() -> impl IntoView {
    let icp = use_icp();

    view! {
        <div class=css::page>
            <PageHeader
                title="ICP Builder"
                subtitle="The customers we win most often, and fastest"
            />
            <section class=css::panel>{query_view(icp, |p| profile_card(p))}</section>
            <InsightBox title="AI ICP Recommendations" kind=InsightKind::Icp expanded=true />
            <InsightBox title="AI Positioning Recommendations" kind=InsightKind::Positioning />
        </div>
    }
}

fn profile_card(p: &IcpProfile) -> impl IntoView + use<> {
    let field = |label: &'static str, value: String| {
        view! {
            <div class=css::field>
                <dt>{label}</dt>
                <dd>{value}</dd>
            </div>
        }
    };

    view! {
        <dl class=css::profile>
            {field("Industries", p.industries.join(", "))}
            {field("Company Size", p.employee_range.clone())}
            {field("Deal Size", p.deal_size_range.clone())}
            {field("Buyer Titles", p.buyer_titles.join(", "))}
            {field("Best Sources", p.preferred_sources.join(", "))}
            {field("Avg Cycle", format_days(p.avg_cycle_days))}
            {field("Win Rate", format_percent(p.win_rate))}
            {field("Confidence", format_percent((p.confidence * 100.0).round()))}
        </dl>
    }
}
