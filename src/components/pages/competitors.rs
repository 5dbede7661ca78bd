use leptos::prelude::*;
use winloss_core::api::InsightKind;
use winloss_core::models::CompetitorMetrics;

use super::PageHeader;
use crate::components::common::{InsightBox, query_view};
use crate::hooks::use_competitors;
use crate::models::ThreatLevel;
use crate::utils::format::{format_currency, format_percent};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Head-to-head results against each competitor plus AI battle cards.
#[component]
pub fn CompetitorsPage() -> impl IntoView {
    let competitors = use_competitors();

    view! {
        <div class=css::page>
            <PageHeader
                title="Competitor Intelligence"
                subtitle="Head-to-head performance analysis and AI battle cards"
            />

            <section class=css::panel>
                <h3 class=css::panelTitle>"Head-to-Head"</h3>
                {query_view(competitors, |rows| competitor_table(rows))}
            </section>

            <InsightBox title="AI Competitive Briefing" kind=InsightKind::Competitors expanded=true />
        </div>
    }
}

fn competitor_table(rows: &[CompetitorMetrics]) -> impl IntoView + use<> {
    let rows = rows
        .iter()
        .map(|c| {
            let threat = ThreatLevel::from_win_rate(c.win_rate);
            let threat_class = match threat {
                ThreatLevel::High => css::badgeBad,
                ThreatLevel::Medium => css::badgeWarn,
                ThreatLevel::Low => css::badgeGood,
            };
            view! {
                <tr>
                    <td class=css::strong>{c.competitor.clone()}</td>
                    <td class=css::num>{c.deals_faced}</td>
                    <td class=css::num>{format!("{}W / {}L", c.wins, c.losses)}</td>
                    <td class=css::num>{format_percent(c.win_rate)}</td>
                    <td class=css::num>{format_currency(c.avg_deal_size)}</td>
                    <td><span class=threat_class>{threat.label()}</span></td>
                    <td class=css::muted>{c.top_loss_reasons.join(", ")}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class=css::table>
            <thead>
                <tr>
                    <th>"Competitor"</th>
                    <th>"Deals"</th>
                    <th>"Record"</th>
                    <th>"Win Rate"</th>
                    <th>"Avg Deal"</th>
                    <th>"Threat"</th>
                    <th>"Top Loss Reasons"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
