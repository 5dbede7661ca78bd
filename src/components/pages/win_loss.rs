use leptos::prelude::*;
use winloss_core::api::{Dimension, InsightKind};
use winloss_core::models::{Deal, DealFilter, DealStage};

use super::{PageHeader, breakdown_table};
use crate::components::common::{InsightBox, query_view};
use crate::config::DEAL_TABLE_LIMIT;
use crate::hooks::{use_breakdown, use_deals};
use crate::utils::format::format_currency;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Stage tabs of the deal explorer.
const STAGE_TABS: [(Option<DealStage>, &str); 3] = [
    (None, "All"),
    (Some(DealStage::ClosedWon), "Won"),
    (Some(DealStage::ClosedLost), "Lost"),
];

fn stage_filter(stage: Option<DealStage>) -> DealFilter {
    DealFilter {
        stage,
        ..Default::default()
    }
}

/// Win/loss analysis by a selectable dimension, plus a deal explorer.
#[component]
pub fn WinLossPage() -> impl IntoView {
    let dimension = RwSignal::new(Dimension::Industry);
    let breakdown = use_breakdown(dimension.into());

    let tabs = Dimension::ALL
        .into_iter()
        .map(|d| {
            let class = move || {
                if dimension.get() == d {
                    css::tabActive
                } else {
                    css::tab
                }
            };
            view! {
                <button class=class on:click=move |_| dimension.set(d)>
                    {d.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class=css::page>
            <PageHeader
                title="Win/Loss Analysis"
                subtitle="Where we win, where we lose, and by how much"
            />

            <div class=css::tabs role="tablist">{tabs}</div>

            <section class=css::panel>
                <h3 class=css::panelTitle>
                    {move || format!("Win Rate by {}", dimension.get().label())}
                </h3>
                {query_view(breakdown, move |items| {
                    breakdown_table(dimension.get_untracked(), items)
                })}
            </section>

            <InsightBox title="AI Win/Loss Analysis" kind=InsightKind::WinLossSummary />

            <DealExplorer />
        </div>
    }
}

/// All closed deals, narrowed by stage.
#[component]
fn DealExplorer() -> impl IntoView {
    let filter = RwSignal::new(DealFilter::default());
    let deals = use_deals(filter.into());

    let tabs = STAGE_TABS
        .into_iter()
        .map(|(stage, label)| {
            let class = move || {
                if filter.with(|f| f.stage == stage) {
                    css::tabActive
                } else {
                    css::tab
                }
            };
            view! {
                <button class=class on:click=move |_| filter.set(stage_filter(stage))>
                    {label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class=css::panel>
            <div class=css::panelBar>
                <h3 class=css::panelTitle>"All Deals"</h3>
                <div class=css::tabs role="tablist">{tabs}</div>
            </div>
            <div class=css::scroll>
                {query_view(deals, |deals| explorer_table(deals))}
            </div>
        </section>
    }
}

fn explorer_table(deals: &[Deal]) -> impl IntoView + use<> {
    let or_dash = |value: &Option<String>| value.clone().unwrap_or_else(|| "—".to_string());

    let rows = deals
        .iter()
        .take(DEAL_TABLE_LIMIT)
        .map(|deal| {
            let (status, status_class) = if deal.is_won() {
                ("Won", css::badgeGood)
            } else {
                ("Lost", css::badgeBad)
            };
            view! {
                <tr>
                    <td class=css::strong>{deal.name.clone()}</td>
                    <td class=css::num>{format_currency(deal.amount)}</td>
                    <td><span class=status_class>{status}</span></td>
                    <td class=css::muted>{deal.deal_source.clone()}</td>
                    <td class=css::muted>{or_dash(&deal.competitor)}</td>
                    <td class=css::num>{format!("{}d", deal.cycle_days)}</td>
                    <td class=css::muted>{or_dash(&deal.loss_reason)}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class=css::table>
            <thead>
                <tr>
                    <th>"Deal"</th>
                    <th>"Amount"</th>
                    <th>"Status"</th>
                    <th>"Source"</th>
                    <th>"Competitor"</th>
                    <th>"Cycle"</th>
                    <th>"Loss Reason"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winloss_core::api::endpoints;

    #[test]
    fn test_stage_tabs_address_distinct_queries() {
        let keys: Vec<String> = STAGE_TABS
            .iter()
            .map(|(stage, _)| endpoints::deals(&stage_filter(*stage)).to_string())
            .collect();
        assert_eq!(
            keys,
            ["/deals", "/deals?stage=closedwon", "/deals?stage=closedlost"]
        );
    }
}
