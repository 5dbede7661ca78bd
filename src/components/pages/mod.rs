//! One component per route, plus the tables several pages share.

mod ask;
mod competitors;
mod icp;
mod objections;
mod overview;
mod transcripts;
mod win_loss;

pub use ask::AskPage;
pub use competitors::CompetitorsPage;
pub use icp::IcpPage;
pub use objections::ObjectionsPage;
pub use overview::OverviewPage;
pub use transcripts::TranscriptsPage;
pub use win_loss::WinLossPage;

use leptos::prelude::*;
use winloss_core::api::Dimension;
use winloss_core::models::{BreakdownItem, Deal};

use crate::utils::format::{format_currency, format_percent};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <header class=css::header>
            <h1 class=css::title>{title}</h1>
            <p class=css::subtitle>{subtitle}</p>
        </header>
    }
}

/// Breakdown rows, best win rate first.
fn breakdown_table(dimension: Dimension, items: &[BreakdownItem]) -> impl IntoView + use<> {
    let mut items = items.to_vec();
    items.sort_by(|a, b| b.win_rate.total_cmp(&a.win_rate));

    let rows = items
        .into_iter()
        .map(|item| {
            let width = format!("width: {}%", item.win_rate.clamp(0.0, 100.0));
            view! {
                <tr>
                    <td class=css::strong>{item.category}</td>
                    <td class=css::num>{item.total}</td>
                    <td class=css::num>{format!("{}W / {}L", item.won, item.lost)}</td>
                    <td>
                        <div class=css::bar><div class=css::barFill style=width></div></div>
                        <span class=css::num>{format_percent(item.win_rate)}</span>
                    </td>
                    <td class=css::num>{format_currency(item.avg_deal_size)}</td>
                    <td class=css::num>{format_currency(item.total_revenue)}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class=css::table>
            <thead>
                <tr>
                    <th>{dimension.label()}</th>
                    <th>"Deals"</th>
                    <th>"Record"</th>
                    <th>"Win Rate"</th>
                    <th>"Avg Deal"</th>
                    <th>"Revenue"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

fn deal_table(deals: &[Deal]) -> impl IntoView + use<> {
    let rows = deals
        .iter()
        .map(|deal| {
            let (status, status_class) = if deal.is_won() {
                ("Won", css::badgeGood)
            } else {
                ("Lost", css::badgeBad)
            };
            let company = deal
                .company
                .as_ref()
                .map_or_else(|| "—".to_string(), |c| c.name.clone());
            view! {
                <tr>
                    <td class=css::strong>{deal.name.clone()}</td>
                    <td class=css::muted>{company}</td>
                    <td class=css::num>{format_currency(deal.amount)}</td>
                    <td><span class=status_class>{status}</span></td>
                    <td class=css::muted>{deal.deal_source.clone()}</td>
                    <td class=css::num>{format!("{}d", deal.cycle_days)}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class=css::table>
            <thead>
                <tr>
                    <th>"Deal"</th>
                    <th>"Company"</th>
                    <th>"Amount"</th>
                    <th>"Status"</th>
                    <th>"Source"</th>
                    <th>"Cycle"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
