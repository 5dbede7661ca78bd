use leptos::prelude::*;
use winloss_core::api::InsightKind;
use winloss_core::models::ObjectionTheme;

use super::PageHeader;
use crate::components::common::{InsightBox, query_view};
use crate::hooks::use_objections;
use crate::utils::format::format_percent;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn ObjectionsPage() -> impl IntoView {
    let objections = use_objections();

    view! {
        <div class=css::page>
            <PageHeader
                title="Objection Handling"
                subtitle="Recurring objections and how often we still win"
            />
            <section class=css::panel>
                {query_view(objections, |rows| objection_table(rows))}
            </section>
            <InsightBox
                title="AI Objection Handling Guide & Sales Scripts"
                kind=InsightKind::SalesScripts
                expanded=true
            />
        </div>
    }
}

fn objection_table(rows: &[ObjectionTheme]) -> impl IntoView + use<> {
    let rows = rows
        .iter()
        .map(|o| {
            let rate_class = if o.win_rate_when_raised > 40.0 {
                css::badgeGood
            } else if o.win_rate_when_raised > 25.0 {
                css::badgeWarn
            } else {
                css::badgeBad
            };
            let width = format!("width: {}%", o.win_rate_when_raised.clamp(0.0, 100.0));
            view! {
                <tr>
                    <td class=css::strong>{o.objection.clone()}</td>
                    <td class=css::num>{o.frequency}</td>
                    <td class=css::num>{format_percent(o.percentage)}</td>
                    <td>
                        <div class=css::bar><div class=css::barFill style=width></div></div>
                        <span class=rate_class>{format_percent(o.win_rate_when_raised)}</span>
                    </td>
                    <td class=css::muted>{o.industries.join(", ")}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <table class=css::table>
            <thead>
                <tr>
                    <th>"Objection"</th>
                    <th>"Times Raised"</th>
                    <th>"Share of Deals"</th>
                    <th>"Win Rate When Raised"</th>
                    <th>"Industries"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
