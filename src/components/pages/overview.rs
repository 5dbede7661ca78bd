//! Dashboard overview: KPIs, industry breakdown, loss reasons, strategic
//! signals, conversation themes, AI summary and recent deals.

use leptos::prelude::*;
use winloss_core::api::{Dimension, InsightKind};
use winloss_core::models::{
    ConversationTheme, DealFilter, DealStage, OverviewMetrics, StrategicSignal,
    top_loss_reasons,
};

use super::{PageHeader, breakdown_table, deal_table};
use crate::components::common::{InsightBox, MetricCard, query_view};
use crate::config::{RECENT_DEALS_LIMIT, TOP_LOSS_REASONS};
use crate::hooks::{use_breakdown, use_deals, use_overview, use_recent_deals, use_signals};
use crate::models::Trend;
use crate::utils::format::{format_currency, format_days, format_percent};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn OverviewPage() -> impl IntoView {
    let metrics = use_overview();
    let industries = use_breakdown(Signal::stored(Dimension::Industry));
    let lost = use_deals(Signal::stored(DealFilter {
        stage: Some(DealStage::ClosedLost),
        ..Default::default()
    }));
    let recent = use_recent_deals(RECENT_DEALS_LIMIT);
    let signals = use_signals();

    view! {
        <div class=css::page>
            <PageHeader
                title="Dashboard Overview"
                subtitle="Key metrics and patterns from closed CRM deals"
            />

            <div class=css::kpis>{query_view(metrics, kpi_cards)}</div>

            <div class=css::grid>
                <section class=css::panel>
                    <h3 class=css::panelTitle>"Win Rate by Industry"</h3>
                    {query_view(industries, |items| breakdown_table(Dimension::Industry, items))}
                </section>
                <section class=css::panel>
                    <h3 class=css::panelTitle>"Top Loss Reasons"</h3>
                    {query_view(lost, |deals| {
                        let reasons = top_loss_reasons(deals, TOP_LOSS_REASONS);
                        if reasons.is_empty() {
                            return view! { <p class=css::empty>"No lost deals recorded."</p> }
                                .into_any();
                        }
                        view! {
                            <ol class=css::reasons>
                                {reasons
                                    .into_iter()
                                    .map(|r| view! {
                                        <li>
                                            <span>{r.reason}</span>
                                            <span class=css::count>{r.count}</span>
                                        </li>
                                    })
                                    .collect::<Vec<_>>()}
                            </ol>
                        }
                        .into_any()
                    })}
                </section>
            </div>

            {query_view(signals, |signals| {
                let cards = [
                    ("Growth Lever", &signals.growth_lever),
                    ("Revenue Leak", &signals.revenue_leak),
                    ("ICP Fit", &signals.icp_fit),
                ]
                .into_iter()
                .filter_map(|(label, signal)| signal.as_ref().map(|s| signal_card(label, s)))
                .collect::<Vec<_>>();
                view! {
                    <div class=css::signals>{cards}</div>
                    {conversation_themes(&signals.conversation_themes)}
                }
            })}

            <InsightBox title="AI Executive Summary" kind=InsightKind::WinLossSummary expanded=true />

            <section class=css::panel>
                <h3 class=css::panelTitle>"Recent Deals"</h3>
                {query_view(recent, |deals| deal_table(deals))}
            </section>
        </div>
    }
}

fn kpi_cards(m: &OverviewMetrics) -> impl IntoView + use<> {
    view! {
        <MetricCard
            title="Win Rate"
            value=format_percent(m.win_rate)
            subtitle=format!("{}W / {}L", m.won_deals, m.lost_deals)
            trend=Trend::of_win_rate(m.win_rate)
        />
        <MetricCard
            title="Total Revenue"
            value=format_currency(m.total_revenue)
            subtitle=format!("{} closed-won deals", m.won_deals)
            trend=Trend::Up
        />
        <MetricCard
            title="Avg Deal Size"
            value=format_currency(m.avg_deal_size)
            subtitle="Won deals"
        />
        <MetricCard
            title="Avg Cycle"
            value=format_days(m.avg_cycle_won)
            subtitle=format!(
                "Won: {} | Lost: {}",
                format_days(m.avg_cycle_won),
                format_days(m.avg_cycle_lost),
            )
            trend=Trend::Up
        />
    }
}

fn signal_card(label: &'static str, signal: &StrategicSignal) -> impl IntoView + use<> {
    let metric = signal
        .metric
        .clone()
        .map(|m| view! { <span class=css::signalMetric>{m}</span> });
    view! {
        <div class=css::signalCard>
            <div class=css::signalLabel>{label}</div>
            <div class=css::signalHeadline>{signal.headline.clone()} {metric}</div>
            <p class=css::signalDetail>{signal.detail.clone()}</p>
        </div>
    }
}

fn conversation_themes(themes: &[ConversationTheme]) -> impl IntoView + use<> {
    if themes.is_empty() {
        return ().into_any();
    }
    let cards = themes.iter().map(theme_card).collect::<Vec<_>>();
    view! {
        <section>
            <h3 class=css::panelTitle>"Conversation Signals"</h3>
            <div class=css::themes>{cards}</div>
        </section>
    }
    .into_any()
}

fn theme_card(theme: &ConversationTheme) -> impl IntoView + use<> {
    let impact = theme.impact_level.clone().map(|level| {
        let class = impact_class(&level);
        view! { <span class=class>{format!("{level} Impact")}</span> }
    });
    let win_rate = theme.win_rate_when_raised.map(|rate| {
        let class = raised_rate_class(rate);
        view! {
            <div class=css::themeStats>
                <span class=css::muted>"Win rate when raised"</span>
                <span class=class>{format_percent(rate)}</span>
            </div>
        }
    });
    let quote = theme.sample_quote.clone().map(|quote| {
        let source = theme
            .sample_source
            .clone()
            .map(|s| view! { <span class=css::muted>{format!(" via {s}")}</span> });
        view! { <p class=css::quote>{format!("\u{201c}{quote}\u{201d}")} {source}</p> }
    });

    view! {
        <div class=css::signalCard>
            <div class=css::themeHeader>
                <span class=css::strong>{theme.theme.clone()}</span>
                {impact}
            </div>
            <div class=css::themeStats>
                <span class=css::muted>"Frequency"</span>
                <span>{format!("{} deals ({})", theme.frequency, format_percent(theme.deal_pct))}</span>
            </div>
            {win_rate}
            {quote}
        </div>
    }
}

fn impact_class(level: &str) -> &'static str {
    match level {
        "High" => css::badgeBad,
        "Medium" => css::badgeWarn,
        _ => css::badgeGood,
    }
}

/// Below 30% is a losing theme, below 50% a contested one.
fn raised_rate_class(rate: f64) -> &'static str {
    if rate < 30.0 {
        css::badgeBad
    } else if rate < 50.0 {
        css::badgeWarn
    } else {
        css::badgeGood
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raised_rate_bands() {
        assert_eq!(raised_rate_class(12.0), css::badgeBad);
        assert_eq!(raised_rate_class(30.0), css::badgeWarn);
        assert_eq!(raised_rate_class(49.9), css::badgeWarn);
        assert_eq!(raised_rate_class(50.0), css::badgeGood);
    }

    #[test]
    fn test_impact_levels() {
        assert_eq!(impact_class("High"), css::badgeBad);
        assert_eq!(impact_class("Medium"), css::badgeWarn);
        assert_eq!(impact_class("Low"), css::badgeGood);
    }
}
