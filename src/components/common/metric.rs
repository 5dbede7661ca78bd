use leptos::prelude::*;

use crate::models::Trend;

stylance::import_crate_style!(css, "src/components/common/common.module.css");

/// KPI card: title, headline value, subtitle and trend arrow.
#[component]
pub fn MetricCard(
    title: &'static str,
    value: String,
    #[prop(into)] subtitle: String,
    #[prop(optional)] trend: Trend,
) -> impl IntoView {
    let trend_class = match trend {
        Trend::Up => css::trendUp,
        Trend::Down => css::trendDown,
        Trend::Neutral => css::trendNeutral,
    };
    view! {
        <div class=css::metric>
            <div class=css::metricTitle>{title}</div>
            <div class=css::metricValue>
                {value}
                <span class=trend_class>{trend.arrow()}</span>
            </div>
            <div class=css::metricSubtitle>{subtitle}</div>
        </div>
    }
}
