//! Collapsible box showing one AI narrative insight.

use leptos::prelude::*;
use winloss_core::api::InsightKind;

use super::status::query_view;
use crate::hooks::use_ai_insight;
use crate::utils::insight_html;

stylance::import_crate_style!(css, "src/components/common/common.module.css");

#[component]
pub fn InsightBox(
    title: &'static str,
    kind: InsightKind,
    #[prop(optional)] expanded: bool,
) -> impl IntoView {
    let query = use_ai_insight(kind);
    let expanded = RwSignal::new(expanded);

    let refreshing = move || query.is_validating() && query.data().is_some();

    view! {
        <section class=css::insight>
            <header class=css::insightHeader>
                <button
                    class=css::insightToggle
                    on:click=move |_| expanded.update(|e| *e = !*e)
                >
                    <span class=css::insightBadge>"AI"</span>
                    <h3 class=css::insightTitle>{title}</h3>
                    <span>{move || if expanded.get() { "−" } else { "+" }}</span>
                </button>
                <button
                    class=css::insightRefresh
                    disabled=move || query.is_validating()
                    on:click=move |_| query.revalidate()
                >
                    {move || if refreshing() { "Refreshing..." } else { "Refresh" }}
                </button>
            </header>
            <Show when=move || expanded.get()>
                <div class=css::insightContent>
                    {query_view(query, |insight| {
                        let cached = insight.cached.then(|| view! {
                            <span class=css::insightCached>"cached"</span>
                        });
                        view! {
                            <div class=css::markdown inner_html=insight_html(&insight.content)></div>
                            {cached}
                        }
                    })}
                </div>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapsed_unless_requested() {
        let props = InsightBoxProps::builder()
            .title("Positioning")
            .kind(InsightKind::Positioning)
            .build();
        assert!(!props.expanded);

        let props = InsightBoxProps::builder()
            .title("Sales Scripts")
            .kind(InsightKind::SalesScripts)
            .expanded(true)
            .build();
        assert!(props.expanded);
    }
}
