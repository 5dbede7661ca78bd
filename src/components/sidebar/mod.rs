//! Navigation sidebar.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::{APP_NAME, APP_TAGLINE, NAV_ITEMS};

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

/// Sidebar with one link per page. The active entry follows the route.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let links = NAV_ITEMS
        .iter()
        .map(|&route| {
            let class = move || {
                if ctx.route.get() == route {
                    css::linkActive
                } else {
                    css::link
                }
            };
            view! {
                <li>
                    <a class=class href=route.to_hash()>{route.label()}</a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class=css::sidebar>
            <div class=css::brand>
                <span class=css::brandName>{APP_NAME}</span>
                <span class=css::brandTagline>{APP_TAGLINE}</span>
            </div>
            <ul class=css::links>{links}</ul>
        </nav>
    }
}
