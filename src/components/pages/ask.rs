//! Ask-AI chat.

use leptos::{ev, html, prelude::*};
use winloss_core::models::{ChatMessage, ChatRole};

use super::PageHeader;
use crate::components::common::Loading;
use crate::config::{ASK_PLACEHOLDER, SUGGESTED_QUESTIONS};
use crate::hooks::{AskState, use_ask};
use crate::utils::{chat_html, dom};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn AskPage() -> impl IntoView {
    let ask = use_ask();
    let end_ref = NodeRef::<html::Div>::new();

    // Keep the newest message in view
    Effect::new(move |_| {
        ask.conversation.track();
        if let Some(end) = end_ref.get() {
            dom::scroll_into_view(&end);
        }
    });

    let is_empty = move || ask.conversation.with(|c| c.messages.is_empty());

    view! {
        <div class=css::chatPage>
            <PageHeader
                title="Ask AI"
                subtitle="Ask questions about your deals, competitors and strategy"
            />

            <div class=css::chatLog>
                <Show when=is_empty>
                    <Suggestions ask=ask />
                </Show>
                <For
                    each=move || ask.conversation.with(|c| c.messages.clone().into_iter().enumerate().collect::<Vec<_>>())
                    key=|(i, _)| *i
                    children=|(_, message)| message_bubble(&message)
                />
                <Show when=move || ask.is_loading()>
                    <Loading label="Thinking..." />
                </Show>
                <div node_ref=end_ref></div>
            </div>

            <Composer ask=ask />
        </div>
    }
}

fn message_bubble(message: &ChatMessage) -> impl IntoView + use<> {
    match message.role {
        ChatRole::User => view! {
            <div class=css::bubbleUser>
                <p>{message.content.clone()}</p>
            </div>
        }
        .into_any(),
        ChatRole::Assistant => view! {
            <div class=css::bubbleAssistant>
                <div class=css::markdown inner_html=chat_html(&message.content)></div>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn Suggestions(ask: AskState) -> impl IntoView {
    let buttons = SUGGESTED_QUESTIONS
        .iter()
        .map(|&question| {
            view! {
                <button class=css::suggestion on:click=move |_| {
                    ask.submit(question);
                }>
                    {question}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class=css::suggestions>
            <p class=css::muted>"Try one of these questions:"</p>
            <div class=css::suggestionGrid>{buttons}</div>
        </div>
    }
}

/// Question input. Disabled while an answer is pending.
#[component]
fn Composer(ask: AskState) -> impl IntoView {
    let input = RwSignal::new(String::new());

    let submit = move || {
        if ask.submit(&input.get_untracked()) {
            input.set(String::new());
        }
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            submit();
        }
    };

    view! {
        <div class=css::composer>
            <input
                class=css::input
                type="text"
                placeholder=ASK_PLACEHOLDER
                prop:value=input
                disabled=move || ask.is_loading()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button
                class=css::button
                disabled=move || ask.is_loading() || input.with(|i| i.trim().is_empty())
                on:click=move |_| submit()
            >
                "Send"
            </button>
        </div>
    }
}
