//! Call transcripts, browsed by deal or searched by participant.

use leptos::{ev, prelude::*};
use winloss_core::models::{Deal, Transcript, TranscriptFilter, TranscriptListItem};

use super::PageHeader;
use crate::components::common::query_view;
use crate::config::DEAL_SAMPLE_LIMIT;
use crate::hooks::{use_deal_transcripts, use_recent_deals, use_transcript, use_transcripts};
use crate::utils::format::{format_currency_full, format_date, format_duration, format_timestamp};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Search results per page.
const SEARCH_LIMIT: u32 = 20;

#[component]
pub fn TranscriptsPage() -> impl IntoView {
    let deals = use_recent_deals(DEAL_SAMPLE_LIMIT);
    let selected = RwSignal::new(None::<String>);
    let deal_transcripts = use_deal_transcripts(selected.into());

    let on_select = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        selected.set((!value.is_empty()).then_some(value));
    };

    view! {
        <div class=css::page>
            <PageHeader
                title="Call Transcripts"
                subtitle="Recorded sales conversations linked to deals"
            />

            <section class=css::panel>
                <h3 class=css::panelTitle>"Select a Deal"</h3>
                {query_view(deals, move |deals| {
                    let options = deals.iter().map(deal_option).collect::<Vec<_>>();
                    view! {
                        <select class=css::select on:change=on_select>
                            <option value="">"-- Choose a deal --"</option>
                            {options}
                        </select>
                    }
                })}
            </section>

            <Show when=move || selected.with(Option::is_some)>
                {query_view(deal_transcripts, |dt| {
                    if dt.transcripts.is_empty() {
                        return view! {
                            <p class=css::empty>
                                {format!("No recorded calls for {}.", dt.deal_name)}
                            </p>
                        }
                        .into_any();
                    }
                    let cards = dt
                        .transcripts
                        .iter()
                        .map(|t| view! { <TranscriptCard transcript=t.clone() /> })
                        .collect::<Vec<_>>();
                    view! {
                        <h3 class=css::panelTitle>
                            {format!("{} ({} calls)", dt.deal_name, dt.transcript_count)}
                        </h3>
                        {cards}
                    }
                    .into_any()
                })}
            </Show>

            <TranscriptSearch />
        </div>
    }
}

fn deal_option(deal: &Deal) -> impl IntoView + use<> {
    let outcome = if deal.is_won() { "Won" } else { "Lost" };
    let label = format!(
        "{} ({}) - {}",
        deal.name,
        outcome,
        format_currency_full(deal.amount)
    );
    view! { <option value=deal.id.clone()>{label}</option> }
}

/// Transcript search by participant email.
#[component]
fn TranscriptSearch() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let filter = RwSignal::new(TranscriptFilter {
        limit: Some(SEARCH_LIMIT),
        ..Default::default()
    });
    let results = use_transcripts(filter.into());
    let opened = RwSignal::new(None::<String>);
    let transcript = use_transcript(opened.into());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked().trim().to_string();
        filter.update(|f| f.participant_email = (!email.is_empty()).then_some(email));
        opened.set(None);
    };

    view! {
        <section class=css::panel>
            <h3 class=css::panelTitle>"Search Calls"</h3>
            <form class=css::searchForm on:submit=on_submit>
                <input
                    class=css::input
                    type="email"
                    placeholder="participant@company.com"
                    prop:value=email
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button class=css::button type="submit">"Search"</button>
            </form>
            {query_view(results, move |page| {
                let rows = page
                    .transcripts
                    .iter()
                    .map(|item| search_row(item, opened))
                    .collect::<Vec<_>>();
                view! {
                    <p class=css::muted>
                        {format!("Showing {} of {} calls", page.count, page.total)}
                    </p>
                    <ul class=css::results>{rows}</ul>
                }
            })}
            <Show when=move || opened.with(Option::is_some)>
                {query_view(transcript, |t| view! { <TranscriptCard transcript=t.clone() /> })}
            </Show>
        </section>
    }
}

fn search_row(item: &TranscriptListItem, opened: RwSignal<Option<String>>) -> impl IntoView + use<> {
    let id = item.id.clone();
    view! {
        <li>
            <button class=css::resultButton on:click=move |_| opened.set(Some(id.clone()))>
                <span class=css::strong>{item.title.clone()}</span>
                <span class=css::muted>
                    {format!(
                        "{} · {} · {}",
                        format_date(&item.date),
                        format_duration(item.duration),
                        item.participants.join(", "),
                    )}
                </span>
            </button>
        </li>
    }
}

/// One call: metadata, AI summary and the expandable sentence list.
#[component]
fn TranscriptCard(transcript: Transcript) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let summary = transcript.summary.clone();

    let attendees = transcript
        .meeting_attendees
        .iter()
        .map(|a| {
            let title = a.email.clone().unwrap_or_default();
            view! { <span class=css::chip title=title>{a.display_name.clone()}</span> }
        })
        .collect::<Vec<_>>();

    let list = |title: &'static str, items: Vec<String>| {
        (!items.is_empty()).then(|| {
            let items = items
                .into_iter()
                .map(|i| view! { <li>{i}</li> })
                .collect::<Vec<_>>();
            view! {
                <div class=css::summaryBlock>
                    <h4>{title}</h4>
                    <ul>{items}</ul>
                </div>
            }
        })
    };

    let sentence_count = transcript.sentences.len();
    let sentences = StoredValue::new(transcript.sentences);
    let recording = transcript.transcript_url.map(|url| {
        view! { <a class=css::link href=url target="_blank" rel="noopener noreferrer">"Recording"</a> }
    });

    view! {
        <article class=css::transcript>
            <header class=css::transcriptHeader>
                <h4 class=css::strong>{transcript.title}</h4>
                <span class=css::muted>
                    {format!(
                        "{} · {}",
                        format_date(&transcript.date),
                        format_duration(transcript.duration),
                    )}
                </span>
                {recording}
            </header>
            <div class=css::chips>{attendees}</div>
            <p>{summary.overview}</p>
            {list("Action Items", summary.action_items)}
            {list("Keywords", summary.keywords)}
            {list("Topics", summary.topics_discussed)}
            <button class=css::button on:click=move |_| expanded.update(|e| *e = !*e)>
                {move || {
                    if expanded.get() {
                        "Hide Transcript".to_string()
                    } else {
                        format!("Show Full Transcript ({sentence_count} lines)")
                    }
                }}
            </button>
            <Show when=move || expanded.get()>
                <ol class=css::sentences>
                    {sentences.with_value(|sentences| {
                        sentences
                            .iter()
                            .map(|s| view! {
                                <li>
                                    <span class=css::timestamp>{format_timestamp(s.start_time)}</span>
                                    <span class=css::speaker>{format!("{}:", s.speaker_name)}</span>
                                    <span>{s.text.clone()}</span>
                                </li>
                            })
                            .collect::<Vec<_>>()
                    })}
                </ol>
            </Show>
        </article>
    }
}
