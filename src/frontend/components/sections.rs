use leptos::prelude::*;

use crate::models::ContentDocument;
use crate::services::{Card, Section, render_sections};

/// Lays out a page's content document block by block.
#[component]
pub fn SectionList(content: Option<ContentDocument>) -> impl IntoView {
    let sections = render_sections(content.as_ref());

    view! {
        <div class="space-y-10">
            {sections.into_iter().map(|section| view! { <SectionBlock section=section /> }).collect_view()}
        </div>
    }
}

#[component]
fn SectionBlock(section: Section) -> impl IntoView {
    match section {
        Section::Paragraph { label, text } => view! {
            <section class="p-8 rounded-2xl bg-white/10 border border-blue-500/20">
                <h2 class="text-2xl font-bold text-white mb-4">{label}</h2>
                <p class="text-blue-100 text-lg leading-relaxed whitespace-pre-line">{text}</p>
            </section>
        }
        .into_any(),
        Section::List { label, items } => view! {
            <section class="p-8 rounded-2xl bg-white/10 border border-blue-500/20">
                <h2 class="text-2xl font-bold text-white mb-4">{label}</h2>
                <ul class="space-y-2 text-blue-100">
                    {items
                        .into_iter()
                        .map(|item| view! {
                            <li class="flex items-start">
                                <span class="w-2 h-2 bg-blue-400 rounded-full mr-3 mt-2"></span>
                                {item}
                            </li>
                        })
                        .collect_view()}
                </ul>
            </section>
        }
        .into_any(),
        Section::Grid { label, cards } => view! {
            <section>
                <h2 class="text-2xl font-bold text-white mb-6 text-center">{label}</h2>
                <div class="grid md:grid-cols-3 gap-6">
                    {cards.into_iter().map(|card| view! { <CardView card=card /> }).collect_view()}
                </div>
            </section>
        }
        .into_any(),
        Section::Placeholder => view! {
            <section class="p-8 rounded-2xl border border-dashed border-slate-600 text-center text-slate-400">
                "No content yet."
            </section>
        }
        .into_any(),
    }
}

#[component]
fn CardView(card: Card) -> impl IntoView {
    view! {
        <div class="rounded-xl p-6 bg-blue-500/20 border border-blue-500/30">
            <h3 class="text-xl font-semibold text-white mb-3">{card.label}</h3>
            <p class="text-blue-100 text-sm">{card.text}</p>
        </div>
    }
}
