use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use crate::frontend::state::use_site;
use crate::services::routing::nav_links;

/// Shown for unknown paths and for pages that exist but are not published.
#[component]
pub fn NotFound() -> impl IntoView {
    let site = use_site();
    let pathname = use_location().pathname;
    let links = move || site.store.with(nav_links);
    let site_name = move || site.store.with(|store| store.settings().site_name.clone());

    view! {
        <Title text=move || format!("Not found | {}", site_name()) />
        <section class="max-w-3xl mx-auto px-6 pt-32 pb-24">
            <p class="text-sm font-mono text-slate-400">{move || pathname.get()}</p>
            <h1 class="mt-2 text-3xl font-semibold text-white">"This page is not part of the lab site"</h1>
            <p class="mt-4 text-slate-300">
                "It may have been renamed or taken offline. These pages are available:"
            </p>
            <ul class="mt-6 grid gap-2 sm:grid-cols-2">
                <For each=links key=|link| link.href.clone() let:link>
                    <li>
                        <a href=link.href class="block rounded-lg border border-slate-700 px-4 py-3 text-slate-200 hover:border-slate-400 hover:text-white">
                            {link.label}
                        </a>
                    </li>
                </For>
            </ul>
        </section>
    }
}
