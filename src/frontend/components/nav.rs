use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::frontend::state::use_site;
use crate::services::routing::{is_current, nav_links};
use crate::services::scroll::SectionId;

const LINK_ACTIVE: &str = "px-4 py-2 rounded-lg font-medium transition-all bg-blue-500 text-white shadow-lg shadow-blue-500/25";
const LINK_IDLE: &str = "px-4 py-2 rounded-lg font-medium transition-all text-blue-100 hover:text-white hover:bg-blue-500/20";

#[component]
fn Brand() -> impl IntoView {
    let site = use_site();
    let name = move || site.store.with(|store| store.settings().site_name.clone());

    view! {
        <a href="/" class="flex items-center gap-3 group">
            <span class="w-10 h-10 rounded-full bg-gradient-to-r from-blue-500 to-indigo-600
                         flex items-center justify-center group-hover:scale-110 transition-transform">
                "🧬"
            </span>
            <span>
                <span class="block text-2xl font-bold text-white group-hover:text-blue-400 transition-colors">
                    {name}
                </span>
                <span class="block text-xs text-blue-300">"Virology Research"</span>
            </span>
        </a>
    }
}

/// Login, or the admin toggle and logout once the session is verified.
#[component]
fn SessionControls() -> impl IntoView {
    let site = use_site();

    view! {
        <Show
            when=move || site.is_admin()
            fallback=move || view! {
                <button class=LINK_IDLE on:click=move |_| site.login_open.set(true)>"Login"</button>
            }
        >
            <button class=LINK_IDLE on:click=move |_| site.admin_open.update(|open| *open = !*open)>
                "Admin"
            </button>
            <button class=LINK_IDLE on:click=move |_| site.logout()>"Logout"</button>
        </Show>
    }
}

/// Header for the multi-page layout: one link per route.
#[component]
pub fn Nav() -> impl IntoView {
    let site = use_site();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    let links = move || {
        let path = pathname.get();
        site.store.with(nav_links).into_iter().map(move |link| {
            let class = if is_current(&link.href, &path) { LINK_ACTIVE } else { LINK_IDLE };
            view! {
                <a href=link.href class=class on:click=move |_| menu_open.set(false)>{link.label}</a>
            }
        })
        .collect_view()
    };

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 backdrop-blur-xl bg-slate-900/80 border-b border-blue-500/20">
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <Brand />
                <nav class="hidden md:flex items-center gap-4">
                    {links}
                    <SessionControls />
                </nav>
                <button
                    class="md:hidden p-2 rounded-lg bg-blue-500/20 text-blue-100"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="md:hidden px-6 py-4 flex flex-col gap-3 bg-slate-900/95">
                    {links}
                    <SessionControls />
                </nav>
            </Show>
        </header>
    }
}

/// Header for the single-page layout: buttons that scroll to a section.
#[component]
pub fn SectionNav(active: Signal<SectionId>, on_select: Callback<SectionId>) -> impl IntoView {
    let buttons = move || {
        SectionId::ALL
            .into_iter()
            .map(move |id| {
                let class = move || if active.get() == id { LINK_ACTIVE } else { LINK_IDLE };
                view! {
                    <button class=class on:click=move |_| on_select.run(id)>{id.label()}</button>
                }
            })
            .collect_view()
    };

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 backdrop-blur-xl bg-slate-900/80 border-b border-blue-500/20">
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <Brand />
                <nav class="flex flex-wrap items-center gap-2">
                    {buttons}
                    <SessionControls />
                </nav>
            </div>
        </header>
    }
}
