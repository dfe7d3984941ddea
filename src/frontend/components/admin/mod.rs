//! In-browser admin panel, shown only for a verified admin session.

mod actions;
mod media_tab;
mod pages_tab;
mod projects_tab;
mod settings_tab;

use leptos::prelude::*;

use super::Modal;
use crate::frontend::state::use_site;
use media_tab::MediaTab;
use pages_tab::PagesTab;
use projects_tab::ProjectsTab;
use settings_tab::SettingsTab;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Tab {
    #[default]
    Pages,
    Projects,
    Settings,
    Media,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Pages, Tab::Projects, Tab::Settings, Tab::Media];

    fn label(self) -> &'static str {
        match self {
            Tab::Pages => "Pages",
            Tab::Projects => "Projects",
            Tab::Settings => "Settings",
            Tab::Media => "Media",
        }
    }
}

#[component]
pub fn AdminPanel() -> impl IntoView {
    let site = use_site();
    let tab = RwSignal::new(Tab::default());

    let close = Callback::new(move |_: ()| site.admin_open.set(false));

    view! {
        <Show when=move || site.admin_open.get() && site.is_admin()>
            <Modal title="Admin Panel" wide=true on_close=close>
                <nav class="flex gap-2 mb-6 border-b border-slate-800 pb-4">
                    {Tab::ALL
                        .into_iter()
                        .map(|t| {
                            let class = move || {
                                if tab.get() == t {
                                    "px-4 py-2 rounded-lg bg-blue-500 text-white"
                                } else {
                                    "px-4 py-2 rounded-lg text-slate-300 hover:bg-slate-800"
                                }
                            };
                            view! { <button class=class on:click=move |_| tab.set(t)>{t.label()}</button> }
                        })
                        .collect_view()}
                </nav>
                {move || match tab.get() {
                    Tab::Pages => view! { <PagesTab /> }.into_any(),
                    Tab::Projects => view! { <ProjectsTab /> }.into_any(),
                    Tab::Settings => view! { <SettingsTab /> }.into_any(),
                    Tab::Media => view! { <MediaTab /> }.into_any(),
                }}
            </Modal>
        </Show>
    }
}
