use leptos::prelude::*;

use crate::frontend::state::use_site;
use crate::models::SiteSettings;

/// Email, phone and address from the site settings.
#[component]
pub fn ContactDetails(settings: SiteSettings) -> impl IntoView {
    let mailto = format!("mailto:{}", settings.contact_email);

    view! {
        <ul class="space-y-2 text-blue-100">
            <li>
                <span class="text-white font-semibold mr-2">"Email:"</span>
                <a href=mailto class="hover:text-white">{settings.contact_email}</a>
            </li>
            <li>
                <span class="text-white font-semibold mr-2">"Phone:"</span>
                {settings.contact_phone}
            </li>
            <li class="whitespace-pre-line">
                <span class="text-white font-semibold mr-2">"Address:"</span>
                {settings.address}
            </li>
        </ul>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site();
    let settings = move || site.store.with(|store| store.settings().clone());

    view! {
        <footer class="border-t border-blue-500/20 bg-slate-900/50">
            {move || {
                let settings = settings();
                let site_name = settings.site_name.clone();
                let description = settings.site_description.clone();
                view! {
                    <div class="max-w-6xl mx-auto px-6 py-12 grid md:grid-cols-2 gap-8">
                        <div>
                            <p class="text-2xl font-bold text-white mb-2">{site_name.clone()}</p>
                            <p class="text-slate-400">{description}</p>
                        </div>
                        <ContactDetails settings=settings />
                    </div>
                    <p class="text-center text-xs text-slate-600 pb-6">
                        {format!("© {}. All rights reserved.", site_name)}
                    </p>
                }
            }}
        </footer>
    }
}
