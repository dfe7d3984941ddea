use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use super::NotFound;
use crate::frontend::components::{PageHero, SectionList};
use crate::frontend::state::use_site;

/// Any published page other than home, laid out from its content document.
#[component]
pub fn GenericPage(page_name: String) -> impl IntoView {
    let site = use_site();

    move || {
        site.store.with(|store| {
            let Some(page) = store.published_page(&page_name) else {
                return view! { <NotFound /> }.into_any();
            };

            let settings = store.settings();
            let title = format!("{} | {}", page.title, settings.site_name);
            let description = page
                .meta_description
                .clone()
                .unwrap_or_else(|| settings.site_description.clone());
            let keywords = page.meta_keywords.clone().unwrap_or_default();
            let image = page
                .hero_image()
                .map(str::to_string)
                .or_else(|| settings.hero_image_url.clone());

            view! {
                <Title text=title />
                <Meta name="description" content=description />
                <Meta name="keywords" content=keywords />
                <PageHero title=page.title.clone() subtitle=page.subtitle.clone() image=image />
                <div class="max-w-6xl mx-auto px-6 py-16">
                    <SectionList content=Some(page.content.clone()) />
                </div>
            }
            .into_any()
        })
    }
}
