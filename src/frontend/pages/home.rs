use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::frontend::components::{PageHero, ProjectList, SectionList};
use crate::frontend::state::use_site;
use crate::models::{HOME_PAGE, Project};
use crate::services::routing::PROJECTS_PATH;

const FEATURED_PROJECTS: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let site = use_site();

    move || {
        site.store.with(|store| {
            let settings = store.settings();
            let page = store.published_page(HOME_PAGE);

            let title = page.map_or_else(|| settings.site_name.clone(), |p| p.title.clone());
            let subtitle = page
                .and_then(|p| p.subtitle.clone())
                .unwrap_or_else(|| settings.site_description.clone());
            let image = page
                .and_then(|p| p.hero_image())
                .map(str::to_string)
                .or_else(|| settings.hero_image_url.clone());
            let description = page
                .and_then(|p| p.meta_description.clone())
                .unwrap_or_else(|| settings.site_description.clone());
            let content = page.map(|p| p.content.clone());
            let featured: Vec<Project> = store
                .visible_projects()
                .into_iter()
                .take(FEATURED_PROJECTS)
                .cloned()
                .collect();

            view! {
                <Title text=settings.site_name.clone() />
                <Meta name="description" content=description />
                <PageHero title=title subtitle=Some(subtitle) image=image full_height=true />
                <div class="max-w-6xl mx-auto px-6 py-16 space-y-16">
                    <SectionList content=content />
                    <section>
                        <h2 class="text-3xl font-bold text-white text-center mb-8">"Research Projects"</h2>
                        <ProjectList projects=featured />
                        <div class="mt-8 text-center">
                            <a href=PROJECTS_PATH class="text-blue-300 hover:text-white">"All projects →"</a>
                        </div>
                    </section>
                </div>
            }
        })
    }
}
