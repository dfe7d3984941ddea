use leptos::prelude::*;
use leptos_meta::Title;

use crate::frontend::components::{PageHero, ProjectList};
use crate::frontend::state::use_site;
use crate::models::Project;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let site = use_site();

    move || {
        site.store.with(|store| {
            let projects: Vec<Project> = store.visible_projects().into_iter().cloned().collect();
            let title = format!("Research Projects | {}", store.settings().site_name);
            let image = store.settings().hero_image_url.clone();

            view! {
                <Title text=title />
                <PageHero
                    title="Research Projects"
                    subtitle=Some("Exploring the frontiers of virology and immunology through innovative research initiatives".to_string())
                    image=image
                />
                <div class="max-w-6xl mx-auto px-6 py-16">
                    <ProjectList projects=projects />
                </div>
            }
        })
    }
}
