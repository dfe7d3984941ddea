//! Every section on one scrolling page, with the header tracking the section
//! currently under it.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::frontend::browser;
use crate::frontend::components::{
    ContactDetails, ErrorAlert, PageHero, ProjectList, SectionList, SectionNav,
};
use crate::frontend::state::use_site;
use crate::models::{HOME_PAGE, Project};
use crate::services::scroll::{ScrollTracker, SectionId};

#[component]
pub fn SinglePageLayout() -> impl IntoView {
    let site = use_site();
    let tracker = RwSignal::new(ScrollTracker::new());

    Effect::new(move |_| {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let spans = browser::section_spans();
            let position = browser::scroll_y();
            let current = tracker.with_untracked(ScrollTracker::active);
            let mut next = tracker.get_untracked();
            if next.on_scroll(position, &spans) != current {
                tracker.set(next);
            }
        });
        on_cleanup(move || handle.remove());
    });

    let active = Signal::derive(move || tracker.with(ScrollTracker::active));
    let select = Callback::new(move |id: SectionId| {
        tracker.update(|t| t.select(id));
        browser::scroll_to(id);
    });

    view! {
        <Title text=move || site.store.with(|store| store.settings().site_name.clone()) />
        <Meta
            name="description"
            content=move || site.store.with(|store| store.settings().site_description.clone())
        />
        <SectionNav active=active on_select=select />
        <main class="pt-20">
            {move || site.load_error.get().map(|message| view! {
                <div class="max-w-2xl mx-auto px-6 pt-12">
                    <ErrorAlert
                        message=format!("The site content could not be loaded. {}", message)
                        on_retry=Callback::new(move |_| site.reload())
                    />
                </div>
            })}
            <HomeSection />
            <ProjectsSection />
            <PageSection id=SectionId::OdonAi page_name="odonai" />
            <ContactSection />
        </main>
    }
}

#[component]
fn HomeSection() -> impl IntoView {
    let site = use_site();

    view! {
        <section id=SectionId::Home.as_str() class="min-h-screen relative overflow-hidden">
            {move || site.store.with(|store| {
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
                let content = page.map(|p| p.content.clone());

                view! {
                    <PageHero title=title subtitle=Some(subtitle) image=image full_height=true />
                    <div class="max-w-6xl mx-auto px-6 pb-20">
                        <SectionList content=content />
                    </div>
                }
            })}
        </section>
    }
}

#[component]
fn ProjectsSection() -> impl IntoView {
    let site = use_site();
    let projects = move || {
        site.store
            .with(|store| store.visible_projects().into_iter().cloned().collect::<Vec<Project>>())
    };

    view! {
        <section id=SectionId::Projects.as_str() class="py-20 bg-slate-800/50">
            <div class="max-w-6xl mx-auto px-6">
                <h2 class="text-4xl md:text-5xl font-bold text-white text-center mb-16">"Research Projects"</h2>
                {move || view! { <ProjectList projects=projects() /> }}
            </div>
        </section>
    }
}

/// A section whose body is an editable page.
#[component]
fn PageSection(id: SectionId, #[prop(into)] page_name: String) -> impl IntoView {
    let site = use_site();

    view! {
        <section id=id.as_str() class="py-20">
            <div class="max-w-6xl mx-auto px-6">
                {move || site.store.with(|store| {
                    let page = store.published_page(&page_name);
                    let title = page.map_or_else(|| id.label().to_string(), |p| p.title.clone());
                    let subtitle = page.and_then(|p| p.subtitle.clone());
                    let content = page.map(|p| p.content.clone());

                    view! {
                        <div class="text-center mb-16">
                            <h2 class="text-4xl md:text-5xl font-bold text-white mb-6">{title}</h2>
                            {subtitle.map(|text| view! {
                                <p class="text-xl text-blue-100 max-w-3xl mx-auto">{text}</p>
                            })}
                        </div>
                        <SectionList content=content />
                    }
                })}
            </div>
        </section>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    let site = use_site();

    view! {
        <section id=SectionId::Contact.as_str() class="py-20 bg-slate-800/50">
            <div class="max-w-3xl mx-auto px-6 text-center">
                <h2 class="text-4xl md:text-5xl font-bold text-white mb-10">"Contact"</h2>
                <div class="inline-block text-left p-8 rounded-2xl bg-white/10 border border-blue-500/20">
                    {move || {
                        let settings = site.store.with(|store| store.settings().clone());
                        view! { <ContactDetails settings=settings /> }
                    }}
                </div>
            </div>
        </section>
    }
}
