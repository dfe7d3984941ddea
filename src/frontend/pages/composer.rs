use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::{GenericPage, HomePage, NotFound, ProjectsPage};
use crate::frontend::components::ErrorAlert;
use crate::frontend::state::use_site;
use crate::services::routing::{Route, resolve};

/// Picks the template for the current path once the content has loaded.
#[component]
pub fn PageComposer() -> impl IntoView {
    let site = use_site();
    let pathname = use_location().pathname;

    let route = Memo::new(move |_| {
        let path = pathname.get();
        site.store.with(|store| store.is_loaded().then(|| resolve(&path, store)))
    });

    move || {
        if let Some(message) = site.load_error.get() {
            return view! {
                <div class="max-w-2xl mx-auto px-6 pt-32">
                    <ErrorAlert
                        message=format!("The site content could not be loaded. {}", message)
                        on_retry=Callback::new(move |_| site.reload())
                    />
                </div>
            }
            .into_any();
        }

        match route.get() {
            None => view! {
                <div class="min-h-screen flex items-center justify-center text-slate-400">"Loading..."</div>
            }
            .into_any(),
            Some(Route::Home) => view! { <HomePage /> }.into_any(),
            Some(Route::Projects) => view! { <ProjectsPage /> }.into_any(),
            Some(Route::Generic(page_name)) => view! { <GenericPage page_name=page_name /> }.into_any(),
            Some(Route::NotFound) => view! { <NotFound /> }.into_any(),
        }
    }
}
