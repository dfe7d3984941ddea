pub mod browser;
pub mod components;
pub mod pages;
pub mod state;

use components::{AdminPanel, Footer, LoginModal, Nav};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use pages::{PageComposer, SinglePageLayout};
use state::SiteContext;

use crate::config::{Layout, SiteConfig};

/// HTML shell for SSR - provides the full document structure
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="min-h-screen bg-gradient-to-br from-slate-900 via-blue-900 to-indigo-900">
                <App/>
            </body>
        </html>
    }
}

/// Root component: loads the content, restores the session and picks the layout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = SiteContext::new(SiteConfig::from_build_env());
    provide_context(site);

    // Effects only run in the browser, so the server renders the loading state.
    Effect::new(move |_| {
        site.reload();
        site.refresh_session();
    });

    let layout = site.config.with_value(|config| config.layout);

    view! {
        <Stylesheet id="leptos" href="/pkg/odonlab.css"/>
        <Title text="Odon Lab"/>
        <Meta name="description" content="Virology and immunology research at the University of Strathclyde"/>

        <Router>
            {match layout {
                Layout::SinglePage => view! { <SinglePageLayout/> }.into_any(),
                Layout::MultiPage => view! {
                    <Nav/>
                    <main class="pt-20">
                        <Routes fallback=|| view! { <PageComposer/> }>
                            <Route path=path!("/") view=PageComposer/>
                            <Route path=path!("/*any") view=PageComposer/>
                        </Routes>
                    </main>
                }
                .into_any(),
            }}
            <Footer/>
            <LoginModal/>
            <AdminPanel/>
        </Router>
    }
}
