#[cfg(feature = "ssr")]
mod web;

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{App, HttpServer, web::Data};
    use leptos::config::get_configuration;
    use leptos::prelude::*;
    use leptos_actix::{LeptosRoutes, generate_route_list};
    use tracing_subscriber::{EnvFilter, fmt};

    use odonlab::config::SiteConfig;
    use odonlab::frontend::{App as Site, shell};
    use web::SecurityHeaders;

    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let conf = get_configuration(None).expect("Failed to read the Leptos configuration");
    let addr = conf.leptos_options.site_addr;
    let site = SiteConfig::from_build_env();

    log::info!(
        "Serving the lab site on http://{} (content API: {}, layout: {:?})",
        addr,
        site.api_base_url,
        site.layout
    );

    HttpServer::new(move || {
        let routes = generate_route_list(Site);
        let leptos_options = &conf.leptos_options;
        let site_root = leptos_options.site_root.clone().to_string();

        App::new()
            .wrap(SecurityHeaders::new(&site.api_base_url))
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .service(Files::new("/assets", &site_root))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {}
