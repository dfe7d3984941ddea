use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpApi;
use crate::config::SiteConfig;
use crate::frontend::browser::BrowserTokenStore;
use crate::services::{ContentStore, Session, SessionGuard};

/// Everything the UI shares, provided once at the root.
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub config: StoredValue<SiteConfig>,
    pub api: StoredValue<HttpApi>,
    pub store: RwSignal<ContentStore>,
    pub session: RwSignal<SessionGuard<BrowserTokenStore>>,
    pub load_error: RwSignal<Option<String>>,
    pub admin_open: RwSignal<bool>,
    pub login_open: RwSignal<bool>,
}

impl SiteContext {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            api: StoredValue::new(HttpApi::new(config.api_base_url.clone())),
            config: StoredValue::new(config),
            store: RwSignal::new(ContentStore::default()),
            session: RwSignal::new(SessionGuard::restore(BrowserTokenStore)),
            load_error: RwSignal::new(None),
            admin_open: RwSignal::new(false),
            login_open: RwSignal::new(false),
        }
    }

    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }

    /// Snapshot of the verified session, untracked.
    pub fn session_snapshot(&self) -> Session {
        self.session.with_untracked(|guard| guard.session().clone())
    }

    /// Tracked: admin affordances re-render when the session changes.
    pub fn is_admin(&self) -> bool {
        self.session.with(|guard| guard.is_admin())
    }

    /// Full re-fetch of pages, projects and settings.
    pub fn reload(&self) {
        let ctx = *self;
        spawn_local(async move {
            let api = ctx.api();
            let mut store = ctx.store.get_untracked();

            match store.reload(&api).await {
                Ok(()) => {
                    ctx.store.set(store);
                    ctx.load_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load site content: {}", e);
                    ctx.load_error.set(Some(e.to_string()));
                }
            }
        });
    }

    /// Re-verifies the persisted token against the backend.
    pub fn refresh_session(&self) {
        let ctx = *self;
        spawn_local(async move {
            let api = ctx.api();
            let mut guard = ctx.session.get_untracked();
            if !guard.has_token() {
                return;
            }

            guard.refresh(&api).await;
            ctx.session.set(guard);
        });
    }

    /// Signs out and closes every admin surface.
    pub fn logout(&self) {
        self.session.update(|guard| guard.logout());
        self.admin_open.set(false);
        self.login_open.set(false);
    }
}

pub fn use_site() -> SiteContext {
    expect_context::<SiteContext>()
}
