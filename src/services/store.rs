use std::collections::BTreeMap;

use crate::api::SiteApi;
use crate::common::ApiError;
use crate::models::{Page, Project, SiteSettings, visible_projects};

/// Client-side cache of everything the site renders. Always replaced
/// wholesale by `reload`; there are no incremental updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentStore {
    pages: BTreeMap<String, Page>,
    projects: Vec<Project>,
    settings: SiteSettings,
    loaded: bool,
}

impl ContentStore {
    pub async fn load<A: SiteApi>(api: &A) -> Result<Self, ApiError> {
        let mut store = Self::default();
        store.reload(api).await?;
        Ok(store)
    }

    /// Re-fetches pages, projects and settings. On a page or project
    /// failure the current contents are left untouched. Settings fall back
    /// to defaults.
    pub async fn reload<A: SiteApi>(&mut self, api: &A) -> Result<(), ApiError> {
        let pages = api.list_pages().await?;
        let projects = api.list_projects().await?;

        let settings = match api.get_settings().await {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Settings unavailable, using defaults: {}", e);
                SiteSettings::default()
            }
        };

        self.replace_pages(pages);
        self.projects = projects;
        self.settings = settings;
        self.loaded = true;

        log::info!(
            "Content reloaded: {} pages, {} projects",
            self.pages.len(),
            self.projects.len()
        );

        Ok(())
    }

    /// Indexes pages by their own `page_name`.
    pub fn replace_pages(&mut self, pages: Vec<Page>) {
        self.pages = pages
            .into_iter()
            .map(|page| (page.page_name.clone(), page))
            .collect();
    }

    pub fn replace_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
    }

    pub fn replace_settings(&mut self, settings: SiteSettings) {
        self.settings = settings;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn contains_page(&self, page_name: &str) -> bool {
        self.pages.contains_key(page_name)
    }

    pub fn page(&self, page_name: &str) -> Option<&Page> {
        self.pages.get(page_name)
    }

    pub fn published_page(&self, page_name: &str) -> Option<&Page> {
        self.page(page_name).filter(|page| page.is_published)
    }

    /// All pages, published or not, by name.
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.values()
    }

    pub fn published_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages().filter(|page| page.is_published)
    }

    /// Every project as fetched, for the admin panel.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: uuid::Uuid) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn visible_projects(&self) -> Vec<&Project> {
        visible_projects(&self.projects)
    }

    /// Next free `order` value for a new project.
    pub fn next_project_order(&self) -> i32 {
        self.projects.iter().map(|p| p.order).max().map_or(1, |max| max + 1)
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }
}
