//! Path resolution for the multi-page layout.

use crate::models::HOME_PAGE;
use crate::services::store::ContentStore;

pub const PROJECTS_PATH: &str = "/projects";

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Route {
    Home,
    Projects,
    /// A published page other than home, by `page_name`.
    Generic(String),
    NotFound,
}

/// Maps a url path to a page template. Unknown and unpublished pages, and
/// any nested path, resolve to `NotFound`.
pub fn resolve(path: &str, store: &ContentStore) -> Route {
    let trimmed = path.trim_matches('/');

    match trimmed {
        "" => Route::Home,
        "projects" => Route::Projects,
        name if name.contains('/') => Route::NotFound,
        name => match store.published_page(name) {
            Some(page) if page.page_name == HOME_PAGE => Route::Home,
            Some(page) => Route::Generic(page.page_name.clone()),
            None => Route::NotFound,
        },
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Home, Projects, then every other published page.
pub fn nav_links(store: &ContentStore) -> Vec<NavLink> {
    let mut links = vec![
        NavLink {
            label: "Home".to_string(),
            href: "/".to_string(),
        },
        NavLink {
            label: "Projects".to_string(),
            href: PROJECTS_PATH.to_string(),
        },
    ];

    links.extend(
        store
            .published_pages()
            .filter(|page| !page.is_home())
            .map(|page| NavLink {
                label: page.title.clone(),
                href: format!("/{}", page.page_name),
            }),
    );

    links
}

/// Whether `href` is the link for the route at `path`.
pub fn is_current(href: &str, path: &str) -> bool {
    href.trim_end_matches('/') == path.trim_end_matches('/')
}
