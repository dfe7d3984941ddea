//! Page templates for both site layouts.

mod composer;
mod generic;
mod home;
mod not_found;
mod projects;
mod single_page;

pub use composer::PageComposer;
pub use generic::GenericPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use projects::ProjectsPage;
pub use single_page::SinglePageLayout;
