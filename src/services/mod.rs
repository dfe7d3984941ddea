pub use editor::{
    AdminEditor, DeleteTarget, NewPageForm, PageDraft, PendingDelete, ProjectDraft,
    SettingsDraft, Validity, WriteMode, slugify,
};
pub use renderer::{Card, Section, render_sections};
pub use routing::{NavLink, Route, nav_links, resolve};
pub use scroll::{ScrollTracker, SectionId, SectionSpan};
pub use session::{MemoryTokenStore, Session, SessionGuard, TokenStore};
pub use store::ContentStore;

pub mod editor;
pub mod renderer;
pub mod routing;
pub mod scroll;
pub mod session;
pub mod store;
