//! Reusable UI components for the lab site.

mod admin;
mod alert;
mod button;
mod footer;
mod hero;
mod input;
mod login_modal;
mod modal;
mod nav;
mod project_card;
mod sections;

pub use admin::AdminPanel;
pub use alert::{Alert, AlertVariant, ErrorAlert, WarningAlert};
pub use button::{Button, ButtonVariant};
pub use footer::{ContactDetails, Footer};
pub use hero::PageHero;
pub use input::{Checkbox, PasswordInput, TextArea, TextInput};
pub use login_modal::LoginModal;
pub use modal::Modal;
pub use nav::{Nav, SectionNav};
pub use project_card::{ProjectCard, ProjectList};
pub use sections::SectionList;
