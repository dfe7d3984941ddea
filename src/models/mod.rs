pub use content::*;
pub use media::*;
pub use page::*;
pub use project::*;
pub use settings::*;
pub use user::*;

mod content;
mod media;
mod page;
mod project;
mod settings;
pub mod timestamp;
mod user;
