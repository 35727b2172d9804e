pub mod blog_store;
pub mod config;
pub mod draft;
pub mod modal;
pub mod models;
pub mod repo;

mod memory;
pub use memory::MemoryBackend;

pub use blog_store::{BlogStore, Change};
pub use config::BlogConfig;
pub use draft::{split_tag_input, DraftError, PostDraft, Submission};
pub use modal::Modal;
pub use models::{today_display, CodeSections, NewPost, Post, PostId, Tags};
pub use repo::{BackendError, BlogBackend, BlogService};
