//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod backend;
pub use backend::{load_config, make_service};

pub mod views;

mod shell;
pub use shell::{use_blog, Blog, BlogProvider};

mod banner;
pub use banner::Banner;

mod tag_list;
pub use tag_list::TagList;

mod post_card;
pub use post_card::PostCard;

mod post_gallery;
pub use post_gallery::PostGallery;

mod post_viewer;
pub use post_viewer::PostViewer;

mod post_editor;
pub use post_editor::PostEditor;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

pub mod activity_log;
pub use activity_log::{ActivityLog, LogLevel, log_activity, use_activity_log};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
