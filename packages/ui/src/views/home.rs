use dioxus::prelude::*;
use store::Submission;

use crate::{use_blog, ActivityLogPanel, Banner, PostEditor, PostGallery};

const BLOG_CSS: Asset = asset!("/assets/blog.css");

/// The single page of the app: banner, gallery, create form and activity log.
///
/// Must be rendered inside [`crate::BlogProvider`].
#[component]
pub fn HomeView() -> Element {
    let blog = use_blog();
    let mut modal = blog.modal;
    let creating = modal.read().is_creating();

    rsx! {
        document::Stylesheet { href: BLOG_CSS }
        div {
            class: "blog-app",
            Banner {}
            if creating {
                PostEditor {
                    editing: None,
                    on_submit: move |submission: Submission| {
                        // Close the form before the request goes out
                        modal.write().close();
                        spawn(blog.submit(submission));
                    },
                    on_close: move |_| {
                        modal.write().close();
                    },
                }
            }
            PostGallery {}
            ActivityLogPanel {}
        }
    }
}
