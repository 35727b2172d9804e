use dioxus::prelude::*;

use crate::{use_blog, ActivityLogToggle};

/// Page header with the blog title and the create button.
#[component]
pub fn Banner(#[props(default = "My Blog".to_string())] title: String) -> Element {
    let mut modal = use_blog().modal;

    rsx! {
        header {
            class: "banner",
            div { class: "banner-actions", ActivityLogToggle {} }
            h1 { class: "banner-title", "{title}" }
            button {
                r#type: "button",
                class: "banner-create",
                onclick: move |_| {
                    modal.write().start_create();
                },
                "Create New Blog"
            }
        }
    }
}
