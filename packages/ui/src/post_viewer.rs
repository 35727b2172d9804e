use dioxus::prelude::*;
use store::Post;

use crate::views::{CloseButton, ModalOverlay};
use crate::TagList;

/// Read-only detail of one post with edit and delete entry points.
#[component]
pub fn PostViewer(
    post: Post,
    on_close: EventHandler<()>,
    on_edit: EventHandler<()>,
    on_delete: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            card_class: "post-viewer",
            CloseButton { on_close: move |_| on_close.call(()) }
            h2 { class: "post-viewer-title", "{post.title}" }
            small { class: "post-date", "{post.date}" }
            TagList { tags: post.tags.clone() }
            p { class: "post-content", "{post.content}" }
            for (index, code) in post.code_sections.iter().enumerate() {
                div {
                    key: "{index}",
                    div { class: "code-label", "Code:" }
                    pre { class: "code-block", "{code}" }
                }
            }
            div {
                class: "button-group",
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    onclick: move |_| on_edit.call(()),
                    "Edit"
                }
                button {
                    r#type: "button",
                    class: "btn btn-danger",
                    onclick: move |_| on_delete.call(()),
                    "Delete"
                }
            }
        }
    }
}
