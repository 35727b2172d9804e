use dioxus::prelude::*;
use store::Tags;

/// Read-only row of tag pills.
#[component]
pub fn TagList(tags: Tags) -> Element {
    if tags.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "tag-list",
            for tag in tags.iter() {
                span { key: "{tag}", class: "tag", "{tag}" }
            }
        }
    }
}
