use dioxus::prelude::*;
use store::{Post, PostId};

use crate::TagList;

/// Gallery summary of one post. Clicking it selects the post.
#[component]
pub fn PostCard(post: Post, excerpt_chars: usize, on_select: EventHandler<PostId>) -> Element {
    let id = post.id.clone();
    let excerpt = post.excerpt(excerpt_chars);

    rsx! {
        div {
            class: "post-card",
            onclick: move |_| on_select.call(id.clone()),
            h3 { class: "post-card-title", "{post.title}" }
            small { class: "post-date", "{post.date}" }
            TagList { tags: post.tags.clone() }
            p { class: "post-card-excerpt", "{excerpt}" }
        }
    }
}
