use dioxus::prelude::*;
use store::{Post, PostId, Submission};

use crate::{use_blog, ConfirmDialog, PostCard, PostEditor, PostViewer};

/// Grid of summary cards for every post in the store, plus the overlays for
/// the selected post (viewer, edit form, delete confirmation).
#[component]
pub fn PostGallery() -> Element {
    let blog = use_blog();
    let mut modal = blog.modal;

    let excerpt_chars = blog.config.read().gallery.excerpt_chars;
    let posts: Vec<Post> = blog.store.read().posts().to_vec();
    let state = modal();
    let selected: Option<Post> = state
        .selected()
        .and_then(|id| blog.store.read().get(id).cloned());

    rsx! {
        div {
            class: "post-gallery",
            if posts.is_empty() {
                p { class: "post-gallery-empty", "No blog posts available" }
            }
            for post in posts {
                PostCard {
                    key: "{post.id}",
                    post: post.clone(),
                    excerpt_chars,
                    on_select: move |id: PostId| {
                        modal.write().open_post(id);
                    },
                }
            }
        }

        if let Some(post) = selected {
            PostViewer {
                post: post.clone(),
                on_close: move |_| {
                    modal.write().close();
                },
                on_edit: move |_| {
                    modal.write().start_edit();
                },
                on_delete: move |_| {
                    modal.write().request_delete();
                },
            }
            if state.is_editing() {
                PostEditor {
                    key: "{post.id}",
                    editing: Some(post.clone()),
                    on_submit: move |submission: Submission| {
                        // Back to the viewer before the request goes out
                        modal.write().finish_edit();
                        spawn(blog.submit(submission));
                    },
                    on_close: move |_| {
                        modal.write().finish_edit();
                    },
                }
            }
            if state.is_confirming_delete() {
                ConfirmDialog {
                    message: "Are you sure you want to delete this blog post?",
                    confirm_label: "Yes, Delete",
                    on_confirm: move |_| {
                        let id = modal.write().confirm_delete();
                        if let Some(id) = id {
                            spawn(blog.delete(id));
                        }
                    },
                    on_cancel: move |_| {
                        modal.write().cancel_delete();
                    },
                }
            }
        }
    }
}
