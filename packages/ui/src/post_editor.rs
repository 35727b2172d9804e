use dioxus::prelude::*;
use store::{today_display, DraftError, Post, PostDraft, Submission};

use crate::icons::FaXmark;
use crate::views::{CloseButton, ModalOverlay};
use crate::Icon;

/// Create/edit form for a post.
///
/// With `editing` set, every field starts from that post and the submission
/// keeps its id and date. Without it the form starts empty and the submission
/// is stamped with today's date.
#[component]
pub fn PostEditor(
    editing: Option<Post>,
    on_submit: EventHandler<Submission>,
    on_close: EventHandler<()>,
) -> Element {
    let mut draft = use_signal({
        let initial = editing.as_ref().map(PostDraft::from_post).unwrap_or_default();
        move || initial
    });
    let mut tag_input = use_signal(String::new);
    let mut error = use_signal(|| Option::<DraftError>::None);

    let (heading, submit_label) = if editing.is_some() {
        ("Edit Blog Post", "Save Changes")
    } else {
        ("Create a New Blog Post", "Add Blog Post")
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match draft().submit(editing.as_ref(), &today_display()) {
            Ok(submission) => {
                error.set(None);
                on_submit.call(submission);
            }
            Err(e) => error.set(Some(e)),
        }
    };

    let mut commit_typed_tag = move || {
        let text = tag_input();
        draft.write().commit_tag(&text);
        tag_input.set(String::new());
    };

    let current = draft();
    let tags: Vec<String> = current.tags.iter().map(str::to_string).collect();
    let sections: Vec<String> = current.code_sections.iter().map(str::to_string).collect();
    let has_sections = !sections.is_empty();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            card_class: "post-editor",
            CloseButton { on_close: move |_| on_close.call(()) }
            h2 { class: "post-editor-title", "{heading}" }
            form {
                onsubmit: handle_submit,
                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Title",
                    required: true,
                    value: "{current.title}",
                    oninput: move |evt: FormEvent| {
                        draft.write().title = evt.value();
                    },
                }
                input {
                    class: "form-input tag-input",
                    r#type: "text",
                    placeholder: "Enter tags and press Enter",
                    value: "{tag_input}",
                    oninput: move |evt: FormEvent| {
                        // Typed commas are caught on keydown; this only sees pasted ones.
                        let value = evt.value();
                        let rest = draft.write().absorb_tag_input(&value).to_string();
                        tag_input.set(rest);
                    },
                    onkeydown: move |evt: KeyboardEvent| match evt.key() {
                        Key::Enter => {
                            evt.prevent_default();
                            commit_typed_tag();
                        }
                        Key::Character(c) if c == "," => {
                            evt.prevent_default();
                            commit_typed_tag();
                        }
                        _ => {}
                    },
                }
                div {
                    class: "tag-list tag-list--editable",
                    for tag in tags {
                        span {
                            key: "{tag}",
                            class: "tag tag--removable",
                            "{tag}"
                            button {
                                r#type: "button",
                                class: "tag-remove",
                                title: "Remove tag",
                                onclick: {
                                    let tag = tag.clone();
                                    move |_| {
                                        draft.write().tags.remove(&tag);
                                    }
                                },
                                Icon { icon: FaXmark, width: 10, height: 10 }
                            }
                        }
                    }
                }
                textarea {
                    class: "form-input content-input",
                    placeholder: "Content",
                    required: true,
                    value: "{current.content}",
                    oninput: move |evt: FormEvent| {
                        draft.write().content = evt.value();
                    },
                }
                div {
                    class: "code-sections",
                    for (index, code) in sections.into_iter().enumerate() {
                        textarea {
                            key: "{index}",
                            class: "form-input code-input",
                            placeholder: "Enter code here",
                            value: "{code}",
                            oninput: move |evt: FormEvent| {
                                draft.write().code_sections.set(index, evt.value());
                            },
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: if has_sections { "btn btn-block btn-danger" } else { "btn btn-block btn-primary" },
                    onclick: move |_| draft.write().code_sections.toggle(),
                    if has_sections { "Remove Code Section" } else { "Add Code Section" }
                }
                if has_sections {
                    button {
                        r#type: "button",
                        class: "btn btn-block btn-outline",
                        onclick: move |_| draft.write().code_sections.push_empty(),
                        "Add Another Code Section"
                    }
                }
                if let Some(e) = error() {
                    p { class: "form-error", "{e}" }
                }
                button {
                    r#type: "submit",
                    class: "btn btn-block btn-success",
                    "{submit_label}"
                }
            }
        }
    }
}
