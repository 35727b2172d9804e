use dioxus::prelude::*;

use crate::views::ModalOverlay;

/// Yes/cancel prompt stacked above the viewer. The backdrop counts as cancel.
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "Yes".to_string())] confirm_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            card_class: "modal-card--narrow confirm-dialog",
            raised: true,
            p { "{message}" }
            div {
                class: "button-group",
                button {
                    r#type: "button",
                    class: "btn btn-danger",
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
                button {
                    r#type: "button",
                    class: "btn btn-muted",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
