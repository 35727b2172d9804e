use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking the backdrop triggers `on_close`.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    /// Extra class for the card, e.g. `"modal-card--narrow"`.
    #[props(default)]
    card_class: String,
    /// Stack above another open overlay.
    #[props(default)]
    raised: bool,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: if raised { "modal-overlay modal-overlay--raised" } else { "modal-overlay" },
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card {card_class}",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// The × button in the corner of a modal card.
#[component]
pub fn CloseButton(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "modal-close",
            title: "Close",
            onclick: move |_| on_close.call(()),
            Icon { icon: FaXmark, width: 16, height: 16 }
        }
    }
}
