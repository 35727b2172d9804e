use dioxus::prelude::*;

use crate::Route;

pub use ui::views::HomeView as Home;

/// Unknown paths land back on the gallery.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    nav.replace(Route::Home {});
    rsx! {}
}
