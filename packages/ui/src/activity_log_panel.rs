use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, LogEntry, LogLevel};
use crate::icons::{FaListUl, FaTriangleExclamation, FaXmark};
use crate::Icon;

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

fn level_class(level: &LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "activity-log-entry error",
        LogLevel::Warning => "activity-log-entry warning",
        LogLevel::Success => "activity-log-entry success",
        LogLevel::Info => "activity-log-entry info",
    }
}

/// Floating panel listing backend calls, newest first.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log().visible {
        return rsx! {};
    }

    let entries: Vec<LogEntry> = log().entries.iter().rev().cloned().collect();

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        div {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                span { "Backend activity" }
                div {
                    class: "activity-log-header-actions",
                    button {
                        disabled: entries.is_empty(),
                        onclick: move |_| log.write().entries.clear(),
                        "Clear"
                    }
                    button {
                        title: "Close",
                        onclick: move |_| log.write().visible = false,
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
            div {
                class: "activity-log-entries",
                if entries.is_empty() {
                    div { class: "activity-log-empty", "Nothing yet" }
                }
                for (index, entry) in entries.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: level_class(&entry.level),
                        span { class: "activity-log-time", "{entry.timestamp}" }
                        span { " {entry.message}" }
                    }
                }
            }
        }
    }
}

/// Banner button that shows or hides the [`ActivityLogPanel`].
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let has_errors = log().has_errors();

    rsx! {
        button {
            class: if has_errors { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            title: "Backend activity",
            onclick: move |_| {
                let visible = log().visible;
                log.write().visible = !visible;
            },
            if has_errors {
                Icon { icon: FaTriangleExclamation, width: 14, height: 14 }
            } else {
                Icon { icon: FaListUl, width: 14, height: 14 }
            }
        }
    }
}
