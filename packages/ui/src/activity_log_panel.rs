use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, LogLevel};

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

fn level_class(level: &LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "activity-entry error",
        LogLevel::Warning => "activity-entry warning",
        LogLevel::Success => "activity-entry success",
        LogLevel::Info => "activity-entry info",
    }
}

/// Floating list of recent request outcomes, newest first.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();

    if !log.read().visible {
        return rsx! {};
    }

    let entries = log.read().entries.clone();

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        aside {
            class: "activity-panel",
            header {
                class: "activity-panel-header",
                span { "Activity" }
                button { onclick: move |_| log.write().entries.clear(), "Clear" }
                button { onclick: move |_| log.write().visible = false, "Close" }
            }
            if entries.is_empty() {
                p { class: "activity-empty", "Nothing yet." }
            }
            ul {
                class: "activity-entries",
                for (i, entry) in entries.iter().enumerate().rev() {
                    li {
                        key: "{i}",
                        class: level_class(&entry.level),
                        time { "{entry.timestamp}" }
                        span { "{entry.message}" }
                    }
                }
            }
        }
    }
}

/// Header button opening the activity panel; shows how many requests failed.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let errors = log.read().error_count();

    rsx! {
        button {
            class: if errors > 0 { "activity-toggle has-errors" } else { "activity-toggle" },
            title: "Activity log",
            onclick: move |_| {
                let visible = log.read().visible;
                log.write().visible = !visible;
            },
            if errors > 0 {
                "Activity ({errors})"
            } else {
                "Activity"
            }
        }
    }
}
