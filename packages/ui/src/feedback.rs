use dioxus::prelude::*;

/// Inline error message. Renders nothing when `message` is `None`.
#[component]
pub fn ErrorBanner(message: Option<String>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };
    rsx! {
        div {
            class: "error-banner",
            role: "alert",
            "{message}"
        }
    }
}

/// Thin animated bar shown while a request is in flight.
#[component]
pub fn LoadingBar(active: bool) -> Element {
    rsx! {
        div {
            class: if active { "loading-bar active" } else { "loading-bar" },
            aria_busy: "{active}",
        }
    }
}
