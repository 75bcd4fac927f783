use api::{DEFAULT_TAG_COLOR, TAG_COLORS};
use dioxus::prelude::*;

use crate::feedback::ErrorBanner;

/// Form for a new tag: a name and one of the palette colors.
///
/// Submits `(title, color)`. The dialog stays open while `busy` and shows
/// `error` until the caller closes it.
#[component]
pub fn TagDialog(
    busy: bool,
    error: Option<String>,
    on_submit: EventHandler<(String, String)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut title = use_signal(String::new);
    let mut color = use_signal(|| DEFAULT_TAG_COLOR.to_string());

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy {
            return;
        }
        on_submit.call((title(), color()));
    };

    rsx! {
        form {
            class: "dialog",
            onsubmit: submit,
            h2 { "New tag" }

            label { r#for: "tag-title", "Name" }
            input {
                id: "tag-title",
                r#type: "text",
                placeholder: "work",
                value: title(),
                oninput: move |evt| title.set(evt.value()),
            }

            label { r#for: "tag-color", "Color" }
            div {
                class: "tag-color-row",
                span { class: "tag-dot", style: "background: {color}" }
                select {
                    id: "tag-color",
                    value: color(),
                    onchange: move |evt| color.set(evt.value()),
                    for (name, hex) in TAG_COLORS {
                        option { key: "{hex}", value: "{hex}", "{name}" }
                    }
                }
            }

            ErrorBanner { message: error }

            div {
                class: "dialog-actions",
                button { class: "btn primary", r#type: "submit", disabled: busy,
                    if busy { "Saving..." } else { "Add tag" }
                }
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
