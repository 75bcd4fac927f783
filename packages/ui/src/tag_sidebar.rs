use api::Tag;
use dioxus::prelude::*;

use crate::icons::FaPlus;
use crate::Icon;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// Tag list with the hide-completed switch.
///
/// Clicking the selected tag again clears the selection; the caller decides
/// that through [`store::TaskFilter::toggle_tag`].
#[component]
pub fn TagSidebar(
    tags: Vec<Tag>,
    selected: Option<String>,
    hide_completed: bool,
    on_select: EventHandler<String>,
    on_hide_completed: EventHandler<bool>,
    on_new_tag: EventHandler<()>,
) -> Element {
    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        nav {
            class: "sidebar",
            div {
                class: "sidebar-heading",
                span { "Tags" }
                button {
                    class: "sidebar-add",
                    title: "New tag",
                    onclick: move |_| on_new_tag.call(()),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                }
            }

            if tags.is_empty() {
                p { class: "sidebar-empty", "No tags yet" }
            }

            ul {
                class: "sidebar-tags",
                for tag in tags {
                    li {
                        key: "{tag.id}",
                        class: if selected.as_deref() == Some(tag.id.as_str()) { "sidebar-tag active" } else { "sidebar-tag" },
                        onclick: {
                            let id = tag.id.clone();
                            move |_| on_select.call(id.clone())
                        },
                        span { class: "tag-dot", style: "background: {tag.color}" }
                        span { "{tag.title}" }
                    }
                }
            }

            label {
                class: "sidebar-toggle",
                input {
                    r#type: "checkbox",
                    checked: hide_completed,
                    onchange: move |evt| on_hide_completed.call(evt.checked()),
                }
                "Hide done tasks"
            }
        }
    }
}
