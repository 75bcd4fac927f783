use api::Task;
use dioxus::prelude::*;

use crate::icons::FaEllipsisVertical;
use crate::Icon;

/// One task in the grid: title, content preview, tag color and done checkbox.
#[component]
pub fn TaskCard(
    task: Task,
    tag_color: String,
    busy: bool,
    on_toggle: EventHandler<Task>,
    on_edit: EventHandler<Task>,
    on_delete: EventHandler<Task>,
) -> Element {
    let mut menu_open = use_signal(|| false);

    let style = match (&task.bg_color, &task.text_color) {
        (Some(bg), Some(fg)) => format!("background: {bg}; color: {fg}"),
        (Some(bg), None) => format!("background: {bg}"),
        (None, Some(fg)) => format!("color: {fg}"),
        (None, None) => String::new(),
    };
    let preview = task.preview();

    let toggle_task = task.clone();
    let edit_task = task.clone();
    let delete_task = task.clone();

    rsx! {
        article {
            class: if task.completed { "task-card done" } else { "task-card" },
            style: "{style}",
            header {
                class: "task-card-header",
                span { class: "tag-dot", style: "background: {tag_color}" }
                h3 { "{task.title}" }
                button {
                    class: "task-menu-button",
                    title: "Task actions",
                    onclick: move |_| menu_open.set(!menu_open()),
                    Icon { icon: FaEllipsisVertical, width: 14, height: 14 }
                }
                if menu_open() {
                    div {
                        class: "task-menu",
                        button {
                            disabled: busy,
                            onclick: move |_| {
                                menu_open.set(false);
                                on_edit.call(edit_task.clone());
                            },
                            "Edit"
                        }
                        button {
                            class: "danger",
                            disabled: busy,
                            onclick: move |_| {
                                menu_open.set(false);
                                on_delete.call(delete_task.clone());
                            },
                            "Delete"
                        }
                    }
                }
            }
            p { class: "task-preview", "{preview}" }
            label {
                class: "task-done",
                input {
                    r#type: "checkbox",
                    checked: task.completed,
                    disabled: busy,
                    onchange: move |_| on_toggle.call(toggle_task.clone()),
                }
                "Done"
            }
        }
    }
}
