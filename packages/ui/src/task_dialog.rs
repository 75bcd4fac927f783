use api::{Tag, Task};
use dioxus::prelude::*;

use crate::feedback::ErrorBanner;

/// What the task form submits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub content: String,
    pub tag_id: Option<String>,
}

impl TaskDraft {
    fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            content: task.content.clone(),
            tag_id: task.tag_id.clone(),
        }
    }
}

/// Create form, or edit form when `editing` holds a task.
#[component]
pub fn TaskDialog(
    tags: Vec<Tag>,
    editing: Option<Task>,
    busy: bool,
    error: Option<String>,
    on_submit: EventHandler<TaskDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let is_edit = editing.is_some();
    let mut draft = use_signal(move || editing.as_ref().map(TaskDraft::from_task).unwrap_or_default());

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy {
            return;
        }
        on_submit.call(draft());
    };

    let selected = draft.read().tag_id.clone();

    rsx! {
        form {
            class: "dialog",
            onsubmit: submit,
            h2 { if is_edit { "Edit task" } else { "New task" } }

            label { r#for: "task-title", "Title" }
            input {
                id: "task-title",
                r#type: "text",
                value: draft.read().title.clone(),
                oninput: move |evt| draft.write().title = evt.value(),
            }

            label { r#for: "task-content", "Description" }
            textarea {
                id: "task-content",
                rows: 5,
                value: draft.read().content.clone(),
                oninput: move |evt| draft.write().content = evt.value(),
            }

            if !tags.is_empty() {
                span { class: "dialog-label", "Tag" }
                div {
                    class: "tag-picker",
                    for tag in tags {
                        button {
                            key: "{tag.id}",
                            r#type: "button",
                            class: if selected.as_deref() == Some(tag.id.as_str()) { "tag-chip active" } else { "tag-chip" },
                            onclick: {
                                let id = tag.id.clone();
                                move |_| {
                                    let mut d = draft.write();
                                    // a second click clears the tag
                                    if d.tag_id.as_deref() == Some(id.as_str()) {
                                        d.tag_id = None;
                                    } else {
                                        d.tag_id = Some(id.clone());
                                    }
                                }
                            },
                            span { class: "tag-dot", style: "background: {tag.color}" }
                            "{tag.title}"
                        }
                    }
                }
            }

            ErrorBanner { message: error }

            div {
                class: "dialog-actions",
                button { class: "btn primary", r#type: "submit", disabled: busy,
                    if busy { "Saving..." } else if is_edit { "Save" } else { "Add task" }
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
