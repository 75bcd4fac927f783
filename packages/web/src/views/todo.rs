//! The task board: tag sidebar, filtered task grid and the create/edit dialogs.
//!
//! Both caches live in signals owned by this view. Every mutation goes through
//! a store call first; only the returned change is applied, so a failed request
//! never alters what is shown.

use api::Task;
use dioxus::prelude::*;
use store::{InFlight, TagCache, TaskCache, TaskFilter};
use ui::{
    log_activity, tag_store, task_store, use_activity_log, use_session, ActivityLogToggle,
    ErrorBanner, LoadingBar, LogLevel, LogoutButton, ModalOverlay, TagDialog, TagSidebar,
    TaskCard, TaskDialog, TaskDraft,
};

use crate::Route;

/// Which task form is open.
#[derive(Clone, Debug, PartialEq)]
enum TaskForm {
    New,
    Edit(Task),
}

impl TaskForm {
    fn editing(&self) -> Option<Task> {
        match self {
            TaskForm::New => None,
            TaskForm::Edit(task) => Some(task.clone()),
        }
    }
}

#[component]
pub fn Todo() -> Element {
    let nav = use_navigator();
    let session = use_session();
    let mut activity = use_activity_log();

    let mut tags = use_signal(TagCache::new);
    let mut tasks = use_signal(TaskCache::new);
    let mut filter = use_signal(TaskFilter::default);
    let mut loading = use_signal(|| false);
    let mut load_error = use_signal(|| Option::<String>::None);
    // tasks with a toggle or delete in flight
    let mut busy_tasks = use_signal(InFlight::default);

    let mut task_form = use_signal(|| Option::<TaskForm>::None);
    let mut show_tag_form = use_signal(|| false);
    let mut form_busy = use_signal(|| false);
    let mut form_error = use_signal(|| Option::<String>::None);

    let _tag_loader = use_resource(move || async move {
        let Some(store) = tag_store(&session()) else {
            return;
        };
        match store.load().await {
            Ok(change) => tags.write().apply(change),
            Err(err) => log_activity(
                &mut activity,
                LogLevel::Error,
                &format!("Could not load tags: {}", err.user_message()),
            ),
        }
    });

    // Re-fetch only when the tag selection changes; hide-completed is local.
    let query = use_memo(move || filter.read().query());
    let _task_loader = use_resource(move || async move {
        let query = query();
        let Some(store) = task_store(&session()) else {
            return;
        };
        loading.set(true);
        let result = store.load(&query).await;
        loading.set(false);
        match result {
            Ok(change) => {
                tasks.write().apply(change);
                load_error.set(None);
            }
            Err(err) => {
                let message = err.user_message();
                log_activity(
                    &mut activity,
                    LogLevel::Error,
                    &format!("Could not load tasks: {message}"),
                );
                load_error.set(Some(message));
            }
        }
    });

    if !session.read().is_signed_in() {
        nav.replace(Route::Login {
            email: String::new(),
        });
        return rsx! {};
    }

    let on_toggle = move |task: Task| {
        let Some(store) = task_store(&session.read()) else {
            return;
        };
        if !busy_tasks.write().begin(&task.id) {
            return;
        }
        spawn(async move {
            match store.toggle_completed(&task).await {
                Ok(change) => {
                    tasks.write().apply(change);
                    let state = if task.completed { "open" } else { "done" };
                    log_activity(
                        &mut activity,
                        LogLevel::Success,
                        &format!("Marked \"{}\" {state}", task.title),
                    );
                }
                Err(err) => log_activity(
                    &mut activity,
                    LogLevel::Error,
                    &format!("Could not update \"{}\": {}", task.title, err.user_message()),
                ),
            }
            busy_tasks.write().finish(&task.id);
        });
    };

    let on_delete = move |task: Task| {
        let Some(store) = task_store(&session.read()) else {
            return;
        };
        if !busy_tasks.write().begin(&task.id) {
            return;
        }
        spawn(async move {
            match store.delete(&task.id).await {
                Ok(change) => {
                    tasks.write().apply(change);
                    log_activity(
                        &mut activity,
                        LogLevel::Success,
                        &format!("Deleted \"{}\"", task.title),
                    );
                }
                Err(err) => log_activity(
                    &mut activity,
                    LogLevel::Error,
                    &format!("Could not delete \"{}\": {}", task.title, err.user_message()),
                ),
            }
            busy_tasks.write().finish(&task.id);
        });
    };

    let on_task_submit = move |draft: TaskDraft| {
        let Some(store) = task_store(&session.read()) else {
            return;
        };
        let editing = task_form().and_then(|form| form.editing());
        form_busy.set(true);
        form_error.set(None);
        spawn(async move {
            let result = match &editing {
                Some(task) => {
                    store
                        .update(task, &draft.title, &draft.content, draft.tag_id.clone())
                        .await
                }
                None => {
                    store
                        .create(&draft.title, &draft.content, draft.tag_id.clone())
                        .await
                }
            };
            form_busy.set(false);
            match result {
                Ok(change) => {
                    tasks.write().apply(change);
                    task_form.set(None);
                    let verb = if editing.is_some() { "Saved" } else { "Added" };
                    log_activity(
                        &mut activity,
                        LogLevel::Success,
                        &format!("{verb} \"{}\"", draft.title.trim()),
                    );
                }
                Err(err) => {
                    let message = err.user_message();
                    log_activity(&mut activity, LogLevel::Error, &format!("Task not saved: {message}"));
                    form_error.set(Some(message));
                }
            }
        });
    };

    let on_tag_submit = move |(title, color): (String, String)| {
        let Some(store) = tag_store(&session.read()) else {
            return;
        };
        form_busy.set(true);
        form_error.set(None);
        spawn(async move {
            let result = store.create(&title, &color).await;
            form_busy.set(false);
            match result {
                Ok(change) => {
                    tags.write().apply(change);
                    show_tag_form.set(false);
                    log_activity(
                        &mut activity,
                        LogLevel::Success,
                        &format!("Added tag \"{}\"", title.trim()),
                    );
                }
                Err(err) => {
                    let message = err.user_message();
                    log_activity(&mut activity, LogLevel::Error, &format!("Tag not saved: {message}"));
                    form_error.set(Some(message));
                }
            }
        });
    };

    let current = filter();
    let tag_list = tags.read().tags().to_vec();
    let visible = tasks.read().visible(&current);

    rsx! {
        div {
            class: "board",
            header {
                class: "board-header",
                h1 { "Todo board" }
                div {
                    class: "board-actions",
                    button {
                        class: "btn primary",
                        onclick: move |_| {
                            form_error.set(None);
                            task_form.set(Some(TaskForm::New));
                        },
                        "New task"
                    }
                    ActivityLogToggle {}
                    LogoutButton {
                        class: "btn",
                        on_logout: move |_| {
                            nav.replace(Route::Login { email: String::new() });
                        },
                    }
                }
            }

            LoadingBar { active: loading() }

            div {
                class: "board-body",
                TagSidebar {
                    tags: tag_list.clone(),
                    selected: current.tag_id.clone(),
                    hide_completed: current.hide_completed,
                    on_select: move |tag_id: String| filter.write().toggle_tag(&tag_id),
                    on_hide_completed: move |hide: bool| filter.write().hide_completed = hide,
                    on_new_tag: move |_| {
                        form_error.set(None);
                        show_tag_form.set(true);
                    },
                }

                main {
                    class: "board-main",
                    ErrorBanner { message: load_error() }

                    if visible.is_empty() && !loading() {
                        p { class: "board-empty", "No tasks to show" }
                    }

                    div {
                        class: "task-grid",
                        for task in visible {
                            TaskCard {
                                key: "{task.id}",
                                tag_color: tags.read().color_of(task.tag_id.as_deref()).to_string(),
                                busy: busy_tasks.read().contains(&task.id),
                                task: task.clone(),
                                on_toggle: on_toggle,
                                on_edit: move |task: Task| {
                                    form_error.set(None);
                                    task_form.set(Some(TaskForm::Edit(task)));
                                },
                                on_delete: on_delete,
                            }
                        }
                    }
                }
            }
        }

        if let Some(form) = task_form() {
            ModalOverlay {
                on_close: move |_| {
                    if !form_busy() {
                        task_form.set(None);
                    }
                },
                TaskDialog {
                    tags: tag_list.clone(),
                    editing: form.editing(),
                    busy: form_busy(),
                    error: form_error(),
                    on_submit: on_task_submit,
                    on_cancel: move |_| task_form.set(None),
                }
            }
        }

        if show_tag_form() {
            ModalOverlay {
                on_close: move |_| {
                    if !form_busy() {
                        show_tag_form.set(false);
                    }
                },
                TagDialog {
                    busy: form_busy(),
                    error: form_error(),
                    on_submit: on_tag_submit,
                    on_cancel: move |_| show_tag_form.set(false),
                }
            }
        }
    }
}
