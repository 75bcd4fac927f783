//! # Tasks
//!
//! [`Task`] is the entity the client caches and renders. The service is loose
//! about what it sends back (MongoDB `_id` instead of `id`, create and update
//! answers that may omit fields), so responses are first decoded into a
//! [`TaskRecord`] with every field optional and then turned into a [`Task`]:
//!
//! - [`TaskRecord::into_task`] for listed tasks, which must carry an identifier;
//! - [`TaskRecord::into_created`] for create answers, falling back to the submitted [`NewTask`];
//! - [`TaskRecord::over`] for update answers, falling back to the expected result of the update.

use serde::{Deserialize, Serialize};

/// Number of content characters shown on a task card.
pub const PREVIEW_CHARS: usize = 100;

/// A to-do item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

impl Task {
    /// Content cut to [`PREVIEW_CHARS`] characters, with `...` appended when cut.
    pub fn preview(&self) -> String {
        if self.content.chars().count() > PREVIEW_CHARS {
            let cut: String = self.content.chars().take(PREVIEW_CHARS).collect();
            format!("{cut}...")
        } else {
            self.content.clone()
        }
    }

    /// This task with `edit` applied.
    pub fn edited(&self, edit: &TaskEdit) -> Task {
        Task {
            title: edit.title.clone(),
            content: edit.content.clone(),
            tag_id: edit.tag_id.clone(),
            ..self.clone()
        }
    }

    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tag_id.as_deref() == Some(tag_id)
    }
}

/// Body of `POST /v1/tasks`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<String>,
    pub user_id: String,
}

impl NewTask {
    pub fn new(user_id: &str, title: &str, content: &str, tag_id: Option<String>) -> Self {
        Self {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            tag_id: tag_id.filter(|t| !t.is_empty()),
            user_id: user_id.to_string(),
        }
    }
}

/// Body of `PUT /v1/tasks/:id`. A `None` tag clears the task's tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskEdit {
    pub title: String,
    pub content: String,
    pub tag_id: Option<String>,
}

impl TaskEdit {
    pub fn new(title: &str, content: &str, tag_id: Option<String>) -> Self {
        Self {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            tag_id: tag_id.filter(|t| !t.is_empty()),
        }
    }
}

/// A task as the service sends it.
#[derive(Debug, Default, Deserialize)]
pub struct TaskRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "_id")]
    pub mongo_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tag_id: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
}

impl TaskRecord {
    fn id(&self) -> Option<String> {
        self.id
            .clone()
            .or_else(|| self.mongo_id.clone())
            .filter(|id| !id.is_empty())
    }

    /// Convert a listed task. `None` when the record has no identifier.
    pub fn into_task(self) -> Option<Task> {
        let id = self.id()?;
        Some(self.over(Task {
            id,
            ..Task::default()
        }))
    }

    /// Convert a create response, taking missing fields from the submitted body.
    pub fn into_created(self, submitted: &NewTask) -> Option<Task> {
        let id = self.id()?;
        Some(self.over(Task {
            id,
            title: submitted.title.clone(),
            content: submitted.content.clone(),
            tag_id: submitted.tag_id.clone(),
            completed: false,
            user_id: Some(submitted.user_id.clone()),
            bg_color: None,
            text_color: None,
        }))
    }

    /// Every field present in the record replaces the one in `base`. The
    /// identifier always stays `base.id`.
    pub fn over(self, base: Task) -> Task {
        Task {
            id: base.id,
            title: self.title.unwrap_or(base.title),
            content: self.content.unwrap_or(base.content),
            tag_id: self.tag_id.filter(|t| !t.is_empty()).or(base.tag_id),
            completed: self.completed.unwrap_or(base.completed),
            user_id: self.user_id.or(base.user_id),
            bg_color: self.bg_color.or(base.bg_color),
            text_color: self.text_color.or(base.text_color),
        }
    }
}
