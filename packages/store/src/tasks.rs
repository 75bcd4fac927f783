//! # Task store
//!
//! Three pieces, kept apart so each can be reasoned about on its own:
//!
//! - [`TaskStore`] issues requests for one signed-in user and reports what the
//!   service confirmed as a [`TaskChange`]. It never holds task state.
//! - [`TaskCache`] is the locally held list. [`TaskCache::apply`] is the single
//!   reconciliation step: a loaded list replaces the cache, a created task is
//!   appended, an updated task replaces the cached entity with the same id (and is
//!   dropped if that id is gone), a deleted id is removed.
//! - [`TaskFilter`] derives the visible list from the cache: optional tag
//!   selection and the hide-completed toggle. Service order is kept.
//!
//! Writes are write-through. The request goes out first and the cache only
//! changes once a change comes back, so a failed delete leaves the task visible
//! and a failed toggle leaves its checkbox where it was.

use std::collections::HashSet;

use api::{NewTask, Task, TaskEdit, TodoService};

use crate::error::StoreError;
use crate::session::SessionState;

/// Which tasks to fetch from the service.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TaskQuery {
    /// All tasks of the user.
    #[default]
    All,
    /// Only tasks carrying this tag, filtered by the service.
    Tag(String),
}

/// A server-confirmed change to the task list.
#[derive(Clone, Debug, PartialEq)]
pub enum TaskChange {
    Loaded(Vec<Task>),
    Created(Task),
    Updated(Task),
    Deleted(String),
}

/// What the task grid shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskFilter {
    /// Show only tasks carrying this tag.
    pub tag_id: Option<String>,
    /// Hide tasks whose completion flag is set.
    pub hide_completed: bool,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(tag_id) = &self.tag_id {
            if !task.has_tag(tag_id) {
                return false;
            }
        }
        !(self.hide_completed && task.completed)
    }

    /// Select `tag_id`, or clear the selection if it is already selected.
    pub fn toggle_tag(&mut self, tag_id: &str) {
        if self.tag_id.as_deref() == Some(tag_id) {
            self.tag_id = None;
        } else {
            self.tag_id = Some(tag_id.to_string());
        }
    }

    /// The fetch matching the current tag selection.
    pub fn query(&self) -> TaskQuery {
        match &self.tag_id {
            Some(tag_id) => TaskQuery::Tag(tag_id.clone()),
            None => TaskQuery::All,
        }
    }
}

/// Locally cached tasks, in service order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskCache {
    tasks: Vec<Task>,
}

impl TaskCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn apply(&mut self, change: TaskChange) {
        match change {
            TaskChange::Loaded(tasks) => self.tasks = tasks,
            TaskChange::Created(task) => match self.tasks.iter_mut().find(|t| t.id == task.id) {
                Some(existing) => *existing = task,
                None => self.tasks.push(task),
            },
            // An update for a task no longer cached (deleted meanwhile) is dropped.
            TaskChange::Updated(task) => {
                if let Some(existing) = self.tasks.iter_mut().find(|t| t.id == task.id) {
                    *existing = task;
                }
            }
            TaskChange::Deleted(task_id) => self.tasks.retain(|t| t.id != task_id),
        }
    }

    /// Tasks passing `filter`, in cache order.
    pub fn visible(&self, filter: &TaskFilter) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }
}

/// Ids of tasks with a request in flight. Each id is tracked on its own, so
/// one request finishing never releases another task.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InFlight {
    ids: HashSet<String>,
}

impl InFlight {
    /// Mark `task_id` busy. `false` if it already was.
    pub fn begin(&mut self, task_id: &str) -> bool {
        self.ids.insert(task_id.to_string())
    }

    pub fn finish(&mut self, task_id: &str) {
        self.ids.remove(task_id);
    }

    pub fn contains(&self, task_id: &str) -> bool {
        self.ids.contains(task_id)
    }
}

/// Task requests scoped to one user.
#[derive(Clone, Debug)]
pub struct TaskStore<S: TodoService> {
    service: S,
    user_id: String,
}

impl<S: TodoService> TaskStore<S> {
    pub fn new(service: S, user_id: impl Into<String>) -> Self {
        Self {
            service,
            user_id: user_id.into(),
        }
    }

    /// `None` when nobody is signed in: there is nothing to fetch.
    pub fn for_session(service: S, session: &SessionState) -> Option<Self> {
        session.user_id().map(|id| Self::new(service, id))
    }

    pub async fn load(&self, query: &TaskQuery) -> Result<TaskChange, StoreError> {
        let result = match query {
            TaskQuery::All => self.service.list_tasks(&self.user_id).await,
            TaskQuery::Tag(tag_id) => self.service.list_tasks_by_tag(tag_id).await,
        };
        let tasks = result.map_err(|e| {
            tracing::error!("Failed to fetch tasks: {}", e);
            e
        })?;
        tracing::debug!("Fetched {} task(s)", tasks.len());
        Ok(TaskChange::Loaded(tasks))
    }

    pub async fn create(
        &self,
        title: &str,
        content: &str,
        tag_id: Option<String>,
    ) -> Result<TaskChange, StoreError> {
        let task = NewTask::new(&self.user_id, title, content, tag_id);
        if task.title.is_empty() {
            return Err(title_required());
        }
        let created = self.service.create_task(&task).await.map_err(|e| {
            tracing::error!("Failed to create task: {}", e);
            e
        })?;
        tracing::info!("Created task {}", created.id);
        Ok(TaskChange::Created(created))
    }

    /// Replace title, content and tag of `task`.
    pub async fn update(
        &self,
        task: &Task,
        title: &str,
        content: &str,
        tag_id: Option<String>,
    ) -> Result<TaskChange, StoreError> {
        let edit = TaskEdit::new(title, content, tag_id);
        if edit.title.is_empty() {
            return Err(title_required());
        }
        let updated = self.service.update_task(task, &edit).await.map_err(|e| {
            tracing::error!("Failed to update task {}: {}", task.id, e);
            e
        })?;
        tracing::info!("Updated task {}", updated.id);
        Ok(TaskChange::Updated(updated))
    }

    pub async fn set_completed(
        &self,
        task: &Task,
        completed: bool,
    ) -> Result<TaskChange, StoreError> {
        let updated = self
            .service
            .set_completed(task, completed)
            .await
            .map_err(|e| {
                tracing::error!("Failed to set completion of task {}: {}", task.id, e);
                e
            })?;
        Ok(TaskChange::Updated(updated))
    }

    pub async fn toggle_completed(&self, task: &Task) -> Result<TaskChange, StoreError> {
        self.set_completed(task, !task.completed).await
    }

    pub async fn delete(&self, task_id: &str) -> Result<TaskChange, StoreError> {
        self.service.delete_task(task_id).await.map_err(|e| {
            tracing::error!("Failed to delete task {}: {}", task_id, e);
            e
        })?;
        tracing::info!("Deleted task {}", task_id);
        Ok(TaskChange::Deleted(task_id.to_string()))
    }
}

fn title_required() -> StoreError {
    StoreError::Validation("Title is required".to_string())
}
