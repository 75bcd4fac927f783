//! In-memory TodoService used by the store tests.

use std::sync::{Arc, Mutex, MutexGuard};

use api::{
    ApiError, Credentials, LoginGrant, NewTag, NewTask, NewUser, Tag, Task, TaskEdit, TodoService,
};

#[derive(Default)]
struct State {
    users: Vec<(String, String, String)>,
    tags: Vec<Tag>,
    tasks: Vec<Task>,
    next_id: u32,
    fail_next: Option<ApiError>,
    requests: usize,
}

impl State {
    fn id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}{}", self.next_id)
    }
}

#[derive(Clone, Default)]
pub struct FakeService {
    state: Arc<Mutex<State>>,
}

impl FakeService {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Count the request and return the queued failure, if any.
    fn begin(&self) -> Result<MutexGuard<'_, State>, ApiError> {
        let mut state = self.lock();
        state.requests += 1;
        let failure = state.fail_next.take();
        match failure {
            Some(err) => Err(err),
            None => Ok(state),
        }
    }

    pub fn fail_next(&self, err: ApiError) {
        self.lock().fail_next = Some(err);
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests
    }

    pub fn user_count(&self) -> usize {
        self.lock().users.len()
    }

    pub fn add_user(&self, email: &str, password: &str) -> String {
        let mut state = self.lock();
        let id = state.id("u");
        state
            .users
            .push((email.to_string(), password.to_string(), id.clone()));
        id
    }

    pub fn tag_count(&self, user_id: &str) -> usize {
        self.lock()
            .tags
            .iter()
            .filter(|t| t.user_id.as_deref() == Some(user_id))
            .count()
    }

    pub fn add_tag(&self, user_id: &str, title: &str, color: &str) -> Tag {
        let mut state = self.lock();
        let tag = Tag {
            id: state.id("tag"),
            title: title.to_string(),
            color: color.to_string(),
            user_id: Some(user_id.to_string()),
        };
        state.tags.push(tag.clone());
        tag
    }

    pub fn add_task(&self, user_id: &str, title: &str, tag_id: Option<&str>, completed: bool) -> Task {
        let mut state = self.lock();
        let task = Task {
            id: state.id("task"),
            title: title.to_string(),
            content: format!("{title} details"),
            tag_id: tag_id.map(str::to_string),
            completed,
            user_id: Some(user_id.to_string()),
            ..Task::default()
        };
        state.tasks.push(task.clone());
        task
    }

    pub fn stored_task(&self, task_id: &str) -> Option<Task> {
        self.lock().tasks.iter().find(|t| t.id == task_id).cloned()
    }
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        message: Some("Task not found".to_string()),
    }
}

impl TodoService for FakeService {
    async fn signup(&self, user: &NewUser) -> Result<Option<String>, ApiError> {
        let mut state = self.begin()?;
        let id = state.id("u");
        state
            .users
            .push((user.email.clone(), user.password.clone(), id.clone()));
        Ok(Some(id))
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginGrant, ApiError> {
        let state = self.begin()?;
        state
            .users
            .iter()
            .find(|(email, password, _)| {
                *email == credentials.email && *password == credentials.password
            })
            .map(|(_, _, id)| LoginGrant {
                user_id: id.clone(),
                token: Some(format!("token-{id}")),
            })
            .ok_or(ApiError::Unauthorized)
    }

    async fn list_tags(&self, user_id: &str) -> Result<Vec<Tag>, ApiError> {
        let state = self.begin()?;
        Ok(state
            .tags
            .iter()
            .filter(|t| t.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }

    async fn create_tag(&self, tag: &NewTag) -> Result<Tag, ApiError> {
        let mut state = self.begin()?;
        let created = Tag {
            id: state.id("tag"),
            title: tag.title.clone(),
            color: tag.color.clone(),
            user_id: Some(tag.user_id.clone()),
        };
        state.tags.push(created.clone());
        Ok(created)
    }

    async fn list_tasks(&self, user_id: &str) -> Result<Vec<Task>, ApiError> {
        let state = self.begin()?;
        Ok(state
            .tasks
            .iter()
            .filter(|t| t.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }

    async fn list_tasks_by_tag(&self, tag_id: &str) -> Result<Vec<Task>, ApiError> {
        let state = self.begin()?;
        Ok(state.tasks.iter().filter(|t| t.has_tag(tag_id)).cloned().collect())
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        let mut state = self.begin()?;
        let created = Task {
            id: state.id("task"),
            title: task.title.clone(),
            content: task.content.clone(),
            tag_id: task.tag_id.clone(),
            completed: false,
            user_id: Some(task.user_id.clone()),
            ..Task::default()
        };
        state.tasks.push(created.clone());
        Ok(created)
    }

    async fn update_task(&self, task: &Task, edit: &TaskEdit) -> Result<Task, ApiError> {
        let mut state = self.begin()?;
        let stored = state
            .tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or_else(not_found)?;
        *stored = stored.edited(edit);
        Ok(stored.clone())
    }

    async fn set_completed(&self, task: &Task, completed: bool) -> Result<Task, ApiError> {
        let mut state = self.begin()?;
        let stored = state
            .tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or_else(not_found)?;
        stored.completed = completed;
        Ok(stored.clone())
    }

    async fn delete_task(&self, task_id: &str) -> Result<(), ApiError> {
        let mut state = self.begin()?;
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != task_id);
        if state.tasks.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}
