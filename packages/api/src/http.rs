//! # HTTP implementation of [`TodoService`]
//!
//! [`HttpService`] issues one `reqwest` request per call against the configured
//! base URL. It compiles for both native targets and `wasm32` (where reqwest
//! delegates to the browser's `fetch`).
//!
//! Every response goes through [`HttpService::send`]: non-2xx answers become an
//! [`ApiError`] (401 as [`ApiError::Unauthorized`], anything else as
//! [`ApiError::Status`] carrying the body's `message`), and success bodies are
//! returned as text so they can be decoded into the lenient wire records.
//!
//! When built [`with_token`](HttpService::with_token), every request carries an
//! `Authorization: Bearer` header.

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{
    Credentials, LoginGrant, LoginResponse, NewTag, NewTask, NewUser, SignupResponse, Tag,
    TagRecord, Task, TaskEdit, TaskRecord,
};
use crate::TodoService;

/// Remote todo service reached over HTTP.
#[derive(Clone, Debug)]
pub struct HttpService {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach a bearer token to every request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send `request` and return the body of a 2xx answer.
    async fn send(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            tracing::warn!("Request failed with status {}", status.as_u16());
            Err(ApiError::from_status(status.as_u16(), &body))
        }
    }

    async fn fetch<T: DeserializeOwned + Default>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let body = self.send(request).await?;
        decode(&body)
    }
}

/// Decode a success body. An empty body decodes to `T::default()`.
fn decode<T: DeserializeOwned + Default>(body: &str) -> Result<T, ApiError> {
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_str(body)?)
}

fn collect_tasks(records: Vec<TaskRecord>) -> Vec<Task> {
    let total = records.len();
    let tasks: Vec<Task> = records.into_iter().filter_map(TaskRecord::into_task).collect();
    if tasks.len() != total {
        tracing::warn!("Dropped {} task(s) without an id", total - tasks.len());
    }
    tasks
}

impl TodoService for HttpService {
    async fn signup(&self, user: &NewUser) -> Result<Option<String>, ApiError> {
        tracing::info!("Signing up {}", user.email);
        let response: SignupResponse = self
            .fetch(self.request(Method::POST, "/v1/users").json(user))
            .await?;
        Ok(response.into_id())
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginGrant, ApiError> {
        tracing::info!("Logging in {}", credentials.email);
        let response: LoginResponse = self
            .fetch(
                self.request(Method::POST, "/v1/users/login")
                    .json(credentials),
            )
            .await?;
        response.into_grant().ok_or(ApiError::MissingId)
    }

    async fn list_tags(&self, user_id: &str) -> Result<Vec<Tag>, ApiError> {
        let records: Vec<TagRecord> = self
            .fetch(
                self.request(Method::GET, "/v1/tags")
                    .query(&[("user_id", user_id)]),
            )
            .await?;
        Ok(records.into_iter().filter_map(TagRecord::into_tag).collect())
    }

    async fn create_tag(&self, tag: &NewTag) -> Result<Tag, ApiError> {
        let record: TagRecord = self
            .fetch(self.request(Method::POST, "/v1/tags").json(tag))
            .await?;
        record.into_created(tag).ok_or(ApiError::MissingId)
    }

    async fn list_tasks(&self, user_id: &str) -> Result<Vec<Task>, ApiError> {
        let records: Vec<TaskRecord> = self
            .fetch(
                self.request(Method::GET, "/v1/tasks")
                    .query(&[("user_id", user_id)]),
            )
            .await?;
        Ok(collect_tasks(records))
    }

    async fn list_tasks_by_tag(&self, tag_id: &str) -> Result<Vec<Task>, ApiError> {
        let records: Vec<TaskRecord> = self
            .fetch(
                self.request(Method::GET, "/v1/tags/tasks")
                    .query(&[("tag_id", tag_id)]),
            )
            .await?;
        Ok(collect_tasks(records))
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        let record: TaskRecord = self
            .fetch(self.request(Method::POST, "/v1/tasks").json(task))
            .await?;
        record.into_created(task).ok_or(ApiError::MissingId)
    }

    async fn update_task(&self, task: &Task, edit: &TaskEdit) -> Result<Task, ApiError> {
        let path = format!("/v1/tasks/{}", task.id);
        let record: TaskRecord = self
            .fetch(self.request(Method::PUT, &path).json(edit))
            .await?;
        Ok(record.over(task.edited(edit)))
    }

    async fn set_completed(&self, task: &Task, completed: bool) -> Result<Task, ApiError> {
        let path = format!("/v1/tasks/{}/set-completed", task.id);
        let record: TaskRecord = self
            .fetch(
                self.request(Method::PUT, &path)
                    .json(&json!({ "completed": completed })),
            )
            .await?;
        Ok(record.over(Task {
            completed,
            ..task.clone()
        }))
    }

    async fn delete_task(&self, task_id: &str) -> Result<(), ApiError> {
        let path = format!("/v1/tasks/{task_id}");
        self.send(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }
}
