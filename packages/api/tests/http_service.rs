use api::{
    ApiError, ClientConfig, Credentials, HttpService, NewTag, NewTask, NewUser, Task, TaskEdit,
    TodoService,
};
use httpmock::prelude::*;
use serde_json::json;

fn service_for(server: &MockServer) -> HttpService {
    HttpService::new(&ClientConfig::new(server.base_url()))
}

fn sample_task(id: &str) -> Task {
    Task {
        id: id.to_string(),
        title: "Buy milk".to_string(),
        content: "2 liters".to_string(),
        user_id: Some("u1".to_string()),
        ..Task::default()
    }
}

#[tokio::test]
async fn test_login_returns_grant() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/users/login")
                .json_body(json!({ "email": "ada@example.com", "password": "secret1" }));
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({ "id": "u1", "token": "tok" }));
        })
        .await;

    let grant = service_for(&server)
        .login(&Credentials::new(" ada@example.com ", "secret1"))
        .await
        .unwrap();

    assert_eq!(grant.user_id, "u1");
    assert_eq!(grant.token.as_deref(), Some("tok"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_401_is_unauthorized() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/users/login");
            then.status(401)
                .json_body(json!({ "message": "Invalid credentials" }));
        })
        .await;

    let result = service_for(&server)
        .login(&Credentials::new("ada@example.com", "wrong"))
        .await;

    assert_eq!(result, Err(ApiError::Unauthorized));
}

#[tokio::test]
async fn test_login_without_id_is_rejected() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/users/login");
            then.status(200).json_body(json!({ "message": "ok" }));
        })
        .await;

    let result = service_for(&server)
        .login(&Credentials::new("ada@example.com", "secret1"))
        .await;

    assert_eq!(result, Err(ApiError::MissingId));
}

#[tokio::test]
async fn test_signup_error_carries_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/users")
                .json_body(json!({ "name": "Ada", "email": "ada@example.com", "password": "secret1" }));
            then.status(409)
                .json_body(json!({ "message": "Email already registered" }));
        })
        .await;

    let err = service_for(&server)
        .signup(&NewUser::new("Ada", "ada@example.com", "secret1"))
        .await
        .unwrap_err();

    assert_eq!(err.message(), Some("Email already registered"));
}

#[tokio::test]
async fn test_list_tags_scoped_to_user() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/tags").query_param("user_id", "u1");
            then.status(200).json_body(json!([
                { "id": "t1", "title": "work", "color": "#007bff" },
                { "_id": "t2", "title": "home", "color": "#28a745" },
                { "title": "broken" }
            ]));
        })
        .await;

    let tags = service_for(&server).list_tags("u1").await.unwrap();

    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].id, "t1");
    assert_eq!(tags[1].id, "t2");
    assert_eq!(tags[1].color, "#28a745");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_tag_posts_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/tags")
                .json_body(json!({ "title": "work", "color": "#ddd", "user_id": "u1" }));
            then.status(201).json_body(json!({ "id": "t1" }));
        })
        .await;

    let tag = service_for(&server)
        .create_tag(&NewTag::new("u1", "work", ""))
        .await
        .unwrap();

    assert_eq!(tag.id, "t1");
    assert_eq!(tag.title, "work");
    assert_eq!(tag.color, "#ddd");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_tasks_by_tag() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/tags/tasks")
                .query_param("tag_id", "t1");
            then.status(200).json_body(json!([
                { "_id": "a", "title": "One", "content": "", "tag_id": "t1", "completed": false }
            ]));
        })
        .await;

    let tasks = service_for(&server).list_tasks_by_tag("t1").await.unwrap();

    assert_eq!(tasks.len(), 1);
    assert!(tasks[0].has_tag("t1"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_task_omits_missing_tag() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/tasks")
                .json_body(json!({ "title": "Buy milk", "content": "2 liters", "user_id": "u1" }));
            then.status(201)
                .json_body(json!({ "_id": "a", "title": "Buy milk", "content": "2 liters", "completed": false }));
        })
        .await;

    let task = service_for(&server)
        .create_task(&NewTask::new("u1", "Buy milk", "2 liters", None))
        .await
        .unwrap();

    assert_eq!(task.id, "a");
    assert_eq!(task.user_id.as_deref(), Some("u1"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_set_completed_with_message_only_answer() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/v1/tasks/a/set-completed")
                .json_body(json!({ "completed": true }));
            then.status(200).json_body(json!({ "message": "Task updated" }));
        })
        .await;

    let task = service_for(&server)
        .set_completed(&sample_task("a"), true)
        .await
        .unwrap();

    assert_eq!(task.id, "a");
    assert!(task.completed);
    assert_eq!(task.title, "Buy milk");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_task_sends_edit() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/v1/tasks/a")
                .json_body(json!({ "title": "Buy oat milk", "content": "1 liter", "tag_id": null }));
            then.status(200).json_body(json!({ "_id": "a", "title": "Buy oat milk", "content": "1 liter" }));
        })
        .await;

    let task = service_for(&server)
        .update_task(&sample_task("a"), &TaskEdit::new("Buy oat milk", "1 liter", None))
        .await
        .unwrap();

    assert_eq!(task.title, "Buy oat milk");
    assert_eq!(task.content, "1 liter");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_sends_bearer_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/v1/tasks/a")
                .header("authorization", "Bearer tok");
            then.status(204);
        })
        .await;

    service_for(&server)
        .with_token(Some("tok".to_string()))
        .delete_task("a")
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/v1/tasks/a");
            then.status(500).body("Internal Server Error");
        })
        .await;

    let err = service_for(&server).delete_task("a").await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            message: None
        }
    );
}
