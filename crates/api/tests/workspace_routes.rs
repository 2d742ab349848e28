//! Integration tests for the workspace routes.
//!
//! Each test drives the router against its own in-memory SQLite session.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use api::{build_router, AppState};

async fn test_app() -> Router {
    let mut session = db::open_session("sqlite::memory:").await.unwrap();
    db::schema::create_tables(&mut session).await.unwrap();
    build_router(AppState::new(session))
}

fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    match body {
        Some(json_body) => builder.body(Body::from(json_body.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn generation_data(first_level: i64) -> Value {
    json!({
        "firstLevel": first_level,
        "lastLevel": first_level + 20,
        "firstAtomMass": 1.008,
        "secondAtomMass": 1.008,
        "epsilon": 0.0001,
        "h": 0.5,
        "dispatchCount": 1,
        "groupSize": 32,
        "floatingPointPrecision": 64,
        "deviceId": 0
    })
}

async fn create(app: &Router, body: Value) -> Value {
    let response = app
        .clone()
        .oneshot(request(Method::POST, "/api/v1/workspaces", Some(body)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_list_workspaces_empty() {
    let app = test_app().await;

    let response = app
        .oneshot(request(Method::GET, "/api/v1/workspaces", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!([]));
}

#[tokio::test]
async fn test_create_workspace_with_generation_data() {
    let app = test_app().await;

    let created = create(
        &app,
        json!({
            "workspace_type": "Generation",
            "workspace_name": "H2",
            "workspace_Generation_data": generation_data(0)
        }),
    )
    .await;

    let id = created["workspace_id"].as_i64().unwrap();
    assert_eq!(created["workspace_name"], "H2");
    assert_eq!(created["workspace_Generation_data"]["workspace_id"], id);
    assert_eq!(created["workspace_Generation_data"]["lastLevel"], 20);

    let response = app
        .oneshot(request(Method::GET, "/api/v1/workspaces", None))
        .await
        .unwrap();
    let list = response_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0], created);
}

#[tokio::test]
async fn test_get_unknown_workspace_is_not_found() {
    let app = test_app().await;

    let response = app
        .oneshot(request(Method::GET, "/api/v1/workspaces/404", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_and_delete_workspace() {
    let app = test_app().await;
    let created = create(
        &app,
        json!({ "workspace_type": "Generation", "workspace_name": "before" }),
    )
    .await;
    let uri = format!("/api/v1/workspaces/{}", created["workspace_id"]);

    let response = app
        .clone()
        .oneshot(request(
            Method::PUT,
            &uri,
            Some(json!({ "workspace_type": "Generation", "workspace_name": "after" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(request(Method::GET, &uri, None))
        .await
        .unwrap();
    assert_eq!(response_json(response).await["workspace_name"], "after");

    let response = app
        .clone()
        .oneshot(request(Method::DELETE, &uri, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(request(Method::GET, &uri, None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_workspace_succeeds() {
    let app = test_app().await;

    let response = app
        .oneshot(request(Method::DELETE, "/api/v1/workspaces/77", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_add_then_edit_generation_data() {
    let app = test_app().await;
    let created = create(
        &app,
        json!({ "workspace_type": "Generation", "workspace_name": "empty" }),
    )
    .await;
    assert!(created["workspace_Generation_data"].is_null());

    let uri = format!("/api/v1/workspaces/{}", created["workspace_id"]);
    let data_uri = format!("{uri}/generation-data");

    let response = app
        .clone()
        .oneshot(request(Method::POST, &data_uri, Some(generation_data(1))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(request(Method::PUT, &data_uri, Some(generation_data(4))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(request(Method::GET, &uri, None)).await.unwrap();
    let loaded = response_json(response).await;
    assert_eq!(loaded["workspace_Generation_data"]["firstLevel"], 4);
    assert_eq!(loaded["workspace_Generation_data"]["lastLevel"], 24);
}

#[tokio::test]
async fn test_remove_all_workspaces() {
    let app = test_app().await;
    for name in ["a", "b"] {
        create(
            &app,
            json!({
                "workspace_type": "Generation",
                "workspace_name": name,
                "workspace_Generation_data": generation_data(2)
            }),
        )
        .await;
    }

    let response = app
        .clone()
        .oneshot(request(Method::DELETE, "/api/v1/workspaces", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(request(Method::GET, "/api/v1/workspaces", None))
        .await
        .unwrap();
    assert_eq!(response_json(response).await, json!([]));
}

#[tokio::test]
async fn test_create_rejects_malformed_body() {
    let app = test_app().await;

    let response = app
        .oneshot(request(
            Method::POST,
            "/api/v1/workspaces",
            Some(json!({ "workspace_name": "no type" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
