use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::error;

use crate::AppState;
use db::repository::workspaces as ws_repo;
use db::{GenerationParams, Workspace, WorkspaceCreate, WorkspaceFields};

fn internal(op: &str, err: db::DbError) -> StatusCode {
    error!("{op} failed: {err}");
    StatusCode::INTERNAL_SERVER_ERROR
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Workspace>>, StatusCode> {
    let mut session = state.session.lock().await;
    match ws_repo::get_all_workspaces(&mut *session).await {
        Ok(workspaces) => Ok(Json(workspaces)),
        Err(e) => Err(internal("list workspaces", e)),
    }
}

pub async fn get(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Workspace>, StatusCode> {
    let mut session = state.session.lock().await;
    match ws_repo::get_workspace_by_id(&mut *session, id).await {
        Ok(Some(ws)) => Ok(Json(ws)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(internal("get workspace", e)),
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<WorkspaceCreate>,
) -> Result<(StatusCode, Json<Workspace>), StatusCode> {
    let mut session = state.session.lock().await;
    match ws_repo::create_workspace(&mut *session, &payload).await {
        Ok(ws) => Ok((StatusCode::CREATED, Json(ws))),
        Err(e) => Err(internal("create workspace", e)),
    }
}

pub async fn delete(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, StatusCode> {
    let mut session = state.session.lock().await;
    match ws_repo::delete_workspace(&mut *session, id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(internal("delete workspace", e)),
    }
}

pub async fn remove_all(State(state): State<AppState>) -> Result<StatusCode, StatusCode> {
    let mut session = state.session.lock().await;
    match ws_repo::remove_all_workspaces(&mut *session).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(internal("remove all workspaces", e)),
    }
}

pub async fn edit(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<WorkspaceFields>,
) -> Result<StatusCode, StatusCode> {
    let mut session = state.session.lock().await;
    match ws_repo::edit_workspace(&mut *session, id, &payload).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(internal("edit workspace", e)),
    }
}

pub async fn add_generation_data(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<GenerationParams>,
) -> Result<StatusCode, StatusCode> {
    let mut session = state.session.lock().await;
    match ws_repo::add_generation_data_to_workspace(&mut *session, id, &payload).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(internal("add generation data", e)),
    }
}

pub async fn edit_generation_data(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<GenerationParams>,
) -> Result<StatusCode, StatusCode> {
    let mut session = state.session.lock().await;
    match ws_repo::edit_generation_data(&mut *session, id, &payload).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(internal("edit generation data", e)),
    }
}
