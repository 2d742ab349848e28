//! `api` crate — HTTP REST API over the workspace repository.
//!
//! Exposes:
//!   GET    /api/v1/workspaces
//!   POST   /api/v1/workspaces
//!   DELETE /api/v1/workspaces
//!   GET    /api/v1/workspaces/{id}
//!   PUT    /api/v1/workspaces/{id}
//!   DELETE /api/v1/workspaces/{id}
//!   POST   /api/v1/workspaces/{id}/generation-data
//!   PUT    /api/v1/workspaces/{id}/generation-data

pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqliteConnection;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use handlers::workspaces;

/// Shared handler state.
///
/// A single database session, handed to one repository call at a time.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<SqliteConnection>>,
}

impl AppState {
    pub fn new(session: SqliteConnection) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }
}

/// Build the application router with all workspace routes mounted.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/workspaces",
            get(workspaces::list)
                .post(workspaces::create)
                .delete(workspaces::remove_all),
        )
        .route(
            "/api/v1/workspaces/:id",
            get(workspaces::get)
                .put(workspaces::edit)
                .delete(workspaces::delete),
        )
        .route(
            "/api/v1/workspaces/:id/generation-data",
            post(workspaces::add_generation_data).put(workspaces::edit_generation_data),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind to `bind` and serve until the process is stopped.
pub async fn serve(bind: &str, session: SqliteConnection) -> std::io::Result<()> {
    let app = build_router(AppState::new(session));
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("API listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}
