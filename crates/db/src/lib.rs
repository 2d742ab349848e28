//! `db` crate — pure persistence layer.
//!
//! Provides session opening, table definitions, typed row structs, input
//! schemas, and repository functions for the workspace and generation-data
//! tables.  No business logic lives here.

pub mod error;
pub mod models;
pub mod repository;
pub mod schema;
pub mod schemas;
pub mod session;

pub use error::DbError;
pub use models::{GenerationDataRow, Workspace, WorkspaceRow};
pub use schemas::{GenerationParams, WorkspaceCreate, WorkspaceFields};
pub use session::open_session;
