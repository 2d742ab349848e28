//! Table definitions.
//!
//! `generation_data.workspace_id` references `workspaces` but has no
//! `ON DELETE` action and no unique constraint: the cascade on delete is done
//! by the repository, and a workspace can end up with more than one
//! generation-data row.

use sqlx::SqliteConnection;
use tracing::info;

use crate::DbError;

const CREATE_WORKSPACES: &str = r#"
CREATE TABLE IF NOT EXISTS workspaces (
    workspace_id   INTEGER PRIMARY KEY AUTOINCREMENT,
    workspace_type TEXT NOT NULL,
    workspace_name TEXT NOT NULL
)
"#;

const CREATE_GENERATION_DATA: &str = r#"
CREATE TABLE IF NOT EXISTS generation_data (
    workspace_id             INTEGER NOT NULL REFERENCES workspaces (workspace_id),
    first_level              INTEGER NOT NULL,
    last_level               INTEGER NOT NULL,
    first_atom_mass          REAL    NOT NULL,
    second_atom_mass         REAL    NOT NULL,
    epsilon                  REAL    NOT NULL,
    h                        REAL    NOT NULL,
    dispatch_count           INTEGER NOT NULL,
    group_size               INTEGER NOT NULL,
    floating_point_precision INTEGER NOT NULL,
    device_id                INTEGER NOT NULL
)
"#;

/// Create both tables if they do not exist yet.
pub async fn create_tables(conn: &mut SqliteConnection) -> Result<(), DbError> {
    info!("Creating workspace tables");
    sqlx::query(CREATE_WORKSPACES).execute(&mut *conn).await?;
    sqlx::query(CREATE_GENERATION_DATA).execute(&mut *conn).await?;
    Ok(())
}

/// Drop both tables. Only useful for resetting a scratch database.
pub async fn drop_tables(conn: &mut SqliteConnection) -> Result<(), DbError> {
    info!("Dropping workspace tables");
    sqlx::query("DROP TABLE IF EXISTS generation_data")
        .execute(&mut *conn)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS workspaces")
        .execute(&mut *conn)
        .await?;
    Ok(())
}
