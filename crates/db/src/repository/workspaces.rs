//! Workspace and generation-data CRUD operations.

use std::collections::HashMap;

use sqlx::{Connection, SqliteConnection};
use tracing::{debug, info};

use crate::{
    models::{GenerationDataRow, Workspace, WorkspaceRow},
    schemas::{GenerationParams, WorkspaceCreate, WorkspaceFields},
    DbError,
};

const WORKSPACE_COLUMNS: &str = "workspace_id, workspace_type, workspace_name";

const GENERATION_DATA_COLUMNS: &str = "workspace_id, first_level, last_level, \
    first_atom_mass, second_atom_mass, epsilon, h, dispatch_count, group_size, \
    floating_point_precision, device_id";

// ---------------------------------------------------------------------------
// workspaces
// ---------------------------------------------------------------------------

/// Insert a new workspace, plus its generation data when the request carries
/// any, and return the reloaded row with its store-assigned id.
pub async fn create_workspace(
    conn: &mut SqliteConnection,
    workspace: &WorkspaceCreate,
) -> Result<Workspace, DbError> {
    let mut tx = conn.begin().await?;

    let workspace_id = sqlx::query(
        "INSERT INTO workspaces (workspace_type, workspace_name) VALUES (?, ?)",
    )
    .bind(&workspace.workspace_type)
    .bind(&workspace.workspace_name)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    if let Some(params) = &workspace.generation_data {
        insert_generation_data(&mut *tx, workspace_id, params).await?;
    }

    tx.commit().await?;
    debug!(workspace_id, "created workspace");

    let row = fetch_workspace_row(conn, workspace_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;
    let generation_data = fetch_generation_data(conn, workspace_id).await?;

    Ok(Workspace::from_parts(row, generation_data))
}

/// Return every workspace with its generation data loaded.
///
/// Both tables are read in one pass each. If a workspace has several
/// generation-data rows, the oldest one is attached.
pub async fn get_all_workspaces(
    conn: &mut SqliteConnection,
) -> Result<Vec<Workspace>, DbError> {
    let rows = sqlx::query_as::<_, WorkspaceRow>(&format!(
        "SELECT {WORKSPACE_COLUMNS} FROM workspaces ORDER BY workspace_id"
    ))
    .fetch_all(&mut *conn)
    .await?;

    let generation_rows = sqlx::query_as::<_, GenerationDataRow>(&format!(
        "SELECT {GENERATION_DATA_COLUMNS} FROM generation_data ORDER BY rowid"
    ))
    .fetch_all(&mut *conn)
    .await?;

    let mut by_workspace: HashMap<i64, GenerationDataRow> = HashMap::new();
    for data in generation_rows {
        by_workspace.entry(data.workspace_id).or_insert(data);
    }

    let workspaces = rows
        .into_iter()
        .map(|row| {
            let data = by_workspace.remove(&row.workspace_id);
            Workspace::from_parts(row, data)
        })
        .collect::<Vec<_>>();

    debug!(count = workspaces.len(), "loaded workspaces");
    Ok(workspaces)
}

/// Fetch a single workspace by id, or `None` if it does not exist.
pub async fn get_workspace_by_id(
    conn: &mut SqliteConnection,
    workspace_id: i64,
) -> Result<Option<Workspace>, DbError> {
    let Some(row) = fetch_workspace_row(conn, workspace_id).await? else {
        debug!(workspace_id, "workspace not found");
        return Ok(None);
    };
    let generation_data = fetch_generation_data(conn, workspace_id).await?;

    Ok(Some(Workspace::from_parts(row, generation_data)))
}

/// Delete a workspace and every generation-data row that references it.
///
/// Deleting an id that does not exist does nothing.
pub async fn delete_workspace(
    conn: &mut SqliteConnection,
    workspace_id: i64,
) -> Result<(), DbError> {
    let mut tx = conn.begin().await?;

    let existing = sqlx::query_scalar::<_, i64>(
        "SELECT workspace_id FROM workspaces WHERE workspace_id = ?",
    )
    .bind(workspace_id)
    .fetch_optional(&mut *tx)
    .await?;

    if existing.is_some() {
        // Children first, the foreign key is checked per statement.
        let removed = sqlx::query("DELETE FROM generation_data WHERE workspace_id = ?")
            .bind(workspace_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("DELETE FROM workspaces WHERE workspace_id = ?")
            .bind(workspace_id)
            .execute(&mut *tx)
            .await?;

        debug!(workspace_id, generation_rows = removed, "deleted workspace");
    } else {
        debug!(workspace_id, "delete skipped, workspace not found");
    }

    tx.commit().await?;
    Ok(())
}

/// Wipe both tables. Generation data goes first, then workspaces.
pub async fn remove_all_workspaces(conn: &mut SqliteConnection) -> Result<(), DbError> {
    let mut tx = conn.begin().await?;

    let generation_rows = sqlx::query("DELETE FROM generation_data")
        .execute(&mut *tx)
        .await?
        .rows_affected();
    let workspace_rows = sqlx::query("DELETE FROM workspaces")
        .execute(&mut *tx)
        .await?
        .rows_affected();

    tx.commit().await?;
    info!(workspace_rows, generation_rows, "removed all workspaces");
    Ok(())
}

/// Replace a workspace's type and name. Unknown ids are ignored.
pub async fn edit_workspace(
    conn: &mut SqliteConnection,
    workspace_id: i64,
    workspace: &WorkspaceFields,
) -> Result<(), DbError> {
    let mut tx = conn.begin().await?;

    let updated = sqlx::query(
        "UPDATE workspaces SET workspace_type = ?, workspace_name = ? WHERE workspace_id = ?",
    )
    .bind(&workspace.workspace_type)
    .bind(&workspace.workspace_name)
    .bind(workspace_id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    tx.commit().await?;
    debug!(workspace_id, updated, "edited workspace");
    Ok(())
}

// ---------------------------------------------------------------------------
// generation_data
// ---------------------------------------------------------------------------

/// Attach generation data to an existing workspace.
///
/// An unknown `workspace_id` fails with the store's foreign-key error and
/// inserts nothing. No uniqueness check is made: calling this twice for the
/// same workspace leaves two rows behind.
pub async fn add_generation_data_to_workspace(
    conn: &mut SqliteConnection,
    workspace_id: i64,
    generation_data: &GenerationParams,
) -> Result<(), DbError> {
    let mut tx = conn.begin().await?;
    let rowid = insert_generation_data(&mut *tx, workspace_id, generation_data).await?;
    tx.commit().await?;

    let reloaded = sqlx::query_as::<_, GenerationDataRow>(&format!(
        "SELECT {GENERATION_DATA_COLUMNS} FROM generation_data WHERE rowid = ?"
    ))
    .bind(rowid)
    .fetch_one(&mut *conn)
    .await?;

    debug!(workspace_id = reloaded.workspace_id, rowid, "added generation data");
    Ok(())
}

/// Overwrite the generation data of a workspace. Unknown ids are ignored.
///
/// Every row referencing `workspace_id` is updated, so duplicates created by
/// [`add_generation_data_to_workspace`] end up identical.
pub async fn edit_generation_data(
    conn: &mut SqliteConnection,
    workspace_id: i64,
    generation_data: &GenerationParams,
) -> Result<(), DbError> {
    let mut tx = conn.begin().await?;

    let updated = sqlx::query(
        r#"
        UPDATE generation_data
        SET first_level = ?, last_level = ?, first_atom_mass = ?, second_atom_mass = ?,
            epsilon = ?, h = ?, dispatch_count = ?, group_size = ?,
            floating_point_precision = ?, device_id = ?
        WHERE workspace_id = ?
        "#,
    )
    .bind(generation_data.first_level)
    .bind(generation_data.last_level)
    .bind(generation_data.first_atom_mass)
    .bind(generation_data.second_atom_mass)
    .bind(generation_data.epsilon)
    .bind(generation_data.h)
    .bind(generation_data.dispatch_count)
    .bind(generation_data.group_size)
    .bind(generation_data.floating_point_precision)
    .bind(generation_data.device_id)
    .bind(workspace_id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    tx.commit().await?;
    debug!(workspace_id, updated, "edited generation data");
    Ok(())
}

// ---------------------------------------------------------------------------
// helpers
// ---------------------------------------------------------------------------

async fn fetch_workspace_row(
    conn: &mut SqliteConnection,
    workspace_id: i64,
) -> Result<Option<WorkspaceRow>, DbError> {
    let row = sqlx::query_as::<_, WorkspaceRow>(&format!(
        "SELECT {WORKSPACE_COLUMNS} FROM workspaces WHERE workspace_id = ?"
    ))
    .bind(workspace_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row)
}

/// Oldest generation-data row for a workspace, if any.
async fn fetch_generation_data(
    conn: &mut SqliteConnection,
    workspace_id: i64,
) -> Result<Option<GenerationDataRow>, DbError> {
    let row = sqlx::query_as::<_, GenerationDataRow>(&format!(
        "SELECT {GENERATION_DATA_COLUMNS} FROM generation_data \
         WHERE workspace_id = ? ORDER BY rowid LIMIT 1"
    ))
    .bind(workspace_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row)
}

/// Insert one generation-data row and return its rowid.
async fn insert_generation_data(
    conn: &mut SqliteConnection,
    workspace_id: i64,
    params: &GenerationParams,
) -> Result<i64, DbError> {
    let rowid = sqlx::query(&format!(
        "INSERT INTO generation_data ({GENERATION_DATA_COLUMNS}) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
    ))
    .bind(workspace_id)
    .bind(params.first_level)
    .bind(params.last_level)
    .bind(params.first_atom_mass)
    .bind(params.second_atom_mass)
    .bind(params.epsilon)
    .bind(params.h)
    .bind(params.dispatch_count)
    .bind(params.group_size)
    .bind(params.floating_point_precision)
    .bind(params.device_id)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    Ok(rowid)
}
