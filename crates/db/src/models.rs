//! Row structs that map 1-to-1 onto database tables, plus the loaded
//! workspace aggregate handed back to callers.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// workspaces
// ---------------------------------------------------------------------------

/// A persisted workspace row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WorkspaceRow {
    pub workspace_id: i64,
    pub workspace_type: String,
    pub workspace_name: String,
}

// ---------------------------------------------------------------------------
// generation_data
// ---------------------------------------------------------------------------

/// A persisted generation-data row.
///
/// Serialised with the camelCase parameter names clients already send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct GenerationDataRow {
    #[serde(rename = "workspace_id")]
    pub workspace_id: i64,
    pub first_level: i64,
    pub last_level: i64,
    pub first_atom_mass: f64,
    pub second_atom_mass: f64,
    pub epsilon: f64,
    pub h: f64,
    pub dispatch_count: i64,
    pub group_size: i64,
    pub floating_point_precision: i64,
    pub device_id: i64,
}

// ---------------------------------------------------------------------------
// loaded aggregate
// ---------------------------------------------------------------------------

/// A workspace together with its (optional) generation data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub workspace_id: i64,
    pub workspace_type: String,
    pub workspace_name: String,
    #[serde(rename = "workspace_Generation_data")]
    pub generation_data: Option<GenerationDataRow>,
}

impl Workspace {
    /// Combine a workspace row with the generation data loaded for it.
    pub fn from_parts(row: WorkspaceRow, generation_data: Option<GenerationDataRow>) -> Self {
        Self {
            workspace_id: row.workspace_id,
            workspace_type: row.workspace_type,
            workspace_name: row.workspace_name,
            generation_data,
        }
    }
}
