//! Input shapes accepted by the repository.
//!
//! Field names on the wire match what the desktop front-end posts, hence the
//! mixed casing.

use serde::{Deserialize, Serialize};

/// Simulation parameters for a workspace.
///
/// Used both when generation data is first attached and when it is replaced
/// wholesale by an edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
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

/// Request to create a workspace, optionally with generation data inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceCreate {
    pub workspace_type: String,
    pub workspace_name: String,
    #[serde(rename = "workspace_Generation_data", default)]
    pub generation_data: Option<GenerationParams>,
}

/// Full replacement of a workspace's own columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceFields {
    pub workspace_type: String,
    pub workspace_name: String,
}
