//! Typed error type for the db crate.

use thiserror::Error;

/// Everything the store can raise, propagated unchanged.
///
/// Absence is never an error here: reads return `Option`, while deletes and
/// edits against a missing id are silent no-ops.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
