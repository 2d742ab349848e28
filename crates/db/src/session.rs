//! SQLite session opening.

use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, SqliteConnection};
use tracing::info;

use crate::DbError;

/// Open a single connection to `database_url`.
///
/// Accepts anything `SqliteConnectOptions` parses, e.g. `sqlite://epseon.db`
/// or `sqlite::memory:`. The database file is created if missing and foreign
/// keys are enforced. The caller owns the returned session and decides when
/// to drop it.
pub async fn open_session(database_url: &str) -> Result<SqliteConnection, DbError> {
    info!("Opening database session ({database_url})");
    let conn = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .connect()
        .await?;
    Ok(conn)
}
