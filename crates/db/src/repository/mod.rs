//! Repository functions — one function per database operation.
//!
//! Every function borrows an externally-owned `&mut SqliteConnection` and
//! returns a `Result<T, DbError>`. Mutations run inside their own
//! transaction and commit before returning.

pub mod workspaces;
