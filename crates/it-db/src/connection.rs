//! System database connection wrapper.
//!
//! [`SystemDb`] owns a DuckDB [`Connection`] for the lifetime of one
//! administrative operation. Dropping it closes the connection, so every
//! exit path releases the database file.

use crate::error::{DbError, DbResult};
use duckdb::Connection;
use it_core::DatabaseUrl;
use std::path::{Path, PathBuf};

/// Wrapper around a DuckDB connection to an installation's system database.
///
/// Single-threaded; upgrades run sequentially on the calling thread.
pub struct SystemDb {
    conn: Connection,
    path: PathBuf,
}

impl SystemDb {
    /// Open the system database addressed by a `jdbc:h2:` style URL.
    ///
    /// When the URL carries `IFEXISTS=TRUE` a missing database file is an
    /// error and nothing is created on disk. DuckDB files have no
    /// authentication, so `user` and `password` are accepted for
    /// compatibility with the installation config and otherwise unused.
    pub fn open(url: &str, user: &str, _password: &str) -> DbResult<Self> {
        let parsed = DatabaseUrl::parse(url)?;
        log::debug!(
            "Opening system database {} as user '{}'",
            parsed.path.display(),
            user
        );

        if parsed.requires_existing() && !parsed.path.is_file() {
            return Err(DbError::DatabaseNotFound {
                path: parsed.path.display().to_string(),
            });
        }
        Self::open_path(&parsed.path)
    }

    /// Open (or create) a database file directly, bypassing URL handling.
    pub fn open_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| DbError::ConnectionError(format!("{e}: {}", path.display())))?;
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Borrow the underlying DuckDB connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Path of the database file backing this connection.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Execute `body` within a `BEGIN` / `COMMIT` transaction, rolling back on
    /// error.
    ///
    /// Adapted from `MetaDb::transaction` in Feather-Flow's `ff-meta`.
    pub fn transaction<F, T>(&self, body: F) -> DbResult<T>
    where
        F: FnOnce(&Connection) -> DbResult<T>,
    {
        self.conn
            .execute_batch("BEGIN TRANSACTION")
            .map_err(|e| DbError::TransactionError(format!("BEGIN failed: {e}")))?;

        let result = body(&self.conn);

        match &result {
            Ok(_) => {
                if let Err(commit_err) = self.conn.execute_batch("COMMIT") {
                    let _ = self.conn.execute_batch("ROLLBACK");
                    return Err(DbError::TransactionError(format!(
                        "COMMIT failed: {commit_err}"
                    )));
                }
            }
            Err(_) => {
                let _ = self.conn.execute_batch("ROLLBACK");
            }
        }
        result
    }

    /// Check whether a table exists in the main schema.
    pub fn table_exists(&self, name: &str) -> DbResult<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = 'main' AND table_name = ?",
            duckdb::params![name],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}

#[cfg(test)]
#[path = "connection_test.rs"]
mod tests;
