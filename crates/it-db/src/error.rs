//! Error types for it-db

use thiserror::Error;

/// System database errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] System database connection failed: {0}")]
    ConnectionError(String),

    /// Database file missing while the URL forbids creating it (D002)
    #[error("[D002] System database not found at {path}. Check the Iron Test home directory.")]
    DatabaseNotFound { path: String },

    /// Query execution error (D003)
    #[error("[D003] SQL execution failed: {0}")]
    QueryError(String),

    /// Table not found (D004)
    #[error("[D004] Table or view not found: {0}")]
    TableNotFound(String),

    /// The `version` table does not hold exactly one row (D005)
    #[error("[D005] Expected exactly one row in the version table, found {count}")]
    VersionRowCount { count: usize },

    /// Stored version string or database URL cannot be parsed (D006)
    #[error("[D006] {0}")]
    Core(#[from] it_core::CoreError),

    /// An upgrade step failed; earlier steps stay applied (D007)
    #[error("[D007] Upgrade step to {version} failed: {message}")]
    MigrationError { version: String, message: String },

    /// Transaction management error (D008)
    #[error("[D008] System database transaction failed: {0}")]
    TransactionError(String),

    /// Backup of the database file failed (D009)
    #[error("[D009] Failed to back up {path}: {source}")]
    BackupError {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

/// Message-based classification adapted from `DbError` in Feather-Flow's `ff-db`.
impl From<duckdb::Error> for DbError {
    fn from(err: duckdb::Error) -> Self {
        // duckdb::Error does not expose structured variants, so missing
        // relations are recognised by message.
        let msg = err.to_string();
        if msg.contains("Table with name")
            || msg.contains("Table or view with name")
            || (msg.contains("Catalog Error") && msg.contains("Table") && msg.contains("not found"))
        {
            DbError::TableNotFound(msg)
        } else {
            DbError::QueryError(msg)
        }
    }
}
