//! Access to the single-row `version` table.
//!
//! The table holds exactly one row with one `version` column. Zero or
//! several rows mean the database is damaged, and callers get
//! [`DbError::VersionRowCount`] instead of an arbitrary pick.

use crate::connection::SystemDb;
use crate::error::{DbError, DbResult};
use duckdb::Connection;
use it_core::SchemaVersion;

/// Read the schema version of the system database addressed by `url`.
///
/// The connection lives only for this call.
pub fn read_schema_version(url: &str, user: &str, password: &str) -> DbResult<SchemaVersion> {
    let db = SystemDb::open(url, user, password)?;
    let version = current_version(db.conn())?;
    log::info!("System database {} is at version {version}", db.path().display());
    Ok(version)
}

/// Read the recorded version through an open connection.
pub fn current_version(conn: &Connection) -> DbResult<SchemaVersion> {
    let mut stmt = conn.prepare("SELECT version FROM version")?;
    let rows: Vec<String> = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    match rows.as_slice() {
        [only] => Ok(SchemaVersion::parse(only)?),
        _ => Err(DbError::VersionRowCount { count: rows.len() }),
    }
}

/// Overwrite the recorded version through an open connection.
pub fn write_version(conn: &Connection, version: &SchemaVersion) -> DbResult<()> {
    let updated = conn.execute(
        "UPDATE version SET version = ?",
        duckdb::params![version.to_string()],
    )?;
    if updated != 1 {
        return Err(DbError::VersionRowCount { count: updated });
    }
    Ok(())
}

#[cfg(test)]
#[path = "version_table_test.rs"]
mod tests;
