//! it-db - System database layer for Iron Test administration
//!
//! Provides a DuckDB-backed handle on an installation's system database,
//! access to its single-row `version` table, the embedded catalog of
//! upgrade steps, and the runner that applies them in order.

pub mod connection;
pub mod ddl;
pub mod error;
pub mod migration;
pub mod version_table;

#[cfg(test)]
pub(crate) mod test_utils;

pub use connection::SystemDb;
pub use error::{DbError, DbResult};
pub use migration::{MigrationRunner, SqlMigrationRunner, UpgradeRequest};
pub use version_table::read_schema_version;
