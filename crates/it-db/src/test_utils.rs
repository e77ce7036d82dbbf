//! Shared fixtures for it-db unit tests.

use crate::SystemDb;
use std::path::{Path, PathBuf};

/// DDL of a system database created by Iron Test 1.0.0.
pub(crate) const BASELINE_SQL: &str = include_str!("../tests/fixtures/system_v1_0_0.sql");

/// Create a 1.0.0 system database at `<home>/database/system` and return its path.
pub(crate) fn create_baseline(home: &Path) -> PathBuf {
    let db_dir = home.join("database");
    std::fs::create_dir_all(&db_dir).unwrap();
    let path = db_dir.join("system");
    let db = SystemDb::open_path(&path).unwrap();
    db.conn().execute_batch(BASELINE_SQL).unwrap();
    path
}

/// Fully qualified URL for a database file, with the existence guard.
pub(crate) fn guarded_url(path: &Path) -> String {
    format!("jdbc:h2:{};IFEXISTS=TRUE", path.display())
}

/// Replace the rows of the `version` table.
pub(crate) fn set_version_rows(path: &Path, rows: &[&str]) {
    let db = SystemDb::open_path(path).unwrap();
    db.conn().execute("DELETE FROM version", []).unwrap();
    for row in rows {
        db.conn()
            .execute("INSERT INTO version (version) VALUES (?)", duckdb::params![row])
            .unwrap();
    }
}

/// Read every row of the `version` table.
pub(crate) fn version_rows(path: &Path) -> Vec<String> {
    let db = SystemDb::open_path(path).unwrap();
    let mut stmt = db.conn().prepare("SELECT version FROM version").unwrap();
    stmt.query_map([], |row| row.get::<_, String>(0))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}
