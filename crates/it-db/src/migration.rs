//! Upgrade runner for the system database.
//!
//! Applies every catalogued step whose version lies in `(from, to]`, in
//! ascending order. Each step commits together with the matching update of
//! the `version` row, so a failure leaves the database at the last step
//! that succeeded. There is no rollback across steps.

use crate::connection::SystemDb;
use crate::ddl::{UpgradeStep, UPGRADE_STEPS};
use crate::error::{DbError, DbResult};
use crate::version_table::{current_version, write_version};
use it_core::{DatabaseUrl, SchemaVersion};
use std::path::{Path, PathBuf};

/// Directory under the Iron Test home that receives pre-upgrade copies.
pub const BACKUP_DIR: &str = "backups";

/// Everything a runner needs to bring one installation forward.
#[derive(Debug, Clone, Copy)]
pub struct UpgradeRequest<'a> {
    pub from: &'a SchemaVersion,
    pub to: &'a SchemaVersion,
    pub home: &'a Path,
    pub url: &'a str,
    pub user: &'a str,
    pub password: &'a str,
}

/// Applies upgrade steps to a system database.
pub trait MigrationRunner {
    /// Versions of the steps an upgrade from `from` to `to` would apply.
    fn pending(&self, from: &SchemaVersion, to: &SchemaVersion) -> DbResult<Vec<SchemaVersion>>;

    /// Apply the pending steps and return the versions applied, in order.
    fn upgrade(&self, request: &UpgradeRequest<'_>) -> DbResult<Vec<SchemaVersion>>;
}

/// Runner over an embedded catalog of SQL steps.
pub struct SqlMigrationRunner {
    steps: &'static [UpgradeStep],
}

impl Default for SqlMigrationRunner {
    fn default() -> Self {
        Self::with_steps(UPGRADE_STEPS)
    }
}

impl SqlMigrationRunner {
    /// Runner over a custom step catalog.
    pub fn with_steps(steps: &'static [UpgradeStep]) -> Self {
        Self { steps }
    }

    /// Catalog steps with target in `(from, to]`, ascending by version.
    pub fn pending_steps(
        &self,
        from: &SchemaVersion,
        to: &SchemaVersion,
    ) -> DbResult<Vec<(SchemaVersion, &'static UpgradeStep)>> {
        let mut pending = Vec::new();
        for step in self.steps {
            let version =
                SchemaVersion::parse(step.version).map_err(|e| DbError::MigrationError {
                    version: step.version.to_string(),
                    message: e.to_string(),
                })?;
            if &version > from && &version <= to {
                pending.push((version, step));
            }
        }
        pending.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(pending)
    }
}

impl MigrationRunner for SqlMigrationRunner {
    fn pending(&self, from: &SchemaVersion, to: &SchemaVersion) -> DbResult<Vec<SchemaVersion>> {
        Ok(self
            .pending_steps(from, to)?
            .into_iter()
            .map(|(version, _)| version)
            .collect())
    }

    fn upgrade(&self, request: &UpgradeRequest<'_>) -> DbResult<Vec<SchemaVersion>> {
        let pending = self.pending_steps(request.from, request.to)?;

        // The backup is named after `from`, so confirm it first and release
        // the file before copying it.
        {
            let db = SystemDb::open(request.url, request.user, request.password)?;
            let recorded = current_version(db.conn())?;
            if &recorded != request.from {
                return Err(DbError::MigrationError {
                    version: request.to.to_string(),
                    message: format!(
                        "system database is at {recorded}, expected {}",
                        request.from
                    ),
                });
            }
        }
        backup_database(request)?;

        let db = SystemDb::open(request.url, request.user, request.password)?;

        let mut applied = Vec::with_capacity(pending.len());
        for (version, step) in pending {
            log::info!("Applying upgrade step {version}");
            db.transaction(|conn| {
                conn.execute_batch(step.sql)?;
                write_version(conn, &version)
            })
            .map_err(|e| DbError::MigrationError {
                version: version.to_string(),
                message: e.to_string(),
            })?;
            applied.push(version);
        }

        if applied.last() != Some(request.to) {
            db.transaction(|conn| write_version(conn, request.to))
                .map_err(|e| DbError::MigrationError {
                    version: request.to.to_string(),
                    message: e.to_string(),
                })?;
        }
        log::info!(
            "System database upgraded from {} to {}",
            request.from,
            request.to
        );
        Ok(applied)
    }
}

/// Copy the database file (and its WAL, if any) to
/// `<home>/backups/<file>-<from>` before anything is changed.
fn backup_database(request: &UpgradeRequest<'_>) -> DbResult<Option<PathBuf>> {
    let url = DatabaseUrl::parse(request.url)?;
    let Some(file_name) = url.path.file_name() else {
        return Ok(None);
    };
    if !url.path.is_file() {
        return Ok(None);
    }

    let backup_dir = request.home.join(BACKUP_DIR);
    std::fs::create_dir_all(&backup_dir).map_err(|e| DbError::BackupError {
        path: backup_dir.display().to_string(),
        source: e,
    })?;

    let backup_name = format!("{}-{}", file_name.to_string_lossy(), request.from);
    let target = backup_dir.join(&backup_name);
    if target.exists() {
        log::warn!("Overwriting existing backup {}", target.display());
    }
    copy_file(&url.path, &target)?;

    let wal = PathBuf::from(format!("{}.wal", url.path.display()));
    if wal.is_file() {
        copy_file(&wal, &backup_dir.join(format!("{backup_name}.wal")))?;
    }

    log::info!("Backed up system database to {}", target.display());
    Ok(Some(target))
}

fn copy_file(from: &Path, to: &Path) -> DbResult<()> {
    std::fs::copy(from, to).map_err(|e| DbError::BackupError {
        path: from.display().to_string(),
        source: e,
    })?;
    Ok(())
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
