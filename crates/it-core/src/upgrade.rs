//! Upgrade decision between the system database and the running build

use crate::version::SchemaVersion;
use serde::Serialize;

/// Which side of the comparison carried the `SNAPSHOT` qualifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotSide {
    /// The version recorded in the system database
    Database,
    /// The version of the running build
    Build,
}

impl std::fmt::Display for SnapshotSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotSide::Database => write!(f, "System database"),
            SnapshotSide::Build => write!(f, "Build"),
        }
    }
}

/// What the orchestrator should do for a pair of versions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeDecision {
    /// One side is a SNAPSHOT; upgrading is not supported
    RefuseSnapshot(SnapshotSide),
    /// Versions are equal
    UpToDate,
    /// The database is ahead of the build; downgrades are not supported
    DatabaseNewer,
    /// The database lags the build and must be migrated
    Upgrade,
}

/// Decide the action for `db_version` against `build_version`.
///
/// A SNAPSHOT on either side wins over the numeric comparison, and the
/// database side is reported first when both are snapshots.
pub fn decide(db_version: &SchemaVersion, build_version: &SchemaVersion) -> UpgradeDecision {
    if db_version.is_snapshot() {
        return UpgradeDecision::RefuseSnapshot(SnapshotSide::Database);
    }
    if build_version.is_snapshot() {
        return UpgradeDecision::RefuseSnapshot(SnapshotSide::Build);
    }
    match db_version.cmp(build_version) {
        std::cmp::Ordering::Equal => UpgradeDecision::UpToDate,
        std::cmp::Ordering::Greater => UpgradeDecision::DatabaseNewer,
        std::cmp::Ordering::Less => UpgradeDecision::Upgrade,
    }
}

/// Terminal result of an upgrade invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum UpgradeOutcome {
    /// Database and build are at the same version
    NoActionNeeded,
    /// Database version is ahead of the build
    DatabaseNewerThanBuild,
    /// Migration steps were applied, in order
    UpgradePerformed { applied: Vec<SchemaVersion> },
    /// Dry run: migration steps that would be applied, in order
    UpgradePlanned { pending: Vec<SchemaVersion> },
    /// Refused because one side is a SNAPSHOT
    RefusedSnapshot { side: SnapshotSide },
}

impl UpgradeOutcome {
    /// True when the database schema was changed
    pub fn mutated(&self) -> bool {
        matches!(self, UpgradeOutcome::UpgradePerformed { .. })
    }
}

#[cfg(test)]
#[path = "upgrade_test.rs"]
mod tests;
