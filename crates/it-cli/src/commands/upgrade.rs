//! Upgrade command implementation
//!
//! Compares the version recorded in the system database with the version of
//! this build and migrates the database forward when it lags. SNAPSHOT
//! versions and databases newer than the build are reported and left
//! untouched; both still exit successfully.

use anyhow::{Context, Result};
use it_core::{
    decide, resolve_database_url, Config, SchemaVersion, SnapshotSide, UpgradeDecision,
    UpgradeOutcome,
};
use it_db::{read_schema_version, MigrationRunner, SqlMigrationRunner, UpgradeRequest};

use crate::cli::{GlobalArgs, UpgradeArgs};

/// Version of this build, compared against the system database.
pub(crate) const BUILD_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything the console report needs about one run
#[derive(Debug)]
pub(crate) struct UpgradeReport {
    pub database_version: SchemaVersion,
    pub build_version: SchemaVersion,
    pub outcome: UpgradeOutcome,
}

/// Execute the upgrade command
pub fn execute(args: &UpgradeArgs, global: &GlobalArgs) -> Result<()> {
    let build_version =
        SchemaVersion::parse(BUILD_VERSION).context("Invalid build version")?;
    let runner = SqlMigrationRunner::default();

    let report = run(args, global, &build_version, &runner)?;

    if args.json {
        print_json(&report)?;
    } else {
        print_report(&report);
    }
    Ok(())
}

/// Load the installation, read its version, and act on the comparison.
pub(crate) fn run(
    args: &UpgradeArgs,
    global: &GlobalArgs,
    build_version: &SchemaVersion,
    runner: &dyn MigrationRunner,
) -> Result<UpgradeReport> {
    let home = args.iron_test_home.as_path();
    let config = Config::load_from_home(home).context("Failed to load Iron Test configuration")?;
    let system_db = &config.system_database;

    let configured_url = args.database_url.as_deref().unwrap_or(&system_db.url);
    let url = resolve_database_url(home, configured_url)
        .context("Failed to resolve system database URL")?;
    if global.verbose {
        println!("Using system database {url}");
    }

    let database_version = read_schema_version(&url, &system_db.user, &system_db.password)
        .context("Failed to read system database version")?;

    let request = UpgradeRequest {
        from: &database_version,
        to: build_version,
        home,
        url: &url,
        user: &system_db.user,
        password: &system_db.password,
    };
    let outcome = compare_and_act(&request, runner, args.dry_run)?;

    Ok(UpgradeReport {
        database_version,
        build_version: build_version.clone(),
        outcome,
    })
}

/// Decide between the two versions and run the migration when needed.
///
/// Only the upgrade branch touches the database, and only when not a dry run.
pub(crate) fn compare_and_act(
    request: &UpgradeRequest<'_>,
    runner: &dyn MigrationRunner,
    dry_run: bool,
) -> Result<UpgradeOutcome> {
    let outcome = match decide(request.from, request.to) {
        UpgradeDecision::RefuseSnapshot(side) => UpgradeOutcome::RefusedSnapshot { side },
        UpgradeDecision::UpToDate => UpgradeOutcome::NoActionNeeded,
        UpgradeDecision::DatabaseNewer => UpgradeOutcome::DatabaseNewerThanBuild,
        UpgradeDecision::Upgrade if dry_run => UpgradeOutcome::UpgradePlanned {
            pending: runner
                .pending(request.from, request.to)
                .context("Failed to plan upgrade steps")?,
        },
        UpgradeDecision::Upgrade => {
            log::info!(
                "Upgrading system database from {} to {}",
                request.from,
                request.to
            );
            let applied = runner
                .upgrade(request)
                .context("System database upgrade failed")?;
            UpgradeOutcome::UpgradePerformed { applied }
        }
    };
    Ok(outcome)
}

fn print_report(report: &UpgradeReport) {
    let db = &report.database_version;
    let build = &report.build_version;

    match &report.outcome {
        UpgradeOutcome::RefusedSnapshot { side } => {
            let version = match side {
                SnapshotSide::Database => db,
                SnapshotSide::Build => build,
            };
            println!("{side} version {version} is a SNAPSHOT version. Upgrade is not supported.");
        }
        UpgradeOutcome::NoActionNeeded => {
            println!(
                "System database and the build are of the same version, so no need to upgrade."
            );
        }
        UpgradeOutcome::DatabaseNewerThanBuild => {
            println!(
                "The system database version {db} is bigger than the build version {build}. Please"
            );
            println!("  download and build the latest version of Iron Test,");
            println!("  copy the build output to your current <IronTest_Home> directory, and");
            println!("  start the new version of Iron Test in your current <IronTest_Home>.");
        }
        UpgradeOutcome::UpgradePlanned { pending } => {
            println!("Dry run - would upgrade system database from {db} to {build}:");
            if pending.is_empty() {
                println!("  No upgrade steps; only the recorded version would change.");
            }
            for version in pending {
                println!("  Would apply step {version}");
            }
        }
        UpgradeOutcome::UpgradePerformed { applied } => {
            for version in applied {
                println!("  Applied step {version}");
            }
            println!(
                "Upgraded system database from {db} to {build} ({} step{}).",
                applied.len(),
                if applied.len() == 1 { "" } else { "s" }
            );
        }
    }
}

/// JSON document printed by `--json`
pub(crate) fn json_report(report: &UpgradeReport) -> serde_json::Value {
    serde_json::json!({
        "system_database_version": report.database_version,
        "build_version": report.build_version,
        "mutated": report.outcome.mutated(),
        "result": report.outcome,
    })
}

fn print_json(report: &UpgradeReport) -> Result<()> {
    let rendered = serde_json::to_string_pretty(&json_report(report))
        .context("Failed to serialize JSON output")?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "upgrade_test.rs"]
mod tests;
