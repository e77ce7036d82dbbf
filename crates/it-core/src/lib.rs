//! it-core - Core library for Iron Test administration
//!
//! This crate provides the installation configuration (`config.yml`),
//! the [`SchemaVersion`] value type, system database URL resolution, and
//! the pure upgrade decision shared by the database layer and the CLI.

pub mod config;
pub mod database_url;
pub mod error;
pub mod upgrade;
pub mod version;

pub use config::{Config, DataSourceConfig};
pub use database_url::{resolve_database_url, DatabaseUrl};
pub use error::{CoreError, CoreResult};
pub use upgrade::{decide, SnapshotSide, UpgradeDecision, UpgradeOutcome};
pub use version::SchemaVersion;
