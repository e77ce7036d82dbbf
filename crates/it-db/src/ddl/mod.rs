//! Embedded upgrade steps for the system database.
//!
//! Each step is a `.sql` file embedded via `include_str!` and tagged with
//! the release that introduced it. [`UPGRADE_STEPS`] is ordered by version
//! and consumed by [`crate::migration::SqlMigrationRunner`].

/// A single versioned upgrade step.
pub struct UpgradeStep {
    /// Release whose schema this step produces.
    pub version: &'static str,
    /// Raw SQL to execute.
    pub sql: &'static str,
}

/// All known upgrade steps, in order.
pub static UPGRADE_STEPS: &[UpgradeStep] = &[
    UpgradeStep {
        version: "1.1.0",
        sql: include_str!("v1_1_0_property_extractor.sql"),
    },
    UpgradeStep {
        version: "1.2.0",
        sql: include_str!("v1_2_0_iib_endpoint_ssl.sql"),
    },
    UpgradeStep {
        version: "1.3.0",
        sql: include_str!("v1_3_0_assertion_verification.sql"),
    },
];
