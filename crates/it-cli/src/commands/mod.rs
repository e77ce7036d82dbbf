//! CLI command implementations

pub(crate) mod upgrade;
