//! System database URL handling
//!
//! Installations carry a JDBC-style URL in `config.yml`, typically relative
//! to the Iron Test home (`jdbc:h2:./database/system;AUTO_SERVER=TRUE`).
//! Administrative commands rewrite it into an absolute URL that only opens
//! an existing database file.

use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// Scheme prefix of system database URLs
pub const URL_PREFIX: &str = "jdbc:h2:";

/// Parameter that forbids creating the database file on connect
pub const IF_EXISTS_PARAM: &str = "IFEXISTS";

/// A parsed system database URL: file path plus `;KEY=VALUE` parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseUrl {
    /// Database file path as written in the URL
    pub path: PathBuf,
    /// Parameters after the path, in their original order
    pub params: Vec<(String, String)>,
}

impl DatabaseUrl {
    /// Parse a `jdbc:h2:<path>[;KEY=VALUE]...` URL
    pub fn parse(url: &str) -> CoreResult<Self> {
        let mut segments = url.split(';');
        let base = segments.next().unwrap_or_default();
        let path = url_path(url, base)?;

        let mut params = Vec::new();
        for segment in segments.filter(|s| !s.trim().is_empty()) {
            let (key, value) =
                segment
                    .split_once('=')
                    .ok_or_else(|| CoreError::InvalidDatabaseUrl {
                        url: url.to_string(),
                        reason: format!("parameter '{segment}' is not KEY=VALUE"),
                    })?;
            params.push((key.trim().to_string(), value.trim().to_string()));
        }

        Ok(Self {
            path: PathBuf::from(path),
            params,
        })
    }

    /// Look up a parameter value, ignoring key case
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// True when the URL carries `IFEXISTS=TRUE`
    pub fn requires_existing(&self) -> bool {
        self.param(IF_EXISTS_PARAM)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }
}

impl std::fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", URL_PREFIX, self.path.display())?;
        for (key, value) in &self.params {
            write!(f, ";{key}={value}")?;
        }
        Ok(())
    }
}

/// Turn the configured URL into a fully qualified one anchored at `home`.
///
/// Parameters of the configured URL are dropped. A path starting with `./`
/// is rebuilt under `home`; any other path is kept as written. The result
/// always ends with `;IFEXISTS=TRUE` so probing a wrong home never creates
/// an empty database.
pub fn resolve_database_url(home: &Path, configured_url: &str) -> CoreResult<String> {
    let base = configured_url.split(';').next().unwrap_or_default();
    let path = url_path(configured_url, base)?;

    let resolved = match path
        .strip_prefix("./")
        .or_else(|| path.strip_prefix(".\\"))
    {
        Some(relative) => home.join(relative),
        None => PathBuf::from(path),
    };

    let url = DatabaseUrl {
        path: resolved,
        params: vec![(IF_EXISTS_PARAM.to_string(), "TRUE".to_string())],
    };
    log::debug!("Resolved system database URL {configured_url} -> {url}");
    Ok(url.to_string())
}

fn url_path<'a>(url: &str, base: &'a str) -> CoreResult<&'a str> {
    let path = base
        .trim()
        .strip_prefix(URL_PREFIX)
        .ok_or_else(|| CoreError::InvalidDatabaseUrl {
            url: url.to_string(),
            reason: format!("expected a URL starting with '{URL_PREFIX}'"),
        })?;
    if path.is_empty() {
        return Err(CoreError::InvalidDatabaseUrl {
            url: url.to_string(),
            reason: "database path is empty".to_string(),
        });
    }
    Ok(path)
}

#[cfg(test)]
#[path = "database_url_test.rs"]
mod tests;
