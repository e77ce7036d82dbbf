//! Installation configuration parsed from `<IronTestHome>/config.yml`

use crate::database_url::URL_PREFIX;
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the installation configuration inside the home directory
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Installation configuration from config.yml
///
/// The file is shared with the web application, so keys this tool does not
/// need (server, logging, view renderers) are ignored rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// System database connection parameters
    #[serde(alias = "database")]
    pub system_database: DataSourceConfig,
}

/// Connection parameters for the system database
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceConfig {
    /// JDBC-style URL, e.g. `jdbc:h2:./database/system;AUTO_SERVER=TRUE`
    pub url: String,

    /// Database user
    #[serde(default)]
    pub user: String,

    /// Database password
    #[serde(default)]
    pub password: String,

    /// Driver class carried over from the web application's config
    #[serde(default)]
    pub driver_class: Option<String>,
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from an Iron Test home directory
    pub fn load_from_home(home: &Path) -> CoreResult<Self> {
        if !home.is_dir() {
            return Err(CoreError::HomeNotFound {
                path: home.display().to_string(),
            });
        }
        Self::load(&home.join(CONFIG_FILE_NAME))
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.system_database.url.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "systemDatabase.url cannot be empty".to_string(),
            });
        }
        if !self.system_database.url.trim().starts_with(URL_PREFIX) {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "systemDatabase.url must start with '{URL_PREFIX}', got '{}'",
                    self.system_database.url
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
