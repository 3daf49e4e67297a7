//! Configuration types and parsing for silverflow.yml

use crate::error::{CoreError, CoreResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Project configuration from silverflow.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Schema holding the raw (bronze) tables
    #[serde(default = "default_bronze_schema")]
    pub bronze_schema: String,

    /// Schema holding the cleansed (silver) tables
    #[serde(default = "default_silver_schema")]
    pub silver_schema: String,

    /// Fixed "current date" for date rules that compare against today.
    ///
    /// When unset the batch uses the local date at run start.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Database path (DuckDB file or :memory:)
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

const DEFAULT_DB_PATH: &str = ":memory:";

const CONFIG_FILE_NAMES: [&str; 2] = ["silverflow.yml", "silverflow.yaml"];

fn default_db_path() -> String {
    DEFAULT_DB_PATH.to_string()
}

fn default_bronze_schema() -> String {
    "bronze".to_string()
}

fn default_silver_schema() -> String {
    "silver".to_string()
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
        let config = Self::from_yaml(&content)?;
        log::debug!("Loaded config '{}' from {}", config.name, path.display());
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for silverflow.yml or silverflow.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
            .map(|path| Self::load(&path))
            .unwrap_or_else(|| {
                Err(CoreError::ConfigNotFound {
                    path: dir.join(CONFIG_FILE_NAMES[0]).display().to_string(),
                })
            })
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> CoreResult<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Project name cannot be empty".to_string(),
            });
        }

        for (field, value) in [
            ("bronze_schema", &self.bronze_schema),
            ("silver_schema", &self.silver_schema),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::ConfigInvalid {
                    message: format!("'{}' cannot be empty", field),
                });
            }
        }

        if self.bronze_schema == self.silver_schema {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "bronze_schema and silver_schema must differ (both are '{}')",
                    self.bronze_schema
                ),
            });
        }

        if self.database.path.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "database.path cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
