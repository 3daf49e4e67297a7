//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use sf_core::Config;
use sf_db::DuckDbBackend;
use std::fmt;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that RAII destructors run and cleanup happens properly.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) u8);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control flow only; nothing user-facing to print
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Exit status of a batch that aborted on a failed stage
pub(crate) const BATCH_FAILED: u8 = 4;

/// Load the project config, applying global overrides
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    let mut config = match &global.config {
        Some(path) => Config::load(Path::new(path))
            .with_context(|| format!("Failed to load config: {}", path))?,
        None => Config::load_from_dir(Path::new(&global.project_dir))
            .context("Failed to load project config")?,
    };

    if let Some(db_path) = &global.database {
        log::debug!("Database path overridden: {}", db_path);
        config.database.path = db_path.clone();
    }

    Ok(config)
}

/// Open the configured database
pub(crate) fn open_database(config: &Config) -> Result<DuckDbBackend> {
    DuckDbBackend::new(&config.database.path)
        .with_context(|| format!("Failed to open database: {}", config.database.path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn global(dir: &Path) -> GlobalArgs {
        GlobalArgs {
            verbose: false,
            project_dir: dir.display().to_string(),
            config: None,
            database: None,
        }
    }

    #[test]
    fn test_load_config_from_project_dir() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("silverflow.yml"), "name: warehouse\n").unwrap();

        let config = load_config(&global(dir.path())).unwrap();
        assert_eq!(config.name, "warehouse");
        assert_eq!(config.database.path, ":memory:");
    }

    #[test]
    fn test_database_override() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("silverflow.yml"), "name: warehouse\n").unwrap();

        let mut args = global(dir.path());
        args.database = Some("other.duckdb".to_string());
        let config = load_config(&args).unwrap();
        assert_eq!(config.database.path, "other.duckdb");
    }

    #[test]
    fn test_explicit_config_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.yml");
        fs::write(&path, "name: custom\nsilver_schema: clean\n").unwrap();

        let mut args = global(Path::new("/nonexistent"));
        args.config = Some(path.display().to_string());
        let config = load_config(&args).unwrap();
        assert_eq!(config.silver_schema, "clean");
    }

    #[test]
    fn test_missing_config_is_error() {
        let dir = tempdir().unwrap();
        let err = load_config(&global(dir.path())).unwrap_err();
        assert!(format!("{:#}", err).contains("E001"));
    }
}
