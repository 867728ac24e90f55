//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the loader and the
//! page renderer. Nothing reads process-wide environment variables while a page is being served.

use crate::constants::{DEFAULT_HEADSHOT_PATH, DEFAULT_PROJECTS_PATH, DEFAULT_RESUME_PATH};
use crate::{PortfolioError, PortfolioResult};
use folio_types::GridColumns;
use std::path::{Path, PathBuf};

/// Environment variable names read by [`ConfigOverrides::from_env`].
pub const ENV_ROOT: &str = "FOLIO_ROOT";
pub const ENV_PROJECTS_PATH: &str = "FOLIO_PROJECTS_PATH";
pub const ENV_HEADSHOT_PATH: &str = "FOLIO_HEADSHOT_PATH";
pub const ENV_RESUME_PATH: &str = "FOLIO_RESUME_PATH";
pub const ENV_GRID_COLUMNS: &str = "FOLIO_GRID_COLUMNS";

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    root: PathBuf,
    projects_path: PathBuf,
    headshot_path: PathBuf,
    resume_path: PathBuf,
    grid_columns: GridColumns,
}

/// Raw, optional configuration values as they arrive from the environment or a CLI.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub root: Option<PathBuf>,
    pub projects_path: Option<PathBuf>,
    pub headshot_path: Option<PathBuf>,
    pub resume_path: Option<PathBuf>,
    pub grid_columns: Option<String>,
}

impl ConfigOverrides {
    /// Collect overrides from the process environment.
    ///
    /// Only call this during startup.
    pub fn from_env() -> Self {
        fn path_var(name: &str) -> Option<PathBuf> {
            std::env::var(name)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        }

        Self {
            root: path_var(ENV_ROOT),
            projects_path: path_var(ENV_PROJECTS_PATH),
            headshot_path: path_var(ENV_HEADSHOT_PATH),
            resume_path: path_var(ENV_RESUME_PATH),
            grid_columns: std::env::var(ENV_GRID_COLUMNS).ok(),
        }
    }
}

impl CoreConfig {
    /// Create a new `CoreConfig` from fully resolved values.
    pub fn new(
        root: PathBuf,
        projects_path: PathBuf,
        headshot_path: PathBuf,
        resume_path: PathBuf,
        grid_columns: GridColumns,
    ) -> Self {
        Self {
            root,
            projects_path,
            headshot_path,
            resume_path,
            grid_columns,
        }
    }

    /// Resolve configuration from overrides, falling back to the defaults under `root`.
    ///
    /// Relative override paths are taken relative to the root directory; absolute paths are kept
    /// as given. If no root is supplied the current working directory is used.
    ///
    /// # Errors
    ///
    /// Returns `PortfolioError::InvalidConfig` if the root is not a directory or the column
    /// count is not a positive integer.
    pub fn resolve(overrides: ConfigOverrides) -> PortfolioResult<Self> {
        let root = overrides.root.unwrap_or_else(|| PathBuf::from("."));
        if !root.is_dir() {
            return Err(PortfolioError::InvalidConfig(format!(
                "{} is not a directory: {}",
                ENV_ROOT,
                root.display()
            )));
        }

        let locate = |value: Option<PathBuf>, default: &str| -> PathBuf {
            let path = value.unwrap_or_else(|| PathBuf::from(default));
            if path.is_absolute() {
                path
            } else {
                root.join(path)
            }
        };

        let projects_path = locate(overrides.projects_path, DEFAULT_PROJECTS_PATH);
        let headshot_path = locate(overrides.headshot_path, DEFAULT_HEADSHOT_PATH);
        let resume_path = locate(overrides.resume_path, DEFAULT_RESUME_PATH);
        let grid_columns = grid_columns_from_env_value(overrides.grid_columns)?;

        Ok(Self::new(
            root,
            projects_path,
            headshot_path,
            resume_path,
            grid_columns,
        ))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn projects_path(&self) -> &Path {
        &self.projects_path
    }

    pub fn headshot_path(&self) -> &Path {
        &self.headshot_path
    }

    pub fn resume_path(&self) -> &Path {
        &self.resume_path
    }

    pub fn grid_columns(&self) -> GridColumns {
        self.grid_columns
    }
}

/// Parse the grid column count from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default of three columns.
pub fn grid_columns_from_env_value(value: Option<String>) -> PortfolioResult<GridColumns> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value
        .map(|v| v.parse::<GridColumns>())
        .transpose()
        .map_err(|e| PortfolioError::InvalidConfig(format!("{}: {}", ENV_GRID_COLUMNS, e)))?;

    Ok(parsed.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn resolve_uses_defaults_under_root() {
        let temp = TempDir::new().unwrap();
        let cfg = CoreConfig::resolve(ConfigOverrides {
            root: Some(temp.path().to_path_buf()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(cfg.projects_path(), temp.path().join("projects.json"));
        assert_eq!(cfg.headshot_path(), temp.path().join("assets/headshot.jpg"));
        assert_eq!(
            cfg.resume_path(),
            temp.path().join("resume/James_Simelus_Resume.pdf")
        );
        assert_eq!(cfg.grid_columns().get(), 3);
    }

    #[test]
    fn resolve_keeps_absolute_overrides() {
        let temp = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let data = elsewhere.path().join("data.json");

        let cfg = CoreConfig::resolve(ConfigOverrides {
            root: Some(temp.path().to_path_buf()),
            projects_path: Some(data.clone()),
            headshot_path: Some(PathBuf::from("img/me.png")),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(cfg.projects_path(), data);
        assert_eq!(cfg.headshot_path(), temp.path().join("img/me.png"));
    }

    #[test]
    fn resolve_rejects_missing_root() {
        let temp = TempDir::new().unwrap();
        let result = CoreConfig::resolve(ConfigOverrides {
            root: Some(temp.path().join("nope")),
            ..Default::default()
        });

        assert!(matches!(result, Err(PortfolioError::InvalidConfig(_))));
    }

    #[test]
    fn grid_columns_blank_means_default() {
        assert_eq!(grid_columns_from_env_value(None).unwrap().get(), 3);
        assert_eq!(
            grid_columns_from_env_value(Some("  ".into())).unwrap().get(),
            3
        );
        assert_eq!(
            grid_columns_from_env_value(Some("2".into())).unwrap().get(),
            2
        );
    }

    #[test]
    fn grid_columns_zero_is_invalid_config() {
        let err = grid_columns_from_env_value(Some("0".into())).unwrap_err();
        assert!(err.is_configuration());
    }
}
