//! Configuration loading and save-file resolution.
//!
//! An optional `config.toml` in the platform config directory (for example
//! `~/.config/tsk/config.toml` on Linux) can relocate the save file:
//!
//! ```toml
//! [data]
//! dir = "/home/me/notes"
//! file = "tasks.txt"
//! ```
//!
//! Resolution precedence for the save file: `--file` flag (or `TSK_FILE`
//! env, handled by clap) > config file > platform data directory default.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Save file name used when nothing overrides it.
const DEFAULT_FILE_NAME: &str = "tasks.txt";

/// Name of the config file within the config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Save-file location
    #[serde(default)]
    pub data: DataConfig,
}

/// Save-file location configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the save file; platform data dir when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Save file name within the directory
    #[serde(default = "default_file_name")]
    pub file: String,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: None,
            file: default_file_name(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, falling back to
    /// defaults when no config file exists.
    pub fn load() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|err| {
            Error::InvalidConfig(format!("cannot read {}: {err}", path.display()))
        })?;
        toml::from_str(&contents)
            .map_err(|err| Error::InvalidConfig(format!("{}: {err}", path.display())))
    }

    /// The save file this configuration points at.
    pub fn data_file(&self) -> Result<PathBuf> {
        let dir = match &self.data.dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };
        Ok(dir.join(&self.data.file))
    }
}

/// Resolve the save file path: an explicit override wins, otherwise the
/// config file (or its defaults) decides.
pub fn resolve_data_file(override_path: Option<PathBuf>) -> Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path),
        None => Config::load()?.data_file(),
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "tsk")
        .ok_or_else(|| Error::InvalidConfig("cannot determine the home directory".to_string()))
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tsk").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn default_data_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_use_the_standard_file_name() {
        let config = Config::default();
        assert_eq!(config.data.file, "tasks.txt");
        assert!(config.data.dir.is_none());
    }

    #[test]
    fn data_file_joins_configured_dir_and_file() {
        let config = Config {
            data: DataConfig {
                dir: Some(PathBuf::from("/srv/tasks")),
                file: "work.txt".to_string(),
            },
        };
        assert_eq!(
            config.data_file().unwrap(),
            PathBuf::from("/srv/tasks/work.txt")
        );
    }

    #[test]
    fn load_from_parses_partial_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[data]\ndir = \"/srv/tasks\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.data.dir, Some(PathBuf::from("/srv/tasks")));
        assert_eq!(config.data.file, "tasks.txt");
    }

    #[test]
    fn load_from_rejects_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "data = not toml").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn explicit_override_wins() {
        let resolved = resolve_data_file(Some(PathBuf::from("/tmp/list.txt"))).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/list.txt"));
    }
}
