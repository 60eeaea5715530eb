//! Configuration loading and root folder resolution

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable overriding the root folder
pub const ROOT_FOLDER_ENV: &str = "IOTV_ROOT_FOLDER";

/// Database file name used when the TOML config does not name one
pub const DEFAULT_DATABASE_FILE: &str = "database.db";

/// Optional settings read from `config.toml`
///
/// Every field may be omitted; command-line and environment values take
/// precedence over anything set here.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TomlConfig {
    pub root_folder: Option<PathBuf>,
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub database_file: Option<String>,
}

impl TomlConfig {
    /// Parse a TOML config file
    ///
    /// A missing file is not an error: defaults are returned with a warning.
    /// A file that exists but does not parse is a [`Error::Config`].
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!("Config file not found: {} (using defaults)", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str::<TomlConfig>(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        info!("Loaded config file: {}", path.display());
        Ok(config)
    }

    /// Load from the platform config location, if one exists
    pub fn load_default() -> Result<Self> {
        match default_config_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn database_file(&self) -> &str {
        self.database_file.as_deref().unwrap_or(DEFAULT_DATABASE_FILE)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}

/// Root folder resolution, highest priority first:
/// 1. Command-line argument
/// 2. `IOTV_ROOT_FOLDER` environment variable
/// 3. `root_folder` in the TOML config
/// 4. OS-dependent compiled default
#[derive(Debug, Clone, Default)]
pub struct RootFolderResolver {
    cli_arg: Option<PathBuf>,
    toml_value: Option<PathBuf>,
}

impl RootFolderResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cli_arg(mut self, path: Option<PathBuf>) -> Self {
        self.cli_arg = path;
        self
    }

    pub fn with_toml_config(mut self, config: &TomlConfig) -> Self {
        self.toml_value = config.root_folder.clone();
        self
    }

    pub fn resolve(&self) -> PathBuf {
        if let Some(path) = &self.cli_arg {
            return path.clone();
        }

        if let Ok(path) = std::env::var(ROOT_FOLDER_ENV) {
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }

        if let Some(path) = &self.toml_value {
            return path.clone();
        }

        default_root_folder()
    }
}

/// Prepares the resolved root folder for use
#[derive(Debug, Clone)]
pub struct RootFolderInitializer {
    root_folder: PathBuf,
    database_file: String,
}

impl RootFolderInitializer {
    pub fn new(root_folder: PathBuf) -> Self {
        Self {
            root_folder,
            database_file: DEFAULT_DATABASE_FILE.to_string(),
        }
    }

    pub fn with_database_file(mut self, name: impl Into<String>) -> Self {
        self.database_file = name.into();
        self
    }

    /// Create the root folder (and parents) if missing
    pub fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_folder.exists() {
            std::fs::create_dir_all(&self.root_folder)?;
            info!("Created root folder: {}", self.root_folder.display());
        }
        Ok(())
    }

    pub fn root_folder(&self) -> &Path {
        &self.root_folder
    }

    pub fn database_path(&self) -> PathBuf {
        self.root_folder.join(&self.database_file)
    }
}

/// `<config dir>/iotv/config.toml`, falling back to `/etc/iotv/config.toml` on Linux
fn default_config_path() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("iotv").join("config.toml"));
    if let Some(path) = &user_config {
        if path.exists() {
            return user_config;
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/iotv/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// Get OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("iotv"))
        .unwrap_or_else(|| PathBuf::from("./iotv_data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_config_partial_file() {
        let config: TomlConfig = toml::from_str("port = 5100\n").unwrap();
        assert_eq!(config.port, Some(5100));
        assert!(config.root_folder.is_none());
        assert_eq!(config.database_file(), "database.db");
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_initializer_database_path() {
        let init = RootFolderInitializer::new(PathBuf::from("/tmp/iotv-root"));
        assert_eq!(init.database_path(), PathBuf::from("/tmp/iotv-root/database.db"));

        let init = init.with_database_file("devices.db");
        assert_eq!(init.database_path(), PathBuf::from("/tmp/iotv-root/devices.db"));
    }

    #[test]
    fn test_default_root_folder_not_empty() {
        assert!(!default_root_folder().as_os_str().is_empty());
    }
}
