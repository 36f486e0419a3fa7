use super::Result;
use crate::error::StorageError;
use crate::storage::delimited::DEFAULT_DELIMITER;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Built-in fallback paths, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "../Corp_Summary.csv";
pub const DEFAULT_REPORT_FILE: &str = "../report.csv";

/// Optional user configuration. Every field has a built-in default, so a
/// missing config file is not an error.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Config {
    pub data_file: Option<String>,
    pub report_file: Option<String>,
    pub delimiter: Option<char>,
}

impl Config {
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|err| {
            StorageError::ConfigParseError {
                message: err.to_string(),
            }
        })?;

        Ok(config)
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content =
            toml::to_string(self).map_err(|err| StorageError::ConfigParseError {
                message: err.to_string(),
            })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(config_dir.join("corp-report").join("config.toml"))
    }

    pub fn data_file(&self) -> &str {
        self.data_file.as_deref().unwrap_or(DEFAULT_DATA_FILE)
    }

    pub fn report_file(&self) -> &str {
        self.report_file.as_deref().unwrap_or(DEFAULT_REPORT_FILE)
    }

    pub fn delimiter(&self) -> char {
        self.delimiter.unwrap_or(DEFAULT_DELIMITER)
    }
}
