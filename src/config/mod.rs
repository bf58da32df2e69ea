use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_project")]
    pub default_project: String,
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

fn default_log_dir() -> String {
    "~/Desktop/rohan/league-rohan".to_string()
}
fn default_project() -> String {
    "League".to_string()
}
fn default_tick_millis() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            default_project: default_project(),
            tick_millis: default_tick_millis(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworklog.conf")
    }

    /// Return the full path of the diagnostic log file
    pub fn log_file() -> PathBuf {
        Self::config_dir().join("rworklog.log")
    }

    /// Load configuration from file, reporting unreadable or malformed files
    pub fn try_load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load configuration from file, or return defaults if not found or broken
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to default configuration");
                Self::default()
            }
        }
    }

    /// Write the default configuration file, creating the directory if needed.
    /// An existing file is left untouched unless `force` is set.
    pub fn init_all(force: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if path.exists() && !force {
            return Ok(path);
        }

        let yaml = serde_yaml::to_string(&Self::default())?;
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(path)
    }
}
