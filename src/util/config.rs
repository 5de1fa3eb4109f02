use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "RateDisplay";
const APP_NAME: &str = "RateDisplay";

/// Inputs handed to the rate display at launch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    pub business_name: Option<String>,
    pub discount_rate: Option<f64>,
}

impl LaunchConfig {
    /// Values given on the command line (or via env) win over the file.
    pub fn overlay(self, business_name: Option<String>, discount_rate: Option<f64>) -> Self {
        Self {
            business_name: business_name.or(self.business_name),
            discount_rate: discount_rate.or(self.discount_rate),
        }
    }
}

pub fn default_config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.json"))
}

pub fn load_config_file(path: &Path) -> Result<LaunchConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Io(err),
    })?;
    Ok(serde_json::from_str(&data)?)
}

/// Loads the explicit config file, or the default one if it exists.
///
/// A missing default file yields `Ok(None)`; a missing explicit file is an error.
pub fn load_launch_config(explicit: Option<&Path>) -> Result<Option<LaunchConfig>, ConfigError> {
    if let Some(path) = explicit {
        return load_config_file(path).map(Some);
    }

    let Some(path) = default_config_file() else {
        return Ok(None);
    };

    match load_config_file(&path) {
        Ok(config) => Ok(Some(config)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(err) => Err(err),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
