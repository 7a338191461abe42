use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Run configuration. Every field has a default, so a partial file is
/// enough to steer one conversion run.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_dataset")]
    pub dataset: String,
    #[serde(default = "default_data_folder")]
    pub data_folder: PathBuf,
    #[serde(default = "default_save_folder")]
    pub save_folder: PathBuf,
}

fn default_dataset() -> String {
    "highD".to_string()
}

fn default_data_folder() -> PathBuf {
    PathBuf::from("./original_data")
}

fn default_save_folder() -> PathBuf {
    PathBuf::from("./processed_data")
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
