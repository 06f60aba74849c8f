use crate::images::{default_mapping, MappingEntry};
use crate::supplier::DEFAULT_SUPPLIER_ID;
use crate::utils::{DEFAULT_IMAGE_DIR, DEFAULT_INPUT_CSV, DEFAULT_OUTPUT_CSV};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

fn default_supplier_id() -> String {
    DEFAULT_SUPPLIER_ID.to_string()
}

fn default_input_csv() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_CSV)
}

fn default_output_csv() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_CSV)
}

fn default_image_dir() -> PathBuf {
    PathBuf::from(DEFAULT_IMAGE_DIR)
}

/// Import configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportConfig {
    /// Supplier code written to every catalog row
    #[serde(default = "default_supplier_id")]
    pub supplier_id: String,
    #[serde(default = "default_input_csv")]
    pub input_csv: PathBuf,
    #[serde(default = "default_output_csv")]
    pub output_csv: PathBuf,
    /// Replaces the supplier's `/Uploads/...` photo folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base_path: Option<String>,
    #[serde(default = "default_image_dir")]
    pub image_dir: PathBuf,
    /// Renamed in the order given
    #[serde(default = "default_mapping")]
    pub image_mapping: Vec<MappingEntry>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            supplier_id: default_supplier_id(),
            input_csv: default_input_csv(),
            output_csv: default_output_csv(),
            image_base_path: None,
            image_dir: default_image_dir(),
            image_mapping: default_mapping(),
        }
    }
}

/// Read the configuration file
pub async fn read_config(config_path: &Path) -> Result<Option<ImportConfig>, ConfigError> {
    if !fs::try_exists(config_path).await? {
        return Ok(None);
    }

    let content = fs::read_to_string(config_path).await?;
    let config: ImportConfig = serde_json::from_str(&content)?;
    Ok(Some(config))
}

/// Write the configuration file
pub async fn write_config(config_path: &Path, config: &ImportConfig) -> Result<(), ConfigError> {
    let content = serde_json::to_string_pretty(config)?;
    fs::write(config_path, content).await?;
    Ok(())
}
