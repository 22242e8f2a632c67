//! Mod configuration loader.

use std::path::Path;

use stamina_core::{StaminaConfig, StaminaSchema};

use crate::formats::ConfigFile;
use crate::loaders::{LoadResult, read_file, read_file_async, write_file};

/// Serialization format of a configuration file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Picks the format from the file extension. Anything but `.toml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Loader for the mod configuration from JSON or TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a configuration file against the built-in schema.
    pub fn load(path: &Path) -> LoadResult<StaminaConfig> {
        let content = read_file(path)?;
        Self::parse(&content, ConfigFormat::from_path(path))
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Async variant of [`ConfigLoader::load`].
    pub async fn load_async(path: &Path) -> LoadResult<StaminaConfig> {
        let content = read_file_async(path).await?;
        Self::parse(&content, ConfigFormat::from_path(path))
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Parse and validate configuration text.
    pub fn parse(content: &str, format: ConfigFormat) -> LoadResult<StaminaConfig> {
        let file = Self::parse_file(content, format)?;
        let config = file.into_config(&StaminaSchema::stamina())?;
        Ok(config)
    }

    /// Parse configuration text without interpreting it.
    pub fn parse_file(content: &str, format: ConfigFormat) -> LoadResult<ConfigFile> {
        let file = match format {
            ConfigFormat::Json => serde_json::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config JSON: {}", e))?,
            ConfigFormat::Toml => toml::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?,
        };
        Ok(file)
    }

    /// Write a configuration file, choosing the format from the extension.
    pub fn save(path: &Path, file: &ConfigFile) -> LoadResult<()> {
        let content = match ConfigFormat::from_path(path) {
            ConfigFormat::Json => serde_json::to_string_pretty(file)
                .map_err(|e| anyhow::anyhow!("Failed to serialize config JSON: {}", e))?,
            ConfigFormat::Toml => toml::to_string_pretty(file)
                .map_err(|e| anyhow::anyhow!("Failed to serialize config TOML: {}", e))?,
        };
        write_file(path, &content)
    }
}
