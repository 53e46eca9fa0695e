use crate::encoding::Encoding;
use crate::model::ModelFormat;
use crate::record::DecodePolicy;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Prompt rendering settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    pub model: ModelFormat,
}

/// Decode settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DecodeConfig {
    pub encoding: Encoding,
    pub policy: DecodePolicy,
}

/// Main configuration struct
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub decode: DecodeConfig,
}

impl Config {
    /// Get the global config directory path
    pub fn global_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("llmspec"))
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_config_dir().map(|d| d.join("llmspec.yml"))
    }

    /// Get the local config directory path (relative to work_dir)
    pub fn local_config_dir(work_dir: &Path) -> PathBuf {
        work_dir.join(".llmspec")
    }

    /// Get the local config file path (relative to work_dir)
    pub fn local_config_path(work_dir: &Path) -> PathBuf {
        Self::local_config_dir(work_dir).join("llmspec.yml")
    }

    /// Load configuration with the cascade: explicit -> local -> global -> defaults
    pub fn load(config_path: Option<&PathBuf>, work_dir: &Path) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let local_config = Self::local_config_path(work_dir);
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        if let Some(global_config) = Self::global_config_path()
            && global_config.exists()
        {
            match Self::load_from_file(&global_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", global_config.display(), e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        fs::write(&path, content).context("Failed to write config file")?;
        log::info!("Saved config to: {}", path.as_ref().display());
        Ok(())
    }

    /// Save to the local config path (.llmspec/llmspec.yml)
    pub fn save_local(&self, work_dir: &Path) -> Result<()> {
        self.save(Self::local_config_path(work_dir))
    }
}
