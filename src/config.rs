use crate::cli::OutputFormat;
use crate::core::resolver::DEFAULT_RECOMMENDATION_LIMIT;
use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Maximum number of plants listed per season
    pub recommendation_limit: usize,
    pub color: bool,
    pub format: OutputFormat,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
            color: true,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        Self::ensure_config_exists()?;
        Self::load_custom(&Self::config_file_path())
    }

    /// Load from `--config` when given, otherwise from the default location
    pub fn load_from(config_path: Option<&Path>) -> AppResult<Self> {
        match config_path {
            Some(path) => Self::load_custom(path),
            None => Self::load(),
        }
    }

    /// The file the config subcommands act on
    pub fn effective_path(config_path: Option<&Path>) -> PathBuf {
        config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file_path)
    }

    pub fn ensure_config_exists() -> AppResult<()> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            tracing::info!(path = %config_path.display(), "writing default configuration");
            Config::default().save_to(&config_path)?;
        }
        Ok(())
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "config file missing, using defaults");
            return Ok(Config::default());
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        let config = Self::parse(&content)?;
        tracing::info!(path = %config_path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.general.recommendation_limit == 0 {
            return Err(AppError::Config(
                "recommendation_limit must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Io(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Serialization(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content).map_err(|e| AppError::Io(e.to_string()))?;

        Ok(())
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("garden-advisor")
            .join("config.toml")
    }
}
