//! Engine configuration.
//!
//! Loaded from a TOML file (`gradlab.toml` by default). Every field has a
//! default, so an empty or missing file yields a working configuration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "gradlab.toml";

/// Export canvas width in pixels
pub const DEFAULT_WIDTH: u32 = 1920;
/// Export canvas height in pixels
pub const DEFAULT_HEIGHT: u32 = 1080;

/// Largest accepted canvas side in pixels
pub const MAX_DIMENSION: u32 = 16_384;

/// Upper bound for per-axis pattern sub-samples
pub const MAX_SUPERSAMPLE: u32 = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Raster export section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    /// Sub-samples per axis when covering pattern stripe edges (1 = none)
    #[serde(default = "default_supersample")]
    pub supersample: u32,

    /// Directory exported PNGs are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

fn default_supersample() -> u32 {
    2
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            supersample: default_supersample(),
            output_dir: default_output_dir(),
        }
    }
}

impl RenderConfig {
    /// Same settings with a different canvas size.
    pub fn with_size(self, width: u32, height: u32) -> Self {
        Self { width, height, ..self }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "render size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(ConfigError::Invalid(format!(
                "render size must be at most {MAX_DIMENSION}x{MAX_DIMENSION}, got {}x{}",
                self.width, self.height
            )));
        }
        if !(1..=MAX_SUPERSAMPLE).contains(&self.supersample) {
            return Err(ConfigError::Invalid(format!(
                "render.supersample must be in 1..={MAX_SUPERSAMPLE}, got {}",
                self.supersample
            )));
        }
        Ok(())
    }
}

/// Logging section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// `env_logger` filter, e.g. "info" or "gradlab_engine=debug"
    #[serde(default)]
    pub filter: Option<String>,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub logging: LoggingSection,
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match Self::try_load(path)? {
            Some(config) => {
                log::debug!("loaded config from {}", path.display());
                Ok(config)
            }
            None => {
                log::info!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
        }
    }

    /// Like [`EngineConfig::load`] but silent: `None` when `path` does not
    /// exist. For callers that install the logger from the loaded config.
    pub fn try_load(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content).map(Some)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.render.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.render.width, 1920);
        assert_eq!(config.render.height, 1080);
    }

    #[test]
    fn partial_render_section() {
        let config = EngineConfig::from_toml_str(
            r#"
            [render]
            width = 640
            output_dir = "out"

            [logging]
            filter = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.render.width, 640);
        assert_eq!(config.render.height, 1080);
        assert_eq!(config.render.output_dir, PathBuf::from("out"));
        assert_eq!(config.logging.filter.as_deref(), Some("debug"));
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = EngineConfig::from_toml_str("[render]\nheight = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn oversized_render_is_rejected() {
        let err = EngineConfig::from_toml_str("[render]\nwidth = 4294967295\nheight = 4294967295\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(EngineConfig::from_toml_str(&format!("[render]\nwidth = {MAX_DIMENSION}\n")).is_ok());
    }

    #[test]
    fn supersample_out_of_range_is_rejected() {
        let err = EngineConfig::from_toml_str("[render]\nsupersample = 9\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = EngineConfig::from_toml_str("[render\nwidth = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EngineConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn try_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(EngineConfig::try_load(&dir.path().join("absent.toml")).unwrap(), None);

        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[logging]\nfilter = \"warn\"\n").unwrap();
        let config = EngineConfig::try_load(&path).unwrap().unwrap();
        assert_eq!(config.logging.filter.as_deref(), Some("warn"));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[render]\nsupersample = 4\n").unwrap();
        assert_eq!(EngineConfig::load(&path).unwrap().render.supersample, 4);
    }
}
