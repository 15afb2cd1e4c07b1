//! Start-up configuration.
//!
//! ```toml
//! [defaults]
//! language = "english"
//! grid_size = 12
//! grid_color = "#ffffff"
//! grid_thickness = 2
//! grid_opacity = 0.8
//!
//! [download]
//! directory = "exports"
//! file_name = "gridded-image.png"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dispatch::DEFAULT_DOWNLOAD_FILE_NAME;
use crate::error::ConfigError;
use crate::model::{
    DEFAULT_GRID_COLOR, DEFAULT_GRID_OPACITY, DEFAULT_GRID_SIZE, DEFAULT_GRID_THICKNESS, DEFAULT_LANGUAGE,
    GRID_OPACITY_RANGE, GRID_SIZE_RANGE, GRID_THICKNESS_RANGE,
};
use crate::{GridSettings, Language, Model};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub download: DownloadConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Defaults {
    #[serde(default = "default_language")]
    pub language: Language,
    #[serde(default = "default_grid_size")]
    pub grid_size: u32,
    #[serde(default = "default_grid_color")]
    pub grid_color: String,
    #[serde(default = "default_grid_thickness")]
    pub grid_thickness: u32,
    #[serde(default = "default_grid_opacity")]
    pub grid_opacity: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            language: default_language(),
            grid_size: default_grid_size(),
            grid_color: default_grid_color(),
            grid_thickness: default_grid_thickness(),
            grid_opacity: default_grid_opacity(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DownloadConfig {
    #[serde(default = "default_download_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            directory: default_download_directory(),
            file_name: default_file_name(),
        }
    }
}

fn default_language() -> Language {
    DEFAULT_LANGUAGE
}

fn default_grid_size() -> u32 {
    DEFAULT_GRID_SIZE
}

fn default_grid_color() -> String {
    DEFAULT_GRID_COLOR.to_string()
}

fn default_grid_thickness() -> u32 {
    DEFAULT_GRID_THICKNESS
}

fn default_grid_opacity() -> f64 {
    DEFAULT_GRID_OPACITY
}

fn default_download_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_file_name() -> String {
    DEFAULT_DOWNLOAD_FILE_NAME.to_string()
}

impl Config {
    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the grid defaults against the ranges the UI allows.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let defaults = &self.defaults;
        if !GRID_SIZE_RANGE.contains(&defaults.grid_size) {
            return Err(ConfigError::validation(format!(
                "grid_size {} outside {:?}",
                defaults.grid_size, GRID_SIZE_RANGE
            )));
        }
        if !GRID_THICKNESS_RANGE.contains(&defaults.grid_thickness) {
            return Err(ConfigError::validation(format!(
                "grid_thickness {} outside {:?}",
                defaults.grid_thickness, GRID_THICKNESS_RANGE
            )));
        }
        if !GRID_OPACITY_RANGE.contains(&defaults.grid_opacity) {
            return Err(ConfigError::validation(format!(
                "grid_opacity {} outside {:?}",
                defaults.grid_opacity, GRID_OPACITY_RANGE
            )));
        }
        if self.download.file_name.trim().is_empty() {
            return Err(ConfigError::validation("download file_name must not be empty"));
        }
        Ok(())
    }

    /// The state the application starts in.
    pub fn initial_model(&self) -> Model {
        Model {
            language: self.defaults.language,
            grid: GridSettings {
                size: self.defaults.grid_size,
                color: self.defaults.grid_color.clone(),
                thickness: self.defaults.grid_thickness,
                opacity: self.defaults.grid_opacity,
            },
            ..Model::default()
        }
    }
}
