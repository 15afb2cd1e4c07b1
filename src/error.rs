use std::path::PathBuf;

/// Malformed data-URL input.
#[derive(thiserror::Error, Debug)]
pub enum DataUrlError {
    #[error("not a data URL")]
    MissingScheme,

    #[error("data URL is not base64 encoded")]
    NotBase64,

    #[error("expected a data:image/png;base64, URL")]
    NotPng,

    #[error("invalid base64 payload: {0}")]
    Payload(#[from] base64::DecodeError),
}

/// Failures inside the grid rasterizer.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("unsupported image source: {0}")]
    UnsupportedSource(String),

    #[error(transparent)]
    DataUrl(#[from] DataUrlError),

    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("render task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Failures while saving a downloaded image.
#[derive(thiserror::Error, Debug)]
pub enum DownloadError {
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures of the native host collaborators.
#[derive(thiserror::Error, Debug)]
pub enum HostError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is not a recognised image file")]
    UnknownFormat { path: PathBuf },
}

/// Static asset lookup failures.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum AssetError {
    #[error("no asset for '{0}'")]
    NotFound(String),

    #[error("invalid asset manifest: {0}")]
    Manifest(String),
}

/// Errors that can occur when loading configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config validation failed: {message}")]
    Validation { message: String },
}

impl ConfigError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
