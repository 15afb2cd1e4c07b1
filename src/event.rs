//! Inputs to the update function.

use std::path::Path;
use std::sync::Arc;

use crate::error::HostError;
use crate::Language;

/// Everything the update function reacts to.
///
/// The first group is raised by the user through [`Props`](crate::Props)
/// callbacks; `GriddedImageReady` and `ResetDownloadFlag` are replies from
/// effects.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    PickImage,
    ImageSelected(SelectedFile),
    ImageLoaded(String),
    ImageSizeLoaded { width: u32, height: u32 },
    GridSizeChanged(String),
    GridColorChanged(String),
    GridThicknessChanged(String),
    /// Opacity typed as a fraction (`0.0`–`1.0`).
    GridOpacityChanged(String),
    /// Opacity typed as a whole percentage (`0`–`100`).
    GridOpacityPercentChanged(String),
    NiceButtonClicked,
    DownloadClicked,
    LanguageChanged(Language),
    GriddedImageReady(String),
    ResetDownloadFlag,
}

/// A file handed over by the file picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, inferring its MIME type from the extension.
    pub fn from_path(path: &Path) -> Result<Self, HostError> {
        let format = image::ImageFormat::from_path(path).map_err(|_| HostError::UnknownFormat {
            path: path.to_path_buf(),
        })?;
        let bytes = std::fs::read(path).map_err(|source| HostError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(name, format.to_mime_type(), bytes))
    }

    /// Whether the file's MIME type is covered by an `accept` list such as
    /// `["image/*"]`.
    pub fn matches(&self, accept: &[String]) -> bool {
        accept.iter().any(|pattern| match pattern.strip_suffix("/*") {
            Some(family) => self
                .mime
                .split_once('/')
                .is_some_and(|(kind, _)| kind.eq_ignore_ascii_case(family)),
            None => pattern.eq_ignore_ascii_case(&self.mime),
        })
    }
}
