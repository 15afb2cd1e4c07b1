//! Side-effect requests produced by the update function.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Event, SelectedFile};

/// How long the "download ready" affordance stays up.
pub const DOWNLOAD_FLAG_RESET_DELAY: Duration = Duration::from_millis(2000);

/// MIME patterns offered by the file picker.
pub const IMAGE_MIME_TYPES: &[&str] = &["image/*"];

/// Parameters handed to the grid rasterizer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridRenderRequest {
    pub url: String,
    pub width: u32,
    pub height: u32,
    /// Cells per axis.
    pub grid: u32,
    pub color: String,
    pub thickness: u32,
    pub opacity: f64,
}

/// Payload handed to the download trigger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    pub data_url: String,
}

impl DownloadRequest {
    pub fn new(data_url: impl Into<String>) -> Self {
        Self {
            data_url: data_url.into(),
        }
    }
}

/// One unit of outside work.
///
/// Requests are plain data: the update function only describes what should
/// happen and the [`Dispatcher`](crate::Dispatcher) carries it out. Each
/// request is dispatched at most once.
#[derive(Clone, Debug, PartialEq)]
pub enum EffectRequest {
    /// Open the file picker. Replies with `ImageSelected`.
    SelectImageFile { accept: Vec<String> },
    /// Turn a picked file into a loadable URL. Replies with `ImageLoaded`.
    ReadAsDataUrl(SelectedFile),
    /// Rasterize the grid. Replies with `GriddedImageReady` on success only.
    RequestGridRender(GridRenderRequest),
    /// Save a PNG data-URL to the user's disk. No reply.
    RequestDownload(DownloadRequest),
    /// Write the language tag to the host document. No reply.
    PersistLanguageTag(&'static str),
    /// Deliver `event` after `delay`.
    ScheduleDelayed { event: Box<Event>, delay: Duration },
    LogDebug(String),
}

impl EffectRequest {
    pub fn select_image_file() -> Self {
        EffectRequest::SelectImageFile {
            accept: IMAGE_MIME_TYPES.iter().map(|mime| mime.to_string()).collect(),
        }
    }

    pub fn delayed(event: Event, delay: Duration) -> Self {
        EffectRequest::ScheduleDelayed {
            event: Box::new(event),
            delay,
        }
    }

    pub fn debug(message: impl Into<String>) -> Self {
        EffectRequest::LogDebug(message.into())
    }
}
