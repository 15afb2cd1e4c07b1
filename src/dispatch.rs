//! Routes [`EffectRequest`]s to the outside world.
//!
//! Each collaborator sits behind a trait so hosts can plug in a browser
//! bridge, a native implementation from [`host`](crate::host) and
//! [`raster`](crate::raster), or mocks in tests. Replies come back as
//! [`Event`]s through the runtime's [`Emitter`].

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;

use crate::data_url;
use crate::error::{DownloadError, RenderError};
use crate::host::run_blocking;
use crate::{DownloadRequest, Effect, EffectRequest, Emitter, Event, GridRenderRequest, SelectedFile};

pub const DEFAULT_DOWNLOAD_FILE_NAME: &str = "gridded-image.png";

/// Lets the user choose a file. `None` means the dialog was dismissed.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait FilePicker: Send + Sync {
    fn pick(&self, accept: &[String]) -> BoxFuture<'static, Option<SelectedFile>>;
}

/// Draws the grid onto the source image and replies with a PNG data-URL.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait GridRenderer: Send + Sync {
    fn render(&self, request: GridRenderRequest) -> BoxFuture<'static, Result<String, RenderError>>;
}

/// Saves PNG bytes to the user's filesystem.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait DownloadTrigger: Send + Sync {
    fn download(&self, file_name: &str, png: Vec<u8>) -> Result<(), DownloadError>;
}

/// The document hosting the UI.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait DocumentHost: Send + Sync {
    fn set_lang(&self, code: &str);
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait Timer: Send + Sync {
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()>;
}

/// The set of collaborators a [`Dispatcher`] talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub picker: Arc<dyn FilePicker>,
    pub renderer: Arc<dyn GridRenderer>,
    pub downloads: Arc<dyn DownloadTrigger>,
    pub document: Arc<dyn DocumentHost>,
    pub timer: Arc<dyn Timer>,
}

/// Turns batches of requests into runnable [`Effect`]s.
#[derive(Clone)]
pub struct Dispatcher {
    collaborators: Collaborators,
    file_name: String,
}

impl Dispatcher {
    pub fn new(collaborators: Collaborators) -> Self {
        Self {
            collaborators,
            file_name: DEFAULT_DOWNLOAD_FILE_NAME.to_string(),
        }
    }

    /// Name given to downloaded files.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// One effect for the whole batch, starting requests in order.
    pub fn dispatch(&self, requests: Vec<EffectRequest>) -> Effect<Event> {
        if requests.is_empty() {
            return Effect::none();
        }
        Effect::batch(requests.into_iter().map(|request| self.effect_for(request)).collect())
    }

    fn effect_for(&self, request: EffectRequest) -> Effect<Event> {
        match request {
            EffectRequest::SelectImageFile { accept } => {
                let picker = self.collaborators.picker.clone();
                Effect::future(move |emitter| async move {
                    match picker.pick(&accept).await {
                        Some(file) => emitter.emit(Event::ImageSelected(file)),
                        None => tracing::debug!("file selection cancelled"),
                    }
                })
            }
            EffectRequest::ReadAsDataUrl(file) => Effect::future(move |emitter| async move {
                let url = data_url::encode(&file.mime, &file.bytes);
                tracing::debug!(name = %file.name, length = url.len(), "file read as data URL");
                emitter.emit(Event::ImageLoaded(url));
            }),
            EffectRequest::RequestGridRender(request) => {
                let renderer = self.collaborators.renderer.clone();
                Effect::future(move |emitter| render_grid(renderer, request, emitter))
            }
            EffectRequest::RequestDownload(request) => {
                let downloads = self.collaborators.downloads.clone();
                let file_name = self.file_name.clone();
                Effect::future(move |_| async move {
                    let work = run_blocking(move || download(downloads.as_ref(), &file_name, &request));
                    if let Err(err) = work.await {
                        tracing::error!(error = %err, "download task failed");
                    }
                })
            }
            EffectRequest::PersistLanguageTag(code) => {
                let document = self.collaborators.document.clone();
                Effect::future(move |_| async move { document.set_lang(code) })
            }
            EffectRequest::ScheduleDelayed { event, delay } => {
                let timer = self.collaborators.timer.clone();
                Effect::future(move |emitter| async move {
                    timer.sleep(delay).await;
                    emitter.emit(*event);
                })
            }
            EffectRequest::LogDebug(message) => Effect::future(move |_| async move {
                tracing::debug!("{message}");
            }),
        }
    }
}

async fn render_grid(renderer: Arc<dyn GridRenderer>, request: GridRenderRequest, emitter: Emitter<Event>) {
    tracing::debug!(
        width = request.width,
        height = request.height,
        grid = request.grid,
        "requesting grid render"
    );
    match renderer.render(request).await {
        Ok(data_url) => {
            tracing::debug!(length = data_url.len(), "gridded image received");
            emitter.emit(Event::GriddedImageReady(data_url));
        }
        // No reply: the download flag simply never goes up.
        Err(err) => tracing::error!(error = %err, "grid render failed"),
    }
}

fn download(downloads: &dyn DownloadTrigger, file_name: &str, request: &DownloadRequest) {
    let png = match data_url::decode_png(&request.data_url) {
        Ok(png) => png,
        Err(err) => {
            tracing::error!(error = %err, "refusing to download malformed image data");
            return;
        }
    };
    match downloads.download(file_name, png) {
        Ok(()) => tracing::debug!(file_name, "download triggered"),
        Err(err) => tracing::error!(error = %err, file_name, "download failed"),
    }
}
