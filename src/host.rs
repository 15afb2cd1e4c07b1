//! Native collaborators for running outside a browser.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use spin::Mutex;

use crate::dispatch::{DocumentHost, DownloadTrigger, FilePicker, Timer};
use crate::error::DownloadError;
use crate::SelectedFile;

/// Run CPU-bound or blocking `work` on tokio's blocking pool when a runtime
/// is available, otherwise inline when the future is first polled.
pub(crate) fn run_blocking<T, F>(work: F) -> BoxFuture<'static, Result<T, tokio::task::JoinError>>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => handle.spawn_blocking(work).boxed(),
        Err(_) => async move { Ok(work()) }.boxed(),
    }
}

/// "Picks" a fixed file from disk.
///
/// Files that cannot be read, or whose type is not accepted, behave like a
/// dismissed dialog.
#[derive(Clone, Debug)]
pub struct PathPicker {
    path: PathBuf,
}

impl PathPicker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FilePicker for PathPicker {
    fn pick(&self, accept: &[String]) -> BoxFuture<'static, Option<SelectedFile>> {
        let picked = match SelectedFile::from_path(&self.path) {
            Ok(file) if file.matches(accept) => Some(file),
            Ok(file) => {
                tracing::warn!(mime = %file.mime, ?accept, "picked file type not accepted");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not pick file");
                None
            }
        };
        futures::future::ready(picked).boxed()
    }
}

/// Writes downloads into a directory, creating it on first use.
///
/// Writes block the calling thread; the dispatcher calls it through the
/// blocking pool.
#[derive(Clone, Debug)]
pub struct DirectoryDownloader {
    dir: PathBuf,
}

impl DirectoryDownloader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadTrigger for DirectoryDownloader {
    fn download(&self, file_name: &str, png: Vec<u8>) -> Result<(), DownloadError> {
        let path = self.dir.join(file_name);
        std::fs::create_dir_all(&self.dir)
            .and_then(|()| std::fs::write(&path, &png))
            .map_err(|source| DownloadError::Write {
                path: path.clone(),
                source,
            })?;
        tracing::info!(path = %path.display(), bytes = png.len(), "gridded image saved");
        Ok(())
    }
}

/// Shared `lang` attribute of the host document.
#[derive(Clone, Debug, Default)]
pub struct DocumentLang {
    lang: Arc<Mutex<String>>,
}

impl DocumentLang {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> String {
        self.lang.lock().clone()
    }
}

impl DocumentHost for DocumentLang {
    fn set_lang(&self, code: &str) {
        *self.lang.lock() = code.to_string();
    }
}

/// [`Timer`] backed by the tokio time driver.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()> {
        tokio::time::sleep(duration).boxed()
    }
}
