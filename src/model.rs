//! Application state.

use core::ops::RangeInclusive;

use crate::Language;

pub const GRID_SIZE_RANGE: RangeInclusive<u32> = 2..=50;
pub const GRID_THICKNESS_RANGE: RangeInclusive<u32> = 1..=10;
pub const GRID_OPACITY_RANGE: RangeInclusive<f64> = 0.0..=1.0;

pub const DEFAULT_LANGUAGE: Language = Language::Spanish;
pub const DEFAULT_GRID_SIZE: u32 = 10;
pub const DEFAULT_GRID_COLOR: &str = "#80ED99";
pub const DEFAULT_GRID_THICKNESS: u32 = 1;
pub const DEFAULT_GRID_OPACITY: f64 = 1.0;

/// Grid parameters the user adjusts.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSettings {
    /// Cells per axis.
    pub size: u32,
    /// CSS color text, kept verbatim.
    pub color: String,
    /// Stroke width in pixels.
    pub thickness: u32,
    pub opacity: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            color: DEFAULT_GRID_COLOR.to_string(),
            thickness: DEFAULT_GRID_THICKNESS,
            opacity: DEFAULT_GRID_OPACITY,
        }
    }
}

/// Natural pixel size of the loaded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The uploaded image. Its size is unknown until the host reports it.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceImage {
    /// Data-URL (or object URL) the host can load.
    pub url: String,
    pub dimensions: Option<Dimensions>,
}

impl SourceImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            dimensions: None,
        }
    }
}

/// A complete snapshot of the application.
///
/// The update function returns a fresh `Model` for every event; nothing
/// mutates a snapshot once it has been handed to the runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub language: Language,
    pub grid: GridSettings,
    pub image: Option<SourceImage>,
    /// Set when a gridded image arrives, cleared by `ResetDownloadFlag`.
    pub download_ready: bool,
    pub nice_count: u32,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE,
            grid: GridSettings::default(),
            image: None,
            download_ready: false,
            nice_count: 0,
        }
    }
}

impl Model {
    pub fn source_url(&self) -> Option<&str> {
        self.image.as_ref().map(|image| image.url.as_str())
    }

    pub fn dimensions(&self) -> Option<Dimensions> {
        self.image.as_ref().and_then(|image| image.dimensions)
    }

    pub fn image_width(&self) -> Option<u32> {
        self.dimensions().map(|dimensions| dimensions.width)
    }

    pub fn image_height(&self) -> Option<u32> {
        self.dimensions().map(|dimensions| dimensions.height)
    }
}
