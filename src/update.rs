//! The state transition function.
//!
//! [`update`] is pure and total: every event maps to a new model plus a list
//! of [`EffectRequest`]s, and text input that does not parse falls back to a
//! fixed value instead of failing.

use crate::model::{GRID_OPACITY_RANGE, GRID_SIZE_RANGE, GRID_THICKNESS_RANGE};
use crate::request::DOWNLOAD_FLAG_RESET_DELAY;
use crate::{DownloadRequest, EffectRequest, Event, GridRenderRequest, Model, SourceImage};

pub const FALLBACK_GRID_SIZE: u32 = 10;
pub const FALLBACK_GRID_THICKNESS: u32 = 1;
pub const FALLBACK_GRID_OPACITY: f64 = 0.5;
pub const FALLBACK_GRID_OPACITY_PERCENT: i64 = 50;

/// Apply `event` to `model`.
///
/// Effects come back in the order they must be dispatched.
pub fn update(event: Event, model: &Model) -> (Model, Vec<EffectRequest>) {
    match event {
        Event::PickImage => (model.clone(), vec![EffectRequest::select_image_file()]),
        Event::ImageSelected(file) => (model.clone(), vec![EffectRequest::ReadAsDataUrl(file)]),
        Event::ImageLoaded(url) => {
            let next = Model {
                image: Some(SourceImage::new(url)),
                ..model.clone()
            };
            (next, Vec::new())
        }
        Event::ImageSizeLoaded { width, height } => match &model.image {
            Some(image) => {
                let next = Model {
                    image: Some(SourceImage {
                        url: image.url.clone(),
                        dimensions: Some(crate::Dimensions::new(width, height)),
                    }),
                    ..model.clone()
                };
                (next, Vec::new())
            }
            None => (
                model.clone(),
                vec![EffectRequest::debug(format!(
                    "ImageSizeLoaded {width}x{height} without a source image"
                ))],
            ),
        },
        Event::GridSizeChanged(text) => {
            let mut next = model.clone();
            next.grid.size = parse_grid_size(&text);
            (next, Vec::new())
        }
        Event::GridColorChanged(color) => {
            let mut next = model.clone();
            next.grid.color = color;
            (next, Vec::new())
        }
        Event::GridThicknessChanged(text) => {
            let mut next = model.clone();
            next.grid.thickness = parse_grid_thickness(&text);
            (next, Vec::new())
        }
        Event::GridOpacityChanged(text) => {
            let mut next = model.clone();
            next.grid.opacity = parse_grid_opacity(&text);
            (next, Vec::new())
        }
        Event::GridOpacityPercentChanged(text) => {
            let mut next = model.clone();
            next.grid.opacity = parse_grid_opacity_percent(&text);
            (next, Vec::new())
        }
        Event::NiceButtonClicked => {
            let next = Model {
                nice_count: model.nice_count.saturating_add(1),
                ..model.clone()
            };
            (next, Vec::new())
        }
        Event::LanguageChanged(language) => {
            let next = Model {
                language,
                ..model.clone()
            };
            (next, vec![EffectRequest::PersistLanguageTag(language.code())])
        }
        Event::DownloadClicked => download_clicked(model),
        Event::GriddedImageReady(data_url) => {
            let next = Model {
                download_ready: true,
                ..model.clone()
            };
            let effects = vec![
                EffectRequest::RequestDownload(DownloadRequest::new(data_url)),
                EffectRequest::delayed(Event::ResetDownloadFlag, DOWNLOAD_FLAG_RESET_DELAY),
            ];
            (next, effects)
        }
        Event::ResetDownloadFlag => {
            let next = Model {
                download_ready: false,
                ..model.clone()
            };
            (next, Vec::new())
        }
    }
}

fn download_clicked(model: &Model) -> (Model, Vec<EffectRequest>) {
    let Some(request) = grid_render_request(model) else {
        return (
            model.clone(),
            vec![EffectRequest::debug("DownloadClicked but missing image data")],
        );
    };

    let effects = vec![
        EffectRequest::debug(format!(
            "DownloadClicked with valid image data. Width: {}, Height: {}",
            request.width, request.height
        )),
        EffectRequest::RequestGridRender(request),
    ];
    (model.clone(), effects)
}

/// The rasterizer request for the current model, if an image and its size
/// are both known.
pub fn grid_render_request(model: &Model) -> Option<GridRenderRequest> {
    let image = model.image.as_ref()?;
    let dimensions = image.dimensions?;

    Some(GridRenderRequest {
        url: image.url.clone(),
        width: dimensions.width,
        height: dimensions.height,
        grid: model.grid.size,
        color: model.grid.color.clone(),
        thickness: model.grid.thickness,
        opacity: model.grid.opacity,
    })
}

/// Parse a grid size, clamped to [`GRID_SIZE_RANGE`].
pub fn parse_grid_size(text: &str) -> u32 {
    parse_clamped_int(text, &GRID_SIZE_RANGE).unwrap_or(FALLBACK_GRID_SIZE)
}

/// Parse a stroke width, clamped to [`GRID_THICKNESS_RANGE`].
pub fn parse_grid_thickness(text: &str) -> u32 {
    parse_clamped_int(text, &GRID_THICKNESS_RANGE).unwrap_or(FALLBACK_GRID_THICKNESS)
}

/// Parse an opacity fraction, clamped to `0.0..=1.0`. Whitespace, `NaN`
/// and infinities count as unparseable.
pub fn parse_grid_opacity(text: &str) -> f64 {
    if text.chars().any(char::is_whitespace) {
        return FALLBACK_GRID_OPACITY;
    }
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(*GRID_OPACITY_RANGE.start(), *GRID_OPACITY_RANGE.end()))
        .unwrap_or(FALLBACK_GRID_OPACITY)
}

/// Parse a whole-number opacity percentage into a fraction.
pub fn parse_grid_opacity_percent(text: &str) -> f64 {
    let percent = parse_int(text)
        .unwrap_or(FALLBACK_GRID_OPACITY_PERCENT)
        .clamp(0, 100);
    percent as f64 / 100.0
}

fn parse_clamped_int(text: &str, range: &core::ops::RangeInclusive<u32>) -> Option<u32> {
    let value = parse_int(text)?;
    let clamped = value.clamp(i64::from(*range.start()), i64::from(*range.end()));
    u32::try_from(clamped).ok()
}

/// `[+-]digits` and nothing else. Values too large for `i64` saturate.
fn parse_int(text: &str) -> Option<i64> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude = digits.bytes().fold(0i64, |total, digit| {
        total.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}
