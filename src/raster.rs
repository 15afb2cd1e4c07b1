//! Native grid rasterizer.
//!
//! Follows 2D-canvas stroke rules: each line is a `thickness`-wide band
//! centred on its coordinate, partially covered edge pixels get
//! proportionally less paint, and every line is blended on its own (so
//! crossings are painted twice).

use std::io::Cursor;

use futures::future::{BoxFuture, FutureExt};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::data_url;
use crate::dispatch::GridRenderer;
use crate::error::RenderError;
use crate::geometry::{GridGeometry, GridLine, Orientation};
use crate::host::run_blocking;
use crate::{Dimensions, GridRenderRequest};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Canvas default stroke color, used when the requested color does not parse.
const FALLBACK_STROKE: [u8; 3] = [0, 0, 0];

/// Draws grids onto images decoded from data-URLs and replies with a PNG
/// data-URL.
#[derive(Clone, Copy, Debug, Default)]
pub struct RasterGridRenderer;

impl RasterGridRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl GridRenderer for RasterGridRenderer {
    /// Decoding and encoding run on the blocking pool so the event loop keeps
    /// turning during an export.
    fn render(&self, request: GridRenderRequest) -> BoxFuture<'static, Result<String, RenderError>> {
        let work = run_blocking(move || render_png(&request).map(|png| data_url::encode_png(&png)));
        async move { work.await? }.boxed()
    }
}

/// Render `request` to PNG bytes.
///
/// The canvas takes the source image's natural size; the requested size is
/// only used if the decoder reports an empty image.
pub fn render_png(request: &GridRenderRequest) -> Result<Vec<u8>, RenderError> {
    let source = load_source(&request.url)?.to_rgba8();
    let (width, height) = match source.dimensions() {
        (0, _) | (_, 0) => (request.width, request.height),
        natural => natural,
    };
    tracing::debug!(width, height, grid = request.grid, "rasterizing grid");

    let mut canvas = RgbaImage::from_pixel(width, height, WHITE);
    for (x, y, pixel) in source.enumerate_pixels() {
        if x < width && y < height {
            let alpha = f64::from(pixel[3]) / 255.0;
            blend(canvas.get_pixel_mut(x, y), [pixel[0], pixel[1], pixel[2]], alpha);
        }
    }

    let color = parse_css_color(&request.color).unwrap_or_else(|| {
        tracing::warn!(color = %request.color, "unparseable grid color, stroking black");
        FALLBACK_STROKE
    });
    let geometry = GridGeometry::for_request(request, width, height);
    for line in geometry.lines() {
        stroke(&mut canvas, line, color);
    }

    let mut png = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

/// Natural size of the image behind a data-URL.
pub fn read_dimensions(url: &str) -> Result<Dimensions, RenderError> {
    let image = load_source(url)?;
    Ok(Dimensions::new(image.width(), image.height()))
}

fn load_source(url: &str) -> Result<DynamicImage, RenderError> {
    if !url.starts_with("data:") {
        return Err(RenderError::UnsupportedSource(url.chars().take(30).collect()));
    }
    let decoded = data_url::decode(url)?;
    Ok(image::load_from_memory(&decoded.bytes)?)
}

fn stroke(canvas: &mut RgbaImage, line: &GridLine, color: [u8; 3]) {
    let opacity = line.stroke.opacity.clamp(0.0, 1.0);
    let half = f64::from(line.stroke.thickness) / 2.0;
    let (lo, hi) = (line.offset() - half, line.offset() + half);
    let (width, height) = canvas.dimensions();

    let limit = match line.orientation {
        Orientation::Vertical => width,
        Orientation::Horizontal => height,
    };
    let first = lo.floor().max(0.0) as u32;
    let last = (hi.ceil().max(0.0) as u32).min(limit);

    for band in first..last {
        let alpha = opacity * coverage(lo, hi, band);
        if alpha <= 0.0 {
            continue;
        }
        match line.orientation {
            Orientation::Vertical => {
                for y in 0..height {
                    blend(canvas.get_pixel_mut(band, y), color, alpha);
                }
            }
            Orientation::Horizontal => {
                for x in 0..width {
                    blend(canvas.get_pixel_mut(x, band), color, alpha);
                }
            }
        }
    }
}

/// Fraction of pixel row/column `index` covered by the band `[lo, hi]`.
fn coverage(lo: f64, hi: f64, index: u32) -> f64 {
    let start = f64::from(index);
    (hi.min(start + 1.0) - lo.max(start)).clamp(0.0, 1.0)
}

fn blend(dst: &mut Rgba<u8>, src: [u8; 3], alpha: f64) {
    for channel in 0..3 {
        let mixed = f64::from(src[channel]) * alpha + f64::from(dst[channel]) * (1.0 - alpha);
        dst[channel] = mixed.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = 255;
}

/// `#rgb` or `#rrggbb`, case-insensitive.
pub fn parse_css_color(text: &str) -> Option<[u8; 3]> {
    let hex = text.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, digit) in rgb.iter_mut().zip(hex.chars()) {
                let value = digit.to_digit(16)? as u8;
                *slot = value * 17;
            }
            Some(rgb)
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some([channel(0)?, channel(2)?, channel(4)?])
        }
        _ => None,
    }
}
