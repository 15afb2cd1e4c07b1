//! Grid line placement.
//!
//! The SVG preview and the PNG export both draw from [`GridGeometry`], so
//! for identical inputs the two always agree on where every line sits.

use crate::{GridRenderRequest, GridSettings};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Stroke style shared by every line of a grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub thickness: u32,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
    pub orientation: Orientation,
    pub start: Point,
    pub end: Point,
    pub stroke: Stroke,
}

impl GridLine {
    /// The x of a vertical line or the y of a horizontal one.
    pub fn offset(&self) -> f64 {
        match self.orientation {
            Orientation::Vertical => self.start.x,
            Orientation::Horizontal => self.start.y,
        }
    }
}

/// `size + 1` evenly spaced lines per axis over a `width` × `height` image.
#[derive(Clone, Debug, PartialEq)]
pub struct GridGeometry {
    pub width: u32,
    pub height: u32,
    pub cell_width: f64,
    pub cell_height: f64,
    pub vertical: Vec<GridLine>,
    pub horizontal: Vec<GridLine>,
}

impl GridGeometry {
    pub fn compute(width: u32, height: u32, grid: &GridSettings) -> Self {
        Self::build(
            width,
            height,
            grid.size,
            Stroke {
                color: grid.color.clone(),
                thickness: grid.thickness,
                opacity: grid.opacity,
            },
        )
    }

    pub fn for_request(request: &GridRenderRequest, width: u32, height: u32) -> Self {
        Self::build(
            width,
            height,
            request.grid,
            Stroke {
                color: request.color.clone(),
                thickness: request.thickness,
                opacity: request.opacity,
            },
        )
    }

    fn build(width: u32, height: u32, size: u32, stroke: Stroke) -> Self {
        // A zero-cell grid would divide by zero; draw a single cell instead.
        let cells = size.max(1);
        let (w, h) = (f64::from(width), f64::from(height));
        let cell_width = w / f64::from(cells);
        let cell_height = h / f64::from(cells);

        let vertical = (0..=cells)
            .map(|i| {
                let x = f64::from(i) * cell_width;
                GridLine {
                    orientation: Orientation::Vertical,
                    start: Point { x, y: 0.0 },
                    end: Point { x, y: h },
                    stroke: stroke.clone(),
                }
            })
            .collect();

        let horizontal = (0..=cells)
            .map(|i| {
                let y = f64::from(i) * cell_height;
                GridLine {
                    orientation: Orientation::Horizontal,
                    start: Point { x: 0.0, y },
                    end: Point { x: w, y },
                    stroke: stroke.clone(),
                }
            })
            .collect();

        Self {
            width,
            height,
            cell_width,
            cell_height,
            vertical,
            horizontal,
        }
    }

    /// Vertical lines first, then horizontal.
    pub fn lines(&self) -> impl Iterator<Item = &GridLine> {
        self.vertical.iter().chain(self.horizontal.iter())
    }
}
