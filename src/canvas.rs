//! Raster canvas with exact, non-anti-aliased fill primitives.
//!
//! Every primitive writes the fill color straight into the pixel buffer: no
//! blending and no coverage-based edge smoothing. A canvas that only ever
//! receives two fill colors therefore only ever contains those two colors.
//!
//! Coordinate conventions:
//!
//! - Rectangle and ellipse boxes truncate their float corners to integers and
//!   include both corners.
//! - Polygons are scan-converted at integer rows with an even-odd rule; each
//!   span covers `ceil(start)..=floor(end)`. Edges are part of the polygon, so
//!   a horizontal edge lying on a pixel row is painted too.

use image::RgbImage;

use crate::color::Color;
use crate::icon::IconImage;
use crate::shape::{Point, Rect, dome_points};

/// How far a vertex may sit from a pixel row and still count as on it.
const ROW_EPSILON: f64 = 1e-9;

/// A square RGB drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Allocates a `size`×`size` canvas filled with `background`.
    pub fn new(size: u32, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(size, size, background.to_pixel()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Reads a pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Color::from_pixel(*p))
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Consumes the canvas, yielding the finished icon.
    pub fn into_icon(self) -> IconImage {
        IconImage::new(self.image)
    }

    /// Draws a filled dome: the upper half-disk of radius `radius` sitting on
    /// the horizontal line through `(center_x, center_y)`.
    ///
    /// A zero radius yields a degenerate polygon and leaves the canvas
    /// untouched.
    pub fn draw_dome(&mut self, center_x: f64, center_y: f64, radius: f64, color: Color) {
        let points = dome_points(Point::new(center_x, center_y), radius);
        if points.is_empty() {
            return;
        }
        self.fill_polygon(&points, color);
    }

    /// Fills the closed polygon through `points`.
    ///
    /// Polygons with fewer than three vertices, or with zero height, paint
    /// nothing. A horizontal edge that lies on a pixel row, such as the base
    /// line of a dome, is filled from `ceil(x_min)` to `floor(x_max)`.
    pub fn fill_polygon(&mut self, points: &[Point], color: Color) {
        if points.len() < 3 {
            return;
        }

        let (min_y, max_y) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        if !min_y.is_finite() || !max_y.is_finite() || max_y - min_y <= ROW_EPSILON {
            return;
        }

        let last_row = i64::from(self.height()) - 1;
        let first = (min_y.ceil() as i64).max(0);
        let last = (max_y.floor() as i64).min(last_row);

        let mut crossings: Vec<f64> = Vec::with_capacity(8);
        for row in first..=last {
            let y = row as f64;
            crossings.clear();

            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                if a.y == b.y {
                    continue;
                }
                let (lo, hi) = if a.y < b.y { (a.y, b.y) } else { (b.y, a.y) };
                // Half-open so a shared vertex is counted once.
                if y >= lo && y < hi {
                    crossings.push(a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }

            crossings.sort_by(f64::total_cmp);
            for span in crossings.chunks_exact(2) {
                self.fill_span(row, span[0].ceil() as i64, span[1].floor() as i64, color);
            }
        }

        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            let row = a.y.round();
            if (a.y - row).abs() > ROW_EPSILON || (b.y - row).abs() > ROW_EPSILON {
                continue;
            }
            let (left, right) = if a.x < b.x { (a.x, b.x) } else { (b.x, a.x) };
            self.fill_span(row as i64, left.ceil() as i64, right.floor() as i64, color);
        }
    }

    /// Fills a rectangle, both corners inclusive.
    pub fn fill_rectangle(&mut self, bounds: Rect, color: Color) {
        let (x0, y0, x1, y1) = truncate(bounds);
        let (first, last) = self.clip_rows(y0, y1);
        for row in first..=last {
            self.fill_span(row, x0, x1, color);
        }
    }

    /// Fills the ellipse inscribed in `bounds`.
    ///
    /// A pixel is filled when its center falls inside the ellipse spanning
    /// the inclusive integer box.
    pub fn fill_ellipse(&mut self, bounds: Rect, color: Color) {
        let (x0, y0, x1, y1) = truncate(bounds);
        if x1 < x0 || y1 < y0 {
            return;
        }

        // Float math: saturated corners would overflow in i64.
        let (fx0, fy0, fx1, fy1) = (x0 as f64, y0 as f64, x1 as f64, y1 as f64);
        let cx = (fx0 + fx1 + 1.0) / 2.0;
        let cy = (fy0 + fy1 + 1.0) / 2.0;
        let rx = (fx1 - fx0 + 1.0) / 2.0;
        let ry = (fy1 - fy0 + 1.0) / 2.0;

        let (first, last) = self.clip_rows(y0, y1);
        for row in first..=last {
            let dy = (row as f64 + 0.5 - cy) / ry;
            let reach = 1.0 - dy * dy;
            if reach < 0.0 {
                continue;
            }
            // Half-width of the row in pixels, measured between pixel centers.
            let half = rx * reach.sqrt();
            let start = (cx - half - 0.5).ceil() as i64;
            let end = (cx + half - 0.5).floor() as i64;
            self.fill_span(row, start.max(x0), end.min(x1), color);
        }
    }

    /// Narrows rows `y0..=y1` to those inside the canvas. The result is an
    /// empty range when nothing overlaps.
    fn clip_rows(&self, y0: i64, y1: i64) -> (i64, i64) {
        (y0.max(0), y1.min(i64::from(self.height()) - 1))
    }

    /// Fills columns `x0..=x1` of `row`, clipped to the canvas.
    fn fill_span(&mut self, row: i64, x0: i64, x1: i64, color: Color) {
        if row < 0 || row >= i64::from(self.height()) {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(i64::from(self.width()) - 1);
        let pixel = color.to_pixel();
        for x in x0..=x1 {
            self.image.put_pixel(x as u32, row as u32, pixel);
        }
    }
}

/// Truncates float box corners toward zero, the way integer casts do.
fn truncate(bounds: Rect) -> (i64, i64, i64, i64) {
    (
        bounds.left as i64,
        bounds.top as i64,
        bounds.right as i64,
        bounds.bottom as i64,
    )
}
