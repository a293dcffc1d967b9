//! Shape descriptors issued by the icon layout.
//!
//! Shapes are plain data: the layout builds an ordered list of them and the
//! renderer paints that list onto a [`Canvas`] front to back. Later shapes
//! overwrite earlier ones wherever they overlap.

use crate::canvas::Canvas;
use crate::color::Color;

// ============================================================================
// Geometry
// ============================================================================

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted horizontally by `dx`.
    pub fn offset_x(self, dx: f64) -> Self {
        Self::new(self.x + dx, self.y)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// An axis-aligned box given by two corners.
///
/// Both corners are inclusive once the box is rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The square bounding box of a circle.
    pub fn around(center: Point, radius: f64) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        )
    }
}

// ============================================================================
// Dome sampling
// ============================================================================

/// First sampled angle of a dome arc, in degrees.
pub const DOME_START_DEG: u32 = 180;

/// Last sampled angle of a dome arc, in degrees (inclusive).
pub const DOME_END_DEG: u32 = 360;

/// Samples the upper half of a circle, one point per degree from 180° to
/// 360° inclusive.
///
/// With image coordinates (y grows downward) the arc bulges upward from the
/// horizontal line through `center`, which is what reads as a dome.
pub fn dome_points(center: Point, radius: f64) -> Vec<Point> {
    (DOME_START_DEG..=DOME_END_DEG)
        .map(|deg| {
            let rad = f64::from(deg).to_radians();
            Point::new(
                center.x + radius * rad.cos(),
                center.y + radius * rad.sin(),
            )
        })
        .collect()
}

// ============================================================================
// Shape
// ============================================================================

/// A single filled drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Closed polygon; the layout uses it for domes.
    Polygon { points: Vec<Point>, fill: Color },
    /// Axis-aligned rectangle with inclusive corners.
    Rectangle { bounds: Rect, fill: Color },
    /// Ellipse inscribed in an inclusive bounding box.
    Ellipse { bounds: Rect, fill: Color },
}

impl Shape {
    /// A half-disk dome sitting on the line through `center`.
    pub fn dome(center: Point, radius: f64, fill: Color) -> Self {
        Self::Polygon {
            points: dome_points(center, radius),
            fill,
        }
    }

    pub fn rectangle(bounds: Rect, fill: Color) -> Self {
        Self::Rectangle { bounds, fill }
    }

    /// A circle, drawn as an ellipse with equal width and height.
    pub fn circle(center: Point, radius: f64, fill: Color) -> Self {
        Self::Ellipse {
            bounds: Rect::around(center, radius),
            fill,
        }
    }

    pub fn fill(&self) -> Color {
        match self {
            Self::Polygon { fill, .. }
            | Self::Rectangle { fill, .. }
            | Self::Ellipse { fill, .. } => *fill,
        }
    }

    /// Paints this shape onto the canvas.
    pub fn paint(&self, canvas: &mut Canvas) {
        match self {
            Self::Polygon { points, fill } => canvas.fill_polygon(points, *fill),
            Self::Rectangle { bounds, fill } => canvas.fill_rectangle(*bounds, *fill),
            Self::Ellipse { bounds, fill } => canvas.fill_ellipse(*bounds, *fill),
        }
    }
}
