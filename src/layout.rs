//! The mosque silhouette as an ordered list of shapes.
//!
//! All coordinates are nominal offsets from the canvas center, multiplied by
//! the style's scale factor at the point of use. Elements are emitted in a
//! fixed order and painted front to back:
//!
//! ```text
//! MainDome ─► Body ─► Minarets ─► Entrance ─► Windows ─► Crescents
//!  (white)   (white)   (white)     (cutout)    (cutout)   (white + cutout)
//! ```
//!
//! Cutouts are drawn in the background color, so they read as openings in
//! whatever white shape lies beneath them.

use crate::color::Color;
use crate::shape::{Point, Rect, Shape};
use crate::style::IconStyle;

/// One architectural element of the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Large dome above the prayer hall.
    MainDome,
    /// The prayer hall.
    Body,
    /// Two flanking towers, each with a small dome.
    Minarets,
    /// Arched doorway on the vertical midline.
    Entrance,
    /// Two arched windows either side of the doorway.
    Windows,
    /// Crescent finials above the main dome and each minaret.
    Crescents,
}

impl Element {
    /// Paint order. Later elements overwrite earlier ones.
    pub const ORDER: [Element; 6] = [
        Element::MainDome,
        Element::Body,
        Element::Minarets,
        Element::Entrance,
        Element::Windows,
        Element::Crescents,
    ];
}

/// A crescent finial: a foreground disk partly covered by a background disk
/// of the same radius shifted to the right.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Crescent {
    center: Point,
    radius: f64,
    shift: f64,
}

/// Resolves the icon's nominal geometry against a style.
#[derive(Debug, Clone, PartialEq)]
pub struct MosqueLayout {
    center: Point,
    scale: f64,
    background: Color,
    foreground: Color,
}

impl MosqueLayout {
    pub fn new(style: &IconStyle) -> Self {
        let mid = f64::from(style.size) / 2.0;
        Self {
            center: Point::new(mid, mid),
            scale: style.scale,
            background: style.background,
            foreground: style.foreground,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Every shape of the icon in paint order.
    pub fn shapes(&self) -> Vec<Shape> {
        Element::ORDER
            .iter()
            .flat_map(|element| self.element(*element))
            .collect()
    }

    /// The shapes making up a single element, in paint order.
    pub fn element(&self, element: Element) -> Vec<Shape> {
        let white = self.foreground;
        let green = self.background;

        match element {
            Element::MainDome => {
                vec![Shape::dome(self.at(0.0, -120.0), self.len(80.0), white)]
            }
            Element::Body => {
                vec![Shape::rectangle(self.rect(-140.0, -40.0, 140.0, 140.0), white)]
            }
            Element::Minarets => vec![
                Shape::rectangle(self.rect(-200.0, -100.0, -160.0, 140.0), white),
                Shape::dome(self.at(-180.0, -100.0), self.len(30.0), white),
                Shape::rectangle(self.rect(160.0, -100.0, 200.0, 140.0), white),
                Shape::dome(self.at(180.0, -100.0), self.len(30.0), white),
            ],
            Element::Entrance => vec![
                Shape::dome(self.at(0.0, 60.0), self.len(50.0), green),
                Shape::rectangle(self.rect(-50.0, 60.0, 50.0, 140.0), green),
            ],
            Element::Windows => vec![
                Shape::dome(self.at(-80.0, 0.0), self.len(25.0), green),
                Shape::rectangle(self.rect(-105.0, 0.0, -55.0, 40.0), green),
                Shape::dome(self.at(80.0, 0.0), self.len(25.0), green),
                Shape::rectangle(self.rect(55.0, 0.0, 105.0, 40.0), green),
            ],
            Element::Crescents => [
                self.crescent(0.0, -200.0, 30.0, 15.0),
                self.crescent(-180.0, -140.0, 12.0, 8.0),
                self.crescent(180.0, -140.0, 12.0, 8.0),
            ]
            .into_iter()
            .flat_map(|c| {
                [
                    Shape::circle(c.center, c.radius, white),
                    Shape::circle(c.center.offset_x(c.shift), c.radius, green),
                ]
            })
            .collect(),
        }
    }

    fn len(&self, nominal: f64) -> f64 {
        nominal * self.scale
    }

    fn at(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.center.x + self.len(dx), self.center.y + self.len(dy))
    }

    fn rect(&self, left: f64, top: f64, right: f64, bottom: f64) -> Rect {
        let top_left = self.at(left, top);
        let bottom_right = self.at(right, bottom);
        Rect::new(top_left.x, top_left.y, bottom_right.x, bottom_right.y)
    }

    fn crescent(&self, dx: f64, dy: f64, radius: f64, shift: f64) -> Crescent {
        Crescent {
            center: self.at(dx, dy),
            radius: self.len(radius),
            shift: self.len(shift),
        }
    }
}
