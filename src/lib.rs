//! masjid-icon: procedural launcher icon for the Masjid app
//!
//! This crate draws the app's mosque icon (domes, minarets, crescents, a
//! doorway and two windows) onto a square RGB canvas using three exact fill
//! primitives, writes it as a PNG, and derives the iOS and Android launcher
//! variants from it.
//!
//! # Example
//!
//! ```
//! use masjid_icon::{IconRenderer, IconStyle};
//!
//! let icon = IconRenderer::new(IconStyle::default()).render();
//! assert_eq!(icon.dimensions().width, 1024);
//! assert_eq!(icon.distinct_colors().len(), 2);
//! ```
//!
//! [`render_icon`] does the whole job with the shipped defaults: render,
//! write `resources/icon.png`, print a confirmation.

mod canvas;
mod color;
mod error;
mod icon;
mod layout;
mod renderer;
mod shape;
mod style;
mod variants;

pub use canvas::Canvas;
pub use color::Color;
pub use error::{IconError, Result};
pub use icon::{IconImage, SizePx};
pub use layout::{Element, MosqueLayout};
pub use renderer::{DEFAULT_OUTPUT, IconRenderer, NEXT_STEP_COMMAND, announce, render_icon};
pub use shape::{DOME_END_DEG, DOME_START_DEG, Point, Rect, Shape, dome_points};
pub use style::{DEFAULT_SCALE, DEFAULT_SIZE, IconStyle};
pub use variants::{
    ANDROID_DENSITIES, ANDROID_RES_DIR, AndroidDensity, ContentsImage, ContentsInfo,
    IOS_ICONSET_DIR, IOS_SLOTS, IconSetContents, IosSlot, Platform, VariantReport,
    generate_variants,
};
