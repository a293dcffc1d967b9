//! The finished icon raster and its PNG persistence.

use std::collections::BTreeSet;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::color::Color;
use crate::error::Result;

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// A rendered icon: an opaque RGB raster, three channels and no alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The pixel data.
    pub data: RgbImage,
}

impl IconImage {
    pub fn new(data: RgbImage) -> Self {
        Self { data }
    }

    /// Returns the pixel dimensions of the image.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    /// Returns every distinct color present, in ascending RGB order.
    pub fn distinct_colors(&self) -> Vec<Color> {
        let set: BTreeSet<[u8; 3]> = self.data.pixels().map(|p| p.0).collect();
        set.into_iter()
            .map(|[r, g, b]| Color::new(r, g, b))
            .collect()
    }

    /// Encodes the icon as PNG into memory.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.data
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Writes the icon as a PNG file.
    ///
    /// The parent directory must already exist; it is never created here.
    /// The file handle is opened and closed within this call.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.data.save_with_format(path, ImageFormat::Png)?;
        log::info!(
            "wrote {}x{} icon to {}",
            self.data.width(),
            self.data.height(),
            path.display()
        );
        Ok(())
    }
}
