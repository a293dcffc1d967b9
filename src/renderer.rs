//! Icon rendering: paints the layout onto a fresh canvas and persists it.

use std::path::Path;

use crate::canvas::Canvas;
use crate::error::Result;
use crate::icon::IconImage;
use crate::layout::MosqueLayout;
use crate::style::IconStyle;

/// Where the master icon is written, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "resources/icon.png";

/// Follow-up command printed after a successful render.
pub const NEXT_STEP_COMMAND: &str = "npx @capacitor/assets generate --android";

/// Renders the mosque icon for a given style.
///
/// Rendering is deterministic: the same style always produces the same
/// pixels, and the same PNG bytes.
///
/// # Example
///
/// ```
/// use masjid_icon::{Color, IconRenderer, IconStyle};
///
/// let icon = IconRenderer::new(IconStyle::new().with_size(128).with_scale(0.2)).render();
/// assert_eq!(icon.dimensions().width, 128);
/// assert_eq!(icon.distinct_colors(), vec![Color::EMERALD, Color::WHITE]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IconRenderer {
    style: IconStyle,
}

impl IconRenderer {
    pub fn new(style: IconStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &IconStyle {
        &self.style
    }

    /// Paints every shape of the layout, in order, onto a new canvas.
    pub fn render(&self) -> IconImage {
        let layout = MosqueLayout::new(&self.style);
        let shapes = layout.shapes();
        let mut canvas = Canvas::new(self.style.size, self.style.background);

        log::debug!(
            "painting {} shapes on a {}px canvas at scale {}",
            shapes.len(),
            self.style.size,
            self.style.scale
        );
        for shape in &shapes {
            log::trace!("{shape:?}");
            shape.paint(&mut canvas);
        }

        canvas.into_icon()
    }

    /// Renders and writes the icon as PNG to `path`.
    ///
    /// Fails if the parent directory does not exist or cannot be written;
    /// nothing is written in that case.
    pub fn render_to_file(&self, path: &Path) -> Result<IconImage> {
        let icon = self.render();
        icon.save_png(path)?;
        Ok(icon)
    }
}

/// Renders the default icon to [`DEFAULT_OUTPUT`] and prints the
/// confirmation lines.
pub fn render_icon() -> Result<IconImage> {
    let output = Path::new(DEFAULT_OUTPUT);
    let icon = IconRenderer::default().render_to_file(output)?;
    announce(output);
    Ok(icon)
}

/// Prints where the icon went and what to run next.
pub fn announce(output: &Path) {
    println!("✅ Icon generated: {}", output.display());
    println!("📱 Run: {NEXT_STEP_COMMAND}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn default_render_is_1024_square_rgb() {
        let icon = IconRenderer::default().render();
        assert_eq!(icon.dimensions().width, 1024);
        assert_eq!(icon.dimensions().height, 1024);
        assert_eq!(
            image::DynamicImage::ImageRgb8(icon.data).color(),
            image::ColorType::Rgb8
        );
    }

    #[test]
    fn render_is_deterministic() {
        let renderer = IconRenderer::default();
        let first = renderer.render();
        let second = renderer.render();
        assert_eq!(first, second);
        assert_eq!(first.encode_png().unwrap(), second.encode_png().unwrap());
    }

    #[test]
    fn only_two_colors_are_used() {
        let icon = IconRenderer::default().render();
        assert_eq!(icon.distinct_colors(), vec![Color::EMERALD, Color::WHITE]);
    }

    #[test]
    fn landmark_pixels() {
        let icon = IconRenderer::default().render();
        let at = |x, y| Color::from_pixel(*icon.data.get_pixel(x, y));

        // Background corner.
        assert_eq!(at(10, 10), Color::EMERALD);
        // Main dome, just under its apex.
        assert_eq!(at(512, 300), Color::WHITE);
        // Hall wall between the windows and the doorway arch.
        assert_eq!(at(512, 500), Color::WHITE);
        // Doorway arch and door.
        assert_eq!(at(512, 560), Color::EMERALD);
        assert_eq!(at(512, 700), Color::EMERALD);
        // Windows.
        assert_eq!(at(392, 530), Color::EMERALD);
        assert_eq!(at(632, 530), Color::EMERALD);
        assert_eq!(at(392, 490), Color::EMERALD);
        // Minaret shafts and domes.
        assert_eq!(at(242, 600), Color::WHITE);
        assert_eq!(at(782, 600), Color::WHITE);
        assert_eq!(at(242, 330), Color::WHITE);
        // Crescents: lit edge on the left, covered on the right.
        assert_eq!(at(475, 212), Color::WHITE);
        assert_eq!(at(545, 212), Color::EMERALD);
        assert_eq!(at(228, 302), Color::WHITE);
        assert_eq!(at(768, 302), Color::WHITE);
    }

    #[test]
    fn main_dome_sits_on_its_base_line() {
        let icon = IconRenderer::default().render();
        let at = |x, y| Color::from_pixel(*icon.data.get_pixel(x, y));

        for x in [392, 400, 512, 624, 632] {
            assert_eq!(at(x, 332), Color::WHITE, "x = {x}");
        }
        assert_eq!(at(391, 332), Color::EMERALD);
        assert_eq!(at(633, 332), Color::EMERALD);
        assert_eq!(at(512, 333), Color::EMERALD);
    }

    #[test]
    fn oversized_scale_is_clipped_to_the_canvas() {
        let style = IconStyle::new().with_size(64).with_scale(2e7);
        let icon = IconRenderer::new(style).render();

        assert_eq!(icon.dimensions().width, 64);
        assert!(
            icon.distinct_colors()
                .iter()
                .all(|c| *c == Color::EMERALD || *c == Color::WHITE)
        );
    }

    #[test]
    fn custom_colors_are_respected() {
        let red = Color::new(200, 0, 0);
        let style = IconStyle::new().with_size(256).with_scale(0.4).with_foreground(red);
        let icon = IconRenderer::new(style).render();
        assert_eq!(icon.distinct_colors(), vec![Color::EMERALD, red]);
    }
}
