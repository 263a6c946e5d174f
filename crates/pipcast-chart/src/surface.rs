//! Drawing surface abstraction.
//!
//! The renderer computes layout in surface pixel coordinates and issues a
//! small set of drawing commands; backends decide how those hit pixels.
//! [`crate::Pixmap`] is the raster backend; tests use recording surfaces.

use crate::color::Rgb;

/// A point in surface pixel coordinates. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Horizontal anchoring for [`Surface::fill_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Resets the whole surface to its background.
    fn clear(&mut self);

    /// Strokes a connected polyline through `points`.
    fn stroke_path(&mut self, points: &[Point], color: Rgb, width: f32);

    /// Draws horizontal text with its baseline at `(x, y)`, anchored per
    /// `align`. `scale` is an integer multiplier on the base glyph size.
    fn fill_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign, scale: u32);

    /// Draws text rotated a quarter turn clockwise (reading top to bottom),
    /// vertically centered on `y`, with the glyph baseline on column `x`.
    fn fill_text_rotated(&mut self, text: &str, x: f32, y: f32, scale: u32);
}
