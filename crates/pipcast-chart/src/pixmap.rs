//! Raster surface backed by an owned RGB buffer.
//!
//! Strokes by stamping discs along each segment, which keeps thick lines
//! deterministic and endpoint-round without an anti-aliasing pass. Text is
//! drawn in the foreground color from the embedded bitmap font.

use std::path::Path;

use crate::color::Rgb;
use crate::error::ChartError;
use crate::font::{GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH, glyph, text_width};
use crate::line::DEFAULT_STROKE;
use crate::surface::{Point, Surface, TextAlign};

/// Fixed-size RGB raster target.
#[derive(Debug, Clone)]
pub struct Pixmap {
    width: u32,
    height: u32,
    background: Rgb,
    foreground: Rgb,
    pixels: Vec<u8>,
}

impl Pixmap {
    /// A pixmap cleared to black, drawing text in the default stroke color.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Rgb::BLACK)
    }

    /// A pixmap cleared to `background`.
    pub fn with_background(width: u32, height: u32, background: Rgb) -> Self {
        let mut pixels = vec![0u8; width as usize * height as usize * 3];
        fill(&mut pixels, background);
        Self { width, height, background, foreground: DEFAULT_STROKE, pixels }
    }

    /// Color read back from one pixel; `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some(Rgb(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]))
    }

    /// True if any pixel differs from the background.
    pub fn is_dirty(&self) -> bool {
        let Rgb(r, g, b) = self.background;
        self.pixels
            .chunks_exact(3)
            .any(|px| px != [r, g, b])
    }

    /// Copies the buffer into an [`image::RgbImage`].
    pub fn to_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let i = (y as usize * self.width as usize + x as usize) * 3;
            image::Rgb([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]])
        })
    }

    /// Encodes the surface as a PNG file.
    pub fn save_png(&self, path: &Path) -> Result<(), ChartError> {
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| ChartError::Encode(e.to_string()))
    }

    fn set_pixel(&mut self, x: i64, y: i64, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        self.pixels[i] = color.0;
        self.pixels[i + 1] = color.1;
        self.pixels[i + 2] = color.2;
    }

    /// Filled disc centered at `(cx, cy)`.
    fn stamp(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb) {
        let r2 = radius * radius;
        let x0 = (cx - radius).floor() as i64;
        let x1 = (cx + radius).ceil() as i64;
        let y0 = (cy - radius).floor() as i64;
        let y1 = (cy + radius).ceil() as i64;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    fn draw_segment(&mut self, a: Point, b: Point, color: Rgb, radius: f32) {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let length = (dx * dx + dy * dy).sqrt();
        // Half-pixel sampling keeps the stroke gap-free at any angle.
        let steps = (length * 2.0).ceil().max(1.0) as u32;
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            self.stamp(a.x + dx * t, a.y + dy * t, radius, color);
        }
    }

    /// Square block of `scale` pixels with its top-left corner at `(x, y)`.
    fn fill_block(&mut self, x: f32, y: f32, scale: u32, color: Rgb) {
        let x0 = x.round() as i64;
        let y0 = y.round() as i64;
        for dy in 0..scale as i64 {
            for dx in 0..scale as i64 {
                self.set_pixel(x0 + dx, y0 + dy, color);
            }
        }
    }
}

fn fill(pixels: &mut [u8], color: Rgb) {
    for px in pixels.chunks_exact_mut(3) {
        px[0] = color.0;
        px[1] = color.1;
        px[2] = color.2;
    }
}

impl Surface for Pixmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        let background = self.background;
        fill(&mut self.pixels, background);
    }

    fn stroke_path(&mut self, points: &[Point], color: Rgb, width: f32) {
        let radius = (width / 2.0).max(0.5);
        if let [only] = points {
            self.stamp(only.x, only.y, radius, color);
            return;
        }
        for pair in points.windows(2) {
            self.draw_segment(pair[0], pair[1], color, radius);
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign, scale: u32) {
        let total = text_width(text, scale) as f32;
        let start_x = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - total / 2.0,
            TextAlign::Right => x - total,
        };
        let top = y - (GLYPH_HEIGHT * scale) as f32;
        let color = self.foreground;
        for (index, c) in text.chars().enumerate() {
            let rows = glyph(c);
            let origin_x = start_x + (index as u32 * GLYPH_ADVANCE * scale) as f32;
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits >> (GLYPH_WIDTH - 1 - col) & 1 == 1 {
                        self.fill_block(
                            origin_x + (col * scale) as f32,
                            top + (row as u32 * scale) as f32,
                            scale,
                            color,
                        );
                    }
                }
            }
        }
    }

    fn fill_text_rotated(&mut self, text: &str, x: f32, y: f32, scale: u32) {
        // Quarter turn clockwise: the along-text axis runs down the surface
        // and glyph tops face right, matching a rotated canvas fill.
        let total = text_width(text, scale) as f32;
        let start_y = y - total / 2.0;
        let color = self.foreground;
        for (index, c) in text.chars().enumerate() {
            let rows = glyph(c);
            let origin_y = start_y + (index as u32 * GLYPH_ADVANCE * scale) as f32;
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits >> (GLYPH_WIDTH - 1 - col) & 1 == 1 {
                        self.fill_block(
                            x + ((GLYPH_HEIGHT - 1 - row as u32) * scale) as f32,
                            origin_y + (col * scale) as f32,
                            scale,
                            color,
                        );
                    }
                }
            }
        }
    }
}
