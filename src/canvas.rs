use crate::colour::Colour;
use crate::font::Font;
use crate::units::Px;
use crate::RenderError;
use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;

/// Something text can be drawn onto.
///
/// `origin` is the top-left corner of the line: the font's ascender touches `origin.1` and the
/// baseline sits [`Font::ascent`] below it.
pub trait Surface {
    fn draw_text(&mut self, origin: (Px, Px), text: &str, font: &Font, colour: Colour);
}

/// An in-memory RGB raster the page is painted onto before being saved
pub struct Canvas {
    pub image: RgbImage,
}

impl Canvas {
    /// Create a canvas of `width` x `height` pixels filled with `background`
    pub fn new(width: u32, height: u32, background: Colour) -> Canvas {
        Canvas {
            image: RgbImage::from_pixel(width, height, background.to_rgb8()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Mix `colour` into the pixel at (x, y) by `coverage`; pixels off the canvas are ignored
    fn blend(&mut self, x: i32, y: i32, colour: Rgb<u8>, coverage: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }

        let coverage = coverage.clamp(0.0, 1.0);
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        for (dst, src) in pixel.0.iter_mut().zip(colour.0) {
            *dst = (*dst as f32 * (1.0 - coverage) + src as f32 * coverage).round() as u8;
        }
    }

    /// Encode the canvas as a PNG file at `path`
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

impl Surface for Canvas {
    fn draw_text(&mut self, origin: (Px, Px), text: &str, font: &Font, colour: Colour) {
        let colour = colour.to_rgb8();
        let (x, top) = origin;
        let baseline = (top + font.ascent()).0;
        let mut pen = x.0;

        // advance with the same per-glyph metrics `Font::width_of_text` measures with,
        // skipping characters the font has no glyph for
        for ch in text.chars() {
            let (Some(gid), Some(advance)) = (font.glyph_id(ch), font.advance(ch)) else {
                continue;
            };

            if let Some(glyph) = font.outline(gid, pen, baseline) {
                let bounds = glyph.px_bounds();
                glyph.draw(|gx, gy, coverage| {
                    let x = bounds.min.x as i32 + gx as i32;
                    let y = bounds.min.y as i32 + gy as i32;
                    self.blend(x, y, colour, coverage);
                });
            }

            pen += advance.0;
        }
    }
}
