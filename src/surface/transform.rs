//! Whole-surface transforms: flip, scale, rotate, shear
//!
//! Every transform returns a new surface; sprites keep the untouched source
//! and re-derive their look from it, so errors never accumulate.

use image::imageops::{self, FilterType};

use super::surface::Surface;

impl Surface {
    /// Mirror left-to-right
    pub fn flipped_horizontal(&self) -> Surface {
        Surface::from_image(imageops::flip_horizontal(&self.to_image()))
    }

    /// Mirror top-to-bottom
    pub fn flipped_vertical(&self) -> Surface {
        Surface::from_image(imageops::flip_vertical(&self.to_image()))
    }

    /// Smooth resize to exactly width x height
    pub fn scaled(&self, width: usize, height: usize) -> Surface {
        if (width, height) == self.size() {
            return self.clone();
        }
        if width == 0 || height == 0 || self.is_empty() {
            return Surface::new(width, height);
        }
        Surface::from_image(imageops::resize(
            &self.to_image(),
            width as u32,
            height as u32,
            FilterType::Triangle,
        ))
    }

    /// Rotate counterclockwise by `degrees` (as seen on screen).
    /// The result is just big enough to hold the rotated image.
    pub fn rotated(&self, degrees: f32) -> Surface {
        let turns = degrees.rem_euclid(360.0);
        if turns == 0.0 || self.is_empty() {
            return self.clone();
        }

        let (sin, cos) = turns.to_radians().sin_cos();
        let (w, h) = (self.width() as f32, self.height() as f32);
        // tolerance keeps right angles from growing a pixel
        let out_w = ((w * cos.abs() + h * sin.abs()) - 1e-3).ceil().max(1.0) as usize;
        let out_h = ((w * sin.abs() + h * cos.abs()) - 1e-3).ceil().max(1.0) as usize;

        let mut out = Surface::new(out_w, out_h);
        let (src_cx, src_cy) = (w * 0.5, h * 0.5);
        let (dst_cx, dst_cy) = (out_w as f32 * 0.5, out_h as f32 * 0.5);

        for oy in 0..out_h {
            for ox in 0..out_w {
                let dx = ox as f32 + 0.5 - dst_cx;
                let dy = oy as f32 + 0.5 - dst_cy;
                // inverse of the y-down counterclockwise rotation
                let sx = dx * cos - dy * sin + src_cx;
                let sy = dx * sin + dy * cos + src_cy;
                if sx < 0.0 || sy < 0.0 {
                    continue;
                }
                if let Some(color) = self.get_pixel(sx as usize, sy as usize) {
                    out.set_pixel_safe(ox as i32, oy as i32, color);
                }
            }
        }
        out
    }

    /// Horizontal shear: the top row moves right by `factor * height` pixels,
    /// the bottom row stays put. Used for faux italics.
    pub fn skewed(&self, factor: f32) -> Surface {
        if factor <= 0.0 || self.is_empty() {
            return self.clone();
        }
        let h = self.height();
        let extra = (factor * h as f32).ceil() as usize;
        let mut out = Surface::new(self.width() + extra, h);
        for y in 0..h {
            let shift = (factor * (h - 1 - y) as f32).round() as i32;
            for x in 0..self.width() {
                if let Some(color) = self.get_pixel(x, y) {
                    if color.a > 0 {
                        out.set_pixel_safe(x as i32 + shift, y as i32, color);
                    }
                }
            }
        }
        out
    }
}
