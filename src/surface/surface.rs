//! Software RGBA surface
//!
//! Sprites, rendered text and the camera's screen are all surfaces. The
//! camera composites into one and hands it to the frontend as a texture.

use super::color::Color;
use crate::error::{Error, Result};
use crate::geometry::Rect;

/// RGBA pixel buffer, 4 bytes per pixel, row-major from the top-left
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

impl Surface {
    /// Transparent surface
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            width,
            height,
        }
    }

    /// Surface filled with a single color
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        let mut surface = Self::new(width, height);
        surface.fill(color);
        surface
    }

    /// Wrap raw RGBA bytes
    pub fn from_rgba(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self> {
        if pixels.len() != width * height * 4 {
            return Err(Error::invalid(format!(
                "{}x{} surface needs {} bytes, got {}",
                width,
                height,
                width * height * 4,
                pixels.len()
            )));
        }
        Ok(Self { pixels, width, height })
    }

    pub fn from_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width: width as usize,
            height: height as usize,
            pixels: img.into_raw(),
        }
    }

    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width as u32, self.height as u32, self.pixels.clone())
            .unwrap_or_else(|| image::RgbaImage::new(self.width as u32, self.height as u32))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw RGBA bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some(Color::from_bytes([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]))
    }

    /// Overwrite a pixel, ignoring out-of-bounds coordinates
    pub fn set_pixel_safe(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let i = (y as usize * self.width + x as usize) * 4;
        self.pixels[i..i + 4].copy_from_slice(&color.to_bytes());
    }

    /// Blend a pixel over the existing one, ignoring out-of-bounds coordinates
    pub fn blend_pixel_safe(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let i = (y as usize * self.width + x as usize) * 4;
        let dst = Color::from_bytes([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]);
        self.pixels[i..i + 4].copy_from_slice(&color.blend_over(dst).to_bytes());
    }

    pub fn fill(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    /// Overwrite every pixel inside `area` (clipped to the surface)
    pub fn fill_rect(&mut self, area: Rect, color: Color) {
        let Some((x0, y0, x1, y1)) = self.pixel_bounds(area) else { return };
        let bytes = color.to_bytes();
        for y in y0..y1 {
            let row = y * self.width;
            for x in x0..x1 {
                let i = (row + x) * 4;
                self.pixels[i..i + 4].copy_from_slice(&bytes);
            }
        }
    }

    /// Alpha-blend `src` with its top-left corner at (x, y)
    pub fn blit(&mut self, src: &Surface, x: i32, y: i32) {
        // clip in i64 so far-off positions cannot overflow
        let (x, y) = (x as i64, y as i64);
        let dst_x0 = x.max(0);
        let dst_y0 = y.max(0);
        let dst_x1 = (x + src.width as i64).min(self.width as i64);
        let dst_y1 = (y + src.height as i64).min(self.height as i64);
        if dst_x1 <= dst_x0 || dst_y1 <= dst_y0 {
            return;
        }

        for dy in dst_y0..dst_y1 {
            let sy = (dy - y) as usize;
            for dx in dst_x0..dst_x1 {
                let sx = (dx - x) as usize;
                let si = (sy * src.width + sx) * 4;
                let src_color = Color::from_bytes([
                    src.pixels[si],
                    src.pixels[si + 1],
                    src.pixels[si + 2],
                    src.pixels[si + 3],
                ]);
                if src_color.a == 0 {
                    continue;
                }
                self.blend_pixel_safe(dx as i32, dy as i32, src_color);
            }
        }
    }

    /// Copy a region out into a new surface (clipped to this surface)
    pub fn sub_surface(&self, area: Rect) -> Surface {
        let Some((x0, y0, x1, y1)) = self.pixel_bounds(area) else {
            return Surface::new(0, 0);
        };
        let w = x1 - x0;
        let mut out = Surface::new(w, y1 - y0);
        for y in y0..y1 {
            let src = (y * self.width + x0) * 4;
            let dst = (y - y0) * w * 4;
            out.pixels[dst..dst + w * 4].copy_from_slice(&self.pixels[src..src + w * 4]);
        }
        out
    }

    /// Copy all pixels from a surface of the same size
    pub fn copy_from(&mut self, other: &Surface) {
        if self.size() == other.size() {
            self.pixels.copy_from_slice(&other.pixels);
        } else {
            *self = other.clone();
        }
    }

    /// Integer pixel range covered by `area`, or None when nothing is left
    fn pixel_bounds(&self, area: Rect) -> Option<(usize, usize, usize, usize)> {
        let clipped = area.clip(&self.rect())?;
        let x0 = clipped.left().round() as usize;
        let y0 = clipped.top().round() as usize;
        let x1 = (clipped.right().round() as usize).min(self.width);
        let y1 = (clipped.bottom().round() as usize).min(self.height);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some((x0, y0, x1, y1))
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Surface({}x{})", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_checks_length() {
        assert!(Surface::from_rgba(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            Surface::from_rgba(2, 2, vec![0; 15]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_fill_rect_is_clipped() {
        let mut s = Surface::new(4, 4);
        s.fill_rect(Rect::new(-2.0, 2.0, 4.0, 10.0), Color::RED);
        assert_eq!(s.get_pixel(0, 3), Some(Color::RED));
        assert_eq!(s.get_pixel(1, 2), Some(Color::RED));
        assert_eq!(s.get_pixel(2, 2), Some(Color::TRANSPARENT));
        assert_eq!(s.get_pixel(0, 1), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_blit_skips_transparent_pixels() {
        let mut dst = Surface::filled(3, 3, Color::BLUE);
        let mut src = Surface::new(2, 2);
        src.set_pixel_safe(0, 0, Color::RED);
        dst.blit(&src, 1, 1);
        assert_eq!(dst.get_pixel(1, 1), Some(Color::RED));
        assert_eq!(dst.get_pixel(2, 2), Some(Color::BLUE));
    }

    #[test]
    fn test_blit_partially_offscreen() {
        let mut dst = Surface::new(3, 3);
        let src = Surface::filled(2, 2, Color::GREEN);
        dst.blit(&src, -1, 2);
        assert_eq!(dst.get_pixel(0, 2), Some(Color::GREEN));
        assert_eq!(dst.get_pixel(1, 2), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_blit_at_extreme_positions() {
        let mut dst = Surface::new(3, 3);
        let src = Surface::filled(2, 2, Color::GREEN);
        dst.blit(&src, i32::MAX, 0);
        dst.blit(&src, 0, i32::MAX);
        dst.blit(&src, i32::MIN, i32::MIN);
        assert_eq!(dst, Surface::new(3, 3));
    }

    #[test]
    fn test_sub_surface() {
        let mut s = Surface::new(4, 2);
        s.set_pixel_safe(3, 1, Color::WHITE);
        let part = s.sub_surface(Rect::new(2.0, 0.0, 2.0, 2.0));
        assert_eq!(part.size(), (2, 2));
        assert_eq!(part.get_pixel(1, 1), Some(Color::WHITE));
    }

    #[test]
    fn test_image_roundtrip_keeps_pixels() {
        let mut s = Surface::new(2, 1);
        s.set_pixel_safe(1, 0, Color::rgba(9, 8, 7, 6));
        let back = Surface::from_image(s.to_image());
        assert_eq!(back, s);
    }
}
