//! Shape rasterization onto surfaces
//!
//! Pixels are sampled at their centers, so a shape covers a pixel when the
//! pixel's center lies inside it.

use super::color::Color;
use super::surface::Surface;

impl Surface {
    /// Filled circle centered at (cx, cy), overwriting covered pixels
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        let r2 = radius * radius;
        let y0 = (cy - radius).floor().max(0.0) as i32;
        let y1 = (cy + radius).ceil().min(self.height() as f32) as i32;
        for y in y0..y1 {
            let py = y as f32 + 0.5 - cy;
            let span2 = r2 - py * py;
            if span2 < 0.0 {
                continue;
            }
            let half = span2.sqrt();
            // pixel centers inside [cx - half, cx + half]
            let x0 = (cx - half - 0.5).ceil().max(0.0) as i32;
            let x1 = (cx + half - 0.5).floor().min(self.width() as f32 - 1.0) as i32;
            for x in x0..=x1 {
                self.set_pixel_safe(x, y, color);
            }
        }
    }

    /// Filled polygon (even-odd rule), overwriting covered pixels
    pub fn fill_polygon(&mut self, points: &[(f32, f32)], color: Color) {
        if points.len() < 3 {
            return;
        }
        let min_y = points.iter().map(|p| p.1).fold(f32::MAX, f32::min);
        let max_y = points.iter().map(|p| p.1).fold(f32::MIN, f32::max);
        let y0 = min_y.floor().max(0.0) as i32;
        let y1 = max_y.ceil().min(self.height() as f32) as i32;

        let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
        for y in y0..y1 {
            let sy = y as f32 + 0.5;
            crossings.clear();
            for i in 0..points.len() {
                let (ax, ay) = points[i];
                let (bx, by) = points[(i + 1) % points.len()];
                // half-open edge test so shared vertices count once
                if (ay <= sy && by > sy) || (by <= sy && ay > sy) {
                    let t = (sy - ay) / (by - ay);
                    crossings.push(ax + t * (bx - ax));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for pair in crossings.chunks_exact(2) {
                let x0 = (pair[0] - 0.5).ceil().max(0.0) as i32;
                let x1 = (pair[1] - 0.5).floor().min(self.width() as f32 - 1.0) as i32;
                for x in x0..=x1 {
                    self.set_pixel_safe(x, y, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_covers_center_not_corners() {
        let mut s = Surface::new(10, 10);
        s.fill_circle(5.0, 5.0, 5.0, Color::RED);
        assert_eq!(s.get_pixel(5, 5), Some(Color::RED));
        assert_eq!(s.get_pixel(0, 5), Some(Color::RED));
        assert_eq!(s.get_pixel(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(s.get_pixel(9, 9), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_triangle_fill() {
        let mut s = Surface::new(10, 10);
        let tri = [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)];
        s.fill_polygon(&tri, Color::GREEN);
        assert_eq!(s.get_pixel(1, 1), Some(Color::GREEN));
        assert_eq!(s.get_pixel(8, 8), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_degenerate_polygon_draws_nothing() {
        let mut s = Surface::new(4, 4);
        s.fill_polygon(&[(0.0, 0.0), (4.0, 4.0)], Color::WHITE);
        assert!(s.pixels().iter().all(|&b| b == 0));
    }
}
