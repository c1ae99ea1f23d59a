//! SpriteBox: a positioned picture with a box around it
//!
//! A box is either a solid color rectangle or an image. Image boxes keep
//! the untouched source surface plus the requested flip, size and angle,
//! and re-derive the rendered surface whenever one of those changes
//! (flip first, then scale, then rotate). The box's size is always the
//! rendered size, so rotating an image makes its box grow.

use std::fmt;
use std::sync::Arc;

use macroquad::math::Vec2;

use crate::assets;
use crate::camera::Camera;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::surface::{Color, Surface};
use crate::text::{self, TextStyle};

/// An image with the transforms applied to it
#[derive(Debug, Clone)]
pub struct ImageVisual {
    source: Arc<Surface>,
    flip: bool,
    /// Requested size before rotation
    width: usize,
    height: usize,
    /// Whole degrees in [0, 360)
    angle: i32,
    rendered: Arc<Surface>,
}

impl ImageVisual {
    /// Render `source` with the given transforms. A size of 0x0 means the
    /// source's natural size; sizes round to whole pixels and angles drop
    /// their fraction.
    fn new(source: Arc<Surface>, flip: bool, width: f32, height: f32, angle: f32) -> Self {
        let mut width = (width + 0.5).max(0.0) as usize;
        let mut height = (height + 0.5).max(0.0) as usize;
        let angle = (angle as i32).rem_euclid(360);

        let mut current = Arc::clone(&source);
        if flip {
            current = Arc::new(current.flipped_horizontal());
        }
        if width == 0 && height == 0 {
            (width, height) = current.size();
        } else if (width, height) != current.size() {
            current = Arc::new(current.scaled(width, height));
        }
        if angle != 0 {
            current = Arc::new(current.rotated(angle as f32));
        }

        Self {
            source,
            flip,
            width,
            height,
            angle,
            rendered: current,
        }
    }

    /// Same transforms, different picture
    fn with_source(&self, source: Arc<Surface>) -> Self {
        Self::new(source, self.flip, self.width as f32, self.height as f32, self.angle as f32)
    }

    pub fn source(&self) -> &Arc<Surface> {
        &self.source
    }

    pub fn rendered(&self) -> &Arc<Surface> {
        &self.rendered
    }

    pub fn is_flipped(&self) -> bool {
        self.flip
    }

    pub fn angle(&self) -> i32 {
        self.angle
    }
}

/// What a box looks like
#[derive(Debug, Clone)]
pub enum Visual {
    Color(Color),
    Image(ImageVisual),
}

/// A sprite and the axis-aligned box that holds it.
///
/// `x` and `y` are the center. Every edge and corner accessor is derived
/// from the center and the current size, and every setter moves the box
/// without resizing it.
#[derive(Debug, Clone)]
pub struct SpriteBox {
    pub x: f32,
    pub y: f32,
    pub speed_x: f32,
    pub speed_y: f32,
    visual: Visual,
    w: f32,
    h: f32,
}

impl SpriteBox {
    fn with_visual(x: f32, y: f32, visual: Visual, w: f32, h: f32) -> Self {
        Self {
            x,
            y,
            speed_x: 0.0,
            speed_y: 0.0,
            visual,
            w,
            h,
        }
    }

    fn with_image(x: f32, y: f32, image: ImageVisual) -> Self {
        let (w, h) = image.rendered.size();
        Self::with_visual(x, y, Visual::Image(image), w as f32, h as f32)
    }

    /// Box showing an image file or URL at its natural size
    pub fn from_image(x: f32, y: f32, name: &str) -> Result<Self> {
        let source = assets::load_image(name)?;
        Ok(Self::from_surface(x, y, source))
    }

    /// Box showing an existing surface
    pub fn from_surface(x: f32, y: f32, surface: impl Into<Arc<Surface>>) -> Self {
        Self::with_image(x, y, ImageVisual::new(surface.into(), false, 0.0, 0.0, 0.0))
    }

    /// Solid rectangle
    pub fn from_color(x: f32, y: f32, color: Color, width: f32, height: f32) -> Self {
        Self::with_visual(x, y, Visual::Color(color), width, height)
    }

    /// Filled circle in a box of side `2 * radius`
    pub fn from_circle(x: f32, y: f32, color: Color, radius: f32) -> Self {
        let side = (radius * 2.0).ceil().max(0.0) as usize;
        let mut img = Surface::new(side, side);
        img.fill_circle(radius, radius, radius, color);
        Self::from_surface(x, y, img)
    }

    /// Concentric circles, drawn in order. The first ring must be the
    /// largest; it sets the size of the box.
    pub fn from_circles(x: f32, y: f32, rings: &[(Color, f32)]) -> Result<Self> {
        let Some(&(_, outer)) = rings.first() else {
            return Err(Error::invalid("from_circles needs at least one ring"));
        };
        let side = (outer * 2.0).ceil().max(0.0) as usize;
        let mut img = Surface::new(side, side);
        for &(color, radius) in rings {
            img.fill_circle(outer, outer, radius, color);
        }
        Ok(Self::from_surface(x, y, img))
    }

    /// Filled polygon in a box just big enough for it. The polygon is
    /// centered on (x, y), so shifting every point by the same amount
    /// gives the same box.
    pub fn from_polygon(x: f32, y: f32, color: Color, points: &[(f32, f32)]) -> Result<Self> {
        if points.len() < 3 {
            return Err(Error::invalid(format!(
                "a polygon needs at least 3 points, got {}",
                points.len()
            )));
        }
        let (mut x0, mut y0) = (f32::INFINITY, f32::INFINITY);
        let (mut x1, mut y1) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
        for &(px, py) in points {
            x0 = x0.min(px);
            y0 = y0.min(py);
            x1 = x1.max(px);
            y1 = y1.max(py);
        }
        let mut img = Surface::new((x1 - x0).ceil() as usize, (y1 - y0).ceil() as usize);
        let local: Vec<(f32, f32)> = points.iter().map(|&(px, py)| (px - x0, py - y0)).collect();
        img.fill_polygon(&local, color);
        Ok(Self::from_surface(x, y, img))
    }

    /// Box showing rendered text
    pub fn from_text(x: f32, y: f32, text: &str, style: TextStyle) -> Result<Self> {
        let rendered = text::render_text(text, style)?;
        Ok(Self::from_surface(x, y, rendered))
    }

    // Edges and corners

    pub fn left(&self) -> f32 {
        self.x - self.w * 0.5
    }

    pub fn set_left(&mut self, value: f32) {
        self.x = value + self.w * 0.5;
    }

    pub fn right(&self) -> f32 {
        self.x + self.w * 0.5
    }

    pub fn set_right(&mut self, value: f32) {
        self.x = value - self.w * 0.5;
    }

    pub fn top(&self) -> f32 {
        self.y - self.h * 0.5
    }

    pub fn set_top(&mut self, value: f32) {
        self.y = value + self.h * 0.5;
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h * 0.5
    }

    pub fn set_bottom(&mut self, value: f32) {
        self.y = value - self.h * 0.5;
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn set_center(&mut self, value: Vec2) {
        self.x = value.x;
        self.y = value.y;
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.top())
    }

    pub fn set_top_left(&mut self, value: Vec2) {
        self.set_left(value.x);
        self.set_top(value.y);
    }

    pub fn top_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.top())
    }

    pub fn set_top_right(&mut self, value: Vec2) {
        self.set_right(value.x);
        self.set_top(value.y);
    }

    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.bottom())
    }

    pub fn set_bottom_left(&mut self, value: Vec2) {
        self.set_left(value.x);
        self.set_bottom(value.y);
    }

    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    pub fn set_bottom_right(&mut self, value: Vec2) {
        self.set_right(value.x);
        self.set_bottom(value.y);
    }

    // Size

    pub fn width(&self) -> f32 {
        self.w
    }

    /// Resize to the given width, scaling the height to match
    pub fn set_width(&mut self, value: f32) {
        if self.w > 0.0 {
            self.scale_by(value / self.w);
        } else {
            self.set_size(value, self.h);
        }
    }

    pub fn height(&self) -> f32 {
        self.h
    }

    /// Resize to the given height, scaling the width to match
    pub fn set_height(&mut self, value: f32) {
        if self.h > 0.0 {
            self.scale_by(value / self.h);
        } else {
            self.set_size(self.w, value);
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    /// Stretch to exactly `width` x `height`
    pub fn set_size(&mut self, width: f32, height: f32) {
        match &self.visual {
            Visual::Image(img) => {
                let img = ImageVisual::new(Arc::clone(&img.source), img.flip, width, height, img.angle as f32);
                self.set_image_visual(img);
            }
            Visual::Color(_) => {
                self.w = width;
                self.h = height;
            }
        }
    }

    /// Grow or shrink by a factor; `scale_by(1.0)` does nothing
    pub fn scale_by(&mut self, multiplier: f32) {
        match &self.visual {
            Visual::Image(img) => {
                let img = ImageVisual::new(
                    Arc::clone(&img.source),
                    img.flip,
                    img.width as f32 * multiplier,
                    img.height as f32 * multiplier,
                    img.angle as f32,
                );
                self.set_image_visual(img);
            }
            Visual::Color(_) => {
                self.w *= multiplier;
                self.h *= multiplier;
            }
        }
    }

    /// Back to the source image's own size (color boxes are unchanged)
    pub fn full_size(&mut self) {
        if let Visual::Image(img) = &self.visual {
            let img = ImageVisual::new(Arc::clone(&img.source), img.flip, 0.0, 0.0, img.angle as f32);
            self.set_image_visual(img);
        }
    }

    /// Mirror left-to-right. Mirror top-to-bottom with `rotate(180.0)`
    /// followed by `flip()`.
    pub fn flip(&mut self) {
        if let Visual::Image(img) = &self.visual {
            let img = ImageVisual::new(
                Arc::clone(&img.source),
                !img.flip,
                img.width as f32,
                img.height as f32,
                img.angle as f32,
            );
            self.set_image_visual(img);
        }
    }

    /// Turn counterclockwise by `angle` degrees; only whole degrees count
    pub fn rotate(&mut self, angle: f32) {
        if let Visual::Image(img) = &self.visual {
            let img = ImageVisual::new(
                Arc::clone(&img.source),
                img.flip,
                img.width as f32,
                img.height as f32,
                img.angle as f32 + angle,
            );
            self.set_image_visual(img);
        }
    }

    fn set_image_visual(&mut self, img: ImageVisual) {
        let (w, h) = img.rendered.size();
        self.w = w as f32;
        self.h = h as f32;
        self.visual = Visual::Image(img);
    }

    // Look

    pub fn visual(&self) -> &Visual {
        &self.visual
    }

    /// Fill color, for color boxes
    pub fn color(&self) -> Option<Color> {
        match self.visual {
            Visual::Color(color) => Some(color),
            Visual::Image(_) => None,
        }
    }

    /// Turn into a solid box of the current size
    pub fn set_color(&mut self, color: Color) {
        self.visual = Visual::Color(color);
    }

    /// The surface as it is drawn, for image boxes
    pub fn image(&self) -> Option<&Arc<Surface>> {
        match &self.visual {
            Visual::Image(img) => Some(&img.rendered),
            Visual::Color(_) => None,
        }
    }

    /// Show a different image file or URL, keeping the current flip, size
    /// and rotation if this box already shows an image
    pub fn set_image(&mut self, name: &str) -> Result<()> {
        let source = assets::load_image(name)?;
        self.set_surface(source);
        Ok(())
    }

    /// Like [`SpriteBox::set_image`] with a surface already in hand
    pub fn set_surface(&mut self, surface: impl Into<Arc<Surface>>) {
        let img = match &self.visual {
            Visual::Image(current) => current.with_source(surface.into()),
            Visual::Color(_) => ImageVisual::new(surface.into(), false, 0.0, 0.0, 0.0),
        };
        self.set_image_visual(img);
    }

    // Motion

    pub fn speed(&self) -> Vec2 {
        Vec2::new(self.speed_x, self.speed_y)
    }

    pub fn set_speed(&mut self, value: Vec2) {
        self.speed_x = value.x;
        self.speed_y = value.y;
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Move by the current speed
    pub fn move_speed(&mut self) {
        self.move_by(self.speed_x, self.speed_y);
    }

    // Hit testing

    pub fn rect(&self) -> Rect {
        Rect::centered(self.x, self.y, self.w, self.h)
    }

    /// Whether a point is strictly inside the box
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (x - self.x).abs() * 2.0 < self.w && (y - self.y).abs() * 2.0 < self.h
    }

    /// Whether the two boxes share some area. Boxes that only meet at an
    /// edge do not overlap.
    pub fn overlaps(&self, other: &SpriteBox) -> bool {
        self.rect().intersects(&other.rect())
    }

    /// Whether the boxes overlap or meet after growing this one by the
    /// padding on each side
    pub fn touches(&self, other: &SpriteBox, padding_x: f32, padding_y: f32) -> bool {
        self.rect().inflate(padding_x, padding_y).touches(&other.rect())
    }

    /// How far to move this box so it no longer overlaps `other`
    /// (after padding), along whichever axis needs the smallest move.
    /// Zero when the boxes don't touch.
    pub fn overlap(&self, other: &SpriteBox, padding_x: f32, padding_y: f32) -> Vec2 {
        let l = other.left() - self.right() - padding_x;
        let r = self.left() - other.right() - padding_x;
        let t = other.top() - self.bottom() - padding_y;
        let b = self.top() - other.bottom() - padding_y;
        let m = l.max(r).max(t).max(b);
        if m >= 0.0 {
            Vec2::ZERO
        } else if m == l {
            Vec2::new(l, 0.0)
        } else if m == r {
            Vec2::new(-r, 0.0)
        } else if m == t {
            Vec2::new(0.0, t)
        } else {
            Vec2::new(0.0, -b)
        }
    }

    /// Touching, and this box's bottom edge is the one in contact
    pub fn bottom_touches(&self, other: &SpriteBox, padding_x: f32, padding_y: f32) -> bool {
        self.overlap(other, padding_x + 1.0, padding_y + 1.0).y < 0.0
    }

    /// Touching, and this box's top edge is the one in contact
    pub fn top_touches(&self, other: &SpriteBox, padding_x: f32, padding_y: f32) -> bool {
        self.overlap(other, padding_x + 1.0, padding_y + 1.0).y > 0.0
    }

    /// Touching, and this box's left edge is the one in contact
    pub fn left_touches(&self, other: &SpriteBox, padding_x: f32, padding_y: f32) -> bool {
        self.overlap(other, padding_x + 1.0, padding_y + 1.0).x > 0.0
    }

    /// Touching, and this box's right edge is the one in contact
    pub fn right_touches(&self, other: &SpriteBox, padding_x: f32, padding_y: f32) -> bool {
        self.overlap(other, padding_x + 1.0, padding_y + 1.0).x < 0.0
    }

    /// Make the smallest move that ends the overlap, and stop any motion
    /// that was carrying this box into `other`
    pub fn move_to_stop_overlapping(&mut self, other: &SpriteBox, padding_x: f32, padding_y: f32) {
        let o = self.overlap(other, padding_x, padding_y);
        if o == Vec2::ZERO {
            return;
        }
        self.move_by(o.x, o.y);
        if o.x * self.speed_x < 0.0 {
            self.speed_x = 0.0;
        }
        if o.y * self.speed_y < 0.0 {
            self.speed_y = 0.0;
        }
    }

    /// Push both boxes apart by half the overlap each. On the axis they
    /// collided along, both end up moving at their average speed.
    pub fn move_both_to_stop_overlapping(&mut self, other: &mut SpriteBox, padding_x: f32, padding_y: f32) {
        let o = self.overlap(other, padding_x, padding_y);
        if o == Vec2::ZERO {
            return;
        }
        self.move_by(o.x * 0.5, o.y * 0.5);
        other.move_by(-o.x * 0.5, -o.y * 0.5);
        if o.x != 0.0 {
            self.speed_x = (self.speed_x + other.speed_x) * 0.5;
            other.speed_x = self.speed_x;
        }
        if o.y != 0.0 {
            self.speed_y = (self.speed_y + other.speed_y) * 0.5;
            other.speed_y = self.speed_y;
        }
    }

    /// Whether the mouse, as polled this tick, is over the box
    pub fn mousehover(&self, camera: &Camera) -> bool {
        let mouse = camera.mouse();
        self.contains(mouse.x, mouse.y)
    }

    /// Whether the box is under the mouse while a button is held
    pub fn mouseclick(&self, camera: &Camera) -> bool {
        self.mousehover(camera) && camera.mouseclick()
    }

    /// A motionless copy centered somewhere else
    pub fn copy_at(&self, x: f32, y: f32) -> SpriteBox {
        let mut copy = self.clone();
        copy.x = x;
        copy.y = y;
        copy.speed_x = 0.0;
        copy.speed_y = 0.0;
        copy
    }
}

impl fmt::Display for SpriteBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} SpriteBox centered at {},{}", self.w, self.h, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputState, MouseButton};

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> SpriteBox {
        SpriteBox::from_color(x, y, Color::RED, w, h)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_identical_boxes_overlap() {
        for (w, h) in [(1.0, 1.0), (10.0, 4.0), (0.5, 300.0)] {
            let a = boxed(12.0, -7.0, w, h);
            let b = a.clone();
            assert!(a.overlaps(&b));
        }
    }

    #[test]
    fn test_separated_boxes_do_not_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        for (x, y) in [(20.0, 0.0), (-20.0, 0.0), (0.0, 11.0), (0.0, -50.0), (15.0, 15.0)] {
            let b = boxed(x, y, 10.0, 10.0);
            assert!(!a.overlaps(&b), "{} vs {}", a, b);
            assert!(!b.overlaps(&a));
        }
    }

    #[test]
    fn test_edge_contact_touches_without_overlapping() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(a.touches(&b, 0.0, 0.0));
        let far = boxed(13.0, 0.0, 10.0, 10.0);
        assert!(!a.touches(&far, 0.0, 0.0));
        assert!(a.touches(&far, 3.0, 0.0));
    }

    #[test]
    fn test_edges_and_setters() {
        let mut b = boxed(50.0, 40.0, 20.0, 10.0);
        assert!(approx(b.left(), 40.0));
        assert!(approx(b.right(), 60.0));
        assert!(approx(b.top(), 35.0));
        assert!(approx(b.bottom(), 45.0));

        b.set_left(0.0);
        assert!(approx(b.x, 10.0));
        b.set_bottom_right(Vec2::new(100.0, 100.0));
        assert_eq!(b.top_left(), Vec2::new(80.0, 90.0));
        assert_eq!(b.size(), Vec2::new(20.0, 10.0));
    }

    #[test]
    fn test_contains_is_strict() {
        let b = boxed(0.0, 0.0, 10.0, 10.0);
        assert!(b.contains(0.0, 0.0));
        assert!(b.contains(4.9, -4.9));
        assert!(!b.contains(5.0, 0.0));
        assert!(!b.contains(0.0, -6.0));
    }

    #[test]
    fn test_overlap_picks_smallest_push() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        // other sits slightly to the right: push a left by 2
        let b = boxed(8.0, 1.0, 10.0, 10.0);
        assert_eq!(a.overlap(&b, 0.0, 0.0), Vec2::new(-2.0, 0.0));
        // other sits slightly below: push a up by 1
        let c = boxed(0.0, 9.0, 10.0, 10.0);
        assert_eq!(a.overlap(&c, 0.0, 0.0), Vec2::new(0.0, -1.0));
        // no contact
        let d = boxed(30.0, 0.0, 10.0, 10.0);
        assert_eq!(a.overlap(&d, 0.0, 0.0), Vec2::ZERO);
    }

    #[test]
    fn test_side_touches() {
        let ground = boxed(0.0, 10.0, 100.0, 10.0);
        let player = boxed(0.0, 0.0, 10.0, 10.0);
        // player's bottom is exactly on the ground's top
        assert!(player.bottom_touches(&ground, 0.0, 0.0));
        assert!(!player.top_touches(&ground, 0.0, 0.0));
        assert!(ground.top_touches(&player, 0.0, 0.0));

        let wall = boxed(10.0, 0.0, 10.0, 40.0);
        assert!(player.right_touches(&wall, 0.0, 0.0));
        assert!(wall.left_touches(&player, 0.0, 0.0));
    }

    #[test]
    fn test_move_to_stop_overlapping() {
        let floor = boxed(0.0, 20.0, 100.0, 20.0);
        let mut ball = boxed(0.0, 8.0, 10.0, 10.0);
        ball.speed_y = 4.0;
        ball.speed_x = 3.0;
        ball.move_to_stop_overlapping(&floor, 0.0, 0.0);
        assert!(approx(ball.bottom(), floor.top()));
        assert!(!ball.overlaps(&floor));
        assert_eq!(ball.speed_y, 0.0);
        assert_eq!(ball.speed_x, 3.0);
    }

    #[test]
    fn test_move_both_to_stop_overlapping() {
        let mut a = boxed(0.0, 0.0, 10.0, 10.0);
        let mut b = boxed(8.0, 0.0, 10.0, 10.0);
        a.speed_x = 4.0;
        b.speed_x = -2.0;
        a.move_both_to_stop_overlapping(&mut b, 0.0, 0.0);
        assert!(approx(a.x, -1.0));
        assert!(approx(b.x, 9.0));
        assert_eq!(a.speed_x, 1.0);
        assert_eq!(b.speed_x, 1.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_move_speed() {
        let mut b = boxed(0.0, 0.0, 1.0, 1.0);
        b.set_speed(Vec2::new(2.0, -1.0));
        b.move_speed();
        b.move_speed();
        assert_eq!(b.center(), Vec2::new(4.0, -2.0));
    }

    #[test]
    fn test_color_box_scales_but_ignores_rotate_and_flip() {
        let mut b = boxed(0.0, 0.0, 10.0, 4.0);
        b.rotate(45.0);
        b.flip();
        assert_eq!(b.size(), Vec2::new(10.0, 4.0));
        b.scale_by(1.5);
        assert_eq!(b.size(), Vec2::new(15.0, 6.0));
        b.set_width(30.0);
        assert_eq!(b.size(), Vec2::new(30.0, 12.0));
    }

    #[test]
    fn test_image_transforms() {
        let mut src = Surface::new(20, 10);
        src.set_pixel_safe(0, 0, Color::RED);
        let mut b = SpriteBox::from_surface(0.0, 0.0, src);
        assert_eq!(b.size(), Vec2::new(20.0, 10.0));

        b.rotate(90.0);
        assert_eq!(b.size(), Vec2::new(10.0, 20.0));
        b.rotate(-90.0);
        assert_eq!(b.size(), Vec2::new(20.0, 10.0));

        b.flip();
        let flipped = b.image().unwrap();
        assert_eq!(flipped.get_pixel(19, 0), Some(Color::RED));

        b.scale_by(2.0);
        assert_eq!(b.size(), Vec2::new(40.0, 20.0));
        b.full_size();
        assert_eq!(b.size(), Vec2::new(20.0, 10.0));
        // flip survives a resize
        assert_eq!(b.image().unwrap().get_pixel(19, 0), Some(Color::RED));
    }

    #[test]
    fn test_rotation_wraps_to_whole_degrees() {
        let mut b = SpriteBox::from_surface(0.0, 0.0, Surface::filled(4, 2, Color::WHITE));
        b.rotate(450.7);
        match b.visual() {
            Visual::Image(img) => assert_eq!(img.angle(), 90),
            Visual::Color(_) => panic!("expected image"),
        }
        b.rotate(-720.0);
        assert_eq!(b.size(), Vec2::new(2.0, 4.0));
    }

    #[test]
    fn test_set_surface_keeps_transforms() {
        let mut b = SpriteBox::from_surface(0.0, 0.0, Surface::new(10, 10));
        b.set_size(30.0, 30.0);
        b.set_surface(Surface::new(5, 7));
        assert_eq!(b.size(), Vec2::new(30.0, 30.0));

        let mut c = boxed(0.0, 0.0, 3.0, 3.0);
        c.set_surface(Surface::new(5, 7));
        assert_eq!(c.size(), Vec2::new(5.0, 7.0));
        assert!(c.color().is_none());
        c.set_color(Color::BLUE);
        assert_eq!(c.color(), Some(Color::BLUE));
        assert_eq!(c.size(), Vec2::new(5.0, 7.0));
    }

    #[test]
    fn test_from_circle_size() {
        let b = SpriteBox::from_circle(0.0, 0.0, Color::GREEN, 15.0);
        assert_eq!(b.size(), Vec2::new(30.0, 30.0));
        let img = b.image().unwrap();
        assert_eq!(img.get_pixel(15, 15), Some(Color::GREEN));
        assert_eq!(img.get_pixel(0, 0).map(|c| c.a), Some(0));
    }

    #[test]
    fn test_from_circles_draws_rings_in_order() {
        let b = SpriteBox::from_circles(0.0, 0.0, &[(Color::RED, 10.0), (Color::WHITE, 4.0)]).unwrap();
        assert_eq!(b.size(), Vec2::new(20.0, 20.0));
        let img = b.image().unwrap();
        assert_eq!(img.get_pixel(10, 10), Some(Color::WHITE));
        assert_eq!(img.get_pixel(10, 2), Some(Color::RED));
        assert!(SpriteBox::from_circles(0.0, 0.0, &[]).is_err());
    }

    #[test]
    fn test_from_polygon_is_centered() {
        let a = SpriteBox::from_polygon(50.0, 50.0, Color::BLUE, &[(0.0, 0.0), (40.0, 0.0), (20.0, 30.0)]).unwrap();
        let b = SpriteBox::from_polygon(50.0, 50.0, Color::BLUE, &[(100.0, 100.0), (140.0, 100.0), (120.0, 130.0)])
            .unwrap();
        assert_eq!(a.size(), Vec2::new(40.0, 30.0));
        assert_eq!(a.rect(), b.rect());
        assert!(matches!(
            SpriteBox::from_polygon(0.0, 0.0, Color::BLUE, &[(0.0, 0.0), (1.0, 1.0)]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_copy_at() {
        let mut b = boxed(1.0, 2.0, 3.0, 4.0);
        b.speed_x = 9.0;
        let c = b.copy_at(10.0, 20.0);
        assert_eq!(c.center(), Vec2::new(10.0, 20.0));
        assert_eq!(c.size(), b.size());
        assert_eq!(c.speed(), Vec2::ZERO);
        assert_eq!(c.color(), Some(Color::RED));
    }

    #[test]
    fn test_mouse_hover_and_click() {
        let mut camera = Camera::new(100, 100);
        let target = boxed(50.0, 50.0, 20.0, 20.0);
        camera.set_input(InputState {
            mouse: Vec2::new(55.0, 45.0),
            ..Default::default()
        });
        assert!(target.mousehover(&camera));
        assert!(!target.mouseclick(&camera));

        let mut input = camera.input().clone();
        input.buttons[MouseButton::Left as usize] = true;
        camera.set_input(input);
        assert!(target.mouseclick(&camera));

        // the mouse is in viewport pixels; moving the camera moves the world under it
        camera.move_by(100.0, 0.0);
        assert!(!target.mousehover(&camera));
    }

    #[test]
    fn test_display() {
        let b = boxed(1.5, 2.0, 40.0, 30.0);
        assert_eq!(b.to_string(), "40x30 SpriteBox centered at 1.5,2");
    }
}
