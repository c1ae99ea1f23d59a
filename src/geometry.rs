//! Axis-aligned rectangles in world or surface space

use macroquad::math::Vec2;

/// A rectangle defined by its top-left corner and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size centered on a point
    pub fn centered(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w * 0.5, cy - h * 0.5, w, h)
    }

    /// Left edge
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Top edge
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Check if point is strictly inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x > self.x && x < self.right() && y > self.y && y < self.bottom()
    }

    /// Grow by padding on every side (negative padding shrinks)
    pub fn inflate(&self, pad_x: f32, pad_y: f32) -> Self {
        Self::new(self.x - pad_x, self.y - pad_y, self.w + pad_x * 2.0, self.h + pad_y * 2.0)
    }

    /// Same rectangle shifted by an offset
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// True when the two rectangles share an area larger than zero.
    /// Bails out on the first axis that doesn't overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.right() <= other.left() || other.right() <= self.left() {
            return false;
        }
        if self.bottom() <= other.top() || other.bottom() <= self.top() {
            return false;
        }
        true
    }

    /// Like [`Rect::intersects`] but shared edges count
    pub fn touches(&self, other: &Rect) -> bool {
        self.separation(other) <= 0.0
    }

    /// Largest gap between the two rectangles along either axis.
    /// Negative means they overlap by that much on the tightest side.
    pub fn separation(&self, other: &Rect) -> f32 {
        let l = other.left() - self.right();
        let r = self.left() - other.right();
        let t = other.top() - self.bottom();
        let b = self.top() - other.bottom();
        l.max(r).max(t).max(b)
    }

    /// Intersection, or None when the overlap is empty
    pub fn clip(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.left().max(other.left());
        let y0 = self.top().max(other.top());
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
    }
}
