//! Camera: the window onto the game world
//!
//! The camera owns two surfaces. `draw` composites sprites into the back
//! surface straight away, in call order, so whatever is drawn last ends up
//! on top. `display` copies the back surface to the front one, and the loop
//! shows the front surface in the window at the end of each tick.
//!
//! The camera's position is the world coordinate of the viewport's
//! top-left corner. Moving it shifts everything drawn afterwards.

use std::fmt;

use macroquad::math::Vec2;

use crate::config::GameConfig;
use crate::geometry::Rect;
use crate::input::{InputState, Key, KeySet};
use crate::sprite::{SpriteBox, Visual};
use crate::surface::{Color, Surface};

pub struct Camera {
    width: usize,
    height: usize,
    full_screen: bool,
    /// World coordinate of the top-left corner
    offset: Vec2,
    back: Surface,
    front: Surface,
    input: InputState,
    stop_requested: bool,
    freeze_requested: bool,
}

impl Camera {
    /// Windowed viewport of the given size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            full_screen: false,
            offset: Vec2::ZERO,
            back: Surface::filled(width, height, Color::BLACK),
            front: Surface::filled(width, height, Color::BLACK),
            input: InputState::default(),
            stop_requested: false,
            freeze_requested: false,
        }
    }

    /// Viewport shown full-screen, scaled to fit the display
    pub fn full_screen(width: usize, height: usize) -> Self {
        Self {
            full_screen: true,
            ..Self::new(width, height)
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let mut camera = Self::new(config.width as usize, config.height as usize);
        camera.full_screen = config.full_screen;
        camera
    }

    // Drawing

    /// Composite a sprite at its world position
    pub fn draw(&mut self, sprite: &SpriteBox) {
        let area = sprite.rect().translate(-self.offset.x, -self.offset.y);
        match sprite.visual() {
            Visual::Color(color) => self.back.fill_rect(area, *color),
            Visual::Image(img) => {
                self.back.blit(img.rendered(), area.x.round() as i32, area.y.round() as i32);
            }
        }
    }

    /// Blit a bare surface centered on a world point
    pub fn draw_surface(&mut self, surface: &Surface, x: f32, y: f32) {
        let area = Rect::centered(x, y, surface.width() as f32, surface.height() as f32)
            .translate(-self.offset.x, -self.offset.y);
        self.back.blit(surface, area.x.round() as i32, area.y.round() as i32);
    }

    /// Erase everything drawn so far
    pub fn clear(&mut self, color: Color) {
        self.back.fill(color);
    }

    /// Make what has been drawn so far the frame the window shows next
    pub fn display(&mut self) {
        self.front.copy_from(&self.back);
    }

    /// Surface being drawn into
    pub fn back(&self) -> &Surface {
        &self.back
    }

    /// Frame most recently passed to [`Camera::display`]
    pub fn front(&self) -> &Surface {
        &self.front
    }

    // Position

    pub fn left(&self) -> f32 {
        self.offset.x
    }

    pub fn set_left(&mut self, value: f32) {
        self.offset.x = value;
    }

    pub fn right(&self) -> f32 {
        self.offset.x + self.width as f32
    }

    pub fn set_right(&mut self, value: f32) {
        self.offset.x = value - self.width as f32;
    }

    pub fn top(&self) -> f32 {
        self.offset.y
    }

    pub fn set_top(&mut self, value: f32) {
        self.offset.y = value;
    }

    pub fn bottom(&self) -> f32 {
        self.offset.y + self.height as f32
    }

    pub fn set_bottom(&mut self, value: f32) {
        self.offset.y = value - self.height as f32;
    }

    /// World x of the viewport's center
    pub fn x(&self) -> f32 {
        self.offset.x + self.width as f32 * 0.5
    }

    pub fn set_x(&mut self, value: f32) {
        self.offset.x = value - self.width as f32 * 0.5;
    }

    /// World y of the viewport's center
    pub fn y(&self) -> f32 {
        self.offset.y + self.height as f32 * 0.5
    }

    pub fn set_y(&mut self, value: f32) {
        self.offset.y = value - self.height as f32 * 0.5;
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x(), self.y())
    }

    pub fn set_center(&mut self, value: Vec2) {
        self.set_x(value.x);
        self.set_y(value.y);
    }

    pub fn top_left(&self) -> Vec2 {
        self.offset
    }

    pub fn set_top_left(&mut self, value: Vec2) {
        self.offset = value;
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

    /// Shift the view; positive y moves it down the world
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.offset.x += dx;
        self.offset.y += dy;
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

    pub fn is_full_screen(&self) -> bool {
        self.full_screen
    }

    // Input, as polled at the start of the current tick

    /// Mouse position in world coordinates
    pub fn mouse(&self) -> Vec2 {
        self.input.mouse + self.offset
    }

    pub fn mouse_x(&self) -> f32 {
        self.mouse().x
    }

    pub fn mouse_y(&self) -> f32 {
        self.mouse().y
    }

    /// Whether any mouse button is held
    pub fn mouseclick(&self) -> bool {
        self.input.any_button_down()
    }

    /// Keys held this tick
    pub fn keys(&self) -> &KeySet {
        &self.input.keys
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.input.is_pressed(key)
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub(crate) fn set_input(&mut self, input: InputState) {
        self.input = input;
    }

    // Loop control

    /// End the running loop at its next poll
    pub fn stop_loop(&mut self) {
        self.stop_requested = true;
    }

    /// Stop ticking but keep the window open on the last displayed frame
    /// until the player quits
    pub fn freeze_loop(&mut self) {
        self.freeze_requested = true;
    }

    /// Consume a pending stop request
    pub(crate) fn take_stop_request(&mut self) -> bool {
        std::mem::take(&mut self.stop_requested)
    }

    /// Consume a pending freeze request
    pub(crate) fn take_freeze_request(&mut self) -> bool {
        std::mem::take(&mut self.freeze_requested)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} Camera centered at {},{}", self.width, self.height, self.x(), self.y())
    }
}

impl fmt::Debug for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Camera")
            .field("size", &(self.width, self.height))
            .field("full_screen", &self.full_screen)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}
