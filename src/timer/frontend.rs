//! Window backends for the loop
//!
//! The loop only needs three things from a window: this tick's input, a
//! way to show a finished frame, and a way to wait out the rest of the
//! frame. [`MacroquadFrontend`] is the real one; tests script their own.

use macroquad::prelude as mq;

use crate::camera::Camera;
use crate::input::{InputState, Key, MouseButton};
use crate::surface::Surface;

/// Input gathered at the start of a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    pub input: InputState,
    /// Window close or Escape
    pub quit: bool,
}

impl FrameInput {
    /// Build from raw backend state. Escape never reaches the callback;
    /// it is the quit key.
    pub fn from_raw(
        keys_down: impl IntoIterator<Item = mq::KeyCode>,
        mouse: mq::Vec2,
        buttons: [bool; 3],
        close_requested: bool,
    ) -> Self {
        let mut quit = close_requested;
        let mut input = InputState {
            mouse,
            buttons,
            ..Default::default()
        };
        for code in keys_down {
            match Key::from_key_code(code) {
                Some(Key::Escape) => quit = true,
                Some(key) => {
                    input.keys.insert(key);
                }
                None => {}
            }
        }
        Self { input, quit }
    }
}

#[allow(async_fn_in_trait)]
pub trait Frontend {
    /// Input for this tick, with the mouse mapped into the camera's viewport
    fn poll(&mut self, camera: &Camera) -> FrameInput;

    /// Show a finished frame
    fn present(&mut self, frame: &Surface);

    /// Hold the frame rate, then hand control back to the window system
    async fn finish_frame(&mut self, frame_time: f64);
}

/// Fit a `w` x `h` frame inside the screen keeping its aspect ratio
fn letterbox(w: f32, h: f32, screen_w: f32, screen_h: f32) -> mq::Rect {
    if w <= 0.0 || h <= 0.0 {
        return mq::Rect::new(0.0, 0.0, screen_w, screen_h);
    }
    let frame_aspect = w / h;
    let screen_aspect = screen_w / screen_h;
    if frame_aspect > screen_aspect {
        let dh = screen_w / frame_aspect;
        mq::Rect::new(0.0, (screen_h - dh) * 0.5, screen_w, dh)
    } else {
        let dw = screen_h * frame_aspect;
        mq::Rect::new((screen_w - dw) * 0.5, 0.0, dw, screen_h)
    }
}

/// Screen position to viewport pixels, given where the frame was drawn
fn to_viewport(screen: mq::Vec2, dest: mq::Rect, viewport: (usize, usize)) -> mq::Vec2 {
    if dest.w <= 0.0 || dest.h <= 0.0 {
        return screen;
    }
    mq::vec2(
        (screen.x - dest.x) * viewport.0 as f32 / dest.w,
        (screen.y - dest.y) * viewport.1 as f32 / dest.h,
    )
}

/// Draws frames into the macroquad window
pub struct MacroquadFrontend {
    frame_start: f64,
    /// Where the last frame landed on screen
    dest: mq::Rect,
    full_screen: Option<bool>,
}

impl MacroquadFrontend {
    pub fn new() -> Self {
        // close requests come back through is_quit_requested
        mq::prevent_quit();
        Self {
            frame_start: mq::get_time(),
            dest: mq::Rect::new(0.0, 0.0, mq::screen_width(), mq::screen_height()),
            full_screen: None,
        }
    }
}

impl Default for MacroquadFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontend for MacroquadFrontend {
    fn poll(&mut self, camera: &Camera) -> FrameInput {
        if self.full_screen != Some(camera.is_full_screen()) {
            mq::set_fullscreen(camera.is_full_screen());
            self.full_screen = Some(camera.is_full_screen());
        }
        let mouse = to_viewport(mq::mouse_position().into(), self.dest, camera.size());
        let mut buttons = [false; 3];
        buttons[MouseButton::Left as usize] = mq::is_mouse_button_down(mq::MouseButton::Left);
        buttons[MouseButton::Right as usize] = mq::is_mouse_button_down(mq::MouseButton::Right);
        buttons[MouseButton::Middle as usize] = mq::is_mouse_button_down(mq::MouseButton::Middle);
        FrameInput::from_raw(mq::get_keys_down(), mouse, buttons, mq::is_quit_requested())
    }

    fn present(&mut self, frame: &Surface) {
        let texture = mq::Texture2D::from_rgba8(frame.width() as u16, frame.height() as u16, frame.pixels());
        texture.set_filter(mq::FilterMode::Nearest);

        self.dest = letterbox(
            frame.width() as f32,
            frame.height() as f32,
            mq::screen_width(),
            mq::screen_height(),
        );
        mq::clear_background(mq::BLACK);
        mq::draw_texture_ex(
            &texture,
            self.dest.x,
            self.dest.y,
            mq::WHITE,
            mq::DrawTextureParams {
                dest_size: Some(mq::vec2(self.dest.w, self.dest.h)),
                ..Default::default()
            },
        );
    }

    async fn finish_frame(&mut self, frame_time: f64) {
        let elapsed = mq::get_time() - self.frame_start;
        if elapsed < frame_time {
            // Native: sleep for bulk, then spin-wait for precision
            #[cfg(not(target_arch = "wasm32"))]
            {
                let spin_margin = 0.002;
                while mq::get_time() - self.frame_start + spin_margin < frame_time {
                    std::thread::sleep(std::time::Duration::from_millis(1));
                }
                while mq::get_time() - self.frame_start < frame_time {
                    std::hint::spin_loop();
                }
            }
            // WASM: no thread::sleep, spin only
            #[cfg(target_arch = "wasm32")]
            {
                while mq::get_time() - self.frame_start < frame_time {
                    std::hint::spin_loop();
                }
            }
        }
        mq::next_frame().await;
        self.frame_start = mq::get_time();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_quits_and_is_not_a_key() {
        let frame = FrameInput::from_raw(
            [mq::KeyCode::Escape, mq::KeyCode::A],
            mq::Vec2::ZERO,
            [false; 3],
            false,
        );
        assert!(frame.quit);
        assert!(frame.input.is_pressed(Key::A));
        assert!(!frame.input.is_pressed(Key::Escape));
    }

    #[test]
    fn test_close_request_quits() {
        let frame = FrameInput::from_raw(std::iter::empty(), mq::Vec2::ZERO, [false; 3], true);
        assert!(frame.quit);
        let calm = FrameInput::from_raw([mq::KeyCode::Space], mq::Vec2::ZERO, [true, false, false], false);
        assert!(!calm.quit);
        assert!(calm.input.any_button_down());
    }

    #[test]
    fn test_letterbox_keeps_aspect() {
        // 4:3 frame on a 16:9 screen: pillarboxed
        let r = letterbox(800.0, 600.0, 1600.0, 900.0);
        assert!((r.h - 900.0).abs() < 0.001);
        assert!((r.w - 1200.0).abs() < 0.001);
        assert!((r.x - 200.0).abs() < 0.001);

        // wide frame on a square screen: letterboxed
        let r = letterbox(200.0, 100.0, 400.0, 400.0);
        assert!((r.w - 400.0).abs() < 0.001);
        assert!((r.y - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_mouse_maps_into_viewport() {
        let dest = letterbox(800.0, 600.0, 1600.0, 900.0);
        let p = to_viewport(mq::vec2(200.0 + 600.0, 450.0), dest, (800, 600));
        assert!((p.x - 400.0).abs() < 0.001);
        assert!((p.y - 300.0).abs() < 0.001);
    }
}
