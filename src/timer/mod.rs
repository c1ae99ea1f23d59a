//! The fixed-rate game loop
//!
//! Each tick: poll input into the camera, stop if the player quit, run the
//! callback, show the camera's displayed frame, then wait out the rest of
//! the frame. A callback can end the loop with [`Camera::stop_loop`] or
//! freeze it with [`Camera::freeze_loop`]; a frozen loop keeps showing the
//! last frame and only watches for quit.
//!
//! ```ignore
//! let mut camera = Camera::new(800, 600);
//! let mut ball = SpriteBox::from_color(400.0, 300.0, Color::RED, 20.0, 20.0);
//! timer_loop(&mut camera, 30, None, |camera: &mut Camera| {
//!     ball.move_by(1.0, 0.0);
//!     camera.clear(Color::BLACK);
//!     camera.draw(&ball);
//!     camera.display();
//! })
//! .await?;
//! ```

mod frontend;
mod handler;

pub use frontend::{FrameInput, Frontend, MacroquadFrontend};
pub use handler::{BoxError, TickHandler, TickOutput};

use crate::camera::Camera;
use crate::error::{Error, Result};

/// Highest tick rate the loop will run at
pub const MAX_FPS: u32 = 60;

/// Frame rate used while waiting on a frozen screen outside a loop
const FROZEN_FPS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Running,
    Frozen,
}

/// Validate and cap a requested tick rate
pub fn checked_fps(fps: u32) -> Result<u32> {
    if fps == 0 {
        return Err(Error::invalid("fps must be at least 1"));
    }
    Ok(fps.min(MAX_FPS))
}

/// Run `callback` `fps` times a second in the macroquad window.
///
/// With a `limit`, returns `Ok(true)` once that many ticks have run;
/// `Some(0)` counts as no limit.
/// Returns `Ok(false)` when the player closes the window, presses Escape,
/// or the callback calls [`Camera::stop_loop`].
pub async fn timer_loop<M, H>(camera: &mut Camera, fps: u32, limit: Option<u64>, callback: H) -> Result<bool>
where
    H: TickHandler<M>,
{
    let mut frontend = MacroquadFrontend::new();
    run_loop(&mut frontend, camera, fps, limit, callback).await
}

/// [`timer_loop`] against any frontend
pub async fn run_loop<F, M, H>(
    frontend: &mut F,
    camera: &mut Camera,
    fps: u32,
    limit: Option<u64>,
    mut callback: H,
) -> Result<bool>
where
    F: Frontend,
    H: TickHandler<M>,
{
    let fps = checked_fps(fps)?;
    let limit = limit.filter(|&n| n > 0);
    let frame_time = 1.0 / fps as f64;
    tracing::info!(fps, ?limit, "loop started");

    let mut state = LoopState::Running;
    let mut ticks: u64 = 0;
    loop {
        let frame = frontend.poll(camera);
        if frame.quit || camera.take_stop_request() {
            tracing::info!(ticks, "loop stopped");
            return Ok(false);
        }

        if state == LoopState::Running {
            camera.set_input(frame.input);
            let keys = camera.keys().clone();
            callback.tick(camera, &keys).map_err(Error::Callback)?;
            ticks += 1;
            if camera.take_freeze_request() {
                tracing::info!(ticks, "loop frozen");
                state = LoopState::Frozen;
            }
        }

        frontend.present(camera.front());
        frontend.finish_frame(frame_time).await;

        if state == LoopState::Running && Some(ticks) == limit {
            tracing::info!(ticks, "tick limit reached");
            return Ok(true);
        }
    }
}

/// Show what has been drawn and keep it on screen until the player quits
pub async fn freeze_loop(camera: &mut Camera) {
    let mut frontend = MacroquadFrontend::new();
    wait_for_quit(&mut frontend, camera).await;
}

/// [`freeze_loop`] against any frontend
pub async fn wait_for_quit<F: Frontend>(frontend: &mut F, camera: &mut Camera) {
    camera.display();
    tracing::info!("frozen, waiting for quit");
    let frame_time = 1.0 / FROZEN_FPS as f64;
    loop {
        let frame = frontend.poll(camera);
        if frame.quit || camera.take_stop_request() {
            return;
        }
        frontend.present(camera.front());
        frontend.finish_frame(frame_time).await;
    }
}
