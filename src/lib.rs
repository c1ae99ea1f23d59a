//! gamebox: a small toolkit for first games
//!
//! Make a [`Camera`], build some [`SpriteBox`]es, and hand a tick callback
//! to [`timer_loop`]. Each tick the callback moves boxes around, checks
//! keys and the mouse, draws through the camera and calls
//! [`Camera::display`].
//!
//! ```ignore
//! use gamebox::prelude::*;
//!
//! #[macroquad::main("Bounce")]
//! async fn main() -> gamebox::Result<()> {
//!     let mut camera = Camera::new(800, 600);
//!     let mut ball = SpriteBox::from_circle(400.0, 300.0, Color::RED, 20.0);
//!     ball.speed_x = 3.0;
//!     timer_loop(&mut camera, 30, None, |camera: &mut Camera| {
//!         ball.move_speed();
//!         camera.clear(Color::BLACK);
//!         camera.draw(&ball);
//!         camera.display();
//!     })
//!     .await?;
//!     Ok(())
//! }
//! ```

pub mod assets;
pub mod cache;
pub mod camera;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod sprite;
pub mod surface;
pub mod text;
pub mod timer;

pub use assets::{load_image, load_sprite_sheet};
pub use camera::Camera;
pub use config::GameConfig;
pub use error::{Error, LoadFailure, Result};
pub use geometry::Rect;
pub use input::{InputState, Key, KeySet, MouseButton};
pub use sprite::{SpriteBox, Visual};
pub use surface::{Color, Surface};
pub use text::{render_text, TextStyle};
pub use timer::{freeze_loop, timer_loop};

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything a game usually needs
pub mod prelude {
    pub use crate::assets::{load_image, load_sprite_sheet};
    pub use crate::camera::Camera;
    pub use crate::config::GameConfig;
    pub use crate::error::{Error, Result};
    pub use crate::input::{Key, KeySet, MouseButton};
    pub use crate::sprite::SpriteBox;
    pub use crate::surface::{Color, Surface};
    pub use crate::text::TextStyle;
    pub use crate::timer::{freeze_loop, timer_loop};
    pub use macroquad::math::Vec2;
}
