//! Tick callbacks of different shapes
//!
//! The loop accepts any of:
//!
//! ```ignore
//! || { ... }
//! |camera: &mut Camera| { ... }
//! |camera: &mut Camera, keys: &KeySet| { ... }
//! ```
//!
//! returning either `()` or `Result<(), E>`. The marker type parameter on
//! [`TickHandler`] keeps the three blanket impls apart; callers never name it.

use crate::camera::Camera;
use crate::input::KeySet;

/// Error type a failing callback is boxed into
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// What a tick callback may return
pub trait TickOutput {
    fn into_result(self) -> Result<(), BoxError>;
}

impl TickOutput for () {
    fn into_result(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<E> TickOutput for Result<(), E>
where
    E: Into<BoxError>,
{
    fn into_result(self) -> Result<(), BoxError> {
        self.map_err(Into::into)
    }
}

/// Something the loop can call once per tick
pub trait TickHandler<Marker> {
    fn tick(&mut self, camera: &mut Camera, keys: &KeySet) -> Result<(), BoxError>;
}

impl<F, R> TickHandler<fn() -> R> for F
where
    F: FnMut() -> R,
    R: TickOutput,
{
    fn tick(&mut self, _camera: &mut Camera, _keys: &KeySet) -> Result<(), BoxError> {
        self().into_result()
    }
}

impl<F, R> TickHandler<fn(&mut Camera) -> R> for F
where
    F: FnMut(&mut Camera) -> R,
    R: TickOutput,
{
    fn tick(&mut self, camera: &mut Camera, _keys: &KeySet) -> Result<(), BoxError> {
        self(camera).into_result()
    }
}

impl<F, R> TickHandler<fn(&mut Camera, &KeySet) -> R> for F
where
    F: FnMut(&mut Camera, &KeySet) -> R,
    R: TickOutput,
{
    fn tick(&mut self, camera: &mut Camera, keys: &KeySet) -> Result<(), BoxError> {
        self(camera, keys).into_result()
    }
}
