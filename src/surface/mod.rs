//! Software surfaces
//!
//! Everything a sprite can look like ends up as an RGBA [`Surface`]:
//! loaded images, solid shapes and rendered text. The camera composites
//! these into its own screen surface.
//!
//! # Module Organization
//!
//! - `color` - RGBA color, named colors, blending
//! - `surface` - the pixel buffer, fills, blits, sub-surfaces
//! - `draw` - circle and polygon rasterization
//! - `transform` - flip, scale, rotate, shear

pub mod color;
pub mod draw;
#[allow(clippy::module_inception)]
pub mod surface;
pub mod transform;

pub use color::Color;
pub use surface::Surface;
