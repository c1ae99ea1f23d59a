//! Text rendering into surfaces
//!
//! macroquad draws text on the GPU, so a string is rendered once into an
//! offscreen render target with the default font, read back, and turned
//! into a [`Surface`]. Bold and italic are faked: bold draws the text twice
//! a pixel apart, italic shears the result.

use std::sync::Arc;

use macroquad::prelude as mq;

use crate::cache::{self, TextKey};
use crate::error::Result;
use crate::surface::{Color, Surface};

/// Shear applied for italics (pixels per pixel of height)
const ITALIC_SHEAR: f32 = 0.2;

/// How a piece of text should look
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextStyle {
    pub font_size: u16,
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
}

impl TextStyle {
    pub fn new(font_size: u16, color: Color) -> Self {
        Self {
            font_size,
            color,
            bold: false,
            italic: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Cache key for this style applied to `text`
    pub fn key(&self, text: &str) -> TextKey {
        TextKey {
            text: text.to_string(),
            font_size: self.font_size,
            color: self.color,
            bold: self.bold,
            italic: self.italic,
        }
    }
}

/// Render `text`, reusing the cached surface for identical requests
pub fn render_text(text: &str, style: TextStyle) -> Result<Arc<Surface>> {
    let key = style.key(text);
    cache::global().text_or_render(&key, rasterize)
}

/// Draw white text into a render target and read it back as a colored surface
fn rasterize(key: &TextKey) -> Result<Surface> {
    let dims = mq::measure_text(&key.text, None, key.font_size, 1.0);
    let bold_extra = if key.bold { 1.0 } else { 0.0 };
    let width = (dims.width + bold_extra).ceil().max(1.0) as u32;
    let height = dims.height.max(key.font_size as f32 * 0.5).ceil().max(1.0) as u32;

    let target = mq::render_target(width, height);
    let mut camera = mq::Camera2D::from_display_rect(mq::Rect::new(0.0, 0.0, width as f32, height as f32));
    camera.render_target = Some(target.clone());

    mq::set_camera(&camera);
    mq::clear_background(mq::Color::new(0.0, 0.0, 0.0, 0.0));
    let params = mq::TextParams {
        font_size: key.font_size,
        color: mq::WHITE,
        ..Default::default()
    };
    mq::draw_text_ex(&key.text, 0.0, dims.offset_y, params.clone());
    if key.bold {
        mq::draw_text_ex(&key.text, 1.0, dims.offset_y, params);
    }
    // switching cameras flushes the queued draws into the target
    mq::set_default_camera();

    let image = target.texture.get_texture_data();
    let readback = Surface::from_rgba(image.width as usize, image.height as usize, image.bytes)?;
    // render targets come back bottom-up
    let coverage = readback.flipped_vertical();

    let mut surface = colorize(&coverage, key.color);
    if key.italic {
        surface = surface.skewed(ITALIC_SHEAR);
    }
    Ok(surface)
}

/// Turn white-on-transparent coverage into `color` with matching alpha
pub(crate) fn colorize(coverage: &Surface, color: Color) -> Surface {
    let mut out = coverage.clone();
    for px in out.pixels_mut().chunks_exact_mut(4) {
        let cover = px[0].max(px[3]) as u32;
        let alpha = (cover * color.a as u32 / 255) as u8;
        px.copy_from_slice(&[color.r, color.g, color.b, alpha]);
    }
    out
}
