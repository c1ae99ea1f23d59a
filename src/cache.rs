//! Process-wide render cache
//!
//! Students rebuild text sprites every tick (`from_text` inside the loop),
//! and re-assign the same image file over and over. Rendering or decoding
//! once per distinct request keeps that cheap. The cache is unbounded and
//! lives until the process exits.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use lazy_static::lazy_static;

use crate::error::Result;
use crate::surface::{Color, Surface};

/// Everything that changes how a piece of text renders
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextKey {
    pub text: String,
    pub font_size: u16,
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
}

/// Rendered text and decoded images, keyed by what produced them
#[derive(Default)]
pub struct SurfaceCache {
    text: HashMap<TextKey, Arc<Surface>>,
    images: HashMap<String, Arc<Surface>>,
}

impl SurfaceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached rendering of `key`, rendering it with `render` on a miss.
    /// Failed renders are not cached.
    pub fn text_or_render(
        &mut self,
        key: &TextKey,
        render: impl FnOnce(&TextKey) -> Result<Surface>,
    ) -> Result<Arc<Surface>> {
        if let Some(hit) = self.text.get(key) {
            return Ok(Arc::clone(hit));
        }
        tracing::debug!(text = %key.text, size = key.font_size, "rendering text");
        let surface = Arc::new(render(key)?);
        self.text.insert(key.clone(), Arc::clone(&surface));
        Ok(surface)
    }

    /// Cached image for a file name or URL, loading it with `load` on a miss
    pub fn image_or_load(
        &mut self,
        name: &str,
        load: impl FnOnce(&str) -> Result<Surface>,
    ) -> Result<Arc<Surface>> {
        if let Some(hit) = self.images.get(name) {
            return Ok(Arc::clone(hit));
        }
        let surface = Arc::new(load(name)?);
        self.images.insert(name.to_string(), Arc::clone(&surface));
        Ok(surface)
    }

    pub fn text_len(&self) -> usize {
        self.text.len()
    }

    pub fn image_len(&self) -> usize {
        self.images.len()
    }
}

lazy_static! {
    static ref GLOBAL: Mutex<SurfaceCache> = Mutex::new(SurfaceCache::new());
}

/// The process-wide cache. A panic while it was held doesn't poison it for
/// later callers; the map is still consistent.
pub fn global() -> MutexGuard<'static, SurfaceCache> {
    GLOBAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn key(text: &str, bold: bool) -> TextKey {
        TextKey {
            text: text.to_string(),
            font_size: 40,
            color: Color::RED,
            bold,
            italic: false,
        }
    }

    #[test]
    fn test_identical_text_is_a_hit() {
        let mut cache = SurfaceCache::new();
        let mut renders = 0;
        let first = cache
            .text_or_render(&key("Score", false), |_| {
                renders += 1;
                Ok(Surface::new(10, 4))
            })
            .unwrap();
        let second = cache
            .text_or_render(&key("Score", false), |_| {
                renders += 1;
                Ok(Surface::new(10, 4))
            })
            .unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(renders, 1);
        assert_eq!(cache.text_len(), 1);
    }

    #[test]
    fn test_style_change_is_a_miss() {
        let mut cache = SurfaceCache::new();
        let plain = cache.text_or_render(&key("Hi", false), |_| Ok(Surface::new(1, 1))).unwrap();
        let bold = cache.text_or_render(&key("Hi", true), |_| Ok(Surface::new(1, 1))).unwrap();
        assert!(!Arc::ptr_eq(&plain, &bold));
        assert_eq!(cache.text_len(), 2);
    }

    #[test]
    fn test_failed_render_is_not_cached() {
        let mut cache = SurfaceCache::new();
        let err = cache.text_or_render(&key("x", false), |_| Err(Error::invalid("no font")));
        assert!(err.is_err());
        assert_eq!(cache.text_len(), 0);
    }

    #[test]
    fn test_image_loaded_once() {
        let mut cache = SurfaceCache::new();
        let mut loads = 0;
        for _ in 0..3 {
            cache
                .image_or_load("ball.png", |_| {
                    loads += 1;
                    Ok(Surface::new(2, 2))
                })
                .unwrap();
        }
        assert_eq!(loads, 1);
        assert_eq!(cache.image_len(), 1);
    }
}
