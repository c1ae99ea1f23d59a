//! Game window settings loaded from RON
//!
//! ```ron
//! (
//!     title: "Mouse Game",
//!     width: 800,
//!     height: 600,
//!     fps: 30,
//! )
//! ```
//!
//! Missing fields take their defaults.

use std::fs;
use std::path::Path;

use macroquad::window::Conf;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Window and loop settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    /// Viewport size in pixels
    pub width: u32,
    pub height: u32,
    pub full_screen: bool,
    pub high_dpi: bool,
    /// Ticks per second for the loop (capped at 60)
    pub fps: u32,
    /// Default `tracing` filter when `GAMEBOX_LOG` is unset
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "gamebox".to_string(),
            width: 800,
            height: 600,
            full_screen: false,
            high_dpi: false,
            fps: 30,
            log_filter: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_ron(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Load the file, or use the defaults if it is missing or broken
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default game config");
                Self::default()
            }
        }
    }

    /// Window setup for `#[macroquad::main]`
    pub fn window_conf(&self) -> Conf {
        Conf {
            window_title: self.title.clone(),
            window_width: self.width as i32,
            window_height: self.height as i32,
            high_dpi: self.high_dpi,
            fullscreen: self.full_screen,
            window_resizable: !self.full_screen,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = GameConfig::from_ron("(title: \"Typing Game\", fps: 60)").unwrap();
        assert_eq!(config.title, "Typing Game");
        assert_eq!(config.fps, 60);
        assert_eq!(config.width, 800);
        assert!(!config.full_screen);
    }

    #[test]
    fn test_bad_ron_is_config_error() {
        assert!(matches!(GameConfig::from_ron("(width: \"wide\")"), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game.ron");
        fs::write(&path, "(width: 320, height: 240, full_screen: true)").unwrap();
        let config = GameConfig::load(&path).unwrap();
        assert_eq!((config.width, config.height), (320, 240));

        let conf = config.window_conf();
        assert_eq!(conf.window_width, 320);
        assert!(conf.fullscreen);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(GameConfig::load(dir.path().join("nope.ron")), Err(Error::Io(_))));
        assert_eq!(GameConfig::load_or_default(dir.path().join("nope.ron")), GameConfig::default());
    }
}
