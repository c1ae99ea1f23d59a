//! Image loading from files and URLs
//!
//! Lookup order for a name: render cache, local file, then URL. A URL is
//! downloaded once into the user cache directory under its file name, and
//! later runs read the downloaded copy.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cache;
use crate::error::{Error, LoadFailure, Result};
use crate::geometry::Rect;
use crate::surface::Surface;

/// Load an image by file name or URL, sharing the decoded surface between
/// every caller that asks for the same name
pub fn load_image(name: &str) -> Result<Arc<Surface>> {
    cache::global().image_or_load(name, load_uncached)
}

/// Split a sheet of `rows` x `columns` equally sized frames, row-major
pub fn load_sprite_sheet(name: &str, rows: usize, columns: usize) -> Result<Vec<Arc<Surface>>> {
    let sheet = load_image(name)?;
    split_sheet(&sheet, rows, columns)
}

pub(crate) fn split_sheet(sheet: &Surface, rows: usize, columns: usize) -> Result<Vec<Arc<Surface>>> {
    if rows == 0 || columns == 0 {
        return Err(Error::invalid(format!(
            "sprite sheet needs at least one row and column, got {}x{}",
            rows, columns
        )));
    }
    // leftover pixels past the last full frame are dropped
    let frame_w = sheet.width() / columns;
    let frame_h = sheet.height() / rows;

    let mut frames = Vec::with_capacity(rows * columns);
    for row in 0..rows {
        for col in 0..columns {
            let clip = Rect::new(
                (col * frame_w) as f32,
                (row * frame_h) as f32,
                frame_w as f32,
                frame_h as f32,
            );
            frames.push(Arc::new(sheet.sub_surface(clip)));
        }
    }
    Ok(frames)
}

fn load_uncached(name: &str) -> Result<Surface> {
    let path = Path::new(name);
    let result = if path.exists() {
        load_file(path)
    } else {
        fetch_url(name).and_then(|downloaded| load_file(&downloaded))
    };
    result.map_err(|source| Error::load(name, source))
}

/// Decode an image file into a surface
pub(crate) fn load_file(path: &Path) -> std::result::Result<Surface, LoadFailure> {
    let bytes = std::fs::read(path).map_err(|source| LoadFailure::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let img = image::load_from_memory(&bytes)?;
    let surface = Surface::from_image(img.to_rgba8());
    tracing::info!(path = %path.display(), width = surface.width(), height = surface.height(), "loaded image");
    Ok(surface)
}

/// File name a URL is stored under after download
fn download_name(url: &str) -> Option<String> {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    let after_scheme = without_query.split_once("://").map_or(without_query, |(_, rest)| rest);
    let (_, path) = after_scheme.split_once('/')?;
    let file = path.rsplit('/').next()?;
    if file.is_empty() {
        None
    } else {
        Some(file.to_string())
    }
}

fn with_scheme(url: &str) -> String {
    if url.contains("://") {
        url.to_string()
    } else {
        format!("http://{}", url)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn download_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("gamebox"))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(not(target_arch = "wasm32"))]
fn fetch_url(url: &str) -> std::result::Result<PathBuf, LoadFailure> {
    use std::io::Read;

    let file_name = download_name(url)
        .ok_or_else(|| LoadFailure::Unsupported(format!("no file name in '{}'", url)))?;
    let dir = download_dir();
    let target = dir.join(&file_name);
    if target.exists() {
        tracing::debug!(path = %target.display(), "using downloaded copy");
        return Ok(target);
    }

    let url = with_scheme(url);
    tracing::info!(%url, "downloading image");
    let response = ureq::get(&url).call().map_err(Box::new)?;
    let mut bytes = Vec::new();
    let io_err = |source: std::io::Error| LoadFailure::Io {
        path: target.clone(),
        source,
    };
    response.into_reader().read_to_end(&mut bytes).map_err(io_err)?;
    std::fs::create_dir_all(&dir).map_err(io_err)?;
    std::fs::write(&target, &bytes).map_err(io_err)?;
    Ok(target)
}

#[cfg(target_arch = "wasm32")]
fn fetch_url(url: &str) -> std::result::Result<PathBuf, LoadFailure> {
    Err(LoadFailure::Unsupported(format!(
        "cannot download '{}' in the browser; bundle the image instead",
        with_scheme(url)
    )))
}
