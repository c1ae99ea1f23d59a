//! Error types shared by every gamebox module

use std::path::PathBuf;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong in gamebox
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An image file or URL could not be loaded
    #[error("An error occurred while fetching image, are you sure the file/website name is \"{name}\"?")]
    Load {
        name: String,
        #[source]
        source: LoadFailure,
    },

    /// A key name that matches nothing in the key table
    #[error("'{name}' is not a valid key name. Did you mean: '{suggestion}'?")]
    UnknownKey { name: String, suggestion: String },

    /// Caller passed a value the operation cannot work with
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// RON config could not be parsed
    #[error("config error: {0}")]
    Config(#[from] ron::error::SpannedError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The tick callback returned an error; the loop stopped
    #[error("tick callback failed: {0}")]
    Callback(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// Lower-level reason behind [`Error::Load`]
#[derive(Debug, thiserror::Error)]
pub enum LoadFailure {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("download failed: {0}")]
    Fetch(#[from] Box<ureq::Error>),

    #[error("{0}")]
    Unsupported(String),
}

impl Error {
    /// Wrap a lower-level failure with the name the user asked for
    pub fn load(name: impl Into<String>, source: impl Into<LoadFailure>) -> Self {
        Error::Load {
            name: name.into(),
            source: source.into(),
        }
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
