//! Error types for the logo renderer and exporter

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for rendering and export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while drawing or exporting the logo
#[derive(Error, Debug)]
pub enum Error {
    /// A canvas or output size the pipeline cannot work with
    #[error("Invalid size {size}px: {reason}")]
    InvalidSize { size: u32, reason: &'static str },

    /// The rasterizer could not allocate or finish a canvas
    #[error("Rasterization failed: {0}")]
    Raster(String),

    /// Resampling or encoding failed inside the imaging library
    #[cfg(feature = "raster")]
    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem failure while creating a directory or writing an output
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An icon container that does not parse
    #[error("Malformed icon container: {0}")]
    Container(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
