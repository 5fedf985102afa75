use std::io;
use std::path::PathBuf;

/// Failures from the collaborators around the palette pipeline. The pipeline
/// itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No wallpaper is recorded, or there is nowhere to look for one.
    #[error("wallpaper not found: {0}")]
    NotFound(String),

    /// The wallpaper record exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The image is missing, unreadable or in an unsupported format.
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
