use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickError {
    #[error("Failed to read file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The upload is not a recognizable image. Nothing was loaded.
    #[error("Not an image file: {path}")]
    NotAnImage { path: PathBuf },

    #[error("Failed to decode image: {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Point ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

pub type Result<T> = std::result::Result<T, PickError>;
