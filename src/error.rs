use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Invalid color count: {0}. Must be between 2 and 256")]
    InvalidColors(u16),

    #[error("Invalid max width: {0}. Must be at least 1 pixel")]
    InvalidMaxWidth(u32),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Walkdir error: {0}")]
    WalkdirError(#[from] walkdir::Error),

    #[error("Failed to process {path:?}: {source}")]
    FileFailed {
        path: PathBuf,
        source: Box<CompressionError>,
    },

    #[error("Failed to run GIF optimizer {program:?}: {source}")]
    OptimizerUnavailable {
        program: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CompressionError>;
