use crate::constants::{MAX_COLORS, MAX_QUALITY, MIN_COLORS, MIN_QUALITY};
use crate::error::{CompressionError, Result};
use std::path::Path;

pub fn validate_quality(quality: u8) -> Result<u8> {
    if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        return Err(CompressionError::InvalidQuality(quality));
    }
    Ok(quality)
}

/// GIF palettes hold between 2 and 256 entries.
pub fn validate_colors(colors: u16) -> Result<u16> {
    if !(MIN_COLORS..=MAX_COLORS).contains(&colors) {
        return Err(CompressionError::InvalidColors(colors));
    }
    Ok(colors)
}

pub fn validate_max_width(max_width: u32) -> Result<u32> {
    if max_width == 0 {
        return Err(CompressionError::InvalidMaxWidth(max_width));
    }
    Ok(max_width)
}

/// Validate that the working directory exists and is a directory
pub fn validate_directory(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(CompressionError::DirectoryNotFound(path.to_path_buf()));
    }
    Ok(())
}
