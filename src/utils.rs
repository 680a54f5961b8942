//! Helpers shared by the compressors and the reporter.

use crate::constants::PROGRESS_BAR_TEMPLATE;
use crate::logger;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Check whether a path carries one of the given extensions (lowercase, no dot).
///
/// The comparison is case-insensitive, so `PHOTO.JPG` matches `"jpg"`.
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            extensions.contains(&ext_lower.as_str())
        })
        .unwrap_or(false)
}

/// Format a byte count in human-readable form.
///
/// The value is divided by 1024 until it drops below 1024 or the last unit in
/// `units` is reached, then printed with one decimal place. Negative values
/// (files that grew) never step past the first unit.
///
/// # Example
/// ```
/// use img_trim::utils::human_size;
/// use img_trim::constants::COMPRESSOR_SIZE_UNITS;
///
/// assert_eq!(human_size(1536, COMPRESSOR_SIZE_UNITS), "1.5 KB");
/// assert_eq!(human_size(500, COMPRESSOR_SIZE_UNITS), "500.0 B");
/// ```
pub fn human_size(bytes: i64, units: &[&str]) -> String {
    const THRESHOLD: f64 = 1024.0;

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index + 1 < units.len() {
        size /= THRESHOLD;
        unit_index += 1;
    }

    let unit = units.get(unit_index).copied().unwrap_or("B");
    format!("{:.1} {}", size, unit)
}

/// Height that keeps the aspect ratio when `width` is scaled to `target_width`.
///
/// Rounds to the nearest pixel and never returns 0.
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    if width == 0 {
        return height;
    }
    let scaled = (height as f64 * target_width as f64 / width as f64).round();
    (scaled as u32).max(1)
}

/// Target dimensions for an image that must fit within `max_width`, or `None`
/// when it is already narrow enough.
pub fn fit_to_width(dims: (u32, u32), max_width: u32) -> Option<(u32, u32)> {
    let (width, height) = dims;
    if width > max_width {
        Some((max_width, scaled_height(width, height, max_width)))
    } else {
        None
    }
}

/// Calculate the saved share as a percentage
///
/// # Returns
/// * Positive for a reduction, negative for growth, 0.0 when nothing was measured
pub fn savings_percent(original_size: u64, new_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - new_size as f64) / original_size as f64) * 100.0
}

/// Create a progress bar over `len` files, hidden in quiet mode
pub fn create_progress_bar(len: u64) -> ProgressBar {
    if logger::is_quiet() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
        pb.set_style(style.progress_chars("=> "));
    }
    pb
}
