use crate::batch::{collect_files, file_name};
use crate::constants::{
    INFO_TABLE_NAME_WIDTH, INFO_TABLE_RULE_WIDTH, NOT_AVAILABLE, REPORTED_EXTENSIONS,
    REPORTER_SIZE_UNITS, SIZE_LIMIT_HINT,
};
use crate::error::Result;
use crate::formats::ImageKind;
use crate::utils::{create_progress_bar, human_size};
use crate::verbose;
use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Frame statistics of an animated GIF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationInfo {
    pub frames: u32,
    /// Delay of the last frame, 0 when the file carries none
    pub delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReport {
    pub name: String,
    pub size: u64,
    pub dims: Option<(u32, u32)>,
    /// `None` for non-GIF files, `Some(None)` when the frame probe failed
    pub animation: Option<Option<AnimationInfo>>,
}

impl ImageReport {
    pub fn dims_label(&self) -> String {
        match self.dims {
            Some((w, h)) => format!("{}x{}", w, h),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn extra_label(&self) -> String {
        match self.animation {
            None => String::new(),
            Some(Some(anim)) => format!(
                "frames={}, duration={}ms/frame",
                anim.frames, anim.delay_ms
            ),
            Some(None) => format!("frames={}", NOT_AVAILABLE),
        }
    }

    pub fn row(&self) -> String {
        format!(
            "{:<width$} {:>10} {:>14} {}",
            self.name,
            human_size(self.size as i64, REPORTER_SIZE_UNITS),
            self.dims_label(),
            self.extra_label(),
            width = INFO_TABLE_NAME_WIDTH
        )
    }
}

/// Pixel dimensions read from the file header, or `None` if the file cannot be
/// probed (unknown codec, corrupt data, vector formats).
pub fn probe_dimensions(path: &Path) -> Option<(u32, u32)> {
    match image::image_dimensions(path) {
        Ok(dims) => Some(dims),
        Err(e) => {
            verbose!("{}: cannot read dimensions: {}", path.display(), e);
            None
        }
    }
}

/// Count GIF frames by decoding them one after another until the stream ends.
pub fn probe_animation(path: &Path) -> Result<AnimationInfo> {
    let decoder = GifDecoder::new(BufReader::new(File::open(path)?))?;

    let mut frames = 0;
    let mut delay_ms = 0;
    for frame in decoder.into_frames() {
        let frame = frame?;
        let (numer, denom) = frame.delay().numer_denom_ms();
        delay_ms = if denom == 0 { 0 } else { numer / denom };
        frames += 1;
    }

    Ok(AnimationInfo { frames, delay_ms })
}

/// Gather the report for one file. Only reading the file size can fail.
pub fn inspect_file(path: &Path) -> Result<ImageReport> {
    let size = fs::metadata(path)?.len();
    let dims = probe_dimensions(path);

    let animation = match ImageKind::from_path(path) {
        Some(ImageKind::Gif) => Some(match probe_animation(path) {
            Ok(anim) => Some(anim),
            Err(e) => {
                verbose!("{}: cannot count frames: {}", path.display(), e);
                None
            }
        }),
        _ => None,
    };

    Ok(ImageReport {
        name: file_name(path),
        size,
        dims,
        animation,
    })
}

pub fn report_header() -> String {
    format!(
        "{:<width$} {:>10} {:>14} {}",
        "File",
        "Size",
        "Dimensions",
        "Extra",
        width = INFO_TABLE_NAME_WIDTH
    )
}

pub fn report_total(total_size: u64) -> String {
    format!(
        "{:<width$} {:>10}",
        "Total",
        human_size(total_size as i64, REPORTER_SIZE_UNITS),
        width = INFO_TABLE_NAME_WIDTH
    )
}

/// Print size, dimensions and GIF frame data for every image in `dir`.
///
/// Returns the total byte size of the reported files.
pub fn report_directory(dir: &Path) -> Result<u64> {
    let files = collect_files(dir, REPORTED_EXTENSIONS)?;
    if files.is_empty() {
        println!("No image files found.");
        return Ok(0);
    }

    let rule = "-".repeat(INFO_TABLE_RULE_WIDTH);
    println!("{}", report_header());
    println!("{}", rule);

    let progress = create_progress_bar(files.len() as u64);
    let mut total_size = 0;
    for path in &files {
        progress.set_message(file_name(path));
        let report = inspect_file(path)?;
        total_size += report.size;
        progress.suspend(|| println!("{}", report.row()));
        progress.inc(1);
    }
    progress.finish_and_clear();

    println!("{}", rule);
    println!("{}", report_total(total_size));
    println!();
    println!("{}", SIZE_LIMIT_HINT);

    Ok(total_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::gif::GifEncoder;
    use image::{Delay, Frame, Rgba, RgbaImage};
    use tempfile::TempDir;

    fn write_animated_gif(path: &Path, frames: u32, delay_ms: u32) {
        let file = File::create(path).unwrap();
        let mut encoder = GifEncoder::new(file);
        let frames = (0..frames).map(|i| {
            let buffer = RgbaImage::from_pixel(8, 4, Rgba([(i * 40) as u8, 0, 0, 255]));
            Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
        });
        encoder.encode_frames(frames).unwrap();
    }

    #[test]
    fn test_probe_animation_counts_frames() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("spin.gif");
        write_animated_gif(&path, 5, 100);

        let anim = probe_animation(&path).unwrap();
        assert_eq!(anim.frames, 5);
        assert_eq!(anim.delay_ms, 100);
    }

    #[test]
    fn test_probe_animation_single_frame_without_delay() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("still.gif");
        RgbaImage::new(3, 3).save(&path).unwrap();

        let anim = probe_animation(&path).unwrap();
        assert_eq!(anim.frames, 1);
        assert_eq!(anim.delay_ms, 0);
    }

    #[test]
    fn test_inspect_file_corrupt_image() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").unwrap();

        let report = inspect_file(&path).unwrap();
        assert_eq!(report.size, 20);
        assert_eq!(report.dims, None);
        assert_eq!(report.dims_label(), "N/A");
        assert_eq!(report.extra_label(), "");
    }

    #[test]
    fn test_inspect_file_corrupt_gif() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.gif");
        fs::write(&path, b"not really a gif").unwrap();

        let report = inspect_file(&path).unwrap();
        assert_eq!(report.dims_label(), "N/A");
        assert_eq!(report.extra_label(), "frames=N/A");
    }

    #[test]
    fn test_inspect_file_svg_has_no_dimensions() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logo.svg");
        fs::write(&path, br#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"/>"#)
            .unwrap();

        let report = inspect_file(&path).unwrap();
        assert_eq!(report.dims, None);
    }

    #[test]
    fn test_report_row_for_gif() {
        let report = ImageReport {
            name: "spin.gif".to_string(),
            size: 2048,
            dims: Some((8, 4)),
            animation: Some(Some(AnimationInfo {
                frames: 5,
                delay_ms: 100,
            })),
        };
        let row = report.row();
        assert!(row.starts_with("spin.gif "));
        assert!(row.contains("    2.0 KB"));
        assert!(row.ends_with("           8x4 frames=5, duration=100ms/frame"));
    }

    #[test]
    fn test_report_directory_totals_every_file() {
        let temp_dir = TempDir::new().unwrap();
        write_animated_gif(&temp_dir.path().join("a.gif"), 3, 50);
        fs::write(temp_dir.path().join("b.jpg"), b"corrupt").unwrap();
        fs::write(temp_dir.path().join("notes.md"), b"ignored").unwrap();

        let expected = fs::metadata(temp_dir.path().join("a.gif")).unwrap().len() + 7;
        let total = report_directory(temp_dir.path()).unwrap();
        assert_eq!(total, expected);
    }

    #[test]
    fn test_report_directory_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(report_directory(temp_dir.path()).unwrap(), 0);
    }
}
