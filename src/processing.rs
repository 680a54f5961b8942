use crate::batch::{collect_files, file_name, process_batch, CompressionTable, FileRecord, RunTotals};
use crate::constants::{
    COMPRESSIBLE_EXTENSIONS, DEFAULT_MAX_WIDTH, DEFAULT_QUALITY, PNG_OPTIMIZATION_PRESET,
    PNG_TABLE_NAME_WIDTH, PNG_TABLE_RULE_WIDTH,
};
use crate::error::{CompressionError, Result};
use crate::formats::ImageKind;
use crate::utils::fit_to_width;
use crate::validation::{validate_max_width, validate_quality};
use crate::{info, verbose, warn};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, GenericImageView, ImageReader};
use std::fs;
use std::io::Cursor;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionOptions {
    pub max_width: u32,
    pub quality: u8,
}

impl CompressionOptions {
    pub fn new(max_width: u32, quality: u8) -> Result<Self> {
        Ok(Self {
            max_width: validate_max_width(max_width)?,
            quality: validate_quality(quality)?,
        })
    }
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            quality: DEFAULT_QUALITY,
        }
    }
}

/// Loads an image file and returns it along with its size on disk.
///
/// # Returns
/// * `Ok((image, file_size))` - The decoded image and its file size in bytes
/// * `Err(CompressionError)` - If the file cannot be read or decoded
pub fn load_image_with_metadata(input_path: &Path) -> Result<(DynamicImage, u64)> {
    let file_size = fs::metadata(input_path)?.len();
    let img = ImageReader::open(input_path)?
        .with_guessed_format()?
        .decode()?;
    Ok((img, file_size))
}

/// Downscale `img` to `max_width` when it is wider, keeping the aspect ratio.
///
/// Returns `true` when the image was resized.
pub fn resize_to_max_width(img: &mut DynamicImage, max_width: u32) -> bool {
    match fit_to_width(img.dimensions(), max_width) {
        Some((width, height)) => {
            verbose!(
                "Resizing {}x{} -> {}x{}",
                img.width(),
                img.height(),
                width,
                height
            );
            *img = img.resize_exact(width, height, FilterType::Lanczos3);
            true
        }
        None => false,
    }
}

/// Encode `img` as a PNG and run it through oxipng's lossless optimizer.
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut raw = Vec::new();
    img.write_to(&mut Cursor::new(&mut raw), ImageKind::Png.to_image_format())?;

    let options = oxipng::Options::from_preset(PNG_OPTIMIZATION_PRESET);
    oxipng::optimize_from_memory(&raw, &options)
        .map_err(|e| CompressionError::PngOptimization(e.to_string()))
}

/// Encode `img` as a JPEG at `quality`.
///
/// JPEG has no alpha channel and the encoder only takes 8-bit gray or RGB, so
/// anything else is flattened to opaque RGB first. `JpegEncoder` has no
/// Huffman-table optimization switch, so quality is the only knob.
pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);

    match img.color() {
        ColorType::L8 | ColorType::Rgb8 => img.write_with_encoder(encoder)?,
        _ => DynamicImage::ImageRgb8(img.to_rgb8()).write_with_encoder(encoder)?,
    }

    Ok(buf)
}

/// Resize and re-encode one PNG/JPEG file in place.
///
/// The file is overwritten even if the new encoding is larger.
pub fn compress_image(path: &Path, options: &CompressionOptions) -> Result<FileRecord> {
    let (mut img, old_size) = load_image_with_metadata(path)?;
    let old_dims = img.dimensions();

    resize_to_max_width(&mut img, options.max_width);

    let encoded = match ImageKind::from_path(path) {
        Some(ImageKind::Png) => encode_png(&img)?,
        Some(ImageKind::Jpeg) => encode_jpeg(&img, options.quality)?,
        _ => {
            return Err(CompressionError::UnsupportedFormat(
                path.display().to_string(),
            ))
        }
    };

    fs::write(path, &encoded)?;
    let new_size = fs::metadata(path)?.len();
    verbose!("{}: {} -> {} bytes", path.display(), old_size, new_size);
    if new_size > old_size {
        warn!(
            "{} grew by {} bytes after re-encoding",
            file_name(path),
            new_size - old_size
        );
    }

    Ok(FileRecord {
        name: file_name(path),
        old_size,
        new_size,
        old_dims,
        new_dims: img.dimensions(),
        error: None,
    })
}

/// Compress every PNG/JPEG directly inside `dir` and print the summary table.
pub fn batch_compress_images(dir: &Path, options: &CompressionOptions) -> Result<RunTotals> {
    let files = collect_files(dir, COMPRESSIBLE_EXTENSIONS)?;
    if files.is_empty() {
        println!("No PNG/JPG files found.");
        return Ok(RunTotals::default());
    }

    info!(
        "Compressing with max_width={}, quality={}",
        options.max_width, options.quality
    );

    let table = CompressionTable {
        name_width: PNG_TABLE_NAME_WIDTH,
        rule_width: PNG_TABLE_RULE_WIDTH,
    };
    process_batch(&files, &table, |path| compress_image(path, options))
}
