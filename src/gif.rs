//! GIF compression through the external `gifsicle` optimizer.
//!
//! The optimizer writes into a temporary file next to the original. The
//! temporary file only replaces the original when it is strictly smaller, and
//! it is removed on every other path when its [`TempPath`] guard drops.

use crate::batch::{collect_files, file_name, process_batch, CompressionTable, FileRecord, RunTotals};
use crate::constants::{
    DEFAULT_COLORS, DEFAULT_GIFSICLE, DEFAULT_GIF_MAX_WIDTH, DEFAULT_LOSSY, GIFSICLE_OPTIMIZE_LEVEL,
    GIF_EXTENSIONS, GIF_TABLE_NAME_WIDTH, GIF_TABLE_RULE_WIDTH,
};
use crate::error::{CompressionError, Result};
use crate::utils::fit_to_width;
use crate::validation::{validate_colors, validate_max_width};
use crate::{info, verbose};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::{Builder, TempPath};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GifOptions {
    pub max_width: u32,
    pub lossy: u32,
    pub colors: u16,
    /// Optimizer executable, looked up on `PATH` when not absolute
    pub program: PathBuf,
}

impl GifOptions {
    pub fn new(max_width: u32, lossy: u32, colors: u16, program: PathBuf) -> Result<Self> {
        Ok(Self {
            max_width: validate_max_width(max_width)?,
            lossy,
            colors: validate_colors(colors)?,
            program,
        })
    }
}

impl Default for GifOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_GIF_MAX_WIDTH,
            lossy: DEFAULT_LOSSY,
            colors: DEFAULT_COLORS,
            program: PathBuf::from(DEFAULT_GIFSICLE),
        }
    }
}

/// Build the optimizer argument list for one file.
///
/// `--resize` is only passed when the original is wider than `max_width`.
pub fn gifsicle_args(
    options: &GifOptions,
    dims: (u32, u32),
    output: &Path,
    input: &Path,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        format!("--optimize={}", GIFSICLE_OPTIMIZE_LEVEL).into(),
        format!("--lossy={}", options.lossy).into(),
        format!("--colors={}", options.colors).into(),
    ];

    if let Some((width, height)) = fit_to_width(dims, options.max_width) {
        args.push(format!("--resize={}x{}", width, height).into());
    }

    args.push("-o".into());
    args.push(output.as_os_str().to_owned());
    args.push(input.as_os_str().to_owned());
    args
}

/// Temporary output path in the same directory as `path`, so promotion is a rename.
fn temp_output_for(path: &Path) -> Result<TempPath> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let prefix = format!(".{}.", file_name(path));
    let temp = Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(dir)?;
    Ok(temp.into_temp_path())
}

fn run_optimizer(program: &Path, args: &[OsString]) -> Result<Output> {
    Command::new(program)
        .args(args)
        .output()
        .map_err(|source| CompressionError::OptimizerUnavailable {
            program: program.to_path_buf(),
            source,
        })
}

/// Optimize one GIF in place.
///
/// An optimizer failure is reported in the returned record and leaves the
/// original untouched; only errors that make the run meaningless (unreadable
/// file, optimizer missing) are returned as `Err`.
pub fn compress_gif(path: &Path, options: &GifOptions) -> Result<FileRecord> {
    let old_size = fs::metadata(path)?.len();
    let old_dims = image::image_dimensions(path)?;
    let name = file_name(path);

    let temp = temp_output_for(path)?;
    let args = gifsicle_args(options, old_dims, &temp, path);
    verbose!(
        "{} {}",
        options.program.display(),
        args.iter()
            .map(|a| a.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    );

    let output = run_optimizer(&options.program, &args)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        verbose!("{}: optimizer exited with {}", name, output.status);
        return Ok(FileRecord::unchanged(name, old_size, old_dims, Some(stderr)));
    }

    let optimized_size = fs::metadata(&temp)?.len();
    let new_size = if optimized_size < old_size {
        fs::set_permissions(&temp, fs::metadata(path)?.permissions())?;
        temp.persist(path).map_err(|e| CompressionError::Io(e.error))?;
        optimized_size
    } else {
        verbose!(
            "{}: optimized output is {} bytes, keeping the {} byte original",
            name,
            optimized_size,
            old_size
        );
        old_size
    };

    let new_dims = image::image_dimensions(path)?;
    Ok(FileRecord {
        name,
        old_size,
        new_size,
        old_dims,
        new_dims,
        error: None,
    })
}

/// Compress every GIF directly inside `dir` and print the summary table.
pub fn batch_compress_gifs(dir: &Path, options: &GifOptions) -> Result<RunTotals> {
    let files = collect_files(dir, GIF_EXTENSIONS)?;
    if files.is_empty() {
        println!("No GIF files found.");
        return Ok(RunTotals::default());
    }

    info!(
        "Compressing GIFs: max_width={}, lossy={}, colors={}",
        options.max_width, options.lossy, options.colors
    );

    let table = CompressionTable {
        name_width: GIF_TABLE_NAME_WIDTH,
        rule_width: GIF_TABLE_RULE_WIDTH,
    };
    process_batch(&files, &table, |path| compress_gif(path, options))
}
