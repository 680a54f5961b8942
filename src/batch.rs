use crate::constants::COMPRESSOR_SIZE_UNITS;
use crate::error::{CompressionError, Result};
use crate::utils::{create_progress_bar, has_extension, human_size, savings_percent};
use crate::validation::validate_directory;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of compressing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub name: String,
    pub old_size: u64,
    pub new_size: u64,
    pub old_dims: (u32, u32),
    pub new_dims: (u32, u32),
    /// Optimizer error text; the file was left untouched
    pub error: Option<String>,
}

impl FileRecord {
    /// Record for a file whose original was kept as-is.
    pub fn unchanged(name: String, size: u64, dims: (u32, u32), error: Option<String>) -> Self {
        Self {
            name,
            old_size: size,
            new_size: size,
            old_dims: dims,
            new_dims: dims,
            error,
        }
    }

    /// Bytes saved; negative when the file grew.
    pub fn saved(&self) -> i64 {
        self.old_size as i64 - self.new_size as i64
    }

    pub fn dims_label(&self) -> String {
        let (w, h) = self.old_dims;
        let mut label = format!("{}x{}", w, h);
        if self.old_dims != self.new_dims {
            let (nw, nh) = self.new_dims;
            label.push_str(&format!(" -> {}x{}", nw, nh));
        }
        label
    }
}

/// Byte totals accumulated over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTotals {
    pub old_size: u64,
    pub new_size: u64,
    pub files: usize,
}

impl RunTotals {
    pub fn add(&mut self, record: &FileRecord) {
        self.old_size += record.old_size;
        self.new_size += record.new_size;
        self.files += 1;
    }

    pub fn saved(&self) -> i64 {
        self.old_size as i64 - self.new_size as i64
    }

    pub fn percent_saved(&self) -> f64 {
        savings_percent(self.old_size, self.new_size)
    }
}

/// Column layout of a before/after compression table.
#[derive(Debug, Clone, Copy)]
pub struct CompressionTable {
    pub name_width: usize,
    pub rule_width: usize,
}

impl CompressionTable {
    pub fn header(&self) -> String {
        format!(
            "{:<width$} {:>10} {:>10} {:>10} {}",
            "File",
            "Before",
            "After",
            "Saved",
            "Dims",
            width = self.name_width
        )
    }

    pub fn rule(&self) -> String {
        "-".repeat(self.rule_width)
    }

    pub fn row(&self, record: &FileRecord) -> String {
        let status = match &record.error {
            Some(err) => format!(" [ERR: {}]", err),
            None => String::new(),
        };
        format!(
            "{:<width$} {:>10} {:>10} {:>10} {}{}",
            record.name,
            human_size(record.old_size as i64, COMPRESSOR_SIZE_UNITS),
            human_size(record.new_size as i64, COMPRESSOR_SIZE_UNITS),
            human_size(record.saved(), COMPRESSOR_SIZE_UNITS),
            record.dims_label(),
            status,
            width = self.name_width
        )
    }

    pub fn total(&self, totals: &RunTotals) -> String {
        format!(
            "{:<width$} {:>10} {:>10} {:>10} ({:.1}% saved)",
            "Total",
            human_size(totals.old_size as i64, COMPRESSOR_SIZE_UNITS),
            human_size(totals.new_size as i64, COMPRESSOR_SIZE_UNITS),
            human_size(totals.saved(), COMPRESSOR_SIZE_UNITS),
            totals.percent_saved(),
            width = self.name_width
        )
    }
}

/// List the files directly inside `dir` whose extension is in `extensions`,
/// sorted by file name. Subdirectories are not entered.
pub fn collect_files(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    validate_directory(dir)?;

    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_extension(path, extensions) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Run `process` over every file in order and print the before/after table.
///
/// The first error aborts the run and is returned wrapped with the failing
/// path; rows already printed stay on screen.
pub fn process_batch<F>(files: &[PathBuf], table: &CompressionTable, mut process: F) -> Result<RunTotals>
where
    F: FnMut(&Path) -> Result<FileRecord>,
{
    println!("{}", table.header());
    println!("{}", table.rule());

    let progress = create_progress_bar(files.len() as u64);
    let mut totals = RunTotals::default();

    for path in files {
        progress.set_message(file_name(path));
        let record = match process(path) {
            Ok(record) => record,
            Err(e) => {
                progress.abandon();
                return Err(CompressionError::FileFailed {
                    path: path.to_path_buf(),
                    source: Box::new(e),
                });
            }
        };
        totals.add(&record);
        progress.suspend(|| println!("{}", table.row(&record)));
        progress.inc(1);
    }

    progress.finish_and_clear();

    println!("{}", table.rule());
    println!("{}", table.total(&totals));

    Ok(totals)
}
