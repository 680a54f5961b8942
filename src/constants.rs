pub const DEFAULT_QUALITY: u8 = 85;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

pub const DEFAULT_MAX_WIDTH: u32 = 1200;
pub const DEFAULT_GIF_MAX_WIDTH: u32 = 800;

pub const DEFAULT_LOSSY: u32 = 80;
pub const DEFAULT_COLORS: u16 = 128;
pub const MIN_COLORS: u16 = 2;
pub const MAX_COLORS: u16 = 256;

pub const DEFAULT_GIFSICLE: &str = "gifsicle";
pub const GIFSICLE_OPTIMIZE_LEVEL: u8 = 3;

/// oxipng preset for the lossless PNG pass (0 = fastest, 6 = smallest)
pub const PNG_OPTIMIZATION_PRESET: u8 = 2;

pub const COMPRESSIBLE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];
pub const GIF_EXTENSIONS: &[&str] = &["gif"];
pub const REPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg", "bmp"];

/// Units for the compressors; the last entry absorbs anything larger.
pub const COMPRESSOR_SIZE_UNITS: &[&str] = &["B", "KB", "MB", "GB"];
/// Units for the reporter.
pub const REPORTER_SIZE_UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

pub const PNG_TABLE_NAME_WIDTH: usize = 35;
pub const PNG_TABLE_RULE_WIDTH: usize = 90;
pub const GIF_TABLE_NAME_WIDTH: usize = 45;
pub const GIF_TABLE_RULE_WIDTH: usize = 100;
pub const INFO_TABLE_NAME_WIDTH: usize = 45;
pub const INFO_TABLE_RULE_WIDTH: usize = 90;

pub const NOT_AVAILABLE: &str = "N/A";
pub const SIZE_LIMIT_HINT: &str = "GitHub recommended: single file < 25MB, repo < 1GB";

pub const PROGRESS_BAR_TEMPLATE: &str = "{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}";
