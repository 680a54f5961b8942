pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod formats;
pub mod gif;
pub mod info;
pub mod logger;
pub mod processing;
pub mod utils;
pub mod validation;

pub use batch::{collect_files, process_batch, CompressionTable, FileRecord, RunTotals};
pub use error::{CompressionError, Result};
pub use gif::{batch_compress_gifs, compress_gif, gifsicle_args, GifOptions};
pub use info::{inspect_file, report_directory, AnimationInfo, ImageReport};
pub use processing::{batch_compress_images, compress_image, resize_to_max_width, CompressionOptions};
pub use utils::{human_size, scaled_height};
