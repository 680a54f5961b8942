use crate::constants::{
    DEFAULT_COLORS, DEFAULT_GIFSICLE, DEFAULT_GIF_MAX_WIDTH, DEFAULT_LOSSY, DEFAULT_MAX_WIDTH,
    DEFAULT_QUALITY,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "img-trim",
    about = "Batch resize, recompress and inspect the images of a static assets directory",
    long_about = "img-trim works on every matching file directly inside one directory (no recursion). \
                  `compress` resizes and re-encodes PNG/JPEG files in place, `gif` shrinks GIFs with \
                  gifsicle and only keeps the result when it is smaller, and `info` reports sizes, \
                  dimensions and GIF frame counts.",
    version,
    after_help = "EXAMPLES:\n  \
    img-trim compress --max-width 1200 --quality 85\n  \
    img-trim --dir ./static gif --lossy 60 --colors 64\n  \
    img-trim info"
)]
pub struct Args {
    #[arg(
        short = 'd',
        long,
        global = true,
        env = "IMG_TRIM_DIR",
        default_value = ".",
        help = "Directory whose images are processed"
    )]
    pub dir: PathBuf,

    #[arg(
        short = 'q',
        long,
        global = true,
        help = "Only print result tables",
        long_help = "Hide the intro line, progress bar, warnings and verbose output. \
                     Result tables and errors are still printed."
    )]
    pub quiet: bool,

    #[arg(
        short = 'v',
        long,
        global = true,
        help = "Print per-file decisions",
        long_help = "Print resize decisions, optimizer command lines and whether optimized \
                     output was kept or discarded."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(
        about = "Resize and recompress PNG/JPEG files in place",
        long_about = "Downscale every .png/.jpg/.jpeg wider than --max-width (aspect ratio kept, \
                      Lanczos3 filter) and re-encode it in place. PNGs are re-encoded losslessly and \
                      optimized with oxipng; JPEGs are flattened to RGB and encoded at --quality. \
                      Files are overwritten even if the new encoding is larger."
    )]
    Compress {
        #[arg(
            long,
            default_value_t = DEFAULT_MAX_WIDTH,
            help = "Max width in pixels"
        )]
        max_width: u32,

        #[arg(
            long,
            default_value_t = DEFAULT_QUALITY,
            help = "JPEG quality 1-100"
        )]
        quality: u8,
    },

    #[command(
        about = "Compress GIF files with gifsicle",
        long_about = "Run gifsicle on every .gif, resizing those wider than --max-width. \
                      The original is only replaced when the optimized file is strictly smaller; \
                      if gifsicle fails the original is left untouched and the error is reported."
    )]
    Gif {
        #[arg(
            long,
            default_value_t = DEFAULT_GIF_MAX_WIDTH,
            help = "Max width in pixels"
        )]
        max_width: u32,

        #[arg(
            long,
            default_value_t = DEFAULT_LOSSY,
            help = "Lossy compression level",
            long_help = "Strength of gifsicle's lossy pass. Higher values give smaller files \
                         with more visible artifacts."
        )]
        lossy: u32,

        #[arg(
            long,
            default_value_t = DEFAULT_COLORS,
            help = "Max colors 2-256"
        )]
        colors: u16,

        #[arg(
            long,
            env = "GIFSICLE",
            default_value = DEFAULT_GIFSICLE,
            help = "gifsicle executable to run"
        )]
        gifsicle: PathBuf,
    },

    #[command(
        about = "Report image sizes, dimensions and GIF frame data",
        long_about = "List every .png/.jpg/.jpeg/.gif/.webp/.svg/.bmp with its size and \
                      dimensions. GIFs also get their frame count and per-frame duration. \
                      Files that cannot be decoded are shown with N/A dimensions."
    )]
    Info,
}
