use clap::Parser;
use img_trim::cli::{Args, Commands};
use img_trim::error::Result;
use img_trim::logger::{self, Verbosity};
use img_trim::validation::validate_directory;
use img_trim::{batch_compress_gifs, batch_compress_images, report_directory};
use img_trim::{CompressionOptions, GifOptions};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logger::set_verbosity(Verbosity::from_flags(args.quiet, args.verbose));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            img_trim::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    validate_directory(&args.dir)?;

    match args.command {
        Commands::Compress { max_width, quality } => {
            let options = CompressionOptions::new(max_width, quality)?;
            batch_compress_images(&args.dir, &options)?;
        }
        Commands::Gif {
            max_width,
            lossy,
            colors,
            gifsicle,
        } => {
            let options = GifOptions::new(max_width, lossy, colors, gifsicle)?;
            batch_compress_gifs(&args.dir, &options)?;
        }
        Commands::Info => {
            report_directory(&args.dir)?;
        }
    }

    Ok(())
}
