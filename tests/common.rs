#![allow(dead_code)]

use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, Rgb, RgbImage, Rgba, RgbaImage};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

pub fn write_gradient_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8])
    });
    img.save(path).unwrap();
}

pub fn write_rgba_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 90, ((x + y) % 256) as u8])
    });
    img.save(path).unwrap();
}

pub fn write_animated_gif(path: &Path, width: u32, height: u32, frames: u32) {
    let file = File::create(path).unwrap();
    let mut encoder = GifEncoder::new(file);
    let frames = (0..frames).map(|i| {
        let buffer = RgbaImage::from_pixel(width, height, Rgba([(i * 5 % 256) as u8, 80, 160, 255]));
        Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(80, 1))
    });
    encoder.encode_frames(frames).unwrap();
}

/// Write an executable stand-in for gifsicle.
///
/// The script records its arguments (one per line) in `<dir>/args.txt`, finds
/// the `-o` target and then runs `action`, which can refer to it as `$out` and
/// to the input file as `$last`.
#[cfg(unix)]
pub fn write_fake_gifsicle(dir: &Path, action: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let args_file = dir.join("args.txt");
    let script = format!(
        "#!/bin/sh\n\
         printf '%s\\n' \"$@\" > '{}'\n\
         out=''\n\
         while [ $# -gt 0 ]; do\n\
           last=\"$1\"\n\
           if [ \"$1\" = '-o' ]; then out=\"$2\"; shift; fi\n\
           shift\n\
         done\n\
         {}\n",
        args_file.display(),
        action
    );

    let path = dir.join("fake-gifsicle");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

pub fn recorded_args(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("args.txt"))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Names of everything left in `dir`, sorted.
pub fn dir_listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
