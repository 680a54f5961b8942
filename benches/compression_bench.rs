use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{DynamicImage, Rgb, RgbImage};
use img_trim::constants::{COMPRESSOR_SIZE_UNITS, REPORTER_SIZE_UNITS};
use img_trim::processing::{
    compress_image, encode_jpeg, encode_png, resize_to_max_width, CompressionOptions,
};
use img_trim::utils::human_size;
use std::fs;
use tempfile::TempDir;

fn gradient(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8])
    }))
}

fn bench_human_size(c: &mut Criterion) {
    c.bench_function("human_size", |b| {
        b.iter(|| {
            human_size(black_box(5_368_709_120), COMPRESSOR_SIZE_UNITS);
            human_size(black_box(1_536), REPORTER_SIZE_UNITS)
        })
    });
}

fn bench_image_resizing(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_resizing");

    for size in [Small, Medium, Large].iter() {
        let (width, height) = match size {
            Small => (800, 600),
            Medium => (1920, 1080),
            Large => (3840, 2160),
        };
        let img = gradient(width, height);

        group.bench_with_input(
            BenchmarkId::new("resize", format!("{}x{}", width, height)),
            &img,
            |b, img| {
                b.iter(|| {
                    let mut img = img.clone();
                    resize_to_max_width(black_box(&mut img), black_box(width / 2))
                })
            },
        );
    }

    group.finish();
}

fn bench_encoding(c: &mut Criterion) {
    let img = gradient(640, 480);
    let mut group = c.benchmark_group("encoding");
    group.sample_size(10);

    group.bench_function("jpeg_q85", |b| b.iter(|| encode_jpeg(black_box(&img), 85)));
    group.bench_function("png_oxipng", |b| b.iter(|| encode_png(black_box(&img))));

    group.finish();
}

fn bench_compress_file(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source.jpg");
    let target = temp_dir.path().join("photo.jpg");
    gradient(1920, 1080).save(&source).unwrap();
    let options = CompressionOptions::default();

    c.bench_function("compress_jpeg_file", |b| {
        b.iter(|| {
            fs::copy(&source, &target).unwrap();
            compress_image(black_box(&target), black_box(&options))
        })
    });
}

enum ImageSize {
    Small,
    Medium,
    Large,
}

use ImageSize::*;

criterion_group!(
    benches,
    bench_human_size,
    bench_image_resizing,
    bench_encoding,
    bench_compress_file
);
criterion_main!(benches);
