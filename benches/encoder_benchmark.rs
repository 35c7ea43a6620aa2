#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for output encoders (PNG, HTML).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trueno_imgswap::prelude::*;

fn png_encoder_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("png_encoder");

    for resolution in [250, 500, 1000] {
        let image = ImageBankGenerator::new()
            .resolution(resolution)
            .generate_image(0)
            .expect("bank image should render");

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{resolution}x{resolution}")),
            &resolution,
            |b, _| {
                b.iter(|| PngEncoder::to_bytes(black_box(&image)).expect("encoding should succeed"));
            },
        );
    }

    group.finish();
}

fn png_content_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("png_content_types");

    let generator = ImageBankGenerator::new().resolution(500);

    // Smooth field (highly compressible)
    let smooth = generator.generate_image(0).expect("bank image should render");

    // High-frequency field (poorly compressible)
    let busy = generator.generate_image(4).expect("bank image should render");

    // Overflowed field (single color)
    let flat = generator.generate_image(400).expect("bank image should render");

    for (name, image) in [("smooth", &smooth), ("busy", &busy), ("flat", &flat)] {
        group.bench_function(name, |b| {
            b.iter(|| PngEncoder::to_bytes(black_box(image)).expect("encoding should succeed"));
        });
    }

    group.finish();
}

fn html_export_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("html_export");
    group.sample_size(10);

    let points = ReferenceSelector::new().select_seeded(42).expect("points");
    let bank = ImageBankGenerator::new()
        .resolution(250)
        .count(5)
        .generate()
        .expect("bank");
    let scene = Scene::new(points, bank).expect("scene");
    let exporter = HtmlExporter::new();

    group.bench_function("five_images_250px", |b| {
        b.iter(|| exporter.render(black_box(&scene)).expect("render should succeed"));
    });

    group.finish();
}

criterion_group!(benches, png_encoder_benchmark, png_content_benchmark, html_export_benchmark);
criterion_main!(benches);
