use std::hint::black_box;
use std::num::NonZeroU32;

use criterion::{Criterion, criterion_group, criterion_main};
use image::{GrayImage, Luma};
use relief3d::{HeightField, SurfaceMeshBuilder};

fn bench_downsample(c: &mut Criterion) {
    let img = GrayImage::from_fn(1024, 768, |x, y| {
        Luma([(((x + y) as f32 * 0.05).sin() * 127.0 + 128.0) as u8])
    });
    let factor = NonZeroU32::new(10).unwrap();

    c.bench_function("HeightField::from_image 1024x768 factor 10", |b| {
        b.iter(|| HeightField::from_image(black_box(&img), factor));
    });
}

fn bench_mesh_generation(c: &mut Criterion) {
    let heights: Vec<u8> = (0..128u32 * 128)
        .map(|i| {
            let (x, y) = (i % 128, i / 128);
            (((x + y) as f32 * 0.1).sin() * 127.0 + 128.0) as u8
        })
        .collect();
    let field = HeightField::from_raw(heights, 128, 128);

    c.bench_function("SurfaceMeshBuilder 128x128", |b| {
        b.iter(|| SurfaceMeshBuilder::new().build(black_box(&field)));
    });
}

criterion_group!(benches, bench_downsample, bench_mesh_generation);
criterion_main!(benches);
