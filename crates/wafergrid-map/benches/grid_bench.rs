use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use wafergrid_core::Point;
use wafergrid_map::{ExclusionShape, GridGenerator, GridKind, GridResult, WaferSpec};

fn grid_generation(c: &mut Criterion) {
    let rect = WaferSpec::new(300.0, 2.0, GridKind::Rectangular);
    let hex = WaferSpec::new(300.0, 2.0, GridKind::Hexagonal);

    c.bench_function("rectangular_300mm_2mm", |b| {
        b.iter(|| GridGenerator::new(black_box(rect)).generate().unwrap())
    });
    c.bench_function("hexagonal_300mm_2mm", |b| {
        b.iter(|| GridGenerator::new(black_box(hex)).generate().unwrap())
    });
}

fn classification(c: &mut Criterion) {
    let spec = WaferSpec::new(300.0, 2.0, GridKind::Hexagonal);
    let shapes = [
        ExclusionShape::circle(Point::new(0.0, 0.0), 20.0),
        ExclusionShape::rectangle(Point::new(80.0, -40.0), 30.0, 10.0),
    ];
    c.bench_function("classify_300mm_2mm_two_zones", |b| {
        b.iter(|| GridResult::compute(black_box(spec), black_box(&shapes)).unwrap())
    });
}

criterion_group!(benches, grid_generation, classification);
criterion_main!(benches);
