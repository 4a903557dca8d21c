//! Benchmarks for the teamart pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use teamart::{encode_png, Palette, PatternKind, PatternRenderer, Rasterizer, Variant};

fn palette() -> Palette {
    Palette::from_hex(&["#EF0107", "#00366E", "#FFFFFF"]).unwrap()
}

// -- Generation benchmarks --

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    let palette = palette();

    let abstract_art = PatternRenderer::new(Variant::Abstract);
    group.bench_function("abstract", |b| {
        b.iter(|| abstract_art.render_seeded(&palette, None, black_box(42)).unwrap())
    });

    let jersey = PatternRenderer::new(Variant::JerseyAlt);
    group.bench_function("jersey_alt_dots", |b| {
        b.iter(|| {
            jersey
                .render_seeded(&palette, Some(PatternKind::Dots), black_box(42))
                .unwrap()
        })
    });

    let flag = PatternRenderer::new(Variant::Flag);
    group.bench_function("flag_vertical_stripe", |b| {
        b.iter(|| {
            flag.render_seeded(&palette, Some(PatternKind::VerticalStripe), black_box(42))
                .unwrap()
        })
    });

    group.finish();
}

// -- Rasterization benchmarks --

fn bench_rasterization(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterization");
    group.sample_size(20);
    let palette = palette();

    let drawing = PatternRenderer::new(Variant::Abstract)
        .render_seeded(&palette, None, 42)
        .unwrap();

    let small = Rasterizer::new(25);
    group.bench_function("abstract_200px", |b| {
        b.iter(|| small.rasterize(black_box(&drawing)))
    });

    let full = Rasterizer::default();
    group.bench_function("abstract_800px", |b| {
        b.iter(|| full.rasterize(black_box(&drawing)))
    });

    let image = small.rasterize(&drawing);
    group.bench_function("encode_png_200px", |b| {
        b.iter(|| encode_png(black_box(&image)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_generation, bench_rasterization);
criterion_main!(benches);
