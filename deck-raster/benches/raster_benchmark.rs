use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use deck_core::{Color, Point, SymbolId};
use deck_raster::{place, rasterize, Glyph, MaskCache};
use image::{Rgba, RgbaImage};
use std::hint::black_box;

/// Benchmark: rasterize the club at header, pip and ace sizes
fn bench_rasterize(c: &mut Criterion) {
    let cache = MaskCache::default();
    let rings = cache.polygons(SymbolId::Club).unwrap();
    let viewbox = cache.library().viewbox();
    let mut group = c.benchmark_group("rasterize_club");

    for size in [85, 102, 232] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| rasterize(black_box(&rings), viewbox, size).unwrap());
        });
    }

    group.finish();
}

/// Benchmark: cache hit path
fn bench_cache_hit(c: &mut Criterion) {
    let cache = MaskCache::default();
    cache.get_or_create(SymbolId::Heart, 85).unwrap();

    c.bench_function("mask_cache_hit", |b| {
        b.iter(|| cache.get_or_create(black_box(SymbolId::Heart), 85).unwrap());
    });
}

/// Benchmark: stamp one rotated pip onto a card-sized canvas
fn bench_place(c: &mut Criterion) {
    let cache = MaskCache::default();
    let mut canvas = RgbaImage::from_pixel(400, 560, Rgba([255, 255, 255, 255]));
    let glyph = Glyph {
        symbol: SymbolId::Spade,
        center: Point::new(100.0, 300.0),
        size: 85,
        color: Color::rgb(0x21, 0x21, 0x21),
        rotated: true,
    };

    c.bench_function("place_rotated_pip", |b| {
        b.iter(|| place(&cache, &mut canvas, black_box(&glyph)).unwrap());
    });
}

criterion_group!(benches, bench_rasterize, bench_cache_hit, bench_place);
criterion_main!(benches);
