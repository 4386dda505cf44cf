//! Benchmarks for visibility recomputes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use sightline::polygon::Polygon;
use sightline::visibility::{update_all, Arena, Observer, WallSet};
use sightline::Point2;

const SIZE: f64 = 1000.0;

/// Scatters `count` boxes on a grid, one per cell, leaving gaps between them.
fn generate_boxes(count: usize, seed: u64) -> Vec<Polygon<f64>> {
    let cells = (count as f64).sqrt().ceil() as usize;
    let cell = SIZE / cells as f64;
    let mut boxes = Vec::with_capacity(count);
    let mut state = seed;

    for i in 0..count {
        // xorshift for deterministic random
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let w = (state as f64 / u64::MAX as f64) * 0.4 * cell + 0.1 * cell;

        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let h = (state as f64 / u64::MAX as f64) * 0.4 * cell + 0.1 * cell;

        let x = (i % cells) as f64 * cell + 0.2 * cell;
        let y = (i / cells) as f64 * cell + 0.2 * cell;
        boxes.push(Polygon::rectangle(Point2::new(x, y), w, h));
    }

    boxes
}

/// An origin in the gap between grid cells, never inside a box.
fn gap_origin(count: usize) -> Point2<f64> {
    let cells = (count as f64).sqrt().ceil() as usize;
    let cell = SIZE / cells as f64;
    Point2::new(
        (cells / 2) as f64 * cell + 0.1 * cell,
        (cells / 2) as f64 * cell + 0.1 * cell,
    )
}

fn bench_wall_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("wall_build");
    let arena = Arena::new(SIZE, SIZE).unwrap();

    for count in [10, 100, 1000] {
        let boxes = generate_boxes(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("boxes", count), &boxes, |b, boxes| {
            b.iter(|| WallSet::build(arena, black_box(boxes)))
        });
    }

    group.finish();
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");
    let arena = Arena::new(SIZE, SIZE).unwrap();

    for count in [10, 50, 100, 250] {
        let boxes = generate_boxes(count, 12345);
        let origin = gap_origin(count);
        let mut observer = Observer::new(arena, &boxes, origin).unwrap();
        group.throughput(Throughput::Elements(count as u64));

        group.bench_function(BenchmarkId::new("boxes", count), |b| {
            b.iter(|| {
                observer.update();
                black_box(observer.polygon().len())
            })
        });
    }

    group.finish();
}

fn bench_moving_observer(c: &mut Criterion) {
    let arena = Arena::new(SIZE, SIZE).unwrap();
    let boxes = generate_boxes(100, 987);
    let start = gap_origin(100);
    let mut observer = Observer::new(arena, &boxes, start).unwrap();

    c.bench_function("move_along_gap_100", |b| {
        let mut step = 0usize;
        b.iter(|| {
            step = (step + 1) % 50;
            let p = Point2::new(start.x + step as f64, start.y);
            let _ = observer.move_to(black_box(p));
        })
    });
}

fn bench_update_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_all");
    let arena = Arena::new(SIZE, SIZE).unwrap();
    let boxes = generate_boxes(100, 4242);
    let origin = gap_origin(100);

    for lights in [1, 4, 16] {
        let mut observers: Vec<_> = (0..lights)
            .map(|i| {
                let p = Point2::new(origin.x + i as f64, origin.y);
                Observer::new(arena, &boxes, p).unwrap()
            })
            .collect();
        group.throughput(Throughput::Elements(lights as u64));

        group.bench_function(BenchmarkId::new("observers", lights), |b| {
            b.iter(|| update_all(black_box(&mut observers)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_wall_build,
    bench_recompute,
    bench_moving_observer,
    bench_update_all
);
criterion_main!(benches);
