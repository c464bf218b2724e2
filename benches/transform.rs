//! Benchmarks for transform construction, point mapping and line fitting.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use frame2d::{fit_line, LineFit, Matrix3, Point2, Transform2d};

/// Generates points scattered around a nearly vertical edge.
fn generate_edge_points(count: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut points = Vec::with_capacity(count);
    let mut state = seed;

    for i in 0..count {
        // xorshift for deterministic noise
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let noise = (state as f64 / u64::MAX as f64 - 0.5) * 4.0;

        let y = 900.0 + i as f64 * (1600.0 / count as f64);
        let x = 1200.0 + 0.02 * y + noise;
        points.push(Point2::new(x, y));
    }

    points
}

fn edge_transform() -> Transform2d<f64> {
    let fit = LineFit::new(0.020584, 0.999788, 1233.198242, 1766.562988);
    Transform2d::from_line_fit(&fit, Point2::new(1216.782104, 969.212341))
        .expect("edge fit is non-degenerate")
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    let fit = LineFit::new(0.020584, 0.999788, 1233.198242, 1766.562988);
    let reference = Point2::new(1216.782104, 969.212341);

    group.bench_function("from_line_fit", |b| {
        b.iter(|| Transform2d::from_line_fit(black_box(&fit), black_box(reference)))
    });

    let matrix = Matrix3::from_affine(0.8, 0.6, -0.6, 0.8, 120.0, -45.0);
    group.bench_function("from_matrix", |b| {
        b.iter(|| Transform2d::from_matrix(black_box(matrix)))
    });

    let t = edge_transform();
    group.bench_function("rotate_ccw_deg", |b| {
        b.iter(|| black_box(&t).rotate_ccw_deg(black_box(12.5)))
    });

    group.finish();
}

fn bench_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapping");
    let t = edge_transform();

    for count in [100, 1000, 10000] {
        let points = generate_edge_points(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(
            BenchmarkId::new("world_to_local", count),
            &points,
            |b, points| {
                b.iter(|| {
                    for p in points.iter() {
                        black_box(t.world_to_local(black_box(*p)));
                    }
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("round_trip", count),
            &points,
            |b, points| {
                b.iter(|| {
                    for p in points.iter() {
                        black_box(t.local_to_world(t.world_to_local(black_box(*p))));
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_fit_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_line");

    for count in [25, 1000, 100000] {
        let points = generate_edge_points(count, 54321);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("edge", count), &points, |b, points| {
            b.iter(|| fit_line(black_box(points)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_construction, bench_mapping, bench_fit_line);
criterion_main!(benches);
