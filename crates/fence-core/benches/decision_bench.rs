//! Criterion benchmarks for [`decide_clip`].
//!
//! The decision runs inside the low-level mouse hook, which Windows removes if
//! it stalls.  These benchmarks track the per-event cost for the three
//! outcomes.
//!
//! Run with:
//! ```bash
//! cargo bench --package fence-core --bench decision_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fence_core::{decide_clip, ClipRect, HookEvent, Point, PointerMessage};

const SCREEN: ClipRect = ClipRect::new(0, 0, 1920, 1080);

/// Benchmarks the three decision outcomes on a single 1080p screen.
fn bench_decide_clip_outcomes(c: &mut Criterion) {
    let mut group = c.benchmark_group("decide_clip");

    let cases = [
        ("inside_release", HookEvent::movement(960, 540)),
        ("outside_clip", HookEvent::movement(1921, 540)),
        (
            "wheel_pass",
            HookEvent {
                code: 0,
                message: PointerMessage::Wheel,
                point: Point::new(960, 540),
            },
        ),
    ];

    for (name, event) in cases {
        group.bench_with_input(BenchmarkId::new("outcome", name), &event, |b, event| {
            b.iter(|| decide_clip(black_box(&SCREEN), black_box(event)))
        });
    }

    group.finish();
}

/// Benchmarks a burst of movement events sweeping across the right edge.
fn bench_decide_clip_edge_sweep(c: &mut Criterion) {
    let events: Vec<HookEvent> = (1900..1940).map(|x| HookEvent::movement(x, 540)).collect();

    c.bench_function("decide_clip_edge_sweep_40", |b| {
        b.iter(|| {
            for event in &events {
                black_box(decide_clip(black_box(&SCREEN), event));
            }
        })
    });
}

criterion_group!(benches, bench_decide_clip_outcomes, bench_decide_clip_edge_sweep);
criterion_main!(benches);
