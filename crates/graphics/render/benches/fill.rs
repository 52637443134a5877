use canvas::Canvas;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use math::{Color, Point};
use render::{boundary_replace_fill, draw_circle, interior_bounded_fill};

const SIZE: usize = 512;

fn criterion_benchmark(c: &mut Criterion) {
    let blank = Canvas::new(SIZE, SIZE, Color::BLACK);

    c.bench_with_input(
        BenchmarkId::new("boundary replace fill", "512x512 blank"),
        &blank,
        |b, canvas| {
            b.iter_batched_ref(
                || canvas.clone(),
                |canvas| boundary_replace_fill(canvas, Point::new(0, 0), Color::BLACK, Color::RED),
                criterion::BatchSize::LargeInput,
            )
        },
    );

    let mut ring = blank.clone();
    let center = Point::new(SIZE as i32 / 2, SIZE as i32 / 2);
    draw_circle(&mut ring, center, SIZE as i32 / 2 - 1, Color::WHITE);

    c.bench_with_input(
        BenchmarkId::new("interior bounded fill", "512x512 circle"),
        &ring,
        |b, canvas| {
            b.iter_batched_ref(
                || canvas.clone(),
                |canvas| interior_bounded_fill(canvas, center, Color::WHITE, Color::RED),
                criterion::BatchSize::LargeInput,
            )
        },
    );
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
