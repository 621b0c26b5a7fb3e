// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use passpad_index::{Bounds, NeighborGrid};
use passpad_keyboard::{GRID_HEIGHT, GRID_WIDTH, HitTester, Keyboard};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_in(&mut self, max: i32) -> i32 {
        (self.next_u64() % max as u64) as i32
    }
}

// Touch points scattered over the pad and a margin around it.
fn gen_touches(count: usize, width: i32, height: i32) -> Vec<(i32, i32)> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            (
                rng.next_in(width + 40) - 20,
                rng.next_in(height + 40) - 20,
            )
        })
        .collect()
}

fn key_bounds(keyboard: &Keyboard) -> Vec<Bounds> {
    keyboard.keys().iter().map(|k| k.bounds).collect()
}

fn bench_grid_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    for &width in &[240i32, 480, 1080] {
        let keyboard = Keyboard::new(width);
        let bounds = key_bounds(&keyboard);
        let threshold = keyboard.proximity_threshold();
        let height = keyboard.height();
        group.bench_function(format!("build_w{width}"), |b| {
            b.iter(|| {
                let grid = NeighborGrid::build(
                    GRID_WIDTH,
                    GRID_HEIGHT,
                    width,
                    height,
                    threshold,
                    &bounds,
                );
                black_box(grid);
            });
        });
    }
    group.finish();
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");
    let touches = gen_touches(4096, 480, 640);
    group.throughput(Throughput::Elements(touches.len() as u64));
    for proximity in [false, true] {
        let mut tester = HitTester::new();
        tester.set_proximity_correction(proximity);
        let mut keyboard = Keyboard::new(480);
        group.bench_function(format!("proximity_{proximity}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for &(x, y) in &touches {
                    hits += usize::from(tester.locate(&mut keyboard, x, y).is_some());
                }
                black_box(hits);
            });
        });
        group.bench_function(format!("candidates_proximity_{proximity}"), |b| {
            b.iter(|| {
                let mut ranked = 0usize;
                for &(x, y) in &touches {
                    ranked += tester.locate_with_candidates(&mut keyboard, x, y).1.len();
                }
                black_box(ranked);
            });
        });
    }
    group.finish();
}

fn bench_locate_after_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize");
    let tester = HitTester::new();
    group.bench_function("resize_then_first_locate", |b| {
        b.iter_batched(
            || Keyboard::new(480),
            |mut keyboard| {
                keyboard.resize(300, 400);
                black_box(tester.locate(&mut keyboard, 150, 150));
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_grid_build, bench_locate, bench_locate_after_resize);
criterion_main!(benches);
