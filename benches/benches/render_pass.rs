// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use passpad_keyboard::{Icon, KeyState, Keyboard};
use passpad_render::{Canvas, KeyStyle, Padding, RenderCache, TextStyle};

#[derive(Default)]
struct Sink(usize);

impl Canvas for Sink {
    fn draw_background(&mut self, _: Rect, _: KeyState) {
        self.0 += 1;
    }
    fn draw_label(&mut self, text: &str, _: Point, _: &TextStyle) {
        self.0 += text.len();
    }
    fn draw_icon(&mut self, _: Icon, _: Rect) {
        self.0 += 1;
    }
}

fn cache_for(keyboard: &Keyboard) -> RenderCache {
    let mut cache = RenderCache::new(KeyStyle::default(), Padding::uniform(8));
    cache.set_size(keyboard.min_width() + 16, keyboard.height() + 16);
    cache
}

fn bench_passes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let keyboard = Keyboard::new(480);

    group.bench_function("full_pass_and_blit", |b| {
        let mut cache = cache_for(&keyboard);
        let mut sink = Sink::default();
        b.iter(|| {
            cache.invalidate_all();
            cache.draw(keyboard.keys(), &mut sink);
        });
        black_box(sink.0);
    });

    group.bench_function("single_key_pass", |b| {
        let mut cache = cache_for(&keyboard);
        let mut sink = Sink::default();
        cache.draw(keyboard.keys(), &mut sink);
        let mut index = 0;
        b.iter(|| {
            cache.invalidate_key(keyboard.keys(), index);
            index = (index + 1) % keyboard.keys().len();
            black_box(cache.take_repaint());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_passes);
criterion_main!(benches);
