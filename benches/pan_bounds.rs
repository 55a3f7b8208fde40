// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use panlens::media::NaturalSize;
use panlens::ui::state::pan::{compute_bounds, image_rect};
use panlens::ui::state::{AspectRatio, NarrowImageAlign, PanState};
use std::hint::black_box;

fn pan_bounds_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pan_bounds");

    let panorama = NaturalSize::new(12_000, 2_000);
    let viewbox = AspectRatio::default().fit(Size::new(1600.0, 1200.0));

    group.bench_function("compute_bounds_wide", |b| {
        b.iter(|| {
            black_box(compute_bounds(
                black_box(panorama),
                black_box(viewbox),
                NarrowImageAlign::Center,
            ))
        });
    });

    group.bench_function("pan_sweep", |b| {
        b.iter(|| {
            let mut state = PanState::default();
            state.recompute(panorama, viewbox);
            while state.can_pan_right() {
                state.pan_right();
            }
            black_box(image_rect(panorama, viewbox, state.translate_x()))
        });
    });

    group.finish();
}

criterion_group!(benches, pan_bounds_benchmark);
criterion_main!(benches);
