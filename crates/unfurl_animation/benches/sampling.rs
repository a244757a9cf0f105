//! Micro-benchmarks for the per-frame sampling paths

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use unfurl_animation::{Easing, MotionPreset, Transition, VISIBLE};

fn bench_bezier_eval(c: &mut Criterion) {
    let curve = Easing::bezier(1.0, 0.6, 0.6, 0.6).unwrap();
    c.bench_function("bezier_eval_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for i in 0..100 {
                acc += curve.apply(black_box(i as f32 / 100.0));
            }
            acc
        })
    });
}

fn bench_transition_sample(c: &mut Criterion) {
    let spec = MotionPreset::fade_in_up(800, 50.0).unwrap();
    let mut fade = Transition::new(spec);
    fade.set_state(VISIBLE, 0.0);
    c.bench_function("transition_sample_mid_flight", |b| {
        b.iter(|| fade.sample(black_box(400.0)))
    });
}

criterion_group!(benches, bench_bezier_eval, bench_transition_sample);
criterion_main!(benches);
