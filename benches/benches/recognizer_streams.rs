// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use tendril_gestures::{
    GestureConfig, InertiaSimulator, Modifiers, PanEvent, PanRecognizer, PinchRecognizer,
    PointerSource, SurfacePoint,
};
use tendril_zoom::{ZoomConfig, propose};

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
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_drag_stream(count: usize, seed: u64) -> Vec<(SurfacePoint, f64)> {
    let mut rng = Rng::new(seed);
    let mut x = 100.0;
    let mut y = 100.0;
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        x += rng.next_f64() * 8.0 - 2.0;
        y += rng.next_f64() * 8.0 - 2.0;
        out.push((SurfacePoint::uniform(Point::new(x, y)), i as f64 * 16.0));
    }
    out
}

fn gen_pinch_stream(count: usize, seed: u64) -> Vec<([SurfacePoint; 2], f64)> {
    let mut rng = Rng::new(seed);
    let mut half = 40.0;
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        half += rng.next_f64() * 6.0 - 3.0;
        let a = SurfacePoint::uniform(Point::new(200.0 - half, 200.0));
        let b = SurfacePoint::uniform(Point::new(200.0 + half, 200.0));
        out.push(([a, b], i as f64 * 16.0));
    }
    out
}

fn bench_pan_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("pan_stream");
    for &count in &[64usize, 1024] {
        let stream = gen_drag_stream(count, 0x5eed);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("moves_{count}"), |b| {
            b.iter(|| {
                let mut pan = PanRecognizer::new(GestureConfig::default());
                let (first, t0) = stream[0];
                pan.press_start(&[first], Modifiers::empty(), t0, PointerSource::Touch);
                let mut emitted = 0usize;
                for &(p, t) in &stream[1..] {
                    if pan
                        .pointer_move(&[p], Modifiers::empty(), t, PointerSource::Touch)
                        .is_some()
                    {
                        emitted += 1;
                    }
                }
                black_box((pan.release(), emitted))
            });
        });
    }
    group.finish();
}

fn bench_pinch_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinch_stream");
    for &count in &[64usize, 1024] {
        let stream = gen_pinch_stream(count, 0x90_2f);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("moves_{count}"), |b| {
            b.iter(|| {
                let mut pinch = PinchRecognizer::new(GestureConfig::default());
                let zoom = ZoomConfig::default();
                pinch.press_start(&stream[0].0);
                let mut scale = 1.0;
                for (pair, _) in &stream[1..] {
                    if let Some(ev) = pinch.pointer_move(pair, Modifiers::empty()) {
                        if let Some(p) =
                            propose(scale, ev.dr, ev.position.page, Point::ZERO, &zoom)
                        {
                            scale = p.new_scale;
                        }
                    }
                }
                black_box(scale)
            });
        });
    }
    group.finish();
}

fn bench_inertia_rundown(c: &mut Criterion) {
    let mut group = c.benchmark_group("inertia_rundown");
    // A 20 px/tick seed decays for roughly 150 ticks before settling.
    group.bench_function("seed_20px", |b| {
        b.iter(|| {
            let config = GestureConfig::default();
            let mut inertia = InertiaSimulator::new(&config);
            let seed = PanEvent {
                position: SurfacePoint::uniform(Point::ZERO),
                dx: 20.0,
                dy: 20.0,
                dt: config.inertia_tick_ms,
                modifiers: Modifiers::empty(),
            };
            let mut now = 0.0;
            inertia.start(seed, now);
            let mut ticks = 0usize;
            loop {
                now += config.inertia_tick_ms;
                let t = inertia.tick(now);
                if t.event.is_some() {
                    ticks += 1;
                }
                if t.next_in.is_none() {
                    break;
                }
            }
            black_box(ticks)
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_pan_stream,
    bench_pinch_stream,
    bench_inertia_rundown
);
criterion_main!(benches);
