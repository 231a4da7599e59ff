// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface basics.
//!
//! This minimal example drives a logging surface through a touch drag. The
//! drag becomes pan events, and the release hands the last velocity to the
//! inertia simulator, which coasts the surface with a decaying tail. Timers
//! are simulated here by advancing a plain `f64` clock by the delay each
//! response asks for.
//!
//! Run:
//! - `cargo run -p tendril_demos --example surface_basics`

use kurbo::{Point, Vec2};
use tendril_gestures::{GestureConfig, Modifiers, PointerSource, SurfacePoint};
use tendril_surface::{Manipulator, Surface};
use tendril_zoom::{ZoomConfig, ZoomProposal, scroll_for_pan};

struct Canvas {
    scroll: Vec2,
    pans: usize,
}

impl Surface for Canvas {
    fn scale(&self) -> f64 {
        1.0
    }
    fn origin(&self) -> Point {
        Point::ZERO
    }
    fn on_pan(&mut self, event: &tendril_gestures::PanEvent) -> bool {
        self.pans += 1;
        match scroll_for_pan(event.dx, event.dy, self.scale()) {
            Some(d) => {
                self.scroll += d;
                true
            }
            None => false,
        }
    }
    fn on_zoom(&mut self, _: &tendril_gestures::PinchEvent, _: &ZoomProposal) -> bool {
        false
    }
}

fn main() {
    let mut canvas = Canvas {
        scroll: Vec2::ZERO,
        pans: 0,
    };
    let mut m = Manipulator::new(
        GestureConfig {
            pan_speed: 1.0,
            ..Default::default()
        },
        ZoomConfig::default(),
    );

    // A rightward drag: five samples, 12 px apart, 16 ms apart.
    println!("== Drag ==");
    m.press_start(
        &[SurfacePoint::uniform(Point::new(100.0, 100.0))],
        Modifiers::empty(),
        0.0,
        PointerSource::Touch,
    );
    for i in 1..=5 {
        let p = SurfacePoint::uniform(Point::new(100.0 + f64::from(i) * 12.0, 100.0));
        m.pointer_move(
            &mut canvas,
            &[p],
            Modifiers::empty(),
            f64::from(i) * 16.0,
            PointerSource::Touch,
        );
    }
    println!("  pans={}  scroll=({:.1}, {:.1})", canvas.pans, canvas.scroll.x, canvas.scroll.y);

    // Release at speed: the response schedules the first inertia tick.
    let mut now = 80.0;
    let r = m.release(&mut canvas, Modifiers::empty(), now);
    let mut delay = r.tick_in;

    println!("== Coast ==");
    let mut ticks = 0u32;
    while let Some(d) = delay {
        now += d.max(1.0);
        delay = m.inertia_tick(&mut canvas, now).tick_in;
        ticks += 1;
    }
    println!(
        "  ticks={ticks}  scroll=({:.1}, {:.1})",
        canvas.scroll.x, canvas.scroll.y
    );
}
