// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel zoom.
//!
//! Ctrl+wheel over a surface becomes a virtual pinch and an anchor-preserving
//! zoom proposal. The example zooms in three steps around a fixed cursor and
//! prints the scale and the scroll correction that keeps the cursor's content
//! point stationary; a wheel without the modifier chord is left alone.
//!
//! Run:
//! - `cargo run -p tendril_demos --example wheel_zoom`

use kurbo::{Point, Vec2};
use tendril_gestures::{GestureConfig, Modifiers, SurfacePoint, WheelDeltaUnit};
use tendril_surface::{Manipulator, Surface};
use tendril_zoom::{ZoomConfig, ZoomProposal};

struct Canvas {
    scale: f64,
    scroll: Vec2,
}

impl Surface for Canvas {
    fn scale(&self) -> f64 {
        self.scale
    }
    fn origin(&self) -> Point {
        Point::ZERO
    }
    fn on_pan(&mut self, _: &tendril_gestures::PanEvent) -> bool {
        false
    }
    fn on_zoom(&mut self, _: &tendril_gestures::PinchEvent, p: &ZoomProposal) -> bool {
        self.scroll += p.scroll_by;
        self.scale = p.new_scale;
        true
    }
}

fn main() {
    let mut canvas = Canvas {
        scale: 1.0,
        scroll: Vec2::ZERO,
    };
    let mut m = Manipulator::new(GestureConfig::default(), ZoomConfig::default());
    let cursor = SurfacePoint::uniform(Point::new(320.0, 240.0));

    println!("== Ctrl+wheel, three steps up ==");
    for _ in 0..3 {
        let r = m.wheel(&mut canvas, -100.0, WheelDeltaUnit::Pixel, cursor, Modifiers::CTRL);
        println!(
            "  consumed={}  scale={:.4}  scroll=({:.2}, {:.2})",
            r.consume, canvas.scale, canvas.scroll.x, canvas.scroll.y
        );
    }

    println!("== Unmodified wheel ==");
    let r = m.wheel(
        &mut canvas,
        -100.0,
        WheelDeltaUnit::Pixel,
        cursor,
        Modifiers::empty(),
    );
    println!("  consumed={}  scale={:.4}", r.consume, canvas.scale);
}
