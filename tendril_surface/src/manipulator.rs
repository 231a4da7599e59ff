// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One surface's recognizer bundle and input routing.
//!
//! ## Routing
//!
//! Point count decides which recognizers a sample can engage: one point feeds
//! tap and pan, two points feed pinch. The recognizers run independently on
//! the same stream, so a pan that briefly sees a second touch holds its state
//! while pinch takes over, exactly as the raw events interleave.
//!
//! ## Ordering
//!
//! Everything here completes synchronously inside the input callback that
//! triggered it; only inertia defers work, and a new press cancels pending
//! inertia before anything else happens. Gesture events therefore reach the
//! surface strictly in input order.

use tendril_gestures::{
    GestureConfig, InertiaSimulator, Modifiers, PanRecognizer, PinchEvent, PinchRecognizer,
    PointerSource, SurfacePoint, TapRecognizer, WheelDeltaUnit,
};
use tendril_zoom::{ZoomConfig, propose};

use crate::surface::{InputResponse, Surface};

/// The active recognizers for one interactive surface.
#[derive(Clone, Debug)]
pub struct Manipulator {
    tap: TapRecognizer,
    pan: PanRecognizer,
    pinch: PinchRecognizer,
    inertia: InertiaSimulator,
    zoom: ZoomConfig,
}

impl Manipulator {
    /// Bundle fresh recognizers from the two configurations. Both are fixed
    /// for the manipulator's lifetime.
    pub fn new(gestures: GestureConfig, zoom: ZoomConfig) -> Self {
        Self {
            tap: TapRecognizer::new(gestures),
            pan: PanRecognizer::new(gestures),
            pinch: PinchRecognizer::new(gestures),
            inertia: InertiaSimulator::new(&gestures),
            zoom,
        }
    }

    /// Whether an inertia sequence is currently coasting.
    pub fn is_coasting(&self) -> bool {
        self.inertia.is_active()
    }

    /// A press began. Cancels pending inertia first — fresh input always
    /// preempts decaying state — then arms the recognizers the point count
    /// allows.
    ///
    /// The response asks to consume the input when a two-point pinch armed or
    /// a modifier-qualified mouse pan engaged (so the host can stop text
    /// selection and native panning up front).
    pub fn press_start(
        &mut self,
        points: &[SurfacePoint],
        modifiers: Modifiers,
        timestamp: f64,
        source: PointerSource,
    ) -> InputResponse {
        self.inertia.cancel();
        self.tap.press_start(points, modifiers, timestamp);
        self.pan.press_start(points, modifiers, timestamp, source);
        self.pinch.press_start(points);
        let consume =
            self.pinch.is_tracking() || (source == PointerSource::Mouse && self.pan.is_engaged());
        InputResponse {
            consume,
            tick_in: None,
        }
    }

    /// A move sample arrived. Routes by point count, forwards any resulting
    /// event to the surface, and reports the surface's accepted-feedback as
    /// the consume decision.
    pub fn pointer_move<S: Surface>(
        &mut self,
        surface: &mut S,
        points: &[SurfacePoint],
        modifiers: Modifiers,
        timestamp: f64,
        source: PointerSource,
    ) -> InputResponse {
        self.tap.pointer_move(points);
        let mut consume = false;
        if points.len() == 2 {
            if let Some(ev) = self.pinch.pointer_move(points, modifiers) {
                consume = self.deliver_zoom(surface, &ev);
            }
        } else if let Some(ev) = self.pan.pointer_move(points, modifiers, timestamp, source) {
            consume = surface.on_pan(&ev);
        }
        InputResponse {
            consume,
            tick_in: None,
        }
    }

    /// The press released. Emits a tap if one completed, seeds inertia from
    /// an active pan, and clears pinch tracking.
    pub fn release<S: Surface>(
        &mut self,
        surface: &mut S,
        modifiers: Modifiers,
        timestamp: f64,
    ) -> InputResponse {
        if let Some(tap) = self.tap.release(modifiers) {
            surface.on_tap(&tap);
        }
        self.pinch.release();
        let tick_in = self
            .pan
            .release()
            .map(|seed| self.inertia.start(seed, timestamp));
        InputResponse {
            consume: false,
            tick_in,
        }
    }

    /// The input was interrupted (contact lost, pointer left the surface).
    /// No tap can complete, but an active pan still hands off to inertia —
    /// an interrupted drag coasts just like a released one.
    pub fn cancel(&mut self, timestamp: f64) -> InputResponse {
        self.tap.cancel();
        self.pinch.cancel();
        let tick_in = self
            .pan
            .release()
            .map(|seed| self.inertia.start(seed, timestamp));
        InputResponse {
            consume: false,
            tick_in,
        }
    }

    /// Drop all gesture state, inertia included. Idempotent.
    pub fn reset(&mut self) {
        self.tap.cancel();
        self.pan.cancel();
        self.pinch.cancel();
        self.inertia.cancel();
    }

    /// Wheel input. A modifier-qualified wheel becomes a virtual pinch and a
    /// zoom proposal; anything else is left to the host untouched.
    pub fn wheel<S: Surface>(
        &mut self,
        surface: &mut S,
        delta_y: f64,
        unit: WheelDeltaUnit,
        position: SurfacePoint,
        modifiers: Modifiers,
    ) -> InputResponse {
        let consume = match self.pinch.wheel(delta_y, unit, position, modifiers) {
            Some(ev) => self.deliver_zoom(surface, &ev),
            None => false,
        };
        InputResponse {
            consume,
            tick_in: None,
        }
    }

    /// Run one inertia tick at time `now`, delivering the synthetic pan step
    /// to the surface. The response's `tick_in` carries the jitter-corrected
    /// delay for the next tick, or `None` once the sequence settled.
    ///
    /// Synthetic steps are not cancelable: the surface's return value does
    /// not stop the decay (a boundary-aware surface simply ignores deltas it
    /// cannot apply).
    pub fn inertia_tick<S: Surface>(&mut self, surface: &mut S, now: f64) -> InputResponse {
        let t = self.inertia.tick(now);
        if let Some(ev) = t.event {
            let _ = surface.on_pan(&ev);
        }
        InputResponse {
            consume: false,
            tick_in: t.next_in,
        }
    }

    fn deliver_zoom<S: Surface>(&mut self, surface: &mut S, ev: &PinchEvent) -> bool {
        if !surface.on_pinch(ev) {
            return false;
        }
        let anchor = ev.position.page;
        match propose(surface.scale(), ev.dr, anchor, surface.origin(), &self.zoom) {
            Some(p) => surface.on_zoom(ev, &p),
            None => false,
        }
    }
}
