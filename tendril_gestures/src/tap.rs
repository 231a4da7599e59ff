// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap recognition: a press that releases without wandering.
//!
//! ## State machine
//!
//! `Idle → Pressed → Idle`, emitting a [`TapEvent`] on release only when the
//! press's travel stayed within the tap threshold. Travel is the running
//! *maximum* distance from the press origin, not a path sum, so a gesture that
//! wanders and returns does not falsely accumulate.

use crate::config::GestureConfig;
use crate::events::TapEvent;
use crate::modifiers::Modifiers;
use crate::sample::SurfacePoint;

#[derive(Copy, Clone, Debug)]
struct Pressed {
    origin: SurfacePoint,
    last: SurfacePoint,
    travel: f64,
}

/// Single-point press/release state machine.
#[derive(Clone, Debug)]
pub struct TapRecognizer {
    config: GestureConfig,
    pressed: Option<Pressed>,
}

impl TapRecognizer {
    /// Create a recognizer; the configuration is fixed for its lifetime.
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            pressed: None,
        }
    }

    /// Whether a press is currently being tracked.
    pub fn is_pressed(&self) -> bool {
        self.pressed.is_some()
    }

    /// A press began. Only a single-point press arms tap recognition; any
    /// other point count disqualifies an in-flight candidate (a second touch
    /// is ambiguous with pinch).
    pub fn press_start(&mut self, points: &[SurfacePoint], _modifiers: Modifiers, _timestamp: f64) {
        match SurfacePoint::averaged(points) {
            Some(origin) if points.len() == 1 => {
                self.pressed = Some(Pressed {
                    origin,
                    last: origin,
                    travel: 0.0,
                });
            }
            _ => self.pressed = None,
        }
    }

    /// A move sample arrived. Updates the running maximum travel; a point
    /// count other than 1 disqualifies the candidate.
    pub fn pointer_move(&mut self, points: &[SurfacePoint]) {
        if points.len() != 1 {
            self.pressed = None;
            return;
        }
        let Some(now) = SurfacePoint::averaged(points) else {
            return;
        };
        if let Some(p) = &mut self.pressed {
            let space = self.config.delta_space;
            let dist = p.origin.get(space).distance(now.get(space));
            p.travel = p.travel.max(dist);
            p.last = now;
        }
    }

    /// The press released. Emits a tap at the last sampled position when the
    /// travel stayed within the threshold; clears state either way.
    pub fn release(&mut self, modifiers: Modifiers) -> Option<TapEvent> {
        let p = self.pressed.take()?;
        (p.travel <= self.config.tap_threshold).then_some(TapEvent {
            position: p.last,
            modifiers,
        })
    }

    /// The input was interrupted. Clears state, emits nothing. Idempotent.
    pub fn cancel(&mut self) {
        self.pressed = None;
    }
}
