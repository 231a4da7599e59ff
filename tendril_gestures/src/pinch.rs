// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch recognition: two-point distance tracking, plus wheel-as-pinch.
//!
//! ## State machine
//!
//! `Idle → Tracking → Idle`. Tracking begins when exactly two points make
//! contact; each two-point move emits a [`PinchEvent`] whose `dr` is the
//! signed change in inter-point distance scaled by the pinch speed, and whose
//! position is the midpoint of all four contributing points (current and
//! previous pairs). Gaining or losing a point cancels tracking outright — it
//! never degrades into a pan; surfaces that want that run both recognizers on
//! the same stream.
//!
//! ## Virtual pinch
//!
//! Wheel input with a qualifying modifier chord is reinterpreted as a pinch:
//! `dr = −delta_y · unit_scale`, where `unit_scale` converts the wheel's
//! reported unit (pixel, line, page) to pixels via configured constants. The
//! sign is inverted so scrolling up zooms in. Wheel deltas bypass the pinch
//! speed multiplier; they are already pixel-calibrated.

use crate::config::{CoordSpace, GestureConfig};
use crate::events::PinchEvent;
use crate::modifiers::Modifiers;
use crate::sample::{PointPair, SurfacePoint};

/// Unit of a wheel event's reported delta.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum WheelDeltaUnit {
    /// Delta is in pixels.
    Pixel,
    /// Delta is in text lines.
    Line,
    /// Delta is in pages.
    Page,
}

/// Two-point distance-tracking state machine.
#[derive(Clone, Debug)]
pub struct PinchRecognizer {
    config: GestureConfig,
    pair: Option<PointPair>,
}

impl PinchRecognizer {
    /// Create a recognizer; the configuration is fixed for its lifetime.
    pub fn new(config: GestureConfig) -> Self {
        Self { config, pair: None }
    }

    /// Whether a two-point gesture is being tracked.
    pub fn is_tracking(&self) -> bool {
        self.pair.is_some()
    }

    /// Contact began. Arms tracking only for exactly two points; point
    /// identity (index order) is the caller's to keep stable.
    pub fn press_start(&mut self, points: &[SurfacePoint]) {
        self.pair = PointPair::from_points(points);
    }

    /// A move sample arrived. Emits a radius delta for a two-point move while
    /// tracking; any other point count cancels tracking.
    pub fn pointer_move(
        &mut self,
        points: &[SurfacePoint],
        modifiers: Modifiers,
    ) -> Option<PinchEvent> {
        let Some(now) = PointPair::from_points(points) else {
            self.pair = None;
            return None;
        };
        let prev = self.pair?;
        // Span is measured in screen space: absolute distances are immune to
        // the surface's own scroll and zoom changing under the gesture.
        let dr =
            (now.span(CoordSpace::Screen) - prev.span(CoordSpace::Screen)) * self.config.pinch_speed;
        let position = now.midpoint4(&prev);
        self.pair = Some(now);
        Some(PinchEvent {
            position,
            dr,
            modifiers,
        })
    }

    /// Contact ended. Clears tracking, emits nothing.
    pub fn release(&mut self) {
        self.pair = None;
    }

    /// The input was interrupted. Clears tracking. Idempotent.
    pub fn cancel(&mut self) {
        self.pair = None;
    }

    /// Wheel input, possibly a virtual pinch.
    ///
    /// Returns an event only when the held modifiers are exactly one of the
    /// configured wheel-zoom chord. Stateless with respect to tracking.
    pub fn wheel(
        &self,
        delta_y: f64,
        unit: WheelDeltaUnit,
        position: SurfacePoint,
        modifiers: Modifiers,
    ) -> Option<PinchEvent> {
        if !modifiers.is_one_of(self.config.wheel_zoom_modifiers) {
            return None;
        }
        let unit_scale = match unit {
            WheelDeltaUnit::Pixel => 1.0,
            WheelDeltaUnit::Line => self.config.pixels_per_line,
            WheelDeltaUnit::Page => self.config.pixels_per_page,
        };
        Some(PinchEvent {
            position,
            dr: -delta_y * unit_scale,
            modifiers,
        })
    }
}
