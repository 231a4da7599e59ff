// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The consumer contract: what a host surface receives and reports back.

use kurbo::Point;
use tendril_gestures::{PanEvent, PinchEvent, TapEvent};
use tendril_zoom::ZoomProposal;

/// A host surface consuming gesture output.
///
/// The boolean returns are synchronous accepted-feedback: `true` means the
/// surface applied the proposal, and the manipulator uses that to decide
/// whether the triggering raw input's default handling should be suppressed.
/// Returning `false` (a veto, or an application that had no effect) never
/// interrupts gesture tracking — internal deltas and positions keep updating
/// so subsequent events remain correct.
pub trait Surface {
    /// Current scale factor of the surface. Owned by the surface; the core
    /// only reads it and proposes changes.
    fn scale(&self) -> f64;

    /// Origin of the surface, in the same (page) coordinate space as the
    /// anchor positions carried by pinch events.
    fn origin(&self) -> Point;

    /// A tap completed.
    fn on_tap(&mut self, event: &TapEvent) {
        let _ = event;
    }

    /// An incremental pan step, real or inertial. Returns whether the
    /// resulting scroll was applied.
    fn on_pan(&mut self, event: &PanEvent) -> bool;

    /// A pinch step, before any zoom proposal is derived from it. Returning
    /// `false` vetoes the zoom for this step. Accepts by default.
    fn on_pinch(&mut self, event: &PinchEvent) -> bool {
        let _ = event;
        true
    }

    /// A zoom proposal derived from a pinch step. Returns whether the scale
    /// change (and its anchor-preserving scroll) was applied.
    fn on_zoom(&mut self, event: &PinchEvent, proposal: &ZoomProposal) -> bool;
}

/// What the host should do with the raw input that triggered a call.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InputResponse {
    /// Suppress the input's default handling (the surface accepted and
    /// applied a gesture derived from it).
    pub consume: bool,
    /// Schedule an inertia tick after this many milliseconds, if set.
    pub tick_in: Option<f64>,
}
