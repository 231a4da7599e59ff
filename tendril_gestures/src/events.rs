// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture events emitted by the recognizers.

use crate::modifiers::Modifiers;
use crate::sample::SurfacePoint;

/// A completed tap: press and release with travel under the tap threshold.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TapEvent {
    /// Position of the last sample before release.
    pub position: SurfacePoint,
    /// Modifiers held at release.
    pub modifiers: Modifiers,
}

/// One incremental pan step, real or synthesized by inertia.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanEvent {
    /// Current averaged position.
    pub position: SurfacePoint,
    /// Horizontal delta since the previous sample (or previous inertia tick),
    /// already scaled by the configured pan speed.
    pub dx: f64,
    /// Vertical delta since the previous sample, scaled like `dx`.
    pub dy: f64,
    /// Elapsed milliseconds since the previous sample. Always positive on
    /// emitted events; samples with non-positive elapsed time are skipped.
    pub dt: f64,
    /// Modifiers held at the time of the sample.
    pub modifiers: Modifiers,
}

/// One incremental pinch step: a signed change in inter-point distance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PinchEvent {
    /// Midpoint of the contributing points (for a two-point pinch, the mean of
    /// the current and previous pairs; for a wheel pinch, the cursor).
    pub position: SurfacePoint,
    /// Signed radius delta in pixels, scaled by the configured pinch speed
    /// (or converted from wheel units for a virtual pinch). Positive means
    /// the points moved apart, i.e. zoom in.
    pub dr: f64,
    /// Modifiers held at the time of the sample.
    pub modifiers: Modifiers,
}
