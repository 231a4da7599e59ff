// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-surface gesture configuration with documented defaults.
//!
//! A [`GestureConfig`] is handed to each recognizer at construction and treated
//! as immutable afterwards; there is no live-reconfiguration contract. Every
//! field has an explicit default so hosts only override what they tune.

use crate::modifiers::Modifiers;

/// Coordinate space used when measuring deltas and travel distances.
///
/// The chosen space is used consistently for a whole gesture; mixing spaces
/// mid-gesture under zoom or scroll produces incorrect deltas.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum CoordSpace {
    /// Viewport-relative coordinates.
    Client,
    /// Coordinates relative to the target surface's padding edge.
    Offset,
    /// Document/content coordinates.
    Page,
    /// Absolute device/screen coordinates.
    #[default]
    Screen,
}

/// Tunable knobs for the recognizers attached to one surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureConfig {
    /// Maximum travel (px) for a press to still count as a tap. Default `10.0`.
    pub tap_threshold: f64,
    /// Travel (px) a tracked point must exceed before a gated pan commits.
    /// Default `5.0`.
    pub pan_threshold: f64,
    /// Whether panning waits for [`pan_threshold`](Self::pan_threshold) to be
    /// crossed before emitting events. When `false`, panning starts on the
    /// first move after a press. Default `false`.
    pub pan_commit_gate: bool,
    /// Multiplier applied to touch pan deltas. Mouse deltas are always 1:1.
    /// Default `3.0`.
    pub pan_speed: f64,
    /// Single modifiers that gate mouse panning: a mouse press only begins a
    /// pan when the held modifiers equal exactly one of these, leaving plain
    /// mouse presses free for other interactions. Default `CTRL | META`.
    pub mouse_pan_modifiers: Modifiers,
    /// Coordinate space used for pan deltas and travel thresholds.
    /// Default [`CoordSpace::Screen`].
    pub delta_space: CoordSpace,
    /// Multiplier applied to pinch radius deltas. Default `10.0`.
    pub pinch_speed: f64,
    /// Single modifiers that turn wheel input into a virtual pinch.
    /// Default `CTRL | META`.
    pub wheel_zoom_modifiers: Modifiers,
    /// Pixel equivalent of one wheel "line" delta. Default `16.0`.
    pub pixels_per_line: f64,
    /// Pixel equivalent of one wheel "page" delta. Default `800.0`.
    pub pixels_per_page: f64,
    /// Geometric decay factor applied to the inertia delta each tick, in
    /// `(0, 1)`. Default `0.98`.
    pub inertia_decay: f64,
    /// Nominal interval between inertia ticks, in milliseconds. Default `10.0`.
    pub inertia_tick_ms: f64,
    /// Inertia stops once both per-tick deltas drop below this magnitude
    /// (px/tick). Default `1.0`.
    pub inertia_stop: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_threshold: 10.0,
            pan_threshold: 5.0,
            pan_commit_gate: false,
            pan_speed: 3.0,
            mouse_pan_modifiers: Modifiers::CTRL | Modifiers::META,
            delta_space: CoordSpace::default(),
            pinch_speed: 10.0,
            wheel_zoom_modifiers: Modifiers::CTRL | Modifiers::META,
            pixels_per_line: 16.0,
            pixels_per_page: 800.0,
            inertia_decay: 0.98,
            inertia_tick_ms: 10.0,
            inertia_stop: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = GestureConfig::default();
        assert_eq!(c.tap_threshold, 10.0);
        assert_eq!(c.pan_threshold, 5.0);
        assert!(!c.pan_commit_gate);
        assert_eq!(c.pan_speed, 3.0);
        assert_eq!(c.mouse_pan_modifiers, Modifiers::CTRL | Modifiers::META);
        assert_eq!(c.delta_space, CoordSpace::Screen);
        assert_eq!(c.pinch_speed, 10.0);
        assert_eq!(c.inertia_decay, 0.98);
        assert_eq!(c.inertia_tick_ms, 10.0);
        assert_eq!(c.inertia_stop, 1.0);
    }
}
