// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tendril Zoom: stateless, anchor-preserving zoom arithmetic.
//!
//! ## Overview
//!
//! This crate maps a pinch radius delta into a clamped scale factor plus the
//! scroll offset that keeps the point under the user's fingers (or cursor)
//! visually stationary — the anchor-preserving zoom invariant. It owns no
//! state: the surface owns its scale and scroll position; [`propose`] only
//! reads the current scale and proposes the next one.
//!
//! - [`propose`]: radius delta → [`ZoomProposal`] (new scale + scroll offset),
//!   or `None` when clamping leaves the scale unchanged.
//! - [`scroll_for_pan`]: pan delta → scroll delta in content coordinates,
//!   or `None` for a zero delta (a zero-delta pan must not trigger a scroll
//!   attempt or a spurious scroll-failed signal).
//!
//! ## Sensitivity
//!
//! The proposal computes `factor = dr · zoom_per_pixel · current_scale`:
//! scaling the sensitivity by the current scale keeps the *perceived* zoom
//! speed constant at any zoom level.
//!
//! ## Preconditions
//!
//! Scales and configuration bounds are assumed finite and positive (no NaN),
//! with `zoom_min <= zoom_max`.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::Point;
//! use tendril_zoom::{ZoomConfig, propose};
//!
//! // Wheel up by 100 px at default sensitivity: scale 1.0 → 1.1.
//! let config = ZoomConfig::default();
//! let p = propose(1.0, 100.0, Point::new(0.0, 0.0), Point::new(0.0, 0.0), &config).unwrap();
//! assert!((p.new_scale - 1.1).abs() < 1e-12);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate std;

use kurbo::{Point, Vec2};

/// Zoom bounds and sensitivity for one surface.
///
/// Applied once at construction of the surface's manipulation stack and
/// treated as immutable thereafter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Lower scale bound. Default `0.01`.
    pub zoom_min: f64,
    /// Upper scale bound. Default unbounded.
    pub zoom_max: f64,
    /// Scale change per pixel of radius delta, before the current-scale
    /// compensation. Default `0.001`.
    pub zoom_per_pixel: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            zoom_min: 0.01,
            zoom_max: f64::INFINITY,
            zoom_per_pixel: 0.001,
        }
    }
}

/// A proposed scale change together with its anchor-preserving scroll offset.
///
/// The surface decides whether to apply it; the proposal itself mutates
/// nothing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoomProposal {
    /// The clamped scale to switch to. Never equal to the scale it was
    /// proposed against.
    pub new_scale: f64,
    /// Scroll delta, in content coordinates at the *old* scale, that keeps
    /// the anchor point visually stationary across the scale change.
    pub scroll_by: Vec2,
}

/// Map a radius delta to a clamped scale proposal.
///
/// `anchor` is the on-surface point to hold stationary (typically the pinch
/// midpoint or wheel cursor, in page coordinates) and `origin` the surface's
/// origin in the same space. Returns `None` when the clamped scale equals
/// `current_scale` — nothing to do, not a failure.
///
/// For any applied proposal the invariant
/// `(anchor − origin) / current_scale == (anchor − origin′) / new_scale`
/// holds exactly per axis, where `origin′` is the origin after the surface
/// scrolls by `scroll_by` at the new scale.
pub fn propose(
    current_scale: f64,
    dr: f64,
    anchor: Point,
    origin: Point,
    config: &ZoomConfig,
) -> Option<ZoomProposal> {
    let factor = dr * config.zoom_per_pixel * current_scale;
    let new_scale = (current_scale + factor).clamp(config.zoom_min, config.zoom_max);
    if new_scale == current_scale {
        return None;
    }
    let ratio = (new_scale - current_scale) / new_scale;
    let scroll_by = Vec2::new(
        (anchor.x - origin.x) / current_scale * ratio,
        (anchor.y - origin.y) / current_scale * ratio,
    );
    Some(ZoomProposal {
        new_scale,
        scroll_by,
    })
}

/// Map a pan delta to the scroll delta it should produce, in content
/// coordinates at the current scale.
///
/// Returns `None` for a zero delta so that an idle pan sample never turns
/// into a scroll attempt. The sign is inverted: dragging content rightwards
/// scrolls the viewport leftwards.
pub fn scroll_for_pan(dx: f64, dy: f64, current_scale: f64) -> Option<Vec2> {
    if dx == 0.0 && dy == 0.0 {
        return None;
    }
    Some(Vec2::new(-dx / current_scale, -dy / current_scale))
}
