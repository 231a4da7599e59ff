// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tendril Gestures: deterministic recognizers for tap, pan, and pinch.
//!
//! ## Overview
//!
//! This crate classifies raw pointer/touch samples into discrete gesture
//! events. It is the core of a manipulation engine for an interactive surface:
//!
//! - [`tap::TapRecognizer`]: single-point press/release; emits a tap when the
//!   press never wandered past a travel threshold.
//! - [`pan::PanRecognizer`]: single-point drag; emits incremental
//!   [`PanEvent`](events::PanEvent) deltas, optionally gated behind a commit
//!   threshold so a tap candidate does not leak pan noise.
//! - [`inertia::InertiaSimulator`]: continues a pan after release with
//!   geometric velocity decay at a fixed tick rate.
//! - [`pinch::PinchRecognizer`]: two-point distance tracking; emits signed
//!   radius deltas, and reinterprets modifier-qualified wheel input as a
//!   virtual pinch.
//!
//! The crate performs no hit testing, no rendering, and owns no timers.
//! All timestamps are caller-supplied milliseconds on a monotonic clock, so
//! every component — including inertia — is replayable with a fake clock.
//!
//! ## Inputs
//!
//! Feed each recognizer [`SurfacePoint`](sample::SurfacePoint) values: one raw
//! input point carrying its coordinates in the client, offset, page, and screen
//! spaces simultaneously. Point count (1 or 2) decides which recognizers can
//! engage; the recognizers are independent and may run side by side on the same
//! input stream.
//!
//! ## Error model
//!
//! Gesture input is noisy, so nothing here errors: a malformed sample (zero
//! points, non-positive elapsed time, wrong point count) is silently skipped
//! and no event is emitted.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::Point;
//! use tendril_gestures::{GestureConfig, Modifiers, PanRecognizer, PointerSource, SurfacePoint};
//!
//! let config = GestureConfig::default();
//! let mut pan = PanRecognizer::new(config);
//!
//! let p0 = [SurfacePoint::uniform(Point::new(10.0, 10.0))];
//! pan.press_start(&p0, Modifiers::empty(), 0.0, PointerSource::Touch);
//!
//! let p1 = [SurfacePoint::uniform(Point::new(14.0, 10.0))];
//! let ev = pan
//!     .pointer_move(&p1, Modifiers::empty(), 16.0, PointerSource::Touch)
//!     .unwrap();
//! assert_eq!(ev.dx, 4.0 * config.pan_speed);
//! assert_eq!(ev.dt, 16.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod events;
pub mod inertia;
pub mod modifiers;
pub mod pan;
pub mod pinch;
pub mod sample;
pub mod tap;

pub use config::{CoordSpace, GestureConfig};
pub use events::{PanEvent, PinchEvent, TapEvent};
pub use inertia::{InertiaSimulator, InertiaTick};
pub use modifiers::Modifiers;
pub use pan::{PanRecognizer, PointerSource};
pub use pinch::{PinchRecognizer, WheelDeltaUnit};
pub use sample::{PointPair, Sample, SurfacePoint};
pub use tap::TapRecognizer;
