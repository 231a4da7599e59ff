// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tendril Surface: wiring between raw input, the recognizers, and a host surface.
//!
//! ## Overview
//!
//! This crate is the adapter layer around the Tendril core. It routes raw
//! input callbacks to the right recognizers by point count, forwards the
//! resulting gesture events to a host-implemented [`Surface`](surface::Surface),
//! and folds the host's synchronous accepted/vetoed feedback into a
//! suppress-default decision for the triggering input.
//!
//! - [`surface::Surface`]: the consumer contract. Each callback returns
//!   whether the proposal was applied; a veto never interrupts gesture
//!   tracking, it only influences default handling.
//! - [`manipulator::Manipulator`]: one surface's bundle of recognizers
//!   (tap, pan, pinch, inertia) plus its zoom configuration.
//! - [`registry::ManipulatorRegistry`]: an explicit handle → manipulator
//!   table for hosts managing several interactive surfaces.
//!
//! ## Timing
//!
//! The manipulator owns no timers. Responses carry an optional
//! `tick_in` delay; the host schedules a call to
//! [`Manipulator::inertia_tick`](manipulator::Manipulator::inertia_tick)
//! after that many milliseconds, passing its own clock. A new press cancels
//! pending inertia synchronously, so gesture events for one surface are
//! strictly ordered by their triggering samples.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::Point;
//! use tendril_gestures::{GestureConfig, Modifiers, PointerSource, SurfacePoint};
//! use tendril_surface::manipulator::Manipulator;
//! use tendril_surface::surface::Surface;
//! use tendril_zoom::{ZoomConfig, ZoomProposal};
//!
//! struct Log(Vec<f64>);
//!
//! impl Surface for Log {
//!     fn scale(&self) -> f64 {
//!         1.0
//!     }
//!     fn origin(&self) -> Point {
//!         Point::ZERO
//!     }
//!     fn on_pan(&mut self, event: &tendril_gestures::PanEvent) -> bool {
//!         self.0.push(event.dx);
//!         true
//!     }
//!     fn on_zoom(&mut self, _: &tendril_gestures::PinchEvent, _: &ZoomProposal) -> bool {
//!         true
//!     }
//! }
//!
//! let mut surface = Log(Vec::new());
//! let mut m = Manipulator::new(GestureConfig::default(), ZoomConfig::default());
//!
//! let p0 = [SurfacePoint::uniform(Point::new(0.0, 0.0))];
//! let p1 = [SurfacePoint::uniform(Point::new(5.0, 0.0))];
//! m.press_start(&p0, Modifiers::empty(), 0.0, PointerSource::Touch);
//! let r = m.pointer_move(&mut surface, &p1, Modifiers::empty(), 16.0, PointerSource::Touch);
//! assert!(r.consume);
//! assert_eq!(surface.0, vec![15.0]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod manipulator;
pub mod registry;
pub mod surface;

pub use manipulator::Manipulator;
pub use registry::ManipulatorRegistry;
pub use surface::{InputResponse, Surface};
