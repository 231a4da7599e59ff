// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inertia: post-release continuation of a pan via geometric velocity decay.
//!
//! ## Overview
//!
//! When a pan releases, its last event — renormalized so `dx, dy` are the
//! displacement over exactly one tick interval — seeds the simulator. Each
//! tick multiplies the delta by the decay factor and emits a synthetic
//! [`PanEvent`]; once both components drop below the stop threshold the
//! emitted tick is the last and the state clears.
//!
//! ## Scheduling
//!
//! The simulator owns no timer. [`InertiaSimulator::start`] and every
//! [`InertiaSimulator::tick`] return the delay until the next tick; the host
//! schedules it. The delay is jitter-corrected against the actual elapsed
//! wall time since the previous tick (`max(tick_interval − elapsed, 0)`) so
//! scheduler drift does not compound over a long decay sequence. Because all
//! time flows in through arguments, the whole sequence replays under a fake
//! clock.
//!
//! Any new gesture start on the same surface must [`cancel`](InertiaSimulator::cancel)
//! a running sequence; fresh input always preempts decaying state.

use crate::config::GestureConfig;
use crate::events::PanEvent;

#[derive(Copy, Clone, Debug)]
struct Decaying {
    event: PanEvent,
    prev_tick: f64,
}

/// Outcome of one inertia tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InertiaTick {
    /// The synthetic pan step to deliver, if the simulator was running.
    pub event: Option<PanEvent>,
    /// Delay in milliseconds until the next tick should run, or `None` when
    /// the sequence has finished.
    pub next_in: Option<f64>,
}

/// Decaying-velocity timer state for one pan output channel.
#[derive(Clone, Debug)]
pub struct InertiaSimulator {
    decay: f64,
    tick_ms: f64,
    stop: f64,
    state: Option<Decaying>,
}

impl InertiaSimulator {
    /// Create a simulator; the configuration is fixed for its lifetime.
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            decay: config.inertia_decay,
            tick_ms: config.inertia_tick_ms,
            stop: config.inertia_stop,
            state: None,
        }
    }

    /// Whether a decay sequence is currently running.
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Begin a decay sequence from a tick-normalized seed event.
    ///
    /// `now` is the current time; the returned value is the delay until the
    /// first tick (one nominal tick interval). Replaces any running sequence.
    pub fn start(&mut self, seed: PanEvent, now: f64) -> f64 {
        self.state = Some(Decaying {
            event: seed,
            prev_tick: now,
        });
        self.tick_ms
    }

    /// Run one tick at time `now`.
    ///
    /// Decays the stored delta, emits it, and either schedules the next tick
    /// (jitter-corrected) or, when both components have decayed below the
    /// stop threshold, ends the sequence after this final event.
    pub fn tick(&mut self, now: f64) -> InertiaTick {
        let Some(st) = &mut self.state else {
            return InertiaTick {
                event: None,
                next_in: None,
            };
        };
        st.event.dx *= self.decay;
        st.event.dy *= self.decay;
        st.event.dt = self.tick_ms;
        let event = st.event;

        if event.dx.abs() < self.stop && event.dy.abs() < self.stop {
            self.state = None;
            return InertiaTick {
                event: Some(event),
                next_in: None,
            };
        }

        let elapsed = now - st.prev_tick;
        st.prev_tick = now;
        InertiaTick {
            event: Some(event),
            next_in: Some((self.tick_ms - elapsed).max(0.0)),
        }
    }

    /// Stop the sequence immediately. O(1) and idempotent.
    pub fn cancel(&mut self) {
        self.state = None;
    }
}
