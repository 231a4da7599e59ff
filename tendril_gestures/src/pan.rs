// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan recognition: a single-point drag emitting incremental deltas.
//!
//! ## State machine
//!
//! `Idle → Tracking → Active → Idle`. With the commit gate enabled
//! ([`GestureConfig::pan_commit_gate`]) the recognizer sits in `Tracking`
//! until travel from the press origin exceeds the pan threshold, so a tap
//! candidate emits no pan noise; with the gate disabled (the default) a press
//! goes straight to `Active` and the first move pans.
//!
//! Deltas are measured in the configured coordinate space
//! ([`GestureConfig::delta_space`]), which is fixed for the gesture's
//! lifetime. On release, the last emitted event — renormalized to one inertia
//! tick — is returned as the seed for the inertia simulator.

use crate::config::GestureConfig;
use crate::events::PanEvent;
use crate::modifiers::Modifiers;
use crate::sample::{Sample, SurfacePoint};

/// Kind of pointing device feeding the recognizer.
///
/// Touch pans engage on any single-point press and have the configured pan
/// speed applied; mouse pans are gated behind a modifier chord (a plain mouse
/// press stays free for selection and the like) and move 1:1.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerSource {
    /// Mouse or other indirect pointer.
    Mouse,
    /// Direct touch contact.
    Touch,
}

#[derive(Copy, Clone, Debug)]
enum Phase {
    Idle,
    Tracking {
        origin: Sample,
        last: Sample,
        travel: f64,
        source: PointerSource,
    },
    Active {
        last: Sample,
        last_pan: Option<PanEvent>,
        source: PointerSource,
    },
}

/// Single-point press/drag state machine.
#[derive(Clone, Debug)]
pub struct PanRecognizer {
    config: GestureConfig,
    phase: Phase,
}

impl PanRecognizer {
    /// Create a recognizer; the configuration is fixed for its lifetime.
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
        }
    }

    /// Whether a press is being tracked or actively panning.
    pub fn is_engaged(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Whether the gesture has committed to panning.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active { .. })
    }

    /// A press began. Touch qualifies with exactly one point; mouse qualifies
    /// when the held modifiers are exactly one of the configured chord.
    /// An unqualified press clears any stale state.
    pub fn press_start(
        &mut self,
        points: &[SurfacePoint],
        modifiers: Modifiers,
        timestamp: f64,
        source: PointerSource,
    ) {
        let qualified = match source {
            PointerSource::Touch => points.len() == 1,
            PointerSource::Mouse => modifiers.is_one_of(self.config.mouse_pan_modifiers),
        };
        let sample = Sample::new(points, timestamp);
        self.phase = match (qualified, sample) {
            (true, Some(s)) if self.config.pan_commit_gate => Phase::Tracking {
                origin: s,
                last: s,
                travel: 0.0,
                source,
            },
            (true, Some(s)) => Phase::Active {
                last: s,
                last_pan: None,
                source,
            },
            _ => Phase::Idle,
        };
    }

    /// A move sample arrived. Emits one [`PanEvent`] per sample once the
    /// gesture is active.
    ///
    /// Skipped without effect: samples while idle, touch samples whose point
    /// count is not 1 (state is held; pinch may be running on the same
    /// stream), and samples with non-positive elapsed time.
    pub fn pointer_move(
        &mut self,
        points: &[SurfacePoint],
        modifiers: Modifiers,
        timestamp: f64,
        move_source: PointerSource,
    ) -> Option<PanEvent> {
        if move_source == PointerSource::Touch && points.len() != 1 {
            return None;
        }
        let now = Sample::new(points, timestamp)?;
        match self.phase {
            Phase::Idle => None,
            Phase::Tracking {
                origin,
                last,
                travel,
                source,
            } => {
                if now.timestamp - last.timestamp <= 0.0 {
                    return None;
                }
                let space = self.config.delta_space;
                let travel = travel.max(origin.point.get(space).distance(now.point.get(space)));
                if travel > self.config.pan_threshold {
                    // Commit: the first event's delta spans from the previous
                    // sample, not from the press origin.
                    let ev = self.pan_between(last, now, modifiers, source);
                    self.phase = Phase::Active {
                        last: now,
                        last_pan: Some(ev),
                        source,
                    };
                    Some(ev)
                } else {
                    self.phase = Phase::Tracking {
                        origin,
                        last: now,
                        travel,
                        source,
                    };
                    None
                }
            }
            Phase::Active {
                last,
                last_pan: _,
                source,
            } => {
                if now.timestamp - last.timestamp <= 0.0 {
                    return None;
                }
                let ev = self.pan_between(last, now, modifiers, source);
                self.phase = Phase::Active {
                    last: now,
                    last_pan: Some(ev),
                    source,
                };
                Some(ev)
            }
        }
    }

    /// The press ended. If a pan was active, returns its last event with the
    /// velocity renormalized to one inertia tick, ready to seed the inertia
    /// simulator. Clears state regardless.
    pub fn release(&mut self) -> Option<PanEvent> {
        let phase = core::mem::replace(&mut self.phase, Phase::Idle);
        let Phase::Active {
            last_pan: Some(p), ..
        } = phase
        else {
            return None;
        };
        // Emitted events always have dt > 0, so the division is safe.
        let tick = self.config.inertia_tick_ms;
        let factor = tick / p.dt;
        Some(PanEvent {
            dx: p.dx * factor,
            dy: p.dy * factor,
            dt: tick,
            ..p
        })
    }

    /// The input was interrupted. Clears state without producing an inertia
    /// seed. Idempotent.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    fn pan_between(
        &self,
        prev: Sample,
        now: Sample,
        modifiers: Modifiers,
        source: PointerSource,
    ) -> PanEvent {
        let speed = match source {
            PointerSource::Touch => self.config.pan_speed,
            PointerSource::Mouse => 1.0,
        };
        let space = self.config.delta_space;
        let delta = now.point.get(space) - prev.point.get(space);
        PanEvent {
            position: now.point,
            dx: delta.x * speed,
            dy: delta.y * speed,
            dt: now.timestamp - prev.timestamp,
            modifiers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoordSpace;
    use kurbo::Point;
    use std::vec::Vec;

    fn pt(x: f64, y: f64) -> SurfacePoint {
        SurfacePoint::uniform(Point::new(x, y))
    }

    fn touch_press(pan: &mut PanRecognizer, x: f64, y: f64, t: f64) {
        pan.press_start(&[pt(x, y)], Modifiers::empty(), t, PointerSource::Touch);
    }

    fn touch_move(pan: &mut PanRecognizer, x: f64, y: f64, t: f64) -> Option<PanEvent> {
        pan.pointer_move(&[pt(x, y)], Modifiers::empty(), t, PointerSource::Touch)
    }

    // Ungated config: the first move after a press already pans, scaled by
    // the touch pan speed.
    #[test]
    fn ungated_touch_pan_emits_immediately() {
        let mut pan = PanRecognizer::new(GestureConfig::default());
        touch_press(&mut pan, 0.0, 0.0, 0.0);
        let ev = touch_move(&mut pan, 2.0, -1.0, 16.0).unwrap();
        assert_eq!(ev.dx, 6.0);
        assert_eq!(ev.dy, -3.0);
        assert_eq!(ev.dt, 16.0);
    }

    // Gated config: no events until travel from the origin exceeds the
    // threshold, then exactly one event per move sample.
    #[test]
    fn commit_gate_swallows_sub_threshold_motion() {
        let config = GestureConfig {
            pan_commit_gate: true,
            pan_speed: 1.0,
            ..Default::default()
        };
        let mut pan = PanRecognizer::new(config);
        touch_press(&mut pan, 0.0, 0.0, 0.0);
        assert!(touch_move(&mut pan, 2.0, 0.0, 10.0).is_none());
        assert!(touch_move(&mut pan, 4.0, 0.0, 20.0).is_none());
        assert!(!pan.is_active());
        // Crosses the 5 px threshold; delta spans from the previous sample.
        let ev = touch_move(&mut pan, 7.0, 0.0, 30.0).unwrap();
        assert_eq!(ev.dx, 3.0);
        assert_eq!(ev.dt, 10.0);
        assert!(pan.is_active());
        let mut count = 0;
        for i in 0..5 {
            let t = 40.0 + f64::from(i) * 10.0;
            if touch_move(&mut pan, 8.0 + f64::from(i), 0.0, t).is_some() {
                count += 1;
            }
        }
        assert_eq!(count, 5);
    }

    // A sub-threshold press/release cycle emits no pan events at all.
    #[test]
    fn tap_like_motion_emits_no_pan_when_gated() {
        let config = GestureConfig {
            pan_commit_gate: true,
            ..Default::default()
        };
        let mut pan = PanRecognizer::new(config);
        touch_press(&mut pan, 0.0, 0.0, 0.0);
        let mut events: Vec<PanEvent> = Vec::new();
        events.extend(touch_move(&mut pan, 1.0, 1.0, 10.0));
        events.extend(touch_move(&mut pan, 0.0, 2.0, 20.0));
        assert!(events.is_empty());
        assert!(pan.release().is_none());
    }

    // Non-positive elapsed time: the sample is skipped wholesale, and the next
    // good sample measures its delta from the last accepted one.
    #[test]
    fn zero_dt_sample_is_skipped() {
        let config = GestureConfig {
            pan_speed: 1.0,
            ..Default::default()
        };
        let mut pan = PanRecognizer::new(config);
        touch_press(&mut pan, 0.0, 0.0, 100.0);
        assert!(touch_move(&mut pan, 5.0, 0.0, 100.0).is_none());
        assert!(touch_move(&mut pan, 5.0, 0.0, 90.0).is_none());
        let ev = touch_move(&mut pan, 5.0, 0.0, 110.0).unwrap();
        assert_eq!(ev.dx, 5.0);
        assert_eq!(ev.dt, 10.0);
    }

    #[test]
    fn mouse_pan_requires_modifier_chord() {
        let mut pan = PanRecognizer::new(GestureConfig::default());
        pan.press_start(&[pt(0.0, 0.0)], Modifiers::empty(), 0.0, PointerSource::Mouse);
        assert!(!pan.is_engaged());

        pan.press_start(&[pt(0.0, 0.0)], Modifiers::CTRL, 0.0, PointerSource::Mouse);
        assert!(pan.is_engaged());
        // Mouse deltas are 1:1 regardless of the touch pan speed.
        let ev = pan
            .pointer_move(&[pt(4.0, 0.0)], Modifiers::CTRL, 10.0, PointerSource::Mouse)
            .unwrap();
        assert_eq!(ev.dx, 4.0);

        // A combined chord does not qualify.
        pan.press_start(
            &[pt(0.0, 0.0)],
            Modifiers::CTRL | Modifiers::SHIFT,
            0.0,
            PointerSource::Mouse,
        );
        assert!(!pan.is_engaged());
    }

    // A second touch point holds pan state rather than cancelling: the pinch
    // recognizer owns two-point streams, and pan resumes when back to one.
    #[test]
    fn two_point_sample_holds_state() {
        let config = GestureConfig {
            pan_speed: 1.0,
            ..Default::default()
        };
        let mut pan = PanRecognizer::new(config);
        touch_press(&mut pan, 0.0, 0.0, 0.0);
        assert!(
            pan.pointer_move(
                &[pt(5.0, 0.0), pt(50.0, 0.0)],
                Modifiers::empty(),
                10.0,
                PointerSource::Touch,
            )
            .is_none()
        );
        let ev = touch_move(&mut pan, 3.0, 0.0, 20.0).unwrap();
        assert_eq!(ev.dx, 3.0);
        assert_eq!(ev.dt, 20.0);
    }

    // Release renormalizes the last delta to one inertia tick.
    #[test]
    fn release_returns_tick_normalized_seed() {
        let config = GestureConfig {
            pan_speed: 1.0,
            ..Default::default()
        };
        let mut pan = PanRecognizer::new(config);
        touch_press(&mut pan, 0.0, 0.0, 0.0);
        let _ = touch_move(&mut pan, 30.0, -15.0, 30.0).unwrap();
        let seed = pan.release().unwrap();
        assert_eq!(seed.dx, 10.0);
        assert_eq!(seed.dy, -5.0);
        assert_eq!(seed.dt, config.inertia_tick_ms);
        assert!(!pan.is_engaged());
    }

    #[test]
    fn release_without_motion_yields_no_seed() {
        let mut pan = PanRecognizer::new(GestureConfig::default());
        touch_press(&mut pan, 0.0, 0.0, 0.0);
        assert!(pan.release().is_none());
    }

    #[test]
    fn cancel_clears_without_seed() {
        let mut pan = PanRecognizer::new(GestureConfig::default());
        touch_press(&mut pan, 0.0, 0.0, 0.0);
        let _ = touch_move(&mut pan, 10.0, 0.0, 10.0);
        pan.cancel();
        assert!(pan.release().is_none());
        pan.cancel();
    }

    // The configured delta space decides which coordinates drive the deltas.
    #[test]
    fn delta_space_is_respected() {
        let config = GestureConfig {
            pan_speed: 1.0,
            delta_space: CoordSpace::Page,
            ..Default::default()
        };
        let mut pan = PanRecognizer::new(config);
        let start = SurfacePoint {
            page: Point::new(0.0, 0.0),
            screen: Point::new(100.0, 100.0),
            ..Default::default()
        };
        let moved = SurfacePoint {
            page: Point::new(7.0, 0.0),
            screen: Point::new(100.0, 100.0),
            ..Default::default()
        };
        pan.press_start(&[start], Modifiers::empty(), 0.0, PointerSource::Touch);
        let ev = pan
            .pointer_move(&[moved], Modifiers::empty(), 10.0, PointerSource::Touch)
            .unwrap();
        assert_eq!(ev.dx, 7.0);
        assert_eq!(ev.dy, 0.0);
    }
}
