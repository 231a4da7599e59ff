// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position sampling: raw input points reduced to averaged samples and pairs.
//!
//! A raw input point carries its coordinates in several spaces at once because
//! different consumers need different ones: deltas are usually measured in
//! screen or page space, while zoom anchoring wants page coordinates relative
//! to the surface. [`SurfacePoint`] keeps all four; [`Sample`] adds the
//! monotonic timestamp a recognizer needs for velocity.

use kurbo::Point;

use crate::config::CoordSpace;

/// One raw input point, in all four coordinate spaces simultaneously.
///
/// Hosts that only track a single space can populate the others with the same
/// value (see [`SurfacePoint::uniform`]); the recognizers never mix spaces, so
/// the unused ones are inert.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SurfacePoint {
    /// Position relative to the visible viewport.
    pub client: Point,
    /// Position relative to the padding edge of the target surface.
    pub offset: Point,
    /// Position relative to the whole document/content.
    pub page: Point,
    /// Position in absolute device/screen coordinates.
    pub screen: Point,
}

impl SurfacePoint {
    /// A point with the same coordinates in every space.
    ///
    /// Convenient for hosts without distinct spaces, and for tests.
    pub fn uniform(p: Point) -> Self {
        Self {
            client: p,
            offset: p,
            page: p,
            screen: p,
        }
    }

    /// The coordinates of this point in the given space.
    pub fn get(&self, space: CoordSpace) -> Point {
        match space {
            CoordSpace::Client => self.client,
            CoordSpace::Offset => self.offset,
            CoordSpace::Page => self.page,
            CoordSpace::Screen => self.screen,
        }
    }

    /// Arithmetic mean of a set of points, per axis and per space.
    ///
    /// Returns `None` for an empty slice (a malformed sample; callers skip it).
    pub fn averaged(points: &[Self]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let mut sum = Self::default();
        for p in points {
            sum.client += p.client.to_vec2();
            sum.offset += p.offset.to_vec2();
            sum.page += p.page.to_vec2();
            sum.screen += p.screen.to_vec2();
        }
        Some(Self {
            client: (sum.client.to_vec2() / n).to_point(),
            offset: (sum.offset.to_vec2() / n).to_point(),
            page: (sum.page.to_vec2() / n).to_point(),
            screen: (sum.screen.to_vec2() / n).to_point(),
        })
    }
}

/// A single averaged position with its timestamp, immutable once taken.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample {
    /// Averaged position across all contributing points.
    pub point: SurfacePoint,
    /// Monotonic timestamp in milliseconds.
    pub timestamp: f64,
}

impl Sample {
    /// Reduce one or more simultaneous input points to a single sample.
    ///
    /// Returns `None` for an empty slice.
    pub fn new(points: &[SurfacePoint], timestamp: f64) -> Option<Self> {
        Some(Self {
            point: SurfacePoint::averaged(points)?,
            timestamp,
        })
    }
}

/// Exactly two simultaneous points, index-stable for a gesture's lifetime.
///
/// The caller supplies the order; keeping point 0 and point 1 stable across
/// moves is what makes the radius delta meaningful. A pair whose identities
/// were reassigned mid-gesture would corrupt the delta, which is why the
/// pinch recognizer cancels on any point-count change instead of re-pairing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointPair {
    /// Point 0.
    pub a: SurfacePoint,
    /// Point 1.
    pub b: SurfacePoint,
}

impl PointPair {
    /// Build a pair from a slice of exactly two points.
    pub fn from_points(points: &[SurfacePoint]) -> Option<Self> {
        match points {
            [a, b] => Some(Self { a: *a, b: *b }),
            _ => None,
        }
    }

    /// Distance between the two points, measured in the given space.
    pub fn span(&self, space: CoordSpace) -> f64 {
        self.a.get(space).distance(self.b.get(space))
    }

    /// Midpoint across all four contributing points of this pair and a
    /// previous pair, per axis and per space.
    ///
    /// This is the position a pinch event reports: averaging over both the
    /// current and previous pairs smooths out per-frame touch jitter.
    pub fn midpoint4(&self, prev: &Self) -> SurfacePoint {
        // Unwrap is fine: the slice is never empty.
        SurfacePoint::averaged(&[self.a, self.b, prev.a, prev.b]).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> SurfacePoint {
        SurfacePoint::uniform(Point::new(x, y))
    }

    #[test]
    fn averaged_of_empty_is_none() {
        assert!(SurfacePoint::averaged(&[]).is_none());
        assert!(Sample::new(&[], 0.0).is_none());
    }

    #[test]
    fn averaged_is_identity_for_one_point() {
        let p = pt(3.0, 4.0);
        assert_eq!(SurfacePoint::averaged(&[p]), Some(p));
    }

    // Each space is averaged independently.
    #[test]
    fn averaged_is_per_space() {
        let a = SurfacePoint {
            client: Point::new(0.0, 0.0),
            offset: Point::new(10.0, 0.0),
            page: Point::new(0.0, 10.0),
            screen: Point::new(100.0, 100.0),
        };
        let b = SurfacePoint {
            client: Point::new(2.0, 4.0),
            offset: Point::new(0.0, 2.0),
            page: Point::new(4.0, 0.0),
            screen: Point::new(200.0, 300.0),
        };
        let avg = SurfacePoint::averaged(&[a, b]).unwrap();
        assert_eq!(avg.client, Point::new(1.0, 2.0));
        assert_eq!(avg.offset, Point::new(5.0, 1.0));
        assert_eq!(avg.page, Point::new(2.0, 5.0));
        assert_eq!(avg.screen, Point::new(150.0, 200.0));
    }

    #[test]
    fn pair_requires_exactly_two_points() {
        assert!(PointPair::from_points(&[pt(0.0, 0.0)]).is_none());
        assert!(PointPair::from_points(&[pt(0.0, 0.0), pt(1.0, 1.0)]).is_some());
        assert!(PointPair::from_points(&[pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0)]).is_none());
    }

    #[test]
    fn span_is_euclidean_distance() {
        let pair = PointPair {
            a: pt(0.0, 0.0),
            b: pt(3.0, 4.0),
        };
        assert_eq!(pair.span(CoordSpace::Screen), 5.0);
    }

    // Midpoint averages the four contributing points, not just the current two.
    #[test]
    fn midpoint4_spans_both_pairs() {
        let prev = PointPair {
            a: pt(0.0, 0.0),
            b: pt(4.0, 0.0),
        };
        let now = PointPair {
            a: pt(0.0, 8.0),
            b: pt(4.0, 8.0),
        };
        let mid = now.midpoint4(&prev);
        assert_eq!(mid.screen, Point::new(2.0, 4.0));
    }
}
