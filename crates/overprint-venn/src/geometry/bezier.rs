//! Circle approximation with cubic Bezier curves
//!
//! A circle is drawn as four quarter arcs. Think of the cardinal points as
//! the 12, 3, 6 and 9 o'clock positions on an analog clock: the path starts
//! at 12 o'clock and runs clockwise back to it. Each arc's control points sit
//! on the tangents at its end points, `BEZIER_CIRCLE_KAPPA * radius` away.

use crate::constants::BEZIER_CIRCLE_KAPPA;
use crate::types::{Point, Result, VennError, require_positive};

use super::CubicSegment;

/// Number of quarter arcs in a circle approximation
pub const CIRCLE_SEGMENTS: usize = 4;

/// A closed path of four cubic segments approximating a circle
#[derive(Debug, Clone, PartialEq)]
pub struct CircleApproximation {
    center: Point,
    radius: f64,
    start: Point,
    segments: [CubicSegment; CIRCLE_SEGMENTS],
}

impl CircleApproximation {
    /// Center of the approximated circle
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius of the approximated circle
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Move-to point (12 o'clock)
    pub fn start(&self) -> Point {
        self.start
    }

    /// The quarter arcs in drawing order
    pub fn segments(&self) -> &[CubicSegment; CIRCLE_SEGMENTS] {
        &self.segments
    }

    /// End point of the last segment
    pub fn end(&self) -> Point {
        self.segments[CIRCLE_SEGMENTS - 1].end
    }

    /// Start point of each segment paired with the segment itself
    pub fn arcs(&self) -> impl Iterator<Item = (Point, &CubicSegment)> {
        let starts = std::iter::once(self.start).chain(self.segments.iter().map(|s| s.end));
        starts.zip(self.segments.iter())
    }

    /// Largest distance between the path and the true circle, sampled
    /// `samples_per_segment` times along each arc.
    pub fn max_radial_error(&self, samples_per_segment: usize) -> f64 {
        let samples = samples_per_segment.max(1);
        self.arcs()
            .flat_map(|(start, segment)| {
                (0..=samples).map(move |i| segment.point_at(start, i as f64 / samples as f64))
            })
            .map(|p| (p.distance_to(self.center) - self.radius).abs())
            .fold(0.0, f64::max)
    }
}

/// Approximate the circle around `center` with four cubic Bezier curves.
///
/// Fails with `InvalidDimension` when `radius` is not a positive finite number
/// or when any point of the path falls outside the finite f64 range.
pub fn approximate_circle(center: Point, radius: f64) -> Result<CircleApproximation> {
    require_positive("circle radius", radius)?;
    if !center.is_finite() {
        return Err(VennError::InvalidDimension(format!(
            "circle center must be finite, got ({}, {})",
            center.x, center.y
        )));
    }

    let top = center.offset(0.0, radius);
    let right = center.offset(radius, 0.0);
    let bottom = center.offset(0.0, -radius);
    let left = center.offset(-radius, 0.0);

    let k = radius * BEZIER_CIRCLE_KAPPA;

    let segments = [
        // 12 -> 3 o'clock
        CubicSegment {
            control1: top.offset(k, 0.0),
            control2: right.offset(0.0, k),
            end: right,
        },
        // 3 -> 6 o'clock
        CubicSegment {
            control1: right.offset(0.0, -k),
            control2: bottom.offset(k, 0.0),
            end: bottom,
        },
        // 6 -> 9 o'clock
        CubicSegment {
            control1: bottom.offset(-k, 0.0),
            control2: left.offset(0.0, -k),
            end: left,
        },
        // 9 -> 12 o'clock
        CubicSegment {
            control1: left.offset(0.0, k),
            control2: top.offset(-k, 0.0),
            end: top,
        },
    ];

    let overflowed = segments
        .iter()
        .any(|s| !(s.control1.is_finite() && s.control2.is_finite() && s.end.is_finite()));
    if overflowed {
        return Err(VennError::InvalidDimension(format!(
            "circle at ({}, {}) with radius {} exceeds the representable range",
            center.x, center.y, radius
        )));
    }

    Ok(CircleApproximation {
        center,
        radius,
        start: top,
        segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_circle_control_points() {
        let circle = approximate_circle(Point::new(0.0, 0.0), 1.0).unwrap();
        let k = BEZIER_CIRCLE_KAPPA;

        assert_eq!(circle.start(), Point::new(0.0, 1.0));
        let first = circle.segments()[0];
        assert_eq!(first.control1, Point::new(k, 1.0));
        assert_eq!(first.control2, Point::new(1.0, k));
        assert_eq!(first.end, Point::new(1.0, 0.0));
    }

    #[test]
    fn test_arcs_chain_start_points() {
        let circle = approximate_circle(Point::new(10.0, 20.0), 5.0).unwrap();
        let starts: Vec<Point> = circle.arcs().map(|(start, _)| start).collect();

        assert_eq!(
            starts,
            vec![
                Point::new(10.0, 25.0),
                Point::new(15.0, 20.0),
                Point::new(10.0, 15.0),
                Point::new(5.0, 20.0),
            ]
        );
    }
}
