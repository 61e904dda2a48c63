use crate::segment::Segment;
use crate::utils::step_count;
use crate::{LineSegment, Point};

/// A 2d curve segment defined by three points: the beginning of the segment, a control
/// point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment {
    pub from: Point,
    pub ctrl: Point,
    pub to: Point,
}

impl QuadraticBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f64) -> Point {
        let t2 = t * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;

        self.from * one_t2 + self.ctrl.to_vector() * 2.0 * one_t * t + self.to.to_vector() * t2
    }

    #[inline]
    pub fn baseline(&self) -> LineSegment {
        LineSegment {
            from: self.from,
            to: self.to,
        }
    }

    /// `max(2, floor(chord / density))`.
    pub fn num_steps(&self, density: f64) -> usize {
        step_count(self.baseline().length(), density, 2)
    }
}

impl Segment for QuadraticBezierSegment {
    fn from(&self) -> Point {
        self.from
    }

    fn to(&self) -> Point {
        self.to
    }

    fn sample(&self, t: f64) -> Point {
        self.sample(t)
    }

    fn num_steps(&self, density: f64) -> usize {
        self.num_steps(density)
    }
}

#[cfg(test)]
use crate::point;

#[test]
fn quadratic_flattening_endpoints() {
    let curve = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(50.0, 100.0),
        to: point(100.0, 0.0),
    };

    let points: Vec<Point> = curve.sampled(10.0).collect();
    // floor(100 / 10) = 10 steps.
    assert_eq!(points.len(), 11);
    assert_eq!(points[0], curve.from);
    assert_eq!(points[10], curve.to);
    // The apex of a symmetric parabola.
    assert!((points[5].x - 50.0).abs() < 1e-9);
    assert!((points[5].y - 50.0).abs() < 1e-9);
}

#[test]
fn quadratic_minimum_steps() {
    let curve = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(0.0, 100.0),
        to: point(0.0, 0.0),
    };

    // A zero chord still produces two steps.
    let points: Vec<Point> = curve.sampled(1.0).collect();
    assert_eq!(points.len(), 3);
    assert_eq!(points[1], point(0.0, 50.0));
}
