use crate::segment::Segment;
use crate::utils::step_count;
use crate::{LineSegment, Point};

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl CubicBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f64) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from * one_t3
            + self.ctrl1.to_vector() * 3.0 * one_t2 * t
            + self.ctrl2.to_vector() * 3.0 * one_t * t2
            + self.to.to_vector() * t3
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

impl Segment for CubicBezierSegment {
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
fn cubic_flattening_endpoints() {
    let curve = CubicBezierSegment {
        from: point(10.0, 10.0),
        ctrl1: point(10.0, 60.0),
        ctrl2: point(60.0, 60.0),
        to: point(60.0, 10.0),
    };

    let points: Vec<Point> = curve.sampled(5.0).collect();
    assert_eq!(points.len(), 11);
    assert_eq!(points[0], curve.from);
    assert_eq!(points[10], curve.to);
    for (i, p) in points.iter().enumerate() {
        let expected = curve.sample(i as f64 / 10.0);
        assert!((p.x - expected.x).abs() < 1e-9);
        assert!((p.y - expected.y).abs() < 1e-9);
    }
}

#[test]
fn cubic_minimum_steps() {
    let curve = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(1.0, 1.0),
        ctrl2: point(2.0, 1.0),
        to: point(3.0, 0.0),
    };

    assert_eq!(curve.num_steps(100.0), 2);
    assert_eq!(curve.sampled(100.0).count(), 3);
}
