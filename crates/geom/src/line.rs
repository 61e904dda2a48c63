use crate::segment::{FixedStep, Segment};
use crate::utils::step_count;
use crate::{Point, Vector};

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

impl LineSegment {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: f64) -> Point {
        self.from.lerp(self.to, t)
    }

    #[inline]
    pub fn to_vector(&self) -> Vector {
        self.to - self.from
    }

    /// Computes the length of this segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.to_vector().length()
    }

    #[inline]
    pub fn is_a_point(&self) -> bool {
        self.from == self.to
    }

    /// Number of intervals used by the interpolator.
    ///
    /// Zero for a degenerate segment, at least one otherwise.
    pub fn num_steps(&self, density: f64) -> usize {
        if self.is_a_point() {
            return 0;
        }

        step_count(self.length(), density, 1)
    }

    /// Evenly spaced points from `from` to `to`, both included.
    pub fn interpolated(&self, density: f64) -> FixedStep<Self> {
        FixedStep::new(*self, self.num_steps(density))
    }
}

impl Segment for LineSegment {
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

/// Interpolate points between two positions.
///
/// Returns a single point if `from == to`. Otherwise returns
/// `max(1, floor(distance / density)) + 1` evenly spaced points, the first one
/// being exactly `from` and the last one exactly `to`.
///
/// ## Example
///
/// ```
/// use svg_points_geom::{interpolate, point};
///
/// let points = interpolate(point(0.0, 0.0), point(10.0, 0.0), 2.5);
/// assert_eq!(points.len(), 5);
/// assert_eq!(points[4], point(10.0, 0.0));
/// ```
pub fn interpolate(from: Point, to: Point, density: f64) -> Vec<Point> {
    LineSegment { from, to }.interpolated(density).collect()
}

#[cfg(test)]
use crate::point;

#[test]
fn interpolate_same_point() {
    for density in &[0.001, 0.5, 1.0, 1000.0] {
        let p = point(3.5, -2.0);
        assert_eq!(interpolate(p, p, *density), vec![p]);
    }
}

#[test]
fn interpolate_exact_endpoints() {
    let from = point(0.1, 0.7);
    let to = point(33.3, -12.9);
    for density in &[0.01, 0.3, 1.0, 7.0, 1000.0] {
        let points = interpolate(from, to, *density);
        assert!(points.len() >= 2);
        assert_eq!(points[0], from);
        assert_eq!(*points.last().unwrap(), to);
    }
}

#[test]
fn interpolate_spacing() {
    let points = interpolate(point(0.0, 0.0), point(0.0, 10.0), 3.0);
    // floor(10 / 3) = 3 intervals.
    assert_eq!(points.len(), 4);
    let step = 10.0 / 3.0;
    for (i, p) in points.iter().enumerate() {
        assert!((p.y - step * i as f64).abs() < 1e-9);
        assert_eq!(p.x, 0.0);
    }
}

#[test]
fn interpolate_coarse_density() {
    // Density larger than the segment still keeps both endpoints.
    let points = interpolate(point(0.0, 0.0), point(1.0, 1.0), 100.0);
    assert_eq!(points, vec![point(0.0, 0.0), point(1.0, 1.0)]);
}

#[test]
fn finer_density_never_reduces_points() {
    let segment = LineSegment {
        from: point(-4.0, 2.0),
        to: point(17.0, 9.0),
    };
    let mut prev = 0;
    for density in &[10.0, 5.0, 2.0, 1.0, 0.5, 0.1] {
        let n = segment.interpolated(*density).count();
        assert!(n >= prev);
        prev = n;
    }
}
