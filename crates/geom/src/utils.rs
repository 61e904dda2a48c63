use crate::Point;

/// Two points closer than this on both axes are considered the same vertex
/// when deciding whether a shape is already closed.
pub const CLOSE_EPSILON: f64 = 0.001;

/// Returns true if `a` and `b` are within `CLOSE_EPSILON` of each other on both
/// axes.
#[inline]
pub fn points_coincide(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() <= CLOSE_EPSILON && (a.y - b.y).abs() <= CLOSE_EPSILON
}

/// `max(min, floor(length / density))`, saturating for huge or infinite
/// ratios. A NaN ratio yields `min`.
#[inline]
pub fn step_count(length: f64, density: f64, min: usize) -> usize {
    // Float to int casts saturate and map NaN to zero.
    ((length / density).floor() as usize).max(min)
}

#[inline]
pub fn is_finite_point(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// L1 (manhattan) distance.
#[inline]
pub fn manhattan_distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[test]
fn step_count_limits() {
    assert_eq!(step_count(10.0, 3.0, 1), 3);
    assert_eq!(step_count(1.0, 3.0, 1), 1);
    assert_eq!(step_count(1.0, 3.0, 2), 2);
    assert_eq!(step_count(1.0, 0.0, 2), usize::MAX);
    assert_eq!(step_count(f64::NAN, 1.0, 4), 4);
}

#[test]
fn coincide_tolerance() {
    use crate::point;
    assert!(points_coincide(point(1.0, 1.0), point(1.0005, 0.9995)));
    assert!(!points_coincide(point(1.0, 1.0), point(1.002, 1.0)));
    assert!(!points_coincide(point(1.0, 1.0), point(1.0, 0.99)));
}
