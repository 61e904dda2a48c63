//! Bounding rectangle computation for point sequences.

use crate::math::{point, Box2D, Point};

/// Computes the smallest axis-aligned rectangle that contains all points.
///
/// Returns a zero box if there is no point.
pub fn bounding_box<Iter, P>(paths: Iter) -> Box2D
where
    Iter: IntoIterator<Item = P>,
    P: AsRef<[Point]>,
{
    let mut min = point(f64::MAX, f64::MAX);
    let mut max = point(f64::MIN, f64::MIN);

    for path in paths {
        for p in path.as_ref() {
            min = min.min(*p);
            max = max.max(*p);
        }
    }

    // Return an empty rectangle by default if there was no point.
    if min == point(f64::MAX, f64::MAX) {
        return Box2D::zero();
    }

    Box2D { min, max }
}

#[test]
fn simple_bounding_box() {
    let paths = vec![
        vec![point(1.0, 5.0), point(3.0, -2.0)],
        vec![],
        vec![point(-4.0, 0.0)],
    ];
    let aabb = bounding_box(&paths);
    assert_eq!(aabb.min, point(-4.0, -2.0));
    assert_eq!(aabb.max, point(3.0, 5.0));
    assert_eq!(aabb.width(), 7.0);
}

#[test]
fn empty_bounding_box() {
    let paths: Vec<Vec<Point>> = Vec::new();
    assert_eq!(bounding_box(&paths), Box2D::zero());
    assert_eq!(bounding_box(vec![Vec::<Point>::new()]), Box2D::zero());
}
