//! Fit point sequences into a given size.

use crate::aabb::bounding_box;
use crate::math::{Box2D, Point, Size};

/// Uniform scale factor fitting `aabb` into `size` without overflow.
///
/// Returns `None` if the box has a zero width or height.
pub fn fit_scale(aabb: &Box2D, size: Size) -> Option<f64> {
    let (w, h) = (aabb.width(), aabb.height());
    if w == 0.0 || h == 0.0 {
        return None;
    }

    Some(f64::min(size.width / w, size.height / h))
}

/// Moves the bounding box of the points to the origin and scales them
/// uniformly so that it fits in `size`.
///
/// Points are left untouched when their bounding box has a zero width or
/// height. Returns whether the points were changed.
///
/// ## Example
///
/// ```
/// use svg_points_algorithms::fit::normalize_to_size;
/// use svg_points_algorithms::math::{point, size};
///
/// let mut paths = vec![vec![point(10.0, 10.0), point(30.0, 20.0)]];
/// normalize_to_size(&mut paths, size(100.0, 100.0));
///
/// assert_eq!(paths[0], vec![point(0.0, 0.0), point(100.0, 50.0)]);
/// ```
pub fn normalize_to_size<P>(paths: &mut [P], size: Size) -> bool
where
    P: AsRef<[Point]> + AsMut<[Point]>,
{
    let aabb = bounding_box(paths.iter());
    let scale = match fit_scale(&aabb, size) {
        Some(scale) => scale,
        None => {
            return false;
        }
    };

    for path in paths.iter_mut() {
        normalize_points(path.as_mut(), &aabb, scale);
    }

    true
}

/// `(p - aabb.min) * scale` for each point.
pub fn normalize_points(points: &mut [Point], aabb: &Box2D, scale: f64) {
    for p in points.iter_mut() {
        *p = ((*p - aabb.min) * scale).to_point();
    }
}

#[cfg(test)]
use crate::math::{point, size};

#[test]
fn uniform_scale() {
    let mut paths = vec![
        vec![point(-10.0, 0.0), point(10.0, 0.0)],
        vec![point(0.0, 40.0)],
    ];
    assert!(normalize_to_size(&mut paths, size(10.0, 10.0)));
    // The height constrains the scale.
    assert_eq!(paths[0], vec![point(0.0, 0.0), point(5.0, 0.0)]);
    assert_eq!(paths[1], vec![point(2.5, 10.0)]);
}

#[test]
fn flat_paths_are_not_scaled() {
    let mut paths = vec![vec![point(5.0, 1.0), point(10.0, 1.0)]];
    assert!(!normalize_to_size(&mut paths, size(100.0, 100.0)));
    assert_eq!(paths[0], vec![point(5.0, 1.0), point(10.0, 1.0)]);

    let mut empty: Vec<Vec<Point>> = Vec::new();
    assert!(!normalize_to_size(&mut empty, size(1.0, 1.0)));
}
