//! Affine transforms applied to sampled points.
//!
//! Transforms use the SVG coefficient order: `(a, b, c, d, e, f)` maps
//! `(x, y)` to `(a·x + c·y + e, b·x + d·y + f)`, which is euclid's
//! `Transform2D::new(m11, m12, m21, m22, m31, m32)`.

use crate::{Angle, Point, Transform};

/// Build a transform from the six coefficients of an SVG `matrix(a b c d e f)`.
#[inline]
pub fn matrix(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Transform {
    Transform::new(a, b, c, d, e, f)
}

/// A rotation by `angle` around `center`.
///
/// Equivalent to `translate(cx, cy) rotate(angle) translate(-cx, -cy)`.
pub fn rotation_around(angle: Angle, center: Point) -> Transform {
    let (sin, cos) = angle.radians.sin_cos();
    let (cx, cy) = (center.x, center.y);
    let tx = cx - cx * cos + cy * sin;
    let ty = cy - cx * sin - cy * cos;

    matrix(cos, sin, -sin, cos, tx, ty)
}

/// Transform all points in place.
pub fn transform_points(points: &mut [Point], transform: &Transform) {
    for p in points.iter_mut() {
        *p = transform.transform_point(*p);
    }
}

#[cfg(test)]
use crate::point;

#[cfg(test)]
fn assert_close(a: Point, b: Point) {
    assert!((a - b).length() < 1e-9, "{:?} != {:?}", a, b);
}

#[test]
fn matrix_coefficients() {
    let m = matrix(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    // (1·x + 3·y + 5, 2·x + 4·y + 6)
    assert_eq!(m.transform_point(point(1.0, 1.0)), point(9.0, 12.0));
    assert_eq!(m.transform_point(point(0.0, 0.0)), point(5.0, 6.0));
}

#[test]
fn rotation_around_origin() {
    let r = rotation_around(Angle::degrees(90.0), point(0.0, 0.0));
    assert_close(r.transform_point(point(1.0, 0.0)), point(0.0, 1.0));
    assert_close(r.transform_point(point(0.0, 1.0)), point(-1.0, 0.0));
}

#[test]
fn rotation_keeps_pivot() {
    let pivot = point(50.0, 20.0);
    let r = rotation_around(Angle::degrees(37.0), pivot);
    assert_close(r.transform_point(pivot), pivot);
    assert_close(r.transform_point(point(60.0, 20.0)), {
        let a = 37.0f64.to_radians();
        point(50.0 + 10.0 * a.cos(), 20.0 + 10.0 * a.sin())
    });
}

#[test]
fn transform_in_place() {
    let mut points = vec![point(0.0, 0.0), point(1.0, 2.0)];
    transform_points(&mut points, &matrix(2.0, 0.0, 0.0, 2.0, 10.0, 0.0));
    assert_eq!(points, vec![point(10.0, 0.0), point(12.0, 4.0)]);
}
