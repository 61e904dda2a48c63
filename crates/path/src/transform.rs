//! Parsing of `transform` attribute values.
//!
//! Only `matrix(a b c d e f)` and `rotate(angle [cx cy])` are understood. Other
//! functions, and recognized functions with the wrong number of arguments, are
//! skipped.

use crate::geom::transform::{matrix, rotation_around};
use crate::math::{point, Angle, Transform};
use crate::numbers::parse_number_list;

/// Parse a transform list.
///
/// Functions compose in document order: in `rotate(90) matrix(...)` the matrix
/// applies first. Returns `None` if no function was recognized.
///
/// ## Example
///
/// ```
/// use svg_points_path::transform::parse_transform;
/// use svg_points_path::math::point;
///
/// let t = parse_transform("matrix(1, 0, 0, 1, 10, 20)").unwrap();
/// assert_eq!(t.transform_point(point(1.0, 1.0)), point(11.0, 21.0));
///
/// assert!(parse_transform("translate(10)").is_none());
/// ```
pub fn parse_transform(src: &str) -> Option<Transform> {
    let mut result: Option<Transform> = None;
    let mut args = Vec::new();
    let mut rest = src;

    while let Some(open) = rest.find('(') {
        let name = rest[..open].trim_matches(|c: char| c.is_whitespace() || c == ',');
        let after = &rest[open + 1..];
        let close = match after.find(')') {
            Some(close) => close,
            None => {
                log::debug!("Unterminated transform function {:?}.", name);
                break;
            }
        };
        let arguments = &after[..close];
        rest = &after[close + 1..];

        args.clear();
        let malformed = parse_number_list(arguments, &mut args);
        let function = if malformed.is_empty() {
            transform_function(name, &args)
        } else {
            None
        };

        match function {
            Some(function) => {
                result = Some(match result {
                    Some(acc) => function.then(&acc),
                    None => function,
                });
            }
            None => {
                log::debug!("Skipping transform function {}({}).", name, arguments);
            }
        }
    }

    result
}

fn transform_function(name: &str, args: &[f64]) -> Option<Transform> {
    match (name, args) {
        ("matrix", &[a, b, c, d, e, f]) => Some(matrix(a, b, c, d, e, f)),
        ("rotate", &[angle]) => Some(rotation_around(Angle::degrees(angle), point(0.0, 0.0))),
        ("rotate", &[angle, cx, cy]) => Some(rotation_around(Angle::degrees(angle), point(cx, cy))),
        _ => None,
    }
}

#[cfg(test)]
use crate::math::Point;

#[cfg(test)]
fn assert_close(a: Point, b: Point) {
    assert!((a - b).length() < 1e-9, "{:?} != {:?}", a, b);
}

#[test]
fn rotate_with_pivot() {
    let t = parse_transform("rotate(90 10 10)").unwrap();
    assert_close(t.transform_point(point(10.0, 10.0)), point(10.0, 10.0));
    assert_close(t.transform_point(point(20.0, 10.0)), point(10.0, 20.0));

    let t = parse_transform("rotate(180)").unwrap();
    assert_close(t.transform_point(point(1.0, 2.0)), point(-1.0, -2.0));
}

#[test]
fn composition_order() {
    // The translation applies first, then the rotation.
    let t = parse_transform("rotate(90) matrix(1 0 0 1 10 0)").unwrap();
    assert_close(t.transform_point(point(0.0, 0.0)), point(0.0, 10.0));

    let t = parse_transform("matrix(1 0 0 1 10 0), rotate(90)").unwrap();
    assert_close(t.transform_point(point(0.0, 0.0)), point(10.0, 0.0));
    assert_close(t.transform_point(point(1.0, 0.0)), point(10.0, 1.0));
}

#[test]
fn unsupported_functions() {
    assert!(parse_transform("").is_none());
    assert!(parse_transform("scale(2)").is_none());
    assert!(parse_transform("matrix(1 0 0 1 10)").is_none());
    assert!(parse_transform("rotate(1 2)").is_none());
    assert!(parse_transform("rotate(abc)").is_none());
    assert!(parse_transform("rotate(90").is_none());

    // Unknown functions do not prevent the known ones from applying.
    let t = parse_transform("translate(5 5) rotate(90)").unwrap();
    assert_close(t.transform_point(point(1.0, 0.0)), point(0.0, 1.0));
}
