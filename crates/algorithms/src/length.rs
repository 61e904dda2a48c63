//! Length of point sequences.

use crate::geom::LineSegment;
use crate::math::Point;

/// Sum of the distances between consecutive points of each sequence.
pub fn total_length<Iter, P>(paths: Iter) -> f64
where
    Iter: IntoIterator<Item = P>,
    P: AsRef<[Point]>,
{
    let mut length = 0.0;

    for path in paths {
        for pair in path.as_ref().windows(2) {
            length += LineSegment {
                from: pair[0],
                to: pair[1],
            }
            .length();
        }
    }

    length
}

#[test]
fn simple_length() {
    use crate::math::point;

    let paths = vec![
        vec![point(0.0, 0.0), point(3.0, 4.0), point(3.0, 0.0)],
        vec![point(100.0, 100.0)],
        vec![point(0.0, 0.0), point(0.0, 1.0)],
    ];
    // Sequences are not connected to each other.
    assert_eq!(total_length(&paths), 10.0);
    assert_eq!(total_length(Vec::<Vec<Point>>::new()), 0.0);
}
