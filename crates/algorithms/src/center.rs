use crate::math::{point, Point};

/// The mean of all points, or the origin if there is none.
pub fn center<Iter, P>(paths: Iter) -> Point
where
    Iter: IntoIterator<Item = P>,
    P: AsRef<[Point]>,
{
    let mut sum = point(0.0, 0.0).to_vector();
    let mut count = 0usize;

    for path in paths {
        for p in path.as_ref() {
            sum += p.to_vector();
            count += 1;
        }
    }

    if count == 0 {
        return point(0.0, 0.0);
    }

    (sum / count as f64).to_point()
}

#[test]
fn simple_center() {
    let paths = vec![
        vec![point(0.0, 0.0), point(4.0, 0.0)],
        vec![point(4.0, 4.0), point(0.0, 4.0)],
    ];
    assert_eq!(center(&paths), point(2.0, 2.0));
    // Points are weighted equally, not sequences.
    assert_eq!(center(vec![vec![point(0.0, 0.0)], vec![point(3.0, 0.0), point(3.0, 0.0)]]), point(2.0, 0.0));
    assert_eq!(center(Vec::<Vec<Point>>::new()), point(0.0, 0.0));
}
