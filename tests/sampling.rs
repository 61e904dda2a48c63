use svg_points::geom::utils::points_coincide;
use svg_points::math::{point, Point};
use svg_points::path::{sample_path, SampleOptions};
use svg_points::{Extractor, ExtractorOptions};

fn extract(svg: &str, density: f64) -> Vec<Vec<Point>> {
    Extractor::default()
        .extract_points(svg, Some(density))
        .unwrap()
        .paths
}

fn document(body: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">{}</svg>"#,
        body
    )
}

#[test]
fn closed_path_triangle() {
    let paths = extract(&document(r#"<path d="M 10 10 L 90 10 L 90 90 Z"/>"#), 10.0);
    assert_eq!(paths.len(), 1);

    let points = &paths[0];
    assert_eq!(points.len(), 28);
    assert_eq!(points[0], point(10.0, 10.0));
    assert_eq!(*points.last().unwrap(), point(10.0, 10.0));
    assert!(points.contains(&point(90.0, 10.0)));
    assert!(points.contains(&point(90.0, 90.0)));
}

#[test]
fn rect_corners_at_any_density() {
    let svg = document(r#"<rect x="20" y="20" width="60" height="40"/>"#);
    let corners = [
        point(20.0, 20.0),
        point(80.0, 20.0),
        point(80.0, 60.0),
        point(20.0, 60.0),
    ];

    for &density in &[0.3, 1.0, 3.0, 7.0, 13.0, 33.0, 50.0, 200.0, 1000.0] {
        let paths = extract(&svg, density);
        assert_eq!(paths.len(), 1);
        let points = &paths[0];
        for corner in &corners {
            assert!(points.contains(corner), "missing {:?} at density {}", corner, density);
        }
        assert_eq!(points.first(), points.last());
    }
}

#[test]
fn polygon_closure() {
    let paths = extract(&document(r#"<polygon points="50,10 90,90 10,90"/>"#), 5.0);
    let points = &paths[0];
    assert_eq!(points[0], point(50.0, 10.0));
    assert_eq!(*points.last().unwrap(), point(50.0, 10.0));
    assert!(points.contains(&point(90.0, 90.0)));
    assert!(points.contains(&point(10.0, 90.0)));
}

#[test]
fn open_shapes_stay_open() {
    let paths = extract(
        &document(
            r#"<polyline points="0,0 50,0 50,50"/>
               <path d="M 0 0 L 50 0 L 50 50"/>
               <line x1="0" y1="0" x2="50" y2="0"/>"#,
        ),
        5.0,
    );
    assert_eq!(paths.len(), 3);
    for points in &paths {
        assert!(!points_coincide(points[0], *points.last().unwrap()));
    }
}

#[test]
fn disabled_closure() {
    let extractor = Extractor::new(ExtractorOptions::density(5.0).with_close_paths(false));
    let paths = extractor
        .extract_points(&document(r#"<polygon points="50,10 90,90 10,90"/>"#), None)
        .unwrap()
        .paths;
    assert_ne!(*paths[0].last().unwrap(), point(50.0, 10.0));
}

#[test]
fn degenerate_shapes_are_dropped() {
    let paths = extract(
        &document(
            r#"<circle cx="50" cy="50" r="0"/>
               <ellipse rx="10" ry="0"/>
               <rect width="0" height="0"/>
               <rect width="-10" height="10"/>
               <polygon points="0,0 10,10"/>
               <polyline points="0,0"/>
               <path d=""/>"#,
        ),
        1.0,
    );
    assert!(paths.is_empty());
}

#[test]
fn quadratic_reflection() {
    let sub_paths = sample_path("M 0 0 Q 10 10 20 0 T 40 0", &SampleOptions::density(100.0)).unwrap();
    assert_eq!(
        sub_paths[0].points,
        vec![
            point(0.0, 0.0),
            point(10.0, 5.0),
            point(20.0, 0.0),
            point(30.0, -5.0),
            point(40.0, 0.0),
        ]
    );
}

#[test]
fn cubic_reflection() {
    let sub_paths = sample_path(
        "M 0 0 C 0 10 10 10 10 0 S 20 -10 20 0",
        &SampleOptions::density(100.0),
    )
    .unwrap();
    assert_eq!(
        sub_paths[0].points,
        vec![
            point(0.0, 0.0),
            point(5.0, 7.5),
            point(10.0, 0.0),
            point(15.0, -7.5),
            point(20.0, 0.0),
        ]
    );
}

#[test]
fn implicit_repetition() {
    let explicit = sample_path("M 0 0 L 10 0 L 10 10", &SampleOptions::density(1.0)).unwrap();
    let implicit = sample_path("M 0 0 10 0 10 10", &SampleOptions::density(1.0)).unwrap();
    assert_eq!(explicit, implicit);
}

#[test]
fn points_are_finite() {
    let svg = document(
        r#"<circle r="1e300"/>
           <path d="M 0 0 L 1e400 0 L NaN 5 L 10 10"/>
           <rect x="inf" width="10" height="10"/>
           <polyline points="0,0 10,nan"/>
           <line x1="0" y1="0" x2="10" y2="10" transform="matrix(1e308 0 0 1e308 0 0) rotate(45)"/>"#,
    );
    let extractor = Extractor::new(ExtractorOptions::DEFAULT.with_max_points(10_000));
    let paths = extractor.extract_points(&svg, Some(1e306)).unwrap().paths;
    for points in &paths {
        assert!(!points.is_empty());
        for p in points {
            assert!(p.x.is_finite() && p.y.is_finite(), "{:?}", p);
        }
    }
}

#[test]
fn point_counts_grow_with_density() {
    let svg = document(
        r#"<circle cx="50" cy="50" r="30"/>
           <ellipse cx="50" cy="50" rx="40" ry="10"/>
           <line x1="0" y1="0" x2="100" y2="37"/>"#,
    );

    let mut previous: Option<Vec<usize>> = None;
    for &density in &[50.0, 20.0, 10.0, 5.0, 2.0, 1.0, 0.5] {
        let counts: Vec<usize> = extract(&svg, density).iter().map(|p| p.len()).collect();
        assert_eq!(counts.len(), 3);
        if let Some(previous) = &previous {
            for (before, after) in previous.iter().zip(&counts) {
                assert!(after >= before);
            }
        }
        previous = Some(counts);
    }
}
