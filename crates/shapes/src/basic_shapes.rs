//! Tracing of the SVG basic shapes.
//!
//! Each tracer returns a single point sequence, empty when the shape is
//! degenerate or holds non-finite values. Points are reserved from the budget
//! before anything is allocated.

use core::f64::consts::PI;

use crate::geom::utils::{is_finite_point, manhattan_distance, points_coincide, step_count};
use crate::geom::{LineSegment, PointBudget, SampleError, Segment};
use crate::math::{point, vector, Point, Size};
use crate::path::SampleOptions;
use crate::{Circle, Ellipse, Line, Polygon, Polyline, Rect};

/// Corners closer than this on both axes to a sampled point are considered
/// present.
const CORNER_TOLERANCE: f64 = 0.001;

pub fn trace_line(
    line: &Line,
    options: &SampleOptions,
    budget: &mut PointBudget,
) -> Result<Vec<Point>, SampleError> {
    if !is_finite_point(line.from) || !is_finite_point(line.to) {
        return Ok(Vec::new());
    }

    let segment = LineSegment {
        from: line.from,
        to: line.to,
    };
    let samples = segment.sampled(options.density);
    budget.reserve(samples.num_points())?;
    let mut points: Vec<Point> = samples.collect();

    if points.last() != Some(&line.to) {
        budget.reserve(1)?;
        points.push(line.to);
    }

    Ok(points)
}

pub fn trace_circle(
    circle: &Circle,
    options: &SampleOptions,
    budget: &mut PointBudget,
) -> Result<Vec<Point>, SampleError> {
    let r = circle.radius;
    if !(r > 0.0) || !r.is_finite() || !is_finite_point(circle.center) {
        return Ok(Vec::new());
    }

    trace_ellipse_arc(circle.center, Size::new(r, r), 2.0 * PI * r, options, budget)
}

/// Ellipses use Ramanujan's approximation of their circumference.
pub fn trace_ellipse(
    ellipse: &Ellipse,
    options: &SampleOptions,
    budget: &mut PointBudget,
) -> Result<Vec<Point>, SampleError> {
    let (rx, ry) = (ellipse.radii.width, ellipse.radii.height);
    if !(rx > 0.0 && ry > 0.0) || !rx.is_finite() || !ry.is_finite() {
        return Ok(Vec::new());
    }
    if !is_finite_point(ellipse.center) {
        return Ok(Vec::new());
    }

    let circumference = PI * (3.0 * (rx + ry) - ((3.0 * rx + ry) * (rx + 3.0 * ry)).sqrt());

    trace_ellipse_arc(ellipse.center, ellipse.radii, circumference, options, budget)
}

// `n = max(3, floor(circumference / density))` points at evenly spaced angles,
// starting at angle zero.
fn trace_ellipse_arc(
    center: Point,
    radii: Size,
    circumference: f64,
    options: &SampleOptions,
    budget: &mut PointBudget,
) -> Result<Vec<Point>, SampleError> {
    let n = step_count(circumference, options.density, 3);
    let closing = options.close_paths as usize;
    budget.reserve(n.saturating_add(closing))?;

    let mut points = Vec::with_capacity(n.saturating_add(closing));
    for i in 0..n {
        let angle = (i as f64 / n as f64) * 2.0 * PI;
        let (sin, cos) = angle.sin_cos();
        points.push(center + vector(radii.width * cos, radii.height * sin));
    }

    if options.close_paths {
        points.push(points[0]);
    }

    Ok(points)
}

/// Walks the perimeter clockwise from the top-left corner.
///
/// The four corners are always part of the output, exactly: after sampling,
/// each corner snaps the point lying on it within rounding, or else replaces
/// the sampled point closest to it.
pub fn trace_rect(
    rect: &Rect,
    options: &SampleOptions,
    budget: &mut PointBudget,
) -> Result<Vec<Point>, SampleError> {
    let (x, y) = (rect.origin.x, rect.origin.y);
    let (w, h) = (rect.size.width, rect.size.height);
    if ![x, y, w, h].iter().all(|v| v.is_finite()) {
        return Ok(Vec::new());
    }
    if w < 0.0 || h < 0.0 || (w <= 0.0 && h <= 0.0) {
        return Ok(Vec::new());
    }

    let perimeter = 2.0 * (w + h);
    let n = step_count(perimeter, options.density, 4);
    budget.reserve(n.saturating_add(1 + options.close_paths as usize))?;

    let mut points = Vec::with_capacity(n.saturating_add(2));
    for i in 0..=n {
        let t = (i as f64 / n as f64) * perimeter;
        let p = if t <= w {
            point(x + t, y)
        } else if t <= w + h {
            point(x + w, y + t - w)
        } else if t <= 2.0 * w + h {
            point(x + w - (t - w - h), y + h)
        } else {
            point(x, y + h - (t - 2.0 * w - h))
        };
        points.push(p);
    }

    let corners = [
        point(x, y),
        point(x + w, y),
        point(x + w, y + h),
        point(x, y + h),
    ];
    for &corner in &corners {
        // Points already holding another corner are never moved away from it.
        let near = points.iter().position(|p| {
            (p.x - corner.x).abs() < CORNER_TOLERANCE
                && (p.y - corner.y).abs() < CORNER_TOLERANCE
                && (*p == corner || !corners.contains(p))
        });

        let target = near.or_else(|| {
            let mut nearest = None;
            let mut min_distance = f64::INFINITY;
            for (i, p) in points.iter().enumerate() {
                if corners.contains(p) {
                    continue;
                }
                let d = manhattan_distance(*p, corner);
                if d < min_distance {
                    min_distance = d;
                    nearest = Some(i);
                }
            }
            nearest
        });

        if let Some(i) = target {
            points[i] = corner;
        }
    }

    if options.close_paths {
        let first = points[0];
        let last = points.len() - 1;
        if points_coincide(points[last], first) {
            points[last] = first;
            budget.release(1);
        } else {
            points.push(first);
        }
    }

    Ok(points)
}

/// Each edge contributes its start vertex and its interior points; the edge
/// from the last vertex wraps around to the first.
pub fn trace_polygon(
    polygon: &Polygon,
    options: &SampleOptions,
    budget: &mut PointBudget,
) -> Result<Vec<Point>, SampleError> {
    let vertices = &polygon.vertices;
    if vertices.len() < 3 || !vertices.iter().all(|v| is_finite_point(*v)) {
        return Ok(Vec::new());
    }

    let mut points = Vec::new();
    let n = vertices.len();
    for i in 0..n {
        walk_edge(vertices[i], vertices[(i + 1) % n], options.density, &mut points, budget)?;
    }

    if options.close_paths {
        budget.reserve(1)?;
        points.push(vertices[0]);
    }

    Ok(points)
}

/// Like [`trace_polygon`] without the wrapping edge. Polylines are never
/// closed.
pub fn trace_polyline(
    polyline: &Polyline,
    options: &SampleOptions,
    budget: &mut PointBudget,
) -> Result<Vec<Point>, SampleError> {
    let vertices = &polyline.vertices;
    if vertices.len() < 2 || !vertices.iter().all(|v| is_finite_point(*v)) {
        return Ok(Vec::new());
    }

    let mut points = Vec::new();
    for edge in vertices.windows(2) {
        walk_edge(edge[0], edge[1], options.density, &mut points, budget)?;
    }

    budget.reserve(1)?;
    points.push(vertices[vertices.len() - 1]);

    Ok(points)
}

// Pushes `from` and the interior points of the edge, leaving `to` to the next
// edge.
fn walk_edge(
    from: Point,
    to: Point,
    density: f64,
    output: &mut Vec<Point>,
    budget: &mut PointBudget,
) -> Result<(), SampleError> {
    let samples = LineSegment { from, to }.sampled(density);
    let interior = samples.num_points().saturating_sub(2);
    budget.reserve(interior + 1)?;

    output.push(from);
    output.extend(samples.skip(1).take(interior));

    Ok(())
}

#[cfg(test)]
fn options(density: f64) -> SampleOptions {
    SampleOptions::density(density)
}

#[cfg(test)]
fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect {
        origin: point(x, y),
        size: Size::new(w, h),
    }
}

#[cfg(test)]
fn budget() -> PointBudget {
    PointBudget::default()
}

#[test]
fn line_endpoints() {
    let line = Line {
        from: point(0.0, 0.0),
        to: point(10.0, 5.0),
    };
    let points = trace_line(&line, &options(1.0), &mut budget()).unwrap();
    assert_eq!(points.len(), 12);
    assert_eq!(points[0], line.from);
    assert_eq!(points[11], line.to);

    let dot = Line {
        from: point(3.0, 3.0),
        to: point(3.0, 3.0),
    };
    assert_eq!(
        trace_line(&dot, &options(1.0), &mut budget()).unwrap(),
        vec![point(3.0, 3.0)]
    );
}

#[test]
fn circle_points() {
    let circle = Circle {
        center: point(50.0, 50.0),
        radius: 10.0,
    };
    let points = trace_circle(&circle, &options(1.0), &mut budget()).unwrap();
    // floor(20π) = 62 points plus the closing one.
    assert_eq!(points.len(), 63);
    assert_eq!(points[0], point(60.0, 50.0));
    assert_eq!(points[62], points[0]);
    for p in &points {
        assert!(((*p - point(50.0, 50.0)).length() - 10.0).abs() < 1e-9);
    }

    let open = trace_circle(&circle, &options(1.0).with_close_paths(false), &mut budget()).unwrap();
    assert_eq!(open.len(), 62);
}

#[test]
fn degenerate_circles() {
    for r in &[0.0, -1.0, f64::NAN, f64::INFINITY] {
        let circle = Circle {
            center: point(0.0, 0.0),
            radius: *r,
        };
        assert!(trace_circle(&circle, &options(1.0), &mut budget()).unwrap().is_empty());
    }

    // Tiny circles still get a triangle.
    let circle = Circle {
        center: point(0.0, 0.0),
        radius: 0.01,
    };
    assert_eq!(trace_circle(&circle, &options(1.0), &mut budget()).unwrap().len(), 4);
}

#[test]
fn circle_counts_are_monotone() {
    let circle = Circle {
        center: point(0.0, 0.0),
        radius: 25.0,
    };
    let mut previous = 0;
    for density in &[10.0, 5.0, 2.0, 1.0, 0.5] {
        let n = trace_circle(&circle, &options(*density), &mut budget()).unwrap().len();
        assert!(n >= previous);
        previous = n;
    }
}

#[test]
fn ellipse_points() {
    let ellipse = Ellipse {
        center: point(0.0, 0.0),
        radii: Size::new(20.0, 10.0),
    };
    let points = trace_ellipse(&ellipse, &options(1.0), &mut budget()).unwrap();
    // Ramanujan gives 96.88 for these radii.
    assert_eq!(points.len(), 97);
    assert_eq!(points[0], point(20.0, 0.0));
    assert_eq!(points[96], points[0]);
    for p in &points {
        let v = (p.x / 20.0).powi(2) + (p.y / 10.0).powi(2);
        assert!((v - 1.0).abs() < 1e-9);
    }

    let flat = Ellipse {
        center: point(0.0, 0.0),
        radii: Size::new(20.0, 0.0),
    };
    assert!(trace_ellipse(&flat, &options(1.0), &mut budget()).unwrap().is_empty());
}

#[test]
fn rect_corners_for_any_density() {
    let corners = [
        point(20.0, 20.0),
        point(80.0, 20.0),
        point(80.0, 60.0),
        point(20.0, 60.0),
    ];
    for density in &[0.3, 1.0, 3.0, 7.0, 13.0, 33.0, 49.0, 50.0, 51.0, 199.0, 1000.0] {
        let points = trace_rect(&rect(20.0, 20.0, 60.0, 40.0), &options(*density), &mut budget()).unwrap();
        for corner in &corners {
            assert!(points.contains(corner), "missing {:?} at density {}", corner, density);
        }
        assert_eq!(points[0], corners[0]);
        assert_eq!(points.last(), Some(&corners[0]));
        for p in &points {
            assert!(p.x >= 20.0 && p.x <= 80.0 && p.y >= 20.0 && p.y <= 60.0);
        }
    }
}

#[test]
fn near_corner_points_snap() {
    let r = rect(0.1, 0.2, 0.7, 0.3);
    let corners = [
        point(0.1, 0.2),
        point(0.1 + 0.7, 0.2),
        point(0.1 + 0.7, 0.2 + 0.3),
        point(0.1, 0.2 + 0.3),
    ];
    for density in &[0.01, 0.03, 0.1, 0.25] {
        let points = trace_rect(&r, &options(*density), &mut budget()).unwrap();
        for corner in &corners {
            assert!(points.contains(corner));
            // Nothing is left a rounding error away from a corner.
            assert!(!points.iter().any(|p| p != corner && points_coincide(*p, *corner)));
        }
    }
}

#[test]
fn coarse_rect() {
    let points = trace_rect(&rect(20.0, 20.0, 60.0, 40.0), &options(1000.0), &mut budget()).unwrap();
    assert_eq!(
        points,
        vec![
            point(20.0, 20.0),
            point(80.0, 20.0),
            point(80.0, 60.0),
            point(20.0, 60.0),
            point(20.0, 20.0),
        ]
    );
}

#[test]
fn degenerate_rects() {
    let empty = |r: Rect| trace_rect(&r, &options(1.0), &mut budget()).unwrap().is_empty();
    assert!(empty(rect(0.0, 0.0, 0.0, 0.0)));
    assert!(empty(rect(0.0, 0.0, -10.0, 10.0)));
    assert!(empty(rect(0.0, 0.0, 10.0, -1.0)));
    assert!(empty(rect(f64::NAN, 0.0, 10.0, 10.0)));
    // A zero width rectangle is a line traced back and forth.
    assert!(!empty(rect(0.0, 0.0, 0.0, 10.0)));
}

#[test]
fn polygon_closure() {
    let polygon = Polygon {
        vertices: vec![point(50.0, 10.0), point(90.0, 90.0), point(10.0, 90.0)],
    };
    let points = trace_polygon(&polygon, &options(5.0), &mut budget()).unwrap();
    assert_eq!(points[0], point(50.0, 10.0));
    assert_eq!(points.last(), Some(&point(50.0, 10.0)));
    for v in &polygon.vertices {
        assert!(points.contains(v));
    }
    // No vertex is emitted twice in a row.
    for pair in points.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }

    let open = trace_polygon(&polygon, &options(5.0).with_close_paths(false), &mut budget()).unwrap();
    assert_eq!(open.len(), points.len() - 1);
}

#[test]
fn polygon_needs_three_vertices() {
    let polygon = Polygon {
        vertices: vec![point(0.0, 0.0), point(10.0, 0.0)],
    };
    assert!(trace_polygon(&polygon, &options(1.0), &mut budget()).unwrap().is_empty());
}

#[test]
fn polyline_is_open() {
    let polyline = Polyline {
        vertices: vec![point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)],
    };
    let points = trace_polyline(&polyline, &options(5.0), &mut budget()).unwrap();
    assert_eq!(
        points,
        vec![
            point(0.0, 0.0),
            point(5.0, 0.0),
            point(10.0, 0.0),
            point(10.0, 5.0),
            point(10.0, 10.0),
        ]
    );

    let single = Polyline {
        vertices: vec![point(1.0, 1.0)],
    };
    assert!(trace_polyline(&single, &options(1.0), &mut budget()).unwrap().is_empty());
}

#[test]
fn tracers_respect_the_budget() {
    let circle = Circle {
        center: point(0.0, 0.0),
        radius: 1000.0,
    };
    let mut budget = PointBudget::new(100);
    assert_eq!(
        trace_circle(&circle, &options(1.0), &mut budget),
        Err(SampleError::TooManyPoints { limit: 100 })
    );
    assert_eq!(budget.used(), 0);

    let mut budget = PointBudget::new(100);
    assert!(trace_rect(&rect(0.0, 0.0, 1e300, 1e300), &options(1e-300), &mut budget).is_err());
}
