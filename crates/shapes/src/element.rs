use std::collections::BTreeMap;

use crate::attributes::Attributes;
use crate::basic_shapes::*;
use crate::geom::transform::transform_points;
use crate::geom::utils::is_finite_point;
use crate::geom::{PointBudget, SampleError};
use crate::math::{Point, Transform};
use crate::path::{parse_transform, PathSampler, SampleOptions, Warning};
use crate::Shape;

/// A shape element with its transform and identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub shape: Shape,
    /// The recognized part of the `transform` attribute.
    pub transform: Option<Transform>,
    pub id: Option<String>,
    pub class_name: Option<String>,
    /// Every attribute of the element, geometry included.
    pub attributes: BTreeMap<String, String>,
}

impl Element {
    /// Returns `None` if `tag` is not a shape element.
    ///
    /// ## Example
    ///
    /// ```
    /// use svg_points_shapes::{Element, Shape};
    ///
    /// let element = Element::from_attributes(
    ///     "circle",
    ///     &[("id", "dot"), ("r", "4"), ("transform", "rotate(45)")],
    /// ).unwrap();
    ///
    /// assert_eq!(element.id.as_deref(), Some("dot"));
    /// assert!(element.transform.is_some());
    /// assert!(matches!(element.shape, Shape::Circle(..)));
    /// ```
    pub fn from_attributes<A: Attributes + ?Sized>(tag: &str, attributes: &A) -> Option<Element> {
        let shape = Shape::from_attributes(tag, attributes)?;
        let transform = attributes.get("transform").and_then(parse_transform);
        let non_empty = |name: &str| {
            attributes
                .get(name)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        Some(Element {
            shape,
            transform,
            id: non_empty("id"),
            class_name: non_empty("class"),
            attributes: attributes
                .entries()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        })
    }

    /// The lower-case element name.
    pub fn tag(&self) -> &'static str {
        self.shape.tag()
    }

    /// Sample the element into point sequences.
    ///
    /// Paths produce one sequence per sub-path, other shapes at most one. The
    /// transform applies after sampling. Empty sequences and sequences with
    /// non-finite coordinates are dropped.
    pub fn trace(
        &self,
        sampler: &mut PathSampler,
        options: &SampleOptions,
        budget: &mut PointBudget,
        warnings: &mut Vec<Warning>,
    ) -> Result<Vec<Vec<Point>>, SampleError> {
        let mut sequences = match &self.shape {
            Shape::Path(path) => sampler
                .sample(&path.data, options, budget, warnings)?
                .into_iter()
                .map(|sub_path| sub_path.points)
                .collect(),
            Shape::Line(line) => vec![trace_line(line, options, budget)?],
            Shape::Circle(circle) => vec![trace_circle(circle, options, budget)?],
            Shape::Ellipse(ellipse) => vec![trace_ellipse(ellipse, options, budget)?],
            Shape::Rect(rect) => vec![trace_rect(rect, options, budget)?],
            Shape::Polygon(polygon) => vec![trace_polygon(polygon, options, budget)?],
            Shape::Polyline(polyline) => vec![trace_polyline(polyline, options, budget)?],
        };

        if let Some(transform) = &self.transform {
            for points in &mut sequences {
                transform_points(points, transform);
            }
        }

        sequences.retain(|points: &Vec<Point>| {
            if points.iter().all(|p| is_finite_point(*p)) {
                return !points.is_empty();
            }
            log::debug!("Dropping {} points with non-finite coordinates.", points.len());
            false
        });

        Ok(sequences)
    }
}

#[cfg(test)]
use crate::math::point;

#[cfg(test)]
fn trace(element: &Element, density: f64) -> Vec<Vec<Point>> {
    let mut budget = PointBudget::default();
    element
        .trace(
            &mut PathSampler::new(),
            &SampleOptions::density(density),
            &mut budget,
            &mut Vec::new(),
        )
        .unwrap()
}

#[test]
fn element_identity() {
    let element = Element::from_attributes(
        "rect",
        &[("id", "box"), ("class", ""), ("width", "10"), ("height", "5")],
    )
    .unwrap();
    assert_eq!(element.tag(), "rect");
    assert_eq!(element.id.as_deref(), Some("box"));
    assert_eq!(element.class_name, None);
    assert_eq!(element.attributes.len(), 4);
    assert_eq!(element.attributes["width"], "10");
}

#[test]
fn transform_applies_to_every_shape() {
    let line = Element::from_attributes(
        "line",
        &[("x2", "10"), ("transform", "matrix(1 0 0 1 5 5)")],
    )
    .unwrap();
    let sequences = trace(&line, 100.0);
    assert_eq!(sequences, vec![vec![point(5.0, 5.0), point(15.0, 5.0)]]);

    let path = Element::from_attributes(
        "path",
        &[("d", "M 0 0 L 0 10"), ("transform", "matrix(2 0 0 2 0 0)")],
    )
    .unwrap();
    assert_eq!(trace(&path, 100.0), vec![vec![point(0.0, 0.0), point(0.0, 20.0)]]);
}

#[test]
fn unsupported_transform_is_ignored() {
    let element = Element::from_attributes("line", &[("x2", "10"), ("transform", "scale(3)")]).unwrap();
    assert!(element.transform.is_none());
    assert_eq!(trace(&element, 100.0), vec![vec![point(0.0, 0.0), point(10.0, 0.0)]]);
}

#[test]
fn degenerate_shapes_produce_nothing() {
    let circle = Element::from_attributes("circle", &[("cx", "5"), ("r", "0")]).unwrap();
    assert!(trace(&circle, 1.0).is_empty());

    let path = Element::from_attributes("path", &[("d", "")]).unwrap();
    assert!(trace(&path, 1.0).is_empty());

    let overflow = Element::from_attributes(
        "path",
        &[("d", "M 1e308 0 L 1e308 1"), ("transform", "matrix(10 0 0 1 0 0)")],
    )
    .unwrap();
    assert!(trace(&overflow, 100.0).is_empty());
}

#[test]
fn one_sequence_per_sub_path() {
    let path = Element::from_attributes("path", &[("d", "M 0 0 L 1 0 M 5 5 L 6 5 Z")]).unwrap();
    let sequences = trace(&path, 1.0);
    assert_eq!(sequences.len(), 2);
    assert_eq!(sequences[1].first(), sequences[1].last());
}
