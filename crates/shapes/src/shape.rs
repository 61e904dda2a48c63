use crate::attributes::{number_attribute, parse_points, Attributes};
use crate::math::{point, Point, Size};

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Ellipse {
    pub center: Point,
    pub radii: Size,
}

/// An axis-aligned rectangle. Unlike `euclid::Rect`, the size is kept as
/// written, negative values included.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Polyline {
    pub vertices: Vec<Point>,
}

/// The raw `d` attribute of a path element.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PathData {
    pub data: String,
}

/// The geometry of a shape element.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Shape {
    Line(Line),
    Circle(Circle),
    Ellipse(Ellipse),
    Rect(Rect),
    Polygon(Polygon),
    Polyline(Polyline),
    Path(PathData),
}

impl Shape {
    /// Read the geometry attributes of the element named `tag`.
    ///
    /// Returns `None` for tags that are not shapes. The tag is matched
    /// case-insensitively.
    pub fn from_attributes<A: Attributes + ?Sized>(tag: &str, attributes: &A) -> Option<Shape> {
        let num = |name: &str| number_attribute(attributes, name);
        let vertices = || {
            attributes
                .get("points")
                .and_then(parse_points)
                .unwrap_or_default()
        };

        let shape = match tag.to_ascii_lowercase().as_str() {
            "line" => Shape::Line(Line {
                from: point(num("x1"), num("y1")),
                to: point(num("x2"), num("y2")),
            }),
            "circle" => Shape::Circle(Circle {
                center: point(num("cx"), num("cy")),
                radius: num("r"),
            }),
            "ellipse" => Shape::Ellipse(Ellipse {
                center: point(num("cx"), num("cy")),
                radii: Size::new(num("rx"), num("ry")),
            }),
            "rect" => Shape::Rect(Rect {
                origin: point(num("x"), num("y")),
                size: Size::new(num("width"), num("height")),
            }),
            "polygon" => Shape::Polygon(Polygon {
                vertices: vertices(),
            }),
            "polyline" => Shape::Polyline(Polyline {
                vertices: vertices(),
            }),
            "path" => Shape::Path(PathData {
                data: attributes.get("d").unwrap_or("").to_string(),
            }),
            _ => {
                return None;
            }
        };

        Some(shape)
    }

    /// The lower-case element name of this kind of shape.
    pub fn tag(&self) -> &'static str {
        match self {
            Shape::Line(..) => "line",
            Shape::Circle(..) => "circle",
            Shape::Ellipse(..) => "ellipse",
            Shape::Rect(..) => "rect",
            Shape::Polygon(..) => "polygon",
            Shape::Polyline(..) => "polyline",
            Shape::Path(..) => "path",
        }
    }
}

#[test]
fn shapes_from_attributes() {
    assert_eq!(
        Shape::from_attributes("rect", &[("x", "20"), ("y", "20"), ("width", "60"), ("height", "40")]),
        Some(Shape::Rect(Rect {
            origin: point(20.0, 20.0),
            size: Size::new(60.0, 40.0),
        }))
    );
    assert_eq!(
        Shape::from_attributes("CIRCLE", &[("r", "5")]),
        Some(Shape::Circle(Circle {
            center: point(0.0, 0.0),
            radius: 5.0,
        }))
    );
    assert_eq!(
        Shape::from_attributes("polyline", &[("points", "0,0 1,x")]),
        Some(Shape::Polyline(Polyline { vertices: vec![] }))
    );
    assert_eq!(
        Shape::from_attributes("path", &[("id", "p")]),
        Some(Shape::Path(PathData { data: String::new() }))
    );
    assert_eq!(Shape::from_attributes("g", &[("x", "1")]), None);
    assert_eq!(Shape::from_attributes("text", &[("fill", "red")]), None);
}

#[test]
fn shape_tags() {
    let line = Shape::from_attributes("Line", &[("x2", "1")]).unwrap();
    assert_eq!(line.tag(), "line");
}
