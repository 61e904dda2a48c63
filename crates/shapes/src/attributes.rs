use std::collections::{BTreeMap, HashMap};

use crate::math::Point;
use crate::path::numbers::{leading_number, parse_number_list};

/// Read access to the attributes of an element.
///
/// Implemented for maps, arrays and slices of `(name, value)` pairs. The
/// document front-end implements it for its XML nodes.
pub trait Attributes {
    fn get(&self, name: &str) -> Option<&str>;

    /// All attributes in document order when the source has one.
    fn entries(&self) -> Vec<(&str, &str)>;
}

impl Attributes for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        HashMap::get(self, name).map(String::as_str)
    }

    fn entries(&self) -> Vec<(&str, &str)> {
        self.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }
}

impl Attributes for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        BTreeMap::get(self, name).map(String::as_str)
    }

    fn entries(&self) -> Vec<(&str, &str)> {
        self.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }
}

impl<'a> Attributes for [(&'a str, &'a str)] {
    fn get(&self, name: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }

    fn entries(&self) -> Vec<(&str, &str)> {
        self.to_vec()
    }
}

impl<'a, const N: usize> Attributes for [(&'a str, &'a str); N] {
    fn get(&self, name: &str) -> Option<&str> {
        Attributes::get(&self[..], name)
    }

    fn entries(&self) -> Vec<(&str, &str)> {
        Attributes::entries(&self[..])
    }
}

impl<'a, A: Attributes + ?Sized> Attributes for &'a A {
    fn get(&self, name: &str) -> Option<&str> {
        Attributes::get(*self, name)
    }

    fn entries(&self) -> Vec<(&str, &str)> {
        Attributes::entries(*self)
    }
}

/// Numeric value of a geometry attribute.
///
/// Missing or empty attributes read as zero. Otherwise the leading number is
/// used (`"10px"` is 10) and a value without one is NaN, which the tracers
/// treat as malformed.
pub fn number_attribute<A: Attributes + ?Sized>(attributes: &A, name: &str) -> f64 {
    match attributes.get(name) {
        None => 0.0,
        Some(value) if value.trim().is_empty() => 0.0,
        Some(value) => leading_number(value).unwrap_or(f64::NAN),
    }
}

/// Parse a `points` attribute into vertices.
///
/// Returns `None` if any token is malformed. A trailing odd coordinate is
/// ignored.
pub fn parse_points(src: &str) -> Option<Vec<Point>> {
    let mut coords = Vec::new();
    if !parse_number_list(src, &mut coords).is_empty() {
        return None;
    }

    Some(
        coords
            .chunks_exact(2)
            .map(|xy| Point::new(xy[0], xy[1]))
            .collect(),
    )
}

#[test]
fn numeric_attributes() {
    let attributes = [("x", "10px"), ("y", ""), ("r", "abc"), ("w", " 2.5 ")];
    assert_eq!(number_attribute(&attributes, "x"), 10.0);
    assert_eq!(number_attribute(&attributes, "y"), 0.0);
    assert_eq!(number_attribute(&attributes, "missing"), 0.0);
    assert!(number_attribute(&attributes, "r").is_nan());
    assert_eq!(number_attribute(&attributes, "w"), 2.5);
}

#[test]
fn map_attributes() {
    let mut map = BTreeMap::new();
    map.insert("cx".to_string(), "5".to_string());
    map.insert("id".to_string(), "dot".to_string());
    assert_eq!(Attributes::get(&map, "id"), Some("dot"));
    assert_eq!(map.entries(), vec![("cx", "5"), ("id", "dot")]);
    assert_eq!(number_attribute(&map, "cx"), 5.0);
}

#[test]
fn points_attribute() {
    assert_eq!(
        parse_points("50,10 90,90 10,90"),
        Some(vec![
            Point::new(50.0, 10.0),
            Point::new(90.0, 90.0),
            Point::new(10.0, 90.0)
        ])
    );
    assert_eq!(parse_points("1 2 3"), Some(vec![Point::new(1.0, 2.0)]));
    assert_eq!(parse_points(""), Some(vec![]));
    assert_eq!(parse_points("1,2 3,x"), None);
}
