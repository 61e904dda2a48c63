//! Reading shape elements and sizes out of a parsed document.

use crate::math::Size;
use crate::path::numbers::{leading_number, parse_number_list};
use crate::shapes::{Attributes, Element};

/// Width and height used for each dimension a document does not declare.
pub const DEFAULT_DOCUMENT_SIZE: f64 = 100.0;

/// [`Attributes`] of an XML element.
#[derive(Copy, Clone, Debug)]
pub struct XmlAttributes<'a, 'input>(pub roxmltree::Node<'a, 'input>);

impl<'a, 'input> Attributes for XmlAttributes<'a, 'input> {
    fn get(&self, name: &str) -> Option<&str> {
        self.0.attribute(name)
    }

    fn entries(&self) -> Vec<(&str, &str)> {
        self.0
            .attributes()
            .map(|attr| (attr.name(), attr.value()))
            .collect()
    }
}

/// All shape elements of the document, in document order.
///
/// Elements nested in groups, definitions or other containers are included.
pub fn shape_elements(doc: &roxmltree::Document) -> Vec<Element> {
    doc.descendants()
        .filter(|node| node.is_element())
        .filter_map(|node| Element::from_attributes(node.tag_name().name(), &XmlAttributes(node)))
        .collect()
}

/// The size declared by the root `svg` element.
///
/// The `viewBox` wins when it has at least four numbers, then the `width` and
/// `height` attributes are used. Any dimension missing, zero or unparsable is
/// [`DEFAULT_DOCUMENT_SIZE`].
pub fn declared_size(doc: &roxmltree::Document) -> Size {
    let root = doc.root_element();
    let mut width = None;
    let mut height = None;

    if let Some(view_box) = root.attribute("viewBox") {
        let mut values = Vec::new();
        parse_number_list(view_box, &mut values);
        if values.len() >= 4 {
            width = Some(values[2]);
            height = Some(values[3]);
        }
    }

    let dimension = |from_view_box: Option<f64>, name: &str| {
        from_view_box
            .filter(|v| is_valid_dimension(*v))
            .or_else(|| {
                root.attribute(name)
                    .and_then(leading_number)
                    .filter(|v| is_valid_dimension(*v))
            })
            .unwrap_or(DEFAULT_DOCUMENT_SIZE)
    };

    Size::new(dimension(width, "width"), dimension(height, "height"))
}

fn is_valid_dimension(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
fn size_of(svg: &str) -> Size {
    declared_size(&roxmltree::Document::parse(svg).unwrap())
}

#[test]
fn view_box_size() {
    assert_eq!(
        size_of(r#"<svg viewBox="0 0 200 50" width="10" height="10"/>"#),
        Size::new(200.0, 50.0)
    );
    assert_eq!(size_of(r#"<svg viewBox="-10,-10,30,40"/>"#), Size::new(30.0, 40.0));
}

#[test]
fn width_and_height_size() {
    assert_eq!(
        size_of(r#"<svg width="300px" height="150"/>"#),
        Size::new(300.0, 150.0)
    );
    assert_eq!(size_of(r#"<svg viewBox="0 0 10" width="20mm"/>"#), Size::new(20.0, 100.0));
}

#[test]
fn default_size() {
    assert_eq!(size_of("<svg/>"), Size::new(100.0, 100.0));
    assert_eq!(
        size_of(r#"<svg viewBox="0 0 0 0" width="auto" height="0"/>"#),
        Size::new(100.0, 100.0)
    );
}

#[test]
fn nested_shapes() {
    let doc = roxmltree::Document::parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg">
            <g transform="rotate(10)"><rect width="1" height="1"/><g><circle r="2"/></g></g>
            <text>hello</text>
            <PATH d="M 0 0 L 1 1"/>
        </svg>"#,
    )
    .unwrap();

    let tags: Vec<&str> = shape_elements(&doc).iter().map(|e| e.tag()).collect();
    assert_eq!(tags, vec!["rect", "circle", "path"]);
}
