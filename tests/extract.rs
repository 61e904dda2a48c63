use std::collections::HashMap;

use svg_points::math::{point, size};
use svg_points::shapes::Element;
use svg_points::{resolve_density, ExtractError, Extractor, ExtractorOptions};

const SHAPES: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="80">
    <g id="layer">
        <rect id="frame" class="outline" x="10" y="10" width="180" height="60"/>
        <circle cx="100" cy="40" r="20"/>
        <line x1="10" y1="75" x2="190" y2="75"/>
    </g>
    <path d="M 20 20 L 40 20 M 60 20 L 80 20"/>
</svg>"#;

#[test]
fn every_shape_is_extracted() {
    let extraction = Extractor::default().extract_points(SHAPES, None).unwrap();
    // One sequence per shape, two for the path.
    assert_eq!(extraction.paths.len(), 5);
    assert!(extraction.warnings.is_empty());
}

#[test]
fn density_from_declared_size() {
    // 200 * 0.0075 = 1.5
    assert_eq!(resolve_density(None, None, size(200.0, 80.0), 0.0075), 1.5);

    let svg = r#"<svg width="200" height="80"><line x2="6"/></svg>"#;
    let extraction = Extractor::default().extract_points(svg, None).unwrap();
    assert_eq!(
        extraction.paths[0],
        vec![point(0.0, 0.0), point(1.5, 0.0), point(3.0, 0.0), point(4.5, 0.0), point(6.0, 0.0)]
    );

    let coarse = Extractor::new(ExtractorOptions::DEFAULT.with_density_factor(0.015));
    assert_eq!(coarse.extract_points(svg, None).unwrap().paths[0].len(), 3);
    assert_eq!(coarse.extract_points(svg, Some(6.0)).unwrap().paths[0].len(), 2);
}

#[test]
fn element_filters() {
    let only_rects = Extractor::new(ExtractorOptions::density(5.0).with_include_only(vec!["RECT"]));
    let extraction = only_rects.extract_points_with_metadata(SHAPES, None).unwrap();
    assert_eq!(extraction.paths.len(), 1);
    assert_eq!(extraction.paths[0].element, "rect");
    assert_eq!(extraction.paths[0].id.as_deref(), Some("frame"));
    assert_eq!(extraction.paths[0].class_name.as_deref(), Some("outline"));

    let no_paths = Extractor::new(ExtractorOptions::density(5.0).with_exclude(vec!["path", "line"]));
    let extraction = no_paths.extract_points_with_metadata(SHAPES, None).unwrap();
    let tags: Vec<&str> = extraction.paths.iter().map(|p| p.element.as_str()).collect();
    assert_eq!(tags, vec!["rect", "circle"]);
}

#[test]
fn invalid_inputs() {
    let extractor = Extractor::default();
    assert!(matches!(
        extractor.extract_points(SHAPES, Some(0.0)),
        Err(ExtractError::InvalidDensity { .. })
    ));
    assert!(matches!(
        extractor.extract_points("<svg>", None),
        Err(ExtractError::Xml(..))
    ));
    assert!(matches!(
        extractor.extract_points_from_file("this/file/does/not/exist.svg", None),
        Err(ExtractError::Io(..))
    ));
}

#[test]
fn point_budget() {
    let extractor = Extractor::new(ExtractorOptions::density(0.01).with_max_points(1_000));
    let err = extractor.extract_points(SHAPES, None).unwrap_err();
    assert!(matches!(err, ExtractError::Sample(..)));
    assert_eq!(err.to_string(), "Sampling would produce more than 1000 points.");

    let roomy = Extractor::new(ExtractorOptions::density(1.0).with_max_points(100_000));
    assert!(roomy.extract_points(SHAPES, None).is_ok());
}

#[test]
fn normalization() {
    let extractor = Extractor::new(
        ExtractorOptions::density(5.0).with_normalize_to_size(Some(size(1.0, 1.0))),
    );
    let extraction = extractor.extract_points(SHAPES, None).unwrap();
    let bounds = extractor.bounding_box(&extraction.paths);
    assert_eq!(bounds.min, point(0.0, 0.0));
    // The bounding box is 180 wide and 65 tall, width limits the scale.
    assert!((bounds.max.x - 1.0).abs() < 1e-9);
    assert!((bounds.max.y - 65.0 / 180.0).abs() < 1e-9);
}

#[test]
fn transforms_apply_to_all_shapes() {
    let svg = r#"<svg>
        <line x1="0" y1="0" x2="10" y2="0" transform="rotate(90)"/>
        <polyline points="0,0 10,0" transform="matrix(1 0 0 1 5 5)"/>
    </svg>"#;
    let paths = Extractor::default().extract_points(svg, Some(100.0)).unwrap().paths;

    assert!((paths[0][1].x - 0.0).abs() < 1e-9);
    assert!((paths[0][1].y - 10.0).abs() < 1e-9);
    assert_eq!(paths[1], vec![point(5.0, 5.0), point(15.0, 5.0)]);
}

#[test]
fn elements_from_other_document_models() {
    let mut attributes = HashMap::new();
    attributes.insert("x1".to_string(), "0".to_string());
    attributes.insert("x2".to_string(), "3".to_string());

    let elements = vec![
        Element::from_attributes("line", &attributes).unwrap(),
        Element::from_attributes("polygon", &[("points", "0,0 1,0 1,1")]).unwrap(),
    ];
    assert!(Element::from_attributes("text", &attributes).is_none());

    let extraction = Extractor::default().extract_elements(&elements, Some(1.0)).unwrap();
    assert_eq!(extraction.paths.len(), 2);
    assert_eq!(extraction.paths[0].len(), 4);
    assert_eq!(extraction.paths[1].first(), extraction.paths[1].last());
}

#[test]
fn path_set_measures() {
    let svg = r#"<svg><polyline points="0,0 4,0 4,3"/></svg>"#;
    let extractor = Extractor::default();
    let paths = extractor.extract_points(svg, Some(10.0)).unwrap().paths;

    assert_eq!(extractor.total_length(&paths), 7.0);
    assert_eq!(extractor.bounding_box(&paths).max, point(4.0, 3.0));
    assert_eq!(extractor.center(&paths), point(8.0 / 3.0, 1.0));
}

#[test]
fn path_data_warnings() {
    let svg = r#"<svg><path d="M 0 0 A 5 5 0 0 1 10 10 L 10 0 L 5"/></svg>"#;
    let extraction = Extractor::default().extract_points(svg, Some(100.0)).unwrap();
    assert_eq!(extraction.paths, vec![vec![point(0.0, 0.0), point(10.0, 0.0)]]);
    assert_eq!(extraction.warnings.len(), 2);
}
