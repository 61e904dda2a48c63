use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::path::Path;

use crate::algorithms;
use crate::document::{declared_size, shape_elements, DEFAULT_DOCUMENT_SIZE};
use crate::geom::PointBudget;
use crate::math::{Box2D, Point, Size};
use crate::path::{PathSampler, SampleOptions, Warning};
use crate::shapes::Element;
use crate::{ExtractError, ExtractorOptions};

/// Choose the density of an extraction.
///
/// A call-time override wins over the extractor's fixed density, otherwise
/// the density is the largest declared dimension times `factor`.
///
/// ```
/// use svg_points_svg::resolve_density;
/// use svg_points_svg::math::size;
///
/// assert_eq!(resolve_density(Some(2.0), Some(3.0), size(100.0, 100.0), 0.01), 2.0);
/// assert_eq!(resolve_density(None, Some(3.0), size(100.0, 100.0), 0.01), 3.0);
/// assert_eq!(resolve_density(None, None, size(400.0, 100.0), 0.01), 4.0);
/// ```
pub fn resolve_density(
    override_density: Option<f64>,
    fixed_density: Option<f64>,
    declared_size: Size,
    factor: f64,
) -> f64 {
    override_density
        .or(fixed_density)
        .unwrap_or_else(|| declared_size.width.max(declared_size.height) * factor)
}

/// The result of an extraction.
#[derive(Clone, Debug, PartialEq)]
pub struct Extraction<T> {
    /// Non-empty point sequences in document order.
    pub paths: Vec<T>,
    /// Problems found in path data.
    pub warnings: Vec<Warning>,
}

/// A point sequence and the element it was traced from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PathMetadata {
    pub points: Vec<Point>,
    /// Lower-case tag name.
    pub element: String,
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub attributes: BTreeMap<String, String>,
}

impl AsRef<[Point]> for PathMetadata {
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}

impl AsMut<[Point]> for PathMetadata {
    fn as_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }
}

/// Extracts point sequences from SVG documents.
///
/// The extractor only holds its options and can be shared between threads.
/// Each extraction has its own point budget.
///
/// ## Example
///
/// ```
/// use svg_points_svg::{Extractor, ExtractorOptions};
/// use svg_points_svg::math::point;
///
/// let svg = r#"<svg viewBox="0 0 100 100">
///     <path d="M 10 10 L 90 10 L 90 90 Z"/>
///     <circle cx="50" cy="50" r="0"/>
/// </svg>"#;
///
/// let extractor = Extractor::new(ExtractorOptions::default());
/// let extraction = extractor.extract_points(svg, Some(10.0)).unwrap();
///
/// assert_eq!(extraction.paths.len(), 1);
/// assert_eq!(extraction.paths[0][0], point(10.0, 10.0));
/// assert!(extraction.warnings.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Extractor {
    options: ExtractorOptions,
}

impl Extractor {
    pub fn new(options: ExtractorOptions) -> Self {
        Extractor { options }
    }

    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    /// Extract the points of all shapes of an SVG document.
    pub fn extract_points(
        &self,
        svg: &str,
        density: Option<f64>,
    ) -> Result<Extraction<Vec<Point>>, ExtractError> {
        let doc = roxmltree::Document::parse(svg)?;
        let density = self.density_for(density, declared_size(&doc));
        let elements = shape_elements(&doc);

        self.extract(&elements, density, |_, points| points)
    }

    /// Extract the points of all shapes of an SVG document along with the id,
    /// class and attributes of their element.
    pub fn extract_points_with_metadata(
        &self,
        svg: &str,
        density: Option<f64>,
    ) -> Result<Extraction<PathMetadata>, ExtractError> {
        let doc = roxmltree::Document::parse(svg)?;
        let density = self.density_for(density, declared_size(&doc));
        let elements = shape_elements(&doc);

        self.extract(&elements, density, |element, points| PathMetadata {
            points,
            element: element.tag().to_string(),
            id: element.id.clone(),
            class_name: element.class_name.clone(),
            attributes: element.attributes.clone(),
        })
    }

    /// Read an SVG file and extract its points.
    pub fn extract_points_from_file<P: AsRef<Path>>(
        &self,
        path: P,
        density: Option<f64>,
    ) -> Result<Extraction<Vec<Point>>, ExtractError> {
        let svg = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Read {} bytes from {}.", svg.len(), path.as_ref().display());

        self.extract_points(&svg, density)
    }

    /// Extract the points of elements coming from another document model.
    ///
    /// Without a density, the default document size is used to derive one.
    pub fn extract_elements<Iter, E>(
        &self,
        elements: Iter,
        density: Option<f64>,
    ) -> Result<Extraction<Vec<Point>>, ExtractError>
    where
        Iter: IntoIterator<Item = E>,
        E: Borrow<Element>,
    {
        let default_size = Size::new(DEFAULT_DOCUMENT_SIZE, DEFAULT_DOCUMENT_SIZE);
        let density = self.density_for(density, default_size);

        self.extract(elements, density, |_, points| points)
    }

    pub fn bounding_box<P: AsRef<[Point]>>(&self, paths: &[P]) -> Box2D {
        algorithms::bounding_box(paths)
    }

    pub fn total_length<P: AsRef<[Point]>>(&self, paths: &[P]) -> f64 {
        algorithms::total_length(paths)
    }

    pub fn center<P: AsRef<[Point]>>(&self, paths: &[P]) -> Point {
        algorithms::center(paths)
    }

    fn density_for(&self, density: Option<f64>, declared_size: Size) -> f64 {
        resolve_density(
            density,
            self.options.point_density,
            declared_size,
            self.options.density_factor,
        )
    }

    fn extract<Iter, E, T, F>(
        &self,
        elements: Iter,
        density: f64,
        mut make_path: F,
    ) -> Result<Extraction<T>, ExtractError>
    where
        Iter: IntoIterator<Item = E>,
        E: Borrow<Element>,
        T: AsRef<[Point]> + AsMut<[Point]>,
        F: FnMut(&Element, Vec<Point>) -> T,
    {
        if !(density.is_finite() && density > 0.0) {
            return Err(ExtractError::InvalidDensity { density });
        }

        let options = SampleOptions::density(density)
            .with_close_paths(self.options.close_paths)
            .with_chain_subpaths(self.options.chain_subpaths);
        let mut budget = PointBudget::new(self.options.max_points);
        let mut sampler = PathSampler::new();
        let mut warnings = Vec::new();
        let mut paths = Vec::new();

        for element in elements {
            let element = element.borrow();
            if !self.options.accepts(element.tag()) {
                log::trace!("Skipping filtered <{}>.", element.tag());
                continue;
            }

            let sequences = element.trace(&mut sampler, &options, &mut budget, &mut warnings)?;
            log::trace!("Traced {} sequence(s) from <{}>.", sequences.len(), element.tag());

            for points in sequences {
                paths.push(make_path(element, points));
            }
        }

        if let Some(size) = self.options.normalize_to_size {
            algorithms::normalize_to_size(&mut paths, size);
        }

        log::debug!(
            "Extracted {} path(s), {} point(s) at density {}.",
            paths.len(),
            budget.used(),
            density
        );

        Ok(Extraction { paths, warnings })
    }
}

#[cfg(test)]
use crate::math::point;

#[test]
fn density_resolution() {
    let svg = r#"<svg viewBox="0 0 400 200"><line x2="4"/></svg>"#;
    // 400 * 0.0075 = 3.
    let extraction = Extractor::default().extract_points(svg, None).unwrap();
    assert_eq!(extraction.paths[0], vec![point(0.0, 0.0), point(4.0, 0.0)]);

    let extraction = Extractor::default().extract_points(svg, Some(1.0)).unwrap();
    assert_eq!(extraction.paths[0].len(), 5);

    let fixed = Extractor::new(ExtractorOptions::density(2.0));
    assert_eq!(fixed.extract_points(svg, None).unwrap().paths[0].len(), 3);
}

#[test]
fn invalid_density() {
    let svg = r#"<svg><line x2="4"/></svg>"#;
    let extractor = Extractor::default();
    for density in &[0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            extractor.extract_points(svg, Some(*density)),
            Err(ExtractError::InvalidDensity { .. })
        ));
    }

    let zero_factor = Extractor::new(ExtractorOptions::DEFAULT.with_density_factor(0.0));
    assert!(zero_factor.extract_points(svg, None).is_err());
}

#[test]
fn invalid_xml() {
    assert!(matches!(
        Extractor::default().extract_points("<svg><path></svg>", None),
        Err(ExtractError::Xml(..))
    ));
}

#[test]
fn metadata() {
    let svg = r#"<svg>
        <rect id="box" class="frame" width="10" height="10"/>
        <path d="M 0 0 L 1 0 M 5 5 L 6 5"/>
    </svg>"#;
    let extraction = Extractor::default()
        .extract_points_with_metadata(svg, Some(1.0))
        .unwrap();

    assert_eq!(extraction.paths.len(), 3);
    let rect = &extraction.paths[0];
    assert_eq!(rect.element, "rect");
    assert_eq!(rect.id.as_deref(), Some("box"));
    assert_eq!(rect.class_name.as_deref(), Some("frame"));
    assert_eq!(rect.attributes["width"], "10");

    assert_eq!(extraction.paths[1].element, "path");
    assert_eq!(extraction.paths[1].id, None);
    assert_eq!(extraction.paths[2].points[0], point(5.0, 5.0));
}

#[test]
fn filters_apply_to_all_entry_points() {
    let svg = r#"<svg><rect width="10" height="10"/><circle r="5"/><line x2="1"/></svg>"#;
    let options = ExtractorOptions::density(1.0)
        .with_include_only(vec!["rect", "line"])
        .with_exclude(vec!["line"]);
    let extractor = Extractor::new(options);

    assert_eq!(extractor.extract_points(svg, None).unwrap().paths.len(), 1);

    let with_metadata = extractor.extract_points_with_metadata(svg, None).unwrap();
    assert_eq!(with_metadata.paths.len(), 1);
    assert_eq!(with_metadata.paths[0].element, "rect");

    let elements = vec![
        Element::from_attributes("circle", &[("r", "5")]).unwrap(),
        Element::from_attributes("RECT", &[("width", "2"), ("height", "2")]).unwrap(),
    ];
    assert_eq!(extractor.extract_elements(&elements, None).unwrap().paths.len(), 1);
}

#[test]
fn budget_exceeded() {
    let svg = r#"<svg><circle r="1000"/></svg>"#;
    let extractor = Extractor::new(ExtractorOptions::DEFAULT.with_max_points(100));
    assert!(matches!(
        extractor.extract_points(svg, Some(1.0)),
        Err(ExtractError::Sample(..))
    ));
    assert!(extractor.extract_points(svg, Some(100.0)).is_ok());
}

#[test]
fn normalization() {
    let svg = r#"<svg><line x1="10" y1="10" x2="30" y2="20"/><line x1="10" y1="20" x2="10" y2="20"/></svg>"#;
    let extractor = Extractor::new(
        ExtractorOptions::density(100.0).with_normalize_to_size(Some(Size::new(100.0, 100.0))),
    );
    let extraction = extractor.extract_points(svg, None).unwrap();
    assert_eq!(
        extraction.paths,
        vec![
            vec![point(0.0, 0.0), point(100.0, 50.0)],
            vec![point(0.0, 50.0)],
        ]
    );

    let with_metadata = extractor.extract_points_with_metadata(svg, None).unwrap();
    assert_eq!(with_metadata.paths[0].points, extraction.paths[0]);
}

#[test]
fn warnings_are_collected() {
    let svg = r#"<svg><path d="M 0 0 A 1 1 0 0 1 5 5 L 10 0"/></svg>"#;
    let extraction = Extractor::default().extract_points(svg, Some(100.0)).unwrap();
    assert_eq!(extraction.paths, vec![vec![point(0.0, 0.0), point(10.0, 0.0)]]);
    assert_eq!(extraction.warnings.len(), 1);
}

#[test]
fn forwards() {
    let paths = vec![vec![point(0.0, 0.0), point(4.0, 0.0)]];
    let extractor = Extractor::default();
    assert_eq!(extractor.total_length(&paths), 4.0);
    assert_eq!(extractor.center(&paths), point(2.0, 0.0));
    assert_eq!(extractor.bounding_box(&paths).max, point(4.0, 0.0));
}

#[test]
fn extractor_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Extractor>();
}
