use crate::geom::PointBudget;
use crate::math::Size;

/// Parameters for the [`Extractor`](crate::Extractor).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
#[non_exhaustive]
pub struct ExtractorOptions {
    /// Fixed distance between consecutive points. When `None`, the density is
    /// derived from the size of each document.
    ///
    /// Default value: `None`.
    pub point_density: Option<f64>,

    /// Multiplied with the largest declared dimension of a document to get its
    /// density.
    ///
    /// Default value: `ExtractorOptions::DEFAULT_DENSITY_FACTOR`.
    pub density_factor: f64,

    /// Maximum number of points a single extraction may produce.
    ///
    /// Default value: `ExtractorOptions::DEFAULT_MAX_POINTS`.
    pub max_points: usize,

    /// Only extract these elements (lower-case tag names).
    ///
    /// Default value: `None`.
    pub include_only: Option<Vec<String>>,

    /// Never extract these elements (lower-case tag names).
    ///
    /// Default value: empty.
    pub exclude: Vec<String>,

    /// Move and scale the result to fit this size.
    ///
    /// Default value: `None`.
    pub normalize_to_size: Option<Size>,

    /// Append the first point to closed shapes.
    ///
    /// Default value: `true`.
    pub close_paths: bool,

    /// Start each sub-path of a path where the previous one ended.
    ///
    /// Default value: `false`.
    pub chain_subpaths: bool,
}

impl ExtractorOptions {
    pub const DEFAULT_DENSITY_FACTOR: f64 = 0.0075;
    pub const DEFAULT_MAX_POINTS: usize = PointBudget::DEFAULT_LIMIT;

    pub const DEFAULT: Self = ExtractorOptions {
        point_density: None,
        density_factor: Self::DEFAULT_DENSITY_FACTOR,
        max_points: Self::DEFAULT_MAX_POINTS,
        include_only: None,
        exclude: Vec::new(),
        normalize_to_size: None,
        close_paths: true,
        chain_subpaths: false,
    };

    #[inline]
    pub fn density(density: f64) -> Self {
        Self::DEFAULT.with_point_density(Some(density))
    }

    #[inline]
    pub fn with_point_density(mut self, density: Option<f64>) -> Self {
        self.point_density = density;
        self
    }

    #[inline]
    pub fn with_density_factor(mut self, factor: f64) -> Self {
        self.density_factor = factor;
        self
    }

    #[inline]
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    pub fn with_include_only<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_only = Some(lowercase_tags(tags));
        self
    }

    pub fn with_exclude<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = lowercase_tags(tags);
        self
    }

    #[inline]
    pub fn with_normalize_to_size(mut self, size: Option<Size>) -> Self {
        self.normalize_to_size = size;
        self
    }

    #[inline]
    pub fn with_close_paths(mut self, close_paths: bool) -> Self {
        self.close_paths = close_paths;
        self
    }

    #[inline]
    pub fn with_chain_subpaths(mut self, chain_subpaths: bool) -> Self {
        self.chain_subpaths = chain_subpaths;
        self
    }

    /// Whether elements named `tag` pass the include and exclude filters.
    pub fn accepts(&self, tag: &str) -> bool {
        if let Some(include) = &self.include_only {
            if !include.iter().any(|t| t == tag) {
                return false;
            }
        }

        !self.exclude.iter().any(|t| t == tag)
    }
}

fn lowercase_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tags.into_iter()
        .map(|tag| {
            let tag: String = tag.into();
            tag.to_ascii_lowercase()
        })
        .collect()
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn default_options() {
    let options = ExtractorOptions::default();
    assert_eq!(options.point_density, None);
    assert_eq!(options.density_factor, 0.0075);
    assert_eq!(options.max_points, 1_000_000);
    assert!(options.close_paths);
    assert!(!options.chain_subpaths);
    assert!(options.accepts("path"));
}

#[test]
fn element_filters() {
    let options = ExtractorOptions::DEFAULT
        .with_include_only(vec!["Path", "rect"])
        .with_exclude(vec!["rect"]);
    assert!(options.accepts("path"));
    assert!(!options.accepts("rect"));
    assert!(!options.accepts("circle"));

    let options = ExtractorOptions::DEFAULT.with_exclude(vec!["line".to_string()]);
    assert!(!options.accepts("line"));
    assert!(options.accepts("polyline"));
}
