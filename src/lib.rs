#![deny(bare_trait_objects)]

//! Evenly spaced point sequences from the shapes of SVG documents.
//!
//! The points are meant for plotters, laser cutters, particle effects and
//! other consumers that want positions along outlines rather than curves.
//!
//! # Crates
//!
//! This meta-crate (`svg_points`) reexports the following sub-crates for convenience:
//!
//! * **svg_points_geom** - Points, line segments, fixed-step bézier sampling and transforms.
//! * **svg_points_path** - Parsing and sampling of path data and `transform` attributes.
//! * **svg_points_shapes** - Shape elements (`line`, `circle`, `rect`, ...) traced into points.
//! * **svg_points_algorithms** - Bounding box, length, center and normalization of point sequences.
//! * **svg_points_svg** - Documents, declared sizes and the [`Extractor`].
//!
//! Each `svg_points_<name>` crate is reexported as a `<name>` module in `svg_points`. For example:
//!
//! ```ignore
//! extern crate svg_points_shapes;
//! use svg_points_shapes::Element;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate svg_points;
//! use svg_points::shapes::Element;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ## Extracting the points of a document
//!
//! ```
//! use svg_points::{Extractor, ExtractorOptions};
//! use svg_points::math::point;
//!
//! let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
//!     <rect x="20" y="20" width="60" height="40"/>
//!     <polygon points="50,10 90,90 10,90"/>
//! </svg>"#;
//!
//! let extractor = Extractor::new(ExtractorOptions::density(5.0));
//! let extraction = extractor.extract_points(svg, None).unwrap();
//!
//! assert_eq!(extraction.paths.len(), 2);
//! let polygon = &extraction.paths[1];
//! assert_eq!(polygon.first(), Some(&point(50.0, 10.0)));
//! assert_eq!(polygon.last(), Some(&point(50.0, 10.0)));
//! ```
//!
//! ## Sampling path data directly
//!
//! ```
//! use svg_points::path::{sample_path, SampleOptions};
//!
//! let sub_paths = sample_path("M 10 10 L 90 10 L 90 90 Z", &SampleOptions::density(10.0)).unwrap();
//! assert!(sub_paths[0].closed);
//! ```

pub use svg_points_algorithms as algorithms;
pub use svg_points_geom as geom;
pub use svg_points_path as path;
pub use svg_points_shapes as shapes;
pub use svg_points_svg as svg;

pub use crate::geom::math;

#[doc(inline)]
pub use crate::svg::{
    resolve_density, ExtractError, Extraction, Extractor, ExtractorOptions, PathMetadata,
};
