#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Point extraction from SVG documents.
//!
//! This crate is reexported in [svg_points](../svg_points/index.html).
//!
//! Documents are parsed with [roxmltree](https://docs.rs/roxmltree/). Every
//! shape element (`path`, `line`, `circle`, `ellipse`, `rect`, `polygon` and
//! `polyline`) found in the document is traced into point sequences by an
//! [`Extractor`], whatever its nesting.
//!
//! # Density
//!
//! Unless a density is given, it is derived from the size the document
//! declares (see [`document::declared_size`]) multiplied by
//! [`ExtractorOptions::density_factor`], so that documents of any scale get a
//! comparable number of points.

pub use svg_points_algorithms as algorithms;
pub use svg_points_shapes as shapes;
pub use svg_points_shapes::geom;
pub use svg_points_shapes::math;
pub use svg_points_shapes::path;

#[cfg(feature = "serialization")]
#[macro_use]
extern crate serde;

pub mod document;
mod error;
mod extractor;
mod options;

#[doc(inline)]
pub use crate::error::ExtractError;
#[doc(inline)]
pub use crate::extractor::{resolve_density, Extraction, Extractor, PathMetadata};
#[doc(inline)]
pub use crate::options::ExtractorOptions;
