#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! SVG shape elements traced into point sequences.
//!
//! This crate is reexported in [svg_points](../svg_points/index.html).
//!
//! An [`Element`] is built from a tag name and anything implementing
//! [`Attributes`], then traced at a given density. The tracers for each kind
//! of shape live in the [basic_shapes](basic_shapes/index.html) module, path
//! data is handled by [svg_points_path](../svg_points_path/index.html).
//!
//! # Examples
//!
//! ```
//! use svg_points_shapes::Element;
//! use svg_points_shapes::geom::PointBudget;
//! use svg_points_shapes::math::point;
//! use svg_points_shapes::path::{PathSampler, SampleOptions};
//!
//! let rect = Element::from_attributes(
//!     "rect",
//!     &[("x", "20"), ("y", "20"), ("width", "60"), ("height", "40")],
//! ).unwrap();
//!
//! let mut budget = PointBudget::default();
//! let mut warnings = Vec::new();
//! let sequences = rect.trace(
//!     &mut PathSampler::new(),
//!     &SampleOptions::density(7.0),
//!     &mut budget,
//!     &mut warnings,
//! ).unwrap();
//!
//! let points = &sequences[0];
//! for corner in &[point(20.0, 20.0), point(80.0, 20.0), point(80.0, 60.0), point(20.0, 60.0)] {
//!     assert!(points.contains(corner));
//! }
//! ```

pub use svg_points_path as path;
pub use svg_points_path::geom;
pub use svg_points_path::math;

#[cfg(feature = "serialization")]
#[macro_use]
extern crate serde;

mod attributes;
pub mod basic_shapes;
mod element;
mod shape;

#[doc(inline)]
pub use crate::attributes::{number_attribute, parse_points, Attributes};
#[doc(inline)]
pub use crate::element::Element;
#[doc(inline)]
pub use crate::shape::{Circle, Ellipse, Line, PathData, Polygon, Polyline, Rect, Shape};
