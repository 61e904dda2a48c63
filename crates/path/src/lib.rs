#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::too_many_arguments)]

//! Parsing and sampling of SVG path data.
//!
//! This crate is reexported in [svg_points](../svg_points/index.html).
//!
//! The entry point is the [`PathSampler`], which turns the content of a `d`
//! attribute into one point sequence per sub-path. The lower level pieces are
//! available too:
//!
//! - the [numbers](numbers/index.html) module lexes number lists,
//! - the [commands](commands/index.html) module splits path data into command
//!   tokens,
//! - the [transform](transform/index.html) module parses `transform`
//!   attributes.
//!
//! # Examples
//!
//! ```
//! use svg_points_path::{sample_path, SampleOptions};
//! use svg_points_path::math::point;
//!
//! let sub_paths = sample_path("M 0 0 L 10 0 M 0 5 L 10 5", &SampleOptions::density(1.0)).unwrap();
//!
//! assert_eq!(sub_paths.len(), 2);
//! assert_eq!(sub_paths[0].points.len(), 11);
//! assert_eq!(sub_paths[1].points[0], point(0.0, 5.0));
//! ```

pub use svg_points_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod commands;
mod diagnostics;
pub mod numbers;
pub mod sampler;
pub mod transform;

#[doc(inline)]
pub use crate::diagnostics::Warning;
#[doc(inline)]
pub use crate::sampler::{sample_path, PathSampler, SubPath};
#[doc(inline)]
pub use crate::transform::parse_transform;

pub use svg_points_geom::math;

/// Parameters for sampling paths and shapes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct SampleOptions {
    /// Desired distance between consecutive points.
    ///
    /// Default value: `SampleOptions::DEFAULT_DENSITY`.
    pub density: f64,

    /// Append the first point to closed shapes that do not already end on it.
    ///
    /// Default value: `true`.
    pub close_paths: bool,

    /// Start each sub-path from where the previous one ended instead of the
    /// origin, as SVG renderers do for relative move-tos.
    ///
    /// Default value: `false`.
    pub chain_subpaths: bool,
}

impl SampleOptions {
    /// The density derived from the default document size (100) and the
    /// default density factor (0.0075).
    pub const DEFAULT_DENSITY: f64 = 0.75;

    pub const DEFAULT: Self = SampleOptions {
        density: Self::DEFAULT_DENSITY,
        close_paths: true,
        chain_subpaths: false,
    };

    #[inline]
    pub fn density(density: f64) -> Self {
        Self::DEFAULT.with_density(density)
    }

    #[inline]
    pub const fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    #[inline]
    pub const fn with_close_paths(mut self, close_paths: bool) -> Self {
        self.close_paths = close_paths;
        self
    }

    #[inline]
    pub const fn with_chain_subpaths(mut self, chain_subpaths: bool) -> Self {
        self.chain_subpaths = chain_subpaths;
        self
    }
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn options_builders() {
    let options = SampleOptions::density(2.0)
        .with_close_paths(false)
        .with_chain_subpaths(true);
    assert_eq!(options.density, 2.0);
    assert!(!options.close_paths);
    assert!(options.chain_subpaths);
    assert_eq!(SampleOptions::default(), SampleOptions::DEFAULT);
}
