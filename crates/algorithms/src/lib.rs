#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! Measuring and fitting of point sequences.
//!
//! This crate is reexported in [svg_points](../svg_points/index.html).
//!
//! All functions accept anything iterable over point slices, such as
//! `&Vec<Vec<Point>>`.

pub extern crate svg_points_geom as geom;

pub mod aabb;
pub mod center;
pub mod fit;
pub mod length;

pub use crate::geom::math;

#[doc(inline)]
pub use crate::aabb::bounding_box;
#[doc(inline)]
pub use crate::center::center;
#[doc(inline)]
pub use crate::fit::normalize_to_size;
#[doc(inline)]
pub use crate::length::total_length;
