#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]

//! Simple 2D geometric primitives on top of euclid.
//!
//! This crate is reexported in [svg_points](../svg_points/index.html).
//!
//! # Overview.
//!
//! This crate implements the maths needed to turn shapes into point sequences:
//!
//! - line segments and the linear interpolator,
//! - quadratic and cubic bézier curves sampled with a fixed number of steps,
//! - the affine transforms behind `matrix(...)` and `rotate(...)`,
//! - a point budget bounding the size of a sampling run.
//!
//! # Density
//!
//! All sampling functions take a `density`: the desired distance between two
//! consecutive points, in the units of the shape's coordinate space. The number
//! of steps is derived from a straight-line length divided by the density, with
//! a minimum per primitive. Endpoints are always emitted exactly, whatever the
//! density.
//!
//! Curves use their chord (the distance between their endpoints) rather than
//! their arc length. Strongly curved segments get fewer points than their true
//! length would suggest.

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

// Reexport dependencies.
pub use euclid;

mod budget;
pub mod cubic_bezier;
mod error;
mod line;
pub mod quadratic_bezier;
mod segment;
pub mod transform;
pub mod utils;

#[doc(inline)]
pub use crate::budget::PointBudget;
#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::error::SampleError;
#[doc(inline)]
pub use crate::line::{interpolate, LineSegment};
#[doc(inline)]
pub use crate::quadratic_bezier::QuadraticBezierSegment;
#[doc(inline)]
pub use crate::segment::{FixedStep, Segment};

pub mod math {
    //! f64 versions of the euclid types used everywhere. The other svg_points
    //! crates reexport them.

    use euclid;

    /// Alias for ```euclid::default::Point2D<f64>```.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for ```euclid::default::Vector2D<f64>```.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// Alias for ```euclid::default::Size2D<f64>```.
    pub type Size = euclid::default::Size2D<f64>;

    /// Alias for ```euclid::default::Box2D<f64>```.
    pub type Box2D = euclid::default::Box2D<f64>;

    /// Alias for ```euclid::default::Transform2D<f64>```.
    pub type Transform = euclid::default::Transform2D<f64>;

    /// An angle in radians (f64).
    pub type Angle = euclid::Angle<f64>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Shorthand for `Size::new(w, h)`.
    #[inline]
    pub fn size(w: f64, h: f64) -> Size {
        Size::new(w, h)
    }
}

pub use crate::math::{point, size, vector, Angle, Box2D, Point, Size, Transform, Vector};
