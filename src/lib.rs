#![warn(bare_trait_objects)]

//!
//! # Bezier curve segments
//!
//! Parametric curve segments (quadratic and cubic beziers) and the closed-form
//! algorithms that operate on them: evaluation, subdivision, bounding boxes,
//! ray intersection with winding accumulation, stroke offsetting and
//! affine-reparameterization overlap detection.
//!
//! Segments are immutable values: every operation that needs a modified curve
//! (subdivision, reversal, transformation, degree changes) returns a new
//! instance.
//!

extern crate roots;
extern crate itertools;

pub mod bezier;
pub mod line;

pub mod consts;
pub use self::consts::*;

pub mod coordinate;
pub use self::coordinate::*;

pub mod geo;
pub use self::geo::*;

pub mod transform;
pub use self::transform::*;

pub use self::bezier::{CurveSegment, QuadraticCurve, CubicCurve, Segment, Ray, RayIntersection, CurveOverlap};
pub use self::line::{Line, LineSegment};
