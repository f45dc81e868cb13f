//!
//! # Traits for basic geometric definitions
//!
//! The `Geo` trait is implemented by any type that has a particular type of
//! coordinate: curve segments, lines and bounding boxes all implement it to
//! describe the point type they are built from.
//!
//! `BoundingBox` describes axis-aligned bounding boxes as a trait so that
//! callers can request bounds in their own types as well as in the default
//! `Bounds` type supplied by the library.
//!

mod geo;
mod bounding_box;

pub use self::geo::*;
pub use self::bounding_box::*;
pub use super::coordinate::*;
