//!
//! Tolerance constants, one per algorithm family.
//!
//! These encode real precision/false-negative tradeoffs: the test suite pins
//! their boundary behavior, so changing one changes observable results.
//!

/// Distance below which two points count as coincident when classifying degenerate curves
pub const SMALL_DISTANCE: f64 = 1e-10;

/// Maximum distance from the chord line for a point to count as collinear with it
pub const COLLINEARITY_TOLERANCE: f64 = 1e-10;

/// Width of the parameter zone at either end of a curve inside which the
/// closed-form endpoint curvature applies (outside it we subdivide first)
pub const CURVATURE_ENDPOINT_ZONE: f64 = 1e-7;

/// Maximum tangent magnitude for a parameter value to be treated as a cusp
pub const CUSP_TANGENT_TOLERANCE: f64 = 1e-7;

/// Relative guard on the a⊥·b denominator in the cusp/inflection equations
pub const CUSP_DENOMINATOR_TOLERANCE: f64 = 1e-12;

/// Default tolerance when reducing a cubic to an equivalent quadratic
pub const DEGREE_REDUCTION_TOLERANCE: f64 = 1e-9;

/// Scale factor applied to the summed coefficient magnitudes when verifying
/// an overlap candidate against the coefficient equations
pub const OVERLAP_EPSILON_SCALE: f64 = 1e-6;

/// Minimum magnitude for a ray direction vector
pub const RAY_DIRECTION_TOLERANCE: f64 = 1e-10;

/// Slop applied when clipping curve-parameter roots to [0, 1] (root finding
/// is not exact at the endpoints)
pub const RAY_ROOT_CLIP_TOLERANCE: f64 = 1e-9;
