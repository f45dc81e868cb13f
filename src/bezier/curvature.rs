use super::super::consts::*;
use super::super::coordinate::*;

///
/// Closed-form signed curvature of a bezier curve at an endpoint
///
/// `p0` is the endpoint the curvature is evaluated at, `p1` the adjacent
/// control point and `p2` the next point along the control polygon. The
/// curvature is `h*(n-1)/(n*a^2)` where `a` is the length of the `p0`→`p1`
/// leg and `h` the signed perpendicular projection of `p2-p1` onto that
/// leg's normal.
///
/// Returns `None` (curvature undefined) rather than dividing by a
/// near-zero leg length.
///
pub fn endpoint_curvature<Point: Coordinate2D>(p0: Point, p1: Point, p2: Point, degree: f64, at_start: bool) -> Option<f64> {
    let leg        = p1 - p0;
    let leg_length = leg.magnitude();

    if leg_length < SMALL_DISTANCE {
        return None;
    }

    let h = leg.perpendicular().to_unit_vector().dot(&(p2 - p1));
    let h = if at_start { h } else { -h };

    Some((h * (degree-1.0)) / (degree * leg_length * leg_length))
}
