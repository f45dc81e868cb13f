use super::solve::*;
use super::quadratic::*;
use super::cubic::*;
use super::super::consts::*;
use super::super::coordinate::*;

///
/// An affine reparameterization pair `(a, b)` such that evaluating one curve
/// at parameter t gives the same point as evaluating another curve at
/// `a*t + b`, over the sub-domain where both parameters map into [0,1]
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CurveOverlap {
    pub a: f64,
    pub b: f64
}

impl CurveOverlap {
    ///
    /// Maps a parameter on the first curve to the matching parameter on the second
    ///
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        self.a*t + self.b
    }
}

///
/// Answer from the 1-D polynomial overlap primitive for a single axis
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum AxisOverlap {
    /// The axis is degenerate (both polynomials constant and equal): any pair satisfies it
    Any,

    /// A concrete reparameterization pair
    Pair(f64, f64)
}

///
/// Solves `p(t) == q(a*t + b)` for two linear polynomials given in power
/// basis (`p = p0 + p1*t`)
///
pub fn polynomial_overlap_linear(p: [f64; 2], q: [f64; 2]) -> Option<AxisOverlap> {
    if q[1] == 0.0 {
        return if p[1] == 0.0 && p[0] == q[0] { Some(AxisOverlap::Any) } else { None };
    }

    let a = p[1] / q[1];
    if a == 0.0 {
        return None;
    }

    let b = (p[0] - q[0]) / q[1];

    Some(AxisOverlap::Pair(a, b))
}

///
/// Solves `p(t) == q(a*t + b)` for two quadratic polynomials given in power basis
///
pub fn polynomial_overlap_quadratic(p: [f64; 3], q: [f64; 3]) -> Option<AxisOverlap> {
    if q[2] == 0.0 {
        return if p[2] == 0.0 { polynomial_overlap_linear([p[0], p[1]], [q[0], q[1]]) } else { None };
    }

    // The leading coefficients fix a (up to sign; we take the positive root
    // and let coefficient verification reject a wrong-sign candidate)
    let discriminant = p[2] / q[2];
    if discriminant < 0.0 {
        return None;
    }

    let a = discriminant.sqrt();
    if a == 0.0 {
        return None;
    }

    let b = (p[1] - a*q[1]) / (2.0*a*q[2]);

    Some(AxisOverlap::Pair(a, b))
}

///
/// Solves `p(t) == q(a*t + b)` for two cubic polynomials given in power basis
///
pub fn polynomial_overlap_cubic(p: [f64; 4], q: [f64; 4]) -> Option<AxisOverlap> {
    if q[3] == 0.0 {
        return if p[3] == 0.0 { polynomial_overlap_quadratic([p[0], p[1], p[2]], [q[0], q[1], q[2]]) } else { None };
    }

    let a = cube_root(p[3] / q[3]);
    if a == 0.0 {
        return None;
    }

    let b = (p[2] - a*a*q[2]) / (3.0*a*a*q[3]);

    Some(AxisOverlap::Pair(a, b))
}

///
/// Converts the control values of one axis of a quadratic curve into
/// power-basis polynomial coefficients
///
#[inline]
pub fn quadratic_power_basis(v0: f64, v1: f64, v2: f64) -> [f64; 3] {
    [v0, 2.0*(v1 - v0), v0 - 2.0*v1 + v2]
}

///
/// Converts the control values of one axis of a cubic curve into power-basis
/// polynomial coefficients
///
#[inline]
pub fn cubic_power_basis(v0: f64, v1: f64, v2: f64, v3: f64) -> [f64; 4] {
    [v0, 3.0*(v1 - v0), 3.0*(v0 - 2.0*v1 + v2), -v0 + 3.0*v1 - 3.0*v2 + v3]
}

///
/// Power-basis coefficients of `q(a*t + b)` for a quadratic polynomial
///
#[inline]
fn reparameterize_quadratic(q: [f64; 3], a: f64, b: f64) -> [f64; 3] {
    [
        q[0] + q[1]*b + q[2]*b*b,
        a*(q[1] + 2.0*q[2]*b),
        a*a*q[2]
    ]
}

///
/// Power-basis coefficients of `q(a*t + b)` for a cubic polynomial
///
#[inline]
fn reparameterize_cubic(q: [f64; 4], a: f64, b: f64) -> [f64; 4] {
    [
        q[0] + q[1]*b + q[2]*b*b + q[3]*b*b*b,
        a*(q[1] + 2.0*q[2]*b + 3.0*q[3]*b*b),
        a*a*(q[2] + 3.0*q[3]*b),
        a*a*a*q[3]
    ]
}

///
/// Reconciles the per-axis answers: a concrete pair wins over a degenerate
/// axis, and two degenerate axes mean the curves are points (no overlap
/// object is produced for those)
///
fn reconcile(x_overlap: Option<AxisOverlap>, y_overlap: Option<AxisOverlap>) -> Option<CurveOverlap> {
    match (x_overlap?, y_overlap?) {
        (AxisOverlap::Pair(a, b), _)                    => Some(CurveOverlap { a: a, b: b }),
        (AxisOverlap::Any, AxisOverlap::Pair(a, b))     => Some(CurveOverlap { a: a, b: b }),
        (AxisOverlap::Any, AxisOverlap::Any)            => None
    }
}

///
/// True if the reparameterized endpoints `[b, a+b]` intersect [0,1]
///
#[inline]
fn domain_intersects_unit(overlap: &CurveOverlap) -> bool {
    let t0 = overlap.apply(0.0);
    let t1 = overlap.apply(1.0);

    let lower = t0.min(t1);
    let upper = t0.max(t1);

    upper >= 0.0 && lower <= 1.0
}

///
/// Determines whether one quadratic curve is an affine reparameterization of
/// another over a continuous sub-domain
///
pub fn quadratic_overlap<P: Coordinate2D>(curve1: &QuadraticCurve<P>, curve2: &QuadraticCurve<P>) -> Option<CurveOverlap> {
    let px = quadratic_power_basis(curve1.start_point.x(), curve1.control_point.x(), curve1.end_point.x());
    let py = quadratic_power_basis(curve1.start_point.y(), curve1.control_point.y(), curve1.end_point.y());
    let qx = quadratic_power_basis(curve2.start_point.x(), curve2.control_point.x(), curve2.end_point.x());
    let qy = quadratic_power_basis(curve2.start_point.y(), curve2.control_point.y(), curve2.end_point.y());

    let overlap = reconcile(
        polynomial_overlap_quadratic(px, qx),
        polynomial_overlap_quadratic(py, qy))?;

    // Substitute the candidate back into every coefficient equation
    let magnitude: f64  = px.iter().chain(py.iter()).chain(qx.iter()).chain(qy.iter()).map(|coefficient| coefficient.abs()).sum();
    let epsilon         = magnitude * OVERLAP_EPSILON_SCALE;

    let rx = reparameterize_quadratic(qx, overlap.a, overlap.b);
    let ry = reparameterize_quadratic(qy, overlap.a, overlap.b);

    let verified = (0..3).all(|index| (px[index]-rx[index]).abs() <= epsilon && (py[index]-ry[index]).abs() <= epsilon);

    if verified && domain_intersects_unit(&overlap) {
        Some(overlap)
    } else {
        None
    }
}

///
/// Determines whether one cubic curve is an affine reparameterization of
/// another over a continuous sub-domain
///
pub fn cubic_overlap<P: Coordinate2D>(curve1: &CubicCurve<P>, curve2: &CubicCurve<P>) -> Option<CurveOverlap> {
    let (c1_cp1, c1_cp2) = curve1.control_points;
    let (c2_cp1, c2_cp2) = curve2.control_points;

    let px = cubic_power_basis(curve1.start_point.x(), c1_cp1.x(), c1_cp2.x(), curve1.end_point.x());
    let py = cubic_power_basis(curve1.start_point.y(), c1_cp1.y(), c1_cp2.y(), curve1.end_point.y());
    let qx = cubic_power_basis(curve2.start_point.x(), c2_cp1.x(), c2_cp2.x(), curve2.end_point.x());
    let qy = cubic_power_basis(curve2.start_point.y(), c2_cp1.y(), c2_cp2.y(), curve2.end_point.y());

    let overlap = reconcile(
        polynomial_overlap_cubic(px, qx),
        polynomial_overlap_cubic(py, qy))?;

    // Substitute the candidate back into every coefficient equation
    let magnitude: f64  = px.iter().chain(py.iter()).chain(qx.iter()).chain(qy.iter()).map(|coefficient| coefficient.abs()).sum();
    let epsilon         = magnitude * OVERLAP_EPSILON_SCALE;

    let rx = reparameterize_cubic(qx, overlap.a, overlap.b);
    let ry = reparameterize_cubic(qy, overlap.a, overlap.b);

    let verified = (0..4).all(|index| (px[index]-rx[index]).abs() <= epsilon && (py[index]-ry[index]).abs() <= epsilon);

    if verified && domain_intersects_unit(&overlap) {
        Some(overlap)
    } else {
        None
    }
}
