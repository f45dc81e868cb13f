use super::basis::*;
use super::bounds::*;
use super::curve::*;
use super::curvature::*;
use super::derivative::*;
use super::offset::*;
use super::overlaps::*;
use super::quadratic::*;
use super::ray::*;
use super::solve::*;
use super::subdivide::*;
use super::svg::*;
use super::super::geo::*;
use super::super::line::*;
use super::super::consts::*;
use super::super::transform::*;
use super::super::coordinate::*;

use std::cmp::Ordering;

///
/// A cubic bezier curve segment (start, two control points, end)
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CubicCurve<Coord: Coordinate> {
    pub start_point:    Coord,
    pub control_points: (Coord, Coord),
    pub end_point:      Coord
}

///
/// Cusp and inflection parameters of a cubic curve
///
/// `t_cusp` is the parameter of the double root of the inflection equation
/// (the candidate cusp); it is only an actual cusp when it lies in [0,1] and
/// the tangent magnitude there degenerates (see `CubicCurve::has_cusp`).
/// Values are `None` where the configuration leaves them undefined.
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CuspInfo {
    pub t_cusp:         Option<f64>,
    pub t_inflection1:  Option<f64>,
    pub t_inflection2:  Option<f64>
}

impl<Coord: Coordinate> CubicCurve<Coord> {
    ///
    /// Creates a new cubic curve from its control points
    ///
    pub fn from_points(start: Coord, (control_point1, control_point2): (Coord, Coord), end: Coord) -> CubicCurve<Coord> {
        CubicCurve {
            start_point:    start,
            control_points: (control_point1, control_point2),
            end_point:      end
        }
    }

    ///
    /// Splits this curve at a point strictly inside (0,1), returning the two halves
    ///
    #[inline]
    pub fn split(&self, t: f64) -> (CubicCurve<Coord>, CubicCurve<Coord>) {
        let (cp1, cp2)      = self.control_points;
        let (left, right)   = subdivide4(t, self.start_point, cp1, cp2, self.end_point);

        (CubicCurve::from_points(left.0, (left.1, left.2), left.3),
            CubicCurve::from_points(right.0, (right.1, right.2), right.3))
    }

    ///
    /// The power-basis polynomial coefficients of this curve: the vectors
    /// (a, b, c, d) with `P(t) = a*t^3 + b*t^2 + c*t + d`
    ///
    #[inline]
    pub fn power_basis(&self) -> (Coord, Coord, Coord, Coord) {
        let (cp1, cp2) = self.control_points;

        let a = (self.end_point - self.start_point) + (cp1 - cp2)*3.0;
        let b = (self.start_point + cp2 - cp1*2.0)*3.0;
        let c = (cp1 - self.start_point)*3.0;
        let d = self.start_point;

        (a, b, c, d)
    }

    ///
    /// Attempts to reduce this curve to an equivalent quadratic
    ///
    /// The two candidate control points `(3*cp1-start)/2` and `(3*cp2-end)/2`
    /// coincide exactly when the cubic was produced by degree elevation;
    /// when they lie within `epsilon` of each other this returns a quadratic
    /// through their average, otherwise the cubic is not reducible.
    ///
    pub fn degree_reduced(&self, epsilon: f64) -> Option<QuadraticCurve<Coord>> {
        let (cp1, cp2)  = self.control_points;
        let candidate1  = (cp1*3.0 - self.start_point)*0.5;
        let candidate2  = (cp2*3.0 - self.end_point)*0.5;

        if candidate1.distance_to(&candidate2) <= epsilon {
            Some(QuadraticCurve::from_points(self.start_point, Coord::interpolate(candidate1, candidate2, 0.5), self.end_point))
        } else {
            None
        }
    }
}

impl<Coord: Coordinate2D> CubicCurve<Coord> {
    ///
    /// The t values strictly inside (0,1) where dx/dt vanishes
    ///
    pub fn x_extrema_ts(&self) -> Vec<f64> {
        let (cp1, cp2) = self.control_points;

        cubic_extrema_ts(self.start_point.x(), cp1.x(), cp2.x(), self.end_point.x()).into_iter()
            .filter(|t| *t > 0.0 && *t < 1.0)
            .collect()
    }

    ///
    /// The t values strictly inside (0,1) where dy/dt vanishes
    ///
    pub fn y_extrema_ts(&self) -> Vec<f64> {
        let (cp1, cp2) = self.control_points;

        cubic_extrema_ts(self.start_point.y(), cp1.y(), cp2.y(), self.end_point.y()).into_iter()
            .filter(|t| *t > 0.0 && *t < 1.0)
            .collect()
    }

    ///
    /// Computes the cusp and inflection parameters of this curve
    ///
    /// From the power-basis coefficients a, b, c: the inflection equation is
    /// `3*(a×b)*t^2 + 3*(a×c)*t + (b×c) = 0`, whose double root is
    /// `t_cusp = -0.5*(a×c)/(a×b)`. A near-zero a×b denominator drops the
    /// equation to its linear form; fully collinear curves instead locate
    /// the cusp from the scalar derivative roots on the dominant axis, so
    /// the computation never divides toward NaN.
    ///
    pub fn cusp_info(&self) -> CuspInfo {
        let (a, b, c, _d) = self.power_basis();

        let cross_ab = a.cross(&b);
        let cross_ac = a.cross(&c);
        let cross_bc = b.cross(&c);

        if cross_ab.abs() > CUSP_DENOMINATOR_TOLERANCE * (a.magnitude()*b.magnitude()).max(1.0) {
            // General case
            let t_cusp          = -0.5 * (cross_ac / cross_ab);
            let t_determinant   = t_cusp*t_cusp - (1.0/3.0)*(cross_bc / cross_ab);

            let (t_inflection1, t_inflection2) = if t_determinant >= 0.0 {
                let offset = t_determinant.sqrt();
                (Some(t_cusp - offset), Some(t_cusp + offset))
            } else {
                (None, None)
            };

            CuspInfo {
                t_cusp:         Some(t_cusp),
                t_inflection1:  t_inflection1,
                t_inflection2:  t_inflection2
            }
        } else if cross_ac.abs() > CUSP_DENOMINATOR_TOLERANCE * (a.magnitude()*c.magnitude()).max(1.0) {
            // The inflection equation degenerates to a linear one
            let t = -cross_bc / (3.0*cross_ac);

            CuspInfo {
                t_cusp:         Some(t),
                t_inflection1:  Some(t),
                t_inflection2:  None
            }
        } else {
            // Fully collinear curve: cusps are where the scalar derivative
            // vanishes along the dominant axis
            CuspInfo {
                t_cusp:         self.collinear_cusp_t(a, b, c),
                t_inflection1:  None,
                t_inflection2:  None
            }
        }
    }

    ///
    /// Cusp parameter for a collinear curve: the first scalar-derivative
    /// root in [0,1] where the full tangent vanishes
    ///
    fn collinear_cusp_t(&self, a: Coord, b: Coord, c: Coord) -> Option<f64> {
        // Dominant axis of the derivative coefficients
        let mut component   = 0;
        let mut best_weight = 0.0;

        for index in 0..Coord::len() {
            let weight = a.get(index).abs() + b.get(index).abs() + c.get(index).abs();

            if weight > best_weight {
                best_weight = weight;
                component   = index;
            }
        }

        // Derivative along that axis is 3*a*t^2 + 2*b*t + c
        let mut roots = solve_quadratic_roots_real(3.0*a.get(component), 2.0*b.get(component), c.get(component));
        roots.sort_by(|t1, t2| t1.partial_cmp(t2).unwrap_or(Ordering::Equal));

        roots.into_iter()
            .filter(|t| *t >= 0.0 && *t <= 1.0)
            .find(|t| self.tangent_at_pos(*t).magnitude() < CUSP_TANGENT_TOLERANCE)
    }

    ///
    /// The cusp parameter, when this curve actually has a cusp
    ///
    fn cusp_t(&self) -> Option<f64> {
        match self.cusp_info().t_cusp {
            Some(t) if t >= 0.0 && t <= 1.0 && self.tangent_at_pos(t).magnitude() < CUSP_TANGENT_TOLERANCE => Some(t),
            _ => None
        }
    }

    ///
    /// True if this curve has a cusp: the candidate parameter lies in [0,1]
    /// and the tangent magnitude there degenerates to (nearly) zero
    ///
    pub fn has_cusp(&self) -> bool {
        self.cusp_t().is_some()
    }

    ///
    /// Splits a curve with a cusp into quadratic curves: one when the cusp
    /// sits exactly at an endpoint, otherwise two joined at the cusp point
    ///
    /// Returns an empty vector for curves without a cusp.
    ///
    pub fn to_quadratics(&self) -> Vec<QuadraticCurve<Coord>> {
        let t_cusp = match self.cusp_t() {
            Some(t) => t,
            None    => return vec![]
        };

        let (cp1, cp2) = self.control_points;

        if t_cusp == 0.0 {
            vec![QuadraticCurve::from_points(self.start_point, cp2, self.end_point)]
        } else if t_cusp == 1.0 {
            vec![QuadraticCurve::from_points(self.start_point, cp1, self.end_point)]
        } else {
            // At the cusp the tangent vanishes, so each half's control point
            // nearest the joint carries no shape: the halves reduce to
            // quadratics through their remaining control points
            let (left, right) = self.split(t_cusp);

            vec![
                QuadraticCurve::from_points(left.start_point, left.control_points.0, left.end_point),
                QuadraticCurve::from_points(right.start_point, right.control_points.1, right.end_point)
            ]
        }
    }

    ///
    /// Determines whether another cubic traces the same geometry as this one
    /// under an affine reparameterization `t -> a*t + b`
    ///
    pub fn overlaps(curve1: &CubicCurve<Coord>, curve2: &CubicCurve<Coord>) -> Option<CurveOverlap> {
        cubic_overlap(curve1, curve2)
    }
}

impl<Coord: Coordinate> Geo for CubicCurve<Coord> {
    type Point = Coord;
}

impl<Coord: Coordinate2D> CurveSegment for CubicCurve<Coord> {
    #[inline]
    fn degree(&self) -> usize {
        3
    }

    #[inline]
    fn start_point(&self) -> Coord {
        self.start_point
    }

    #[inline]
    fn end_point(&self) -> Coord {
        self.end_point
    }

    #[inline]
    fn point_at_pos(&self, t: f64) -> Coord {
        debug_assert!(t >= 0.0 && t <= 1.0);

        let (cp1, cp2) = self.control_points;
        basis4(t, self.start_point, cp1, cp2, self.end_point)
    }

    #[inline]
    fn tangent_at_pos(&self, t: f64) -> Coord {
        debug_assert!(t >= 0.0 && t <= 1.0);

        let (cp1, cp2)      = self.control_points;
        let (d1, d2, d3)    = derivative4(self.start_point, cp1, cp2, self.end_point);

        de_casteljau3(t, d1, d2, d3)
    }

    fn start_tangent(&self) -> Coord {
        let (cp1, cp2) = self.control_points;

        let leg = if !self.start_point.is_near_to(&cp1, SMALL_DISTANCE) {
            cp1 - self.start_point
        } else if !self.start_point.is_near_to(&cp2, SMALL_DISTANCE) {
            cp2 - self.start_point
        } else {
            self.end_point - self.start_point
        };

        leg.to_unit_vector()
    }

    fn end_tangent(&self) -> Coord {
        let (cp1, cp2) = self.control_points;

        let leg = if !self.end_point.is_near_to(&cp2, SMALL_DISTANCE) {
            self.end_point - cp2
        } else if !self.end_point.is_near_to(&cp1, SMALL_DISTANCE) {
            self.end_point - cp1
        } else {
            self.end_point - self.start_point
        };

        leg.to_unit_vector()
    }

    fn curvature_at_pos(&self, t: f64) -> Option<f64> {
        debug_assert!(t >= 0.0 && t <= 1.0);

        let (cp1, cp2) = self.control_points;

        if (t-0.5).abs() > 0.5-CURVATURE_ENDPOINT_ZONE {
            // Close enough to an endpoint for the closed form
            if t < 0.5 {
                endpoint_curvature(self.start_point, cp1, cp2, 3.0, true)
            } else {
                endpoint_curvature(self.end_point, cp2, cp1, 3.0, false)
            }
        } else {
            // Interior parameter: subdivide and evaluate the left piece at its endpoint
            let (left, _right) = self.split(t);
            left.curvature_at_pos(1.0)
        }
    }

    fn subdivide_at(&self, t: f64) -> Vec<Self> {
        debug_assert!(t >= 0.0 && t <= 1.0);

        if t == 0.0 || t == 1.0 {
            vec![*self]
        } else {
            let (left, right) = self.split(t);
            vec![left, right]
        }
    }

    fn bounding_box<Bounds: BoundingBox<Point=Coord>>(&self) -> Bounds {
        let (cp1, cp2) = self.control_points;
        bounding_box4(self.start_point, cp1, cp2, self.end_point)
    }

    fn to_nondegenerate_segments(&self) -> Vec<Segment<Coord>> {
        let (cp1, cp2)  = self.control_points;
        let start       = self.start_point;
        let end         = self.end_point;

        let is_point = start.is_near_to(&end, SMALL_DISTANCE)
            && start.is_near_to(&cp1, SMALL_DISTANCE)
            && start.is_near_to(&cp2, SMALL_DISTANCE);

        if is_point {
            // Degenerate point
            vec![]
        } else if self.has_cusp() {
            // Split at the cusp and decompose each quadratic
            self.to_quadratics().iter()
                .flat_map(|quadratic| quadratic.to_nondegenerate_segments())
                .collect()
        } else if let Some(reduced) = self.degree_reduced(DEGREE_REDUCTION_TOLERANCE) {
            // Secretly a quadratic
            reduced.to_nondegenerate_segments()
        } else if points_are_collinear(&[start, cp1, cp2, end]) {
            // Straight-line geometry: chain of lines through the sorted interior extrema
            let mut extrema_ts = self.x_extrema_ts();
            extrema_ts.extend(self.y_extrema_ts());
            extrema_ts.sort_by(|t1, t2| t1.partial_cmp(t2).unwrap_or(Ordering::Equal));

            let mut segments    = vec![];
            let mut last_point  = start;

            for t in extrema_ts {
                let point = self.point_at_pos(t);

                if !point.is_near_to(&last_point, SMALL_DISTANCE) {
                    segments.push(Segment::Line(LineSegment::from_points(last_point, point)));
                    last_point = point;
                }
            }

            if !last_point.is_near_to(&end, SMALL_DISTANCE) || segments.is_empty() {
                segments.push(Segment::Line(LineSegment::from_points(last_point, end)));
            }

            segments
        } else {
            vec![Segment::Cubic(*self)]
        }
    }

    fn intersects_ray(&self, ray: &Ray<Coord>) -> Vec<RayIntersection<Coord>> {
        let to_axis = match ray_to_axis_transform(ray) {
            Some(transform) => transform,
            None            => return vec![]
        };

        // In the ray-local frame every hit is a root of the y polynomial
        let (cp1, cp2)  = self.control_points;
        let p0          = to_axis.transform_point(&self.start_point);
        let p1          = to_axis.transform_point(&cp1);
        let p2          = to_axis.transform_point(&cp2);
        let p3          = to_axis.transform_point(&self.end_point);

        let a = -p0.y() + 3.0*p1.y() - 3.0*p2.y() + p3.y();
        let b = 3.0*p0.y() - 6.0*p1.y() + 3.0*p2.y();
        let c = -3.0*p0.y() + 3.0*p1.y();
        let d = p0.y();

        ray_hits_for_roots(self, ray, solve_cubic_roots_real(a, b, c, d))
    }

    fn transform(&self, transform: &Transform2D) -> Self {
        let (cp1, cp2) = self.control_points;

        CubicCurve::from_points(
            transform.transform_point(&self.start_point),
            (transform.transform_point(&cp1), transform.transform_point(&cp2)),
            transform.transform_point(&self.end_point))
    }

    #[inline]
    fn reverse(&self) -> Self {
        let (cp1, cp2) = self.control_points;
        CubicCurve::from_points(self.end_point, (cp2, cp1), self.start_point)
    }

    fn stroke_left(&self, width: f64) -> Vec<Segment<Coord>> {
        offset_cubic(self, width*0.5, false).into_iter()
            .map(|line| Segment::Line(line))
            .collect()
    }

    fn stroke_right(&self, width: f64) -> Vec<Segment<Coord>> {
        offset_cubic(self, -width*0.5, true).into_iter()
            .map(|line| Segment::Line(line))
            .collect()
    }

    fn to_svg_fragment(&self) -> String {
        let (cp1, cp2) = self.control_points;
        svg_cubic_fragment(&cp1, &cp2, &self.end_point)
    }
}
