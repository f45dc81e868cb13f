use super::basis::*;
use super::bounds::*;
use super::curve::*;
use super::cubic::*;
use super::curvature::*;
use super::derivative::*;
use super::offset::*;
use super::overlaps::*;
use super::ray::*;
use super::solve::*;
use super::subdivide::*;
use super::svg::*;
use super::super::geo::*;
use super::super::line::*;
use super::super::consts::*;
use super::super::transform::*;
use super::super::coordinate::*;

///
/// A quadratic bezier curve segment (start, one control point, end)
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct QuadraticCurve<Coord: Coordinate> {
    pub start_point:    Coord,
    pub control_point:  Coord,
    pub end_point:      Coord
}

impl<Coord: Coordinate> QuadraticCurve<Coord> {
    ///
    /// Creates a new quadratic curve from its control points
    ///
    pub fn from_points(start: Coord, control: Coord, end: Coord) -> QuadraticCurve<Coord> {
        QuadraticCurve {
            start_point:    start,
            control_point:  control,
            end_point:      end
        }
    }

    ///
    /// Splits this curve at a point strictly inside (0,1), returning the two halves
    ///
    #[inline]
    pub fn split(&self, t: f64) -> (QuadraticCurve<Coord>, QuadraticCurve<Coord>) {
        let (left, right) = subdivide3(t, self.start_point, self.control_point, self.end_point);

        (QuadraticCurve::from_points(left.0, left.1, left.2),
            QuadraticCurve::from_points(right.0, right.1, right.2))
    }

    ///
    /// Elevates this curve to an exactly equivalent cubic
    ///
    pub fn elevated(&self) -> CubicCurve<Coord> {
        let cp1 = self.start_point*(1.0/3.0) + self.control_point*(2.0/3.0);
        let cp2 = self.control_point*(2.0/3.0) + self.end_point*(1.0/3.0);

        CubicCurve::from_points(self.start_point, (cp1, cp2), self.end_point)
    }
}

impl<Coord: Coordinate2D> QuadraticCurve<Coord> {
    ///
    /// The critical t value of the x axis (where dx/dt vanishes), NaN when
    /// the axis is degenerate
    ///
    #[inline]
    pub fn x_extremum_t(&self) -> f64 {
        quadratic_extremum_t(self.start_point.x(), self.control_point.x(), self.end_point.x())
    }

    ///
    /// The critical t value of the y axis (where dy/dt vanishes), NaN when
    /// the axis is degenerate
    ///
    #[inline]
    pub fn y_extremum_t(&self) -> f64 {
        quadratic_extremum_t(self.start_point.y(), self.control_point.y(), self.end_point.y())
    }

    ///
    /// Determines whether another quadratic traces the same geometry as this
    /// one under an affine reparameterization `t -> a*t + b`
    ///
    pub fn overlaps(curve1: &QuadraticCurve<Coord>, curve2: &QuadraticCurve<Coord>) -> Option<CurveOverlap> {
        quadratic_overlap(curve1, curve2)
    }
}

impl<Coord: Coordinate> Geo for QuadraticCurve<Coord> {
    type Point = Coord;
}

impl<Coord: Coordinate2D> CurveSegment for QuadraticCurve<Coord> {
    #[inline]
    fn degree(&self) -> usize {
        2
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

        basis3(t, self.start_point, self.control_point, self.end_point)
    }

    #[inline]
    fn tangent_at_pos(&self, t: f64) -> Coord {
        debug_assert!(t >= 0.0 && t <= 1.0);

        let (d1, d2) = derivative3(self.start_point, self.control_point, self.end_point);
        de_casteljau2(t, d1, d2)
    }

    fn start_tangent(&self) -> Coord {
        let leg = if self.start_point.is_near_to(&self.control_point, SMALL_DISTANCE) {
            self.end_point - self.start_point
        } else {
            self.control_point - self.start_point
        };

        leg.to_unit_vector()
    }

    fn end_tangent(&self) -> Coord {
        let leg = if self.end_point.is_near_to(&self.control_point, SMALL_DISTANCE) {
            self.end_point - self.start_point
        } else {
            self.end_point - self.control_point
        };

        leg.to_unit_vector()
    }

    fn curvature_at_pos(&self, t: f64) -> Option<f64> {
        debug_assert!(t >= 0.0 && t <= 1.0);

        if (t-0.5).abs() > 0.5-CURVATURE_ENDPOINT_ZONE {
            // Close enough to an endpoint for the closed form
            if t < 0.5 {
                endpoint_curvature(self.start_point, self.control_point, self.end_point, 2.0, true)
            } else {
                endpoint_curvature(self.end_point, self.control_point, self.start_point, 2.0, false)
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
        bounding_box3(self.start_point, self.control_point, self.end_point)
    }

    fn to_nondegenerate_segments(&self) -> Vec<Segment<Coord>> {
        let start   = self.start_point;
        let control = self.control_point;
        let end     = self.end_point;

        let start_is_end        = start.is_near_to(&end, SMALL_DISTANCE);
        let start_is_control    = start.is_near_to(&control, SMALL_DISTANCE);
        let end_is_control      = end.is_near_to(&control, SMALL_DISTANCE);

        if start_is_end && start_is_control {
            // Degenerate point
            vec![]
        } else if start_is_end {
            // Out-and-back curve: two lines through the midpoint
            let midpoint = self.point_at_pos(0.5);

            vec![
                Segment::Line(LineSegment::from_points(start, midpoint)),
                Segment::Line(LineSegment::from_points(midpoint, end))
            ]
        } else if start_is_control || end_is_control {
            // The control point coincides with an endpoint: the curve traces the chord
            vec![Segment::Line(LineSegment::from_points(start, end))]
        } else if points_are_collinear(&[start, control, end]) {
            // Straight-line geometry: one line, or two if the extremum
            // escapes the chord
            let chord           = end - start;
            let component       = if chord.x().abs() > chord.y().abs() { 0 } else { 1 };
            let extremum_t      = quadratic_extremum_t(start.get(component), control.get(component), end.get(component));

            if extremum_t.is_finite() && extremum_t > 0.0 && extremum_t < 1.0 {
                let extremum    = self.point_at_pos(extremum_t);
                let along_chord = (extremum - start).dot(&chord) / chord.dot(&chord);

                if along_chord < 0.0 || along_chord > 1.0 {
                    return vec![
                        Segment::Line(LineSegment::from_points(start, extremum)),
                        Segment::Line(LineSegment::from_points(extremum, end))
                    ];
                }
            }

            vec![Segment::Line(LineSegment::from_points(start, end))]
        } else {
            vec![Segment::Quadratic(*self)]
        }
    }

    fn intersects_ray(&self, ray: &Ray<Coord>) -> Vec<RayIntersection<Coord>> {
        let to_axis = match ray_to_axis_transform(ray) {
            Some(transform) => transform,
            None            => return vec![]
        };

        // In the ray-local frame every hit is a root of the y polynomial
        let p0 = to_axis.transform_point(&self.start_point);
        let p1 = to_axis.transform_point(&self.control_point);
        let p2 = to_axis.transform_point(&self.end_point);

        let a = p0.y() - 2.0*p1.y() + p2.y();
        let b = 2.0*(p1.y() - p0.y());
        let c = p0.y();

        ray_hits_for_roots(self, ray, solve_quadratic_roots_real(a, b, c))
    }

    fn transform(&self, transform: &Transform2D) -> Self {
        QuadraticCurve::from_points(
            transform.transform_point(&self.start_point),
            transform.transform_point(&self.control_point),
            transform.transform_point(&self.end_point))
    }

    #[inline]
    fn reverse(&self) -> Self {
        QuadraticCurve::from_points(self.end_point, self.control_point, self.start_point)
    }

    fn stroke_left(&self, width: f64) -> Vec<Segment<Coord>> {
        offset_quadratic(self, width*0.5, false).into_iter()
            .map(|piece| Segment::Quadratic(piece))
            .collect()
    }

    fn stroke_right(&self, width: f64) -> Vec<Segment<Coord>> {
        offset_quadratic(self, -width*0.5, true).into_iter()
            .map(|piece| Segment::Quadratic(piece))
            .collect()
    }

    fn to_svg_fragment(&self) -> String {
        svg_quadratic_fragment(&self.control_point, &self.end_point)
    }
}
