use super::ray::*;
use super::svg::*;
use super::quadratic::*;
use super::cubic::*;
use super::super::geo::*;
use super::super::line::*;
use super::super::transform::*;
use super::super::coordinate::*;

///
/// The shared contract implemented by every concrete curve segment type
///
/// Parametric operations are defined for t in [0,1] only; passing a value
/// outside that range is a caller bug (enforced with debug assertions).
/// Segments are immutable values: operations that need a modified curve
/// return new instances.
///
pub trait CurveSegment: Geo+Clone+Sized
where Self::Point: Coordinate2D {
    ///
    /// The polynomial degree of this segment type (fixed per type)
    ///
    fn degree(&self) -> usize;

    ///
    /// The start point of this curve
    ///
    fn start_point(&self) -> Self::Point;

    ///
    /// The end point of this curve
    ///
    fn end_point(&self) -> Self::Point;

    ///
    /// Given a value t from 0 to 1, returns a point on this curve
    ///
    fn point_at_pos(&self, t: f64) -> Self::Point;

    ///
    /// The derivative vector at a value t from 0 to 1 (not normalized)
    ///
    fn tangent_at_pos(&self, t: f64) -> Self::Point;

    ///
    /// Unit tangent at the start of the curve
    ///
    fn start_tangent(&self) -> Self::Point;

    ///
    /// Unit tangent at the end of the curve
    ///
    fn end_tangent(&self) -> Self::Point;

    ///
    /// Signed curvature at a value t from 0 to 1, or None where the curve is
    /// too degenerate for curvature to be defined
    ///
    fn curvature_at_pos(&self, t: f64) -> Option<f64>;

    ///
    /// Subdivides this curve at a point: t=0 and t=1 return the curve
    /// unchanged as a single element, anything in between returns exactly
    /// two curves joined at `point_at_pos(t)`
    ///
    fn subdivide_at(&self, t: f64) -> Vec<Self>;

    ///
    /// Computes the axis-aligned bounding box of this curve
    ///
    fn bounding_box<Bounds: BoundingBox<Point=Self::Point>>(&self) -> Bounds;

    ///
    /// Decomposes this curve into simpler segments with the degenerate parts
    /// removed: a point collapses to nothing, straight-line curves become
    /// lines, cusps split into quadratics, and a fully general curve is
    /// returned unchanged
    ///
    fn to_nondegenerate_segments(&self) -> Vec<Segment<Self::Point>>;

    ///
    /// Casts a ray against this curve, returning the hits in no particular order
    ///
    fn intersects_ray(&self, ray: &Ray<Self::Point>) -> Vec<RayIntersection<Self::Point>>;

    ///
    /// Sums the winding contributions of every ray hit (used for
    /// point-in-path tests under the nonzero winding rule)
    ///
    fn ray_winding(&self, ray: &Ray<Self::Point>) -> i32 {
        self.intersects_ray(ray).into_iter()
            .map(|hit| hit.winding)
            .sum()
    }

    ///
    /// Returns this curve with an affine transform applied to every control point
    ///
    fn transform(&self, transform: &Transform2D) -> Self;

    ///
    /// Returns this curve with its control points in the opposite order
    ///
    fn reverse(&self) -> Self;

    ///
    /// Approximates the left side of a stroke outline of the given width
    ///
    fn stroke_left(&self, width: f64) -> Vec<Segment<Self::Point>>;

    ///
    /// Approximates the right side of a stroke outline of the given width
    /// (produced in reverse parameter order)
    ///
    fn stroke_right(&self, width: f64) -> Vec<Segment<Self::Point>>;

    ///
    /// The SVG drawing command for this curve, assuming the caller has
    /// already emitted a move-to its start point
    ///
    fn to_svg_fragment(&self) -> String;
}

///
/// A segment of any supported kind: the polymorphic output of decomposition
/// and stroke operations
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Segment<Coord: Coordinate2D> {
    Line(LineSegment<Coord>),
    Quadratic(QuadraticCurve<Coord>),
    Cubic(CubicCurve<Coord>)
}

impl<Coord: Coordinate2D> Segment<Coord> {
    ///
    /// The start point of this segment
    ///
    pub fn start_point(&self) -> Coord {
        match self {
            &Segment::Line(ref line)        => line.start_point,
            &Segment::Quadratic(ref curve)  => curve.start_point,
            &Segment::Cubic(ref curve)      => curve.start_point
        }
    }

    ///
    /// The end point of this segment
    ///
    pub fn end_point(&self) -> Coord {
        match self {
            &Segment::Line(ref line)        => line.end_point,
            &Segment::Quadratic(ref curve)  => curve.end_point,
            &Segment::Cubic(ref curve)      => curve.end_point
        }
    }

    ///
    /// Given a value t from 0 to 1, returns a point on this segment
    ///
    pub fn point_at_pos(&self, t: f64) -> Coord {
        match self {
            &Segment::Line(ref line)        => line.point_at_pos(t),
            &Segment::Quadratic(ref curve)  => curve.point_at_pos(t),
            &Segment::Cubic(ref curve)      => curve.point_at_pos(t)
        }
    }

    ///
    /// Returns this segment with its points in the opposite order
    ///
    pub fn reverse(&self) -> Segment<Coord> {
        match self {
            &Segment::Line(ref line)        => Segment::Line(line.reverse()),
            &Segment::Quadratic(ref curve)  => Segment::Quadratic(curve.reverse()),
            &Segment::Cubic(ref curve)      => Segment::Cubic(curve.reverse())
        }
    }

    ///
    /// The SVG drawing command for this segment
    ///
    pub fn to_svg_fragment(&self) -> String {
        match self {
            &Segment::Line(ref line)        => svg_line_fragment(&line.end_point),
            &Segment::Quadratic(ref curve)  => curve.to_svg_fragment(),
            &Segment::Cubic(ref curve)      => curve.to_svg_fragment()
        }
    }
}
