use super::curve::*;
use super::super::geo::*;
use super::super::consts::*;
use super::super::transform::*;
use super::super::coordinate::*;

///
/// A half-infinite ray: an origin point plus a direction vector
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Ray<Coord: Coordinate> {
    pub origin:     Coord,
    pub direction:  Coord
}

impl<Coord: Coordinate> Ray<Coord> {
    pub fn new(origin: Coord, direction: Coord) -> Ray<Coord> {
        Ray { origin: origin, direction: direction }
    }
}

impl<Coord: Coordinate> Geo for Ray<Coord> {
    type Point = Coord;
}

///
/// A single hit from casting a ray against a curve
///
/// Hits are produced in no particular order; callers sort by `distance` when
/// they need the nearest one.
///
#[derive(Copy, Clone, Debug)]
pub struct RayIntersection<Coord: Coordinate> {
    /// Distance from the ray origin to the hit point
    pub distance:   f64,

    /// The hit point itself
    pub point:      Coord,

    /// Unit normal at the hit point, facing against the ray
    pub normal:     Coord,

    /// Winding contribution (+1 when the ray direction crosses the curve
    /// counter-clockwise of its tangent, -1 otherwise)
    pub winding:    i32,

    /// Curve parameter of the hit
    pub t:          f64
}

///
/// Builds the transform that maps a ray onto the positive x-axis through the
/// origin, or None when the ray direction is degenerate
///
/// Transforming a curve's control points by this puts all ray intersections
/// at frame-local y = 0, so they are the roots of the y polynomial.
///
pub(crate) fn ray_to_axis_transform<Point: Coordinate2D>(ray: &Ray<Point>) -> Option<Transform2D> {
    if ray.direction.magnitude() < RAY_DIRECTION_TOLERANCE {
        return None;
    }

    let angle = ray.direction.y().atan2(ray.direction.x());

    Some(Transform2D::rotate(-angle) * Transform2D::translate(-ray.origin.x(), -ray.origin.y()))
}

///
/// Converts curve-parameter roots of the frame-local y polynomial into hit
/// records: filters roots to [0,1] and to points ahead of the ray origin,
/// then derives distance, outward normal and winding sign
///
pub(crate) fn ray_hits_for_roots<C: CurveSegment>(curve: &C, ray: &Ray<C::Point>, roots: Vec<f64>) -> Vec<RayIntersection<C::Point>>
where C::Point: Coordinate2D {
    let mut hits = vec![];

    for t in roots {
        // Allow a tiny amount of slop at the ends of the parameter range (root finding is not exact)
        let t = if t < 0.0 && t > -RAY_ROOT_CLIP_TOLERANCE { 0.0 }
            else if t > 1.0 && t < 1.0+RAY_ROOT_CLIP_TOLERANCE { 1.0 }
            else { t };

        if t < 0.0 || t > 1.0 {
            continue;
        }

        let hit_point = curve.point_at_pos(t);
        let to_hit    = hit_point - ray.origin;

        // Ignore hits behind the ray origin
        if to_hit.dot(&ray.direction) <= 0.0 {
            continue;
        }

        let unit_tangent = curve.tangent_at_pos(t).to_unit_vector();
        let perpendicular = unit_tangent.perpendicular();

        // Normal faces against the ray
        let normal = if perpendicular.dot(&ray.direction) > 0.0 {
            perpendicular * -1.0
        } else {
            perpendicular
        };

        let winding = if ray.direction.cross(&unit_tangent) > 0.0 { 1 } else { -1 };

        hits.push(RayIntersection {
            distance:   to_hit.magnitude(),
            point:      hit_point,
            normal:     normal,
            winding:    winding,
            t:          t
        });
    }

    hits
}
