use super::curve::*;
use super::quadratic::*;
use super::cubic::*;
use super::super::line::*;
use super::super::consts::*;
use super::super::coordinate::*;

use itertools::Itertools;

/// Number of halving passes used when offsetting a quadratic (2^5 = 32 pieces)
const QUADRATIC_OFFSET_DEPTH: usize = 5;

/// Number of samples taken along a cubic when building its offset polyline
const CUBIC_OFFSET_SAMPLES: usize = 32;

///
/// Offsets a single quadratic curve by translating its three control points
/// along locally-computed normals
///
/// Positive distances offset to the left of the direction of travel. Only
/// accurate for short, flat pieces; `offset_quadratic` subdivides first.
///
pub fn approximate_quadratic_offset<P: Coordinate2D>(curve: &QuadraticCurve<P>, distance: f64) -> QuadraticCurve<P> {
    let start   = curve.start_point;
    let control = curve.control_point;
    let end     = curve.end_point;

    // Fall back to the chord when a control leg degenerates
    let start_leg   = if start.is_near_to(&control, SMALL_DISTANCE) { end - start } else { control - start };
    let end_leg     = if end.is_near_to(&control, SMALL_DISTANCE) { end - start } else { end - control };

    let start_normal    = start_leg.perpendicular().to_unit_vector();
    let mid_normal      = (end - start).perpendicular().to_unit_vector();
    let end_normal      = end_leg.perpendicular().to_unit_vector();

    QuadraticCurve::from_points(
        start + start_normal*distance,
        control + mid_normal*distance,
        end + end_normal*distance)
}

///
/// Approximates the offset of a quadratic curve as a chain of offset
/// quadratics: fixed-depth recursive halving into 32 pieces, each offset by
/// moving its control points along the local normals
///
/// When `reverse` is set the chain is produced in reverse parameter order
/// with every piece reversed (the far side of a stroke outline).
///
pub fn offset_quadratic<P: Coordinate2D>(curve: &QuadraticCurve<P>, distance: f64, reverse: bool) -> Vec<QuadraticCurve<P>> {
    let mut pieces = vec![*curve];

    for _ in 0..QUADRATIC_OFFSET_DEPTH {
        pieces = pieces.into_iter()
            .flat_map(|piece| {
                let (left, right) = piece.split(0.5);
                vec![left, right]
            })
            .collect();
    }

    let mut offset_pieces: Vec<_> = pieces.iter()
        .map(|piece| approximate_quadratic_offset(piece, distance))
        .collect();

    if reverse {
        offset_pieces.reverse();
        offset_pieces = offset_pieces.iter().map(|piece| piece.reverse()).collect();
    }

    offset_pieces
}

///
/// Approximates the offset of a cubic curve as a polyline: 32 uniform
/// samples translated along the local normal, joined by straight segments
///
pub fn offset_cubic<P: Coordinate2D>(curve: &CubicCurve<P>, distance: f64, reverse: bool) -> Vec<LineSegment<P>> {
    (0..CUBIC_OFFSET_SAMPLES)
        .map(|sample| {
            let t = (sample as f64) / ((CUBIC_OFFSET_SAMPLES-1) as f64);
            let t = if reverse { 1.0-t } else { t };

            let normal = curve.tangent_at_pos(t).to_unit_vector().perpendicular();
            curve.point_at_pos(t) + normal*distance
        })
        .tuple_windows()
        .map(|(p1, p2)| LineSegment::from_points(p1, p2))
        .collect()
}
