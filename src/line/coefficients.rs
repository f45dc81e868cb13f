use super::line::*;
use super::super::consts::*;
use super::super::coordinate::*;

///
/// For a two-dimensional line, computes the coefficients of the line equation
/// ax+by+c=0 (such that a^2+b^2 = 1)
///
/// This will return (0,0,0) for a line where the start and end point are the same.
///
pub fn line_coefficients_2d<P: Coordinate2D, L: Line<Point=P>>(line: &L) -> (f64, f64, f64) {
    let (from, to)  = line.points();
    let offset      = to - from;

    let (a, b, c)   = if offset.x() == 0.0 && offset.y() == 0.0 {
        // This is a point rather than a line
        return (0.0, 0.0, 0.0);
    } else if offset.x().abs() > offset.y().abs() {
        // Derive a, b, c from y = ax+c
        let a = offset.y() / offset.x();
        let b = -1.0;
        let c = -(a*from.x() + b*from.y());

        if offset.x() < 0.0 { (-a, -b, -c) } else { (a, b, c) }
    } else {
        // Derive a, b, c from x = by+c
        let a = -1.0;
        let b = offset.x() / offset.y();
        let c = -(a*from.x() + b*from.y());

        if offset.y() < 0.0 { (-a, -b, -c) } else { (a, b, c) }
    };

    // Normalise so that a^2+b^2 = 1
    let factor = (a*a + b*b).sqrt();

    (a/factor, b/factor, c/factor)
}

///
/// Perpendicular distance from a point to the line described by a set of
/// normalized coefficients
///
#[inline]
pub fn distance_from_line<P: Coordinate2D>((a, b, c): (f64, f64, f64), point: &P) -> f64 {
    (a*point.x() + b*point.y() + c).abs()
}

///
/// True if a set of points all lie on a single straight line (within the
/// collinearity tolerance, scaled by the spread of the points)
///
pub fn points_are_collinear<P: Coordinate2D>(points: &[P]) -> bool {
    if points.len() < 3 {
        return true;
    }

    // Use the farthest point from the first as the line direction
    let base            = points[0];
    let mut direction   = P::origin();
    let mut max_length  = 0.0;

    for point in points[1..].iter() {
        let offset = *point - base;
        let length = offset.magnitude();

        if length > max_length {
            max_length = length;
            direction  = offset;
        }
    }

    if max_length < SMALL_DISTANCE {
        // All points coincide
        return true;
    }

    let unit        = direction.to_unit_vector();
    let tolerance   = COLLINEARITY_TOLERANCE * max_length.max(1.0);

    points[1..].iter()
        .all(|point| unit.cross(&(*point - base)).abs() <= tolerance)
}
