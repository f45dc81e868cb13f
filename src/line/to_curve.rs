use super::line::*;
use super::super::bezier::*;
use super::super::coordinate::*;

///
/// Promotes a line to a quadratic curve tracing the same points (control
/// point at the midpoint)
///
pub fn line_to_quadratic<P: Coordinate2D, L: Line<Point=P>>(line: &L) -> QuadraticCurve<P> {
    let (start, end) = line.points();

    QuadraticCurve::from_points(start, P::interpolate(start, end, 0.5), end)
}

///
/// Promotes a line to a cubic curve tracing the same points (control points
/// at the 1/3 and 2/3 blend positions)
///
pub fn line_to_cubic<P: Coordinate2D, L: Line<Point=P>>(line: &L) -> CubicCurve<P> {
    let (start, end) = line.points();
    let cp1          = P::interpolate(start, end, 1.0/3.0);
    let cp2          = P::interpolate(start, end, 2.0/3.0);

    CubicCurve::from_points(start, (cp1, cp2), end)
}
