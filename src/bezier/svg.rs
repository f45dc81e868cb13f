use super::super::coordinate::*;

///
/// Serializes a coordinate component for use in an SVG path fragment
///
/// All fragments share this formatter so that identical values always
/// serialize to identical text (shortest round-trip form).
///
#[inline]
pub fn svg_number(value: f64) -> String {
    debug_assert!(value.is_finite());

    format!("{}", value)
}

///
/// The SVG drawing command for a line to `end` (the caller is assumed to
/// have already emitted a move-to the start point)
///
pub fn svg_line_fragment<Point: Coordinate2D>(end: &Point) -> String {
    format!("L {} {}", svg_number(end.x()), svg_number(end.y()))
}

///
/// The SVG drawing command for a quadratic curve (the caller is assumed to
/// have already emitted a move-to the start point)
///
pub fn svg_quadratic_fragment<Point: Coordinate2D>(control: &Point, end: &Point) -> String {
    format!("Q {} {} {} {}",
        svg_number(control.x()), svg_number(control.y()),
        svg_number(end.x()), svg_number(end.y()))
}

///
/// The SVG drawing command for a cubic curve (the caller is assumed to have
/// already emitted a move-to the start point)
///
pub fn svg_cubic_fragment<Point: Coordinate2D>(cp1: &Point, cp2: &Point, end: &Point) -> String {
    format!("C {} {} {} {} {} {}",
        svg_number(cp1.x()), svg_number(cp1.y()),
        svg_number(cp2.x()), svg_number(cp2.y()),
        svg_number(end.x()), svg_number(end.y()))
}
