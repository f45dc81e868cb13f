use bezier_segments::*;
use bezier_segments::line::*;

#[test]
fn quadratic_fragment() {
    let curve = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(1.5, 2.0), Coord2(3.0, 0.0));

    assert!(curve.to_svg_fragment() == "Q 1.5 2 3 0");
}

#[test]
fn cubic_fragment() {
    let curve = CubicCurve::from_points(Coord2(0.0, 0.0), (Coord2(1.0, 2.5), Coord2(2.0, -2.5)), Coord2(3.0, 0.0));

    assert!(curve.to_svg_fragment() == "C 1 2.5 2 -2.5 3 0");
}

#[test]
fn line_segment_fragment() {
    let segment = Segment::Line(LineSegment { start_point: Coord2(0.0, 0.0), end_point: Coord2(5.0, 0.25) });

    assert!(segment.to_svg_fragment() == "L 5 0.25");
}

#[test]
fn segment_fragments_match_their_curves() {
    let curve   = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(1.5, 2.0), Coord2(3.0, 0.0));
    let segment = Segment::Quadratic(curve);

    assert!(segment.to_svg_fragment() == curve.to_svg_fragment());
}

#[test]
fn identical_values_serialize_identically() {
    let curve1 = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(0.1, 0.2), Coord2(0.3, 0.0));
    let curve2 = QuadraticCurve::from_points(Coord2(9.0, 9.0), Coord2(0.1, 0.2), Coord2(0.3, 0.0));

    // The fragment ignores the start point (the caller emits the move-to)
    assert!(curve1.to_svg_fragment() == curve2.to_svg_fragment());
}

#[test]
fn fragments_use_shortest_round_trip_form() {
    // 0.1 + 0.2 is not 0.3 in floats; the serialized text shows the difference
    let value = 0.1_f64 + 0.2_f64;
    let curve = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(value, 0.0), Coord2(1.0, 0.0));

    assert!(curve.to_svg_fragment() == "Q 0.30000000000000004 0 1 0");
}
