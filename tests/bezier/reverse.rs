use bezier_segments::*;

#[test]
fn reversed_quadratic_traces_backwards() {
    let curve    = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(4.0, 6.0), Coord2(10.0, 1.0));
    let reversed = curve.reverse();

    for step in 0..11 {
        let t = (step as f64)/10.0;
        assert!(reversed.point_at_pos(t).is_near_to(&curve.point_at_pos(1.0-t), 0.0001));
    }
}

#[test]
fn reversed_cubic_traces_backwards() {
    let curve    = CubicCurve::from_points(Coord2(0.0, 0.0), (Coord2(2.0, 8.0), Coord2(7.0, -3.0)), Coord2(10.0, 1.0));
    let reversed = curve.reverse();

    assert!(reversed.start_point() == curve.end_point());
    assert!(reversed.end_point() == curve.start_point());

    for step in 0..11 {
        let t = (step as f64)/10.0;
        assert!(reversed.point_at_pos(t).is_near_to(&curve.point_at_pos(1.0-t), 0.0001));
    }
}

#[test]
fn reversing_twice_is_the_identity() {
    let quadratic = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(4.0, 6.0), Coord2(10.0, 1.0));
    let cubic     = CubicCurve::from_points(Coord2(0.0, 0.0), (Coord2(2.0, 8.0), Coord2(7.0, -3.0)), Coord2(10.0, 1.0));

    assert!(quadratic.reverse().reverse() == quadratic);
    assert!(cubic.reverse().reverse() == cubic);
}

#[test]
fn reversal_flips_tangents() {
    let curve    = CubicCurve::from_points(Coord2(0.0, 0.0), (Coord2(2.0, 8.0), Coord2(7.0, -3.0)), Coord2(10.0, 1.0));
    let reversed = curve.reverse();

    let forward  = curve.start_tangent();
    let backward = reversed.end_tangent();

    assert!((forward + backward).magnitude() < 0.0001);
}

#[test]
fn reversal_flips_curvature_sign() {
    let curve    = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));
    let reversed = curve.reverse();

    let forward  = curve.curvature_at_pos(0.3).unwrap();
    let backward = reversed.curvature_at_pos(0.7).unwrap();

    assert!(super::approx_equal(forward, -backward));
}

#[test]
fn segment_reversal_matches_curve_reversal() {
    let curve   = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));
    let segment = Segment::Quadratic(curve);

    assert!(segment.reverse() == Segment::Quadratic(curve.reverse()));
    assert!(segment.reverse().start_point() == curve.end_point());
}
