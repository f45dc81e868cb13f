use bezier_segments::*;
use bezier_segments::bezier::*;

use super::approx_equal;

///
/// Reference curvature of a quadratic via cross(P', P'')/|P'|^3 (the second
/// derivative of a quadratic is constant)
///
fn reference_curvature(curve: &QuadraticCurve<Coord2>, t: f64) -> f64 {
    let first    = curve.tangent_at_pos(t);
    let (d1, d2) = derivative3(curve.start_point, curve.control_point, curve.end_point);
    let second   = derivative2(d1, d2);

    first.cross(&second) / first.magnitude().powi(3)
}

#[test]
fn straight_curve_has_zero_curvature() {
    let curve = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(5.0, 0.0), Coord2(10.0, 0.0));

    assert!(curve.curvature_at_pos(0.0) == Some(0.0));
    assert!(curve.curvature_at_pos(1.0) == Some(0.0));
}

#[test]
fn point_curve_has_no_curvature() {
    let curve = QuadraticCurve::from_points(Coord2(3.0, 3.0), Coord2(3.0, 3.0), Coord2(3.0, 3.0));

    assert!(curve.curvature_at_pos(0.0) == None);
    assert!(curve.curvature_at_pos(0.5) == None);
}

#[test]
fn clockwise_arch_curves_negatively() {
    let curve = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));

    let curvature = curve.curvature_at_pos(0.0).unwrap();

    assert!(curvature < 0.0);
    assert!(approx_equal(curvature, reference_curvature(&curve, 0.0)));
}

#[test]
fn counterclockwise_arch_curves_positively() {
    let curve = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(5.0, -10.0), Coord2(10.0, 0.0));

    assert!(curve.curvature_at_pos(0.0).unwrap() > 0.0);
    assert!(curve.curvature_at_pos(1.0).unwrap() > 0.0);
}

#[test]
fn interior_curvature_agrees_with_reference() {
    let curve = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));

    for step in 1..10 {
        let t = (step as f64)/10.0;

        let measured  = curve.curvature_at_pos(t).unwrap();
        let reference = reference_curvature(&curve, t);

        assert!(approx_equal(measured, reference));
    }
}

#[test]
fn endpoint_curvature_agrees_across_both_paths() {
    // Values just inside the endpoint zone use the closed form, interior
    // values split the curve first: where they meet the results must agree
    let curve = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));

    let closed_form = curve.curvature_at_pos(0.0).unwrap();
    let subdivided  = reference_curvature(&curve, 0.0);

    assert!(approx_equal(closed_form, subdivided));
}

#[test]
fn cubic_quarter_circle_curvature_is_near_one_over_radius() {
    // Standard circle approximation constant for a unit quarter circle
    let k     = 0.5522847498;
    let curve = CubicCurve::from_points(Coord2(1.0, 0.0), (Coord2(1.0, k), Coord2(k, 1.0)), Coord2(0.0, 1.0));

    let start_curvature = curve.curvature_at_pos(0.0).unwrap();
    let end_curvature   = curve.curvature_at_pos(1.0).unwrap();

    assert!(f64::abs(start_curvature - 1.0) < 0.03);
    assert!(f64::abs(end_curvature - 1.0) < 0.03);
}

#[test]
fn cubic_interior_curvature_of_symmetric_arch() {
    let curve = CubicCurve::from_points(Coord2(0.0, 0.0), (Coord2(0.0, 4.0), Coord2(6.0, 4.0)), Coord2(6.0, 0.0));

    // By symmetry the curvature at the two endpoints must match
    let start_curvature = curve.curvature_at_pos(0.0).unwrap();
    let end_curvature   = curve.curvature_at_pos(1.0).unwrap();

    assert!(approx_equal(start_curvature, end_curvature));

    // The arch turns clockwise throughout
    for step in 1..10 {
        let t = (step as f64)/10.0;
        assert!(curve.curvature_at_pos(t).unwrap() < 0.0);
    }
}
