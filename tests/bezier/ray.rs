use bezier_segments::*;

use super::approx_equal;

#[test]
fn vertical_ray_hits_arch_once() {
    let curve = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));
    let ray   = Ray::new(Coord2(5.0, -1.0), Coord2(0.0, 1.0));

    let hits = curve.intersects_ray(&ray);

    assert!(hits.len() == 1);
    assert!(approx_equal(hits[0].t, 0.5));
    assert!(hits[0].point.is_near_to(&Coord2(5.0, 5.0), 0.0001));
    assert!(approx_equal(hits[0].distance, 6.0));
}

#[test]
fn winding_flips_with_ray_direction() {
    let curve = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));

    let upward   = Ray::new(Coord2(5.0, -1.0), Coord2(0.0, 1.0));
    let downward = Ray::new(Coord2(5.0, 100.0), Coord2(0.0, -1.0));

    // The curve travels +x at its apex: an upward ray crosses it clockwise
    assert!(curve.intersects_ray(&upward)[0].winding == -1);
    assert!(curve.intersects_ray(&downward)[0].winding == 1);
}

#[test]
fn normal_faces_against_the_ray() {
    let curve = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));
    let ray   = Ray::new(Coord2(5.0, -1.0), Coord2(0.0, 1.0));

    let hits = curve.intersects_ray(&ray);

    assert!(hits[0].normal.is_near_to(&Coord2(0.0, -1.0), 0.0001));
    assert!(hits[0].normal.dot(&ray.direction) < 0.0);
}

#[test]
fn ray_through_both_sides_of_the_arch_has_zero_net_winding() {
    let curve = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));
    let ray   = Ray::new(Coord2(-1.0, 4.0), Coord2(1.0, 0.0));

    let hits = curve.intersects_ray(&ray);

    assert!(hits.len() == 2);
    assert!(curve.ray_winding(&ray) == 0);
}

#[test]
fn hits_behind_the_ray_origin_are_ignored() {
    let curve = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));
    let ray   = Ray::new(Coord2(11.0, 0.0), Coord2(1.0, 0.0));

    assert!(curve.intersects_ray(&ray).is_empty());
}

#[test]
fn degenerate_ray_direction_produces_no_hits() {
    let curve = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));
    let ray   = Ray::new(Coord2(5.0, -1.0), Coord2(0.0, 0.0));

    assert!(curve.intersects_ray(&ray).is_empty());
    assert!(curve.ray_winding(&ray) == 0);
}

#[test]
fn diagonal_ray_hits_match_curve_evaluation() {
    let curve = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));
    let ray   = Ray::new(Coord2(0.0, -2.0), Coord2(1.0, 1.0));

    for hit in curve.intersects_ray(&ray) {
        // The hit point really is on the curve
        assert!(hit.point.is_near_to(&curve.point_at_pos(hit.t), 0.0001));

        // And really is on the ray
        let along = hit.point - ray.origin;
        assert!(along.cross(&ray.direction).abs() < 0.0001);
        assert!(along.dot(&ray.direction) > 0.0);
    }
}

#[test]
fn cubic_ray_intersection_matches_its_quadratic_shape() {
    // Degree elevation preserves the parameterization, so hits agree exactly
    let quadratic = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));
    let cubic     = quadratic.elevated();
    let ray       = Ray::new(Coord2(5.0, -1.0), Coord2(0.0, 1.0));

    let quadratic_hits = quadratic.intersects_ray(&ray);
    let cubic_hits     = cubic.intersects_ray(&ray);

    assert!(cubic_hits.len() == quadratic_hits.len());
    assert!(approx_equal(cubic_hits[0].t, quadratic_hits[0].t));
    assert!(cubic_hits[0].point.is_near_to(&quadratic_hits[0].point, 0.0001));
    assert!(cubic_hits[0].winding == quadratic_hits[0].winding);
}

#[test]
fn cubic_s_curve_crossed_three_times() {
    let curve = CubicCurve::from_points(Coord2(0.0, 0.0), (Coord2(1.0, 2.0), Coord2(2.0, -2.0)), Coord2(3.0, 0.0));
    let ray   = Ray::new(Coord2(-1.0, 0.0), Coord2(1.0, 0.0));

    // The S shape crosses its own chord at both ends and in the middle
    let hits = curve.intersects_ray(&ray);

    assert!(hits.len() == 3);

    // Opposite crossings cancel, leaving a single net winding
    assert!(curve.ray_winding(&ray).abs() == 1);
}
