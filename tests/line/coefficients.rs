use bezier_segments::*;
use bezier_segments::line::*;

fn approx_equal(a: f64, b: f64) -> bool {
    f64::abs(a-b) < 0.0001
}

#[test]
fn coefficients_are_normalized() {
    let line       = (Coord2(1.0, 2.0), Coord2(7.0, 5.0));
    let (a, b, _c) = line_coefficients_2d(&line);

    assert!(approx_equal(a*a + b*b, 1.0));
}

#[test]
fn points_on_the_line_satisfy_the_equation() {
    let line      = (Coord2(1.0, 2.0), Coord2(7.0, 5.0));
    let (a, b, c) = line_coefficients_2d(&line);

    for step in 0..11 {
        let t     = (step as f64)/10.0;
        let point = Coord2::interpolate(Coord2(1.0, 2.0), Coord2(7.0, 5.0), t);

        assert!((a*point.x() + b*point.y() + c).abs() < 0.0001);
    }
}

#[test]
fn degenerate_line_has_zero_coefficients() {
    let line = (Coord2(3.0, 3.0), Coord2(3.0, 3.0));

    assert!(line_coefficients_2d(&line) == (0.0, 0.0, 0.0));
}

#[test]
fn distance_from_line_is_perpendicular() {
    let line         = (Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    let coefficients = line_coefficients_2d(&line);

    assert!(approx_equal(distance_from_line(coefficients, &Coord2(5.0, 3.0)), 3.0));
    assert!(approx_equal(distance_from_line(coefficients, &Coord2(5.0, -3.0)), 3.0));
    assert!(approx_equal(distance_from_line(coefficients, &Coord2(5.0, 0.0)), 0.0));
}

#[test]
fn collinear_points_are_detected() {
    let points = [Coord2(0.0, 0.0), Coord2(2.0, 1.0), Coord2(4.0, 2.0), Coord2(8.0, 4.0)];

    assert!(points_are_collinear(&points));
}

#[test]
fn non_collinear_points_are_rejected() {
    let points = [Coord2(0.0, 0.0), Coord2(2.0, 1.0), Coord2(4.0, 2.1)];

    assert!(!points_are_collinear(&points));
}

#[test]
fn coincident_points_count_as_collinear() {
    let points = [Coord2(3.0, 3.0), Coord2(3.0, 3.0), Coord2(3.0, 3.0)];

    assert!(points_are_collinear(&points));
}

#[test]
fn collinearity_survives_an_out_and_back_arrangement() {
    // The farthest point fixes the direction even when the first offset is backwards
    let points = [Coord2(5.0, 5.0), Coord2(0.0, 0.0), Coord2(10.0, 10.0)];

    assert!(points_are_collinear(&points));
}

#[test]
fn fewer_than_three_points_are_trivially_collinear() {
    assert!(points_are_collinear(&[Coord2(1.0, 2.0)]));
    assert!(points_are_collinear(&[Coord2(1.0, 2.0), Coord2(9.0, -4.0)]));
}
