use bezier_segments::*;
use bezier_segments::line::*;

#[test]
fn stroke_left_of_a_straight_quadratic_runs_parallel() {
    let curve  = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(5.0, 0.0), Coord2(10.0, 0.0));
    let pieces = curve.stroke_left(2.0);

    assert!(pieces.len() == 32);
    assert!(pieces[0].start_point().is_near_to(&Coord2(0.0, 1.0), 0.0001));
    assert!(pieces.last().unwrap().end_point().is_near_to(&Coord2(10.0, 1.0), 0.0001));

    for piece in pieces.iter() {
        assert!((piece.start_point().y() - 1.0).abs() < 0.0001);
        assert!((piece.end_point().y() - 1.0).abs() < 0.0001);
    }
}

#[test]
fn stroke_right_of_a_straight_quadratic_runs_backwards_on_the_far_side() {
    let curve  = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(5.0, 0.0), Coord2(10.0, 0.0));
    let pieces = curve.stroke_right(2.0);

    assert!(pieces.len() == 32);
    assert!(pieces[0].start_point().is_near_to(&Coord2(10.0, -1.0), 0.0001));
    assert!(pieces.last().unwrap().end_point().is_near_to(&Coord2(0.0, -1.0), 0.0001));
}

#[test]
fn stroke_pieces_form_a_continuous_chain() {
    let curve  = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));
    let pieces = curve.stroke_left(1.0);

    for index in 1..pieces.len() {
        assert!(pieces[index].start_point().is_near_to(&pieces[index-1].end_point(), 0.0001));
    }
}

#[test]
fn curved_stroke_starts_along_the_start_normal() {
    let curve  = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(5.0, 5.0), Coord2(10.0, 0.0));
    let pieces = curve.stroke_left(1.0);

    // Start leg points along (1,1): its left normal is (-1,1)/sqrt(2)
    let normal   = Coord2(-1.0, 1.0).to_unit_vector();
    let expected = Coord2(0.0, 0.0) + normal*0.5;

    assert!(pieces[0].start_point().is_near_to(&expected, 0.01));
}

#[test]
fn stroke_stays_near_the_offset_distance() {
    let curve  = QuadraticCurve::from_points(Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));
    let pieces = curve.stroke_left(2.0);

    // Every sampled point of the stroke should be about 1.0 from the curve
    for piece in pieces.iter() {
        for step in 0..5 {
            let point = piece.point_at_pos((step as f64)/4.0);

            let closest = (0..201)
                .map(|sample| curve.point_at_pos((sample as f64)/200.0).distance_to(&point))
                .fold(f64::MAX, f64::min);

            assert!((closest - 1.0).abs() < 0.1);
        }
    }
}

#[test]
fn cubic_stroke_is_a_polyline() {
    let curve  = CubicCurve::from_points(Coord2(0.0, 0.0), (Coord2(0.0, 4.0), Coord2(6.0, 4.0)), Coord2(6.0, 0.0));
    let pieces = curve.stroke_left(2.0);

    assert!(pieces.len() == 31);

    for piece in pieces.iter() {
        match piece {
            &Segment::Line(_) => { },
            _ => panic!("Expected only lines")
        }
    }

    for index in 1..pieces.len() {
        assert!(pieces[index].start_point() == pieces[index-1].end_point());
    }
}

#[test]
fn straight_cubic_stroke_runs_parallel() {
    let line  = LineSegment { start_point: Coord2(0.0, 0.0), end_point: Coord2(9.0, 0.0) };
    let curve = line_to_cubic(&line);

    for piece in curve.stroke_left(4.0) {
        assert!((piece.start_point().y() - 2.0).abs() < 0.0001);
        assert!((piece.end_point().y() - 2.0).abs() < 0.0001);
    }

    for piece in curve.stroke_right(4.0) {
        assert!((piece.start_point().y() + 2.0).abs() < 0.0001);
        assert!((piece.end_point().y() + 2.0).abs() < 0.0001);
    }
}
