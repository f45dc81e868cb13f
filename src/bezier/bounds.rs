use super::basis::*;
use super::solve::*;
use super::super::geo::*;
use super::super::coordinate::*;

///
/// Finds the critical t value of a single axis of a quadratic curve (the
/// parameter where that coordinate's derivative vanishes)
///
/// The derivative of a quadratic is linear, so there is at most one critical
/// value. Returns NaN when the derivative coefficient is zero (the axis is
/// degenerate and has no isolated extremum).
///
#[inline]
pub fn quadratic_extremum_t(v0: f64, v1: f64, v2: f64) -> f64 {
    // Derivative is 2*((v1-v0) + t*(v0-2*v1+v2))
    let divisor = v0 - 2.0*v1 + v2;

    if divisor == 0.0 {
        f64::NAN
    } else {
        (v0 - v1) / divisor
    }
}

///
/// Finds the critical t values of a single axis of a cubic curve (the
/// parameters where that coordinate's derivative vanishes)
///
pub fn cubic_extrema_ts(v0: f64, v1: f64, v2: f64, v3: f64) -> Vec<f64> {
    // Power-basis coefficients of the derivative
    let a = 3.0*(-v0 + 3.0*v1 - 3.0*v2 + v3);
    let b = 6.0*(v0 - 2.0*v1 + v2);
    let c = 3.0*(v1 - v0);

    solve_quadratic_roots_real(a, b, c)
}

///
/// Computes the bounding box of a quadratic bezier curve
///
pub fn bounding_box3<Point: Coordinate, Bounds: BoundingBox<Point=Point>>(w1: Point, w2: Point, w3: Point) -> Bounds {
    // Seed the box from the two endpoints
    let mut min_pos = Point::from_smallest_components(w1, w3);
    let mut max_pos = Point::from_biggest_components(w1, w3);

    // Extend with the per-axis extrema that lie strictly inside the curve
    for component_index in 0..Point::len() {
        let t = quadratic_extremum_t(w1.get(component_index), w2.get(component_index), w3.get(component_index));

        if t > 0.0 && t < 1.0 {
            let extremum = de_casteljau3(t, w1, w2, w3);

            min_pos = Point::from_smallest_components(min_pos, extremum);
            max_pos = Point::from_biggest_components(max_pos, extremum);
        }
    }

    Bounds::from_min_max(min_pos, max_pos)
}

///
/// Computes the bounding box of a cubic bezier curve
///
pub fn bounding_box4<Point: Coordinate, Bounds: BoundingBox<Point=Point>>(w1: Point, w2: Point, w3: Point, w4: Point) -> Bounds {
    // Seed the box from the two endpoints
    let mut min_pos = Point::from_smallest_components(w1, w4);
    let mut max_pos = Point::from_biggest_components(w1, w4);

    // Extend with the per-axis extrema that lie strictly inside the curve
    for component_index in 0..Point::len() {
        let extrema = cubic_extrema_ts(w1.get(component_index), w2.get(component_index), w3.get(component_index), w4.get(component_index));

        for t in extrema {
            if t > 0.0 && t < 1.0 {
                let extremum = de_casteljau4(t, w1, w2, w3, w4);

                min_pos = Point::from_smallest_components(min_pos, extremum);
                max_pos = Point::from_biggest_components(max_pos, extremum);
            }
        }
    }

    Bounds::from_min_max(min_pos, max_pos)
}
