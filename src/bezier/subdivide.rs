use super::basis::*;
use super::super::coordinate::*;

///
/// Subdivides a quadratic bezier curve at a particular point, returning the
/// weights of the two component curves
///
pub fn subdivide3<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point) ->
    ((Point, Point, Point),
    (Point, Point, Point)) {
    // Weights (from de casteljau)
    let wn1 = de_casteljau2(t, w1, w2);
    let wn2 = de_casteljau2(t, w2, w3);

    // Point at which the two curves join
    let p = de_casteljau2(t, wn1, wn2);

    ((w1, wn1, p), (p, wn2, w3))
}

///
/// Subdivides a cubic bezier curve at a particular point, returning the
/// weights of the two component curves
///
pub fn subdivide4<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point, w4: Point) ->
    ((Point, Point, Point, Point),
    (Point, Point, Point, Point)) {
    // Weights (from de casteljau)
    let wn1 = de_casteljau2(t, w1, w2);
    let wn2 = de_casteljau2(t, w2, w3);
    let wn3 = de_casteljau2(t, w3, w4);

    // Further refine the weights
    let wnn1 = de_casteljau2(t, wn1, wn2);
    let wnn2 = de_casteljau2(t, wn2, wn3);

    // Point at which the two curves join
    let p = de_casteljau2(t, wnn1, wnn2);

    ((w1, wn1, wnn1, p), (p, wnn2, wn3, w4))
}
