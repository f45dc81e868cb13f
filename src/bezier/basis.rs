use super::super::coordinate::*;

///
/// The quadratic bezier weighted basis function
///
#[inline]
pub fn basis3<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point) -> Point {
    let one_minus_t = 1.0-t;

    w1*(one_minus_t*one_minus_t)
        + w2*(2.0*one_minus_t*t)
        + w3*(t*t)
}

///
/// The cubic bezier weighted basis function
///
#[inline]
pub fn basis4<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    let one_minus_t         = 1.0-t;
    let one_minus_t_squared = one_minus_t*one_minus_t;
    let t_squared           = t*t;

    w1*(one_minus_t_squared*one_minus_t)
        + w2*(3.0*one_minus_t_squared*t)
        + w3*(3.0*one_minus_t*t_squared)
        + w4*(t_squared*t)
}

///
/// de Casteljau's algorithm for lines
///
#[inline]
pub fn de_casteljau2<Point: Coordinate>(t: f64, w1: Point, w2: Point) -> Point {
    w1*(1.0-t) + w2*t
}

///
/// de Casteljau's algorithm for quadratic curves
///
#[inline]
pub fn de_casteljau3<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point) -> Point {
    let wn1 = de_casteljau2(t, w1, w2);
    let wn2 = de_casteljau2(t, w2, w3);

    de_casteljau2(t, wn1, wn2)
}

///
/// de Casteljau's algorithm for cubic curves
///
#[inline]
pub fn de_casteljau4<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    let wn1 = de_casteljau2(t, w1, w2);
    let wn2 = de_casteljau2(t, w2, w3);
    let wn3 = de_casteljau2(t, w3, w4);

    de_casteljau3(t, wn1, wn2, wn3)
}
