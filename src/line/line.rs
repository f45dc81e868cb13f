use super::super::geo::*;
use super::super::coordinate::*;

///
/// Represents a straight line
///
pub trait Line : Geo {
    ///
    /// Creates a new line from points
    ///
    fn from_points(p1: Self::Point, p2: Self::Point) -> Self;

    ///
    /// Returns the two points that mark the start and end of this line
    ///
    fn points(&self) -> (Self::Point, Self::Point);
}

///
/// Simplest line is just a tuple of two points
///
impl<Point: Coordinate+Clone> Line for (Point, Point) {
    #[inline]
    fn from_points(p1: Self::Point, p2: Self::Point) -> Self {
        (p1, p2)
    }

    #[inline]
    fn points(&self) -> (Self::Point, Self::Point) {
        self.clone()
    }
}

///
/// A straight line segment between two points
///
/// This is the value type emitted when a curve decomposes into straight pieces.
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct LineSegment<Coord: Coordinate> {
    pub start_point:    Coord,
    pub end_point:      Coord
}

impl<Coord: Coordinate> LineSegment<Coord> {
    ///
    /// Given a value t from 0 to 1, returns a point on this line
    ///
    #[inline]
    pub fn point_at_pos(&self, t: f64) -> Coord {
        Coord::interpolate(self.start_point, self.end_point, t)
    }

    ///
    /// Returns this line with its points in the opposite order
    ///
    #[inline]
    pub fn reverse(&self) -> LineSegment<Coord> {
        LineSegment { start_point: self.end_point, end_point: self.start_point }
    }
}

impl<Coord: Coordinate> Geo for LineSegment<Coord> {
    type Point = Coord;
}

impl<Coord: Coordinate> Line for LineSegment<Coord> {
    #[inline]
    fn from_points(p1: Coord, p2: Coord) -> LineSegment<Coord> {
        LineSegment { start_point: p1, end_point: p2 }
    }

    #[inline]
    fn points(&self) -> (Coord, Coord) {
        (self.start_point, self.end_point)
    }
}
