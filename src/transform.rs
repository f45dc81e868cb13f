use super::coordinate::*;

use std::ops::Mul;

///
/// Represents a 2D affine transformation matrix
///
/// The matrix is stored in row-major order; affine transforms keep the final
/// row at `[0, 0, 1]`.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transform2D(pub [[f64; 3]; 3]);

impl Transform2D {
    ///
    /// Creates the identity transform
    ///
    pub fn identity() -> Transform2D {
        Transform2D([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0]])
    }

    ///
    /// Creates a translation transformation
    ///
    pub fn translate(x: f64, y: f64) -> Transform2D {
        Transform2D([
            [1.0, 0.0, x  ],
            [0.0, 1.0, y  ],
            [0.0, 0.0, 1.0]])
    }

    ///
    /// Creates a scaling transformation
    ///
    pub fn scale(scale_x: f64, scale_y: f64) -> Transform2D {
        Transform2D([
            [scale_x, 0.0,     0.0],
            [0.0,     scale_y, 0.0],
            [0.0,     0.0,     1.0]])
    }

    ///
    /// Creates a rotation transformation (counter-clockwise, in radians)
    ///
    pub fn rotate(radians: f64) -> Transform2D {
        let cos = f64::cos(radians);
        let sin = f64::sin(radians);

        Transform2D([
            [cos, -sin, 0.0],
            [sin,  cos, 0.0],
            [0.0,  0.0, 1.0]])
    }

    ///
    /// Applies this transformation to a point, returning the transformed point
    ///
    #[inline]
    pub fn transform_point<Point: Coordinate2D>(&self, point: &Point) -> Point {
        let Transform2D(ref a) = self;
        let (x, y)             = (point.x(), point.y());

        Point::from_components(&[
            x*a[0][0] + y*a[0][1] + a[0][2],
            x*a[1][0] + y*a[1][1] + a[1][2]
        ])
    }

    ///
    /// Computes the determinant of a 2x2 matrix
    ///
    fn det2(matrix: &[[f64; 2]; 2]) -> f64 {
        matrix[0][0]*matrix[1][1] - matrix[0][1]*matrix[1][0]
    }

    ///
    /// Computes the minor of a 3x3 matrix
    ///
    fn minor3(matrix: &[[f64; 3]; 3], row: usize, col: usize) -> f64 {
        let (x1, x2) = match col { 0 => (1, 2), 1 => (0, 2), _ => (0, 1) };
        let (y1, y2) = match row { 0 => (1, 2), 1 => (0, 2), _ => (0, 1) };

        let minor    = [
            [matrix[y1][x1], matrix[y1][x2]],
            [matrix[y2][x1], matrix[y2][x2]]
        ];

        Self::det2(&minor)
    }

    ///
    /// Computes the cofactor of an element in a 3x3 matrix
    ///
    fn cofactor3(matrix: &[[f64; 3]; 3], row: usize, col: usize) -> f64 {
        let minor = Self::minor3(matrix, row, col);

        if ((row&1) ^ (col&1)) != 0 {
            -minor
        } else {
            minor
        }
    }

    ///
    /// Inverts this transform, if it is invertible
    ///
    pub fn invert(&self) -> Option<Transform2D> {
        let Transform2D(ref matrix) = self;

        // Adjugate divided by the determinant
        let cofactors = [
            [Self::cofactor3(matrix, 0, 0), Self::cofactor3(matrix, 0, 1), Self::cofactor3(matrix, 0, 2)],
            [Self::cofactor3(matrix, 1, 0), Self::cofactor3(matrix, 1, 1), Self::cofactor3(matrix, 1, 2)],
            [Self::cofactor3(matrix, 2, 0), Self::cofactor3(matrix, 2, 1), Self::cofactor3(matrix, 2, 2)],
        ];

        let det = matrix[0][0]*cofactors[0][0] + matrix[0][1]*cofactors[0][1] + matrix[0][2]*cofactors[0][2];

        if det == 0.0 {
            None
        } else {
            let inv_det = 1.0/det;

            Some(Transform2D([
                [cofactors[0][0]*inv_det, cofactors[1][0]*inv_det, cofactors[2][0]*inv_det],
                [cofactors[0][1]*inv_det, cofactors[1][1]*inv_det, cofactors[2][1]*inv_det],
                [cofactors[0][2]*inv_det, cofactors[1][2]*inv_det, cofactors[2][2]*inv_det],
            ]))
        }
    }
}

impl Mul<Transform2D> for Transform2D {
    type Output=Transform2D;

    fn mul(self, rhs: Transform2D) -> Transform2D {
        let Transform2D(a) = self;
        let Transform2D(b) = rhs;

        let mut result = [[0.0; 3]; 3];

        for row in 0..3 {
            for col in 0..3 {
                result[row][col] = a[row][0]*b[0][col] + a[row][1]*b[1][col] + a[row][2]*b[2][col];
            }
        }

        Transform2D(result)
    }
}
