//! This module contains [`Coord`], a point in 3D space. The floating-point color spaces (XYZ and
//! CIELAB) project onto it so that distance math is written once.

use std::ops::Sub;

/// A point in 3D space. The axes are named `x`, `y`, and `z`, and any color that converts to a
/// `Coord` maps its components onto them in the order of the letters in its name: CIELAB puts `l` on
/// the x-axis, `a` on the y-axis, and `b` on the z-axis.
/// # Example
/// ```
/// # use clr::coord::Coord;
/// let point1 = Coord{x: 0., y: 0., z: -1.};
/// let point2 = Coord{x: 2., y: 3., z: 5.};
/// assert_eq!(point2 - point1, Coord{x: 2., y: 3., z: 6.});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

/// Componentwise difference.
impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Coord {
    /// The Euclidean distance between two 3D points, defined as the square root of the sum of
    /// squares of differences in each axis. Swapping the operands gives exactly the same result,
    /// not merely one within rounding error.
    /// # Example
    /// ```
    /// # use clr::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        let diff = *self - *other;
        (diff.x.powi(2) + diff.y.powi(2) + diff.z.powi(2)).sqrt()
    }
}
