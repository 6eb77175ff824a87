//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB), which has an L value for lightness
//! and two opponent color axes. Euclidean distance in CIELAB is a reasonable approximation of how
//! different two colors look, so it's what naming and
//! [`Color::distance`](../../color/trait.Color.html#method.distance) use. Formally, the three values
//! are called L\*, a\*, and b\*, but for convenience they are just `l`, `a`, and `b` here.

use coord::Coord;

/// A color in the CIELAB color space.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CIELABColor {
    /// The lightness of the color. 0 is black and 100 is diffuse white.
    pub l: f64,
    /// The first opponent color axis, green (negative) to magenta (positive). Usually between -128
    /// and 127, but the formula doesn't bound it.
    pub a: f64,
    /// The second opponent color axis, blue (negative) to yellow (positive). Usually between -128
    /// and 127, but the formula doesn't bound it.
    pub b: f64,
}

impl CIELABColor {
    /// The Euclidean distance between two CIELAB colors. This is symmetric, and zero only if the
    /// coordinates are identical.
    /// # Example
    /// ```
    /// # use clr::colors::CIELABColor;
    /// let lab1 = CIELABColor{l: 10.5, a: -45.0, b: 40.0};
    /// let lab2 = CIELABColor{l: 54.2, a: 65.0, b: 100.0};
    /// assert!((lab1.distance(&lab2) - 132.70150715).abs() <= 1e-7);
    /// ```
    pub fn distance(&self, other: &CIELABColor) -> f64 {
        let c1: Coord = (*self).into();
        let c2: Coord = (*other).into();
        c1.euclidean_distance(&c2)
    }
}

impl From<Coord> for CIELABColor {
    fn from(c: Coord) -> CIELABColor {
        CIELABColor { l: c.x, a: c.y, b: c.z }
    }
}

impl Into<Coord> for CIELABColor {
    fn into(self) -> Coord {
        Coord { x: self.l, y: self.a, z: self.b }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use color::RGBColor;

    #[test]
    fn test_lightness_ordering() {
        // lighter grays have higher L
        let grays: Vec<f64> = [0u8, 50, 100, 150, 200, 255]
            .iter()
            .map(|&v| RGBColor::new(v, v, v).cielab().l)
            .collect();
        for pair in grays.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_coord_projection() {
        let lab = CIELABColor { l: 50., a: -20., b: 10. };
        let coord: Coord = lab.into();
        assert_eq!(coord, Coord { x: 50., y: -20., z: 10. });
        assert_eq!(CIELABColor::from(coord), lab);
    }
}
