//! The subtractive CMYK model, as an output of RGB. This is the naive device-independent formula:
//! there's no ink profile or dot gain, just the complement of RGB with the shared darkness pulled
//! out into the key channel.

/// A CMYK color, with every component a percentage from 0 to 100. Produced by
/// [`RGBColor::cmyk`](../../color/struct.RGBColor.html#method.cmyk).
/// # Example
/// ```
/// # use clr::prelude::*;
/// # use clr::colors::CMYKColor;
/// // pure black is all key, with no division by zero
/// assert_eq!(RGBColor::new(0, 0, 0).cmyk(), CMYKColor{c: 0, m: 0, y: 0, k: 100});
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CMYKColor {
    /// Cyan.
    pub c: u8,
    /// Magenta.
    pub m: u8,
    /// Yellow.
    pub y: u8,
    /// Key (black).
    pub k: u8,
}

impl CMYKColor {
    /// Whether every component is a valid percentage.
    pub fn valid(&self) -> bool {
        [self.c, self.m, self.y, self.k].iter().all(|&x| x <= 100)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_validity() {
        assert!(CMYKColor { c: 100, m: 0, y: 50, k: 0 }.valid());
        assert!(!CMYKColor { c: 0, m: 0, y: 0, k: 101 }.valid());
    }
}
