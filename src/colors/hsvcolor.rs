//! This module implements the HSV color space, a cylindrical rearrangement of RGB. *Value* runs from
//! black to the fully saturated color, which makes it a poor analog of luminance, but hue and
//! saturation are easy to reason about. HSV is the only space besides RGB and hex that converts back
//! to RGB, so it can be used as a source for every other conversion.

use color::{Color, ColorError, RGBColor};

/// An HSV color with integer components: hue in degrees from 0 to 360 (360 is the same hue as 0), and
/// saturation and value as percentages from 0 to 100.
///
/// Out-of-range values can be stored. [`valid`](../../color/trait.Color.html#tymethod.valid) reports
/// them, but conversions go ahead anyway and saturate at the edges of RGB.
/// # Example
/// ```
/// # use clr::prelude::*;
/// # use clr::colors::HSVColor;
/// let rust = HSVColor::new(13, 81, 47);
/// assert_eq!(rust.rgb(), RGBColor::new(119, 43, 22));
/// assert!(!HSVColor::new(361, 0, 0).valid());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue, as an angle in degrees.
    pub h: u16,
    /// The saturation, as a percentage: the distance between the color and the gray of the same
    /// value.
    pub s: u8,
    /// The value, as a percentage: the largest RGB channel.
    pub v: u8,
}

impl HSVColor {
    /// Makes a new color from its three components. Nothing is checked.
    pub fn new(h: u16, s: u8, v: u8) -> HSVColor {
        HSVColor { h, s, v }
    }

    /// Converts to RGB. Each channel is truncated, not rounded, to an integer.
    pub fn rgb(&self) -> RGBColor {
        let h = f64::from(self.h) / 360.0;
        let s = f64::from(self.s) / 100.0;
        let v = f64::from(self.v) / 100.0;

        let (r, g, b) = if s == 0.0 {
            (v, v, v)
        } else {
            // which sixth of the hexagon we're in, and how far along it
            let sector = (h * 6.0).floor();
            let f = h * 6.0 - sector;
            let p = v * (1.0 - s);
            let q = v * (1.0 - f * s);
            let t = v * (1.0 - (1.0 - f) * s);
            match sector as u32 % 6 {
                0 => (v, t, p),
                1 => (q, v, p),
                2 => (p, v, t),
                3 => (p, q, v),
                4 => (t, p, v),
                _ => (v, p, q),
            }
        };

        RGBColor {
            r: (r * 255.0) as u8,
            g: (g * 255.0) as u8,
            b: (b * 255.0) as u8,
        }
    }
}

impl Color for HSVColor {
    fn valid(&self) -> bool {
        self.h <= 360 && self.s <= 100 && self.v <= 100
    }
    fn to_rgb(&self) -> Result<RGBColor, ColorError> {
        Ok(self.rgb())
    }
    /// Returns the stored color without a trip through RGB.
    fn to_hsv(&self) -> Result<HSVColor, ColorError> {
        Ok(*self)
    }
}
