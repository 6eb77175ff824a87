//! This file implements HSL as an output of RGB. HSL differs from HSV in its third component:
//! *lightness* runs from black through the fully saturated color in the middle to white at the end,
//! which makes its saturation very inaccurate for light colors. Converting back from HSL to RGB isn't
//! supported, so HSL is a result type rather than a [`Color`](../../color/trait.Color.html).

/// An HSL color with integer components, as produced by
/// [`RGBColor::hsl`](../../color/struct.RGBColor.html#method.hsl).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue, in degrees from 0 to 360. Exactly the same as the hue of HSV.
    pub h: u16,
    /// The saturation, as a percentage.
    pub s: u8,
    /// The lightness, as a percentage: the average of the largest and smallest RGB channels.
    pub l: u8,
}

impl HSLColor {
    /// Whether every component is within its range.
    pub fn valid(&self) -> bool {
        self.h <= 360 && self.s <= 100 && self.l <= 100
    }
}
