//! CIE 1931 XYZ, the device-independent space CIELAB is computed from.

/// A point in the CIE 1931 XYZ color space under D65, scaled so that Y (luminance) is 100 for white.
/// None of the components should be negative for a real color.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X axis: a mix of the cone responses, roughly red.
    pub x: f64,
    /// The Y axis: luminance.
    pub y: f64,
    /// The Z axis: roughly the blue cone response.
    pub z: f64,
}
