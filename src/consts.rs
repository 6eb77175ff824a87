//! Constants used for the sRGB, XYZ, and CIELAB conversions. The linear part of the sRGB to XYZ
//! conversion is kept as a matrix rather than as inline multiplications so that the coefficients can
//! be checked against the published table at a glance.

use rulinalg::matrix::Matrix;

lazy_static! {
    /// Linear sRGB (scaled to 0-100) to CIE 1931 XYZ, D65, rows giving X, Y, and Z.
    pub static ref SRGB_TO_XYZ: Matrix<f64> = Matrix::new(3, 3, vec![
        0.4124, 0.3576, 0.1805,
        0.2126, 0.7152, 0.0722,
        0.0193, 0.1192, 0.9505,
    ]);
}

/// Above this normalized channel value, the sRGB transfer function is a power curve; at or below
/// it, it's linear.
pub const SRGB_GAMMA_CUTOFF: f64 = 0.04045;

/// The reference white CIELAB values are normalized against. Y is 100.
pub const CIELAB_REFERENCE_WHITE: [f64; 3] = [95.682, 100.000, 92.149];

/// Cutoff of the CIE nonlinearity: the cube root is used strictly above it.
pub const CIE_EPSILON: f64 = 0.008856;

/// Slope of the linear segment of the CIE nonlinearity.
pub const CIE_KAPPA_SLOPE: f64 = 7.787;

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_luminance_row_sums_to_one() {
        // white must map to Y = 100
        let row_sum: f64 = SRGB_TO_XYZ.data()[3..6].iter().sum();
        assert!((row_sum - 1.0).abs() <= 1e-12);
    }
}
