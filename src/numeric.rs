//! Small helpers for reducing sequences of floating-point channel values. The color formulas only
//! ever need the smallest and largest of three normalized channels, but the helpers work on any
//! slice of any [`Float`](num::Float).

use num::Float;

/// Returns the smallest value in `values`, or positive infinity if `values` is empty. The result is
/// always one of the inputs (for a non-empty slice without NaNs), so it can be compared for exact
/// equality against them.
/// # Example
/// ```
/// # use clr::numeric::min;
/// assert_eq!(min(&[0.4, 0.1, 0.7]), 0.1);
/// ```
pub fn min<T: Float>(values: &[T]) -> T {
    values.iter().cloned().fold(T::infinity(), T::min)
}

/// Returns the largest value in `values`, or negative infinity if `values` is empty. Like [`min`],
/// the result is one of the inputs.
/// # Example
/// ```
/// # use clr::numeric::max;
/// assert_eq!(max(&[0.4, 0.1, 0.7]), 0.7);
/// ```
pub fn max<T: Float>(values: &[T]) -> T {
    values.iter().cloned().fold(T::neg_infinity(), T::max)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_extrema() {
        let channels = [78. / 255., 91. / 255., 112. / 255.];
        assert_eq!(min(&channels), channels[0]);
        assert_eq!(max(&channels), channels[2]);
        // works for f32 as well
        assert_eq!(max(&[1.5f32, -2.0, 0.0]), 1.5f32);
        assert_eq!(min(&[1.5f32, -2.0, 0.0]), -2.0f32);
    }

    #[test]
    fn test_empty_extrema() {
        let empty: [f64; 0] = [];
        assert!(min(&empty).is_infinite() && min(&empty) > 0.);
        assert!(max(&empty).is_infinite() && max(&empty) < 0.);
    }
}
