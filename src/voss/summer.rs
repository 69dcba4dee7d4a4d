//! Reductions combining the values of one step into a single output.
//!
//! Any `Fn(&[f64]) -> f64` works as a summer. These cover the common cases.

use super::Summer;

/// Arithmetic sum. Summing no values gives `0.0`.
///
/// This is the default summer for both generator variants.
///
/// # Example
/// ```
/// use voss_noise::voss::summer::sum;
/// assert_eq!(sum(&[]), 0.0);
/// assert_eq!(sum(&[1.0, 10.0, 100.0]), 111.0);
/// ```
#[inline]
pub fn sum(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, v| acc + v)
}

/// Arithmetic mean. The mean of no values is `0.0`.
#[inline]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values) / values.len() as f64
}

/// Sum clamped from below: `max(min, sum(values))`.
///
/// # Example
/// ```
/// use voss_noise::voss::summer::floor_at;
/// let clamp = floor_at(0.0);
/// assert_eq!(clamp(&[99.0]), 99.0);
/// assert_eq!(clamp(&[-99.0]), 0.0);
/// ```
pub fn floor_at(min: f64) -> Summer {
    Box::new(move |values| sum(values).max(min))
}

/// The boxed default summer.
pub(crate) fn default_summer() -> Summer {
    Box::new(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_empty_is_zero() {
        assert_eq!(sum(&[]), 0.0);
    }

    #[test]
    fn test_sum_values() {
        assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
        assert_eq!(sum(&[-4.0, 4.0]), 0.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert!((mean(&[1.0, 2.0, 6.0]) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_floor_at() {
        let clamp = floor_at(0.0);
        assert_eq!(clamp(&[]), 0.0);
        assert_eq!(clamp(&[3.0, -1.0]), 2.0);
        assert_eq!(clamp(&[-3.0, 1.0]), 0.0);

        let clamp = floor_at(-2.0);
        assert_eq!(clamp(&[-10.0]), -2.0);
    }

    #[test]
    fn test_default_summer_is_sum() {
        let summer = default_summer();
        assert_eq!(summer(&[]), 0.0);
        assert_eq!(summer(&[1.0, 10.0, 100.0]), 111.0);
    }
}
