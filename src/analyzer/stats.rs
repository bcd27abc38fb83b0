/// Arithmetic mean. Empty input yields 0 by policy; callers that need to
/// distinguish "empty" from "mean of zero" must check length themselves.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (N divisor). 0 for fewer than two values.
pub fn stddev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(stddev(&[]), 0.0);
        assert_eq!(sum(&[]), 0.0);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(mean(&[42.0]), 42.0);
        // stddev needs at least two points
        assert_eq!(stddev(&[42.0]), 0.0);
    }

    #[test]
    fn test_mean_within_min_max() {
        let values = [3.0, -1.0, 7.5, 2.0];
        let m = mean(&values);
        assert!(m >= -1.0 && m <= 7.5);
        assert!((m - 2.875).abs() < 1e-12);
    }

    #[test]
    fn test_stddev_constant_sequence_is_zero() {
        assert_eq!(stddev(&[5.0, 5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_stddev_is_population_not_sample() {
        // Population stddev of [2, 4] is 1.0; sample stddev would be sqrt(2).
        assert!((stddev(&[2.0, 4.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_values() {
        let values = [-10.0, -20.0, -30.0];
        assert_eq!(mean(&values), -20.0);
        assert_eq!(sum(&values), -60.0);
        assert!(stddev(&values) > 0.0);
    }
}
