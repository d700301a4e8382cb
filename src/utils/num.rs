use crate::utils::Tolerance;

/// Number of decimal places travel times are discretized to.
pub const TIME_PRECISION: usize = 1;

const POW_10: [f64; 4] = [1.0, 10.0, 100.0, 1_000.0];

/// Rounds `value` up to the next multiple of `10^-precision`.
#[inline]
pub fn ceil_to_precision(value: f64, precision: usize) -> f64 {
    let scale = POW_10[precision];
    (value * scale).ceil() / scale
}

/// Rounds `value` to the nearest multiple of `10^-precision`.
#[inline]
pub fn round_to_precision(value: f64, precision: usize) -> f64 {
    let scale = POW_10[precision];
    (value * scale).round() / scale
}

pub fn is_multiple_of_precision(value: f64, precision: usize) -> bool {
    let scaled = value * POW_10[precision];
    (scaled - scaled.round()).abs() <= f64::tol()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn ceil_never_rounds_down() {
        assert_eq!(ceil_to_precision(5.0, 1), 5.0);
        assert_eq!(ceil_to_precision(5.01, 1), 5.1);
        assert_eq!(ceil_to_precision(4.949747, 1), 5.0);
        assert_eq!(ceil_to_precision(0.0, 1), 0.0);
    }

    #[test]
    fn coarser_and_finer_precision() {
        assert_eq!(ceil_to_precision(2.01, 0), 3.0);
        assert_eq!(ceil_to_precision(2.011, 2), 2.02);
        assert_eq!(round_to_precision(2.04, 1), 2.0);
        assert_eq!(round_to_precision(2.06, 1), 2.1);
    }

    #[test]
    fn multiples_of_a_tenth() {
        assert!(is_multiple_of_precision(15.0, 1));
        assert!(is_multiple_of_precision(0.3, 1));
        assert!(!is_multiple_of_precision(0.35, 1));
    }

    proptest! {
        #[test]
        fn rounding_after_ceil_is_a_no_op(value in 0.0f64..10_000.0) {
            let snapped = ceil_to_precision(value, TIME_PRECISION);
            prop_assert_eq!(round_to_precision(snapped, TIME_PRECISION), snapped);
            prop_assert!(is_multiple_of_precision(snapped, TIME_PRECISION));
            prop_assert!(snapped + f64::tol() >= value);
        }
    }
}
