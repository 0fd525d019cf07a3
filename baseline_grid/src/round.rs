// Copyright 2025 the Baseline Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quantizing values up to a multiple of a unit.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::GridError;

/// Returns the smallest multiple of `unit` that is greater than or equal to `value`.
///
/// This uses ceiling semantics, not round-to-nearest:
///
/// ```
/// use baseline_grid::round_up_to_multiple;
///
/// assert_eq!(round_up_to_multiple(4.1, 4.0), 8.0);
/// assert_eq!(round_up_to_multiple(4.0, 4.0), 4.0);
/// assert_eq!(round_up_to_multiple(-1.0, 4.0), 0.0);
/// ```
///
/// The step count from `value / unit` is corrected by one in either direction
/// when the inexact division lands on the wrong side of an integer, so `k * unit`
/// rounds to itself and the result is never below `value`.
///
/// `unit` must be positive and finite; see [`try_round_up_to_multiple`] for a
/// checked variant. Passing anything else yields a meaningless result.
#[must_use]
pub fn round_up_to_multiple(value: f64, unit: f64) -> f64 {
    debug_assert!(
        unit > 0.0 && unit.is_finite(),
        "round_up_to_multiple requires a positive unit, got {unit}"
    );
    let mut steps = (value / unit).ceil();
    if (steps - 1.0) * unit >= value {
        steps -= 1.0;
    } else if steps * unit < value {
        steps += 1.0;
    }
    // Adding zero turns a `-0.0` (from values in `(-unit, 0]`) into `0.0`.
    steps * unit + 0.0
}

/// Checked [`round_up_to_multiple`].
///
/// Returns [`GridError::InvalidConfiguration`] if `unit` is not a positive,
/// finite number.
pub fn try_round_up_to_multiple(value: f64, unit: f64) -> Result<f64, GridError> {
    check_unit(unit, "rounding unit must be positive and finite")?;
    Ok(round_up_to_multiple(value, unit))
}

pub(crate) fn check_unit(unit: f64, reason: &'static str) -> Result<(), GridError> {
    if unit > 0.0 && unit.is_finite() {
        Ok(())
    } else {
        Err(GridError::config(reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_up_not_to_nearest() {
        assert_eq!(round_up_to_multiple(4.1, 4.0), 8.0);
        assert_eq!(round_up_to_multiple(7.9, 4.0), 8.0);
        assert_eq!(round_up_to_multiple(0.5, 8.0), 8.0);
    }

    #[test]
    fn exact_multiples_are_unchanged() {
        assert_eq!(round_up_to_multiple(4.0, 4.0), 4.0);
        assert_eq!(round_up_to_multiple(0.0, 4.0), 0.0);
        assert_eq!(round_up_to_multiple(0.3, 0.1), 3.0 * 0.1);
    }

    #[test]
    fn never_rounds_below_the_value() {
        assert_eq!(round_up_to_multiple(4.000000001, 4.0), 8.0);
        assert_eq!(round_up_to_multiple(4_000_000_001.0, 4.0), 4_000_000_004.0);
        assert_eq!(round_up_to_multiple(4_000_000_002.0, 4.0), 4_000_000_004.0);
        assert_eq!(round_up_to_multiple(4_000_000_000.0, 4.0), 4_000_000_000.0);
    }

    #[test]
    fn negative_values_round_towards_zero_without_sign() {
        let r = round_up_to_multiple(-1.0, 4.0);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
        assert_eq!(round_up_to_multiple(-5.0, 4.0), -4.0);
    }

    #[test]
    fn device_pixel_quantization() {
        // One pixel at a 3x scale factor.
        let unit = 1.0 / 3.0;
        let r = round_up_to_multiple(20.2, unit);
        assert!(r >= 20.2);
        assert!(r - unit < 20.2);
    }

    #[test]
    fn checked_variant_rejects_bad_units() {
        assert!(matches!(
            try_round_up_to_multiple(1.0, 0.0),
            Err(GridError::InvalidConfiguration { .. })
        ));
        assert!(try_round_up_to_multiple(1.0, -2.0).is_err());
        assert!(try_round_up_to_multiple(1.0, f64::NAN).is_err());
        assert!(try_round_up_to_multiple(1.0, f64::INFINITY).is_err());
        assert_eq!(try_round_up_to_multiple(5.0, 4.0), Ok(8.0));
    }
}
