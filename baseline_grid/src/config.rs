// Copyright 2025 the Baseline Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::GridError;
use crate::round::check_unit;

/// Grid inputs for a single layout computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// The grid spacing, in device-independent units. Must be positive.
    pub grid_unit: f64,
    /// Number of lines in the laid-out text. Must be at least one.
    pub line_count: u32,
    /// Extra whole grid units inserted between consecutive baselines.
    pub extra_line_spacing_units: u32,
}

impl GridConfig {
    /// Creates a single-line config with the given grid unit and no extra spacing.
    #[must_use]
    pub fn new(grid_unit: f64) -> Self {
        Self {
            grid_unit,
            ..Self::default()
        }
    }

    /// Sets the number of lines.
    #[must_use]
    pub fn with_line_count(mut self, line_count: u32) -> Self {
        self.line_count = line_count;
        self
    }

    /// Sets the extra spacing between baselines, in grid units.
    #[must_use]
    pub fn with_extra_line_spacing_units(mut self, units: u32) -> Self {
        self.extra_line_spacing_units = units;
        self
    }

    /// Checks the config without computing anything.
    pub fn validate(&self) -> Result<(), GridError> {
        check_unit(self.grid_unit, "grid unit must be positive and finite")?;
        if self.line_count == 0 {
            return Err(GridError::config("line count must be at least one"));
        }
        Ok(())
    }

    /// The extra spacing between baselines, in layout units.
    #[must_use]
    pub fn extra_line_spacing(&self) -> f64 {
        f64::from(self.extra_line_spacing_units) * self.grid_unit
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_unit: 8.0,
            line_count: 1,
            extra_line_spacing_units: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(GridConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_grid_unit() {
        for unit in [0.0, -8.0, f64::NAN] {
            assert!(matches!(
                GridConfig::new(unit).validate(),
                Err(GridError::InvalidConfiguration { .. })
            ));
        }
    }

    #[test]
    fn rejects_zero_lines() {
        let config = GridConfig::new(4.0).with_line_count(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn extra_spacing_is_whole_grid_units() {
        let config = GridConfig::new(4.0).with_extra_line_spacing_units(2);
        assert_eq!(config.extra_line_spacing(), 8.0);
    }
}
