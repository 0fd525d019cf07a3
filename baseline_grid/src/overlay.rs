// Copyright 2025 the Baseline Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Line, Rect};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::GridError;
use crate::round::check_unit;

/// Horizontal debug lines visualizing a baseline grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridOverlay {
    /// The grid spacing.
    pub grid_unit: f64,
    /// Stroke width of each line.
    pub line_width: f64,
}

impl GridOverlay {
    /// Creates an overlay for `grid_unit` with a hairline stroke.
    pub fn new(grid_unit: f64) -> Result<Self, GridError> {
        check_unit(grid_unit, "grid unit must be positive and finite")?;
        Ok(Self {
            grid_unit,
            line_width: 0.5,
        })
    }

    /// Sets the stroke width.
    ///
    /// Returns [`GridError::InvalidConfiguration`] unless `line_width` is
    /// positive and finite.
    pub fn with_line_width(mut self, line_width: f64) -> Result<Self, GridError> {
        check_unit(line_width, "line width must be positive and finite")?;
        self.line_width = line_width;
        Ok(self)
    }

    /// Number of lines that fit in a rectangle `height` tall, saturating at `u32::MAX`.
    #[must_use]
    pub fn line_count(&self, height: f64) -> u32 {
        let first = self.grid_unit - self.line_width / 2.0;
        if height.is_nan() || height <= first {
            return 0;
        }
        let count = ((height - first) / self.grid_unit).ceil();
        if count >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Value is a whole number clamped to u32::MAX above"
            )]
            {
                count as u32
            }
        }
    }

    /// The grid lines crossing `bounds`, top to bottom.
    ///
    /// Line `i` is centered `(i + 1) * grid_unit - line_width / 2` below the top
    /// of `bounds`, so the bottom edge of its stroke lies on the grid position.
    pub fn lines(&self, bounds: Rect) -> impl Iterator<Item = Line> + '_ {
        let first = self.grid_unit - self.line_width / 2.0;
        (0..self.line_count(bounds.height()))
            .map(move |i| first + f64::from(i) * self.grid_unit)
            .take_while(move |y| *y < bounds.height())
            .map(move |y| Line::new((bounds.x0, bounds.y0 + y), (bounds.x1, bounds.y0 + y)))
    }
}
