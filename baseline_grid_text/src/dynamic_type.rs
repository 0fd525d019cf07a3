// Copyright 2025 the Baseline Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A table-driven metrics provider modeled on the Dynamic Type size table.

use crate::{ContentSizeCategory, FontMetrics, FontMetricsProvider, TextStyle};

/// Point sizes per style (rows, in [`TextStyle::ALL`] order) and category
/// (columns, in [`ContentSizeCategory::ALL`] order).
const POINT_SIZES: [[f64; 12]; 11] = [
    [31., 32., 33., 34., 36., 38., 40., 44., 48., 52., 56., 60.],
    [25., 26., 27., 28., 30., 32., 34., 38., 43., 48., 53., 58.],
    [19., 20., 21., 22., 24., 26., 28., 34., 39., 44., 50., 56.],
    [17., 18., 19., 20., 22., 24., 26., 31., 37., 43., 49., 55.],
    [14., 15., 16., 17., 19., 21., 23., 28., 33., 40., 47., 53.],
    [12., 13., 14., 15., 17., 19., 21., 25., 30., 36., 42., 49.],
    [14., 15., 16., 17., 19., 21., 23., 28., 33., 40., 47., 53.],
    [13., 14., 15., 16., 18., 20., 22., 26., 32., 38., 44., 51.],
    [12., 12., 12., 13., 15., 17., 19., 23., 27., 33., 38., 44.],
    [11., 11., 11., 12., 14., 16., 18., 22., 26., 32., 37., 43.],
    [11., 11., 11., 11., 13., 15., 17., 20., 24., 29., 34., 40.],
];

/// `(point size, line height)` of each style at [`ContentSizeCategory::Large`].
const DEFAULT_LINE_HEIGHTS: [(f64, f64); 11] = [
    (34., 41.),
    (28., 34.),
    (22., 28.),
    (20., 25.),
    (17., 22.),
    (15., 20.),
    (17., 22.),
    (16., 21.),
    (13., 18.),
    (12., 16.),
    (11., 13.),
];

/// A heuristic [`FontMetricsProvider`] suitable for demos and tests.
///
/// Point sizes come from the Dynamic Type table. Vertical metrics assume a
/// system sans-serif face (ascender `0.952 em`, descender `-0.241 em`), and the
/// leading stretches each style's default line height proportionally. Small
/// caption styles end up with a negative leading, larger ones with a positive
/// leading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynamicTypeMetrics {
    ascender_em: f64,
    descender_em: f64,
}

impl DynamicTypeMetrics {
    /// Creates the provider with the default system sans-serif ratios.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ascender_em: 0.952,
            descender_em: -0.241,
        }
    }

    /// Overrides the em ratios used for ascender and descender.
    ///
    /// `descender_em` is expected to be negative.
    #[must_use]
    pub fn with_em_ratios(mut self, ascender_em: f64, descender_em: f64) -> Self {
        self.ascender_em = ascender_em;
        self.descender_em = descender_em;
        self
    }

    /// The point size of `style` at `category`.
    #[must_use]
    pub fn point_size(style: TextStyle, category: ContentSizeCategory) -> f64 {
        POINT_SIZES[style.index()][category.index()]
    }
}

impl Default for DynamicTypeMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl FontMetricsProvider for DynamicTypeMetrics {
    fn metrics(&self, style: TextStyle, category: ContentSizeCategory) -> FontMetrics {
        let size = Self::point_size(style, category);
        let (default_size, default_line_height) = DEFAULT_LINE_HEIGHTS[style.index()];
        let ascender = self.ascender_em * size;
        let descender = self.descender_em * size;
        let line_height = size * default_line_height / default_size;
        FontMetrics::new(ascender, descender, line_height - (ascender - descender))
    }
}
