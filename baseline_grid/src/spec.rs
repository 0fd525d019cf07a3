// Copyright 2025 the Baseline Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use baseline_grid_text::{ContentSizeCategory, FontMetrics, FontMetricsProvider, TextStyle};

use crate::calc::check_config;
use crate::{BaselineLayout, GridConfig, GridError, compute_layout};

/// The options a host sets to get a grid-snapped label.
///
/// A spec is resolved against a [`FontMetricsProvider`] to produce a
/// [`BaselineLayout`]. Hosts keep this value and resolve it again whenever any
/// of its inputs (or the user's size category) change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaselineGridSpec {
    /// Grid size in device-independent units.
    pub grid_unit: f64,
    /// Additional whole grid units between consecutive lines.
    pub extra_line_spacing_in_grid_units: u32,
    /// Which named style's metrics to fetch.
    pub text_style: TextStyle,
    /// Which size category's metrics to fetch.
    pub size_category: ContentSizeCategory,
}

impl BaselineGridSpec {
    /// Creates a spec with the given grid unit and default style and category.
    #[must_use]
    pub fn new(grid_unit: f64) -> Self {
        Self {
            grid_unit,
            ..Self::default()
        }
    }

    /// Sets the text style.
    #[must_use]
    pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    /// Sets the size category.
    #[must_use]
    pub fn with_size_category(mut self, size_category: ContentSizeCategory) -> Self {
        self.size_category = size_category;
        self
    }

    /// Sets the extra spacing between lines, in grid units.
    #[must_use]
    pub fn with_extra_line_spacing(mut self, units: u32) -> Self {
        self.extra_line_spacing_in_grid_units = units;
        self
    }

    /// The [`GridConfig`] for a label with `line_count` lines.
    #[must_use]
    pub fn grid_config(&self, line_count: u32) -> GridConfig {
        GridConfig {
            grid_unit: self.grid_unit,
            line_count,
            extra_line_spacing_units: self.extra_line_spacing_in_grid_units,
        }
    }

    /// Fetches metrics from `provider` and computes the layout.
    pub fn resolve(
        &self,
        provider: &dyn FontMetricsProvider,
        line_count: u32,
    ) -> Result<BaselineLayout, GridError> {
        self.resolve_with_metrics(provider, line_count)
            .map(|(_, layout)| layout)
    }

    /// Like [`resolve`](Self::resolve), but also returns the metrics the layout
    /// was computed from.
    ///
    /// The provider is queried once, and only after the configuration passed
    /// validation.
    pub fn resolve_with_metrics(
        &self,
        provider: &dyn FontMetricsProvider,
        line_count: u32,
    ) -> Result<(FontMetrics, BaselineLayout), GridError> {
        let config = self.grid_config(line_count);
        check_config(&config)?;
        let metrics = provider.metrics(self.text_style, self.size_category);
        let layout = compute_layout(&metrics, &config)?;
        Ok((metrics, layout))
    }
}

impl Default for BaselineGridSpec {
    fn default() -> Self {
        Self {
            grid_unit: 8.0,
            extra_line_spacing_in_grid_units: 0,
            text_style: TextStyle::Body,
            size_category: ContentSizeCategory::Large,
        }
    }
}
