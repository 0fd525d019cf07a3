// Copyright 2025 the Baseline Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A model of how the target text renderer lays out paragraph lines.
//!
//! The grid calculator has to predict where the renderer puts baselines. These
//! helpers encode the observed behavior so that label heights and baseline
//! distances can be checked without a renderer:
//!
//! - a single line is `line_height` tall, rounded up to a whole device pixel;
//! - consecutive baselines are `line_height + leading + line_spacing` apart when
//!   the leading is zero or negative;
//! - a positive leading is a *minimum* gap: the distance becomes
//!   `line_height + max(leading, line_spacing)`.
//!
//! The positive-leading rule was observed for one system font family. It is an
//! assumption about the renderer, not a cross-platform guarantee.

use baseline_grid_text::FontMetrics;

use crate::GridError;
use crate::round::{check_unit, round_up_to_multiple};

/// Distance between two consecutive baselines when the paragraph requests
/// `line_spacing`.
#[must_use]
pub fn rendered_baseline_distance(metrics: &FontMetrics, line_spacing: f64) -> f64 {
    if metrics.leading > 0.0 {
        metrics.line_height + metrics.leading.max(line_spacing)
    } else {
        metrics.line_height + metrics.leading + line_spacing
    }
}

/// Rounds `value` up to a whole device pixel at `pixel_scale` pixels per unit.
pub fn round_to_pixel(value: f64, pixel_scale: f64) -> Result<f64, GridError> {
    check_unit(pixel_scale, "pixel scale must be positive and finite")?;
    Ok(round_up_to_multiple(value, 1.0 / pixel_scale))
}

/// Height of a label with `line_count` lines, as the renderer would size it.
///
/// `line_spacing` is the paragraph line spacing (zero if none is requested).
pub fn label_height(
    metrics: &FontMetrics,
    line_count: u32,
    line_spacing: f64,
    pixel_scale: f64,
) -> Result<f64, GridError> {
    if line_count == 0 {
        return Err(GridError::config("line count must be at least one"));
    }
    let gaps = f64::from(line_count - 1);
    let height = metrics.line_height + gaps * rendered_baseline_distance(metrics, line_spacing);
    round_to_pixel(height, pixel_scale)
}
