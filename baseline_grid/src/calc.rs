// Copyright 2025 the Baseline Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid-snapping arithmetic.
//!
//! Two independent adjustments put every baseline of a label on the grid:
//!
//! - **Anchors**: the first baseline is pinned `top` below the container top and
//!   the last baseline `bottom` above the container bottom. Rounding the
//!   ascender and the negated descender up to the grid unit makes both offsets
//!   grid multiples, so a single-line label sits on a grid line.
//! - **Line spacing**: consecutive baselines are `line_height + leading` apart by
//!   default. Requesting extra paragraph line spacing stretches that distance up
//!   to the next grid multiple.

use baseline_grid_text::FontMetrics;

use crate::round::{check_unit, round_up_to_multiple};
use crate::{AnchorOffsets, BaselineLayout, GridConfig, GridError};

/// Allowed drift between `line_height` and `ascender - descender`.
const LINE_HEIGHT_TOLERANCE: f64 = 1e-6;

/// Checks the invariants the calculator relies on.
///
/// The ascender must be positive, the descender negative, every field finite,
/// and `line_height` must equal `ascender - descender`.
pub fn validate_metrics(metrics: &FontMetrics) -> Result<(), GridError> {
    let FontMetrics {
        ascender,
        descender,
        line_height,
        leading,
    } = *metrics;
    if !(ascender.is_finite()
        && descender.is_finite()
        && line_height.is_finite()
        && leading.is_finite())
    {
        return Err(reject(GridError::metrics("metrics must be finite")));
    }
    if ascender <= 0.0 {
        return Err(reject(GridError::metrics("ascender must be positive")));
    }
    if descender >= 0.0 {
        return Err(reject(GridError::metrics("descender must be negative")));
    }
    if (line_height - (ascender - descender)).abs() > LINE_HEIGHT_TOLERANCE {
        return Err(reject(GridError::metrics(
            "line height must equal ascender minus descender",
        )));
    }
    Ok(())
}

/// Computes the anchor offsets that put a single-line label's baseline on the grid.
///
/// `top` is the ascender and `bottom` the negated descender, each rounded up to
/// a multiple of `grid_unit`.
pub fn compute_anchor_offsets(
    metrics: &FontMetrics,
    grid_unit: f64,
) -> Result<AnchorOffsets, GridError> {
    check_grid_unit(grid_unit)?;
    validate_metrics(metrics)?;
    Ok(anchor_offsets(metrics, grid_unit))
}

/// Computes the paragraph line spacing that makes consecutive baselines a grid
/// multiple apart.
///
/// The target distance is `line_height + leading` rounded up to the grid, plus
/// `extra_spacing_units` whole grid units. The returned spacing is the
/// difference to the natural distance, plus the leading if it is positive: the
/// target text renderer treats a positive font leading as a minimum line gap
/// rather than adding it to the requested spacing.
pub fn compute_line_spacing(
    metrics: &FontMetrics,
    grid_unit: f64,
    extra_spacing_units: u32,
) -> Result<f64, GridError> {
    check_grid_unit(grid_unit)?;
    validate_metrics(metrics)?;
    let (spacing, _) = line_spacing(metrics, grid_unit, extra_spacing_units);
    Ok(spacing)
}

/// Computes the full [`BaselineLayout`] for `metrics` under `config`.
pub fn compute_layout(
    metrics: &FontMetrics,
    config: &GridConfig,
) -> Result<BaselineLayout, GridError> {
    check_config(config)?;
    validate_metrics(metrics)?;

    let anchors = anchor_offsets(metrics, config.grid_unit);
    let (paragraph_line_spacing, baseline_distance) =
        line_spacing(metrics, config.grid_unit, config.extra_line_spacing_units);
    let layout = BaselineLayout {
        top_offset: anchors.top,
        bottom_offset: anchors.bottom,
        paragraph_line_spacing,
        baseline_distance,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        grid_unit = config.grid_unit,
        line_count = config.line_count,
        top = layout.top_offset,
        bottom = layout.bottom_offset,
        spacing = layout.paragraph_line_spacing,
        distance = layout.baseline_distance,
        "computed baseline layout"
    );

    Ok(layout)
}

/// [`GridConfig::validate`] with rejection logging.
pub(crate) fn check_config(config: &GridConfig) -> Result<(), GridError> {
    config.validate().map_err(reject)
}

fn check_grid_unit(grid_unit: f64) -> Result<(), GridError> {
    check_unit(grid_unit, "grid unit must be positive and finite").map_err(reject)
}

fn anchor_offsets(metrics: &FontMetrics, grid_unit: f64) -> AnchorOffsets {
    AnchorOffsets {
        top: round_up_to_multiple(metrics.ascender, grid_unit),
        bottom: round_up_to_multiple(-metrics.descender, grid_unit),
    }
}

/// Returns `(paragraph_line_spacing, target_distance)`.
fn line_spacing(metrics: &FontMetrics, grid_unit: f64, extra_spacing_units: u32) -> (f64, f64) {
    let default_distance = metrics.default_baseline_distance();
    let target_distance = round_up_to_multiple(default_distance, grid_unit)
        + f64::from(extra_spacing_units) * grid_unit;
    let raw_spacing = target_distance - default_distance;
    (raw_spacing + metrics.leading.max(0.0), target_distance)
}

fn reject(err: GridError) -> GridError {
    #[cfg(feature = "tracing")]
    tracing::warn!(%err, "rejected grid layout input");
    err
}
