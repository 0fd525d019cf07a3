// Copyright 2025 the Baseline Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for baseline grid snapping.
//!
//! 1. Purity: identical inputs always produce identical outputs.
//! 2. Anchor offsets are grid multiples.
//! 3. Rounding up is a ceiling: `r >= v`, `r - u < v`, exact multiples fixed.
//! 4. Positive leading is added back and cancels against the renderer's minimum gap.
//! 5. Non-positive leading needs no add-back.
//! 6. Rendered baselines of a multi-line label all land on the grid.

use baseline_grid::render::rendered_baseline_distance;
use baseline_grid::{
    FontMetrics, GridConfig, compute_anchor_offsets, compute_layout, compute_line_spacing,
    round_up_to_multiple,
};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-6;

// ── Helpers ─────────────────────────────────────────────────────────────

fn grid_unit() -> impl Strategy<Value = f64> {
    prop_oneof![
        prop::sample::select(vec![1.0, 2.0, 4.0, 8.0, 0.5, 0.25]),
        0.1f64..16.0,
    ]
}

fn metrics_with_leading(leading: impl Strategy<Value = f64>) -> impl Strategy<Value = FontMetrics> {
    (1.0f64..120.0, -40.0f64..-0.1, leading)
        .prop_map(|(ascender, descender, leading)| FontMetrics::new(ascender, descender, leading))
}

fn metrics() -> impl Strategy<Value = FontMetrics> {
    metrics_with_leading(-4.0f64..8.0)
}

/// Values up to quotients far beyond `1e9`, where relative tolerances break down.
fn value() -> impl Strategy<Value = f64> {
    prop_oneof![-1000.0f64..1000.0, -1e13f64..1e13]
}

/// Distance from `value` to the nearest multiple of `unit`.
fn grid_error(value: f64, unit: f64) -> f64 {
    let q = value / unit;
    (q - q.round()).abs() * unit
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Purity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn computations_are_idempotent(m in metrics(), unit in grid_unit(), extra in 0u32..4) {
        prop_assert_eq!(compute_anchor_offsets(&m, unit), compute_anchor_offsets(&m, unit));
        prop_assert_eq!(
            compute_line_spacing(&m, unit, extra),
            compute_line_spacing(&m, unit, extra)
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Grid alignment of anchors
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn anchor_offsets_are_grid_multiples(m in metrics(), unit in grid_unit()) {
        let a = compute_anchor_offsets(&m, unit).unwrap();
        prop_assert!(grid_error(a.top, unit) < TOLERANCE, "top {} unit {}", a.top, unit);
        prop_assert!(grid_error(a.bottom, unit) < TOLERANCE, "bottom {} unit {}", a.bottom, unit);
        prop_assert!(a.top >= m.ascender);
        prop_assert!(a.bottom >= -m.descender);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Ceiling correctness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn round_up_is_a_ceiling(v in value(), u in 0.01f64..50.0) {
        let r = round_up_to_multiple(v, u);
        prop_assert!(r >= v, "{} < {}", r, v);
        // `r - u` is itself rounded, so allow a few ulps of `r` on the upper bound.
        let ulps = 4.0 * f64::EPSILON * r.abs().max(u);
        prop_assert!(r - u < v + ulps, "{} - {} >= {}", r, u, v);
    }

    #[test]
    fn anchors_never_fall_short_of_large_metrics(
        ascender in 1e6f64..1e13,
        unit in grid_unit(),
    ) {
        let m = FontMetrics::new(ascender, -5.0, 0.0);
        let a = compute_anchor_offsets(&m, unit).unwrap();
        prop_assert!(a.top >= ascender, "top {} < ascender {}", a.top, ascender);
    }

    #[test]
    fn exact_multiples_are_fixed_points(k in 0u32..10_000, u in 0.01f64..50.0) {
        let value = f64::from(k) * u;
        prop_assert_eq!(round_up_to_multiple(value, u), value);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. / 5. Leading compensation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn positive_leading_is_added_back(
        m in metrics_with_leading(0.01f64..8.0),
        unit in grid_unit(),
        extra in 0u32..4,
    ) {
        let spacing = compute_line_spacing(&m, unit, extra).unwrap();
        let target = round_up_to_multiple(m.line_height + m.leading, unit) + f64::from(extra) * unit;
        // Subtracting the add-back recovers the raw spacing.
        let reconstructed = m.line_height + m.leading + (spacing - m.leading);
        prop_assert!((reconstructed - target).abs() < TOLERANCE);
        // And the renderer, which enforces the leading as a minimum gap, hits the target.
        prop_assert!((rendered_baseline_distance(&m, spacing) - target).abs() < TOLERANCE);
        prop_assert!(spacing >= m.leading);
    }

    #[test]
    fn non_positive_leading_needs_no_add_back(
        m in metrics_with_leading(-4.0f64..=0.0),
        unit in grid_unit(),
        extra in 0u32..4,
    ) {
        let spacing = compute_line_spacing(&m, unit, extra).unwrap();
        let target = round_up_to_multiple(m.line_height + m.leading, unit) + f64::from(extra) * unit;
        let reconstructed = m.line_height + m.leading + spacing;
        prop_assert!((reconstructed - target).abs() < TOLERANCE);
        prop_assert!((rendered_baseline_distance(&m, spacing) - target).abs() < TOLERANCE);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. End to end
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rendered_baselines_land_on_grid(
        m in metrics(),
        unit in grid_unit(),
        lines in 1u32..12,
        extra in 0u32..3,
    ) {
        let config = GridConfig::new(unit)
            .with_line_count(lines)
            .with_extra_line_spacing_units(extra);
        let layout = compute_layout(&m, &config).unwrap();
        let step = rendered_baseline_distance(&m, layout.paragraph_line_spacing);
        for i in 0..lines {
            let y = layout.top_offset + f64::from(i) * step;
            prop_assert!(grid_error(y, unit) < 1e-5, "line {} at {} (unit {})", i, y, unit);
        }
        prop_assert!(grid_error(layout.container_height(lines), unit) < 1e-5);
    }
}
