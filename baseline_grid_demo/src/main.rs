// Copyright 2025 the Baseline Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Baseline grid playground.
//!
//! Renders a grid-snapped label over its debug grid for every size category
//! and text style, writes the result as an HTML report, and checks that every
//! rendered baseline lands on the grid.

mod html;
mod label;
mod svg;

use baseline_grid::render::{label_height, rendered_baseline_distance, round_to_pixel};
use baseline_grid::{
    BaselineGridSpec, ContentSizeCategory, FontMetricsProvider, GridError, TextStyle,
};
use tracing_subscriber::EnvFilter;

use crate::html::HtmlSection;
use crate::label::GridLabel;

const GRID_UNIT: f64 = 8.0;
/// Device pixels per point used when sizing labels.
const PIXEL_SCALE: f64 = 3.0;
const REPORT_PATH: &str = "baseline_grid_demo.html";
/// Largest distance from a grid multiple still counted as on the grid.
const GRID_TOLERANCE: f64 = 1e-9;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let provider = demo_provider();
    let provider: &dyn FontMetricsProvider = provider.as_ref();

    let mut sections = size_category_sections(provider)?;
    sections.extend(text_style_sections(provider)?);
    sections.push(extra_spacing_section(provider)?);

    let html = html::render_report("Baseline grid playground", &sections);
    std::fs::write(REPORT_PATH, html)?;
    println!("wrote {REPORT_PATH} ({} sections)", sections.len());

    let report = verify_all(provider)?;
    println!(
        "{}/{} style and size combinations have every baseline on the grid",
        report.aligned, report.total
    );
    println!(
        "{}/{} label heights match the snapped layout",
        report.heights_matching, report.total
    );
    if !report.is_clean() {
        tracing::warn!(
            aligned = report.aligned,
            heights_matching = report.heights_matching,
            total = report.total,
            "some combinations disagree with the rendering model"
        );
    }
    Ok(())
}

fn demo_provider() -> Box<dyn FontMetricsProvider> {
    #[cfg(feature = "parley")]
    {
        Box::new(baseline_grid::MetricsCache::new(
            baseline_grid_text_parley::ParleyMetricsProvider::new()
                .with_display_scale(3.0),
        ))
    }

    #[cfg(not(feature = "parley"))]
    {
        Box::new(baseline_grid::MetricsCache::new(
            baseline_grid::DynamicTypeMetrics::new(),
        ))
    }
}

fn section(label: &GridLabel<'_>) -> Result<HtmlSection, GridError> {
    let layout = label.layout();
    let spec = label.spec();
    Ok(HtmlSection {
        title: format!("{} / {}", spec.text_style.name(), spec.size_category.name()),
        caption: format!(
            "top {} / bottom {} / spacing {:.3} / baselines every {}",
            layout.top_offset,
            layout.bottom_offset,
            layout.paragraph_line_spacing,
            layout.baseline_distance
        ),
        svg: svg::label_svg(label)?,
    })
}

/// One section per size category for body text, driven like a "cycle size" button.
fn size_category_sections(
    provider: &dyn FontMetricsProvider,
) -> Result<Vec<HtmlSection>, GridError> {
    let spec = BaselineGridSpec::new(GRID_UNIT).with_size_category(ContentSizeCategory::ExtraSmall);
    let mut label = GridLabel::new(provider, spec)?;
    label.update_label_text();
    let mut sections = Vec::with_capacity(ContentSizeCategory::ALL.len());
    for _ in ContentSizeCategory::ALL {
        sections.push(section(&label)?);
        label.cycle_size_category()?;
    }
    Ok(sections)
}

/// One section per text style at the default size, driven like a "cycle style" button.
fn text_style_sections(provider: &dyn FontMetricsProvider) -> Result<Vec<HtmlSection>, GridError> {
    let spec = BaselineGridSpec::new(GRID_UNIT).with_text_style(TextStyle::LargeTitle);
    let mut label = GridLabel::new(provider, spec)?;
    label.update_label_text();
    let mut sections = Vec::with_capacity(TextStyle::ALL.len());
    for _ in TextStyle::ALL {
        sections.push(section(&label)?);
        label.cycle_text_style()?;
    }
    Ok(sections)
}

fn extra_spacing_section(provider: &dyn FontMetricsProvider) -> Result<HtmlSection, GridError> {
    let mut label = GridLabel::new(provider, BaselineGridSpec::default())?;
    label.set_grid_unit(4.0)?;
    label.set_extra_line_spacing(1)?;
    label.set_text(
        "Baselines stay on the grid\nwith one extra grid unit\nbetween every pair\nof lines.",
    );
    section(&label)
}

/// Outcome of [`verify_all`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Verification {
    total: usize,
    /// Combinations whose rendered baseline distance is the snapped grid distance.
    aligned: usize,
    /// Combinations whose rendered label height matches the snapped layout.
    heights_matching: usize,
}

impl Verification {
    fn is_clean(&self) -> bool {
        self.aligned == self.total && self.heights_matching == self.total
    }
}

/// Distance from `value` to the nearest multiple of `unit`.
fn grid_error(value: f64, unit: f64) -> f64 {
    let q = value / unit;
    (q - q.round()).abs() * unit
}

/// Checks every style and size category against the rendering model.
///
/// For each combination the rendered baseline distance must equal the snapped
/// distance and be a grid multiple, and the rendered label height must equal
/// `line_height + (n - 1) * baseline_distance` rounded up to the pixel.
fn verify_all(provider: &dyn FontMetricsProvider) -> Result<Verification, GridError> {
    let mut label = GridLabel::new(provider, BaselineGridSpec::new(GRID_UNIT))?;
    label.set_text("one\ntwo\nthree");
    let mut report = Verification::default();
    for category in ContentSizeCategory::ALL {
        label.content_size_category_did_change(category)?;
        for style in TextStyle::ALL {
            label.set_text_style(style)?;
            report.total += 1;

            let layout = label.layout();
            let metrics = label.metrics();
            let lines = label.line_count();
            let distance = rendered_baseline_distance(metrics, layout.paragraph_line_spacing);
            let on_grid = (distance - layout.baseline_distance).abs() < GRID_TOLERANCE
                && grid_error(distance, GRID_UNIT) < GRID_TOLERANCE;
            let height = label_height(metrics, lines, layout.paragraph_line_spacing, PIXEL_SCALE)?;
            let expected_height = round_to_pixel(
                metrics.line_height + f64::from(lines - 1) * layout.baseline_distance,
                PIXEL_SCALE,
            )?;
            let height_matches = (height - expected_height).abs() < GRID_TOLERANCE;
            tracing::debug!(
                style = style.name(),
                category = category.name(),
                leading = metrics.leading,
                distance,
                height,
                expected_height,
                on_grid,
                height_matches,
                "verified"
            );
            if on_grid {
                report.aligned += 1;
            }
            if height_matches {
                report.heights_matching += 1;
            }
        }
    }
    Ok(report)
}
