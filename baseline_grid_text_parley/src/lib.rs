// Copyright 2025 the Baseline Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parley-backed font metrics provider.
//!
//! This crate implements [`baseline_grid_text::FontMetricsProvider`] using
//! Parley, so grid snapping can run against the vertical metrics of a real,
//! shaped font instead of a heuristic table.

#![no_std]

extern crate alloc;

use alloc::borrow::Cow;
use alloc::sync::Arc;
use core::cell::RefCell;

use baseline_grid_text::{
    ContentSizeCategory, DynamicTypeMetrics, FontMetrics, FontMetricsProvider, TextStyle,
};
use parley::style::{FontFamily as ParleyFontFamily, FontStack, GenericFamily, StyleProperty};
use parley::{Alignment, AlignmentOptions, FontContext, FontWeight};

/// Text shaped to read line metrics. Mixes tall and descending glyphs.
const PROBE_TEXT: &str = "Hxgy";

/// The font family a [`ParleyMetricsProvider`] resolves.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MetricsFamily {
    /// The system sans-serif family.
    SansSerif,
    /// The system serif family.
    Serif,
    /// A named family (e.g. `"Inter"`).
    Named(Arc<str>),
}

/// A [`FontMetricsProvider`] backed by Parley.
///
/// Point sizes follow the Dynamic Type table in
/// [`DynamicTypeMetrics::point_size`]; metrics come from the first shaped line.
pub struct ParleyMetricsProvider {
    font_cx: RefCell<FontContext>,
    layout_cx: RefCell<parley::LayoutContext<()>>,
    family: MetricsFamily,
    display_scale: f32,
    fallback: DynamicTypeMetrics,
}

impl core::fmt::Debug for ParleyMetricsProvider {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyMetricsProvider")
            .field("family", &self.family)
            .field("display_scale", &self.display_scale)
            .finish_non_exhaustive()
    }
}

impl ParleyMetricsProvider {
    /// Creates a provider for the system sans-serif family.
    ///
    /// Font loading uses Parley's default system font configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            font_cx: RefCell::new(FontContext::new()),
            layout_cx: RefCell::new(parley::LayoutContext::new()),
            family: MetricsFamily::SansSerif,
            display_scale: 1.0,
            fallback: DynamicTypeMetrics::new(),
        }
    }

    /// Sets the font family to resolve.
    #[must_use]
    pub fn with_family(mut self, family: MetricsFamily) -> Self {
        self.family = family;
        self
    }

    /// Sets the display scale passed to Parley.
    ///
    /// This is typically a device pixel ratio. Metrics are scaled back into
    /// logical units (divided by the scale).
    #[must_use]
    pub fn with_display_scale(mut self, display_scale: f32) -> Self {
        self.display_scale = display_scale.max(0.0);
        self
    }

    /// Shapes a probe line and returns its metrics, if Parley produced a usable line.
    ///
    /// `None` means no font resolved or the line came back with a degenerate
    /// ascent or descent.
    pub fn try_metrics(
        &self,
        style: TextStyle,
        category: ContentSizeCategory,
    ) -> Option<FontMetrics> {
        let scale = self.display_scale.max(1.0e-6);
        let font_size = point_size_f32(DynamicTypeMetrics::point_size(style, category));

        let mut font_cx = self.font_cx.borrow_mut();
        let mut layout_cx = self.layout_cx.borrow_mut();

        let mut builder = layout_cx.ranged_builder(&mut font_cx, PROBE_TEXT, scale, false);
        builder.push_default(StyleProperty::FontSize(font_size));
        builder.push_default(StyleProperty::FontStack(self.font_stack()));
        builder.push_default(StyleProperty::FontWeight(FontWeight::new(weight(style))));

        let mut layout: parley::Layout<()> = builder.build(PROBE_TEXT);
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start, AlignmentOptions::default());

        let line = layout.lines().next()?;
        let m = line.metrics();
        let ascent = f64::from(m.ascent) / f64::from(scale);
        let descent = f64::from(m.descent) / f64::from(scale);
        let leading = f64::from(m.leading) / f64::from(scale);
        if !(ascent > 0.0 && descent > 0.0 && leading.is_finite()) {
            return None;
        }
        Some(FontMetrics::new(ascent, -descent, leading))
    }

    fn font_stack(&self) -> FontStack<'_> {
        let family = match &self.family {
            MetricsFamily::SansSerif => ParleyFontFamily::Generic(GenericFamily::SansSerif),
            MetricsFamily::Serif => ParleyFontFamily::Generic(GenericFamily::Serif),
            MetricsFamily::Named(name) => ParleyFontFamily::Named(Cow::Borrowed(name.as_ref())),
        };
        FontStack::from(family)
    }
}

impl Default for ParleyMetricsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FontMetricsProvider for ParleyMetricsProvider {
    fn metrics(&self, style: TextStyle, category: ContentSizeCategory) -> FontMetrics {
        self.try_metrics(style, category)
            .unwrap_or_else(|| self.fallback.metrics(style, category))
    }
}

/// Headlines are semibold, everything else regular.
fn weight(style: TextStyle) -> f32 {
    match style {
        TextStyle::Headline => 600.0,
        _ => 400.0,
    }
}

fn point_size_f32(size: f64) -> f32 {
    if !size.is_finite() {
        return 0.0;
    }
    let size = size.max(0.0);
    if size >= f64::from(f32::MAX) {
        f32::MAX
    } else {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Value is clamped to f32::MAX above"
        )]
        {
            size as f32
        }
    }
}
