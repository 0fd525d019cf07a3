// Copyright 2025 the Baseline Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A grid-snapped label host.
//!
//! The layout core is pure; this type plays the role of the view that owns the
//! inputs, notices when they change, and snaps itself to the grid again.

use baseline_grid::{
    BaselineGridSpec, BaselineLayout, ContentSizeCategory, FontMetrics, FontMetricsProvider,
    GridError, TextStyle,
};
use kurbo::{Point, Rect};

/// A multi-line label whose baselines sit on a grid.
pub(crate) struct GridLabel<'p> {
    provider: &'p dyn FontMetricsProvider,
    spec: BaselineGridSpec,
    text: String,
    metrics: FontMetrics,
    layout: BaselineLayout,
}

impl core::fmt::Debug for GridLabel<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridLabel")
            .field("spec", &self.spec)
            .field("text", &self.text)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl<'p> GridLabel<'p> {
    pub(crate) fn new(
        provider: &'p dyn FontMetricsProvider,
        spec: BaselineGridSpec,
    ) -> Result<Self, GridError> {
        let mut label = Self {
            provider,
            spec,
            text: String::new(),
            metrics: FontMetrics::new(1.0, -1.0, 0.0),
            layout: BaselineLayout::default(),
        };
        label.snap_to_grid(spec)?;
        Ok(label)
    }

    pub(crate) fn spec(&self) -> &BaselineGridSpec {
        &self.spec
    }

    pub(crate) fn layout(&self) -> &BaselineLayout {
        &self.layout
    }

    pub(crate) fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    /// Number of laid-out lines; an empty label still occupies one.
    pub(crate) fn line_count(&self) -> u32 {
        u32::try_from(self.text.lines().count().max(1)).unwrap_or(u32::MAX)
    }

    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub(crate) fn set_grid_unit(&mut self, grid_unit: f64) -> Result<(), GridError> {
        self.snap_to_grid(BaselineGridSpec {
            grid_unit,
            ..self.spec
        })
    }

    pub(crate) fn set_text_style(&mut self, text_style: TextStyle) -> Result<(), GridError> {
        self.snap_to_grid(self.spec.with_text_style(text_style))
    }

    pub(crate) fn set_size_category(
        &mut self,
        category: ContentSizeCategory,
    ) -> Result<(), GridError> {
        self.snap_to_grid(self.spec.with_size_category(category))
    }

    pub(crate) fn set_extra_line_spacing(&mut self, units: u32) -> Result<(), GridError> {
        self.snap_to_grid(self.spec.with_extra_line_spacing(units))
    }

    /// Host hook for a system-wide content size change.
    pub(crate) fn content_size_category_did_change(
        &mut self,
        category: ContentSizeCategory,
    ) -> Result<(), GridError> {
        tracing::info!(category = category.name(), "content size category changed");
        self.set_size_category(category)
    }

    /// Advances to the next text style and relabels.
    pub(crate) fn cycle_text_style(&mut self) -> Result<(), GridError> {
        self.set_text_style(self.spec.text_style.next())?;
        self.update_label_text();
        Ok(())
    }

    /// Advances to the next size category and relabels.
    pub(crate) fn cycle_size_category(&mut self) -> Result<(), GridError> {
        self.set_size_category(self.spec.size_category.next())?;
        self.update_label_text();
        Ok(())
    }

    pub(crate) fn update_label_text(&mut self) {
        self.text = format!(
            "{}\n{}",
            self.spec.text_style.name(),
            self.spec.size_category.name()
        );
    }

    /// The label's frame when its top-left corner is at `origin`.
    pub(crate) fn frame(&self, origin: Point, width: f64) -> Rect {
        let height = self.layout.container_height(self.line_count());
        Rect::from_origin_size(origin, (width, height))
    }

    /// Baseline y positions relative to the frame top, one per line.
    pub(crate) fn baselines(&self) -> impl Iterator<Item = f64> + '_ {
        self.layout.baselines(self.line_count()).into_iter()
    }

    /// Recomputes the layout for `spec`; on failure the previous state is kept.
    fn snap_to_grid(&mut self, spec: BaselineGridSpec) -> Result<(), GridError> {
        let (metrics, layout) = spec.resolve_with_metrics(self.provider, self.line_count())?;
        self.metrics = metrics;
        self.spec = spec;
        self.layout = layout;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use baseline_grid::DynamicTypeMetrics;

    use super::*;

    fn label(provider: &DynamicTypeMetrics) -> GridLabel<'_> {
        GridLabel::new(provider, BaselineGridSpec::new(8.0)).unwrap()
    }

    #[test]
    fn size_change_resnaps() {
        let provider = DynamicTypeMetrics::new();
        let mut label = label(&provider);
        let before = *label.layout();
        label
            .content_size_category_did_change(ContentSizeCategory::AccessibilityLarge)
            .unwrap();
        assert_eq!(label.spec().size_category, ContentSizeCategory::AccessibilityLarge);
        assert!(label.layout().baseline_distance > before.baseline_distance);
        assert_eq!(label.layout().baseline_distance % 8.0, 0.0);
    }

    #[test]
    fn invalid_grid_unit_keeps_previous_layout() {
        let provider = DynamicTypeMetrics::new();
        let mut label = label(&provider);
        let before = *label.layout();
        assert!(label.set_grid_unit(0.0).is_err());
        assert_eq!(label.spec().grid_unit, 8.0);
        assert_eq!(*label.layout(), before);
    }

    #[test]
    fn cycling_relabels() {
        let provider = DynamicTypeMetrics::new();
        let mut label = label(&provider);
        label.cycle_text_style().unwrap();
        assert_eq!(label.spec().text_style, TextStyle::Callout);
        assert_eq!(label.text(), "Callout\nLarge");
        assert_eq!(label.line_count(), 2);

        label.cycle_size_category().unwrap();
        assert_eq!(label.text(), "Callout\nExtraLarge");
    }

    #[test]
    fn frame_height_follows_line_count() {
        let provider = DynamicTypeMetrics::new();
        let mut label = label(&provider);
        label.set_text("one\ntwo\nthree");
        let layout = *label.layout();
        let frame = label.frame(Point::ORIGIN, 200.0);
        assert_eq!(
            frame.height(),
            layout.top_offset + 2.0 * layout.baseline_distance + layout.bottom_offset
        );
        let baselines: Vec<f64> = label.baselines().collect();
        assert_eq!(baselines.len(), 3);
        assert_eq!(baselines[0], layout.top_offset);
    }

    struct Counting {
        inner: DynamicTypeMetrics,
        calls: Cell<u32>,
    }

    impl FontMetricsProvider for Counting {
        fn metrics(&self, style: TextStyle, category: ContentSizeCategory) -> FontMetrics {
            self.calls.set(self.calls.get() + 1);
            self.inner.metrics(style, category)
        }
    }

    #[test]
    fn each_snap_fetches_metrics_once() {
        let provider = Counting {
            inner: DynamicTypeMetrics::new(),
            calls: Cell::new(0),
        };
        let mut label = GridLabel::new(&provider, BaselineGridSpec::new(8.0)).unwrap();
        assert_eq!(provider.calls.get(), 1);
        label.set_text_style(TextStyle::Headline).unwrap();
        assert_eq!(provider.calls.get(), 2);
        assert_eq!(
            *label.metrics(),
            provider
                .inner
                .metrics(TextStyle::Headline, ContentSizeCategory::Large)
        );
        assert!(label.set_grid_unit(-1.0).is_err());
        assert_eq!(provider.calls.get(), 2, "rejected configs never reach the provider");
    }

    #[test]
    fn extra_spacing_widens_baseline_distance() {
        let provider = DynamicTypeMetrics::new();
        let mut label = label(&provider);
        let before = label.layout().baseline_distance;
        label.set_extra_line_spacing(1).unwrap();
        assert_eq!(label.layout().baseline_distance, before + 8.0);
    }
}
