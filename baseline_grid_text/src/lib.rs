// Copyright 2025 the Baseline Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font metrics inputs for baseline grid layout.
//!
//! Baseline snapping only needs a font's vertical metrics: ascender, descender,
//! line height and leading. This crate owns that data model together with the
//! identifiers used to look metrics up (a named [`TextStyle`] and a user
//! [`ContentSizeCategory`]), and the [`FontMetricsProvider`] trait that shaping
//! backends implement.
//!
//! This crate is intentionally:
//! - small and dependency-light,
//! - `no_std`-friendly (it uses `hashbrown` for the metrics cache), and
//! - renderer-agnostic (a heuristic table and a shaping engine can both
//!   implement the same trait).

#![no_std]

mod cache;
mod dynamic_type;
mod style;

pub use cache::MetricsCache;
pub use dynamic_type::DynamicTypeMetrics;
pub use style::{ContentSizeCategory, TextStyle};

/// A source of font metrics for a named text style at a given size category.
///
/// Implementations can be:
/// - heuristic (a point-size table with fixed em ratios), or
/// - backed by a shaping engine (e.g. Parley).
///
/// Callers assume the returned value is fully populated; the layout core
/// rejects inconsistent metrics instead of repairing them.
pub trait FontMetricsProvider {
    /// Returns the vertical metrics for `style` rendered at `category`.
    fn metrics(&self, style: TextStyle, category: ContentSizeCategory) -> FontMetrics;
}

impl<P: FontMetricsProvider + ?Sized> FontMetricsProvider for &P {
    fn metrics(&self, style: TextStyle, category: ContentSizeCategory) -> FontMetrics {
        (**self).metrics(style, category)
    }
}

/// Vertical metrics of a font, in layout units (typically points).
///
/// The descender is stored as a **negative** offset below the baseline, and
/// `line_height == ascender - descender`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    /// Distance from the baseline to the top of the tallest glyphs (positive).
    pub ascender: f64,
    /// Offset from the baseline to the bottom of the lowest glyphs (negative).
    pub descender: f64,
    /// `ascender - descender`.
    pub line_height: f64,
    /// Extra distance between consecutive lines baked into the font.
    ///
    /// May be negative, in which case consecutive lines overlap slightly.
    pub leading: f64,
}

impl FontMetrics {
    /// Creates metrics from ascender, descender and leading, deriving `line_height`.
    #[must_use]
    pub fn new(ascender: f64, descender: f64, leading: f64) -> Self {
        Self {
            ascender,
            descender,
            line_height: ascender - descender,
            leading,
        }
    }

    /// Creates metrics from all four values as reported by an external source.
    ///
    /// No consistency check happens here; `line_height` may disagree with
    /// `ascender - descender`.
    #[must_use]
    pub fn from_parts(ascender: f64, descender: f64, line_height: f64, leading: f64) -> Self {
        Self {
            ascender,
            descender,
            line_height,
            leading,
        }
    }

    /// Natural distance between two consecutive baselines: `line_height + leading`.
    #[must_use]
    pub fn default_baseline_distance(&self) -> f64 {
        self.line_height + self.leading
    }
}
