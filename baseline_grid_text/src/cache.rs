// Copyright 2025 the Baseline Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cell::RefCell;

use hashbrown::HashMap;

use crate::{ContentSizeCategory, FontMetrics, FontMetricsProvider, TextStyle};

/// Memoizes another [`FontMetricsProvider`] per `(style, category)`.
///
/// Shaping-backed providers are comparatively expensive, while hosts recompute
/// layouts on every size-category change. Metrics for a given pair never change
/// for the lifetime of a provider, so caching them is safe.
pub struct MetricsCache<P> {
    inner: P,
    entries: RefCell<HashMap<(TextStyle, ContentSizeCategory), FontMetrics>>,
}

impl<P> core::fmt::Debug for MetricsCache<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MetricsCache")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<P: FontMetricsProvider> MetricsCache<P> {
    /// Wraps `inner` with an empty cache.
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Drops all cached entries.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl<P> MetricsCache<P> {
    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<P: FontMetricsProvider> FontMetricsProvider for MetricsCache<P> {
    fn metrics(&self, style: TextStyle, category: ContentSizeCategory) -> FontMetrics {
        if let Some(m) = self.entries.borrow().get(&(style, category)) {
            return *m;
        }
        let m = self.inner.metrics(style, category);
        self.entries.borrow_mut().insert((style, category), m);
        m
    }
}
