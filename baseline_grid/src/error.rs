// Copyright 2025 the Baseline Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors returned when grid layout inputs are rejected.
///
/// Both variants are caller-input failures: they are raised before any rounding
/// happens, and nothing is ever substituted for the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid unit, pixel scale or line count is outside its valid range.
    #[error("invalid grid configuration: {reason}")]
    InvalidConfiguration {
        /// Which value was rejected.
        reason: &'static str,
    },
    /// Font metrics are not internally consistent.
    #[error("invalid font metrics: {reason}")]
    InvalidMetrics {
        /// Which invariant was violated.
        reason: &'static str,
    },
}

impl GridError {
    pub(crate) const fn config(reason: &'static str) -> Self {
        Self::InvalidConfiguration { reason }
    }

    pub(crate) const fn metrics(reason: &'static str) -> Self {
        Self::InvalidMetrics { reason }
    }
}
