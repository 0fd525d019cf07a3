// Copyright 2025 the Baseline Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapping text baselines to a fixed grid.
//!
//! Designers like to put every text baseline on a multiple of a grid unit. With
//! user-adjustable font sizes the font metrics change at runtime, so the
//! offsets that achieve this have to be computed rather than hard-coded.
//!
//! This crate is the pure arithmetic for that:
//! - [`compute_anchor_offsets`] pins a label's first and last baselines to its
//!   container with grid-multiple offsets;
//! - [`compute_line_spacing`] picks a paragraph line spacing that makes every
//!   baseline-to-baseline distance a grid multiple;
//! - [`compute_layout`] and [`BaselineGridSpec`] combine both for a host.
//!
//! Font metrics come from a [`FontMetricsProvider`]; hosts own change detection
//! and simply resolve again when the user's size category changes.
//!
//! ```
//! use baseline_grid::{FontMetrics, GridConfig, compute_layout};
//!
//! let metrics = FontMetrics::new(19.0, -6.0, 2.0);
//! let layout = compute_layout(&metrics, &GridConfig::new(8.0)).unwrap();
//! assert_eq!(layout.top_offset, 24.0);
//! assert_eq!(layout.bottom_offset, 8.0);
//! assert_eq!(layout.baseline_distance, 32.0);
//! assert_eq!(layout.paragraph_line_spacing, 7.0);
//! ```
//!
//! ## Features
//!
//! - `libm` (default): float math in `no_std` builds.
//! - `std`: use the standard library's float math instead.
//! - `tracing`: emit `tracing` events for computed layouts and rejected inputs.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod calc;
mod config;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod layout;
mod overlay;
pub mod render;
mod round;
mod spec;

pub use baseline_grid_text::{
    ContentSizeCategory, DynamicTypeMetrics, FontMetrics, FontMetricsProvider, MetricsCache,
    TextStyle,
};
pub use calc::{compute_anchor_offsets, compute_layout, compute_line_spacing, validate_metrics};
pub use config::GridConfig;
pub use error::GridError;
pub use layout::{AnchorOffsets, BaselineLayout};
pub use overlay::GridOverlay;
pub use round::{round_up_to_multiple, try_round_up_to_multiple};
pub use spec::BaselineGridSpec;
