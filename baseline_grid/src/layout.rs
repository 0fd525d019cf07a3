// Copyright 2025 the Baseline Grid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

/// Offsets anchoring a label's first and last baselines to its container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorOffsets {
    /// Distance from the container top down to the first baseline.
    pub top: f64,
    /// Distance from the last baseline down to the container bottom.
    pub bottom: f64,
}

/// Grid-snapped layout values for one label.
///
/// This is a derived value: hosts compute it, apply it, and throw it away. It is
/// recomputed whenever font metrics or grid configuration change.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BaselineLayout {
    /// Distance from the container top to the first baseline (a grid multiple).
    pub top_offset: f64,
    /// Distance from the last baseline to the container bottom (a grid multiple).
    pub bottom_offset: f64,
    /// The line spacing to request from the paragraph style.
    pub paragraph_line_spacing: f64,
    /// Resulting distance between consecutive baselines (a grid multiple).
    pub baseline_distance: f64,
}

impl BaselineLayout {
    /// The anchor offsets of this layout.
    #[must_use]
    pub fn anchors(&self) -> AnchorOffsets {
        AnchorOffsets {
            top: self.top_offset,
            bottom: self.bottom_offset,
        }
    }

    /// Baseline positions of `line_count` lines, relative to the container top.
    #[must_use]
    pub fn baselines(&self, line_count: u32) -> SmallVec<[f64; 8]> {
        (0..line_count)
            .map(|i| self.top_offset + f64::from(i) * self.baseline_distance)
            .collect()
    }

    /// Height of a container holding `line_count` lines.
    ///
    /// Zero lines collapse to the two anchor offsets.
    #[must_use]
    pub fn container_height(&self, line_count: u32) -> f64 {
        let gaps = f64::from(line_count.saturating_sub(1));
        self.top_offset + gaps * self.baseline_distance + self.bottom_offset
    }
}
