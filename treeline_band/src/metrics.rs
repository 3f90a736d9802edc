// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport-relative element measurements.

use kurbo::Rect;

/// Vertical measurements of one element, relative to the viewport origin.
///
/// `top` and `bottom` are the element's bounding-box edges in viewport
/// space (positive downward), as a host would obtain from a bounding-box
/// query against the live document. `display_extent` is the element's
/// rendered height, which hosts may track separately from the bounding box
/// (padding, transforms, and collapsed content can make the two differ).
///
/// Values are expected to be finite; non-finite metrics never fall inside
/// a [`RevealBand`](crate::RevealBand).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ElementMetrics {
    /// Top edge of the bounding box, relative to the viewport origin.
    pub top: f64,
    /// Bottom edge of the bounding box, relative to the viewport origin.
    pub bottom: f64,
    /// Rendered vertical extent of the element.
    pub display_extent: f64,
}

impl ElementMetrics {
    /// Constructs metrics from explicit edge positions and rendered extent.
    #[must_use]
    pub const fn new(top: f64, bottom: f64, display_extent: f64) -> Self {
        Self {
            top,
            bottom,
            display_extent,
        }
    }

    /// Constructs metrics from a viewport-space bounding box.
    ///
    /// The rendered extent is taken to equal the box height. Hosts that
    /// track a distinct rendered extent should use [`ElementMetrics::new`]
    /// instead.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            top: rect.y0,
            bottom: rect.y1,
            display_extent: rect.height(),
        }
    }

    /// Returns `true` if all measurements are finite.
    #[must_use]
    pub fn is_measurable(&self) -> bool {
        self.top.is_finite() && self.bottom.is_finite() && self.display_extent.is_finite()
    }
}
