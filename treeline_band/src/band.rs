// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reveal-band membership predicate.

use crate::metrics::ElementMetrics;

/// Membership test over an extended viewport band.
///
/// `RevealBand` answers a single question: given an element's
/// viewport-relative measurements, should its reveal animation currently
/// be active? The band is the viewport extended upward by one
/// element-extent of slack, with a strict cutoff at the fold:
///
/// - the element has started entering when its top *or* bottom edge lies
///   no further above the viewport origin than its own rendered extent;
/// - it stops counting once `top + display_extent` reaches the viewport
///   extent, i.e. once it sits fully below the fold.
///
/// The asymmetry is intentional and mirrors how reveal animations read on
/// a page scrolled downward: elements light up as they rise past the fold
/// and switch off again once scrolled back below it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RevealBand {
    viewport_extent: f64,
}

impl RevealBand {
    /// Creates a band for a viewport of the given vertical extent.
    ///
    /// The extent is expressed in the same viewport-space units as the
    /// [`ElementMetrics`] that will be tested against the band, typically
    /// logical pixels.
    #[must_use]
    pub const fn new(viewport_extent: f64) -> Self {
        Self { viewport_extent }
    }

    /// Returns the viewport extent this band was built for.
    #[must_use]
    pub const fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    /// Returns `true` if the element is currently inside the band.
    #[must_use]
    pub fn contains(&self, metrics: &ElementMetrics) -> bool {
        within_band(
            metrics.top,
            metrics.bottom,
            metrics.display_extent,
            self.viewport_extent,
        )
    }
}

/// Reveal-band membership over raw measurements.
///
/// An element is inside the band iff:
///
/// ```text
/// (top > -display_extent || bottom > -display_extent)
///     && top + display_extent < viewport_extent
/// ```
///
/// The first clause grants one `display_extent` of slack above the
/// viewport origin; both edges are tested because the rendered extent can
/// differ from the bounding-box extent. The second clause is strict: an
/// element whose `top + display_extent` equals the viewport extent is
/// already outside.
///
/// Non-finite inputs never satisfy the band.
#[must_use]
pub fn within_band(top: f64, bottom: f64, display_extent: f64, viewport_extent: f64) -> bool {
    (top > -display_extent || bottom > -display_extent)
        && top + display_extent < viewport_extent
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    #[test]
    fn element_inside_viewport_is_in_band() {
        // 50px element, top edge 100px below the viewport origin, 800px viewport.
        let band = RevealBand::new(800.0);
        assert!(band.contains(&ElementMetrics::new(100.0, 150.0, 50.0)));
    }

    #[test]
    fn element_below_fold_is_out_of_band() {
        let band = RevealBand::new(800.0);
        assert!(!band.contains(&ElementMetrics::new(900.0, 950.0, 50.0)));
    }

    #[test]
    fn upper_slack_is_one_display_extent() {
        let band = RevealBand::new(800.0);

        // Top edge 49px above the origin: still within the 50px slack.
        assert!(band.contains(&ElementMetrics::new(-49.0, 1.0, 50.0)));

        // Both edges exactly one extent above the origin: the bound is
        // strict, so the element has left the band.
        assert!(!band.contains(&ElementMetrics::new(-50.0, -50.0, 50.0)));

        // Just past the slack on both edges.
        assert!(!band.contains(&ElementMetrics::new(-120.0, -70.0, 50.0)));
    }

    #[test]
    fn bottom_edge_alone_can_keep_the_element_in_band() {
        // Rendered extent smaller than the bounding box: the top edge has
        // scrolled past the slack but the bottom edge has not.
        let band = RevealBand::new(800.0);
        assert!(band.contains(&ElementMetrics::new(-30.0, 170.0, 20.0)));
    }

    #[test]
    fn lower_bound_is_strict_at_the_fold() {
        let band = RevealBand::new(800.0);

        assert!(band.contains(&ElementMetrics::new(749.0, 799.0, 50.0)));
        // top + display_extent == viewport_extent: outside.
        assert!(!band.contains(&ElementMetrics::new(750.0, 800.0, 50.0)));
        assert!(!band.contains(&ElementMetrics::new(751.0, 801.0, 50.0)));
    }

    #[test]
    fn zero_extent_element_follows_the_same_bounds() {
        let band = RevealBand::new(800.0);

        assert!(band.contains(&ElementMetrics::new(100.0, 100.0, 0.0)));
        // With no extent there is no slack: a zero-extent element at the
        // origin sits on the strict upper bound.
        assert!(!band.contains(&ElementMetrics::new(0.0, 0.0, 0.0)));
        assert!(!band.contains(&ElementMetrics::new(800.0, 800.0, 0.0)));
    }

    #[test]
    fn non_finite_metrics_are_never_in_band() {
        let band = RevealBand::new(800.0);

        assert!(!band.contains(&ElementMetrics::new(f64::NAN, f64::NAN, 50.0)));
        assert!(!band.contains(&ElementMetrics::new(f64::INFINITY, f64::INFINITY, 50.0)));
        assert!(!band.contains(&ElementMetrics::new(100.0, 150.0, f64::NAN)));
    }

    #[test]
    fn band_accepts_rect_built_metrics() {
        let band = RevealBand::new(800.0);
        let metrics = ElementMetrics::from_rect(Rect::new(0.0, 100.0, 300.0, 150.0));
        assert!(band.contains(&metrics));
    }

    #[test]
    fn free_function_matches_band_method() {
        let band = RevealBand::new(640.0);
        for top in [-80.0, -20.0, 0.0, 100.0, 600.0, 700.0] {
            let metrics = ElementMetrics::new(top, top + 40.0, 40.0);
            assert_eq!(
                band.contains(&metrics),
                within_band(top, top + 40.0, 40.0, 640.0),
                "method and free function disagree at top={top}"
            );
        }
    }
}
