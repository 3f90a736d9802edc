// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-document seam.

use alloc::string::String;
use alloc::vec::Vec;

use treeline_band::ElementMetrics;
use treeline_classes::ClassList;

/// Access to the host's live document.
///
/// The reveal controllers are generic over this trait rather than any
/// particular document representation: a retained-mode UI tree, a browser
/// DOM behind bindings, or the in-memory [`SimpleDocument`](crate::SimpleDocument)
/// all work, as long as the host can enumerate attributed elements, measure
/// them against the viewport, and hand out their class lists.
///
/// The document itself is the source of truth. Implementations must answer
/// [`elements_with_attribute`](Self::elements_with_attribute) from the
/// *current* document state on every call; the controllers deliberately
/// never cache the result across calls, so a stale snapshot here would
/// defeat that.
///
/// Elements can disappear between a query and a later access (hosts mutate
/// freely between scroll events), which is why the per-element accessors
/// return `Option`. A `None` is not an error: the element is simply
/// skipped.
pub trait HostDocument {
    /// Stable per-element key.
    type ElementId: Copy + Eq;

    /// Returns every element currently carrying `attribute`, in document
    /// order. Queried fresh on each call.
    fn elements_with_attribute(&self, attribute: &str) -> Vec<Self::ElementId>;

    /// Returns the element's value for `attribute`, if the element exists
    /// and carries it.
    fn attribute(&self, element: Self::ElementId, attribute: &str) -> Option<String>;

    /// Returns the element's viewport-relative measurements.
    ///
    /// `None` means the element is detached or has no measurable bounding
    /// box; such an element never counts as revealed.
    fn metrics(&self, element: Self::ElementId) -> Option<ElementMetrics>;

    /// Returns the viewport's vertical extent, in the same units as the
    /// element metrics.
    fn viewport_extent(&self) -> f64;

    /// Returns the element's class list.
    fn classes(&self, element: Self::ElementId) -> Option<&ClassList>;

    /// Returns the element's class list for mutation.
    fn classes_mut(&mut self, element: Self::ElementId) -> Option<&mut ClassList>;
}
