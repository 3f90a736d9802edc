// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Activation and scroll re-evaluation.

use alloc::string::String;

use treeline_band::RevealBand;

use crate::config::RevealConfig;
use crate::document::HostDocument;
use crate::registry::animatable_elements;

/// Reserved class toggled by scroll re-evaluation.
///
/// Page authors key their CSS transitions on this class; Treeline never
/// adds it during activation, only from [`RevealHandle::on_scroll`].
pub const ENTER_CLASS: &str = "enter";

/// Activates reveal animation for every marked element in the document.
///
/// Runs once, synchronously. For each element carrying the configured
/// marker attribute, the attribute's value is added to the element's class
/// list, naming the animation the page author defined for it. An element
/// whose marker value is blank is left untouched (the add degrades to a
/// no-op); the enter class is never assigned here, even for elements
/// already inside the band.
///
/// Returns `None` when the configuration is disabled. In that case the
/// document is not touched at all, and since no handle exists there is
/// nothing for the host to wire to its scroll source — disabling the flag
/// disables the whole system.
pub fn activate<D: HostDocument>(config: RevealConfig, doc: &mut D) -> Option<RevealHandle> {
    if !config.is_enabled() {
        return None;
    }
    let marker_attribute = config.into_marker_attribute();

    for element in animatable_elements(doc, &marker_attribute) {
        let value = doc.attribute(element, &marker_attribute).unwrap_or_default();
        if let Some(classes) = doc.classes_mut(element) {
            let _ = classes.add(&value);
        }
    }

    Some(RevealHandle { marker_attribute })
}

/// Handle to an activated reveal system.
///
/// Produced by [`activate`]; the host calls [`on_scroll`](Self::on_scroll)
/// from its scroll event source. The handle holds no element state — only
/// the marker attribute name — so it never goes stale as the document
/// mutates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealHandle {
    marker_attribute: String,
}

impl RevealHandle {
    /// Returns the marker attribute this handle queries for.
    #[must_use]
    pub fn marker_attribute(&self) -> &str {
        &self.marker_attribute
    }

    /// Re-evaluates reveal state for every marked element.
    ///
    /// Queries the document afresh, tests each element's metrics against
    /// the current viewport band, and forces the presence of
    /// [`ENTER_CLASS`] to the result. Elements without metrics never count
    /// as revealed, so a previously revealed element that became
    /// unmeasurable loses the class.
    ///
    /// The whole pass is recomputed on every call with no diffing or
    /// throttling; cost is O(marked elements). Taking `&mut doc` makes
    /// invocations run to completion serially — there is no overlap to
    /// guard against.
    pub fn on_scroll<D: HostDocument>(&self, doc: &mut D) {
        let band = RevealBand::new(doc.viewport_extent());

        for element in animatable_elements(doc, &self.marker_attribute) {
            let revealed = doc
                .metrics(element)
                .is_some_and(|metrics| band.contains(&metrics));
            if let Some(classes) = doc.classes_mut(element) {
                let _ = classes.set(ENTER_CLASS, revealed);
            }
        }
    }
}
