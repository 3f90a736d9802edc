// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The animatable-element registry.

use alloc::vec::Vec;

use crate::document::HostDocument;

/// Returns every element currently opted into reveal animation, in
/// document order.
///
/// The registry is stateless: each call re-queries the live document, so
/// the result reflects insertions and detachments made since the previous
/// call. Callers must not hold the returned list across host mutations and
/// expect it to stay accurate — re-query instead. Both
/// [`activate`](crate::activate) and
/// [`RevealHandle::on_scroll`](crate::RevealHandle::on_scroll) do exactly
/// that.
pub fn animatable_elements<D: HostDocument>(
    doc: &D,
    marker_attribute: &str,
) -> Vec<D::ElementId> {
    doc.elements_with_attribute(marker_attribute)
}
