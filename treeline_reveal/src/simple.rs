// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A concrete in-memory host document.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use treeline_band::ElementMetrics;
use treeline_classes::ClassList;

use crate::document::HostDocument;

/// Stable key for an element in a [`SimpleDocument`].
///
/// Ids are never reused, so a key held across a
/// [`detach`](SimpleDocument::detach) simply stops resolving instead of
/// aliasing a newer element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(u32);

/// An element of a [`SimpleDocument`]: attributes, optional viewport
/// metrics, and a class list.
///
/// Built with with-style setters before insertion:
///
/// ```rust
/// use treeline_reveal::{ElementMetrics, SimpleElement};
///
/// let element = SimpleElement::new()
///     .with_attribute("data-animate", "fade-up")
///     .with_metrics(ElementMetrics::new(100.0, 150.0, 50.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimpleElement {
    attributes: HashMap<String, String>,
    metrics: Option<ElementMetrics>,
    classes: ClassList,
}

impl SimpleElement {
    /// Creates an element with no attributes, no metrics, and no classes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let _ = self.attributes.insert(name.into(), value.into());
        self
    }

    /// Sets the element's viewport-relative metrics.
    #[must_use]
    pub fn with_metrics(mut self, metrics: ElementMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Sets the element's initial classes.
    #[must_use]
    pub fn with_classes(mut self, classes: ClassList) -> Self {
        self.classes = classes;
        self
    }
}

/// An in-memory [`HostDocument`].
///
/// `SimpleDocument` keeps elements in insertion order (its document order)
/// with stable ids, a viewport extent, and per-element attribute maps,
/// metrics, and class lists. It exists for hosts without a retained
/// document of their own and as the test double for everything downstream
/// of the [`HostDocument`] seam.
///
/// Mutators that target an element return `false` when the id no longer
/// resolves, mirroring the seam's "absence is not an error" posture.
#[derive(Clone, Debug)]
pub struct SimpleDocument {
    viewport_extent: f64,
    order: Vec<ElementId>,
    elements: HashMap<ElementId, SimpleElement>,
    next_id: u32,
}

impl SimpleDocument {
    /// Creates an empty document with the given viewport extent.
    #[must_use]
    pub fn new(viewport_extent: f64) -> Self {
        Self {
            viewport_extent,
            order: Vec::new(),
            elements: HashMap::new(),
            next_id: 0,
        }
    }

    /// Appends an element in document order, returning its id.
    pub fn insert(&mut self, element: SimpleElement) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.order.push(id);
        let _ = self.elements.insert(id, element);
        id
    }

    /// Detaches an element, returning `true` if it was present.
    ///
    /// A detached element disappears from attribute queries and stops
    /// resolving through every accessor; its id is never reused.
    pub fn detach(&mut self, id: ElementId) -> bool {
        if self.elements.remove(&id).is_none() {
            return false;
        }
        self.order.retain(|existing| *existing != id);
        true
    }

    /// Returns the number of attached elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if no elements are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Sets the viewport extent, as a host would on resize.
    pub fn set_viewport_extent(&mut self, viewport_extent: f64) {
        self.viewport_extent = viewport_extent;
    }

    /// Sets or clears an element's metrics, returning `true` if the id
    /// resolved.
    ///
    /// Hosts call this as elements move relative to the viewport; tests
    /// use it to simulate scrolling.
    pub fn set_metrics(&mut self, id: ElementId, metrics: Option<ElementMetrics>) -> bool {
        match self.elements.get_mut(&id) {
            Some(element) => {
                element.metrics = metrics;
                true
            }
            None => false,
        }
    }

    /// Sets an attribute on an element, returning `true` if the id
    /// resolved.
    pub fn set_attribute(
        &mut self,
        id: ElementId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> bool {
        match self.elements.get_mut(&id) {
            Some(element) => {
                let _ = element.attributes.insert(name.into(), value.into());
                true
            }
            None => false,
        }
    }

    /// Removes an attribute from an element, returning `true` if the id
    /// resolved and the attribute was present.
    pub fn remove_attribute(&mut self, id: ElementId, name: &str) -> bool {
        self.elements
            .get_mut(&id)
            .is_some_and(|element| element.attributes.remove(name).is_some())
    }
}

impl HostDocument for SimpleDocument {
    type ElementId = ElementId;

    fn elements_with_attribute(&self, attribute: &str) -> Vec<ElementId> {
        self.order
            .iter()
            .copied()
            .filter(|id| {
                self.elements
                    .get(id)
                    .is_some_and(|element| element.attributes.contains_key(attribute))
            })
            .collect()
    }

    fn attribute(&self, element: ElementId, attribute: &str) -> Option<String> {
        self.elements.get(&element)?.attributes.get(attribute).cloned()
    }

    fn metrics(&self, element: ElementId) -> Option<ElementMetrics> {
        self.elements.get(&element)?.metrics
    }

    fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    fn classes(&self, element: ElementId) -> Option<&ClassList> {
        self.elements.get(&element).map(|el| &el.classes)
    }

    fn classes_mut(&mut self, element: ElementId) -> Option<&mut ClassList> {
        self.elements.get_mut(&element).map(|el| &mut el.classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_document_order() {
        let mut doc = SimpleDocument::new(800.0);
        let a = doc.insert(SimpleElement::new().with_attribute("data-animate", "x"));
        let b = doc.insert(SimpleElement::new().with_attribute("data-animate", "y"));
        let c = doc.insert(SimpleElement::new().with_attribute("data-animate", "z"));

        assert_eq!(doc.elements_with_attribute("data-animate"), [a, b, c]);
        assert_eq!(doc.len(), 3);
    }

    #[test]
    fn detached_elements_stop_resolving() {
        let mut doc = SimpleDocument::new(800.0);
        let id = doc.insert(SimpleElement::new().with_attribute("data-animate", "x"));

        assert!(doc.detach(id));
        assert!(!doc.detach(id));

        assert!(doc.is_empty());
        assert_eq!(doc.attribute(id, "data-animate"), None);
        assert!(doc.classes(id).is_none());
        assert!(!doc.set_metrics(id, None));
    }

    #[test]
    fn ids_are_not_reused_after_detach() {
        let mut doc = SimpleDocument::new(800.0);
        let first = doc.insert(SimpleElement::new());
        assert!(doc.detach(first));

        let second = doc.insert(SimpleElement::new());
        assert_ne!(first, second);
        assert!(doc.classes(first).is_none());
        assert!(doc.classes(second).is_some());
    }

    #[test]
    fn attribute_mutations_affect_queries() {
        let mut doc = SimpleDocument::new(800.0);
        let id = doc.insert(SimpleElement::new());

        assert!(doc.elements_with_attribute("data-animate").is_empty());

        assert!(doc.set_attribute(id, "data-animate", "fade-up"));
        assert_eq!(doc.elements_with_attribute("data-animate"), [id]);
        assert_eq!(
            doc.attribute(id, "data-animate").as_deref(),
            Some("fade-up")
        );

        assert!(doc.remove_attribute(id, "data-animate"));
        assert!(!doc.remove_attribute(id, "data-animate"));
        assert!(doc.elements_with_attribute("data-animate").is_empty());
    }

    #[test]
    fn viewport_extent_is_mutable() {
        let mut doc = SimpleDocument::new(800.0);
        assert_eq!(doc.viewport_extent(), 800.0);

        doc.set_viewport_extent(480.0);
        assert_eq!(doc.viewport_extent(), 480.0);
    }

    #[test]
    fn initial_classes_carry_through() {
        let mut doc = SimpleDocument::new(800.0);
        let id = doc.insert(SimpleElement::new().with_classes(ClassList::parse("card shadowed")));

        let classes = doc.classes(id).unwrap();
        assert!(classes.contains("card"));
        assert!(classes.contains("shadowed"));
    }
}
