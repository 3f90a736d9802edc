// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=treeline_reveal --heading-base-level=0

//! Treeline Reveal: scroll-triggered reveal control over a host-document seam.
//!
//! This crate wires `treeline_band` and `treeline_classes` into the two
//! operations that make declarative scroll animations work:
//!
//! - **Activation** ([`activate`]): runs once at startup. Every element
//!   carrying the marker attribute gets the attribute's value added as a
//!   class, so the page author's CSS can define the animation under that
//!   name. Returns a [`RevealHandle`], or `None` when the configuration is
//!   disabled.
//! - **Scroll re-evaluation** ([`RevealHandle::on_scroll`]): called by the
//!   host on every scroll event. Re-queries the marked elements, tests
//!   each against the viewport [`RevealBand`], and forces the presence of
//!   the reserved [`ENTER_CLASS`] to match.
//!
//! The crate does not own an event loop or a DOM. Hosts implement
//! [`HostDocument`] over whatever they render and call `on_scroll` from
//! their scroll event source; the shipped [`SimpleDocument`] is a concrete
//! in-memory implementation for hosts without a retained document and for
//! tests.
//!
//! ## Minimal example
//!
//! ```rust
//! use treeline_reveal::{
//!     ENTER_CLASS, ElementMetrics, HostDocument, RevealConfig, SimpleDocument, SimpleElement,
//!     activate,
//! };
//!
//! let mut doc = SimpleDocument::new(800.0);
//! let card = doc.insert(
//!     SimpleElement::new()
//!         .with_attribute("data-animate", "fade-up")
//!         .with_metrics(ElementMetrics::new(100.0, 150.0, 50.0)),
//! );
//!
//! let handle = activate(RevealConfig::new().enabled(true), &mut doc).unwrap();
//!
//! // Activation assigns the animation class but never the enter class;
//! // that one belongs to scroll re-evaluation.
//! assert!(doc.classes(card).unwrap().contains("fade-up"));
//! assert!(!doc.classes(card).unwrap().contains(ENTER_CLASS));
//!
//! handle.on_scroll(&mut doc);
//! assert_eq!(doc.classes(card).unwrap().to_string(), "fade-up enter");
//! ```
//!
//! ## Semantics worth knowing
//!
//! - Element lists are never cached: both activation and every `on_scroll`
//!   query the live document afresh, so elements inserted or detached
//!   between calls are picked up or dropped automatically.
//! - `on_scroll` fully recomputes every marked element's state, with no
//!   diffing against previous results and no throttling. The cost is
//!   O(marked elements) per call.
//! - The enabled flag is read exactly once, inside [`activate`]. A
//!   disabled configuration yields no handle, so nothing can ever mutate
//!   the document afterwards.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod document;
mod registry;
mod simple;

pub use config::{DEFAULT_MARKER_ATTRIBUTE, RevealConfig};
pub use controller::{ENTER_CLASS, RevealHandle, activate};
pub use document::HostDocument;
pub use registry::animatable_elements;
pub use simple::{ElementId, SimpleDocument, SimpleElement};

pub use treeline_band::{ElementMetrics, RevealBand};
pub use treeline_classes::ClassList;
