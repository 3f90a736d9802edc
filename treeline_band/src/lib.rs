// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=treeline_band --heading-base-level=0

//! Treeline Band: viewport reveal-band visibility primitives.
//!
//! This crate provides the geometric half of scroll-triggered reveal
//! animations: deciding whether an element currently counts as "revealed"
//! given its viewport-relative measurements. The core concepts are:
//!
//! - [`ElementMetrics`]: the vertical measurements of one element relative
//!   to the viewport origin (top edge, bottom edge, rendered extent).
//! - [`RevealBand`]: a membership test over an *extended* viewport band.
//!   An element is inside the band once it has started entering from below
//!   the fold, with one element-extent of slack above the viewport origin,
//!   and while it has not yet crossed fully below the fold.
//!
//! The slack is deliberate: reveal transitions take time to play, so the
//! band triggers slightly before and after an exact bounding-box
//! intersection would. Simplifying the test to strict intersection changes
//! animation timing and is explicitly not what this crate computes.
//!
//! ## Minimal example
//!
//! ```rust
//! use treeline_band::{ElementMetrics, RevealBand};
//!
//! let band = RevealBand::new(800.0);
//!
//! // An element 50px tall whose top edge is 100px below the viewport origin.
//! let metrics = ElementMetrics::new(100.0, 150.0, 50.0);
//! assert!(band.contains(&metrics));
//!
//! // The same element scrolled below the fold is outside the band.
//! let below = ElementMetrics::new(900.0, 950.0, 50.0);
//! assert!(!band.contains(&below));
//! ```
//!
//! This crate does not know about documents, elements, or event sources;
//! hosts measure their own elements (for example from a layout pass or a
//! bounding-box query) and feed the numbers in. `ElementMetrics` can also
//! be built from a viewport-space [`kurbo::Rect`] via
//! [`ElementMetrics::from_rect`].
//!
//! All coordinates live in viewport space: the origin is the viewport's
//! top edge and the positive direction is downward, in logical pixels.
//! This crate is `no_std`.

#![no_std]

mod band;
mod metrics;

pub use band::{RevealBand, within_band};
pub use metrics::ElementMetrics;
