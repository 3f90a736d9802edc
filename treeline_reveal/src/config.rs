// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal configuration.

use alloc::string::String;

/// Default marker attribute name.
pub const DEFAULT_MARKER_ATTRIBUTE: &str = "data-animate";

/// Configuration for [`activate`](crate::activate).
///
/// A config is built once, handed to `activate` by value, and never
/// consulted again: the marker attribute name is captured by the returned
/// handle and the enabled flag is read exactly once. Mutating a config
/// after activation is therefore impossible by construction.
///
/// The default configuration uses [`DEFAULT_MARKER_ATTRIBUTE`] and is
/// disabled; hosts opt in explicitly.
///
/// ```rust
/// use treeline_reveal::RevealConfig;
///
/// let config = RevealConfig::new()
///     .with_marker_attribute("data-reveal")
///     .enabled(true);
///
/// assert_eq!(config.marker_attribute(), "data-reveal");
/// assert!(config.is_enabled());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealConfig {
    marker_attribute: String,
    enabled: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            marker_attribute: String::from(DEFAULT_MARKER_ATTRIBUTE),
            enabled: false,
        }
    }
}

impl RevealConfig {
    /// Creates the default configuration: [`DEFAULT_MARKER_ATTRIBUTE`],
    /// disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the marker attribute name.
    #[must_use]
    pub fn with_marker_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.marker_attribute = attribute.into();
        self
    }

    /// Sets whether activation does anything at all.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Returns the marker attribute name.
    #[must_use]
    pub fn marker_attribute(&self) -> &str {
        &self.marker_attribute
    }

    /// Returns `true` if activation is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn into_marker_attribute(self) -> String {
        self.marker_attribute
    }
}
