// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=treeline_classes --heading-base-level=0

//! Treeline Classes: class-list mutation primitives.
//!
//! [`ClassList`] is an owned, insertion-ordered, duplicate-free list of
//! class tokens, modeled on how hosts expose element class attributes.
//! All mutators are idempotent: adding a token that is already present or
//! removing one that is absent is a no-op, never an error. Mutators report
//! whether the list actually changed, which lets callers skip downstream
//! invalidation for no-op calls.
//!
//! Insertion order is preserved because the rendered class string is
//! host-visible output: a list built by adding `"fade-up"` then `"enter"`
//! displays as `"fade-up enter"`, not a sorted permutation.
//!
//! ## Minimal example
//!
//! ```rust
//! use treeline_classes::ClassList;
//!
//! let mut classes = ClassList::parse("card fade-up");
//!
//! assert!(classes.add("enter"));
//! assert!(!classes.add("enter")); // already present: no-op
//! assert_eq!(classes.to_string(), "card fade-up enter");
//!
//! assert!(classes.remove("enter"));
//! assert!(!classes.remove("enter")); // already absent: no-op
//! assert_eq!(classes.to_string(), "card fade-up");
//! ```
//!
//! Token content is not validated beyond two contracts: the empty token is
//! a no-op on every operation, and tokens must not contain whitespace
//! (enforced with a debug assertion — whitespace inside a token would
//! corrupt the rendered class string). Whether a token is a *valid* CSS
//! identifier is the page author's concern; values flow through verbatim.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::iter::FromIterator;

/// An owned, insertion-ordered, duplicate-free list of class tokens.
///
/// See the [crate docs](crate) for semantics. Token lookup is a linear
/// scan; class lists are small in practice and insertion order must be
/// preserved, so this representation beats a sorted or hashed set here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Creates an empty class list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Parses a whitespace-separated class string, deduplicating tokens
    /// while preserving first-occurrence order.
    ///
    /// ```rust
    /// use treeline_classes::ClassList;
    ///
    /// let classes = ClassList::parse("  a b a  c ");
    /// assert_eq!(classes.as_slice(), ["a", "b", "c"]);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut classes = Self::new();
        for token in input.split_whitespace() {
            let _ = classes.add(token);
        }
        classes
    }

    /// Adds a token, returning `true` if the list changed.
    ///
    /// Adding a token that is already present is a no-op. The empty token
    /// is always a no-op; marker values degrade to it when an element's
    /// attribute is present but blank.
    ///
    /// # Panics (debug only)
    ///
    /// Panics in debug builds if the token contains whitespace.
    pub fn add(&mut self, token: &str) -> bool {
        debug_assert!(
            !token.contains(char::is_whitespace),
            "class tokens must not contain whitespace"
        );
        if token.is_empty() || self.contains(token) {
            return false;
        }
        self.0.push(String::from(token));
        true
    }

    /// Removes a token, returning `true` if the list changed.
    ///
    /// Removing a token that is absent is a no-op.
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != token);
        self.0.len() != before
    }

    /// Forces a token's presence to `present`, returning `true` if the
    /// list changed.
    ///
    /// Equivalent to [`add`](Self::add) when `present` is `true` and
    /// [`remove`](Self::remove) otherwise.
    pub fn set(&mut self, token: &str, present: bool) -> bool {
        if present {
            self.add(token)
        } else {
            self.remove(token)
        }
    }

    /// Returns `true` if the list contains the token.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|existing| existing == token)
    }

    /// Returns the number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the tokens as a slice, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterates over the tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Removes all tokens.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Display for ClassList {
    /// Renders the list as a space-separated class string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut classes = Self::new();
        for token in iter {
            let _ = classes.add(token);
        }
        classes
    }
}

impl FromIterator<String> for ClassList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut classes = Self::new();
        for token in iter {
            let _ = classes.add(&token);
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn new_list_is_empty() {
        let classes = ClassList::new();
        assert!(classes.is_empty());
        assert_eq!(classes.len(), 0);
        assert_eq!(classes.to_string(), "");
    }

    #[test]
    fn add_is_idempotent() {
        let mut classes = ClassList::new();

        assert!(classes.add("fade-up"));
        assert!(!classes.add("fade-up"));

        assert_eq!(classes.as_slice(), ["fade-up"]);
        assert_eq!(classes.len(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut classes = ClassList::parse("a b");

        assert!(classes.remove("a"));
        assert!(!classes.remove("a"));
        assert!(!classes.remove("never-present"));

        assert_eq!(classes.as_slice(), ["b"]);
    }

    #[test]
    fn empty_token_is_a_no_op() {
        let mut classes = ClassList::new();

        assert!(!classes.add(""));
        assert!(!classes.remove(""));
        assert!(!classes.set("", true));

        assert!(classes.is_empty());
    }

    #[test]
    fn set_forces_presence() {
        let mut classes = ClassList::parse("base");

        assert!(classes.set("enter", true));
        assert!(classes.contains("enter"));
        assert!(!classes.set("enter", true));

        assert!(classes.set("enter", false));
        assert!(!classes.contains("enter"));
        assert!(!classes.set("enter", false));

        assert_eq!(classes.as_slice(), ["base"]);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut classes = ClassList::new();
        let _ = classes.add("fade-up");
        let _ = classes.add("enter");
        assert_eq!(classes.to_string(), "fade-up enter");

        // Re-adding after removal moves the token to the end, as hosts do.
        let _ = classes.remove("fade-up");
        let _ = classes.add("fade-up");
        assert_eq!(classes.to_string(), "enter fade-up");
    }

    #[test]
    fn parse_dedups_and_keeps_first_occurrence_order() {
        let classes = ClassList::parse(" card  fade-up card\tenter ");
        assert_eq!(classes.as_slice(), ["card", "fade-up", "enter"]);
    }

    #[test]
    fn parse_round_trips_through_display() {
        let classes = ClassList::parse("a b c");
        assert_eq!(ClassList::parse(&classes.to_string()), classes);
    }

    #[test]
    fn from_iterator_dedups() {
        let classes: ClassList = ["a", "b", "a", "c"].into_iter().collect();
        assert_eq!(classes.as_slice(), ["a", "b", "c"]);

        let owned: ClassList = ["x".to_string(), "x".to_string()].into_iter().collect();
        assert_eq!(owned.as_slice(), ["x"]);
    }

    #[test]
    fn clear_empties_the_list() {
        let mut classes = ClassList::parse("a b c");
        classes.clear();
        assert!(classes.is_empty());
        assert!(!classes.contains("a"));
    }

    #[test]
    fn iter_yields_tokens_in_order() {
        let classes = ClassList::parse("one two three");
        let collected: Vec<&str> = classes.iter().collect();
        assert_eq!(collected, ["one", "two", "three"]);
    }
}
