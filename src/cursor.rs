// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! # Parse Cursor
//!
//! This module provides the mutable state at the heart of the crate: a [`Cursor`] that
//! tracks which portion of an input string has not been consumed yet, and an immutable
//! [`View`] of that state that parsing rules read.
//!
//! The cursor owns the input string and represents the unconsumed remainder as a
//! `start..end` byte range into it. Consuming input only moves an index, so a failed or
//! rejected match is rolled back by simply not moving it: there is no string
//! reallocation and no way to leave the cursor partially corrupted.
//!
//! ## Features
//!
//! * Consume from the head ([`Direction::Forward`]) or the tail ([`Direction::Reverse`])
//! * Separator policy: Unicode whitespace always separates, and a custom predicate can
//!   widen the separator set
//! * Optional auto-trim that strips separators from both ends after every commit
//!
//! ## Examples
//!
//! ```
//! use strscan::cursor::Cursor;
//!
//! let mut cursor = Cursor::new("  alpha beta");
//! assert_eq!(cursor.remaining(), "alpha beta");
//!
//! // Consume "alpha"; the following space is auto-trimmed.
//! cursor.commit(5);
//! assert_eq!(cursor.remaining(), "beta");
//!
//! // Flip around and consume "beta" from the tail.
//! cursor.set_reverse(true);
//! cursor.commit(4);
//! assert!(cursor.is_empty());
//! ```

use std::fmt;
use std::ops::Range;

/// Which end of the remaining text rules scan and commits consume from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Scan and consume from the head of the remaining text.
    #[default]
    Forward,

    /// Scan and consume from the tail of the remaining text.
    Reverse,
}

/// Predicate deciding whether a character acts as a token separator.
pub type SeparatorFn = dyn Fn(char) -> bool;

/// Mutable parse state: the input string and the byte range of it that is still
/// unconsumed.
///
/// A cursor is constructed once per input and then driven by a
/// [`Scanner`](crate::Scanner) (or directly, via [`Cursor::commit`]). No cursor
/// operation can fail; all grammar validity checks live in rule evaluation.
pub struct Cursor {
    input: String,
    start: usize,
    end: usize,
    direction: Direction,
    custom_separator: Option<Box<SeparatorFn>>,
    auto_trim: bool,
}

impl Cursor {
    /// Create a cursor over `input` with the default configuration: forward direction,
    /// whitespace separators, auto-trim enabled.
    ///
    /// Leading and trailing separators are stripped immediately, so a blank input is
    /// empty from the start.
    pub fn new(input: impl Into<String>) -> Self {
        let input = input.into();
        let end = input.len();
        let mut cursor = Cursor {
            input,
            start: 0,
            end,
            direction: Direction::Forward,
            custom_separator: None,
            auto_trim: true,
        };
        cursor.trim();
        cursor
    }

    /// The text that has not been consumed yet, always in natural reading order.
    pub fn remaining(&self) -> &str {
        &self.input[self.start..self.end]
    }

    /// The full original input, including already-consumed text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Byte range of [`Cursor::remaining`] within the original input.
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The active scan direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// True once the unconsumed range has zero length.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether `c` separates tokens under the current policy.
    ///
    /// Unicode whitespace always separates; a predicate installed with
    /// [`Cursor::set_separator`] widens the set further.
    pub fn is_separator(&self, c: char) -> bool {
        c.is_whitespace() || self.custom_separator.as_deref().is_some_and(|sep| sep(c))
    }

    /// An immutable snapshot of the current state for rule evaluation.
    pub fn view(&self) -> View<'_> {
        View {
            text: self.remaining(),
            direction: self.direction,
            custom_separator: self.custom_separator.as_deref(),
        }
    }

    /// Consume `len` bytes from the scanning edge of the remaining text: the head when
    /// forward, the tail when reverse. Separators are then stripped from both ends if
    /// auto-trim is enabled.
    ///
    /// `len` must lie on a character boundary of the remaining text and not exceed it.
    pub fn commit(&mut self, len: usize) {
        debug_assert!(len <= self.end - self.start);
        debug_assert!(self.remaining().is_char_boundary(len));
        match self.direction {
            Direction::Forward => self.start += len,
            Direction::Reverse => self.end -= len,
        }
        if self.auto_trim {
            self.trim();
        }
    }

    /// Install an additional separator predicate on top of the always-on whitespace
    /// policy. Takes effect on the next operation; already-trimmed text is not
    /// re-scanned.
    pub fn set_separator<F>(&mut self, separator: F) -> &mut Self
    where
        F: Fn(char) -> bool + 'static,
    {
        self.custom_separator = Some(Box::new(separator));
        self
    }

    /// Switch between forward and reverse scanning. Takes effect on the next operation.
    pub fn set_reverse(&mut self, reverse: bool) -> &mut Self {
        self.direction = if reverse { Direction::Reverse } else { Direction::Forward };
        self
    }

    /// Enable or disable separator stripping after successful commits. Takes effect on
    /// the next operation; no immediate re-trim happens here.
    pub fn set_auto_trim(&mut self, auto_trim: bool) -> &mut Self {
        self.auto_trim = auto_trim;
        self
    }

    /// Strip separators from both ends of the remaining range.
    ///
    /// Both ends rather than just the scanning edge, so that flipping direction
    /// mid-session never leaves a stale separator in front of the next rule.
    fn trim(&mut self) {
        let head: usize = self
            .remaining()
            .chars()
            .take_while(|&c| self.is_separator(c))
            .map(char::len_utf8)
            .sum();
        self.start += head;

        let tail: usize = self
            .remaining()
            .chars()
            .rev()
            .take_while(|&c| self.is_separator(c))
            .map(char::len_utf8)
            .sum();
        self.end -= tail;
    }
}

impl fmt::Display for Cursor {
    /// Shows exactly the unconsumed text, which is the documented way to inspect a
    /// cursor mid-parse.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.remaining())
    }
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("remaining", &self.remaining())
            .field("span", &self.span())
            .field("direction", &self.direction)
            .field("auto_trim", &self.auto_trim)
            .finish_non_exhaustive()
    }
}

/// Read-only snapshot of a cursor's state, handed to rules.
///
/// Rules inspect the view and report what they *would* consume; they never mutate
/// anything. A view can also be built standalone, which keeps rules testable without a
/// cursor:
///
/// ```
/// use strscan::cursor::{Direction, View};
///
/// let comma = |c: char| c == ',';
/// let view = View::with_separator("a,b", Direction::Forward, &comma);
/// assert!(view.is_separator(','));
/// assert!(view.is_separator(' '));
/// assert!(!view.is_separator('a'));
/// ```
#[derive(Clone, Copy)]
pub struct View<'a> {
    text: &'a str,
    direction: Direction,
    custom_separator: Option<&'a SeparatorFn>,
}

impl<'a> View<'a> {
    /// A view over `text` with the default whitespace-only separator policy.
    pub fn new(text: &'a str, direction: Direction) -> Self {
        View { text, direction, custom_separator: None }
    }

    /// A view with an additional separator predicate, mirroring
    /// [`Cursor::set_separator`].
    pub fn with_separator(
        text: &'a str,
        direction: Direction,
        separator: &'a SeparatorFn,
    ) -> Self {
        View { text, direction, custom_separator: Some(separator) }
    }

    /// The remaining text in natural reading order. Reverse-direction rules scan it
    /// from the tail.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The scan direction rules must honor.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether `c` separates tokens; same policy as [`Cursor::is_separator`].
    pub fn is_separator(&self, c: char) -> bool {
        c.is_whitespace() || self.custom_separator.is_some_and(|sep| sep(c))
    }
}

impl fmt::Debug for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("text", &self.text)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_trims_blank_edges() {
        let cursor = Cursor::new("  \t hello world \n");
        assert_eq!(cursor.remaining(), "hello world");
        assert!(!cursor.is_empty());
    }

    #[test]
    fn blank_input_is_empty_immediately() {
        let cursor = Cursor::new("   \t\n  ");
        assert!(cursor.is_empty());
        assert_eq!(cursor.remaining(), "");
    }

    #[test]
    fn forward_commit_consumes_head_and_trims() {
        let mut cursor = Cursor::new("one  two");
        cursor.commit(3);
        assert_eq!(cursor.remaining(), "two");
        assert_eq!(cursor.span(), 5..8);
    }

    #[test]
    fn reverse_commit_consumes_tail() {
        let mut cursor = Cursor::new("one two");
        cursor.set_reverse(true);
        cursor.commit(3);
        assert_eq!(cursor.remaining(), "one");
    }

    #[test]
    fn custom_separator_widens_the_policy() {
        let mut cursor = Cursor::new("a,,b c");
        cursor.set_separator(|c| c == ',');
        assert!(cursor.is_separator(','));
        assert!(cursor.is_separator(' '));
        cursor.commit(1);
        assert_eq!(cursor.remaining(), "b c");
    }

    #[test]
    fn auto_trim_off_preserves_separators() {
        let mut cursor = Cursor::new("ab cd");
        cursor.set_auto_trim(false);
        cursor.commit(2);
        assert_eq!(cursor.remaining(), " cd");
    }

    #[test]
    fn display_matches_remaining() {
        let mut cursor = Cursor::new("first rest");
        cursor.commit(5);
        assert_eq!(cursor.to_string(), "rest");
    }

    #[test]
    fn multibyte_trim_and_commit() {
        // U+00A0 is whitespace; the payload is multi-byte too.
        let mut cursor = Cursor::new("\u{a0}héllo wörld\u{a0}");
        assert_eq!(cursor.remaining(), "héllo wörld");
        cursor.commit("héllo".len());
        assert_eq!(cursor.remaining(), "wörld");
    }
}
