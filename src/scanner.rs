// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! # Scanner
//!
//! The caller-facing engine: a [`Scanner`] binds one [`Cursor`] to the four
//! consumption protocols, which differ only in whether a match is committed and
//! whether failure is hard or soft.
//!
//! | Protocol | Commits | On no match |
//! |---|---|---|
//! | [`Scanner::parse`] | always | returns [`Error`] |
//! | [`Scanner::check`] / [`Scanner::check_with`] | on acceptance | returns `None` |
//! | [`Scanner::peek`] | never | returns `None` |
//! | [`Scanner::has`] | on acceptance | returns `false` |
//!
//! Every protocol guarantees that on any negative outcome (the rule did not match, or
//! it matched but the acceptance predicate rejected the value) the cursor is left
//! byte-identical to its pre-call state. A match claiming zero bytes counts as no
//! match; committing it would make repeated scanning loop forever. Rules only describe
//! what they would consume; the scanner is the sole place that commits.
//!
//! ## Examples
//!
//! ```
//! use strscan::{rules, Scanner};
//!
//! let mut scanner = Scanner::new("word1 word2\tword3  word4");
//! assert_eq!(scanner.parse(rules::word).unwrap(), "word1");
//!
//! // Speculation: the predicate rejects, so nothing is consumed.
//! assert!(scanner.check_with(rules::word, |w| w == "non-existing").is_none());
//! assert_eq!(scanner.to_string(), "word2\tword3  word4");
//!
//! assert_eq!(scanner.check(rules::word), Some("word2".to_string()));
//! assert_eq!(scanner.check_with(rules::word, |w| w == "word3"), Some("word3".to_string()));
//! assert_eq!(scanner.to_string(), "word4");
//! ```
//!
//! Numbers, mixing the three numeric rules:
//!
//! ```
//! use num_bigint::BigInt;
//! use strscan::{rules, Scanner};
//!
//! let mut scanner = Scanner::new("1 2.0 3.0f");
//! assert_eq!(scanner.parse(rules::integer).unwrap(), BigInt::from(1));
//! assert_eq!(scanner.parse(rules::double_number).unwrap(), 2.0);
//! assert_eq!(scanner.parse(rules::float_number).unwrap(), 3.0);
//! assert!(scanner.is_empty());
//! ```

use std::fmt;

use crate::cursor::Cursor;
use crate::error::Error;
use crate::rule::{Outcome, Rule};

/// A sequential, stateful parse session over one input string.
///
/// One scanner serves one logical parse session on one thread; concurrent parsing of
/// independent inputs takes one scanner each. Construction is the only allocation;
/// consumption moves indices into the original input.
pub struct Scanner {
    cursor: Cursor,
}

impl Scanner {
    /// Start a session over `input` with the defaults: forward direction, whitespace
    /// separators, auto-trim enabled.
    pub fn new(input: impl Into<String>) -> Self {
        Scanner { cursor: Cursor::new(input) }
    }

    /// Apply `rule` and commit, or fail hard.
    ///
    /// This is the protocol for positions where the grammar *must* match: a rule that
    /// does not match is an [`Error::NoMatch`] carrying the rule's description and the
    /// text it saw, and corrupt input (such as an unterminated quoted string) is an
    /// [`Error::Malformed`]. The cursor is untouched on failure.
    pub fn parse<R: Rule>(&mut self, rule: R) -> Result<R::Token, Error> {
        let outcome = rule.apply(&self.cursor.view());
        match outcome {
            Outcome::Match { value, len } if len > 0 => {
                self.cursor.commit(len);
                Ok(value)
            }
            Outcome::Match { .. } | Outcome::NoMatch => {
                Err(Error::no_match(rule.description(), &self.cursor))
            }
            Outcome::Malformed(reason) => Err(Error::malformed(reason, &self.cursor)),
        }
    }

    /// Apply `rule`; commit and return the value on a match, or return `None` with the
    /// cursor untouched.
    pub fn check<R: Rule>(&mut self, rule: R) -> Option<R::Token> {
        self.check_with(rule, |_| true)
    }

    /// Apply `rule`, then gate the commit on an acceptance predicate.
    ///
    /// The core lookahead-with-conditional-acceptance primitive: the commit happens
    /// only when the rule matches *and* `accept` passes the produced value. On either
    /// negative outcome (no match, or matched-but-rejected) the cursor is left
    /// exactly as it was.
    pub fn check_with<R, P>(&mut self, rule: R, mut accept: P) -> Option<R::Token>
    where
        R: Rule,
        P: FnMut(&R::Token) -> bool,
    {
        let outcome = rule.apply(&self.cursor.view());
        match outcome {
            Outcome::Match { value, len } if len > 0 && accept(&value) => {
                self.cursor.commit(len);
                Some(value)
            }
            _ => None,
        }
    }

    /// Evaluate exactly like [`Scanner::check_with`] but never commit, even on
    /// acceptance. Read-only lookahead: it takes `&self`, so the no-mutation
    /// guarantee is enforced by the compiler.
    pub fn peek<R, P>(&self, rule: R, mut accept: P) -> Option<R::Token>
    where
        R: Rule,
        P: FnMut(&R::Token) -> bool,
    {
        let outcome = rule.apply(&self.cursor.view());
        match outcome {
            Outcome::Match { value, len } if len > 0 && accept(&value) => Some(value),
            _ => None,
        }
    }

    /// `check_with(rule, accept).is_some()`.
    ///
    /// **This consumes input on success.** Despite the name suggesting a pure test,
    /// `has` advances the cursor exactly like [`Scanner::check_with`] whenever it
    /// returns `true`: "has, and consumed". Callers rely on that side effect; it is a
    /// deliberate contract, not an accident. Use [`Scanner::peek`] for a
    /// non-consuming test.
    pub fn has<R, P>(&mut self, rule: R, accept: P) -> bool
    where
        R: Rule,
        P: FnMut(&R::Token) -> bool,
    {
        self.check_with(rule, accept).is_some()
    }

    /// True once all input has been consumed.
    pub fn is_empty(&self) -> bool {
        self.cursor.is_empty()
    }

    /// The unconsumed text, in natural reading order.
    pub fn remaining(&self) -> &str {
        self.cursor.remaining()
    }

    /// Install an additional separator predicate on top of the always-on whitespace
    /// policy; see [`Cursor::set_separator`]. Affects all subsequent rule
    /// evaluations.
    pub fn set_separator<F>(&mut self, separator: F) -> &mut Self
    where
        F: Fn(char) -> bool + 'static,
    {
        self.cursor.set_separator(separator);
        self
    }

    /// Switch between forward and reverse scanning for all subsequent operations.
    pub fn set_reverse(&mut self, reverse: bool) -> &mut Self {
        self.cursor.set_reverse(reverse);
        self
    }

    /// Enable or disable separator stripping after successful commits.
    pub fn set_auto_trim(&mut self, auto_trim: bool) -> &mut Self {
        self.cursor.set_auto_trim(auto_trim);
        self
    }
}

impl fmt::Display for Scanner {
    /// Shows the unconsumed input, mirroring the cursor.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cursor.remaining())
    }
}

impl fmt::Debug for Scanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner").field("cursor", &self.cursor).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;
    use num_bigint::BigInt;

    #[test]
    fn parse_commits_and_propagates_failure() {
        let mut scanner = Scanner::new("abc 42");
        assert_eq!(scanner.parse(rules::word).unwrap(), "abc");
        assert_eq!(scanner.remaining(), "42");
        assert_eq!(scanner.parse(rules::word).unwrap(), "42");
        assert!(scanner.is_empty());

        let err = scanner.parse(rules::word).unwrap_err();
        assert!(matches!(err, Error::NoMatch { .. }));
    }

    #[test]
    fn parse_failure_leaves_the_cursor_alone() {
        let mut scanner = Scanner::new("abc");
        assert!(scanner.parse(rules::integer).is_err());
        assert_eq!(scanner.remaining(), "abc");
        assert_eq!(scanner.parse(rules::word).unwrap(), "abc");
    }

    #[test]
    fn check_commits_only_on_match() {
        let mut scanner = Scanner::new("12 ab");
        assert_eq!(scanner.check(rules::integer), Some(BigInt::from(12)));
        assert_eq!(scanner.check(rules::integer), None);
        assert_eq!(scanner.remaining(), "ab");
    }

    #[test]
    fn check_with_rolls_back_on_rejection() {
        let mut scanner = Scanner::new("first second");
        assert_eq!(scanner.check_with(rules::word, |w| w == "second"), None);
        assert_eq!(scanner.remaining(), "first second");
        assert_eq!(
            scanner.check_with(rules::word, |w| w == "first"),
            Some("first".to_string())
        );
        assert_eq!(scanner.remaining(), "second");
    }

    #[test]
    fn peek_never_commits_and_is_idempotent() {
        let scanner = Scanner::new("token rest");
        let first = scanner.peek(rules::word, |_| true);
        let second = scanner.peek(rules::word, |_| true);
        assert_eq!(first, Some("token".to_string()));
        assert_eq!(first, second);
        assert_eq!(scanner.remaining(), "token rest");
    }

    #[test]
    fn has_commits_iff_true() {
        let mut scanner = Scanner::new("alpha beta");
        assert!(!scanner.has(rules::word, |w| w == "beta"));
        assert_eq!(scanner.remaining(), "alpha beta");
        assert!(scanner.has(rules::word, |w| w == "alpha"));
        assert_eq!(scanner.remaining(), "beta");
    }

    #[test]
    fn empty_input_behavior() {
        let mut scanner = Scanner::new("   ");
        assert!(scanner.is_empty());
        assert_eq!(scanner.check(rules::word), None);
        assert_eq!(scanner.peek(rules::word, |_| true), None);
        assert!(!scanner.has(rules::word, |_| true));
        assert!(scanner.parse(rules::word).is_err());
    }

    #[test]
    fn malformed_input_is_soft_under_check() {
        let mut scanner = Scanner::new("\"unclosed");
        assert_eq!(scanner.check(rules::double_quoted_string), None);
        assert_eq!(scanner.remaining(), "\"unclosed");

        let err = scanner.parse(rules::double_quoted_string).unwrap_err();
        assert!(matches!(err, Error::Malformed { .. }));
        assert_eq!(scanner.remaining(), "\"unclosed");
    }

    #[test]
    fn zero_length_matches_are_rejected() {
        use crate::cursor::View;
        use crate::rule::Outcome;

        // A rule claiming success over zero bytes would let `check` loops spin
        // forever; every protocol must treat it as no match.
        let empty = |_: &View<'_>| Outcome::Match { value: (), len: 0 };

        let mut scanner = Scanner::new("text");
        let err = scanner.parse(empty).unwrap_err();
        assert!(matches!(err, Error::NoMatch { .. }));
        assert_eq!(scanner.check(empty), None);
        assert_eq!(scanner.peek(empty, |_| true), None);
        assert!(!scanner.has(empty, |_| true));
        assert_eq!(scanner.remaining(), "text");
    }

    #[test]
    fn closure_rules_compose_with_the_protocols() {
        use crate::cursor::View;
        use crate::rule::Outcome;

        let dashes = |view: &View<'_>| -> Outcome<usize> {
            let n = view.text().bytes().take_while(|&b| b == b'-').count();
            if n == 0 {
                Outcome::NoMatch
            } else {
                Outcome::Match { value: n, len: n }
            }
        };

        let mut scanner = Scanner::new("--- rest");
        assert_eq!(scanner.parse(dashes).unwrap(), 3);
        assert_eq!(scanner.remaining(), "rest");
    }

    #[test]
    fn reverse_consumes_tail_tokens() {
        let mut scanner = Scanner::new("one two three");
        scanner.set_reverse(true);
        assert_eq!(scanner.parse(rules::word).unwrap(), "three");
        assert_eq!(scanner.parse(rules::word).unwrap(), "two");
        assert_eq!(scanner.remaining(), "one");
    }

    #[test]
    fn reverse_on_single_token_matches_forward() {
        let mut forward = Scanner::new("only");
        let mut reverse = Scanner::new("only");
        reverse.set_reverse(true);
        assert_eq!(
            forward.parse(rules::word).unwrap(),
            reverse.parse(rules::word).unwrap()
        );
        assert!(forward.is_empty() && reverse.is_empty());
    }

    #[test]
    fn display_tracks_consumption() {
        let mut scanner = Scanner::new("a b c");
        scanner.parse(rules::word).unwrap();
        assert_eq!(scanner.to_string(), "b c");
    }
}
