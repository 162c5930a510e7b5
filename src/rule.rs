// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! # The Rule Contract
//!
//! A rule is a pure grammar fragment: it reads a [`View`] of the cursor's remaining
//! text and reports what it *would* consume and which value it would produce. Rules
//! never mutate shared state — committing the consumption is the
//! [`Scanner`](crate::Scanner)'s job, which is what makes speculative parsing
//! (`check`/`peek`/`has`) trivially safe to roll back.
//!
//! Any `Fn(&View) -> Outcome<T>` is a rule, so the built-in rules in
//! [`rules`](crate::rules) are plain free functions and callers can drop in closures:
//!
//! ```
//! use strscan::cursor::{Direction, View};
//! use strscan::rule::{Outcome, Rule};
//!
//! // A rule matching a single leading colon.
//! let colon = |view: &View<'_>| -> Outcome<char> {
//!     match view.text().strip_prefix(':') {
//!         Some(_) => Outcome::Match { value: ':', len: 1 },
//!         None => Outcome::NoMatch,
//!     }
//! };
//!
//! let view = View::new(":rest", Direction::Forward);
//! assert_eq!(colon.apply(&view), Outcome::Match { value: ':', len: 1 });
//! ```

use crate::cursor::View;

/// The result of applying a rule to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The rule matched, producing `value` from `len` bytes at the scanning edge of
    /// the view (its head when forward, its tail when reverse).
    Match {
        /// The parsed value.
        value: T,
        /// How many bytes a commit would consume. Every scanner protocol treats a
        /// zero-length match as [`Outcome::NoMatch`], so `len == 0` never commits.
        len: usize,
    },

    /// The grammar does not match at the scanning edge. Nothing would be consumed.
    NoMatch,

    /// The input begins like this rule's grammar but is corrupt beyond a partial
    /// match, e.g. a double-quoted string with no closing quote. Nothing would be
    /// consumed; [`Scanner::parse`](crate::Scanner::parse) turns this into a hard
    /// error.
    Malformed(&'static str),
}

impl<T> Outcome<T> {
    /// Map the matched value, leaving `NoMatch` and `Malformed` untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Match { value, len } => Outcome::Match { value: f(value), len },
            Outcome::NoMatch => Outcome::NoMatch,
            Outcome::Malformed(reason) => Outcome::Malformed(reason),
        }
    }

    /// True for [`Outcome::Match`].
    pub fn is_match(&self) -> bool {
        matches!(self, Outcome::Match { .. })
    }
}

/// A composable, stateless parsing rule.
///
/// Implemented for free by every `Fn(&View) -> Outcome<T>`; implement it by hand only
/// when a rule needs configuration state of its own.
pub trait Rule {
    /// The value a successful match produces.
    type Token;

    /// Evaluate the rule against an immutable snapshot of the cursor.
    fn apply(&self, view: &View<'_>) -> Outcome<Self::Token>;

    /// Short description used in failure diagnostics.
    ///
    /// The default strips the module path from the rule's type name, which for the
    /// built-in free functions yields `"word"`, `"integer"`, and so on.
    fn description(&self) -> String {
        let name = std::any::type_name::<Self>();
        name.rsplit("::").next().unwrap_or(name).to_string()
    }
}

impl<T, F> Rule for F
where
    F: Fn(&View<'_>) -> Outcome<T>,
{
    type Token = T;

    fn apply(&self, view: &View<'_>) -> Outcome<T> {
        self(view)
    }
}
