// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! # Failure Taxonomy
//!
//! [`Scanner::parse`](crate::Scanner::parse) is the one protocol that fails hard; this
//! module defines what it fails with. Each error carries the byte offset and a snippet
//! of the text the rule was attempted against, and can be rendered as an
//! [`ariadne`] diagnostic pointing into the original input.
//!
//! A rule simply not matching under `check`/`peek`/`has` is *not* an error — that is
//! the normal control flow of speculative parsing and is encoded as `None`/`false`.

use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind};

use crate::cursor::{Cursor, Direction};

/// How much of the remaining text an error snippet captures.
const SNIPPET_CHARS: usize = 32;

/// A hard parse failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A rule that was required to match did not. Carries the rule's description and
    /// the text it was attempted against.
    #[error("expected {rule} at offset {offset}, found {snippet:?}")]
    NoMatch {
        /// Description of the attempted rule.
        rule: String,
        /// Byte offset of the attempt within the original input.
        offset: usize,
        /// Up to 32 characters of remaining text at the scanning edge.
        snippet: String,
    },

    /// The input begins like a rule's grammar but is corrupt beyond a partial match,
    /// e.g. a double-quoted string that never closes.
    #[error("{reason} at offset {offset}, found {snippet:?}")]
    Malformed {
        /// What exactly is wrong with the input.
        reason: &'static str,
        /// Byte offset of the attempt within the original input.
        offset: usize,
        /// Up to 32 characters of remaining text at the scanning edge.
        snippet: String,
    },
}

impl Error {
    pub(crate) fn no_match(rule: String, cursor: &Cursor) -> Self {
        let (offset, snippet) = failure_context(cursor);
        Error::NoMatch { rule, offset, snippet }
    }

    pub(crate) fn malformed(reason: &'static str, cursor: &Cursor) -> Self {
        let (offset, snippet) = failure_context(cursor);
        Error::Malformed { reason, offset, snippet }
    }

    /// Byte offset of the failed attempt within the original input.
    pub fn offset(&self) -> usize {
        match self {
            Error::NoMatch { offset, .. } | Error::Malformed { offset, .. } => *offset,
        }
    }

    /// The text at the scanning edge when the failure occurred.
    pub fn snippet(&self) -> &str {
        match self {
            Error::NoMatch { snippet, .. } | Error::Malformed { snippet, .. } => snippet,
        }
    }

    /// Byte range the diagnostic label covers within the original input.
    pub fn span(&self) -> Range<usize> {
        self.offset()..self.offset() + self.snippet().len()
    }

    /// Render this failure as an [`ariadne`] report against the original input.
    ///
    /// ```
    /// use ariadne::Source;
    /// use strscan::{rules, Scanner};
    ///
    /// let input = "one two";
    /// let mut scanner = Scanner::new(input);
    /// scanner.parse(rules::word).unwrap();
    ///
    /// let err = scanner.parse(rules::integer).unwrap_err();
    /// let mut rendered = Vec::new();
    /// err.report("input")
    ///     .write(("input", Source::from(input)), &mut rendered)
    ///     .unwrap();
    /// assert!(!rendered.is_empty());
    /// ```
    pub fn report<'a>(&self, source_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        let label = match self {
            Error::NoMatch { rule, .. } => format!("no {rule} matches here"),
            Error::Malformed { reason, .. } => (*reason).to_string(),
        };
        Report::build(ReportKind::Error, (source_id, self.span()))
            .with_config(Config::default().with_color(false))
            .with_message(self.to_string())
            .with_label(
                Label::new((source_id, self.span()))
                    .with_message(label)
                    .with_color(Color::Red),
            )
            .finish()
    }
}

/// Where a failed attempt happened and what it saw: the head of the remainder when
/// scanning forward, the tail when scanning in reverse.
fn failure_context(cursor: &Cursor) -> (usize, String) {
    let remaining = cursor.remaining();
    match cursor.direction() {
        Direction::Forward => {
            let snippet: String = remaining.chars().take(SNIPPET_CHARS).collect();
            (cursor.span().start, snippet)
        }
        Direction::Reverse => {
            let tail_start = remaining
                .char_indices()
                .rev()
                .take(SNIPPET_CHARS)
                .last()
                .map_or(remaining.len(), |(i, _)| i);
            let snippet = remaining[tail_start..].to_string();
            (cursor.span().start + tail_start, snippet)
        }
    }
}
