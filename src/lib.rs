// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! # Strscan
//!
//! A stateful, cursor-based string scanner: compose small parsing *rules* (word,
//! integer, floating point number, quoted string, or your own closures) against a
//! mutable input cursor, with checkpoint/rollback semantics, direction reversal, and a
//! configurable separator policy.
//!
//! The design splits cleanly in two:
//!
//! * **Rules are pure.** A rule reads an immutable [`cursor::View`] of the remaining
//!   text and reports what it *would* consume and which value it produces. Rules never
//!   touch shared state, so they compose freely and test standalone.
//! * **The scanner commits.** A [`Scanner`] owns the cursor and offers four
//!   consumption protocols: [`parse`](Scanner::parse) (must match, hard failure),
//!   [`check`](Scanner::check) / [`check_with`](Scanner::check_with) (speculative,
//!   commit on acceptance), [`peek`](Scanner::peek) (read-only lookahead), and
//!   [`has`](Scanner::has) (boolean, consuming on success). On any negative outcome
//!   the cursor is left byte-identical, which is the central guarantee of the crate.
//!
//! ## Features
//!
//! * **Built-in rule library** - words, arbitrary-precision integers, `f64`/`f32`
//!   literals with suffix discrimination, and double-quoted strings with escaped
//!   quotes.
//! * **Predicate-gated acceptance** - try a rule, test the produced value, and commit
//!   only if both succeed; a two-stage speculative pattern with guaranteed rollback.
//! * **Direction reversal** - consume from the tail of the input without re-allocating
//!   or reversing the string.
//! * **Diagnostics** - hard failures carry offsets and snippets and render as
//!   [`ariadne`] reports against the original input.
//!
//! ## Usage
//!
//! ```rust
//! use num_bigint::BigInt;
//! use strscan::{rules, Scanner};
//!
//! let mut scanner = Scanner::new("set retries 5 \"on failure\"");
//!
//! assert_eq!(scanner.parse(rules::word).unwrap(), "set");
//! assert_eq!(scanner.parse(rules::word).unwrap(), "retries");
//! assert_eq!(scanner.parse(rules::integer).unwrap(), BigInt::from(5));
//! assert_eq!(scanner.parse(rules::double_quoted_string).unwrap(), "on failure");
//! assert!(scanner.is_empty());
//! ```
//!
//! Speculative parsing leaves the cursor untouched on any rejection:
//!
//! ```rust
//! use strscan::{rules, Scanner};
//!
//! let mut scanner = Scanner::new("width 1024");
//! // Wrong keyword? Nothing is consumed, try something else.
//! if scanner.check_with(rules::word, |w| w == "height").is_none() {
//!     assert_eq!(scanner.to_string(), "width 1024");
//! }
//! assert!(scanner.has(rules::word, |w| w == "width"));
//! assert_eq!(scanner.to_string(), "1024");
//! ```
//!
//! Reverse scanning consumes trailing tokens first, still returning them in natural
//! reading order:
//!
//! ```rust
//! use num_bigint::BigInt;
//! use strscan::{rules, Scanner};
//!
//! let mut scanner = Scanner::new("path/to/file.txt 1337");
//! scanner.set_reverse(true);
//! assert_eq!(scanner.parse(rules::integer).unwrap(), BigInt::from(1337));
//! assert_eq!(scanner.parse(rules::word).unwrap(), "path/to/file.txt");
//! ```

pub mod cursor;
pub mod error;
pub mod rule;
pub mod rules;
pub mod scanner;

// Re-export the public API
pub use cursor::{Cursor, Direction, View};
pub use error::Error;
pub use rule::{Outcome, Rule};
pub use scanner::Scanner;
