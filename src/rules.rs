// Copyright 2025 Asim Ihsan
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! # Built-in Rule Library
//!
//! Ready-to-use rules covering the common token shapes: words, integers, floating point
//! numbers with and without a type suffix, and double-quoted strings. Each rule is a
//! free function conforming to the [`Rule`](crate::rule::Rule) contract, so they can be
//! passed straight to a [`Scanner`](crate::Scanner) or evaluated standalone against a
//! [`View`].
//!
//! All rules are greedy: they consume the maximal run satisfying their grammar. They
//! are also direction-aware: under [`Direction::Reverse`] a rule produces the maximal
//! match that ends exactly at the tail of the remaining text, with the value still in
//! natural reading order.
//!
//! ## Features
//!
//! * [`word`] - maximal run of non-separator characters
//! * [`integer`] - optionally signed decimal integer with arbitrary precision
//! * [`double_number`] - floating point literal without a type suffix
//! * [`float_number`] - floating point literal with a required `f`/`F` suffix
//! * [`double_quoted_string`] - `"..."` with backslash-escaped quotes
//!
//! ## Examples
//!
//! ```
//! use strscan::cursor::{Direction, View};
//! use strscan::rule::Outcome;
//! use strscan::rules::{integer, word};
//! use num_bigint::BigInt;
//!
//! let view = View::new("-17 apples", Direction::Forward);
//! assert_eq!(
//!     integer(&view),
//!     Outcome::Match { value: BigInt::from(-17), len: 3 },
//! );
//!
//! let view = View::new("-17 apples", Direction::Reverse);
//! assert_eq!(
//!     word(&view),
//!     Outcome::Match { value: "apples".to_string(), len: 6 },
//! );
//! ```

use crate::cursor::{Direction, View};
use crate::rule::Outcome;
use num_bigint::BigInt;

/// Reason reported when a double-quoted string never closes.
pub(crate) const UNTERMINATED_STRING: &str =
    "double-quoted string is missing its closing quote";

/// Matches the maximal run of non-separator characters at the scanning edge.
///
/// A word is never empty: a separator (or end of input) at the scanning edge is a
/// [`Outcome::NoMatch`].
pub fn word(view: &View<'_>) -> Outcome<String> {
    let text = view.text();
    let run = match view.direction() {
        Direction::Forward => {
            let mut end = 0;
            for (i, c) in text.char_indices() {
                if view.is_separator(c) {
                    break;
                }
                end = i + c.len_utf8();
            }
            &text[..end]
        }
        Direction::Reverse => {
            let mut start = text.len();
            for (i, c) in text.char_indices().rev() {
                if view.is_separator(c) {
                    break;
                }
                start = i;
            }
            &text[start..]
        }
    };
    if run.is_empty() {
        Outcome::NoMatch
    } else {
        Outcome::Match { value: run.to_string(), len: run.len() }
    }
}

/// Matches an optional `+`/`-` sign followed by one or more decimal digits.
///
/// Values are arbitrary precision ([`BigInt`]), so inputs like
/// `12345678901234567890123456789` parse losslessly. A lone sign with no digits is a
/// [`Outcome::NoMatch`] and consumes nothing.
pub fn integer(view: &View<'_>) -> Outcome<BigInt> {
    match view.direction() {
        Direction::Forward => {
            let text = view.text();
            match signed_digits_len(text) {
                Some(len) => parse_value(&text[..len], len),
                None => Outcome::NoMatch,
            }
        }
        Direction::Reverse => longest_suffix(view.text(), is_integer_char, |s| {
            (signed_digits_len(s) == Some(s.len()))
                .then(|| s.parse::<BigInt>().ok())
                .flatten()
        }),
    }
}

/// Matches a floating point literal with no type suffix: optional sign, digits,
/// optional `.` plus digits, optional complete exponent.
///
/// A trailing `f`/`F` is never consumed; that suffix belongs to [`float_number`]. An
/// incomplete exponent is likewise left alone, so `"1e"` matches as `1` leaving `e`.
pub fn double_number(view: &View<'_>) -> Outcome<f64> {
    match view.direction() {
        Direction::Forward => {
            let text = view.text();
            match decimal_literal_len(text) {
                Some(len) => parse_value(&text[..len], len),
                None => Outcome::NoMatch,
            }
        }
        Direction::Reverse => longest_suffix(view.text(), is_decimal_char, |s| {
            (decimal_literal_len(s) == Some(s.len()))
                .then(|| s.parse::<f64>().ok())
                .flatten()
        }),
    }
}

/// Matches the [`double_number`] grammar followed by a required `f`/`F` suffix, which
/// is consumed. Without the suffix this rule does not match at all.
pub fn float_number(view: &View<'_>) -> Outcome<f32> {
    match view.direction() {
        Direction::Forward => {
            let text = view.text();
            let Some(len) = decimal_literal_len(text) else {
                return Outcome::NoMatch;
            };
            if !matches!(text.as_bytes().get(len).copied(), Some(b'f' | b'F')) {
                return Outcome::NoMatch;
            }
            parse_value::<f32>(&text[..len], len + 1)
        }
        Direction::Reverse => longest_suffix(view.text(), is_float_char, |s| {
            let body = s.strip_suffix(['f', 'F'])?;
            (decimal_literal_len(body) == Some(body.len()))
                .then(|| body.parse::<f32>().ok())
                .flatten()
        }),
    }
}

/// Matches a double-quoted string at the scanning edge, scanning to the matching
/// unescaped `"`. A `\"` sequence does not terminate the string.
///
/// The value is the raw body between the quotes: escape sequences are preserved
/// literally and unescaping is left to the caller. An opening quote with no closing
/// one is [`Outcome::Malformed`], never a partial match.
pub fn double_quoted_string(view: &View<'_>) -> Outcome<String> {
    let text = view.text();
    match view.direction() {
        Direction::Forward => {
            if !text.starts_with('"') {
                return Outcome::NoMatch;
            }
            let mut escaped = false;
            for (i, c) in text.char_indices().skip(1) {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == '"' {
                    return Outcome::Match { value: text[1..i].to_string(), len: i + 1 };
                }
            }
            Outcome::Malformed(UNTERMINATED_STRING)
        }
        Direction::Reverse => {
            let Some(body) = text.strip_suffix('"') else {
                return Outcome::NoMatch;
            };
            for (i, c) in body.char_indices().rev() {
                if c != '"' {
                    continue;
                }
                // An odd number of preceding backslashes means this quote is escaped.
                let backslashes =
                    body[..i].chars().rev().take_while(|&b| b == '\\').count();
                if backslashes % 2 == 0 {
                    return Outcome::Match {
                        value: body[i + 1..].to_string(),
                        len: text.len() - i,
                    };
                }
            }
            Outcome::Malformed(UNTERMINATED_STRING)
        }
    }
}

/// Byte length of the maximal `[+-]?[0-9]+` prefix, or `None` when no digit follows
/// the optional sign.
fn signed_digits_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first().copied(), Some(b'+' | b'-')));
    let digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    (digits > 0).then_some(sign + digits)
}

/// Byte length of the maximal suffix-free floating point prefix: optional sign,
/// digits, optional `.` plus digits, optional complete `e`/`E` exponent.
fn decimal_literal_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = usize::from(matches!(bytes.first().copied(), Some(b'+' | b'-')));
    let int_digits = bytes[i..].iter().take_while(|b| b.is_ascii_digit()).count();
    if int_digits == 0 {
        return None;
    }
    i += int_digits;

    if bytes.get(i).copied() == Some(b'.') {
        i += 1;
        i += bytes[i..].iter().take_while(|b| b.is_ascii_digit()).count();
    }

    // The exponent only counts when complete; "1e" and "1e+" stop before the `e`.
    if matches!(bytes.get(i).copied(), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j).copied(), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = bytes[j..].iter().take_while(|b| b.is_ascii_digit()).count();
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }
    Some(i)
}

/// Parse a literal the grammar has already validated. The `NoMatch` arm keeps the
/// rules total without panicking.
fn parse_value<T: std::str::FromStr>(literal: &str, len: usize) -> Outcome<T> {
    match literal.parse::<T>() {
        Ok(value) => Outcome::Match { value, len },
        Err(_) => Outcome::NoMatch,
    }
}

/// Reverse-direction matching: take the maximal tail run over the rule's alphabet,
/// then the longest suffix of it that the forward grammar matches in full.
fn longest_suffix<T>(
    text: &str,
    in_alphabet: impl Fn(char) -> bool,
    full_match: impl Fn(&str) -> Option<T>,
) -> Outcome<T> {
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        if !in_alphabet(c) {
            break;
        }
        start = i;
    }
    let mut i = start;
    while i < text.len() {
        if let Some(value) = full_match(&text[i..]) {
            return Outcome::Match { value, len: text.len() - i };
        }
        // Alphabet characters are all ASCII, so stepping a byte stays on a boundary.
        i += 1;
    }
    Outcome::NoMatch
}

fn is_integer_char(c: char) -> bool {
    c.is_ascii_digit() || c == '+' || c == '-'
}

fn is_decimal_char(c: char) -> bool {
    is_integer_char(c) || matches!(c, '.' | 'e' | 'E')
}

fn is_float_char(c: char) -> bool {
    is_decimal_char(c) || matches!(c, 'f' | 'F')
}
