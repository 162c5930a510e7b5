use rstest::rstest;
use strscan::{rules, Error, Scanner};

mod common;
use common::assert_remaining;

#[rstest]
#[case(r#""hello""#, "hello")]
#[case(r#""""#, "")]
#[case(r#""two words""#, "two words")]
#[case("\"tabs\\tstay\\tliteral\"", "tabs\\tstay\\tliteral")]
fn quoted_body_is_returned_raw(#[case] input: &str, #[case] expected: &str) {
    let mut scanner = Scanner::new(input);
    assert_eq!(scanner.parse(rules::double_quoted_string).expect("string"), expected);
    assert!(scanner.is_empty());
}

#[test]
fn escaped_quote_does_not_terminate() {
    // "hel\"lo" — the escaped quote stays in the body, escapes preserved.
    let mut scanner = Scanner::new(r#""hel\"lo" rest"#);
    assert_eq!(
        scanner.parse(rules::double_quoted_string).expect("string"),
        r#"hel\"lo"#
    );
    assert_remaining(&scanner, "rest");
}

#[test]
fn unterminated_string_is_a_hard_parse_failure() {
    let mut scanner = Scanner::new("\"never closed");
    let err = scanner.parse(rules::double_quoted_string).unwrap_err();
    assert!(matches!(err, Error::Malformed { .. }));
    assert!(err.to_string().contains("closing quote"));
    // The cursor survives the failure untouched.
    assert_remaining(&scanner, "\"never closed");
}

#[test]
fn unterminated_string_is_soft_under_speculation() {
    let mut scanner = Scanner::new("\"never closed");
    assert!(scanner.check(rules::double_quoted_string).is_none());
    assert!(scanner.peek(rules::double_quoted_string, |_| true).is_none());
    assert!(!scanner.has(rules::double_quoted_string, |_| true));
    assert_remaining(&scanner, "\"never closed");
}

#[test]
fn missing_opening_quote_is_no_match() {
    let mut scanner = Scanner::new("bare words");
    assert!(scanner.check(rules::double_quoted_string).is_none());
    assert_remaining(&scanner, "bare words");
}

#[test]
fn quoted_strings_between_other_tokens() {
    let mut scanner = Scanner::new("say \"hi there\" twice");
    assert_eq!(scanner.parse(rules::word).expect("word"), "say");
    assert_eq!(
        scanner.parse(rules::double_quoted_string).expect("string"),
        "hi there"
    );
    assert_eq!(scanner.parse(rules::word).expect("word"), "twice");
    assert!(scanner.is_empty());
}

#[test]
fn reverse_takes_the_trailing_string() {
    let mut scanner = Scanner::new("label \"tail value\"");
    scanner.set_reverse(true);
    assert_eq!(
        scanner.parse(rules::double_quoted_string).expect("string"),
        "tail value"
    );
    assert_remaining(&scanner, "label");
}
