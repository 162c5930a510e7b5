use strscan::Scanner;

/// Assert the scanner's unconsumed text, with a readable failure message.
#[allow(dead_code)]
pub fn assert_remaining(scanner: &Scanner, want: &str) {
    assert_eq!(
        scanner.remaining(),
        want,
        "unexpected remaining text after the last operation"
    );
}
