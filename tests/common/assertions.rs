//! Logged assertion helpers for cli_report tests.
//!
//! These wrap standard assertions with tracing logs so CI output shows the
//! rendered lines that failed to match.

#![allow(dead_code)]

use std::fmt::Debug;

/// Assert equality with detailed logging.
#[track_caller]
pub fn assert_eq_logged<T: PartialEq + Debug>(context: &str, actual: T, expected: T) {
    tracing::debug!(context = context, expected = ?expected, actual = ?actual, "asserting equality");

    if actual != expected {
        tracing::error!(
            context = context,
            expected = ?expected,
            actual = ?actual,
            "assertion failed: values not equal"
        );
    }

    assert_eq!(
        actual, expected,
        "{context}: expected {expected:?}, got {actual:?}"
    );
}

/// Assert a result is an error and return it.
#[track_caller]
pub fn assert_err_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> E {
    match result {
        Ok(value) => {
            tracing::error!(context = context, value = ?value, "assertion failed: expected Err");
            panic!("{context}: expected Err, got Ok({value:?})");
        }
        Err(err) => {
            tracing::debug!(context = context, error = ?err, "got expected error");
            err
        }
    }
}

/// Assert that `haystack` contains `needle`.
#[track_caller]
pub fn assert_contains_logged(context: &str, haystack: &str, needle: &str) {
    tracing::debug!(context = context, haystack = haystack, needle = needle, "asserting contains");
    assert!(
        haystack.contains(needle),
        "{context}: expected {haystack:?} to contain {needle:?}"
    );
}

/// Remove SGR escape sequences, leaving the visible text.
pub fn strip_escapes(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Assert the visible width of a rendered line.
#[track_caller]
pub fn assert_visible_width_logged(context: &str, line: &str, expected: usize) {
    let visible = strip_escapes(line).chars().count();
    tracing::debug!(context = context, line = line, visible = visible, "asserting width");
    assert_eq!(
        visible, expected,
        "{context}: {line:?} is {visible} wide, expected {expected}"
    );
}

/// Assert a rendered line carries no escape codes.
#[track_caller]
pub fn assert_no_escapes_logged(context: &str, line: &str) {
    assert!(
        !line.contains('\x1b'),
        "{context}: unexpected escape code in {line:?}"
    );
}
