//! Argument parsing shared by the scalar evaluators.
//!
//! Integers follow the usual Rust grammar (optional `+`/`-`, ASCII digits,
//! must fit in `i64`). `max` is stricter: its argument must first match
//! [`UPPER_BOUND`], which rules out a leading `+`.

use std::sync::LazyLock;

use regex::Regex;

use crate::rule::{ClauseKind, SyntaxError};

static UPPER_BOUND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-*[0-9]+$").expect("upper bound pattern is valid"));

/// Any `i64`.
pub(crate) fn integer(kind: ClauseKind, argument: &str) -> Result<i64, SyntaxError> {
    argument
        .parse()
        .map_err(|_| SyntaxError::invalid_argument(kind, argument))
}

/// A non-negative integer, for `len`.
pub(crate) fn length(argument: &str) -> Result<usize, SyntaxError> {
    let invalid = || SyntaxError::invalid_argument(ClauseKind::Length, argument);
    let length = integer(ClauseKind::Length, argument)?;
    usize::try_from(length).map_err(|_| invalid())
}

/// The argument of `min`.
pub(crate) fn lower_bound(argument: &str) -> Result<i64, SyntaxError> {
    integer(ClauseKind::Minimum, argument)
}

/// The argument of `max`.
pub(crate) fn upper_bound(argument: &str) -> Result<i64, SyntaxError> {
    if !UPPER_BOUND.is_match(argument) {
        return Err(SyntaxError::invalid_argument(ClauseKind::Maximum, argument));
    }
    integer(ClauseKind::Maximum, argument)
}

/// The comma-separated literals of `in`, which must not be empty.
pub(crate) fn literals(argument: &str) -> Result<std::str::Split<'_, char>, SyntaxError> {
    if argument.is_empty() {
        return Err(SyntaxError::invalid_argument(
            ClauseKind::Membership,
            argument,
        ));
    }
    Ok(argument.split(','))
}

/// Byte length of `text`, comparable against signed bounds.
pub(crate) fn byte_len(text: &str) -> i64 {
    i64::try_from(text.len()).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("20", Some(20))]
    #[case("0", Some(0))]
    #[case("-0", Some(0))]
    #[case("+3", Some(3))]
    #[case("-6", None)]
    #[case("%12", None)]
    #[case("abcdef", None)]
    #[case("", None)]
    fn test_length(#[case] argument: &str, #[case] expected: Option<usize>) {
        assert_eq!(length(argument).ok(), expected);
    }

    #[rstest]
    #[case("-10", Some(-10))]
    #[case("+7", Some(7))]
    #[case("5-", None)]
    #[case("", None)]
    #[case("99999999999999999999", None)]
    fn test_lower_bound(#[case] argument: &str, #[case] expected: Option<i64>) {
        assert_eq!(lower_bound(argument).ok(), expected);
    }

    #[rstest]
    #[case("20", Some(20))]
    #[case("-2", Some(-2))]
    #[case("+7", None)]
    #[case("--5", None)]
    #[case("5-", None)]
    #[case("", None)]
    #[case(" 5", None)]
    fn test_upper_bound(#[case] argument: &str, #[case] expected: Option<i64>) {
        assert_eq!(upper_bound(argument).ok(), expected);
    }

    #[test]
    fn test_literals_rejects_empty_argument() {
        assert!(literals("").is_err());
        assert_eq!(literals("a,,b").unwrap().collect::<Vec<_>>(), ["a", "", "b"]);
    }

    #[test]
    fn test_byte_len_counts_bytes() {
        assert_eq!(byte_len(""), 0);
        assert_eq!(byte_len("é"), 2);
    }
}
