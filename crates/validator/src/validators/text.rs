//! Text field evaluator
//!
//! Lengths are byte lengths, matching how the bounds are usually written
//! for ASCII identifiers and codes.

use crate::foundation::{Validate, Violation};
use crate::rule::{Annotation, ClauseKind, SyntaxError};
use crate::validators::argument;

/// Evaluates an annotation against one text value.
///
/// `in` uses substring containment: the value passes when it occurs
/// inside any of the listed literals, so `in:foo,bar` also accepts `"ba"`
/// and the empty string.
#[derive(Debug, Clone, Copy)]
pub struct TextRules<'a> {
    field: &'a str,
    annotation: Annotation<'a>,
}

impl<'a> TextRules<'a> {
    /// Creates rules for the text field `field`.
    pub fn new(field: &'a str, annotation: Annotation<'a>) -> Self {
        Self { field, annotation }
    }

    fn malformed(&self, cause: SyntaxError) -> Violation {
        Violation::invalid_syntax(self.field.to_owned(), cause)
    }
}

impl Validate for TextRules<'_> {
    type Input = str;

    fn validate(&self, value: &str) -> Result<(), Violation> {
        for clause in self.annotation.clauses() {
            let clause = clause.map_err(|cause| self.malformed(cause))?;
            let raw = clause.argument();

            let satisfied = match clause.kind() {
                ClauseKind::Length => argument::length(raw).map(|len| value.len() == len),
                ClauseKind::Membership => argument::literals(raw)
                    .map(|mut literals| literals.any(|literal| literal.contains(value))),
                ClauseKind::Minimum => {
                    argument::lower_bound(raw).map(|min| argument::byte_len(value) >= min)
                }
                ClauseKind::Maximum => {
                    argument::upper_bound(raw).map(|max| argument::byte_len(value) <= max)
                }
            }
            .map_err(|cause| self.malformed(cause))?;

            if !satisfied {
                return Err(Violation::constraint(self.field.to_owned(), clause.kind()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ViolationKind;
    use rstest::rstest;

    fn check(annotation: &str, value: &str) -> Result<(), ViolationKind> {
        TextRules::new("S", Annotation::new(annotation))
            .validate(value)
            .map_err(|violation| violation.kind())
    }

    const SYNTAX: ViolationKind = ViolationKind::InvalidSyntax;
    const fn failed(kind: ClauseKind) -> ViolationKind {
        ViolationKind::Constraint(kind)
    }

    #[rstest]
    #[case("len:20", "abcdefghjklmopqrstvu", Ok(()))]
    #[case("len:0", "", Ok(()))]
    #[case("len:5", "abcd", Err(failed(ClauseKind::Length)))]
    #[case("len:5", "abcdef", Err(failed(ClauseKind::Length)))]
    #[case("len:-1", "", Err(SYNTAX))]
    #[case("len:abc", "abc", Err(SYNTAX))]
    #[case("len:%12", "abc", Err(SYNTAX))]
    #[case("in:foo,bar", "bar", Ok(()))]
    #[case("in:foo,bar", "ba", Ok(()))]
    #[case("in:ab,cd", "ef", Err(failed(ClauseKind::Membership)))]
    #[case("in:aa,bb,cd,ee", "ab", Err(failed(ClauseKind::Membership)))]
    #[case("in:", "", Err(SYNTAX))]
    #[case("min:10", "abcdefghjkl", Ok(()))]
    #[case("min:10", "abcdefghj", Err(failed(ClauseKind::Minimum)))]
    #[case("min:-1", "", Ok(()))]
    #[case("min:", "abc", Err(SYNTAX))]
    #[case("max:20", "abcdefghjklmopqrst", Ok(()))]
    #[case("max:2", "efgh", Err(failed(ClauseKind::Maximum)))]
    #[case("max:-7", "ab", Err(failed(ClauseKind::Maximum)))]
    #[case("max:", "abc", Err(SYNTAX))]
    #[case("mini:2", "as", Err(SYNTAX))]
    #[case("len", "as", Err(SYNTAX))]
    fn test_single_clause(
        #[case] annotation: &str,
        #[case] value: &str,
        #[case] expected: Result<(), ViolationKind>,
    ) {
        assert_eq!(check(annotation, value), expected);
    }

    #[test]
    fn test_all_clauses_must_hold() {
        assert_eq!(check("max:5 min:1 in:a,aa,bbb,bbbb,bbabb", "bbabb"), Ok(()));
        assert_eq!(check("len:2 in:aa,bb", "bb"), Ok(()));
    }

    #[test]
    fn test_first_failure_wins() {
        assert_eq!(
            check("len:5 in:aa,bb", "aa"),
            Err(failed(ClauseKind::Length))
        );
        assert_eq!(check("min:1 bogus:1", ""), Err(failed(ClauseKind::Minimum)));
    }

    #[test]
    fn test_length_counts_bytes() {
        assert_eq!(check("len:2", "é"), Ok(()));
    }
}
