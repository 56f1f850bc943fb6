//! Integer field evaluator

use crate::foundation::{Validate, Violation};
use crate::rule::{Annotation, ClauseKind, SyntaxError};
use crate::validators::argument;

/// Evaluates an annotation against one integer.
///
/// Supports `in`, `min` and `max`; `len` is rejected as invalid syntax.
///
/// # Examples
///
/// ```rust
/// use record_validator::foundation::Validate;
/// use record_validator::validators::IntegerRules;
///
/// let rules = IntegerRules::new("Port", "min:1 max:65535".into());
/// assert!(rules.validate(&8080).is_ok());
/// assert!(rules.validate(&0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IntegerRules<'a> {
    field: &'a str,
    annotation: Annotation<'a>,
}

impl<'a> IntegerRules<'a> {
    /// Creates rules for the integer field `field`.
    pub fn new(field: &'a str, annotation: Annotation<'a>) -> Self {
        Self { field, annotation }
    }

    fn malformed(&self, cause: SyntaxError) -> Violation {
        Violation::invalid_syntax(self.field.to_owned(), cause)
    }
}

impl Validate for IntegerRules<'_> {
    type Input = i64;

    fn validate(&self, value: &i64) -> Result<(), Violation> {
        let value = *value;

        for clause in self.annotation.clauses() {
            let clause = clause.map_err(|cause| self.malformed(cause))?;
            let raw = clause.argument();

            let satisfied = match clause.kind() {
                ClauseKind::Length => Err(SyntaxError::UnsupportedKind {
                    kind: ClauseKind::Length,
                    target: "integer",
                }),
                ClauseKind::Membership => contains(raw, value),
                ClauseKind::Minimum => argument::lower_bound(raw).map(|min| value >= min),
                ClauseKind::Maximum => argument::upper_bound(raw).map(|max| value <= max),
            }
            .map_err(|cause| self.malformed(cause))?;

            if !satisfied {
                return Err(Violation::constraint(self.field.to_owned(), clause.kind()));
            }
        }

        Ok(())
    }
}

/// Literals are parsed lazily: a match returns before later literals are
/// looked at, so `in:5,x` accepts 5 but rejects 6 as malformed.
fn contains(raw: &str, value: i64) -> Result<bool, SyntaxError> {
    for literal in argument::literals(raw)? {
        if argument::integer(ClauseKind::Membership, literal)? == value {
            return Ok(true);
        }
    }
    Ok(false)
}
