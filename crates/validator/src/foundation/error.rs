//! Error types for validation failures
//!
//! - [`Violation`]: one failed or malformed clause, or an access violation.
//! - [`Violations`]: the ordered aggregate produced by one validation call.
//! - [`ValidateError`]: what [`validate`](crate::validate) hands back.
//!
//! The rendered text of these types is kept stable so callers matching on
//! error strings keep working: constraint failures read
//! `"<field>: <message>"`, the two sentinels read bare, and an aggregate is
//! the concatenation of its members with no separator.

use std::borrow::Cow;
use std::fmt;

use crate::record::ValueKind;
use crate::rule::{ClauseKind, SyntaxError};

/// Text of a malformed-clause violation.
pub const INVALID_SYNTAX: &str = "invalid validator syntax";

/// Text of an annotated-but-unexported field violation.
pub const UNEXPORTED_FIELD: &str = "validation for unexported field is not allowed";

// ============================================================================
// VIOLATION
// ============================================================================

/// What kind of problem a [`Violation`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ViolationKind {
    /// A clause could not be parsed or does not fit the field.
    InvalidSyntax,
    /// A constraint was declared on a field the validator may not inspect.
    UnexportedField,
    /// A well-formed clause was not satisfied.
    Constraint(ClauseKind),
}

/// A single reported failure.
///
/// # Examples
///
/// ```rust
/// use record_validator::foundation::Violation;
/// use record_validator::rule::ClauseKind;
///
/// let v = Violation::constraint("Age", ClauseKind::Minimum);
/// assert_eq!(v.to_string(), "Age: the field does not fit the limit below");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    kind: ViolationKind,
    field: Option<Cow<'static, str>>,
    message: Cow<'static, str>,
    cause: Option<SyntaxError>,
}

impl Violation {
    /// A malformed clause on `field`.
    ///
    /// Renders as the bare [`INVALID_SYNTAX`] text; the field and the
    /// underlying [`SyntaxError`] are only available structurally.
    pub fn invalid_syntax(field: impl Into<Cow<'static, str>>, cause: SyntaxError) -> Self {
        Self {
            kind: ViolationKind::InvalidSyntax,
            field: Some(field.into()),
            message: Cow::Borrowed(INVALID_SYNTAX),
            cause: Some(cause),
        }
    }

    /// An annotation on a field that is not exported.
    pub fn unexported_field(field: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: ViolationKind::UnexportedField,
            field: Some(field.into()),
            message: Cow::Borrowed(UNEXPORTED_FIELD),
            cause: None,
        }
    }

    /// A well-formed clause of `kind` that `field` does not satisfy.
    pub fn constraint(field: impl Into<Cow<'static, str>>, kind: ClauseKind) -> Self {
        Self {
            kind: ViolationKind::Constraint(kind),
            field: Some(field.into()),
            message: Cow::Borrowed(kind.failure_message()),
            cause: None,
        }
    }

    /// What went wrong.
    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// The field the violation originates from.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// The message without any field prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The parse failure behind an [`ViolationKind::InvalidSyntax`] violation.
    pub fn cause(&self) -> Option<&SyntaxError> {
        self.cause.as_ref()
    }

    /// Whether this is a malformed-clause violation.
    pub fn is_invalid_syntax(&self) -> bool {
        self.kind == ViolationKind::InvalidSyntax
    }

    /// Converts the violation to a JSON object for reporting.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "kind": self.kind,
            "field": self.field,
            "message": self.message,
            "cause": self.cause.as_ref().map(ToString::to_string),
        })
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.field) {
            (ViolationKind::Constraint(_), Some(field)) => {
                write!(f, "{}: {}", field, self.message)
            }
            _ => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for Violation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

// ============================================================================
// VIOLATION COLLECTION
// ============================================================================

/// Ordered violations from one validation call.
///
/// Order is field declaration order, then clause order within a field,
/// then element order within a list field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Appends one violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Returns the number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Iterates in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Returns all violations.
    #[must_use]
    pub fn as_slice(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns the violations reported for `field`, in order.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations
            .iter()
            .filter(move |violation| violation.field() == Some(field))
    }

    /// `Ok(value)` when empty, otherwise `Err(self)`.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, Violations> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }

    /// Converts the collection to a JSON array for reporting.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.violations
                .iter()
                .map(Violation::to_json_value)
                .collect(),
        )
    }
}

impl From<Violation> for Violations {
    fn from(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}

impl Extend<Violation> for Violations {
    fn extend<I: IntoIterator<Item = Violation>>(&mut self, iter: I) {
        self.violations.extend(iter);
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.violations
            .iter()
            .try_for_each(|violation| write!(f, "{violation}"))
    }
}

impl std::error::Error for Violations {}

// ============================================================================
// VALIDATE ERROR
// ============================================================================

/// Error returned by [`validate`](crate::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidateError {
    /// The input is not a record; nothing was inspected.
    #[error("wrong argument given, should be a struct")]
    NotARecord { found: ValueKind },

    /// One or more fields failed.
    #[error(transparent)]
    Violations(#[from] Violations),
}

impl ValidateError {
    /// The field-level violations, if this is not a structural error.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Violations(violations) => Some(violations),
            Self::NotARecord { .. } => None,
        }
    }

    /// Whether the input was rejected for not being a record.
    pub fn is_not_a_record(&self) -> bool {
        matches!(self, Self::NotARecord { .. })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_is_prefixed_with_field() {
        let v = Violation::constraint("Name", ClauseKind::Length);
        assert_eq!(v.to_string(), "Name: field has an invalid length");
        assert_eq!(v.field(), Some("Name"));
        assert_eq!(v.kind(), ViolationKind::Constraint(ClauseKind::Length));
    }

    #[test]
    fn test_sentinels_render_bare() {
        let syntax = Violation::invalid_syntax(
            "Name",
            SyntaxError::UnknownKind {
                kind: "foo".into(),
            },
        );
        assert_eq!(syntax.to_string(), INVALID_SYNTAX);
        assert_eq!(syntax.field(), Some("Name"));
        assert!(syntax.is_invalid_syntax());

        let hidden = Violation::unexported_field("secret");
        assert_eq!(hidden.to_string(), UNEXPORTED_FIELD);
    }

    #[test]
    fn test_syntax_violation_exposes_cause() {
        use std::error::Error as _;

        let v = Violation::invalid_syntax(
            "Age",
            SyntaxError::invalid_argument(ClauseKind::Minimum, "x"),
        );
        let source = v.source().expect("syntax violations carry a cause");
        assert_eq!(source.to_string(), "invalid argument `x` for constraint `min`");
    }

    #[test]
    fn test_collection_concatenates_without_separator() {
        let violations: Violations = [
            Violation::constraint("A", ClauseKind::Length),
            Violation::invalid_syntax("B", SyntaxError::UnknownKind { kind: String::new() }),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            violations.to_string(),
            "A: field has an invalid lengthinvalid validator syntax"
        );
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Violations::new().into_result(7), Ok(7));

        let one = Violations::from(Violation::unexported_field("x"));
        assert_eq!(one.clone().into_result(()), Err(one));
    }

    #[test]
    fn test_for_field_filters_in_order() {
        let violations: Violations = [
            Violation::constraint("A", ClauseKind::Minimum),
            Violation::constraint("B", ClauseKind::Minimum),
            Violation::constraint("A", ClauseKind::Maximum),
        ]
        .into_iter()
        .collect();

        let kinds: Vec<_> = violations.for_field("A").map(Violation::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ViolationKind::Constraint(ClauseKind::Minimum),
                ViolationKind::Constraint(ClauseKind::Maximum),
            ]
        );
    }

    #[test]
    fn test_validate_error_is_transparent_over_violations() {
        let err = ValidateError::from(Violations::from(Violation::constraint(
            "A",
            ClauseKind::Membership,
        )));
        assert_eq!(err.to_string(), "A: field does not contain required value");
        assert_eq!(err.violations().map(Violations::len), Some(1));
        assert!(!err.is_not_a_record());
    }

    #[test]
    fn test_not_a_record_message() {
        let err = ValidateError::NotARecord {
            found: ValueKind::Map,
        };
        assert_eq!(err.to_string(), "wrong argument given, should be a struct");
        assert!(err.violations().is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_to_json_value() {
        let v = Violation::constraint("Tags", ClauseKind::Maximum);
        let json = v.to_json_value();
        assert_eq!(json["kind"]["constraint"], "maximum");
        assert_eq!(json["field"], "Tags");
        assert!(json["cause"].is_null());
    }
}
