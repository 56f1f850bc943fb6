//! Constraint annotation parsing
//!
//! An annotation is a space-separated list of clauses, each of the form
//! `kind:argument`:
//!
//! ```text
//! len:5 in:aa,bb
//! ^^^^^ ^^^^^^^^
//! clause clause
//! ```
//!
//! The parser only splits. Turning an argument into a number or a list of
//! literals is up to the evaluator that receives the clause, because the
//! accepted shapes differ per kind and per value type.
//!
//! # Examples
//!
//! ```rust
//! use record_validator::rule::{Annotation, ClauseKind};
//!
//! let clauses = Annotation::new("min:1 max:5").parse().unwrap();
//! assert_eq!(clauses[0].kind(), ClauseKind::Minimum);
//! assert_eq!(clauses[1].argument(), "5");
//! ```

mod error;

pub use error::SyntaxError;

use std::fmt;
use std::str::FromStr;

// ============================================================================
// CLAUSE KIND
// ============================================================================

/// The closed set of constraint kinds an annotation may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClauseKind {
    /// `len:N`, exact byte length of a text value.
    Length,
    /// `in:a,b,c`, the value must be one of the listed literals.
    Membership,
    /// `min:N`, lower bound on an integer or on a text length.
    Minimum,
    /// `max:N`, upper bound on an integer or on a text length.
    Maximum,
}

impl ClauseKind {
    /// The tag used for this kind inside annotations.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Length => "len",
            Self::Membership => "in",
            Self::Minimum => "min",
            Self::Maximum => "max",
        }
    }

    /// Message reported when a well-formed clause of this kind is not met.
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Length => "field has an invalid length",
            Self::Membership => "field does not contain required value",
            Self::Minimum => "the field does not fit the limit below",
            Self::Maximum => "field does not fit according to the restriction from above",
        }
    }
}

impl fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ClauseKind {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "len" => Ok(Self::Length),
            "in" => Ok(Self::Membership),
            "min" => Ok(Self::Minimum),
            "max" => Ok(Self::Maximum),
            other => Err(SyntaxError::UnknownKind {
                kind: other.to_owned(),
            }),
        }
    }
}

// ============================================================================
// CLAUSE
// ============================================================================

/// One `kind:argument` unit of an annotation.
///
/// The argument is kept raw; everything after the first `:` belongs to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clause<'a> {
    kind: ClauseKind,
    argument: &'a str,
}

impl<'a> Clause<'a> {
    /// Parses a single clause.
    pub fn parse(text: &'a str) -> Result<Self, SyntaxError> {
        let (kind, argument) =
            text.split_once(':')
                .ok_or_else(|| SyntaxError::MissingSeparator {
                    clause: text.to_owned(),
                })?;

        Ok(Self {
            kind: kind.parse()?,
            argument,
        })
    }

    /// The constraint kind.
    pub fn kind(&self) -> ClauseKind {
        self.kind
    }

    /// The raw, unparsed argument.
    pub fn argument(&self) -> &'a str {
        self.argument
    }
}

impl fmt::Display for Clause<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.argument)
    }
}

// ============================================================================
// ANNOTATION
// ============================================================================

/// A raw per-field annotation string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Annotation<'a> {
    raw: &'a str,
}

impl<'a> Annotation<'a> {
    /// Wraps a raw annotation.
    pub const fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// The annotation as written.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// An empty annotation means "do not validate this field".
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Iterates over the clauses in declaration order.
    ///
    /// Splitting is on single spaces, so two consecutive spaces produce an
    /// empty clause, which is reported as a [`SyntaxError`].
    pub fn clauses(&self) -> Clauses<'a> {
        Clauses {
            pieces: (!self.raw.is_empty()).then(|| self.raw.split(' ')),
        }
    }

    /// Parses every clause, stopping at the first malformed one.
    ///
    /// This checks structure and kinds only; arguments are validated when a
    /// clause is evaluated against a value.
    pub fn parse(&self) -> Result<Vec<Clause<'a>>, SyntaxError> {
        self.clauses().collect()
    }
}

impl<'a> From<&'a str> for Annotation<'a> {
    fn from(raw: &'a str) -> Self {
        Self::new(raw)
    }
}

/// Iterator over the clauses of an [`Annotation`].
#[derive(Debug, Clone)]
pub struct Clauses<'a> {
    pieces: Option<std::str::Split<'a, char>>,
}

impl<'a> Iterator for Clauses<'a> {
    type Item = Result<Clause<'a>, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pieces.as_mut()?.next().map(Clause::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_spaces_and_first_colon() {
        let clauses = Annotation::new("len:5 in:aa,bb").parse().unwrap();
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].kind(), ClauseKind::Length);
        assert_eq!(clauses[0].argument(), "5");
        assert_eq!(clauses[1].kind(), ClauseKind::Membership);
        assert_eq!(clauses[1].argument(), "aa,bb");
    }

    #[test]
    fn test_argument_keeps_later_colons() {
        let clause = Clause::parse("in:a:b").unwrap();
        assert_eq!(clause.argument(), "a:b");
    }

    #[test]
    fn test_empty_argument_is_structurally_fine() {
        let clause = Clause::parse("in:").unwrap();
        assert_eq!(clause.kind(), ClauseKind::Membership);
        assert_eq!(clause.argument(), "");
    }

    #[test]
    fn test_unknown_kind() {
        let err = Clause::parse("mini:2").unwrap_err();
        assert_eq!(
            err,
            SyntaxError::UnknownKind {
                kind: "mini".into()
            }
        );
    }

    #[test]
    fn test_missing_separator() {
        let err = Clause::parse("max").unwrap_err();
        assert!(matches!(err, SyntaxError::MissingSeparator { .. }));
    }

    #[test]
    fn test_double_space_yields_empty_clause() {
        let result = Annotation::new("min:1  max:2").parse();
        assert!(matches!(result, Err(SyntaxError::MissingSeparator { clause }) if clause.is_empty()));
    }

    #[test]
    fn test_empty_annotation_has_no_clauses() {
        let annotation = Annotation::new("");
        assert!(annotation.is_empty());
        assert_eq!(annotation.clauses().count(), 0);
    }

    #[test]
    fn test_kind_round_trips_through_tag() {
        for kind in [
            ClauseKind::Length,
            ClauseKind::Membership,
            ClauseKind::Minimum,
            ClauseKind::Maximum,
        ] {
            assert_eq!(kind.tag().parse::<ClauseKind>().unwrap(), kind);
        }
    }
}
