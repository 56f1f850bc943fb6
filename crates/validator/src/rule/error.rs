//! Syntax errors raised while reading an annotation.
//!
//! Every variant here surfaces to callers as the bare
//! `invalid validator syntax` violation; the variant itself is kept as the
//! violation's [`source`](std::error::Error::source) so tooling can still
//! tell *why* a clause was rejected.

use super::ClauseKind;

/// Why an annotation clause could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SyntaxError {
    /// The clause has no `:` between kind and argument.
    #[error("clause `{clause}` is not of the form `kind:argument`")]
    MissingSeparator { clause: String },

    /// The clause names a constraint kind that does not exist.
    #[error("unknown constraint kind `{kind}`")]
    UnknownKind { kind: String },

    /// The kind exists but is meaningless for this field's value type.
    #[error("constraint `{kind}` does not apply to {target} values")]
    UnsupportedKind {
        kind: ClauseKind,
        target: &'static str,
    },

    /// The argument failed the kind-specific parse or shape check.
    #[error("invalid argument `{argument}` for constraint `{kind}`")]
    InvalidArgument { kind: ClauseKind, argument: String },

    /// The field's value type cannot carry constraints at all.
    #[error("fields of type `{type_name}` cannot be validated")]
    UnsupportedType { type_name: String },
}

impl SyntaxError {
    pub(crate) fn invalid_argument(kind: ClauseKind, argument: &str) -> Self {
        Self::InvalidArgument {
            kind,
            argument: argument.to_owned(),
        }
    }
}
