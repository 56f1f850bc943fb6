//! # record-validator
//!
//! Declarative, annotation-driven validation for flat records.
//!
//! Each field of a record may carry an annotation such as `"min:3 max:20"`.
//! [`validate`] checks every annotated field against its clauses and reports
//! all violations at once.
//!
//! ## Quick Start
//!
//! ```rust
//! use record_validator::prelude::*;
//!
//! record! {
//!     pub struct User {
//!         pub name: String => "min:3 max:20",
//!         pub age: i64 => "min:18",
//!         pub tags: Vec<String> => "len:2",
//!     }
//! }
//!
//! let user = User { name: "bob".into(), age: 16, tags: vec!["ok".into(), "bad".into()] };
//! let err = validate(&user).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "age: the field does not fit the limit belowtags: field has an invalid length",
//! );
//! ```
//!
//! ## Annotation Syntax
//!
//! An annotation is a space-separated list of `kind:argument` clauses:
//!
//! - `len:N`: text byte length equals `N`
//! - `in:a,b,c`: integer equals one literal; text is a substring of one literal
//! - `min:N`: integer `>= N`, or text byte length `>= N`
//! - `max:N`: integer `<= N`, or text byte length `<= N`
//!
//! Clauses are checked in order and a field stops at its first failure.
//! List fields are checked element by element.
//!
//! ## Errors
//!
//! [`ValidateError`] is either [`NotARecord`](ValidateError::NotARecord) or
//! the ordered [`Violations`](foundation::Violations) of the call. Its text is
//! the concatenation of every violation's text, with no separator.

pub mod combinators;
mod dispatch;
pub mod foundation;
#[cfg(feature = "macros")]
mod macros;
pub mod prelude;
pub mod record;
pub mod rule;
mod validate;
pub mod validators;

pub use foundation::{ValidateError, Violation, Violations};
pub use validate::{validate, validate_record};
