//! Prelude module for convenient imports.
//!
//! Provides a single `use record_validator::prelude::*;` import that brings
//! in the entry points, the record model, and the error types.
//!
//! # Examples
//!
//! ```rust
//! use record_validator::prelude::*;
//!
//! let record = Record::new().with_field(Field::new("Code", "ab").annotated("len:2"));
//! assert!(validate(&record).is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    Validate, ValidateError, ValidateExt, Violation, ViolationKind, Violations,
};

// ============================================================================
// RECORD MODEL
// ============================================================================

pub use crate::record::{
    Field, FieldValue, IntoFieldValue, Record, Shape, Validatable, Value, ValueKind, Visibility,
};

// ============================================================================
// RULES AND EVALUATORS
// ============================================================================

pub use crate::combinators::{Each, each};
pub use crate::rule::{Annotation, Clause, ClauseKind, SyntaxError};
pub use crate::validators::{IntegerRules, TextRules};

// ============================================================================
// ENTRY POINTS
// ============================================================================

pub use crate::{validate, validate_record};

#[cfg(feature = "macros")]
pub use crate::record;
