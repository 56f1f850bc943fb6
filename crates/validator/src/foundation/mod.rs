//! Core validation types and traits
//!
//! This module contains the fundamental building blocks shared by every
//! evaluator:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`Violation`], [`Violations`], [`ValidateError`]

pub mod error;
pub mod traits;

pub use error::{
    INVALID_SYNTAX, UNEXPORTED_FIELD, ValidateError, Violation, ViolationKind, Violations,
};
pub use traits::{Validate, ValidateExt};
