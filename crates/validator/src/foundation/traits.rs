//! Core traits for the validation system
//!
//! [`Validate`] is the contract every scalar evaluator fulfils: one value
//! in, at most one [`Violation`] out. [`ValidateExt`] adds the adapters
//! that lift a scalar evaluator to other shapes.

use crate::combinators::Each;
use crate::foundation::Violation;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A check over a single value.
///
/// Implementations stop at the first problem they find, so a single call
/// reports at most one [`Violation`].
///
/// # Examples
///
/// ```rust
/// use record_validator::foundation::{Validate, Violation};
/// use record_validator::validators::IntegerRules;
///
/// let rules = IntegerRules::new("Age", "min:18".into());
/// assert!(rules.validate(&21).is_ok());
/// assert!(rules.validate(&12).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if every clause holds
    /// * `Err(Violation)` for the first clause that is malformed or fails
    fn validate(&self, input: &Self::Input) -> Result<(), Violation>;
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension methods available on every [`Validate`] implementation.
pub trait ValidateExt: Validate + Sized {
    /// Lifts this validator over every element of a list.
    ///
    /// See [`Each`] for how per-element results are combined.
    fn each(self) -> Each<Self> {
        Each::new(self)
    }
}

impl<V: Validate> ValidateExt for V {}
