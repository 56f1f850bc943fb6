//! EACH combinator - validates each element of a list field

use std::borrow::Borrow;

use crate::foundation::{Validate, Violations};

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Applies a scalar validator to every element of a list.
///
/// Every element is checked on its own and the violations are
/// concatenated in element order. The first invalid-syntax violation is
/// the exception: the annotation itself is broken, so it is reported once
/// and the remaining elements are skipped.
///
/// # Examples
///
/// ```rust
/// use record_validator::foundation::ValidateExt;
/// use record_validator::validators::IntegerRules;
///
/// let rules = IntegerRules::new("Scores", "max:2".into()).each();
/// assert_eq!(rules.validate(&[1_i64, 5, 9]).len(), 2);
///
/// let broken = IntegerRules::new("Scores", "max:two".into()).each();
/// assert_eq!(broken.validate(&[1_i64, 5, 9]).len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Each<V> {
    inner: V,
}

impl<V> Each<V> {
    /// Creates a new EACH combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Each<V> {
    /// Validates every element, in order.
    pub fn validate<T>(&self, items: &[T]) -> Violations
    where
        T: Borrow<V::Input>,
    {
        let mut violations = Violations::new();

        for item in items {
            if let Err(violation) = self.inner.validate(item.borrow()) {
                let malformed = violation.is_invalid_syntax();
                violations.push(violation);
                if malformed {
                    break;
                }
            }
        }

        violations
    }
}

/// Lifts `validator` over list elements.
pub fn each<V>(validator: V) -> Each<V> {
    Each::new(validator)
}

// ============================================================================
// TESTS
// ============================================================================
