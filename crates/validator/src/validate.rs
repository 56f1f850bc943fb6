//! Record validation entry points

use std::ops::ControlFlow;

use tracing::{debug, trace};

use crate::dispatch;
use crate::foundation::{ValidateError, Violation, Violations};
use crate::record::{Field, Record, Shape, Validatable};

/// Validates every annotated field of `input`.
///
/// - Inputs that are not records fail with [`ValidateError::NotARecord`]
///   before anything is inspected.
/// - Fields without an annotation are skipped.
/// - An annotated field that is not exported aborts the call: its violation
///   is appended to those already collected, and fields after it are never
///   looked at.
/// - Every other field is checked and its violations are appended in
///   declaration order.
///
/// # Examples
///
/// ```rust
/// use record_validator::record::{Field, Record};
///
/// let user = Record::named("User")
///     .with_field(Field::new("Name", "al").annotated("min:3"))
///     .with_field(Field::new("Age", 12).annotated("min:18"));
///
/// let err = record_validator::validate(&user).unwrap_err();
/// assert_eq!(err.violations().map(|v| v.len()), Some(2));
///
/// assert!(record_validator::validate("not a record").unwrap_err().is_not_a_record());
/// ```
pub fn validate<T>(input: &T) -> Result<(), ValidateError>
where
    T: Validatable + ?Sized,
{
    match input.shape() {
        Shape::Record(record) => validate_record(&record).map_err(ValidateError::from),
        Shape::Other(found) => {
            debug!(%found, "refusing to validate non-record input");
            Err(ValidateError::NotARecord { found })
        }
    }
}

/// Validates a record, returning the violations directly.
pub fn validate_record(record: &Record) -> Result<(), Violations> {
    debug!(
        record = record.name().unwrap_or("<anonymous>"),
        fields = record.len(),
        "validating record"
    );

    let mut violations = Violations::new();

    for field in record.fields() {
        match check_field(field) {
            ControlFlow::Continue(found) => violations.extend(found),
            ControlFlow::Break(abort) => {
                violations.push(abort);
                return Err(violations);
            }
        }
    }

    debug!(violations = violations.len(), "record validated");
    violations.into_result(())
}

fn check_field(field: &Field) -> ControlFlow<Violation, Violations> {
    let Some(annotation) = field.annotation() else {
        return ControlFlow::Continue(Violations::new());
    };

    if !field.is_exported() {
        debug!(
            field = field.name(),
            "annotated field is not exported, aborting validation"
        );
        return ControlFlow::Break(Violation::unexported_field(field.name().to_owned()));
    }

    trace!(
        field = field.name(),
        kind = field.value().type_name(),
        annotation,
        "checking field"
    );
    ControlFlow::Continue(dispatch::validate_field(field))
}
