//! Field dispatch: picks the evaluator for a field's value type.

use crate::foundation::{Validate, ValidateExt, Violation, Violations};
use crate::record::{Field, FieldValue};
use crate::rule::{Annotation, SyntaxError};
use crate::validators::{IntegerRules, TextRules};

/// Runs the field's annotation against its value.
///
/// The caller has already checked that the field is annotated and
/// exported.
pub(crate) fn validate_field(field: &Field) -> Violations {
    let name = field.name();
    let annotation = Annotation::new(field.annotation().unwrap_or_default());

    match field.value() {
        FieldValue::Integer(value) => single(IntegerRules::new(name, annotation).validate(value)),
        FieldValue::Text(value) => single(TextRules::new(name, annotation).validate(value)),
        FieldValue::IntegerList(items) => IntegerRules::new(name, annotation).each().validate(items),
        FieldValue::TextList(items) => TextRules::new(name, annotation).each().validate(items),
        FieldValue::Other(type_name) => {
            tracing::warn!(
                field = name,
                type_name = type_name.as_str(),
                annotation = annotation.raw(),
                "constraints declared on a field type that cannot be validated"
            );
            Violations::from(Violation::invalid_syntax(
                name.to_owned(),
                SyntaxError::UnsupportedType {
                    type_name: type_name.clone(),
                },
            ))
        }
    }
}

fn single(result: Result<(), Violation>) -> Violations {
    result.err().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ViolationKind;
    use crate::rule::ClauseKind;

    #[test]
    fn test_scalars_report_at_most_one_violation() {
        let field = Field::new("Name", "abcdef").annotated("len:3 max:2");
        let violations = validate_field(&field);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations.as_slice()[0].kind(),
            ViolationKind::Constraint(ClauseKind::Length)
        );
    }

    #[test]
    fn test_lists_report_per_element() {
        let field = Field::new("Scores", vec![22, 20, -11]).annotated("max:-12");
        assert_eq!(validate_field(&field).len(), 3);
    }

    #[test]
    fn test_unsupported_type_is_invalid_syntax() {
        let field = Field::new("Ratio", FieldValue::other("f64")).annotated("min:1");
        let violations = validate_field(&field);
        assert_eq!(violations.len(), 1);

        let violation = &violations.as_slice()[0];
        assert!(violation.is_invalid_syntax());
        assert_eq!(violation.field(), Some("Ratio"));
        assert!(matches!(
            violation.cause(),
            Some(SyntaxError::UnsupportedType { type_name }) if type_name == "f64"
        ));
    }
}
