//! Mapping Rust field types onto [`FieldValue`]
//!
//! Signed integers become [`FieldValue::Integer`], strings become
//! [`FieldValue::Text`], and vectors or slices of either become the
//! matching list variant. A handful of other common types map to
//! [`FieldValue::Other`] so they can appear in a [`record!`](crate::record!)
//! struct; annotating one of those is reported as invalid syntax.

use std::any::type_name;

use super::FieldValue;

/// Converts a field's Rust value into the validator's model.
pub trait IntoFieldValue {
    fn to_field_value(&self) -> FieldValue;
}

/// Element types that may appear inside a list field.
pub trait ListElement: Sized {
    fn to_list_value(items: &[Self]) -> FieldValue;
}

impl<T: IntoFieldValue + ?Sized> IntoFieldValue for &T {
    fn to_field_value(&self) -> FieldValue {
        (**self).to_field_value()
    }
}

impl<T: ListElement> IntoFieldValue for [T] {
    fn to_field_value(&self) -> FieldValue {
        T::to_list_value(self)
    }
}

impl<T: ListElement> IntoFieldValue for Vec<T> {
    fn to_field_value(&self) -> FieldValue {
        T::to_list_value(self)
    }
}

// ============================================================================
// INTEGERS
// ============================================================================

macro_rules! integer_field {
    ($($ty:ty),*) => {
        $(
            impl IntoFieldValue for $ty {
                fn to_field_value(&self) -> FieldValue {
                    FieldValue::Integer(i64::from(*self))
                }
            }

            impl ListElement for $ty {
                fn to_list_value(items: &[Self]) -> FieldValue {
                    FieldValue::IntegerList(items.iter().copied().map(i64::from).collect())
                }
            }
        )*
    };
}

integer_field!(i8, i16, i32, i64);

impl IntoFieldValue for isize {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Integer(*self as i64)
    }
}

impl ListElement for isize {
    fn to_list_value(items: &[Self]) -> FieldValue {
        FieldValue::IntegerList(items.iter().map(|item| *item as i64).collect())
    }
}

// ============================================================================
// TEXT
// ============================================================================

impl IntoFieldValue for str {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.to_owned())
    }
}

impl IntoFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }
}

impl ListElement for String {
    fn to_list_value(items: &[Self]) -> FieldValue {
        FieldValue::TextList(items.to_vec())
    }
}

impl ListElement for &str {
    fn to_list_value(items: &[Self]) -> FieldValue {
        FieldValue::TextList(items.iter().map(|item| (*item).to_owned()).collect())
    }
}

// ============================================================================
// EVERYTHING ELSE
// ============================================================================

macro_rules! opaque_field {
    ($($ty:ty),*) => {
        $(
            impl IntoFieldValue for $ty {
                fn to_field_value(&self) -> FieldValue {
                    FieldValue::Other(type_name::<$ty>().to_owned())
                }
            }

            impl ListElement for $ty {
                fn to_list_value(_items: &[Self]) -> FieldValue {
                    FieldValue::Other(type_name::<Vec<$ty>>().to_owned())
                }
            }
        )*
    };
}

opaque_field!(bool, char, f32, f64, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_widen() {
        assert_eq!(7_i8.to_field_value(), FieldValue::Integer(7));
        assert_eq!((-3_isize).to_field_value(), FieldValue::Integer(-3));
        assert_eq!(
            vec![1_i32, -2].to_field_value(),
            FieldValue::IntegerList(vec![1, -2])
        );
    }

    #[test]
    fn test_text_and_text_lists() {
        assert_eq!("ab".to_field_value(), FieldValue::Text("ab".into()));
        assert_eq!(
            vec![String::from("x")].to_field_value(),
            FieldValue::TextList(vec!["x".into()])
        );
    }

    #[test]
    fn test_unsupported_types_are_opaque() {
        assert_eq!(true.to_field_value(), FieldValue::Other("bool".into()));
        assert_eq!(1.5_f64.to_field_value(), FieldValue::Other("f64".into()));
        assert!(matches!(vec![1_u8].to_field_value(), FieldValue::Other(_)));
    }
}
