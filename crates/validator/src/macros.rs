//! Macros for declaring annotated records with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`record!`]: declare a struct whose fields carry constraint annotations
//!
//! # Examples
//!
//! ```rust
//! use record_validator::record;
//!
//! record! {
//!     #[derive(Debug, Default)]
//!     pub struct Signup {
//!         pub username: String => "min:3 max:20",
//!         pub age: i64 => "min:18",
//!         pub roles: Vec<String> => "in:admin,editor,viewer",
//!         pub nickname: String,
//!     }
//! }
//!
//! let signup = Signup {
//!     username: "al".into(),
//!     age: 30,
//!     roles: vec!["viewer".into()],
//!     ..Default::default()
//! };
//!
//! let err = record_validator::validate(&signup).unwrap_err();
//! assert_eq!(err.to_string(), "username: the field does not fit the limit below");
//! ```

// ============================================================================
// RECORD MACRO
// ============================================================================

/// Declares a struct and implements [`Validatable`](crate::record::Validatable)
/// for it.
///
/// Each field may be followed by `=> "annotation"`. Field visibility maps
/// onto the validator's notion of export: `pub` fields are exported, all
/// others (including `pub(crate)`) are not, and annotating one of them
/// aborts validation.
///
/// Field types must implement [`IntoFieldValue`](crate::record::IntoFieldValue).
///
/// ```rust
/// use record_validator::record;
///
/// record! {
///     pub struct Limits {
///         pub max_items: i32 => "min:1 max:100",
///         secret: String => "len:8",
///     }
/// }
///
/// let limits = Limits { max_items: 10, secret: "hunter22".into() };
/// assert_eq!(
///     record_validator::validate(&limits).unwrap_err().to_string(),
///     "validation for unexported field is not allowed",
/// );
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty $(=> $annotation:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::record::Validatable for $name {
            fn shape(&self) -> $crate::record::Shape<'_> {
                let record = $crate::record::Record::named(::std::stringify!($name))
                    $(
                        .with_field($crate::record::Field::from_parts(
                            ::std::stringify!($field),
                            $crate::record::IntoFieldValue::to_field_value(&self.$field),
                            $crate::record::Visibility::from_keyword(::std::stringify!($field_vis)),
                            $crate::__record_annotation!($($annotation)?),
                        ))
                    )*;

                $crate::record::Shape::Record(::std::borrow::Cow::Owned(record))
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record_annotation {
    () => {
        ::std::option::Option::None
    };
    ($annotation:literal) => {
        ::std::option::Option::Some($annotation)
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::ViolationKind;
    use crate::record::{FieldValue, Shape, Validatable, Visibility};

    crate::record! {
        #[derive(Debug, Clone, Default)]
        pub struct Sample {
            pub name: String => "len:5",
            pub tags: Vec<String>,
            pub(crate) scoped: i32,
            hidden: bool => "min:1",
        }
    }

    fn fields(sample: &Sample) -> crate::record::Record {
        match sample.shape() {
            Shape::Record(record) => record.into_owned(),
            Shape::Other(kind) => panic!("expected a record, got {kind}"),
        }
    }

    #[test]
    fn test_macro_projects_every_field_in_order() {
        let record = fields(&Sample::default());
        assert_eq!(record.name(), Some("Sample"));

        let names: Vec<_> = record.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["name", "tags", "scoped", "hidden"]);

        let tags = record.field("tags").unwrap();
        assert_eq!(tags.value(), &FieldValue::TextList(Vec::new()));
        assert_eq!(tags.annotation(), None);
    }

    #[test]
    fn test_macro_maps_visibility() {
        let record = fields(&Sample::default());
        let visibility = |name| record.field(name).unwrap().visibility();

        assert_eq!(visibility("name"), Visibility::Exported);
        assert_eq!(visibility("scoped"), Visibility::Unexported);
        assert_eq!(visibility("hidden"), Visibility::Unexported);
    }

    #[test]
    fn test_macro_struct_validates() {
        let sample = Sample {
            name: "abcde".into(),
            ..Sample::default()
        };

        let err = crate::validate(&sample).unwrap_err();
        let violations = err.violations().unwrap();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations.as_slice()[0].kind(),
            ViolationKind::UnexportedField
        );
    }
}
