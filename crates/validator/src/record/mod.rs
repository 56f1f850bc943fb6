//! The record model the validator inspects
//!
//! A [`Record`] is an ordered list of [`Field`]s. Each field carries its
//! name, its [`FieldValue`], whether it is [`Visibility::Exported`], and an
//! optional annotation string holding its constraints.
//!
//! Records can be built by hand, deserialized (with the `serde` feature),
//! or produced from a Rust struct declared through [`record!`](crate::record!).
//!
//! ```rust
//! use record_validator::record::{Field, Record};
//!
//! let user = Record::named("User")
//!     .with_field(Field::new("Name", "alice").annotated("min:3 max:20"))
//!     .with_field(Field::new("Age", 42).annotated("min:18"))
//!     .with_field(Field::new("password", "hunter2").unexported());
//!
//! assert_eq!(user.len(), 3);
//! ```

mod convert;
mod value;

pub use convert::{IntoFieldValue, ListElement};
pub use value::{Shape, Validatable, Value, ValueKind};

// ============================================================================
// VISIBILITY
// ============================================================================

/// Whether the validator is allowed to inspect a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Visibility {
    /// Public; may carry constraints.
    #[default]
    Exported,
    /// Private; carrying constraints aborts validation.
    Unexported,
}

impl Visibility {
    /// Maps a Rust visibility keyword as written in source.
    ///
    /// Only plain `pub` counts as exported; restricted forms such as
    /// `pub(crate)` do not.
    pub fn from_keyword(keyword: &str) -> Self {
        if keyword == "pub" {
            Self::Exported
        } else {
            Self::Unexported
        }
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// The value of a field, tagged with its type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "value", rename_all = "snake_case")
)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
    IntegerList(Vec<i64>),
    TextList(Vec<String>),
    /// Any other type, identified by name. Such fields cannot be validated.
    Other(String),
}

impl FieldValue {
    /// A value of a type the validator has no evaluator for.
    pub fn other(type_name: impl Into<String>) -> Self {
        Self::Other(type_name.into())
    }

    /// A short description of the value's type.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Integer(_) => "integer",
            Self::Text(_) => "text",
            Self::IntegerList(_) => "integer list",
            Self::TextList(_) => "text list",
            Self::Other(name) => name,
        }
    }
}

macro_rules! field_value_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    IntoFieldValue::to_field_value(&value)
                }
            }
        )*
    };
}

field_value_from!(
    i8,
    i16,
    i32,
    i64,
    String,
    &str,
    Vec<i32>,
    Vec<i64>,
    Vec<String>,
    Vec<&str>,
);

// ============================================================================
// FIELD
// ============================================================================

/// One named field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    name: String,
    value: FieldValue,
    #[cfg_attr(feature = "serde", serde(default))]
    visibility: Visibility,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    annotation: Option<String>,
}

impl Field {
    /// An exported, unannotated field.
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            visibility: Visibility::Exported,
            annotation: None,
        }
    }

    /// Builds a field from all of its parts at once.
    pub fn from_parts(
        name: impl Into<String>,
        value: FieldValue,
        visibility: Visibility,
        annotation: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            visibility,
            annotation: annotation.map(str::to_owned),
        }
    }

    /// Attaches a constraint annotation.
    #[must_use = "builder methods must be chained or built"]
    pub fn annotated(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Marks the field as not exported.
    #[must_use = "builder methods must be chained or built"]
    pub fn unexported(mut self) -> Self {
        self.visibility = Visibility::Unexported;
        self
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's current value.
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Whether the field is exported.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// The annotation, if one is present and non-empty.
    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref().filter(|raw| !raw.is_empty())
    }

    /// Whether the field asks for validation at all.
    pub fn is_annotated(&self) -> bool {
        self.annotation().is_some()
    }

    /// Returns `true` for [`Visibility::Exported`] fields.
    pub fn is_exported(&self) -> bool {
        self.visibility == Visibility::Exported
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// A flat, ordered collection of named fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    name: Option<String>,
    fields: Vec<Field>,
}

impl Record {
    /// An anonymous, empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty record with a type name, used in diagnostics.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            fields: Vec::new(),
        }
    }

    /// Appends a field, keeping declaration order.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends a field, keeping declaration order.
    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// The record's type name, when it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Looks up the first field called `name`.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<Field> for Record {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            name: None,
            fields: iter.into_iter().collect(),
        }
    }
}

impl Extend<Field> for Record {
    fn extend<I: IntoIterator<Item = Field>>(&mut self, iter: I) {
        self.fields.extend(iter);
    }
}
