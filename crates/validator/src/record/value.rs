//! Inputs accepted by [`validate`](crate::validate)
//!
//! Anything implementing [`Validatable`] can be handed to the validator. It
//! either presents itself as a [`Record`] or reports which non-record
//! [`ValueKind`] it is, in which case validation is refused up front.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use super::Record;

// ============================================================================
// VALUE KIND
// ============================================================================

/// The shape of an input that is not a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueKind {
    Integer,
    Float,
    Boolean,
    Text,
    List,
    Map,
    Null,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Text => "text",
            Self::List => "list",
            Self::Map => "map",
            Self::Null => "null",
        })
    }
}

// ============================================================================
// SHAPE + VALIDATABLE
// ============================================================================

/// How an input presents itself to the validator.
#[derive(Debug, Clone)]
pub enum Shape<'a> {
    Record(Cow<'a, Record>),
    Other(ValueKind),
}

/// Types that can be passed to [`validate`](crate::validate).
///
/// Implemented for [`Record`], [`Value`], structs declared with
/// [`record!`](crate::record!), and the common non-record types (which all
/// present as [`Shape::Other`]).
pub trait Validatable {
    fn shape(&self) -> Shape<'_>;
}

impl Validatable for Record {
    fn shape(&self) -> Shape<'_> {
        Shape::Record(Cow::Borrowed(self))
    }
}

impl<T: Validatable + ?Sized> Validatable for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Validatable + ?Sized> Validatable for Box<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

macro_rules! non_record {
    ($kind:ident => $($ty:ty),*) => {
        $(
            impl Validatable for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Other(ValueKind::$kind)
                }
            }
        )*
    };
}

non_record!(Integer => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
non_record!(Float => f32, f64);
non_record!(Boolean => bool);
non_record!(Text => char, str, String);
non_record!(Null => ());

impl<T: Validatable> Validatable for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(inner) => inner.shape(),
            None => Shape::Other(ValueKind::Null),
        }
    }
}

impl<T> Validatable for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(ValueKind::List)
    }
}

impl<T> Validatable for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(ValueKind::List)
    }
}

impl<T, const N: usize> Validatable for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(ValueKind::List)
    }
}

impl<K, V, S> Validatable for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(ValueKind::Map)
    }
}

impl<K, V> Validatable for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(ValueKind::Map)
    }
}

// ============================================================================
// VALUE
// ============================================================================

/// An untyped input, for callers that hold data rather than Rust structs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Value {
    Record(Record),
    Integer(i64),
    Text(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Null,
}

impl Validatable for Value {
    fn shape(&self) -> Shape<'_> {
        match self {
            Self::Record(record) => Shape::Record(Cow::Borrowed(record)),
            Self::Integer(_) => Shape::Other(ValueKind::Integer),
            Self::Text(_) => Shape::Other(ValueKind::Text),
            Self::List(_) => Shape::Other(ValueKind::List),
            Self::Map(_) => Shape::Other(ValueKind::Map),
            Self::Null => Shape::Other(ValueKind::Null),
        }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}
