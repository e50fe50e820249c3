//! Dynamic value representation for STAR input data.
//!
//! This module provides the two value types the writer works with:
//!
//! - [`Value`]: any caller-supplied input shape (scalars, sequences, mappings, tables).
//!   Coercion inspects it once to decide which blocks a document holds.
//! - [`Scalar`]: a single cell of a loop block or value of a key-value block.
//! - [`Number`]: integer or floating point payload of a [`Value`].
//!
//! ## Creating Values
//!
//! ```rust
//! use serde_star::{star, Value};
//!
//! let missing = Value::Null;
//! let number = Value::from(42);
//! let text = Value::from("rlnMicrographName");
//!
//! let block = star!({
//!     "rlnImageSize": 256,
//!     "rlnImagePixelSize": 1.06
//! });
//! assert!(block.is_object());
//! ```

use crate::{Error, Result, StarMap, Table};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

/// A dynamically-typed caller input.
///
/// # Examples
///
/// ```rust
/// use serde_star::{Value, Number};
///
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(num.is_number());
/// assert!(text.is_string());
/// assert!(!text.is_block());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(StarMap),
    Table(Table),
}

/// A numeric value that can be an integer or a float.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `f64`.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{:?}", fl),
        }
    }
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Value::Table(_))
    }

    /// Returns `true` for block-shaped containers: tables and mappings.
    ///
    /// This is the test coercion uses to tell a mapping of blocks from a
    /// single key-value block.
    #[inline]
    #[must_use]
    pub const fn is_block(&self) -> bool {
        matches!(self, Value::Table(_) | Value::Object(_))
    }

    /// Returns `true` for values that fit in a single cell.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
        )
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&StarMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }

    /// A short name of this value's shape, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(Number::Integer(_)) => "integer",
            Value::Number(Number::Float(_)) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "sequence",
            Value::Object(_) => "mapping",
            Value::Table(_) => "table",
        }
    }

    /// Converts this value into a cell value, naming `key` if it is nested.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonScalarValue`] for sequences, mappings and tables.
    pub fn into_scalar(self, key: &str) -> Result<Scalar> {
        match self {
            Value::Null => Ok(Scalar::Missing),
            Value::Bool(b) => Ok(Scalar::Bool(b)),
            Value::Number(Number::Integer(i)) => Ok(Scalar::Integer(i)),
            Value::Number(Number::Float(f)) => Ok(Scalar::from(f)),
            Value::String(s) => Ok(Scalar::String(s)),
            other => Err(Error::non_scalar(key, other.kind())),
        }
    }
}

/// A single STAR value: one cell of a loop row or one entry of a key-value block.
///
/// Missing values render as the configured missing-value token so every loop row
/// keeps the same number of fields.
///
/// # Examples
///
/// ```rust
/// use serde_star::Scalar;
///
/// assert_eq!(Scalar::from(3), Scalar::Integer(3));
/// assert_eq!(Scalar::from(f64::NAN), Scalar::Missing);
/// assert_eq!(Scalar::from(None::<i32>), Scalar::Missing);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Scalar {
    #[default]
    Missing,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Scalar {
    #[inline]
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Scalar::Missing)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Missing => Ok(()),
            Scalar::Bool(true) => f.write_str("True"),
            Scalar::Bool(false) => f.write_str("False"),
            Scalar::Integer(i) => write!(f, "{}", i),
            Scalar::Float(fl) => write!(f, "{:?}", fl),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

impl TryFrom<Value> for Scalar {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.into_scalar("")
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Integer(value as i64)
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::Integer(value as i64))
                }
            }

            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::Integer(value as i64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::Float(value as f64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<StarMap> for Value {
    fn from(value: StarMap) -> Self {
        Value::Object(value)
    }
}

impl From<Table> for Value {
    fn from(value: Table) -> Self {
        Value::Table(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::from(value as f64)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Scalar::Missing
        } else {
            Scalar::Float(value)
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Scalar::Missing, Into::into)
    }
}

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Scalar::Missing => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Integer(i) => serializer.serialize_i64(*i),
            Scalar::Float(f) => serializer.serialize_f64(*f),
            Scalar::String(s) => serializer.serialize_str(s),
        }
    }
}

/// Tables serialize as a sequence of row records, so passing one back through
/// [`to_value`](crate::to_value) yields a sequence of mappings.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Table(table) => {
                let mut seq = serializer.serialize_seq(Some(table.n_rows()))?;
                for row in table.rows() {
                    let record: IndexMap<&str, &Scalar> =
                        table.column_names().zip(row.cells()).collect();
                    seq.serialize_element(&record)?;
                }
                seq.end()
            }
        }
    }
}
