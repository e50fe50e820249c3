//! Error types for STAR serialization.
//!
//! Every failure names the offending input: the block, column or key involved and
//! the shape that was found instead of the expected one.
//!
//! ## Error Categories
//!
//! - **Shape errors**: the caller input is not a table, mapping or sequence of blocks
//! - **Block errors**: a block holds something that cannot become a STAR value, or a
//!   name that cannot become a STAR tag
//! - **Table errors**: columns or rows of mismatched length
//! - **Output errors**: no destination configured, or the file system refused a write
//!
//! ## Examples
//!
//! ```rust
//! use serde_star::{to_string, Value, Error};
//!
//! let result = to_string(Value::from(42));
//! assert!(matches!(result, Err(Error::InvalidInputShape { .. })));
//! ```

use std::fmt;
use std::io;
use thiserror::Error;

/// Represents all possible errors that can occur while producing a STAR document.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Coercion received something that is neither a table, a mapping nor a sequence of blocks
    #[error("Invalid input shape: expected a table, a mapping or a sequence of blocks, found {found}")]
    InvalidInputShape { found: String },

    /// `write` was requested without a destination path
    #[error("Cannot write a STAR document without a destination")]
    NoDestination,

    /// A value that must be a scalar holds a nested structure
    #[error("Non-scalar value for '{key}': expected a string, number, boolean or null, found {found}")]
    NonScalarValue { key: String, found: String },

    /// A column disagrees with the row count of its table
    #[error("Column '{column}' has {found} values but the table has {expected} rows")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },

    /// A row disagrees with the column count of its table
    #[error("Row {row} has {found} values but the table has {expected} columns")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// An entry of a multi-block mapping is not a block
    #[error("Block '{name}' is not a table or a mapping of scalars, found {found}")]
    UnsupportedBlock { name: String, found: String },

    /// A value cannot be written without breaking the line structure of its block
    #[error("Cannot write value {value:?} in block '{block}': {reason}")]
    UnrepresentableValue {
        block: String,
        value: String,
        reason: String,
    },

    /// A block name, column name or key cannot be written as a STAR tag
    #[error("Cannot write name {name:?} in block '{block}': {reason}")]
    InvalidName {
        block: String,
        name: String,
        reason: String,
    },

    /// The float format pattern is not understood
    #[error("Invalid float format '{0}': expected %.Nf, %.Ne, %.NE, %g or %.Ng")]
    InvalidFloatFormat(String),

    /// IO error during backup or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an input shape error naming the kind of value found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_star::Error;
    ///
    /// let err = Error::invalid_input_shape("integer");
    /// assert!(err.to_string().contains("found integer"));
    /// ```
    pub fn invalid_input_shape(found: &str) -> Self {
        Error::InvalidInputShape {
            found: found.to_string(),
        }
    }

    /// Creates an error for a nested value where a scalar is required.
    pub fn non_scalar(key: &str, found: &str) -> Self {
        Error::NonScalarValue {
            key: key.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an error for a multi-block mapping entry that is not a block.
    pub fn unsupported_block(name: &str, found: &str) -> Self {
        Error::UnsupportedBlock {
            name: name.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an error for a value that would corrupt the rendered block.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_star::Error;
    ///
    /// let err = Error::unrepresentable("particles", "a\nb", "contains a line break");
    /// assert!(err.to_string().contains("particles"));
    /// ```
    pub fn unrepresentable(block: &str, value: &str, reason: &str) -> Self {
        Error::UnrepresentableValue {
            block: block.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_name(block: &str, name: &str, reason: &str) -> Self {
        Error::InvalidName {
            block: block.to_string(),
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for backup or writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_input() {
        let err = Error::ColumnLength {
            column: "rlnDefocusU".to_string(),
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "Column 'rlnDefocusU' has 2 values but the table has 3 rows"
        );

        let err = Error::unsupported_block("optics", "integer");
        assert!(err.to_string().contains("'optics'"));
        assert!(err.to_string().contains("integer"));
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("denied")));
    }
}
