//! Coercion of caller input into a [`Document`].
//!
//! The caller may hand over a single table, a mapping or a sequence of blocks. The
//! shape is decided once, at the boundary, by converting the [`Value`] into an
//! [`Input`]; the renderers only ever see the resulting [`Document`].
//!
//! | Input                              | Document                              |
//! |------------------------------------|---------------------------------------|
//! | table                              | one loop block named `""`             |
//! | mapping with any block-shaped value | one block per entry, names kept      |
//! | mapping of scalars only            | one key-value block named `""`        |
//! | sequence of blocks                 | blocks named `"0"`, `"1"`, ...        |
//!
//! A mapping counts as a mapping of blocks as soon as one of its values is a table
//! or a mapping. Entries of such a mapping that are not blocks are rejected with
//! [`Error::UnsupportedBlock`].

use crate::{DataBlock, Document, Error, Result, Scalar, StarMap, Table, Value};
use indexmap::IndexMap;
use log::debug;

/// Caller input classified by shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    Table(Table),
    Mapping(StarMap),
    Sequence(Vec<Value>),
}

impl TryFrom<Value> for Input {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Table(table) => Ok(Input::Table(table)),
            Value::Object(map) => Ok(Input::Mapping(map)),
            Value::Array(values) => Ok(Input::Sequence(values)),
            other => Err(Error::invalid_input_shape(other.kind())),
        }
    }
}

/// Coerces any supported input shape into an ordered document.
///
/// # Examples
///
/// ```rust
/// use serde_star::{coerce, star};
///
/// let document = coerce(star!({ "alpha": 1, "beta": "hi" }))?;
/// assert_eq!(document.names().collect::<Vec<_>>(), vec![""]);
///
/// let document = coerce(star!([{ "a": 1 }, { "b": 2 }]))?;
/// assert_eq!(document.names().collect::<Vec<_>>(), vec!["0", "1"]);
/// # Ok::<(), serde_star::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInputShape`] for scalars, and block-level errors for
/// entries that cannot be turned into a block.
pub fn coerce(input: impl Into<Value>) -> Result<Document> {
    Input::try_from(input.into())?.into_document()
}

impl Input {
    /// Builds the document for this input.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry of a mapping or sequence is not a block.
    pub fn into_document(self) -> Result<Document> {
        let mut document = Document::new();
        match self {
            Input::Table(table) => {
                debug!("coercing single table into one unnamed block");
                document.insert("", table);
            }
            Input::Mapping(map) if map.values().any(Value::is_block) => {
                debug!("coercing mapping of {} blocks", map.len());
                for (name, value) in map {
                    let block = into_block(&name, value)?;
                    document.insert(name, block);
                }
            }
            Input::Mapping(map) => {
                debug!("coercing mapping of {} scalars into one unnamed block", map.len());
                document.insert("", scalar_mapping(map)?);
            }
            Input::Sequence(values) => {
                debug!("coercing sequence of {} blocks", values.len());
                for (index, value) in values.into_iter().enumerate() {
                    let name = index.to_string();
                    let block = into_block(&name, value)?;
                    document.insert(name, block);
                }
            }
        }
        Ok(document)
    }
}

fn into_block(name: &str, value: Value) -> Result<DataBlock> {
    match value {
        Value::Table(table) => Ok(DataBlock::Table(table)),
        Value::Object(map) => Ok(DataBlock::Mapping(scalar_mapping(map)?)),
        other => Err(Error::unsupported_block(name, other.kind())),
    }
}

fn scalar_mapping(map: StarMap) -> Result<IndexMap<String, Scalar>> {
    map.into_iter()
        .map(|(key, value)| {
            let scalar = value.into_scalar(&key)?;
            Ok((key, scalar))
        })
        .collect()
}
