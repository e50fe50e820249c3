//! Data blocks and the documents that hold them.
//!
//! A STAR document is a sequence of named `data_` sections. Each section is either a
//! loop block backed by a [`Table`] or a key-value block backed by an ordered
//! mapping of [`Scalar`]s.

use crate::{Scalar, Table};
use indexmap::IndexMap;

/// One named section of a STAR document.
#[derive(Clone, Debug, PartialEq)]
pub enum DataBlock {
    /// Rendered as a `loop_` block.
    Table(Table),
    /// Rendered as `_key value` lines without `loop_`.
    Mapping(IndexMap<String, Scalar>),
}

impl DataBlock {
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, DataBlock::Table(_))
    }

    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, DataBlock::Mapping(_))
    }
}

impl From<Table> for DataBlock {
    fn from(table: Table) -> Self {
        DataBlock::Table(table)
    }
}

impl From<IndexMap<String, Scalar>> for DataBlock {
    fn from(mapping: IndexMap<String, Scalar>) -> Self {
        DataBlock::Mapping(mapping)
    }
}

/// An ordered mapping from block name to [`DataBlock`].
///
/// Names are unique; insertion order is emission order. The empty string is a
/// valid name and renders as a bare `data_` line.
///
/// # Examples
///
/// ```rust
/// use serde_star::{DataBlock, Document, Table};
///
/// let mut document = Document::new();
/// document.insert("optics", Table::new());
/// document.insert("particles", Table::new());
///
/// assert_eq!(document.names().collect::<Vec<_>>(), vec!["optics", "particles"]);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Document {
    blocks: IndexMap<String, DataBlock>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a block, returning the block previously stored under `name`.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        block: impl Into<DataBlock>,
    ) -> Option<DataBlock> {
        self.blocks.insert(name.into(), block.into())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DataBlock> {
        self.blocks.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.blocks.keys().map(String::as_str)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, DataBlock> {
        self.blocks.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a DataBlock);
    type IntoIter = indexmap::map::Iter<'a, String, DataBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl<N: Into<String>> FromIterator<(N, DataBlock)> for Document {
    fn from_iter<T: IntoIterator<Item = (N, DataBlock)>>(iter: T) -> Self {
        Document {
            blocks: iter
                .into_iter()
                .map(|(name, block)| (name.into(), block))
                .collect(),
        }
    }
}
