//! Relational tables rendered as STAR `loop_` blocks.
//!
//! A [`Table`] is an ordered list of named columns holding [`Scalar`] cells. All
//! columns have the same length; rows are defined by position. The constructors
//! check this, so a table that exists is always rectangular.
//!
//! ## Examples
//!
//! ```rust
//! use serde_star::{Scalar, Table};
//!
//! let table = Table::new()
//!     .with_column("rlnCoordinateX", [12.0, 48.5])?
//!     .with_column("rlnMicrographName", ["mic1.mrc", "mic2.mrc"])?;
//!
//! assert_eq!(table.n_rows(), 2);
//! assert_eq!(table.column("rlnCoordinateX"), Some(&[Scalar::Float(12.0), Scalar::Float(48.5)][..]));
//! # Ok::<(), serde_star::Error>(())
//! ```

use crate::{to_value, Error, Result, Scalar, Value};
use indexmap::IndexMap;
use serde::Serialize;

/// A named column of a [`Table`].
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Scalar>,
}

impl Column {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn values(&self) -> &[Scalar] {
        &self.values
    }
}

/// An ordered, rectangular table of scalar cells.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    /// Creates a table with no columns and no rows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column, consuming and returning the table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnLength`] if the table already has columns and `values`
    /// does not match its row count.
    pub fn with_column<I, S>(mut self, name: impl Into<String>, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        self.push_column(name, values.into_iter().map(Into::into).collect())?;
        Ok(self)
    }

    /// Appends a column.
    ///
    /// The first column fixes the row count of the table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnLength`] when `values` disagrees with the row count.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<Scalar>) -> Result<()> {
        let name = name.into();
        if !self.columns.is_empty() && values.len() != self.n_rows {
            return Err(Error::ColumnLength {
                column: name,
                expected: self.n_rows,
                found: values.len(),
            });
        }
        self.n_rows = values.len();
        self.columns.push(Column { name, values });
        Ok(())
    }

    /// Appends a row with one value per column, in column order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowLength`] when the row width differs from the column count,
    /// and an error for a table without columns, which has no way to write a row.
    pub fn push_row(&mut self, row: Vec<Scalar>) -> Result<()> {
        if self.columns.is_empty() {
            return Err(Error::custom("cannot add a row to a table without columns"));
        }
        if row.len() != self.columns.len() {
            return Err(Error::RowLength {
                row: self.n_rows,
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        for (column, value) in self.columns.iter_mut().zip(row) {
            column.values.push(value);
        }
        self.n_rows += 1;
        Ok(())
    }

    /// Builds a table from serializable records, one row per record.
    ///
    /// Columns are the union of the records' field names in first-seen order.
    /// A field absent from a record is a missing cell.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde::Serialize;
    /// use serde_star::Table;
    ///
    /// #[derive(Serialize)]
    /// struct Particle { x: f64, y: f64, group: u32 }
    ///
    /// let table = Table::from_records(&[
    ///     Particle { x: 1.0, y: 2.0, group: 1 },
    ///     Particle { x: 3.0, y: 4.0, group: 2 },
    /// ])?;
    /// assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["x", "y", "group"]);
    /// # Ok::<(), serde_star::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInputShape`] if a record is not a struct or map, and
    /// [`Error::NonScalarValue`] if a field holds a nested structure.
    pub fn from_records<T: Serialize>(records: &[T]) -> Result<Self> {
        let mut columns: IndexMap<String, Vec<Scalar>> = IndexMap::new();
        for (row, record) in records.iter().enumerate() {
            let fields = match to_value(record)? {
                Value::Object(fields) => fields,
                other => return Err(Error::invalid_input_shape(other.kind())),
            };
            for (key, value) in fields {
                let scalar = value.into_scalar(&key)?;
                let column = columns.entry(key).or_insert_with(|| vec![Scalar::Missing; row]);
                column.push(scalar);
            }
            for column in columns.values_mut() {
                column.resize(row + 1, Scalar::Missing);
            }
        }

        let mut table = Table::new();
        for (name, values) in columns {
            table.push_column(name, values)?;
        }
        Ok(table)
    }

    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    #[must_use]
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in table order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(Column::name)
    }

    /// Returns the values of the first column called `name`.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[Scalar]> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .map(Column::values)
    }

    /// Iterates rows in table order.
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            table: self,
            next: 0,
        }
    }
}

/// A borrowed row of a [`Table`].
#[derive(Clone, Copy, Debug)]
pub struct Row<'a> {
    table: &'a Table,
    index: usize,
}

impl<'a> Row<'a> {
    /// Position of this row in its table.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cells of this row in column order.
    pub fn cells(&self) -> impl Iterator<Item = &'a Scalar> + 'a {
        let index = self.index;
        self.table
            .columns
            .iter()
            .map(move |column| &column.values[index])
    }
}

/// Iterator over the rows of a [`Table`].
#[derive(Clone, Debug)]
pub struct Rows<'a> {
    table: &'a Table,
    next: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Row<'a>> {
        if self.next >= self.table.n_rows {
            return None;
        }
        let row = Row {
            table: self.table,
            index: self.next,
        };
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.n_rows - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}
