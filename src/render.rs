//! Lazy rendering of blocks and documents into STAR lines.
//!
//! Every renderer is a forward-only iterator of `Result<String>` lines without
//! terminators. Only the current row is held in memory, so a large table streams
//! straight into the writer. The first error ends the iteration.
//!
//! ## Block layout
//!
//! ```text
//! data_particles          data_optics
//!
//! loop_                   _rlnImageSize\t\t\t256
//! _rlnCoordinateX #1      _rlnVoltage\t\t\t300.0
//! _rlnCoordinateY #2
//! 12.000000\t48.000000
//!
//!
//! ```
//!
//! A loop block (left) declares its columns after `loop_` and then writes one row
//! per line. A key-value block (right) writes one `_key value` line per entry. Both
//! end with two empty lines.
//!
//! Names are checked as they are reached: a block name, column name or key with
//! whitespace in it ends the block with [`Error::InvalidName`](crate::Error::InvalidName).

use crate::format::{check_block_name, check_tag, key_value_field, loop_field};
use crate::provenance::Provenance;
use crate::table::{Row, Rows};
use crate::{DataBlock, Document, Result, Scalar, StarOptions, Table};
use indexmap::IndexMap;
use log::debug;

const TRAILING_BLANKS: u8 = 2;

/// Renders `table` as a `loop_` block named `name`.
///
/// # Examples
///
/// ```rust
/// use serde_star::{loop_block, FloatFormat, StarOptions, Table};
///
/// let table = Table::new()
///     .with_column("x", [1.0, 2.5])?
///     .with_column("y", ["a b", ""])?;
/// let options = StarOptions::new().with_float_format(FloatFormat::Fixed(2));
///
/// let lines = loop_block("", &table, &options).collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(
///     lines,
///     vec!["data_", "", "loop_", "_x #1", "_y #2", "1.00\t\"a b\"", "2.50\t\"\"", "", ""]
/// );
/// # Ok::<(), serde_star::Error>(())
/// ```
pub fn loop_block<'a>(name: &'a str, table: &'a Table, options: &'a StarOptions) -> LoopBlockLines<'a> {
    LoopBlockLines {
        name,
        table,
        options,
        stage: LoopStage::Name,
    }
}

/// Renders `mapping` as a key-value block named `name`.
///
/// # Examples
///
/// ```rust
/// use indexmap::IndexMap;
/// use serde_star::{simple_block, Scalar, StarOptions};
///
/// let mut mapping = IndexMap::new();
/// mapping.insert("alpha".to_string(), Scalar::Integer(1));
/// mapping.insert("beta".to_string(), Scalar::from("hi"));
/// let options = StarOptions::new().with_key_value_separator(" ");
///
/// let lines = simple_block("", &mapping, &options).collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(lines, vec!["data_", "", "_alpha 1", "_beta hi", "", ""]);
/// # Ok::<(), serde_star::Error>(())
/// ```
pub fn simple_block<'a>(
    name: &'a str,
    mapping: &'a IndexMap<String, Scalar>,
    options: &'a StarOptions,
) -> SimpleBlockLines<'a> {
    SimpleBlockLines {
        name,
        options,
        stage: SimpleStage::Name,
        entries: mapping.iter(),
    }
}

/// Renders a whole document: the provenance line, two empty lines, then every
/// block in document order.
pub fn render<'a>(
    document: &'a Document,
    options: &'a StarOptions,
    provenance: &dyn Provenance,
) -> DocumentLines<'a> {
    DocumentLines {
        header: Some(provenance.header_line()),
        leading_blanks: TRAILING_BLANKS,
        blocks: document.iter(),
        current: None,
        options,
        failed: false,
    }
}

enum LoopStage<'a> {
    Name,
    Blank,
    Loop,
    Columns(usize),
    Rows(Rows<'a>),
    Trailer(u8),
    Done,
}

/// Lines of a `loop_` block. Created by [`loop_block`].
pub struct LoopBlockLines<'a> {
    name: &'a str,
    table: &'a Table,
    options: &'a StarOptions,
    stage: LoopStage<'a>,
}

impl<'a> LoopBlockLines<'a> {
    fn column_line(&self, index: usize, column: &str) -> Result<String> {
        check_tag(column, self.name)?;
        if self.options.column_numbers {
            Ok(format!("_{} #{}", column, index + 1))
        } else {
            Ok(format!("_{}", column))
        }
    }
}

impl<'a> Iterator for LoopBlockLines<'a> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Result<String>> {
        loop {
            match &mut self.stage {
                LoopStage::Name => {
                    let line = data_line(self.name);
                    self.stage = if line.is_ok() {
                        LoopStage::Blank
                    } else {
                        LoopStage::Done
                    };
                    return Some(line);
                }
                LoopStage::Blank => {
                    self.stage = LoopStage::Loop;
                    return Some(Ok(String::new()));
                }
                LoopStage::Loop => {
                    self.stage = LoopStage::Columns(0);
                    return Some(Ok("loop_".to_string()));
                }
                LoopStage::Columns(index) => {
                    let index = *index;
                    match self.table.columns().get(index) {
                        Some(column) => {
                            let line = self.column_line(index, column.name());
                            self.stage = if line.is_ok() {
                                LoopStage::Columns(index + 1)
                            } else {
                                LoopStage::Done
                            };
                            return Some(line);
                        }
                        None => self.stage = LoopStage::Rows(self.table.rows()),
                    }
                }
                LoopStage::Rows(rows) => match rows.next() {
                    Some(row) => {
                        let line = row_line(row, self.name, self.options);
                        if line.is_err() {
                            self.stage = LoopStage::Done;
                        }
                        return Some(line);
                    }
                    None => self.stage = LoopStage::Trailer(0),
                },
                LoopStage::Trailer(emitted) => {
                    if *emitted < TRAILING_BLANKS {
                        *emitted += 1;
                        return Some(Ok(String::new()));
                    }
                    self.stage = LoopStage::Done;
                }
                LoopStage::Done => return None,
            }
        }
    }
}

fn data_line(name: &str) -> Result<String> {
    check_block_name(name)?;
    Ok(format!("data_{}", name))
}

fn row_line(row: Row<'_>, block: &str, options: &StarOptions) -> Result<String> {
    let separator = options.delimiter.as_str();
    let mut line = String::new();
    for (index, cell) in row.cells().enumerate() {
        if index > 0 {
            line.push_str(separator);
        }
        line.push_str(&loop_field(cell, block, options)?);
    }
    Ok(line)
}

enum SimpleStage {
    Name,
    Blank,
    Entries,
    Trailer(u8),
    Done,
}

/// Lines of a key-value block. Created by [`simple_block`].
pub struct SimpleBlockLines<'a> {
    name: &'a str,
    options: &'a StarOptions,
    stage: SimpleStage,
    entries: indexmap::map::Iter<'a, String, Scalar>,
}

impl<'a> Iterator for SimpleBlockLines<'a> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Result<String>> {
        loop {
            match &mut self.stage {
                SimpleStage::Name => {
                    let line = data_line(self.name);
                    self.stage = if line.is_ok() {
                        SimpleStage::Blank
                    } else {
                        SimpleStage::Done
                    };
                    return Some(line);
                }
                SimpleStage::Blank => {
                    self.stage = SimpleStage::Entries;
                    return Some(Ok(String::new()));
                }
                SimpleStage::Entries => match self.entries.next() {
                    Some((key, value)) => {
                        let line = check_tag(key, self.name)
                            .and_then(|()| key_value_field(value, self.name, self.options))
                            .map(|field| {
                                format!("_{}{}{}", key, self.options.key_value_separator, field)
                            });
                        if line.is_err() {
                            self.stage = SimpleStage::Done;
                        }
                        return Some(line);
                    }
                    None => self.stage = SimpleStage::Trailer(0),
                },
                SimpleStage::Trailer(emitted) => {
                    if *emitted < TRAILING_BLANKS {
                        *emitted += 1;
                        return Some(Ok(String::new()));
                    }
                    self.stage = SimpleStage::Done;
                }
                SimpleStage::Done => return None,
            }
        }
    }
}

enum BlockLines<'a> {
    Loop(LoopBlockLines<'a>),
    Simple(SimpleBlockLines<'a>),
}

impl<'a> BlockLines<'a> {
    fn new(name: &'a str, block: &'a DataBlock, options: &'a StarOptions) -> Self {
        match block {
            DataBlock::Table(table) => {
                debug!(
                    "rendering loop block '{}' ({} columns, {} rows)",
                    name,
                    table.n_columns(),
                    table.n_rows()
                );
                BlockLines::Loop(loop_block(name, table, options))
            }
            DataBlock::Mapping(mapping) => {
                debug!("rendering key-value block '{}' ({} entries)", name, mapping.len());
                BlockLines::Simple(simple_block(name, mapping, options))
            }
        }
    }
}

impl Iterator for BlockLines<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Result<String>> {
        match self {
            BlockLines::Loop(lines) => lines.next(),
            BlockLines::Simple(lines) => lines.next(),
        }
    }
}

/// Lines of a whole document. Created by [`render`].
pub struct DocumentLines<'a> {
    header: Option<String>,
    leading_blanks: u8,
    blocks: indexmap::map::Iter<'a, String, DataBlock>,
    current: Option<BlockLines<'a>>,
    options: &'a StarOptions,
    failed: bool,
}

impl<'a> Iterator for DocumentLines<'a> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Result<String>> {
        if self.failed {
            return None;
        }
        if let Some(header) = self.header.take() {
            return Some(Ok(header));
        }
        if self.leading_blanks > 0 {
            self.leading_blanks -= 1;
            return Some(Ok(String::new()));
        }
        loop {
            if let Some(lines) = &mut self.current {
                match lines.next() {
                    Some(line) => {
                        self.failed = line.is_err();
                        return Some(line);
                    }
                    None => self.current = None,
                }
            }
            let (name, block) = self.blocks.next()?;
            self.current = Some(BlockLines::new(name, block, self.options));
        }
    }
}
