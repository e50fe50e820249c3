//! # serde_star
//!
//! A Serde-compatible writer for STAR files, the block-structured plain-text format
//! used to exchange crystallography and cryo-EM metadata.
//!
//! ## What is STAR?
//!
//! A STAR file is a sequence of `data_` blocks. A block is either a list of
//! `_key value` pairs or a `loop_` table that declares its columns and then writes
//! one whitespace-separated row per line:
//!
//! ```text
//! # Created by the serde_star Rust crate (version 0.1.0) at 10:21:07 on 18/10/2026
//!
//!
//! data_optics
//!
//! _rlnImageSize\t\t\t256
//! _rlnOpticsGroupName\t\t\topticsGroup1
//!
//!
//! data_particles
//!
//! loop_
//! _rlnCoordinateX #1
//! _rlnMicrographName #2
//! 1024.000000\tmic_001.mrc
//! 2048.000000\t"mic 002.mrc"
//!
//!
//! ```
//!
//! ## Input shapes
//!
//! Whatever is passed in is first coerced into a [`Document`], an ordered mapping
//! from block name to [`DataBlock`]:
//!
//! - a [`Table`] becomes one loop block named `""`
//! - a mapping of scalars becomes one key-value block named `""`
//! - a mapping whose values are tables or mappings keeps one block per entry
//! - a sequence of blocks becomes blocks named `"0"`, `"1"`, ...
//!
//! Any `T: Serialize` can be turned into such an input with [`to_value`].
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use serde_star::{to_string, to_value, Table, Value, StarMap};
//!
//! #[derive(Serialize)]
//! struct Optics { rln_image_size: u32, rln_voltage: f64 }
//!
//! #[derive(Serialize)]
//! struct Particle { x: f64, y: f64 }
//!
//! let mut blocks = StarMap::new();
//! blocks.insert("optics".into(), to_value(&Optics { rln_image_size: 256, rln_voltage: 300.0 })?);
//! blocks.insert(
//!     "particles".into(),
//!     Value::Table(Table::from_records(&[Particle { x: 1.0, y: 2.0 }])?),
//! );
//!
//! let star = to_string(blocks)?;
//! assert!(star.contains("data_optics\n\n_rln_image_size\t\t\t256\n"));
//! assert!(star.contains("loop_\n_x #1\n_y #2\n1.000000\t2.000000\n"));
//! # Ok::<(), serde_star::Error>(())
//! ```
//!
//! ## Writing files
//!
//! [`write_file`] renames an existing destination to `<name>~` before writing, so the
//! previous generation is kept as a single backup.
//!
//! ## Demos
//!
//! See the `demos/` directory; run any of them with `cargo run --example <name>`.

pub mod block;
pub mod coerce;
pub mod error;
pub mod format;
pub mod fs;
pub mod macros;
pub mod map;
pub mod options;
pub mod provenance;
pub mod render;
pub mod ser;
pub mod table;
pub mod value;
pub mod writer;

pub use block::{DataBlock, Document};
pub use coerce::{coerce, Input};
pub use error::{Error, Result};
pub use format::quote;
pub use map::StarMap;
pub use options::{Delimiter, FloatFormat, StarOptions};
pub use provenance::{FixedProvenance, PackageProvenance, Provenance};
pub use render::{loop_block, render, simple_block};
pub use ser::{to_value, ValueSerializer};
pub use table::Table;
pub use value::{Number, Scalar, Value};
pub use writer::StarWriter;

use std::io;
use std::path::Path;

/// Renders `input` as a STAR document string with default options.
///
/// # Examples
///
/// ```rust
/// use serde_star::{star, to_string};
///
/// let star = to_string(star!({ "alpha": 1, "beta": "hi" })).unwrap();
/// assert!(star.ends_with("data_\n\n_alpha\t\t\t1\n_beta\t\t\thi\n\n\n"));
/// ```
///
/// # Errors
///
/// Returns an error if `input` has no supported shape or holds an unwritable value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(input: impl Into<Value>) -> Result<String> {
    to_string_with_options(input, StarOptions::default())
}

/// Renders `input` as a STAR document string with custom options.
///
/// # Errors
///
/// Returns an error if `input` has no supported shape or holds an unwritable value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(input: impl Into<Value>, options: StarOptions) -> Result<String> {
    let mut buffer = Vec::new();
    to_writer_with_options(&mut buffer, input, options)?;
    String::from_utf8(buffer).map_err(Error::custom)
}

/// Streams `input` as a STAR document into `writer` with default options.
///
/// # Errors
///
/// Returns an error if coercion or rendering fails, or writing to `writer` fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, input: impl Into<Value>) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, input, StarOptions::default())
}

/// Streams `input` as a STAR document into `writer` with custom options.
///
/// # Errors
///
/// Returns an error if coercion or rendering fails, or writing to `writer` fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(writer: W, input: impl Into<Value>, options: StarOptions) -> Result<()>
where
    W: io::Write,
{
    StarWriter::new(input)?
        .with_options(options)
        .write_to(writer)
}

/// Writes `input` to `path` with default options, keeping any previous file as `<path>~`.
///
/// # Errors
///
/// Returns an error if coercion, rendering, the backup or the write fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_file(path: impl AsRef<Path>, input: impl Into<Value>) -> Result<()> {
    write_file_with_options(path, input, StarOptions::default())
}

/// Writes `input` to `path` with custom options, keeping any previous file as `<path>~`.
///
/// # Errors
///
/// Returns an error if coercion, rendering, the backup or the write fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn write_file_with_options(
    path: impl AsRef<Path>,
    input: impl Into<Value>,
    options: StarOptions,
) -> Result<()> {
    StarWriter::new(input)?
        .with_options(options)
        .with_destination(path.as_ref())
        .write()
}
