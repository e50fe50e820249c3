//! Writing documents to files.
//!
//! [`StarWriter`] ties a coerced [`Document`] to its [`StarOptions`], a provenance
//! source, an optional destination and the file system used to reach it.
//!
//! ## Backup-then-write
//!
//! If the destination already exists it is renamed to `<name>~` before the first
//! byte of the new document is written; an older `<name>~` is deleted first. The
//! document is rendered once before any of this, so a value or name that cannot be
//! written leaves both files untouched. If writing then fails for I/O reasons, the
//! previous content is still available in the backup.
//!
//! ```rust,no_run
//! use serde_star::{star, StarWriter};
//!
//! let writer = StarWriter::new(star!({ "rlnImageSize": 256 }))?
//!     .with_destination("optics.star");
//! writer.write()?;
//! # Ok::<(), serde_star::Error>(())
//! ```

use crate::fs::{backup_if_exists, FileSystem, LocalFileSystem};
use crate::provenance::{PackageProvenance, Provenance};
use crate::render::{render, DocumentLines};
use crate::{coerce, Document, Error, Result, StarOptions, Value};
use log::info;
use std::fmt;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Renders a document and writes it to a destination.
pub struct StarWriter {
    document: Document,
    options: StarOptions,
    destination: Option<PathBuf>,
    provenance: Box<dyn Provenance>,
    fs: Box<dyn FileSystem>,
}

impl StarWriter {
    /// Coerces `input` into a document and wraps it with default options.
    ///
    /// # Errors
    ///
    /// Returns the coercion error if `input` has no supported shape.
    pub fn new(input: impl Into<Value>) -> Result<Self> {
        Ok(Self::from_document(coerce(input)?))
    }

    /// Wraps an already coerced document.
    #[must_use]
    pub fn from_document(document: Document) -> Self {
        StarWriter {
            document,
            options: StarOptions::default(),
            destination: None,
            provenance: Box::new(PackageProvenance),
            fs: Box::new(LocalFileSystem),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: StarOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Replaces the source of the leading comment line.
    #[must_use]
    pub fn with_provenance(mut self, provenance: impl Provenance + 'static) -> Self {
        self.provenance = Box::new(provenance);
        self
    }

    #[must_use]
    pub fn with_file_system(mut self, fs: impl FileSystem + 'static) -> Self {
        self.fs = Box::new(fs);
        self
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn options(&self) -> &StarOptions {
        &self.options
    }

    #[must_use]
    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    /// The rendered lines, without line terminators.
    pub fn lines(&self) -> DocumentLines<'_> {
        render(&self.document, &self.options, self.provenance.as_ref())
    }

    /// Streams the rendered document into `writer`, one `\n`-terminated line at a time.
    ///
    /// # Errors
    ///
    /// Returns the first rendering error, or an I/O error from `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        for line in self.lines() {
            writer.write_all(line?.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Backs up any existing destination file, then writes the document to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDestination`] before any I/O if no destination was set, and
    /// any rendering error before the destination or its backup is touched. Otherwise
    /// returns backup and I/O errors.
    pub fn write(&self) -> Result<()> {
        let destination = self.destination.as_deref().ok_or(Error::NoDestination)?;
        // Rendering is deterministic, so a document that renders here cannot fail
        // halfway through the file.
        self.lines().try_for_each(|line| line.map(drop))?;
        if let Some(backup) = backup_if_exists(self.fs.as_ref(), destination)? {
            info!("moved existing {} to {}", destination.display(), backup.display());
        }
        let file = self.fs.create(destination)?;
        self.write_to(BufWriter::new(file))?;
        info!(
            "wrote {} blocks to {}",
            self.document.len(),
            destination.display()
        );
        Ok(())
    }
}

impl fmt::Debug for StarWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StarWriter")
            .field("document", &self.document)
            .field("options", &self.options)
            .field("destination", &self.destination)
            .finish_non_exhaustive()
    }
}
