//! The provenance comment that opens every STAR document.
//!
//! The line records which tool wrote the file, its version and when:
//!
//! ```text
//! # Created by the serde_star Rust crate (version 0.1.0) at 14:03:59 on 18/10/2026
//! ```
//!
//! Tools parse this comment, so the layout is fixed. The source of tool name,
//! version and time is injected through the [`Provenance`] trait, which lets tests
//! pin the clock with [`FixedProvenance`].

use chrono::{Local, NaiveDateTime};

/// Supplies the first line of a rendered document.
pub trait Provenance {
    fn header_line(&self) -> String;
}

impl<F> Provenance for F
where
    F: Fn() -> String,
{
    fn header_line(&self) -> String {
        self()
    }
}

/// Formats a provenance line for `tool` at `version`, stamped with `timestamp`.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use serde_star::provenance::header_line;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(7, 5, 0).unwrap();
/// assert_eq!(
///     header_line("serde_star Rust crate", "0.1.0", at),
///     "# Created by the serde_star Rust crate (version 0.1.0) at 07:05:00 on 09/03/2024"
/// );
/// ```
#[must_use]
pub fn header_line(tool: &str, version: &str, timestamp: NaiveDateTime) -> String {
    format!(
        "# Created by the {} (version {}) at {} on {}",
        tool,
        version,
        timestamp.format("%H:%M:%S"),
        timestamp.format("%d/%m/%Y")
    )
}

/// Stamps this crate's name and version with the local wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct PackageProvenance;

impl Provenance for PackageProvenance {
    fn header_line(&self) -> String {
        header_line(
            concat!(env!("CARGO_PKG_NAME"), " Rust crate"),
            env!("CARGO_PKG_VERSION"),
            Local::now().naive_local(),
        )
    }
}

/// A provenance with a fixed tool, version and timestamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedProvenance {
    pub tool: String,
    pub version: String,
    pub timestamp: NaiveDateTime,
}

impl FixedProvenance {
    #[must_use]
    pub fn new(tool: impl Into<String>, version: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        FixedProvenance {
            tool: tool.into(),
            version: version.into(),
            timestamp,
        }
    }
}

impl Provenance for FixedProvenance {
    fn header_line(&self) -> String {
        header_line(&self.tool, &self.version, self.timestamp)
    }
}
