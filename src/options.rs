//! Configuration options for STAR serialization.
//!
//! This module provides types to customize STAR output:
//!
//! - [`StarOptions`]: Main configuration struct
//! - [`Delimiter`]: Field separator used between the cells of a loop row
//! - [`FloatFormat`]: printf-style pattern applied to floating point cells
//!
//! ## Examples
//!
//! ```rust
//! use serde_star::{Delimiter, FloatFormat, StarOptions};
//!
//! let options = StarOptions::new()
//!     .with_delimiter(Delimiter::Space)
//!     .with_float_format(FloatFormat::Fixed(2))
//!     .with_na_rep("nan");
//! assert_eq!(options.delimiter.as_str(), " ");
//! ```

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Field separator between the cells of a loop row.
///
/// STAR readers split rows on whitespace, so tab and space are the usual choices.
///
/// # Examples
///
/// ```rust
/// use serde_star::Delimiter;
///
/// assert_eq!(Delimiter::Tab.as_str(), "\t");
/// assert_eq!(Delimiter::Space.as_str(), " ");
/// assert_eq!(Delimiter::Custom("  ".to_string()).as_str(), "  ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Tab,
    Space,
    Custom(String),
}

impl Delimiter {
    /// Returns the string representation of this delimiter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Delimiter::Tab => "\t",
            Delimiter::Space => " ",
            Delimiter::Custom(sep) => sep,
        }
    }
}

/// printf-style pattern for floating point cells in loop blocks.
///
/// Patterns are applied uniformly regardless of magnitude.
///
/// # Examples
///
/// ```rust
/// use serde_star::FloatFormat;
///
/// assert_eq!("%.6f".parse::<FloatFormat>().unwrap(), FloatFormat::Fixed(6));
/// assert_eq!(FloatFormat::Fixed(2).format(2.5), "2.50");
/// assert_eq!(FloatFormat::Exponent { precision: 3, upper: false }.format(1234.0), "1.234e+03");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatFormat {
    /// `%.Nf`: fixed number of decimal places
    Fixed(usize),
    /// `%.Ne` / `%.NE`: scientific notation with a signed, two digit exponent
    Exponent { precision: usize, upper: bool },
    /// `%g` / `%.Ng`: N significant digits (6 for `%g`) without trailing zeros, in
    /// exponent form when the exponent is below -4 or at least N
    General(usize),
}

impl Default for FloatFormat {
    fn default() -> Self {
        FloatFormat::Fixed(6)
    }
}

impl FloatFormat {
    /// Formats `value` with this pattern.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        match *self {
            FloatFormat::Fixed(precision) => format!("{:.*}", precision, value),
            FloatFormat::Exponent { precision, upper } => {
                let rendered = c_exponent(&format!("{:.*e}", precision, value));
                if upper {
                    rendered.to_uppercase()
                } else {
                    rendered
                }
            }
            FloatFormat::General(precision) => general(value, precision.max(1)),
        }
    }
}

fn general(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return format!("{}", value).to_lowercase();
    }
    let scientific = format!("{:.*e}", precision - 1, value);
    let exponent = scientific
        .split_once('e')
        .and_then(|(_, exponent)| exponent.parse::<i64>().ok())
        .unwrap_or(0);
    if exponent < -4 || exponent >= precision as i64 {
        let (mantissa, exponent) = scientific.split_at(scientific.find('e').unwrap_or(0));
        return c_exponent(&format!("{}{}", strip_fraction_zeros(mantissa), exponent));
    }
    let decimals = (precision as i64 - 1 - exponent) as usize;
    strip_fraction_zeros(&format!("{:.*}", decimals, value)).to_string()
}

fn strip_fraction_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

// Rust writes `1.5e3`; printf writes `1.5e+03`.
fn c_exponent(rust: &str) -> String {
    match rust.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => rust.to_string(),
    }
}

impl FromStr for FloatFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "%g" {
            return Ok(FloatFormat::General(6));
        }
        let invalid = || Error::InvalidFloatFormat(s.to_string());
        let body = s.strip_prefix("%.").ok_or_else(invalid)?;
        let conversion = body.chars().last().ok_or_else(invalid)?;
        let digits = &body[..body.len() - conversion.len_utf8()];
        let precision: usize = digits.parse().map_err(|_| invalid())?;
        match conversion {
            'f' => Ok(FloatFormat::Fixed(precision)),
            'e' => Ok(FloatFormat::Exponent {
                precision,
                upper: false,
            }),
            'E' => Ok(FloatFormat::Exponent {
                precision,
                upper: true,
            }),
            'g' => Ok(FloatFormat::General(precision)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for FloatFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatFormat::Fixed(precision) => write!(f, "%.{}f", precision),
            FloatFormat::Exponent { precision, upper } => {
                write!(f, "%.{}{}", precision, if *upper { 'E' } else { 'e' })
            }
            FloatFormat::General(6) => f.write_str("%g"),
            FloatFormat::General(precision) => write!(f, "%.{}g", precision),
        }
    }
}

/// Configuration options for STAR serialization.
///
/// Options are immutable once built and are passed by reference into the renderers.
///
/// # Examples
///
/// ```rust
/// use serde_star::StarOptions;
///
/// let options = StarOptions::new();
/// assert_eq!(options.na_rep, "<NA>");
/// assert_eq!(options.quote_character, '"');
/// assert!(!options.quote_all_strings);
/// assert!(options.column_numbers);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StarOptions {
    pub float_format: FloatFormat,
    pub delimiter: Delimiter,
    pub na_rep: String,
    pub quote_character: char,
    pub quote_all_strings: bool,
    pub column_numbers: bool,
    pub key_value_separator: String,
}

impl Default for StarOptions {
    fn default() -> Self {
        StarOptions {
            float_format: FloatFormat::default(),
            delimiter: Delimiter::default(),
            na_rep: "<NA>".to_string(),
            quote_character: '"',
            quote_all_strings: false,
            column_numbers: true,
            key_value_separator: "\t\t\t".to_string(),
        }
    }
}

impl StarOptions {
    /// Creates default options (`%.6f`, tab separated, `<NA>` for missing values).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pattern for floating point cells in loop blocks.
    #[must_use]
    pub fn with_float_format(mut self, float_format: FloatFormat) -> Self {
        self.float_format = float_format;
        self
    }

    /// Sets the separator between cells of a loop row.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the token written for missing values.
    #[must_use]
    pub fn with_na_rep(mut self, na_rep: impl Into<String>) -> Self {
        self.na_rep = na_rep.into();
        self
    }

    /// Sets the character wrapped around quoted strings.
    #[must_use]
    pub fn with_quote_character(mut self, quote_character: char) -> Self {
        self.quote_character = quote_character;
        self
    }

    /// Quote every string, not only empty strings and strings with spaces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_star::StarOptions;
    ///
    /// let options = StarOptions::new().with_quote_all_strings(true);
    /// assert!(options.quote_all_strings);
    /// ```
    #[must_use]
    pub fn with_quote_all_strings(mut self, quote_all_strings: bool) -> Self {
        self.quote_all_strings = quote_all_strings;
        self
    }

    /// Enables or disables the `#<n>` suffix on loop column declarations.
    #[must_use]
    pub fn with_column_numbers(mut self, column_numbers: bool) -> Self {
        self.column_numbers = column_numbers;
        self
    }

    /// Sets the separator between key and value in key-value blocks.
    #[must_use]
    pub fn with_key_value_separator(mut self, separator: impl Into<String>) -> Self {
        self.key_value_separator = separator.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_patterns() {
        assert_eq!("%.2f".parse::<FloatFormat>().unwrap(), FloatFormat::Fixed(2));
        assert_eq!("%.10f".parse::<FloatFormat>().unwrap(), FloatFormat::Fixed(10));
        assert_eq!(
            "%.3E".parse::<FloatFormat>().unwrap(),
            FloatFormat::Exponent {
                precision: 3,
                upper: true
            }
        );
        assert_eq!("%g".parse::<FloatFormat>().unwrap(), FloatFormat::General(6));
        assert_eq!("%.3g".parse::<FloatFormat>().unwrap(), FloatFormat::General(3));
    }

    #[test]
    fn test_parse_rejects_unknown_patterns() {
        for pattern in ["", "%f", "%.f", "%.2d", "{:.2}", "%.xf"] {
            assert!(
                matches!(
                    pattern.parse::<FloatFormat>(),
                    Err(Error::InvalidFloatFormat(_))
                ),
                "pattern {:?} should be rejected",
                pattern
            );
        }
    }

    #[test]
    fn test_pattern_display_matches_parse() {
        for pattern in ["%.6f", "%.2e", "%.4E", "%g", "%.3g"] {
            let parsed: FloatFormat = pattern.parse().unwrap();
            assert_eq!(parsed.to_string(), pattern);
        }
    }

    #[test]
    fn test_fixed_ignores_magnitude() {
        let format = FloatFormat::Fixed(6);
        assert_eq!(format.format(0.000_000_1), "0.000000");
        assert_eq!(format.format(12_345_678.9), "12345678.900000");
        assert_eq!(format.format(-1.5), "-1.500000");
    }

    #[test]
    fn test_exponent_uses_printf_layout() {
        let lower = FloatFormat::Exponent {
            precision: 2,
            upper: false,
        };
        assert_eq!(lower.format(0.00123), "1.23e-03");
        assert_eq!(lower.format(1.0), "1.00e+00");
        let upper = FloatFormat::Exponent {
            precision: 1,
            upper: true,
        };
        assert_eq!(upper.format(123456.0), "1.2E+05");
    }

    #[test]
    fn test_builder() {
        let options = StarOptions::new()
            .with_delimiter(Delimiter::Space)
            .with_quote_character('\'')
            .with_column_numbers(false)
            .with_key_value_separator(" ");
        assert_eq!(options.delimiter, Delimiter::Space);
        assert_eq!(options.quote_character, '\'');
        assert!(!options.column_numbers);
        assert_eq!(options.key_value_separator, " ");
        assert_eq!(options.float_format, FloatFormat::Fixed(6));
    }

    #[test]
    fn test_general_matches_printf() {
        let g = FloatFormat::General(6);
        assert_eq!(g.format(0.1 + 0.2), "0.3");
        assert_eq!(g.format(1_234_567.0), "1.23457e+06");
        assert_eq!(g.format(1e20), "1e+20");
        assert_eq!(g.format(1e-7), "1e-07");
        assert_eq!(g.format(0.0001), "0.0001");
        assert_eq!(g.format(100_000.0), "100000");
        assert_eq!(g.format(-2.5), "-2.5");
        assert_eq!(g.format(0.0), "0");
        assert_eq!(FloatFormat::General(3).format(3.14159), "3.14");
        assert_eq!(FloatFormat::General(0).format(7.3), "7");
    }
}
