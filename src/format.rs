//! Rendering of single values.
//!
//! Quoting follows the whitespace-delimited nature of STAR rows: a string is quoted
//! when it contains a space or is empty, or when every string is to be quoted. No
//! escaping is performed; the quoted text is emitted verbatim.
//!
//! Names are never quoted. Block names, column names and keys become `data_<name>`
//! and `_<name>` tags, so they must not contain whitespace.

use crate::{Error, Result, Scalar, StarOptions};
use std::borrow::Cow;

/// Wraps `s` in `quote_character` if it is empty, contains a space, or
/// `quote_all_strings` is set; otherwise returns it unchanged.
///
/// # Examples
///
/// ```rust
/// use serde_star::quote;
///
/// assert_eq!(quote("a b", '"', false), "\"a b\"");
/// assert_eq!(quote("", '"', false), "\"\"");
/// assert_eq!(quote("ab", '"', false), "ab");
/// assert_eq!(quote("ab", '\'', true), "'ab'");
/// ```
#[must_use]
pub fn quote(s: &str, quote_character: char, quote_all_strings: bool) -> Cow<'_, str> {
    if quote_all_strings || s.is_empty() || s.contains(' ') {
        let mut quoted = String::with_capacity(s.len() + 2 * quote_character.len_utf8());
        quoted.push(quote_character);
        quoted.push_str(s);
        quoted.push(quote_character);
        Cow::Owned(quoted)
    } else {
        Cow::Borrowed(s)
    }
}

/// Renders one cell of a loop row.
///
/// Floats use the configured pattern, missing values and NaN the missing-value
/// token, strings go through [`quote`].
///
/// # Errors
///
/// Returns [`Error::UnrepresentableValue`] if the string contains a line break, or
/// if it stays unquoted while containing the field separator.
pub fn loop_field<'a>(
    value: &'a Scalar,
    block: &str,
    options: &'a StarOptions,
) -> Result<Cow<'a, str>> {
    match value {
        Scalar::Missing => Ok(Cow::Borrowed(&options.na_rep)),
        Scalar::Float(f) if f.is_nan() => Ok(Cow::Borrowed(&options.na_rep)),
        Scalar::Float(f) => Ok(Cow::Owned(options.float_format.format(*f))),
        Scalar::String(s) => {
            check_line_breaks(s, block)?;
            let field = quote(s, options.quote_character, options.quote_all_strings);
            let separator = options.delimiter.as_str();
            if matches!(field, Cow::Borrowed(_)) && !separator.is_empty() && s.contains(separator)
            {
                return Err(Error::unrepresentable(
                    block,
                    s,
                    "contains the field separator",
                ));
            }
            Ok(field)
        }
        other => Ok(Cow::Owned(other.to_string())),
    }
}

/// Renders the value of one key-value line.
///
/// Numbers keep their plain representation; the float pattern only applies to
/// loop blocks. Floats use the shortest digits that read back to the same value,
/// switching to a two digit signed exponent below `1e-4` and from `1e16` on.
///
/// # Errors
///
/// Returns [`Error::UnrepresentableValue`] if the string contains a line break.
pub fn key_value_field<'a>(
    value: &'a Scalar,
    block: &str,
    options: &'a StarOptions,
) -> Result<Cow<'a, str>> {
    match value {
        Scalar::Missing => Ok(Cow::Borrowed(&options.na_rep)),
        Scalar::Float(f) if f.is_nan() => Ok(Cow::Borrowed(&options.na_rep)),
        Scalar::Float(f) => Ok(Cow::Owned(shortest_float(*f))),
        Scalar::String(s) => {
            check_line_breaks(s, block)?;
            Ok(quote(s, options.quote_character, options.quote_all_strings))
        }
        other => Ok(Cow::Owned(other.to_string())),
    }
}

/// Checks the name of a block, written as `data_<name>`. The empty name is allowed.
///
/// # Errors
///
/// Returns [`Error::InvalidName`] if `name` contains whitespace.
pub fn check_block_name(name: &str) -> Result<()> {
    check_whitespace(name, name)
}

/// Checks a column name or key, written as `_<tag>` in block `block`.
///
/// # Errors
///
/// Returns [`Error::InvalidName`] if `tag` is empty or contains whitespace.
pub fn check_tag(tag: &str, block: &str) -> Result<()> {
    if tag.is_empty() {
        return Err(Error::invalid_name(block, tag, "is empty"));
    }
    check_whitespace(tag, block)
}

fn check_whitespace(name: &str, block: &str) -> Result<()> {
    if name.contains(['\n', '\r']) {
        return Err(Error::invalid_name(block, name, "contains a line break"));
    }
    if name.contains(char::is_whitespace) {
        return Err(Error::invalid_name(block, name, "contains whitespace"));
    }
    Ok(())
}

// Python's float repr: `1e-05`, `0.0001`, `300.0`, `1e+16`.
fn shortest_float(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let plain = if exponent < 0 {
        format!("0.{}{}", "0".repeat((-exponent - 1) as usize), digits)
    } else {
        let int_len = exponent as usize + 1;
        if digits.len() > int_len {
            format!("{}.{}", &digits[..int_len], &digits[int_len..])
        } else {
            format!("{}{}.0", digits, "0".repeat(int_len - digits.len()))
        }
    };
    format!("{}{}", sign, plain)
}

fn check_line_breaks(s: &str, block: &str) -> Result<()> {
    if s.contains(['\n', '\r']) {
        return Err(Error::unrepresentable(block, s, "contains a line break"));
    }
    Ok(())
}
