//! Float patterns, quoting and separators.
//!
//! Run with: cargo run --example custom_options

use serde_star::{to_string_with_options, Delimiter, FloatFormat, StarOptions, Table};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let table = Table::new()
        .with_column("rlnMicrographName", ["mic 001.mrc", "mic_002.mrc"])?
        .with_column("rlnDefocusU", [12345.678_9, 0.000_123])?
        .with_column("rlnCtfFigureOfMerit", [Some(0.12), None])?;

    let variants = [
        ("defaults", StarOptions::default()),
        (
            "exponent floats",
            StarOptions::new().with_float_format("%.3e".parse::<FloatFormat>()?),
        ),
        (
            "single quotes, everything quoted",
            StarOptions::new()
                .with_quote_character('\'')
                .with_quote_all_strings(true),
        ),
        (
            "space separated, nan for missing",
            StarOptions::new()
                .with_delimiter(Delimiter::Space)
                .with_na_rep("nan")
                .with_float_format(FloatFormat::Fixed(2)),
        ),
        (
            "no column numbers",
            StarOptions::new().with_column_numbers(false),
        ),
    ];

    for (label, options) in variants {
        println!("=== {} ===", label);
        println!("{}", to_string_with_options(table.clone(), options)?);
    }

    Ok(())
}
