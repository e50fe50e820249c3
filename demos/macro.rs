//! Building STAR input with the `star!` macro.
//!
//! Run with: cargo run --example macro

use serde_star::{star, to_string};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let pixel_size = 1.06;

    // A mapping of scalars is one key-value block.
    let optics = star!({
        "rlnOpticsGroup": 1,
        "rlnOpticsGroupName": "opticsGroup1",
        "rlnImagePixelSize": pixel_size,
        "rlnMtfFileName": null
    });
    println!("Single block:\n{}", to_string(optics)?);

    // A mapping of mappings keeps one block per entry, in the order written.
    let model = star!({
        "model_general": {
            "rlnReferenceDimensionality": 3,
            "rlnCurrentResolution": 3.42
        },
        "model_class_1": {
            "rlnClassDistribution": 1.0,
            "rlnReferenceImage": "run_class001.mrc"
        }
    });
    println!("Two blocks:\n{}", to_string(model)?);

    Ok(())
}
