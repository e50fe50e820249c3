//! A RELION-style particles file with an optics block and a particles loop.
//!
//! Run with: cargo run --example multi_block

use serde::Serialize;
use serde_star::{coerce, to_string, to_value, StarMap, Table, Value};
use std::error::Error;

#[derive(Serialize)]
struct Optics {
    #[serde(rename = "rlnOpticsGroup")]
    group: u32,
    #[serde(rename = "rlnOpticsGroupName")]
    name: String,
    #[serde(rename = "rlnVoltage")]
    voltage: f64,
    #[serde(rename = "rlnImageSize")]
    image_size: u32,
}

#[derive(Serialize)]
struct Particle {
    #[serde(rename = "rlnCoordinateX")]
    x: f64,
    #[serde(rename = "rlnCoordinateY")]
    y: f64,
    #[serde(rename = "rlnImageName")]
    image: String,
    #[serde(rename = "rlnOpticsGroup")]
    group: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    let optics = Optics {
        group: 1,
        name: "opticsGroup1".to_string(),
        voltage: 300.0,
        image_size: 256,
    };
    let particles: Vec<Particle> = (0..4)
        .map(|i| Particle {
            x: 100.0 + 50.0 * f64::from(i),
            y: 200.0,
            image: format!("{:06}@Extract/job007/mic_001.mrcs", i + 1),
            group: 1,
        })
        .collect();

    let mut blocks = StarMap::new();
    blocks.insert("optics".to_string(), to_value(&optics)?);
    blocks.insert(
        "particles".to_string(),
        Value::Table(Table::from_records(&particles)?),
    );

    let document = coerce(blocks.clone())?;
    for (name, block) in &document {
        let kind = if block.is_table() { "loop" } else { "key-value" };
        println!("data_{} is a {} block", name, kind);
    }

    println!("\n{}", to_string(blocks)?);

    // A sequence of blocks gets numbered block names.
    let numbered = Value::Array(vec![to_value(&optics)?]);
    println!("{}", to_string(numbered)?);

    Ok(())
}
