//! Writing a STAR file twice and inspecting the backup.
//!
//! Run with: cargo run --example write_file

use serde_star::{star, write_file};
use std::error::Error;
use std::fs;

fn main() -> Result<(), Box<dyn Error>> {
    let dir = std::env::temp_dir().join("serde_star_demo");
    fs::create_dir_all(&dir)?;
    let path = dir.join("run_model.star");

    write_file(&path, star!({ "rlnCurrentIteration": 1 }))?;
    write_file(&path, star!({ "rlnCurrentIteration": 2 }))?;

    println!("{}:\n{}", path.display(), fs::read_to_string(&path)?);

    let backup = dir.join("run_model.star~");
    println!("{}:\n{}", backup.display(), fs::read_to_string(&backup)?);

    Ok(())
}
