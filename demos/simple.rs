//! Basic STAR output from a list of records.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_star::{to_string, Table};
use std::error::Error;

#[derive(Debug, Serialize)]
struct Micrograph {
    rln_micrograph_name: String,
    rln_defocus_u: f64,
    rln_ctf_max_resolution: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let micrographs = vec![
        Micrograph {
            rln_micrograph_name: "MotionCorr/job002/mic_001.mrc".to_string(),
            rln_defocus_u: 10234.5,
            rln_ctf_max_resolution: 3.8,
        },
        Micrograph {
            rln_micrograph_name: "MotionCorr/job002/mic_002.mrc".to_string(),
            rln_defocus_u: 11876.0,
            rln_ctf_max_resolution: 4.1,
        },
    ];

    let table = Table::from_records(&micrographs)?;
    let star = to_string(table)?;
    println!("STAR output:\n{}", star);

    assert!(star.contains("loop_\n_rln_micrograph_name #1\n"));
    Ok(())
}
