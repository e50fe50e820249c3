//! Building loop tables column by column or row by row.
//!
//! Run with: cargo run --example loop_tables

use serde_star::{loop_block, Scalar, StarOptions, Table};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Column by column.
    let fsc = Table::new()
        .with_column("rlnSpectralIndex", 0..5)?
        .with_column("rlnResolution", [0.0, 0.01, 0.02, 0.03, 0.04])?
        .with_column("rlnFourierShellCorrelation", [1.0, 0.99, 0.97, 0.91, 0.8])?;

    // Row by row, with a missing cell.
    let mut coordinates = Table::new()
        .with_column("rlnCoordinateX", Vec::<f64>::new())?
        .with_column("rlnCoordinateY", Vec::<f64>::new())?
        .with_column("rlnAutopickFigureOfMerit", Vec::<f64>::new())?;
    coordinates.push_row(vec![Scalar::from(120.0), Scalar::from(88.5), Scalar::from(0.93)])?;
    coordinates.push_row(vec![Scalar::from(402.0), Scalar::from(311.0), Scalar::Missing])?;

    let options = StarOptions::new();
    for (name, table) in [("fsc", &fsc), ("coordinates", &coordinates)] {
        println!("{} ({} rows x {} columns)", name, table.n_rows(), table.n_columns());
        for line in loop_block(name, table, &options) {
            println!("{}", line?);
        }
    }

    // Ragged tables are rejected.
    let err = fsc.clone().with_column("rlnTooShort", [1, 2]).unwrap_err();
    println!("Rejected: {}", err);

    Ok(())
}
