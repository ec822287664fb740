//! Matrix command.
//!
//! Prints the 3x3 color matrix of every operation in a filter chain.

use crate::MatrixArgs;
use anyhow::Result;
use colorfx_math::ColorMatrix;
use serde::Serialize;

/// One operation and its matrix, for JSON output.
#[derive(Serialize)]
struct MatrixReport {
    filter: String,
    rows: [[f32; 3]; 3],
}

/// Run the matrix command.
pub fn run(args: MatrixArgs, json: bool) -> Result<()> {
    let chain = super::load_chain(&args.source)?;

    if json {
        let reports: Vec<MatrixReport> = chain
            .operations()
            .iter()
            .map(|op| MatrixReport { filter: op.to_string(), rows: *op.color_matrix().rows() })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    if chain.is_empty() {
        println!("none (identity)");
    }
    for op in chain.operations() {
        println!("{op}");
        print!("{}", format_matrix(&op.color_matrix()));
    }
    Ok(())
}

fn format_matrix(matrix: &ColorMatrix<3, 3>) -> String {
    matrix
        .rows()
        .iter()
        .map(|row| format!("  [{:>9.6} {:>9.6} {:>9.6}]\n", row[0], row[1], row[2]))
        .collect()
}
