//! Apply command.
//!
//! Runs a color through a filter chain.

use crate::ApplyArgs;
use anyhow::Result;
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct ApplyReport {
    filters: String,
    input: [f32; 4],
    output: [f32; 4],
}

/// Run the apply command.
pub fn run(args: ApplyArgs, json: bool) -> Result<()> {
    let chain = super::load_chain(&args.source)?;
    let input = super::parse_color(&args.color)?;
    info!(filters = %chain, input = %input, "Applying filter chain");

    let output = chain.apply(&input);

    if json {
        let report = ApplyReport {
            filters: chain.to_string(),
            input: input.to_array(),
            output: output.to_array(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let [r, g, b, a] = output.to_array();
        println!("{r:.6},{g:.6},{b:.6},{a:.6}");
    }
    Ok(())
}
