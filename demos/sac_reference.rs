//! Generate the Espresso input for the 16-input SAC reference weight vector
//!
//! Run with: cargo run --example sac_reference [OUTPUT_DIR]

use sac_espresso::{summarize, GeneratorConfig};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);

    // Small 4-input case first, printed in full
    let small = sac_espresso::generate_pla(&[10, -1, 3, -5], 4)?;
    println!("4-input table:\n{}", small);

    let mut config = GeneratorConfig::default();
    let n = config.num_inputs();
    config.output_path = Some(out_dir.join(sac_espresso::default_output_name(n)));

    let summary = config.run()?;
    println!(
        "Wrote {} of {} rows to {}",
        summary.emitted_rows,
        summary.total_rows,
        config.resolved_output_path().display()
    );

    assert_eq!(summary, summarize(&config.weights, n)?);
    Ok(())
}
