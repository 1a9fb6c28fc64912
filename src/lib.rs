//! # SAC threshold tables for Espresso
//!
//! Converts the weight vector of a linear threshold boolean function into a truth
//! table in the PLA format read by the Espresso logic minimizer.
//!
//! ## Overview
//!
//! For a weight vector `W` of length `n`, every input row `r` in `0..2^n` is scored
//! as `Σ W[i] * r[i]`. The function output is 1 when the score is strictly positive
//! and 0 otherwise. The generated table lists the rows with output 0, each tagged
//! with a `1` output, in ascending row order.
//!
//! ## Generating a table
//!
//! ```
//! use sac_espresso::generate_pla;
//!
//! # fn main() -> Result<(), sac_espresso::GeneratorError> {
//! let pla = generate_pla(&[10, -1, 3, -5], 4)?;
//! assert!(pla.starts_with(".i 4\n.o 1\n.ilb x0 x1 x2 x3\n.ob F\n"));
//! assert!(pla.ends_with(".e\n"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Writing to a file
//!
//! ```
//! use sac_espresso::{generate_pla, write_string_to_file};
//!
//! # fn main() -> std::io::Result<()> {
//! # let dir = tempfile::tempdir()?;
//! # let path = dir.path().join("sac_W_n4");
//! let pla = generate_pla(&[10, -1, 3, -5], 4)?;
//! write_string_to_file(&pla, &path)?;
//! # Ok(())
//! # }
//! ```
//!
//! Large tables can be streamed with [`write_pla`] or [`write_pla_file`] instead of
//! being collected into a string first. [`GeneratorConfig`] bundles the weights and
//! the destination and can be loaded from TOML.

pub mod config;
pub mod error;
pub mod pla;
pub mod rows;
pub mod score;
pub mod weights;
pub mod writer;

pub use config::{default_output_name, GeneratorConfig};
pub use error::{GeneratorError, Result};
pub use pla::{
    generate_pla, generate_truth_table, summarize, write_pla, zero_output_rows, TableSummary,
};
pub use rows::{Row, Rows};
pub use score::{output_bit, score};
pub use weights::{parse_weights, validate_dimensions, MAX_INPUTS, REFERENCE_WEIGHTS};
pub use writer::{write_pla_file, write_string_to_file};
