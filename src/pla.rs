//! Espresso PLA formatting of threshold truth tables
//!
//! The table lists the rows whose threshold output is 0 (score ≤ 0), each tagged
//! with output `1`, so Espresso minimizes the zero set of the threshold function:
//!
//! ```text
//! .i 2
//! .o 1
//! .ilb x0 x1
//! .ob F
//! 00 1
//! 01 1
//! .e
//! ```
//!
//! [`write_pla`] streams to any [`Write`]; [`generate_pla`] collects the same bytes
//! into a `String`.

use std::io::{self, Write};

use tracing::debug;

use crate::error::Result;
use crate::rows::{Row, Rows};
use crate::score::{output_bit, score};
use crate::weights::validate_dimensions;

/// Label of the single output column
pub const OUTPUT_LABEL: &str = "F";

/// Row counts for one generated table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSummary {
    /// Number of input variables
    pub inputs: usize,
    /// Number of enumerated rows, `2^inputs`
    pub total_rows: u64,
    /// Rows with score ≤ 0, written to the table
    pub emitted_rows: u64,
    /// Rows with score > 0, left out of the table
    pub positive_rows: u64,
}

impl TableSummary {
    fn new(inputs: usize, total_rows: u64, emitted_rows: u64) -> Self {
        TableSummary {
            inputs,
            total_rows,
            emitted_rows,
            positive_rows: total_rows - emitted_rows,
        }
    }
}

/// Iterate the rows whose threshold output is 0, in ascending index order
pub fn zero_output_rows(weights: &[i64], n: usize) -> Result<impl Iterator<Item = Row> + '_> {
    validate_dimensions(weights, n)?;
    Ok(Rows::new(n).filter(move |row| !output_bit(score(weights, row))))
}

/// Write the complete PLA table for `weights` to `writer`
///
/// Returns the row counts of the written table.
pub fn write_pla<W: Write>(weights: &[i64], n: usize, writer: &mut W) -> Result<TableSummary> {
    validate_dimensions(weights, n)?;
    debug!(inputs = n, rows = Rows::new(n).total(), "generating PLA table");

    write_header(n, writer)?;
    let emitted = write_rows(weights, n, writer)?;
    writeln!(writer, ".e")?;

    let summary = TableSummary::new(n, Rows::new(n).total(), emitted);
    debug!(
        emitted = summary.emitted_rows,
        positive = summary.positive_rows,
        "PLA table complete"
    );
    Ok(summary)
}

/// Generate the complete PLA table as a string
///
/// # Examples
///
/// ```
/// use sac_espresso::generate_pla;
///
/// let pla = generate_pla(&[1], 1).unwrap();
/// assert_eq!(pla, ".i 1\n.o 1\n.ilb x0\n.ob F\n0 1\n.e\n");
/// ```
pub fn generate_pla(weights: &[i64], n: usize) -> Result<String> {
    let mut buffer = Vec::new();
    write_pla(weights, n, &mut buffer)?;
    into_string(buffer)
}

/// Generate only the row lines of the table, without header or `.e`
pub fn generate_truth_table(weights: &[i64], n: usize) -> Result<String> {
    validate_dimensions(weights, n)?;
    let mut buffer = Vec::new();
    write_rows(weights, n, &mut buffer)?;
    into_string(buffer)
}

/// Count emitted and positive rows without formatting anything
pub fn summarize(weights: &[i64], n: usize) -> Result<TableSummary> {
    let emitted = zero_output_rows(weights, n)?.count() as u64;
    Ok(TableSummary::new(n, Rows::new(n).total(), emitted))
}

fn write_header<W: Write>(n: usize, writer: &mut W) -> io::Result<()> {
    writeln!(writer, ".i {}", n)?;
    writeln!(writer, ".o 1")?;

    write!(writer, ".ilb")?;
    for i in 0..n {
        write!(writer, " x{}", i)?;
    }
    writeln!(writer)?;

    writeln!(writer, ".ob {}", OUTPUT_LABEL)
}

fn write_rows<W: Write>(weights: &[i64], n: usize, writer: &mut W) -> Result<u64> {
    let mut emitted = 0u64;
    for row in zero_output_rows(weights, n)? {
        writeln!(writer, "{} 1", row)?;
        emitted += 1;
    }
    Ok(emitted)
}

fn into_string(buffer: Vec<u8>) -> Result<String> {
    // Only ASCII is ever written
    String::from_utf8(buffer)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}
