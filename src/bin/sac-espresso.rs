//! SAC threshold table generator - Command Line Interface
//!
//! Writes the Espresso PLA input for a threshold weight vector.

use clap::{ArgAction, Parser};
use sac_espresso::{parse_weights, write_pla, write_pla_file, GeneratorConfig, TableSummary};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "sac-espresso")]
#[command(about = "Generate Espresso PLA input from a SAC threshold weight vector", long_about = None)]
#[command(version)]
struct Args {
    /// Weight vector, e.g. "10,-1,3,-5" (defaults to the 16-input reference vector)
    #[arg(short = 'w', long = "weights", value_name = "LIST", allow_hyphen_values = true)]
    weights: Option<String>,

    /// TOML configuration file with `weights` and optional `output_path`
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file", conflicts_with = "default_path")]
    output_file: Option<PathBuf>,

    /// Write to the configured path, or sac_W_n<n> when none is configured
    #[arg(long = "default-path")]
    default_path: bool,

    /// Print row statistics on stderr
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn load_config(args: &Args) -> sac_espresso::Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(text) = &args.weights {
        config.weights = parse_weights(text)?;
    }
    if let Some(path) = &args.output_file {
        config.output_path = Some(path.clone());
    }
    config.validate()?;
    Ok(config)
}

fn print_summary(summary: &TableSummary) {
    eprintln!("Table statistics:");
    eprintln!("  Inputs:              {}", summary.inputs);
    eprintln!("  Rows enumerated:     {}", summary.total_rows);
    eprintln!("  Rows emitted (<= 0): {}", summary.emitted_rows);
    eprintln!("  Rows positive (> 0): {}", summary.positive_rows);
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let n = config.num_inputs();

    let to_file = args.output_file.is_some() || args.default_path;
    let result = if to_file {
        let path = config.resolved_output_path();
        write_pla_file(&config.weights, n, &path).map(|summary| {
            if args.summary {
                eprintln!("Wrote output to: {}", path.display());
            }
            summary
        })
    } else {
        let stdout = io::stdout();
        let mut handle = io::BufWriter::new(stdout.lock());
        write_pla(&config.weights, n, &mut handle)
            .and_then(|summary| handle.flush().map(|_| summary).map_err(Into::into))
    };

    match result {
        Ok(summary) => {
            if args.summary {
                print_summary(&summary);
            }
        }
        Err(e) => {
            eprintln!("Error writing output: {}", e);
            process::exit(1);
        }
    }
}
