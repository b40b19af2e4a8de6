//! huffman-explorer: compress a text file with Huffman coding and show the
//! frequency table, code table, size metrics and tree.

mod cli;
mod config;
mod input_gen;

use clap::Parser;
use huffman_explorer_core::{compress, metrics, Error, Result};
use std::fs;
use std::process;

use cli::Cli;
use config::{Config, InputSource};

const EXIT_ERROR: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn init_tracing(cli: &Cli) {
    // --quiet → off, --verbose → RUST_LOG or info, default → warnings only
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        let code = match e {
            Error::Config(_) => EXIT_USAGE,
            _ => EXIT_ERROR,
        };
        process::exit(code);
    }
}

/// What a run did with its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Input was compressed to `bits` bits and the artifacts were written
    Compressed { bits: usize },

    /// Input was empty; nothing was compressed or written
    EmptyInput,
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;
    if config.print_config {
        config.print();
    }

    match execute(&config)? {
        Outcome::Compressed { bits } => tracing::debug!(bits, "run complete"),
        Outcome::EmptyInput => println!("The input is empty: nothing to compress."),
    }
    Ok(())
}

/// Compress the configured input and write every requested artifact.
fn execute(config: &Config) -> Result<Outcome> {
    let text = read_input(&config.input)?;
    if text.is_empty() {
        tracing::warn!("input is empty");
        return Ok(Outcome::EmptyInput);
    }

    let result = compress(&text)?;
    tracing::info!(
        symbols = result.frequencies.total(),
        alphabet = result.codes.len(),
        tree_depth = result.tree.depth(),
        "compressed input"
    );

    if config.print_metrics {
        result.metrics.print_summary();
    }
    if config.print_table {
        metrics::print_table(&result.rows());
    }

    fs::write(&config.output_file, result.encoded.as_str())?;
    println!(
        "Wrote {} bits to {}",
        result.encoded.bit_len(),
        config.output_file.display()
    );
    println!("Note: the file holds the bit sequence as '0'/'1' text, not packed bytes.");

    if let Some(path) = &config.dot_file {
        fs::write(path, result.graph().to_dot())?;
        println!("Wrote tree to {}", path.display());
    }

    if let Some(path) = &config.json_file {
        let json = serde_json::to_string_pretty(&result.report()).map_err(std::io::Error::from)?;
        fs::write(path, json)?;
        println!("Wrote report to {}", path.display());
    }

    if let Some(path) = &config.metrics_file {
        fs::write(path, result.metrics.export_text())?;
        println!("Wrote metrics to {}", path.display());
    }

    Ok(Outcome::Compressed {
        bits: result.encoded.bit_len(),
    })
}

/// Load the text to compress. File contents must be valid UTF-8.
fn read_input(input: &InputSource) -> Result<String> {
    match input {
        InputSource::File(path) => {
            let bytes = fs::read(path)?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), "read input file");
            Ok(String::from_utf8(bytes)?)
        }
        InputSource::Sample { seed, chars } => {
            tracing::info!(seed, chars, "generating sample text");
            Ok(input_gen::generate_sample_text(*seed, *chars))
        }
    }
}
