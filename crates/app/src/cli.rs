use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "huffman-explorer",
    about = "Huffman text compressor: code tables, metrics and tree export",
    version
)]
pub struct Cli {
    /// Input text file (default: generate a sample text)
    #[arg(long = "in", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Bit-string output file (default: <input stem>_compressed.huf)
    #[arg(long = "out", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the tree as a Graphviz DOT file
    #[arg(long, value_name = "PATH")]
    pub dot: Option<PathBuf>,

    /// Write metrics, code table and tree as JSON
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Write the metrics as key=value lines
    #[arg(long, value_name = "PATH")]
    pub metrics_out: Option<PathBuf>,

    /// Seed for the generated sample text
    #[arg(long)]
    pub seed: Option<u64>,

    /// Length of the generated sample text in characters
    #[arg(long, value_name = "N", default_value_t = 4096)]
    pub sample_chars: usize,

    /// Print resolved configuration
    #[arg(long)]
    pub print_config: bool,

    /// Don't print the metrics summary
    #[arg(long)]
    pub no_metrics: bool,

    /// Don't print the frequency/code table
    #[arg(long)]
    pub no_table: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all log output
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,
}
