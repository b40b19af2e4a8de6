//! huffman-explorer-core: Huffman coding engine for text
//!
//! This library builds an optimal prefix-code tree for a text, derives the
//! symbol→code table, and encodes the text as a string of `'0'`/`'1'`
//! characters. The tree can also be exported as a graph for rendering.
//!
//! # Architecture
//!
//! The pipeline runs leaves first:
//! - `frequency`: symbol occurrence counts
//! - `tree`: greedy priority-queue tree construction
//! - `codes`: depth-first code table generation
//! - `encoder`: table lookup and concatenation
//! - `decoder`: greedy prefix matching back to text
//! - `export`: graph description of the tree (with Graphviz DOT rendering)
//! - `metrics`: size accounting and the per-symbol report
//!
//! # Example
//! ```
//! use huffman_explorer_core::compress;
//!
//! let result = compress("aabb").unwrap();
//! assert_eq!(result.encoded.as_str(), "0011");
//! assert_eq!(result.metrics.original_bits, 32);
//! ```

pub mod codes;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod export;
pub mod frequency;
pub mod metrics;
pub mod tree;

use serde::Serialize;

// Re-export commonly used types
pub use codes::{Code, CodeTable};
pub use encoder::EncodedOutput;
pub use error::{Error, HuffmanError, Result};
pub use export::Graph;
pub use frequency::FrequencyTable;
pub use metrics::{CompressionMetrics, ReportRow};
pub use tree::HuffmanTree;

/// Everything produced by compressing one input.
#[derive(Debug, Clone)]
pub struct Compression {
    pub frequencies: FrequencyTable,
    pub tree: HuffmanTree,
    pub codes: CodeTable,
    pub encoded: EncodedOutput,
    pub metrics: CompressionMetrics,
}

/// Serializable summary of a compression run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub metrics: CompressionMetrics,
    pub savings_percent: f64,
    pub compression_ratio: f64,
    pub table: Vec<ReportRow>,
    pub tree: Graph,
}

impl Compression {
    /// Frequency/code table rows, shortest codes first.
    pub fn rows(&self) -> Vec<ReportRow> {
        metrics::report_rows(&self.frequencies, &self.codes)
    }

    /// Graph description of the tree.
    pub fn graph(&self) -> Graph {
        export::export(&self.tree)
    }

    pub fn report(&self) -> Report {
        Report {
            metrics: self.metrics,
            savings_percent: self.metrics.savings_percent(),
            compression_ratio: self.metrics.compression_ratio(),
            table: self.rows(),
            tree: self.graph(),
        }
    }
}

/// Run the whole pipeline on `input`.
///
/// # Errors
/// `HuffmanError::EmptyInput` if `input` is empty.
pub fn compress(input: &str) -> Result<Compression> {
    let frequencies = frequency::FrequencyTable::count(input);
    tracing::debug!(
        symbols = frequencies.total(),
        alphabet = frequencies.len(),
        "counted symbol frequencies"
    );

    let tree = HuffmanTree::build(&frequencies)?;
    let codes = CodeTable::from_tree(&tree);
    let encoded = encoder::encode(input, &codes)?;
    let metrics = CompressionMetrics::measure(input, &encoded);

    tracing::debug!(
        original_bits = metrics.original_bits,
        compressed_bits = metrics.compressed_bits,
        "encoded input"
    );

    Ok(Compression {
        frequencies,
        tree,
        codes,
        encoded,
        metrics,
    })
}
