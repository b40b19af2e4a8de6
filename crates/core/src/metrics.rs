//! Compression metrics and the per-symbol report.
//!
//! # Size accounting
//!
//! - Original size: UTF-8 byte length of the input × 8
//! - Compressed size: number of bits in the encoded output (one `'0'`/`'1'`
//!   character each)
//! - Savings: `100 × (original − compressed) / original`, or 0 when the
//!   original size is 0

use serde::Serialize;

use crate::codes::{Code, CodeTable};
use crate::encoder::EncodedOutput;
use crate::frequency::FrequencyTable;

/// Size metrics of one compression run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompressionMetrics {
    /// Input size in bits under UTF-8
    pub original_bits: u64,

    /// Encoded size in bits
    pub compressed_bits: u64,
}

impl CompressionMetrics {
    /// Measure `input` against its encoding.
    pub fn measure(input: &str, encoded: &EncodedOutput) -> Self {
        Self {
            original_bits: input.len() as u64 * 8,
            compressed_bits: encoded.bit_len() as u64,
        }
    }

    /// Percentage of bits saved.
    ///
    /// Returns 0.0 if the original is empty.
    pub fn savings_percent(&self) -> f64 {
        if self.original_bits == 0 {
            0.0
        } else {
            100.0 * (self.original_bits as f64 - self.compressed_bits as f64)
                / self.original_bits as f64
        }
    }

    /// Compute compression ratio (compressed / original).
    ///
    /// Returns 0.0 if the original is empty.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_bits == 0 {
            0.0
        } else {
            self.compressed_bits as f64 / self.original_bits as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("=== Compression Metrics ===");
        println!("Original size:   {} bits", group_thousands(self.original_bits));
        println!("Compressed size: {} bits", group_thousands(self.compressed_bits));
        println!("Savings:         {:.2}%", self.savings_percent());
        println!("Ratio:           {:.1}%", self.compression_ratio() * 100.0);
        println!();
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "original_bits={}\n\
             compressed_bits={}\n\
             savings_percent={:.2}\n\
             compression_ratio={:.4}\n",
            self.original_bits,
            self.compressed_bits,
            self.savings_percent(),
            self.compression_ratio(),
        )
    }
}

/// One line of the frequency/code table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub symbol: char,
    pub frequency: u64,
    pub code: Code,
    /// Code length in bits
    pub length: usize,
}

/// Join frequencies and codes into table rows, shortest codes first.
///
/// Rows with the same code length are ordered by symbol. Symbols without a
/// code are skipped.
pub fn report_rows(freqs: &FrequencyTable, codes: &CodeTable) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = freqs
        .iter()
        .filter_map(|(symbol, frequency)| {
            codes.get(symbol).map(|code| ReportRow {
                symbol,
                frequency,
                code: code.clone(),
                length: code.len(),
            })
        })
        .collect();
    rows.sort_by(|a, b| a.length.cmp(&b.length).then(a.symbol.cmp(&b.symbol)));
    rows
}

/// Print the frequency/code table to stdout.
pub fn print_table(rows: &[ReportRow]) {
    println!("=== Frequencies and Codes ===");
    println!("{:<10} {:>10}  {:<24} {:>6}", "Symbol", "Frequency", "Code", "Length");
    for row in rows {
        let symbol: String = row.symbol.escape_debug().collect();
        println!(
            "{:<10} {:>10}  {:<24} {:>6}",
            symbol, row.frequency, row.code, row.length
        );
    }
    println!();
}

/// Format with `,` as the thousands separator.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
