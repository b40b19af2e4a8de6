//! Encoding input text as a '0'/'1' bit string.
//!
//! The output keeps one character per bit. It is not packed into bytes.

use std::fmt;

use crate::codes::CodeTable;
use crate::error::{HuffmanError, Result};

/// Concatenated codes of an input, one `'0'`/`'1'` character per bit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedOutput {
    bits: String,
}

impl EncodedOutput {
    /// Compressed size in bits.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.bits
    }
}

impl fmt::Display for EncodedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bits)
    }
}

/// Encode `input` through `codes`.
///
/// An empty input or an empty table yields an empty output.
///
/// # Errors
/// `HuffmanError::MissingCode` if a symbol of `input` has no code. That only
/// happens when `codes` was built from some other input.
pub fn encode(input: &str, codes: &CodeTable) -> Result<EncodedOutput> {
    if codes.is_empty() {
        return Ok(EncodedOutput::default());
    }

    let mut bits = String::with_capacity(input.len());
    for symbol in input.chars() {
        let code = codes
            .get(symbol)
            .ok_or(HuffmanError::MissingCode { symbol })?;
        bits.push_str(code.as_str());
    }

    Ok(EncodedOutput { bits })
}
