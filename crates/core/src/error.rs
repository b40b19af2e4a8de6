//! Error types for the huffman-explorer system.
//!
//! All operations return structured errors rather than panicking, so the
//! command-line front end can tell an empty input apart from a genuine fault.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Huffman: tree construction, code generation, encode/decode failures
/// - I/O: reading the input file or writing artifacts
/// - UTF-8: the input file is not valid text
/// - Config: unusable command-line options
#[derive(Debug, Error)]
pub enum Error {
    /// Huffman codec error (e.g., empty input, missing code)
    #[error("huffman codec error: {0}")]
    Huffman(#[from] HuffmanError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes could not be decoded as UTF-8 text
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Huffman codec errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffmanError {
    /// No symbols to build a tree from
    #[error("empty input: cannot build a huffman tree")]
    EmptyInput,

    /// Code generation was asked to walk a tree that does not exist
    #[error("empty tree: cannot generate a code table")]
    EmptyTree,

    /// A symbol of the input has no code; the table was not built from this input
    #[error("no code for symbol {symbol:?}")]
    MissingCode { symbol: char },

    /// Encoded stream contains something other than '0' or '1'
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit { position: usize, found: char },

    /// Encoded stream ends in the middle of a code
    #[error("truncated code starting at bit position {position}")]
    TruncatedInput { position: usize },
}

impl Error {
    /// True when the error is the empty-input condition, which the front end
    /// reports as a warning instead of a failure.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Error::Huffman(HuffmanError::EmptyInput))
    }
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
