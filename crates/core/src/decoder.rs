//! Decoding a '0'/'1' bit string back into text.
//!
//! Bits are accumulated until they spell a code of the table. The table is
//! prefix-free, so the first match is the only possible one.

use std::collections::HashMap;

use crate::codes::CodeTable;
use crate::error::{HuffmanError, Result};

/// Decode `bits` using `codes`.
///
/// An empty bit string decodes to an empty string.
///
/// # Errors
/// - `HuffmanError::InvalidBit` for any character other than `'0'` or `'1'`
/// - `HuffmanError::TruncatedInput` if the trailing bits spell no code
pub fn decode(bits: &str, codes: &CodeTable) -> Result<String> {
    let lookup: HashMap<&str, char> = codes
        .iter()
        .map(|(symbol, code)| (code.as_str(), symbol))
        .collect();

    let mut output = String::new();
    let mut start = 0;

    for (position, bit) in bits.char_indices() {
        if bit != '0' && bit != '1' {
            return Err(HuffmanError::InvalidBit {
                position,
                found: bit,
            }
            .into());
        }

        // Only ASCII has been accepted so far, so byte offsets are bit offsets
        if let Some(&symbol) = lookup.get(&bits[start..=position]) {
            output.push(symbol);
            start = position + 1;
        }
    }

    if start < bits.len() {
        return Err(HuffmanError::TruncatedInput { position: start }.into());
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;
    use crate::error::Error;
    use crate::tree::HuffmanTree;

    fn codes_for(text: &str) -> CodeTable {
        CodeTable::from_tree(&HuffmanTree::from_text(text).unwrap())
    }

    #[test]
    fn test_round_trip() {
        let text = "decoding walks the code table greedily";
        let codes = codes_for(text);
        let encoded = encode(text, &codes).unwrap();
        assert_eq!(decode(encoded.as_str(), &codes).unwrap(), text);
    }

    #[test]
    fn test_single_symbol() {
        let codes = codes_for("aaaa");
        assert_eq!(decode("0000", &codes).unwrap(), "aaaa");
    }

    #[test]
    fn test_empty_bits() {
        assert_eq!(decode("", &codes_for("abc")).unwrap(), "");
    }

    #[test]
    fn test_invalid_bit() {
        let result = decode("01x0", &codes_for("aabbc"));
        assert!(matches!(
            result,
            Err(Error::Huffman(HuffmanError::InvalidBit {
                position: 2,
                found: 'x'
            }))
        ));
    }

    #[test]
    fn test_truncated() {
        // b=0, c=10, a=11; trailing "1" is half a code
        let result = decode("0101", &codes_for("aabbc"));
        assert!(matches!(
            result,
            Err(Error::Huffman(HuffmanError::TruncatedInput { position: 3 }))
        ));
    }

    #[test]
    fn test_single_symbol_rejects_one() {
        let result = decode("01", &codes_for("aaaa"));
        assert!(matches!(
            result,
            Err(Error::Huffman(HuffmanError::TruncatedInput { position: 1 }))
        ));
    }
}
