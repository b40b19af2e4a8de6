//! Code table generation.
//!
//! Codes are read off the tree by a depth-first walk: descending left appends
//! `0`, descending right appends `1`, and a leaf's path is its code. A tree
//! that is a single leaf gets the code `0`, since its path is empty.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, Node};

/// A non-empty string of `'0'` and `'1'` characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Code(String);

impl Code {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for codes produced by [`CodeTable::from_tree`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if `self` is a prefix of `other` (a code is a prefix of itself).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mapping from symbol to its Huffman code.
///
/// Codes are unique and prefix-free because each is a distinct root-to-leaf
/// path of the same tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, Code>,
}

impl CodeTable {
    /// Walk `tree` and collect the code of every leaf.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        match tree.root() {
            Node::Leaf { symbol, .. } => {
                codes.insert(*symbol, Code("0".to_string()));
            }
            root => {
                let mut path = String::new();
                collect(root, &mut path, &mut codes);
            }
        }
        Self { codes }
    }

    pub fn get(&self, symbol: char) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Code)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Sum of `frequency × code length` over the symbols of `freqs`.
    ///
    /// This is the exact bit length of the encoded input the frequencies
    /// were counted from. Symbols without a code contribute nothing.
    pub fn weighted_length(&self, freqs: &FrequencyTable) -> u64 {
        freqs
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| count * code.len() as u64))
            .sum()
    }
}

/// Generate the code table for a possibly absent tree.
///
/// # Errors
/// `HuffmanError::EmptyTree` if `tree` is `None`.
pub fn generate(tree: Option<&HuffmanTree>) -> Result<CodeTable> {
    let tree = tree.ok_or(HuffmanError::EmptyTree)?;
    Ok(CodeTable::from_tree(tree))
}

fn collect(node: &Node, path: &mut String, codes: &mut BTreeMap<char, Code>) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(*symbol, Code(path.clone()));
        }
        Node::Internal { left, right, .. } => {
            path.push('0');
            collect(left, path, codes);
            path.pop();

            path.push('1');
            collect(right, path, codes);
            path.pop();
        }
    }
}
