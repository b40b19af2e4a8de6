//! Huffman tree construction.
//!
//! The tree is built with the standard greedy algorithm: every symbol starts
//! as a leaf in a min-priority queue, and the two lightest nodes are merged
//! until a single root remains.
//!
//! # Tie-break
//!
//! Every node pushed into the queue is stamped with a sequence number that
//! only grows. Leaves are stamped in ascending symbol order (the iteration
//! order of [`FrequencyTable`]); each merged node is stamped after everything
//! pushed before it. Among nodes of equal weight the smaller stamp is popped
//! first. The first node popped in a merge becomes the left child, the second
//! the right child.
//!
//! Consequences worth knowing when reading a tree:
//! - with equal weights, a leaf is always popped before a merged node
//! - between merged nodes of equal weight, the older one is popped first

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;

/// A node of the Huffman tree.
///
/// Children are owned exclusively by their parent; the tree has no back
/// references and is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: char,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Aggregate frequency of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Merge two subtrees; `left` is the node popped first.
    fn merge(left: Node, right: Node) -> Node {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Priority queue entry: lighter first, then older first.
#[derive(Debug)]
struct QueueEntry {
    weight: u64,
    seq: u64,
    node: Node,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so compare in reverse
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue that stamps entries with insertion sequence numbers.
struct NodeQueue {
    heap: BinaryHeap<QueueEntry>,
    next_seq: u64,
}

impl NodeQueue {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    fn push(&mut self, node: Node) {
        let entry = QueueEntry {
            weight: node.weight(),
            seq: self.next_seq,
            node,
        };
        self.next_seq += 1;
        self.heap.push(entry);
    }

    fn pop(&mut self) -> Option<Node> {
        self.heap.pop().map(|entry| entry.node)
    }
}

/// A complete Huffman tree with a single root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build the optimal prefix-code tree for `freqs`.
    ///
    /// A single-symbol table yields a tree whose root is that leaf.
    ///
    /// # Errors
    /// `HuffmanError::EmptyInput` if `freqs` is empty.
    pub fn build(freqs: &FrequencyTable) -> Result<Self> {
        let mut queue = NodeQueue::with_capacity(freqs.len());
        for (symbol, weight) in freqs.iter() {
            queue.push(Node::Leaf { symbol, weight });
        }

        let root = loop {
            let left = queue.pop().ok_or(HuffmanError::EmptyInput)?;
            match queue.pop() {
                Some(right) => queue.push(Node::merge(left, right)),
                None => break left,
            }
        };

        tracing::debug!(
            symbols = freqs.len(),
            weight = root.weight(),
            depth = root.depth(),
            "built huffman tree"
        );

        Ok(Self { root })
    }

    /// Count the symbols of `text` and build its tree.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::build(&FrequencyTable::count(text))
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Total weight, i.e. the number of symbols in the input.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// Number of leaves, i.e. the alphabet size.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}
