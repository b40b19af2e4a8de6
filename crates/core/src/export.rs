//! Read-only export of a Huffman tree as a directed graph.
//!
//! Each tree node becomes a graph node and each parent→child link an edge
//! labelled `0` (left) or `1` (right). Node ids are preorder indices assigned
//! during the export, with the root at `0`. They only correlate nodes and
//! edges within one [`Graph`] and give no access back into the tree.
//!
//! # Example
//! ```
//! use huffman_explorer_core::export::export;
//! use huffman_explorer_core::tree::HuffmanTree;
//!
//! let tree = HuffmanTree::from_text("aab").unwrap();
//! let graph = export(&tree);
//! assert_eq!(graph.nodes[0].label, "3");
//! assert_eq!(graph.edges.len(), 2);
//! assert!(graph.to_dot().starts_with("// Huffman Tree\ndigraph {"));
//! ```

use std::fmt::Write;

use serde::Serialize;

use crate::tree::{HuffmanTree, Node};

/// Whether a graph node stands for a leaf or an internal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Leaf,
    Internal,
}

/// A tree node as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    /// Display-only correlation key, unique within the graph
    pub id: usize,
    /// `<symbol>:<frequency>` for leaves, `<frequency>` for internal nodes
    pub label: String,
    pub kind: NodeKind,
}

/// A parent→child link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: usize,
    pub to: usize,
    /// `"0"` for the left child, `"1"` for the right child
    pub label: &'static str,
}

/// Directed graph description of a Huffman tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    /// Nodes in preorder; `nodes[i].id == i`
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    /// Render as a Graphviz `digraph`, top to bottom.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("// Huffman Tree\ndigraph {\n\tgraph [rankdir=TB]\n");
        // Writing into a String cannot fail
        for node in &self.nodes {
            let _ = writeln!(dot, "\t{} [label=\"{}\"]", node.id, escape_dot(&node.label));
        }
        for edge in &self.edges {
            let _ = writeln!(dot, "\t{} -> {} [label={}]", edge.from, edge.to, edge.label);
        }
        dot.push_str("}\n");
        dot
    }
}

/// Describe `tree` as a graph.
pub fn export(tree: &HuffmanTree) -> Graph {
    let mut graph = Graph::default();
    visit(tree.root(), &mut graph);
    graph
}

/// Preorder walk. A child's id is the node count at the moment it is visited.
fn visit(node: &Node, graph: &mut Graph) {
    let id = graph.nodes.len();
    match node {
        Node::Leaf { symbol, weight } => {
            graph.nodes.push(GraphNode {
                id,
                label: format!("{}:{}", symbol.escape_debug(), weight),
                kind: NodeKind::Leaf,
            });
        }
        Node::Internal {
            weight,
            left,
            right,
        } => {
            graph.nodes.push(GraphNode {
                id,
                label: weight.to_string(),
                kind: NodeKind::Internal,
            });
            for (child, label) in [(left, "0"), (right, "1")] {
                graph.edges.push(GraphEdge {
                    from: id,
                    to: graph.nodes.len(),
                    label,
                });
                visit(child, graph);
            }
        }
    }
}

fn escape_dot(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
