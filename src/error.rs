use alloc::string::String;

use displaydoc::Display;

use crate::node::NodeId;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// Network must have at least two nodes, got {0}
    TooFewNodes(usize),
    /// Capacity matrix is not square: row {row} has {len} entries, expected {expected}
    NotSquare {
        row: NodeId,
        len: usize,
        expected: usize,
    },
    /// Negative capacity on edge {0} -> {1}
    NegativeCapacity(NodeId, NodeId),
    /// Edge {0} -> {1} refers to a node outside the network of {2} nodes
    NodeOutOfRange(NodeId, NodeId, usize),
    /// Missing node count on the first line
    MissingNodeCount,
    /// Invalid node count `{0}`
    InvalidNodeCount(String),
    /// Expected {expected} capacity rows, found {found}
    MissingRows { expected: usize, found: usize },
    /// Invalid capacity `{token}` on line {line}
    InvalidCapacity {
        line: usize,
        token: String,
    },
    /// Total flow overflowed the capacity type
    Overflow,
    /// Flow check failed: {0}
    CheckFailed(String),
}
