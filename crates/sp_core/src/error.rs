//! Errors raised by graph construction and shortest path queries.
use thiserror::Error;

use crate::graph::NodeIndex;

/// Reasons a weight matrix is rejected at construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidGraph {
    #[error("graph must contain at least one node")]
    Empty,

    #[error("weight matrix is not square: row {row} has {len} columns, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("negative weight {weight} on edge {row} -> {column}")]
    NegativeWeight { row: usize, column: usize, weight: i64 },

    #[error("weight {weight} on edge {row} -> {column} exceeds the maximum of {max}")]
    WeightTooLarge {
        row: usize,
        column: usize,
        weight: u64,
        max: u64,
    },

    #[error("got {labels} labels for {nodes} nodes")]
    LabelCountMismatch { labels: usize, nodes: usize },
}

/// Errors returned by the shortest path engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid graph: {0}")]
    InvalidGraph(#[from] InvalidGraph),

    /// A node index outside `[0, node_count)` was supplied.
    #[error("node index {index} is out of range for a graph with {node_count} nodes")]
    OutOfRange { index: usize, node_count: usize },

    /// No finite path exists. Disconnected graphs are valid input, so callers
    /// are expected to handle this case.
    #[error("no path from node {from} to node {to}")]
    Unreachable { from: NodeIndex, to: NodeIndex },

    /// A path query named a source the result was not computed from.
    #[error("result was computed from node {expected}, not from node {actual}")]
    SourceMismatch {
        expected: NodeIndex,
        actual: NodeIndex,
    },
}
