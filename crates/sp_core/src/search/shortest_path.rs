use serde::{Deserialize, Serialize};

use crate::{
    constants::Weight,
    graph::{Graph, NodeIndex},
};

/// A path between two nodes in forward order together with its total weight.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ShortestPath {
    pub nodes: Vec<NodeIndex>,
    pub weight: Weight,
}

impl ShortestPath {
    pub fn new(nodes: Vec<NodeIndex>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }

    pub fn source(&self) -> Option<NodeIndex> {
        self.nodes.first().copied()
    }

    pub fn target(&self) -> Option<NodeIndex> {
        self.nodes.last().copied()
    }

    /// Consecutive `(from, to)` pairs, e.g. to reveal the path edge by edge.
    pub fn steps(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Labels of the path nodes. Nodes unknown to `graph` are rendered as `?`.
    pub fn labels<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        self.nodes
            .iter()
            .map(|n| graph.label(*n).unwrap_or("?"))
            .collect()
    }

    /// Human readable form, e.g. `MKS → SUB → DPS → DHS`.
    pub fn display(&self, graph: &Graph) -> String {
        self.labels(graph).join(" → ")
    }
}
