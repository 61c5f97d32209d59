//! Owner of a graph that answers shortest path queries on it.
//!
//! ```
//! use sp_core::prelude::*;
//!
//! let engine = ShortestPathEngine::from_matrix(
//!     vec![vec![0, 2, 8], vec![2, 0, 1], vec![8, 1, 0]],
//!     ["MKS", "SUB", "DPS"],
//! )
//! .unwrap();
//!
//! let result = engine.compute(node_index(0)).unwrap();
//! let path = engine.path_to(&result, node_index(0), node_index(2)).unwrap();
//!
//! assert_eq!(path, vec![node_index(0), node_index(1), node_index(2)]);
//! assert_eq!(engine.distance_to(&result, node_index(2)).unwrap(), 3);
//! ```
use crate::{
    constants::Weight,
    error::{InvalidGraph, SearchError},
    graph::{Graph, NodeIndex},
    search::{dijkstra::Dijkstra, shortest_path::ShortestPath, tree::ShortestPathTree},
};

/// Shortest path engine over an immutable [`Graph`].
///
/// Every `compute` call returns a fresh [`ShortestPathTree`]; the engine keeps
/// no state between calls and can be shared between threads.
#[derive(Debug, Clone)]
pub struct ShortestPathEngine {
    graph: Graph,
}

impl ShortestPathEngine {
    pub fn new(graph: Graph) -> Self {
        ShortestPathEngine { graph }
    }

    /// Validates a raw weight matrix (`0` = no edge) and builds the engine.
    pub fn from_matrix<I, S>(weights: Vec<Vec<i64>>, labels: I) -> Result<Self, InvalidGraph>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::new(Graph::new(weights, labels)?))
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Distances and parent links from `source` to all nodes.
    pub fn compute(&self, source: NodeIndex) -> Result<ShortestPathTree, SearchError> {
        Dijkstra::new(&self.graph).compute(source)
    }

    /// Nodes on the shortest path `[source, …, destination]`.
    ///
    /// `result` must have been computed from `source`.
    pub fn path_to(
        &self,
        result: &ShortestPathTree,
        source: NodeIndex,
        destination: NodeIndex,
    ) -> Result<Vec<NodeIndex>, SearchError> {
        self.graph.check_index(source)?;
        self.graph.check_index(destination)?;
        if result.source() != source {
            return Err(SearchError::SourceMismatch {
                expected: result.source(),
                actual: source,
            });
        }

        Ok(result.path_to(destination)?.nodes)
    }

    /// Total weight of the shortest path to `destination`, read from the
    /// distances stored in `result`.
    pub fn distance_to(
        &self,
        result: &ShortestPathTree,
        destination: NodeIndex,
    ) -> Result<Weight, SearchError> {
        self.graph.check_index(destination)?;
        result.distance_to(destination)
    }

    /// Computes the tree from `source` and extracts the path to `destination`.
    pub fn shortest_path(
        &self,
        source: NodeIndex,
        destination: NodeIndex,
    ) -> Result<ShortestPath, SearchError> {
        Dijkstra::new(&self.graph).search(source, destination)
    }
}

impl From<Graph> for ShortestPathEngine {
    fn from(graph: Graph) -> Self {
        ShortestPathEngine::new(graph)
    }
}
