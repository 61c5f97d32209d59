use serde::{Deserialize, Serialize};

use crate::{
    constants::{Weight, INFINITY},
    error::SearchError,
    graph::NodeIndex,
    statistics::SearchStats,
};

use super::{reconstruct_path, shortest_path::ShortestPath};

/// Distances and parent links from a single source to every node.
///
/// Produced by [`Dijkstra::compute`](super::dijkstra::Dijkstra::compute) and
/// owned by the caller. Queries only read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortestPathTree {
    source: NodeIndex,
    distance: Vec<Weight>,
    parent: Vec<Option<NodeIndex>>,
    #[serde(skip)]
    pub stats: SearchStats,
}

impl ShortestPathTree {
    pub(crate) fn new(
        source: NodeIndex,
        distance: Vec<Weight>,
        parent: Vec<Option<NodeIndex>>,
        stats: SearchStats,
    ) -> Self {
        ShortestPathTree {
            source,
            distance,
            parent,
            stats,
        }
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn node_count(&self) -> usize {
        self.distance.len()
    }

    /// Distance of every node, [`INFINITY`] for unreachable nodes.
    pub fn distances(&self) -> &[Weight] {
        &self.distance
    }

    /// Raw parent array. `None` for the source and for unreachable nodes.
    pub fn parents(&self) -> &[Option<NodeIndex>] {
        &self.parent
    }

    /// Finite distance to `node_idx`, `None` if it is unreachable or unknown.
    pub fn distance(&self, node_idx: NodeIndex) -> Option<Weight> {
        self.distance
            .get(node_idx.index())
            .copied()
            .filter(|d| *d != INFINITY)
    }

    pub fn parent(&self, node_idx: NodeIndex) -> Option<NodeIndex> {
        self.parent.get(node_idx.index()).copied().flatten()
    }

    pub fn is_reachable(&self, node_idx: NodeIndex) -> bool {
        self.distance(node_idx).is_some()
    }

    /// All nodes with a finite distance, in index order.
    pub fn reachable(&self) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.distance
            .iter()
            .enumerate()
            .filter(|(_, d)| **d != INFINITY)
            .map(|(i, d)| (NodeIndex::new(i), *d))
    }

    fn check_index(&self, node_idx: NodeIndex) -> Result<(), SearchError> {
        if node_idx.index() < self.node_count() {
            Ok(())
        } else {
            Err(SearchError::OutOfRange {
                index: node_idx.index(),
                node_count: self.node_count(),
            })
        }
    }

    fn unreachable(&self, target: NodeIndex) -> SearchError {
        SearchError::Unreachable {
            from: self.source,
            to: target,
        }
    }

    /// Precomputed distance to `target`.
    pub fn distance_to(&self, target: NodeIndex) -> Result<Weight, SearchError> {
        self.check_index(target)?;
        self.distance(target).ok_or_else(|| self.unreachable(target))
    }

    /// Path from the source to `target` with its precomputed weight.
    pub fn path_to(&self, target: NodeIndex) -> Result<ShortestPath, SearchError> {
        let weight = self.distance_to(target)?;
        let nodes = reconstruct_path(target, self.source, &self.parent)
            .ok_or_else(|| self.unreachable(target))?;

        Ok(ShortestPath::new(nodes, weight))
    }
}
