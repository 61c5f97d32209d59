//! Re-exports of the most commonly used items in `sp_core`.
pub use crate::constants::{Weight, INFINITY};
pub use crate::engine::ShortestPathEngine;
pub use crate::error::{InvalidGraph, SearchError};

pub use crate::search;
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::shortest_path::ShortestPath;
pub use crate::search::tree::ShortestPathTree;

pub use crate::graph::node_index;
pub use crate::graph::Graph;
pub use crate::graph::NodeIndex;
pub use crate::util::test_graphs::generate_reference_graph;
