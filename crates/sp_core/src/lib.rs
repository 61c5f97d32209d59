//! Crate to compute single-source shortest paths on small, dense graphs.
//!
//! The graph is a square matrix of non-negative integer weights where `0`
//! means "no edge", with one label per node. Distances and parent links from
//! a source are computed with Dijkstra's algorithm using linear
//! minimum selection, which fits the dense representation.
//!
//! # Basic usage
//! ```
//! use sp_core::prelude::*;
//!
//! // Ten airports with symmetric routes
//! let g = generate_reference_graph();
//! let mks = g.node_by_label("MKS").unwrap();
//! let dhs = g.node_by_label("DHS").unwrap();
//!
//! let engine = ShortestPathEngine::new(g);
//!
//! // Distances and parents from MKS to every node
//! let result = engine.compute(mks).unwrap();
//!
//! let path = engine.path_to(&result, mks, dhs).unwrap();
//! let distance = engine.distance_to(&result, dhs).unwrap();
//!
//! assert_eq!(path.len(), 4);
//! assert_eq!(distance, 5);
//!```
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod engine;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
