use crate::constants::{Weight, MAX_WEIGHT};
use crate::error::{InvalidGraph, SearchError};
use anyhow::Context;
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path};

/// Default integer type for node indices
pub type DefaultIdx = u32;

/// Node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct NodeIndex(DefaultIdx);

impl NodeIndex {
    /// Indices that do not fit into `DefaultIdx` map to `DefaultIdx::MAX`,
    /// which is out of range for every graph.
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(DefaultIdx::try_from(x).unwrap_or(DefaultIdx::MAX))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for NodeIndex {
    fn from(ix: usize) -> Self {
        NodeIndex::new(ix)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Directed, weighted edge used to assemble a matrix from an edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }
}

/// Weighted directed graph stored as a dense adjacency matrix.
///
/// The graph is validated once at construction and read-only afterwards.
/// `weights[u][v] == None` means there is no edge from `u` to `v`.
#[derive(Debug, Clone)]
pub struct Graph {
    weights: Vec<Vec<Option<Weight>>>,
    labels: Vec<String>,
    label_index: FxHashMap<String, NodeIndex>,
}

impl Graph {
    /// Builds a graph from a raw weight matrix and one label per node.
    ///
    /// A weight of `0` means "no edge", matching the matrix files this engine
    /// reads. Fails if the matrix is empty or not square, if any weight is
    /// negative or above [`MAX_WEIGHT`], or if the number of labels differs
    /// from the number of rows.
    pub fn new<I, S>(weights: Vec<Vec<i64>>, labels: I) -> Result<Self, InvalidGraph>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let num_nodes = weights.len();
        if num_nodes == 0 {
            return Err(InvalidGraph::Empty);
        }

        let mut matrix = Vec::with_capacity(num_nodes);
        for (row, columns) in weights.into_iter().enumerate() {
            if columns.len() != num_nodes {
                return Err(InvalidGraph::NotSquare {
                    row,
                    len: columns.len(),
                    expected: num_nodes,
                });
            }

            let mut cells = Vec::with_capacity(num_nodes);
            for (column, weight) in columns.into_iter().enumerate() {
                if weight < 0 {
                    return Err(InvalidGraph::NegativeWeight {
                        row,
                        column,
                        weight,
                    });
                }
                let weight = weight as Weight;
                check_weight(row, column, weight)?;
                cells.push(if weight == 0 { None } else { Some(weight) });
            }
            matrix.push(cells);
        }

        Self::from_matrix(matrix, labels.into_iter().map(Into::into).collect())
    }

    /// Builds a graph with one node per label from a list of directed edges.
    ///
    /// Zero weight edges are dropped. If an edge is listed more than once the
    /// lowest weight is kept.
    pub fn from_edges<I, S>(
        labels: I,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let num_nodes = labels.len();
        if num_nodes == 0 {
            return Err(InvalidGraph::Empty.into());
        }

        let mut matrix = vec![vec![None; num_nodes]; num_nodes];
        for edge in edges {
            for idx in [edge.source, edge.target] {
                if idx.index() >= num_nodes {
                    return Err(SearchError::OutOfRange {
                        index: idx.index(),
                        node_count: num_nodes,
                    });
                }
            }
            if edge.weight == 0 {
                continue;
            }
            check_weight(edge.source.index(), edge.target.index(), edge.weight)?;

            let cell = &mut matrix[edge.source.index()][edge.target.index()];
            if cell.map_or(true, |old| edge.weight < old) {
                *cell = Some(edge.weight);
            }
        }

        Ok(Self::from_matrix(matrix, labels)?)
    }

    fn from_matrix(
        weights: Vec<Vec<Option<Weight>>>,
        labels: Vec<String>,
    ) -> Result<Self, InvalidGraph> {
        if labels.len() != weights.len() {
            return Err(InvalidGraph::LabelCountMismatch {
                labels: labels.len(),
                nodes: weights.len(),
            });
        }

        let mut label_index = FxHashMap::with_capacity_and_hasher(labels.len(), Default::default());
        for (i, label) in labels.iter().enumerate() {
            // Duplicate labels resolve to the first node carrying them
            label_index.entry(label.clone()).or_insert(node_index(i));
        }

        Ok(Graph {
            weights,
            labels,
            label_index,
        })
    }

    /// Number of nodes. Always positive.
    pub fn node_count(&self) -> usize {
        self.weights.len()
    }

    /// Number of directed edges
    pub fn num_edges(&self) -> usize {
        self.weights
            .iter()
            .map(|row| row.iter().filter(|w| w.is_some()).count())
            .sum()
    }

    pub fn contains(&self, node_idx: NodeIndex) -> bool {
        node_idx.index() < self.node_count()
    }

    /// Returns `OutOfRange` if `node_idx` is not a node of this graph.
    pub fn check_index(&self, node_idx: NodeIndex) -> Result<(), SearchError> {
        if self.contains(node_idx) {
            Ok(())
        } else {
            Err(SearchError::OutOfRange {
                index: node_idx.index(),
                node_count: self.node_count(),
            })
        }
    }

    pub fn label(&self, node_idx: NodeIndex) -> Option<&str> {
        self.labels.get(node_idx.index()).map(String::as_str)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn node_by_label(&self, label: &str) -> Option<NodeIndex> {
        self.label_index.get(label).copied()
    }

    /// Looks `name` up as a label first, then as a node index.
    pub fn resolve(&self, name: &str) -> Option<NodeIndex> {
        self.node_by_label(name).or_else(|| {
            name.parse::<usize>()
                .ok()
                .filter(|i| *i < self.node_count())
                .map(node_index)
        })
    }

    /// Weight of the edge `source -> target`, `None` if there is no such edge
    /// or an index is out of range.
    pub fn weight(&self, source: NodeIndex, target: NodeIndex) -> Option<Weight> {
        self.weights
            .get(source.index())
            .and_then(|row| row.get(target.index()))
            .copied()
            .flatten()
    }

    /// Returns an iterator over all nodes of the graph
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.node_count()).map(node_index)
    }

    /// Targets and weights of all edges leaving `node_idx`.
    ///
    /// **Panics** if `node_idx` is out of range
    pub fn neighbors_outgoing(
        &self,
        node_idx: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.weights[node_idx.index()]
            .iter()
            .enumerate()
            .filter_map(|(target, weight)| weight.map(|w| (node_index(target), w)))
    }

    /// Sources and weights of all edges entering `node_idx`.
    ///
    /// **Panics** if `node_idx` is out of range
    pub fn neighbors_incoming(
        &self,
        node_idx: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .filter_map(move |(source, row)| row[node_idx.index()].map(|w| (node_index(source), w)))
    }

    pub fn print_info(&self) {
        println!("{}", self);
    }

    /// Reads a matrix file: a header row with one label per node followed by
    /// one row of integer weights per node (`0` = no edge).
    pub fn from_csv(path: &Path) -> anyhow::Result<Self> {
        info!("Reading weight matrix: {:?}", path);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| format!("Failed to open {:?}", path))?;

        let labels: Vec<String> = reader
            .headers()
            .context("Failed to read labels")?
            .iter()
            .map(str::to_string)
            .collect();

        let mut weights = Vec::with_capacity(labels.len());
        for (row, result) in reader.records().enumerate() {
            let record = result.with_context(|| format!("Failed to read row {}", row))?;
            let cells = record
                .iter()
                .enumerate()
                .map(|(column, field)| {
                    field.parse::<i64>().with_context(|| {
                        format!("Invalid weight {:?} in row {}, column {}", field, row, column)
                    })
                })
                .collect::<anyhow::Result<Vec<i64>>>()?;
            weights.push(cells);
        }

        let g = Graph::new(weights, labels).context("Invalid weight matrix")?;
        info!("Graph has {} nodes and {} edges", g.node_count(), g.num_edges());
        Ok(g)
    }

    /// Writes the graph in the format read by [`Graph::from_csv`].
    pub fn export_csv(&self, path: &Path) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create {:?}", path))?;

        debug!("BEGIN writing matrix");
        wtr.write_record(&self.labels)?;
        for row in &self.weights {
            wtr.write_record(row.iter().map(|w| w.unwrap_or(0).to_string()))?;
        }
        wtr.flush()?;
        debug!("FINISHED writing matrix");

        Ok(())
    }
}

fn check_weight(row: usize, column: usize, weight: Weight) -> Result<(), InvalidGraph> {
    if weight > MAX_WEIGHT {
        return Err(InvalidGraph::WeightTooLarge {
            row,
            column,
            weight,
            max: MAX_WEIGHT,
        });
    }
    Ok(())
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph:\t#Nodes: {}, #Edges: {}",
            self.node_count(),
            self.num_edges()
        )
    }
}

/// Macro to create a edge from source to target with a weight
///
/// edge!(0 , 1, 3) Returns edge in both directions
///
/// edge!(0 => 1, 3) Returns directed edge
#[macro_export]
macro_rules! edge {
    ($source:expr => $target:expr, $weight:expr) => {
        $crate::graph::Edge::new($source.into(), $target.into(), $weight)
    };
    ($source:expr , $target:expr, $weight:expr) => {
        vec![
            $crate::graph::Edge::new($source.into(), $target.into(), $weight),
            $crate::graph::Edge::new($target.into(), $source.into(), $weight),
        ]
    };
}
