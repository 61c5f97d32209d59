use rand::Rng;

use crate::{
    constants::Weight,
    edge,
    graph::{node_index, Edge, Graph},
};

/// Labels of [`generate_reference_graph`]
pub const REFERENCE_LABELS: [&str; 10] = [
    "MKS", "SUB", "CGK", "BDG", "DPS", "DHS", "MLG", "PDG", "YOG", "BTM",
];

/// Ten airports connected by symmetric routes.
pub fn generate_reference_graph() -> Graph {
    let weights = vec![
        vec![0, 2, 0, 3, 8, 0, 0, 0, 0, 0],
        vec![2, 0, 3, 0, 1, 0, 0, 0, 0, 0],
        vec![0, 3, 0, 4, 0, 4, 6, 0, 0, 0],
        vec![3, 0, 4, 0, 0, 0, 2, 0, 0, 0],
        vec![8, 1, 0, 0, 0, 2, 0, 0, 3, 10],
        vec![0, 0, 4, 0, 2, 0, 8, 0, 0, 3],
        vec![0, 0, 6, 2, 0, 8, 0, 4, 0, 0],
        vec![0, 0, 0, 0, 0, 0, 4, 0, 0, 3],
        vec![0, 0, 0, 0, 3, 0, 0, 0, 0, 4],
        vec![0, 0, 0, 0, 10, 3, 0, 3, 4, 0],
    ];

    Graph::new(weights, REFERENCE_LABELS).expect("reference matrix is valid")
}

pub fn generate_simple_graph() -> Graph {
    //           B
    //           |
    // E -> A -> C
    //      |  /
    //      D
    let a = node_index(0);
    let b = node_index(1);
    let c = node_index(2);
    let d = node_index(3);
    let e = node_index(4);

    let mut edges = vec![edge!(a => c, 1), edge!(a => d, 1), edge!(e => a, 1)];
    edges.extend(edge!(c, b, 1));
    edges.extend(edge!(c, d, 1));

    Graph::from_edges(["A", "B", "C", "D", "E"], edges).expect("simple graph is valid")
}

pub fn generate_disconnected_graph() -> Graph {
    // 0 -> 1 -> 2
    // 3 -> 4 -> 5
    // 6
    let edges = [
        edge!(node_index(0) => node_index(1), 1),
        edge!(node_index(1) => node_index(2), 1),
        edge!(node_index(3) => node_index(4), 3),
        edge!(node_index(4) => node_index(5), 1),
    ];

    Graph::from_edges(["A", "B", "C", "D", "E", "F", "G"], edges)
        .expect("disconnected graph is valid")
}

/// Random directed graph where each ordered pair of distinct nodes is
/// connected with probability `density` and a weight in `1..=max_weight`.
///
/// **Panics** if `num_nodes` or `max_weight` is zero or `density` is not in `[0, 1]`
pub fn generate_random_graph<R: Rng>(
    num_nodes: usize,
    density: f64,
    max_weight: Weight,
    rng: &mut R,
) -> Graph {
    let mut edges: Vec<Edge> = Vec::new();
    for u in 0..num_nodes {
        for v in (0..num_nodes).filter(|v| *v != u) {
            if rng.gen_bool(density) {
                edges.push(edge!(node_index(u) => node_index(v), rng.gen_range(1..=max_weight)));
            }
        }
    }

    let labels = (0..num_nodes).map(|i| format!("N{}", i));
    Graph::from_edges(labels, edges).expect("random graph is valid")
}
