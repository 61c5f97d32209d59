use crate::constants::{Weight, INFINITY};
use crate::error::SearchError;
use crate::graph::*;
use crate::search::shortest_path::ShortestPath;
use crate::search::tree::ShortestPathTree;
use crate::statistics::SearchStats;
use log::{debug, info, trace};

/// Dijkstra's algorithm on the dense weight matrix.
///
/// The next node to settle is found by a linear scan over all unsettled
/// nodes, which is O(n²) overall and needs no priority queue. Ties are
/// broken by the lowest node index, so results are reproducible.
pub struct Dijkstra<'a> {
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra { g: graph }
    }

    /// Computes distances and parent links from `source` to every node.
    pub fn compute(&self, source: NodeIndex) -> Result<ShortestPathTree, SearchError> {
        self.g.check_index(source)?;

        let mut stats = SearchStats::default();
        stats.init();

        let num_nodes = self.g.node_count();
        let mut distance = vec![INFINITY; num_nodes];
        let mut parent: Vec<Option<NodeIndex>> = vec![None; num_nodes];
        let mut visited = vec![false; num_nodes];

        distance[source.index()] = 0;

        // The last remaining node cannot improve any other node
        for _ in 1..num_nodes {
            let Some(u) = min_distance(&distance, &visited) else {
                trace!("Only unreachable nodes left");
                break;
            };

            visited[u.index()] = true;
            stats.nodes_settled += 1;
            trace!("Settled {} at distance {}", u, distance[u.index()]);

            for (v, weight) in self.g.neighbors_outgoing(u) {
                if visited[v.index()] {
                    continue;
                }

                let new_distance = distance[u.index()].saturating_add(weight);
                if new_distance < distance[v.index()] {
                    distance[v.index()] = new_distance;
                    parent[v.index()] = Some(u);
                    stats.edges_relaxed += 1;
                }
            }
        }
        stats.finish();

        debug!("Computed shortest path tree from {}: {}", source, stats);

        Ok(ShortestPathTree::new(source, distance, parent, stats))
    }

    /// Shortest path from `source` to `target`.
    pub fn search(&self, source: NodeIndex, target: NodeIndex) -> Result<ShortestPath, SearchError> {
        self.g.check_index(target)?;

        let tree = self.compute(source)?;
        let sp = tree.path_to(target);

        match &sp {
            Ok(path) => {
                debug!("Path found: {:?}", path);
                info!(
                    "Path found: {:?}/{} nodes settled",
                    tree.stats.duration, tree.stats.nodes_settled
                );
            }
            Err(_) => info!(
                "No path found: {:?}/{} nodes settled",
                tree.stats.duration, tree.stats.nodes_settled
            ),
        }

        sp
    }
}

/// Unvisited node with the smallest finite distance, lowest index on ties.
fn min_distance(distance: &[Weight], visited: &[bool]) -> Option<NodeIndex> {
    let mut min = INFINITY;
    let mut index = None;

    for (i, (&d, &done)) in distance.iter().zip(visited).enumerate() {
        if !done && d < min {
            min = d;
            index = Some(node_index(i));
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        constants::MAX_WEIGHT,
        edge,
        search::{assert_no_path, assert_path},
        util::test_graphs::{
            generate_disconnected_graph, generate_random_graph, generate_reference_graph,
            generate_simple_graph,
        },
    };

    use super::*;

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Minimal distance from `source` to every node by enumerating all simple
    /// paths.
    fn brute_force(g: &Graph, source: NodeIndex) -> Vec<Weight> {
        fn visit(
            g: &Graph,
            node: NodeIndex,
            cost: Weight,
            best: &mut [Weight],
            on_path: &mut [bool],
        ) {
            best[node.index()] = best[node.index()].min(cost);
            on_path[node.index()] = true;
            for (next, weight) in g.neighbors_outgoing(node) {
                if !on_path[next.index()] {
                    visit(g, next, cost + weight, best, on_path);
                }
            }
            on_path[node.index()] = false;
        }

        let mut best = vec![INFINITY; g.node_count()];
        let mut on_path = vec![false; g.node_count()];
        visit(g, source, 0, &mut best, &mut on_path);
        best
    }

    fn random_graph() -> impl Strategy<Value = (Graph, usize)> {
        (1usize..=6)
            .prop_flat_map(|n| {
                (
                    proptest::collection::vec(proptest::collection::vec(0i64..10, n), n),
                    0..n,
                )
            })
            .prop_map(|(weights, source)| {
                let labels: Vec<String> = (0..weights.len()).map(|i| i.to_string()).collect();
                (Graph::new(weights, labels).unwrap(), source)
            })
    }

    #[test]
    fn reference_scenario() {
        init_log();
        let g = generate_reference_graph();
        let d = Dijkstra::new(&g);

        let mks = g.node_by_label("MKS").unwrap();
        let sub = g.node_by_label("SUB").unwrap();
        let dhs = g.node_by_label("DHS").unwrap();

        let tree = d.compute(mks).unwrap();
        assert_eq!(tree.distance(sub), Some(2));

        // MKS -> DPS -> DHS costs 10, going through SUB is cheaper
        let sp = d.search(mks, dhs).unwrap();
        assert_eq!(sp.display(&g), "MKS → SUB → DPS → DHS");
        assert_eq!(sp.weight, 5);
    }

    #[test]
    fn reference_distances() {
        let g = generate_reference_graph();

        let tree = Dijkstra::new(&g).compute(node_index(0)).unwrap();

        assert_eq!(tree.distances(), &[0, 2, 5, 3, 3, 5, 5, 9, 6, 8]);
        assert!(tree.parents()[0].is_none());
    }

    #[test]
    fn simple_path() {
        //           B
        //           |
        // E -> A -> C
        //      |  /
        //      D
        let g = generate_simple_graph();
        let d = Dijkstra::new(&g);

        assert_path(vec![4, 0, 2, 1], 3, d.search(node_index(4), node_index(1)));
        assert_path(vec![3, 2, 1], 2, d.search(node_index(3), node_index(1)));
        assert_path(vec![0], 0, d.search(node_index(0), node_index(0)));
        assert_no_path(d.search(node_index(0), node_index(4))); // Cannot be reached
    }

    #[test]
    fn go_around() {
        // 0 -> 1
        // |    |
        // 2 -> 3
        let a = node_index(0);
        let b = node_index(1);
        let c = node_index(2);
        let d = node_index(3);
        let g = Graph::from_edges(
            ["A", "B", "C", "D"],
            [
                edge!(a => b, 10),
                edge!(a => c, 1),
                edge!(c => d, 1),
                edge!(d => b, 1),
            ],
        )
        .unwrap();

        assert_path(vec![0, 2, 3, 1], 3, Dijkstra::new(&g).search(a, b));
    }

    #[test]
    fn respects_direction() {
        let g = Graph::new(vec![vec![0, 7], vec![0, 0]], ["A", "B"]).unwrap();
        let d = Dijkstra::new(&g);

        assert_path(vec![0, 1], 7, d.search(node_index(0), node_index(1)));
        assert_no_path(d.search(node_index(1), node_index(0)));
    }

    #[test]
    fn single_node() {
        let g = Graph::new(vec![vec![0]], ["A"]).unwrap();

        let tree = Dijkstra::new(&g).compute(node_index(0)).unwrap();

        assert_eq!(tree.distances(), &[0]);
        assert_eq!(tree.parents(), &[None]);
        assert_eq!(tree.stats.nodes_settled, 0);
        assert_eq!(tree.stats.edges_relaxed, 0);
    }

    #[test]
    fn disconnected_graph() {
        // 0 -> 1 -> 2
        // 3 -> 4 -> 5
        // 6
        let g = generate_disconnected_graph();
        let d = Dijkstra::new(&g);

        assert_no_path(d.search(node_index(0), node_index(3)));
        assert_no_path(d.search(node_index(3), node_index(0)));
        assert_path(vec![0, 1, 2], 2, d.search(node_index(0), node_index(2)));
        assert_path(vec![3, 4, 5], 4, d.search(node_index(3), node_index(5)));

        for source in g.nodes().filter(|n| n.index() != 6) {
            let tree = d.compute(source).unwrap();
            assert_eq!(tree.distances()[6], INFINITY);
            assert_eq!(tree.parent(node_index(6)), None);
        }
    }

    #[test]
    fn tie_break_prefers_lowest_index() {
        // Two paths of cost 2 from 0 to 3, through 1 and through 2
        let (n0, n1, n2, n3) = (node_index(0), node_index(1), node_index(2), node_index(3));
        let edges = [
            edge!(n0 => n1, 1),
            edge!(n0 => n2, 1),
            edge!(n1 => n3, 1),
            edge!(n2 => n3, 1),
        ];
        let labels = ["A", "B", "C", "D"];

        let g = Graph::from_edges(labels, edges).unwrap();
        let mut reversed_edges = edges;
        reversed_edges.reverse();
        let g_reversed = Graph::from_edges(labels, reversed_edges).unwrap();

        for _ in 0..3 {
            assert_path(vec![0, 1, 3], 2, Dijkstra::new(&g).search(n0, n3));
            assert_path(vec![0, 1, 3], 2, Dijkstra::new(&g_reversed).search(n0, n3));
        }
    }

    #[test]
    fn out_of_range() {
        let g = generate_simple_graph();
        let d = Dijkstra::new(&g);

        assert_eq!(
            d.compute(node_index(5)).unwrap_err(),
            SearchError::OutOfRange {
                index: 5,
                node_count: 5
            }
        );
        assert_eq!(
            d.search(node_index(0), node_index(9)).unwrap_err(),
            SearchError::OutOfRange {
                index: 9,
                node_count: 5
            }
        );
        // Must not wrap around to node 0
        assert!(matches!(
            d.compute(node_index(1usize << 32)),
            Err(SearchError::OutOfRange { node_count: 5, .. })
        ));
        assert!(matches!(
            d.search(node_index(0), node_index((1usize << 32) + 1)),
            Err(SearchError::OutOfRange { node_count: 5, .. })
        ));
    }

    #[test]
    fn large_weights_do_not_overflow() {
        let big = MAX_WEIGHT as i64;
        let g = Graph::new(vec![vec![0, big, 0], vec![0, 0, big], vec![0, 0, 0]], ["A", "B", "C"])
            .unwrap();

        let tree = Dijkstra::new(&g).compute(node_index(0)).unwrap();

        assert_eq!(tree.distance(node_index(1)), Some(MAX_WEIGHT));
        assert_eq!(tree.distance(node_index(2)), Some(2 * MAX_WEIGHT));
    }

    #[test]
    fn long_chain_of_max_weights_stays_reachable() {
        // A -> B -> C -> D -> E, every edge at the weight limit
        let n = 5;
        let nodes: Vec<_> = (0..n).map(node_index).collect();
        let edges: Vec<_> = nodes
            .windows(2)
            .map(|pair| edge!(pair[0] => pair[1], MAX_WEIGHT))
            .collect();
        let g = Graph::from_edges(["A", "B", "C", "D", "E"], edges).unwrap();

        let tree = Dijkstra::new(&g).compute(nodes[0]).unwrap();

        for (i, node) in nodes.iter().enumerate() {
            assert_eq!(tree.distance(*node), Some(i as Weight * MAX_WEIGHT));
        }
        assert_path(
            vec![0, 1, 2, 3, 4],
            4 * MAX_WEIGHT,
            Dijkstra::new(&g).search(nodes[0], nodes[4]),
        );
    }

    #[test]
    fn matches_brute_force() {
        init_log();
        let mut runner = proptest::test_runner::TestRunner::default();

        runner
            .run(&random_graph(), |(g, source)| {
                let tree = Dijkstra::new(&g).compute(node_index(source)).unwrap();
                let expected = brute_force(&g, node_index(source));
                prop_assert_eq!(tree.distances(), expected.as_slice());
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn parent_chains_match_distances() {
        let mut runner = proptest::test_runner::TestRunner::default();

        runner
            .run(&random_graph(), |(g, source)| {
                let source = node_index(source);
                let tree = Dijkstra::new(&g).compute(source).unwrap();

                prop_assert_eq!(tree.distance(source), Some(0));
                prop_assert_eq!(tree.parent(source), None);

                for target in g.nodes() {
                    match tree.path_to(target) {
                        Ok(sp) => {
                            prop_assert_eq!(sp.source(), Some(source));
                            prop_assert_eq!(sp.target(), Some(target));
                            let sum: Weight = sp
                                .steps()
                                .map(|(u, v)| g.weight(u, v).unwrap())
                                .sum();
                            prop_assert_eq!(sum, sp.weight);
                        }
                        Err(e) => {
                            prop_assert_eq!(
                                e,
                                SearchError::Unreachable {
                                    from: source,
                                    to: target
                                }
                            );
                            prop_assert_eq!(tree.distances()[target.index()], INFINITY);
                        }
                    }
                }
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn compute_is_idempotent() {
        let mut rng = rand::thread_rng();
        let g = generate_random_graph(25, 0.2, 20, &mut rng);
        let d = Dijkstra::new(&g);

        for source in g.nodes() {
            let first = d.compute(source).unwrap();
            let second = d.compute(source).unwrap();

            assert_eq!(first.distances(), second.distances());
            assert_eq!(first.parents(), second.parents());
        }
    }
}
