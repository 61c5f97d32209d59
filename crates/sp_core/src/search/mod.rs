use crate::graph::NodeIndex;

pub mod dijkstra;
pub mod shortest_path;
pub mod tree;

/// Walks parent links backward from `target` until `source` is reached and
/// returns the nodes in forward order.
///
/// Returns `None` if the chain ends before reaching `source` or does not
/// terminate.
pub fn reconstruct_path(
    target: NodeIndex,
    source: NodeIndex,
    parents: &[Option<NodeIndex>],
) -> Option<Vec<NodeIndex>> {
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        current = (*parents.get(current.index())?)?;
        path.push(current);

        if path.len() > parents.len() {
            return None;
        }
    }
    path.reverse();
    Some(path)
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<usize>,
    expected_weight: crate::constants::Weight,
    path: Result<shortest_path::ShortestPath, crate::error::SearchError>,
) {
    let expected_path = expected_path
        .into_iter()
        .map(crate::graph::node_index)
        .collect();
    assert_eq!(
        Ok(shortest_path::ShortestPath::new(expected_path, expected_weight)),
        path
    );
}

#[cfg(test)]
pub(crate) fn assert_no_path(path: Result<shortest_path::ShortestPath, crate::error::SearchError>) {
    assert!(
        matches!(path, Err(crate::error::SearchError::Unreachable { .. })),
        "expected no path, got {:?}",
        path
    );
}
