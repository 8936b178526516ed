//! Graph algorithms over [`Graph`](crate::graph::Graph).

pub mod min_spanning_tree;
pub mod traversal;

use std::collections::HashMap;

use common::VertexId;

use crate::graph::Graph;
use crate::unionfind::UnionFind;

pub use min_spanning_tree::{build_mst, SpanningTree};
pub use traversal::{check_connectivity, dfs, is_connected, Connectivity};

/// Dense index `0..n` for each vertex, in ascending id order.
pub(crate) fn vertex_indices(graph: &Graph) -> HashMap<VertexId, usize> {
    graph
        .vertices()
        .enumerate()
        .map(|(index, (id, _))| (id, index))
        .collect()
}

/// Return the number of connected components of the graph.
pub fn connected_components(graph: &Graph) -> usize {
    let index = vertex_indices(graph);
    let mut node_sets = UnionFind::new(index.len());
    for edge in graph.edges() {
        if let (Some(&a), Some(&b)) = (index.get(&edge.u), index.get(&edge.v)) {
            node_sets.union(a, b);
        }
    }

    let mut labels = node_sets.into_labeling();
    labels.sort_unstable();
    labels.dedup();
    labels.len()
}
