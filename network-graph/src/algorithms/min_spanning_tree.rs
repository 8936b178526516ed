//! Kruskal's minimum spanning tree over the current edge list.

use common::{GraphError, GraphResult};
use tracing::info;

use crate::algorithms::vertex_indices;
use crate::graph::{Edge, Graph};
use crate::unionfind::UnionFind;

/// The reduced form of a network: the edges kept by the spanning tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpanningTree {
    pub edges: Vec<Edge>,
}

impl SpanningTree {
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|edge| edge.weight).sum()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Build a minimum spanning tree with Kruskal's algorithm.
///
/// Edges are taken in ascending weight; the sort is stable, so equal weights
/// keep their insertion order and the output is reproducible. An edge whose
/// endpoints already share a set would close a cycle and is skipped.
///
/// Callers check connectivity first. On a disconnected graph the result is a
/// minimum spanning forest with fewer than `|V| - 1` edges.
pub fn build_mst(graph: &Graph) -> GraphResult<SpanningTree> {
    if graph.edge_count() == 0 {
        return Err(GraphError::EmptyGraph);
    }

    let index = vertex_indices(graph);
    let mut sorted: Vec<&Edge> = graph.edges().iter().collect();
    sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut sets = UnionFind::new(index.len());
    let mut tree = SpanningTree {
        edges: Vec::with_capacity(graph.vertex_count().saturating_sub(1)),
    };

    for edge in sorted {
        let (Some(&a), Some(&b)) = (index.get(&edge.u), index.get(&edge.v)) else {
            return Err(GraphError::InvalidReference { u: edge.u, v: edge.v });
        };
        if sets.union(a, b) {
            tree.edges.push(*edge);
        }
    }

    info!(
        edges = tree.len(),
        total_weight = tree.total_weight(),
        "built minimum spanning tree"
    );
    Ok(tree)
}
