//! Depth-first traversal and the connectivity check built on it.
//!
//! The traversal keeps an explicit stack instead of recursing, so deep chains
//! of links cannot exhaust the call stack.

use std::collections::HashSet;

use common::{GraphError, GraphResult, VertexId};
use tracing::debug;

use crate::graph::Graph;

/// DFS from `start`, calling `visit` once per reachable vertex.
///
/// Repeated edges and self-loops are harmless: a vertex is marked before its
/// neighbors are pushed and skipped if it is popped again.
pub fn dfs<F>(graph: &Graph, start: VertexId, mut visit: F) -> GraphResult<()>
where
    F: FnMut(VertexId),
{
    if !graph.contains_vertex(start) {
        return Err(GraphError::NotFound(start));
    }

    let adjacency = graph.adjacency_view();
    let mut visited = HashSet::with_capacity(graph.vertex_count());
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }

        visit(node);

        if let Some(neighbors) = adjacency.get(&node) {
            for (neighbor, _weight) in neighbors {
                if !visited.contains(neighbor) {
                    stack.push(*neighbor);
                }
            }
        }
    }

    Ok(())
}

/// Outcome of a connectivity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// No vertices at all; neither connected nor disconnected.
    Empty,
    /// Every vertex is reachable from the start vertex.
    Connected,
    /// Only `reached` of `total` vertices were reachable.
    Disconnected { reached: usize, total: usize },
}

impl Connectivity {
    pub fn is_connected(self) -> bool {
        matches!(self, Connectivity::Connected)
    }
}

/// Classify the graph by traversing from its lowest vertex id.
///
/// The start vertex does not affect the answer since edges are undirected.
pub fn check_connectivity(graph: &Graph) -> Connectivity {
    let Some((start, _)) = graph.vertices().next() else {
        return Connectivity::Empty;
    };

    let mut reached = 0usize;
    // `start` was just taken from the graph, so the traversal cannot fail.
    let _ = dfs(graph, start, |_| reached += 1);

    let total = graph.vertex_count();
    debug!(%start, reached, total, "connectivity traversal finished");
    if reached == total {
        Connectivity::Connected
    } else {
        Connectivity::Disconnected { reached, total }
    }
}

/// `Some(true)` if connected, `Some(false)` if not, `None` for an empty graph.
pub fn is_connected(graph: &Graph) -> Option<bool> {
    match check_connectivity(graph) {
        Connectivity::Empty => None,
        connectivity => Some(connectivity.is_connected()),
    }
}
