//! In-memory store for the fiber network.
//!
//! Vertices map an id to a free-text label; edges are kept in insertion order
//! because they form a multiset (parallel links are allowed) and the order
//! decides tie-breaks in the spanning tree.

use std::collections::BTreeMap;

use common::{GraphError, GraphResult, VertexId};
use tracing::{debug, info, warn};

/// Kind marker for a weighted undirected graph, the default for new graphs.
pub const WEIGHTED_UNDIRECTED: i64 = 2;

/// A cable link between two locations, weighted by its length in kilometers.
///
/// Undirected: `(u, v, w)` and `(v, u, w)` describe the same link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub u: VertexId,
    pub v: VertexId,
    pub weight: f64,
}

impl Edge {
    pub fn new(u: VertexId, v: VertexId, weight: f64) -> Self {
        Self { u, v, weight }
    }

    /// True if this edge joins `a` and `b` in either orientation.
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.u == a && self.v == b) || (self.u == b && self.v == a)
    }

    /// True if `id` is one of the endpoints.
    pub fn touches(&self, id: VertexId) -> bool {
        self.u == id || self.v == id
    }
}

/// Adjacency derived from the edge list: vertex id → `(neighbor, weight)`.
pub type AdjacencyView = BTreeMap<VertexId, Vec<(VertexId, f64)>>;

/// Weighted undirected graph of locations and cable links.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    kind: i64,
    vertices: BTreeMap<VertexId, String>,
    edges: Vec<Edge>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Empty weighted undirected graph.
    pub fn new() -> Self {
        Self::with_kind(WEIGHTED_UNDIRECTED)
    }

    /// Empty graph carrying the given kind marker.
    pub fn with_kind(kind: i64) -> Self {
        Self {
            kind,
            vertices: BTreeMap::new(),
            edges: Vec::new(),
        }
    }

    /// Assemble a graph from parts that were already validated.
    pub(crate) fn from_parts(kind: i64, vertices: BTreeMap<VertexId, String>, edges: Vec<Edge>) -> Self {
        Self { kind, vertices, edges }
    }

    /// Informational kind marker preserved through load/save.
    pub fn kind(&self) -> i64 {
        self.kind
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn label(&self, id: VertexId) -> Option<&str> {
        self.vertices.get(&id).map(String::as_str)
    }

    /// Vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &str)> + '_ {
        self.vertices.iter().map(|(id, label)| (*id, label.as_str()))
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Id the next inserted vertex will receive: `max + 1`, or `0` when empty.
    ///
    /// When the maximum is [`VertexId::MAX`] there is no `max + 1`; the lowest
    /// unused id is handed out instead so insertion never fails.
    pub fn next_vertex_id(&self) -> VertexId {
        match self.vertices.keys().next_back() {
            None => VertexId::new(0),
            Some(max) => max.checked_next().unwrap_or_else(|| self.lowest_free_id()),
        }
    }

    fn lowest_free_id(&self) -> VertexId {
        let mut candidate = 0u64;
        for id in self.vertices.keys() {
            if id.value() != candidate {
                break;
            }
            candidate += 1;
        }
        VertexId::new(candidate)
    }

    /// Add a location and return its freshly assigned id.
    pub fn insert_vertex(&mut self, label: impl Into<String>) -> VertexId {
        let id = self.next_vertex_id();
        let label = label.into();
        debug!(%id, label = %label, "inserting vertex");
        self.vertices.insert(id, label);
        id
    }

    /// Append a link between two existing vertices.
    ///
    /// Parallel edges and self-loops are accepted as given.
    pub fn insert_edge(&mut self, u: VertexId, v: VertexId, weight: f64) -> GraphResult<()> {
        if !self.contains_vertex(u) || !self.contains_vertex(v) {
            warn!(%u, %v, "rejecting edge with missing endpoint");
            return Err(GraphError::InvalidReference { u, v });
        }
        debug!(%u, %v, weight, "inserting edge");
        self.edges.push(Edge { u, v, weight });
        Ok(())
    }

    /// Remove a vertex together with every edge incident to it.
    ///
    /// Returns the removed label.
    pub fn remove_vertex(&mut self, id: VertexId) -> GraphResult<String> {
        let label = self.vertices.remove(&id).ok_or(GraphError::NotFound(id))?;
        let before = self.edges.len();
        self.edges.retain(|edge| !edge.touches(id));
        info!(%id, dropped_edges = before - self.edges.len(), "removed vertex");
        Ok(label)
    }

    /// Remove every edge joining `u` and `v` in either orientation.
    ///
    /// Returns how many edges were removed; zero is not an error.
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> usize {
        let before = self.edges.len();
        self.edges.retain(|edge| !edge.connects(u, v));
        let removed = before - self.edges.len();
        debug!(%u, %v, removed, "removed edges");
        removed
    }

    /// Per-vertex neighbor lists in ascending vertex order.
    ///
    /// Each edge contributes an entry to both endpoints, so a self-loop shows
    /// up twice on its vertex. Isolated vertices map to an empty list.
    pub fn adjacency_view(&self) -> AdjacencyView {
        let mut adjacency: AdjacencyView = self.vertices.keys().map(|id| (*id, Vec::new())).collect();
        for edge in &self.edges {
            if let Some(list) = adjacency.get_mut(&edge.u) {
                list.push((edge.v, edge.weight));
            }
            if let Some(list) = adjacency.get_mut(&edge.v) {
                list.push((edge.u, edge.weight));
            }
        }
        adjacency
    }
}

/// Render a weight the way the text format stores it: shortest round-trip
/// form, always with a decimal point for whole numbers (`10.0`, `2.5`).
pub fn format_weight(weight: f64) -> String {
    format!("{weight:?}")
}
