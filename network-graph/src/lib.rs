//! **Fiber network graph** - locations joined by cable links weighted in km.
//!
//! # Components
//!
//! - [graph]: the store; vertices (id → label) and an ordered edge multiset
//! - [persistence]: the line-oriented text format, with all-or-nothing loads
//! - [unionfind]: disjoint-set forest used by the spanning tree builder
//! - [algorithms]: connectivity check (iterative DFS) and Kruskal's MST
//!
//! ```text
//! Graph (truth) ──► check_connectivity ──► Connected? ──► build_mst ──► SpanningTree
//! ```
//!
//! Queries never mutate the graph.
//!
//! # Example
//!
//! ```
//! use network_graph::{build_mst, check_connectivity, Graph};
//!
//! let mut graph = Graph::new();
//! let a = graph.insert_vertex("A");
//! let b = graph.insert_vertex("B");
//! let c = graph.insert_vertex("C");
//! graph.insert_edge(a, b, 10.0)?;
//! graph.insert_edge(b, c, 5.0)?;
//! graph.insert_edge(a, c, 8.0)?;
//!
//! assert!(check_connectivity(&graph).is_connected());
//! assert_eq!(build_mst(&graph)?.total_weight(), 13.0);
//! # Ok::<(), network_graph::GraphError>(())
//! ```

pub mod algorithms;
pub mod graph;
pub mod persistence;
pub mod unionfind;

pub use algorithms::{
    build_mst, check_connectivity, connected_components, dfs, is_connected, Connectivity, SpanningTree,
};
pub use common::{GraphError, GraphResult, VertexId};
pub use graph::{format_weight, AdjacencyView, Edge, Graph, WEIGHTED_UNDIRECTED};
pub use persistence::parse_weight;
pub use unionfind::UnionFind;
