//! Error types for graph operations.
//!
//! Every variant is recoverable: callers report the error, leave the graph
//! untouched and carry on with the next command.

use thiserror::Error;

use crate::VertexId;

/// Errors raised by the graph store, its text codec and the algorithms.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Persisted data does not match the expected line shape.
    #[error("Format error at line {line}: {reason}")]
    Format {
        /// 1-based line number in the source text.
        line: usize,
        /// What was expected at that line.
        reason: String,
    },

    /// Edge insertion named a vertex that does not exist.
    #[error("Invalid vertices: edge {u} - {v} references a missing vertex")]
    InvalidReference {
        /// First endpoint as given.
        u: VertexId,
        /// Second endpoint as given.
        v: VertexId,
    },

    /// Removal of a vertex that does not exist.
    #[error("Vertex not found: {0}")]
    NotFound(VertexId),

    /// Spanning tree requested on a graph without edges.
    #[error("Graph is empty or has no edges")]
    EmptyGraph,

    /// Reading or writing the graph file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Shorthand for a [`GraphError::Format`] at `line`.
    pub fn format(line: usize, reason: impl Into<String>) -> Self {
        Self::Format {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type for graph operations.
pub type GraphResult<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GraphError::format(3, "expected vertex record");
        assert_eq!(err.to_string(), "Format error at line 3: expected vertex record");

        let err = GraphError::InvalidReference {
            u: VertexId::new(1),
            v: VertexId::new(9),
        };
        assert!(err.to_string().contains("1 - 9"));

        assert_eq!(GraphError::NotFound(VertexId::new(4)).to_string(), "Vertex not found: 4");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "grafo.txt");
        let err: GraphError = io.into();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
