//! Common types and utilities shared across the fiber network crates.
//!
//! This crate sits at the bottom of the dependency hierarchy:
//! - Has NO dependencies on other workspace crates
//! - Provides the vertex identifier, the error enum and logging setup
//!   that `network-graph` and the `fibernet` binary both use

pub mod errors;
pub mod logging;

pub use errors::{GraphError, GraphResult};

use std::str::FromStr;

/// Identifier of a vertex (a location) in the fiber network.
///
/// Ids are non-negative and unique within one graph. Using a newtype instead
/// of a bare integer keeps vertex ids from being mixed with counts or indices.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct VertexId(u64);

impl VertexId {
    /// Create a new VertexId from its numeric value
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric value
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Largest representable id; it has no successor.
    pub const MAX: VertexId = VertexId(u64::MAX);

    /// The id following this one, or `None` for [`VertexId::MAX`].
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for VertexId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id_parse() {
        assert_eq!("42".parse::<VertexId>().unwrap(), VertexId::new(42));
        assert_eq!(" 7 ".parse::<VertexId>().unwrap(), VertexId::new(7));
        assert!("-1".parse::<VertexId>().is_err());
        assert!("abc".parse::<VertexId>().is_err());
    }

    #[test]
    fn test_vertex_id_ordering_and_next() {
        let a = VertexId::new(3);
        assert!(a < a.checked_next().unwrap());
        assert_eq!(a.checked_next().unwrap().value(), 4);
        assert_eq!(a.to_string(), "3");
        assert_eq!(VertexId::MAX.checked_next(), None);
    }
}
