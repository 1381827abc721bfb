//! The undirected edge struct.

use serde::Serialize;

/// An undirected connection between two cells.
///
/// `source_id` and `target_id` only record the order the endpoints were given
/// in; the graph treats `(a, b)` and `(b, a)` as the same edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    /// First endpoint.
    pub source_id: u64,
    /// Second endpoint.
    pub target_id: u64,
    /// Transport cost along the edge. Unweighted edges carry `None`.
    pub weight: Option<f64>,
}

impl Edge {
    /// Create an unweighted edge.
    pub fn new(source_id: u64, target_id: u64) -> Self {
        Self {
            source_id,
            target_id,
            weight: None,
        }
    }

    /// Create a weighted edge.
    pub fn weighted(source_id: u64, target_id: u64, weight: f64) -> Self {
        Self {
            source_id,
            target_id,
            weight: Some(weight),
        }
    }

    /// Endpoints ordered as `(min, max)`, the key under which the graph stores the edge.
    pub fn key(&self) -> (u64, u64) {
        edge_key(self.source_id, self.target_id)
    }
}

/// Normalized key for an undirected pair.
pub(crate) fn edge_key(a: u64, b: u64) -> (u64, u64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
