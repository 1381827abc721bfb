//! Error types for the mycelium-paths library.

use thiserror::Error;

/// All errors that can occur in the mycelium-paths library.
#[derive(Error, Debug)]
pub enum MycoError {
    /// Node not found by ID.
    #[error("Node ID {0} not found")]
    NodeNotFound(u64),

    /// Self-edge not allowed.
    #[error("Self-edge not allowed on node {0}")]
    SelfEdge(u64),

    /// The weighted engine reached an edge that carries no weight.
    #[error("Edge {source_id}-{target_id} has no weight")]
    MissingWeight { source_id: u64, target_id: u64 },

    /// The weighted engine reached an edge whose weight is not positive and finite.
    #[error("Edge {source_id}-{target_id} has invalid weight {weight} (must be positive and finite)")]
    InvalidWeight {
        source_id: u64,
        target_id: u64,
        weight: f64,
    },

    /// Connection probability out of valid range.
    #[error("Connection probability out of range [0.0, 1.0]: {0}")]
    InvalidProbability(f64),

    /// Edge weight range is empty, non-finite, or not strictly positive.
    #[error("Invalid weight range: [{min}, {max})")]
    InvalidWeightRange { min: f64, max: f64 },

    /// Configuration file could not be parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MycoError {
    /// Whether this error reports a violated precondition of the weighted engine.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Self::MissingWeight { .. } | Self::InvalidWeight { .. }
        )
    }
}

/// Convenience result type for mycelium-paths operations.
pub type MycoResult<T> = Result<T, MycoError>;
