//! Error types shared by the graph model, the min-cut engines and the input parser.

use thiserror::Error;

/// Errors produced while building a graph or computing a cut.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Malformed counts, bad vertex references, non-positive trial counts and
    /// anything else a caller can fix by changing the input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A vertex index that is not part of the current graph.
    #[error("vertex index {index} out of range for graph with {size} vertices")]
    OutOfRange { index: usize, size: usize },
}

impl GraphError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        GraphError::InvalidInput(message.into())
    }

    pub fn out_of_range(index: usize, size: usize) -> Self {
        GraphError::OutOfRange { index, size }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GraphError::invalid_input("trials must be at least 1");
        assert_eq!(err.to_string(), "invalid input: trials must be at least 1");

        let err = GraphError::out_of_range(5, 3);
        assert_eq!(
            err.to_string(),
            "vertex index 5 out of range for graph with 3 vertices"
        );
    }
}
