//! This module contains all custom errors used in this library.

use std::fmt;
use std::error::Error;

/// Errors raised while building or querying a `VCInstance`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum GraphError {
    /// An edge references a label that was not declared as a vertex.
    InvalidEdge { src: String, trg: String },
    UnknownVertex(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEdge { src, trg } => write!(f, "Invalid edge: {}-{} references an unknown vertex", src, trg),
            Self::UnknownVertex(label) => write!(f, "Unknown vertex: {}", label),
        }
    }
}

impl Error for GraphError {}

#[derive(Debug)]
pub enum ImportError {
    IoError(std::io::Error),
    InputMalformedError,
    GraphError(GraphError),
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> ImportError {
        ImportError::IoError(e)
    }
}

impl From<GraphError> for ImportError {
    fn from(e: GraphError) -> ImportError {
        ImportError::GraphError(e)
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "Import: IoError ({})", e),
            Self::InputMalformedError => write!(f, "Import: Input is malformed."),
            Self::GraphError(e) => write!(f, "Import: {}", e),
        }
    }
}

impl Error for ImportError {}

/// Why an exact search was stopped before it finished.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AbortReason {
    DeadlineExceeded,
    Cancelled,
    TooManyVertices { vertices: usize, limit: usize },
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeadlineExceeded => write!(f, "deadline exceeded"),
            Self::Cancelled => write!(f, "cancelled by caller"),
            Self::TooManyVertices { vertices, limit } => {
                write!(f, "{} vertices exceed the limit of {}", vertices, limit)
            },
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ProcessingError {
    /// The exhaustive search ran out of subsets. Unreachable for a finite graph, so seeing this
    /// means the instance is broken.
    NoCoverFound,
    Aborted(AbortReason),
    InvalidSolution(String),
}

impl From<AbortReason> for ProcessingError {
    fn from(reason: AbortReason) -> ProcessingError {
        ProcessingError::Aborted(reason)
    }
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCoverFound => write!(f, "No vertex cover found (Brute Force)"),
            Self::Aborted(reason) => write!(f, "Search aborted: {}", reason),
            Self::InvalidSolution(msg) => write!(f, "InvalidSolution: {}", msg),
        }
    }
}

impl Error for ProcessingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abort_is_not_no_cover_test() {
        let aborted: ProcessingError = AbortReason::Cancelled.into();
        assert_ne!(aborted, ProcessingError::NoCoverFound);
        assert_eq!(aborted.to_string(), "Search aborted: cancelled by caller");
    }

    #[test]
    fn import_wraps_graph_error_test() {
        let err: ImportError = GraphError::UnknownVertex("X".to_owned()).into();
        assert!(matches!(err, ImportError::GraphError(GraphError::UnknownVertex(_))));
        assert_eq!(err.to_string(), "Import: Unknown vertex: X");
    }

}
