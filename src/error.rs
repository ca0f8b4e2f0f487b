//! Error types for trailgraph
//!
//! Error kinds:
//! - InvalidArgument: precondition violations (dead vertex, search not run)
//! - Cycle: a back edge found during a depth-first post-visit
//! - Unreachable: a path was requested to a vertex the search never reached
//! - Failure: I/O and (de)serialization of configuration

mod macros;

use crate::graph::Vertex;
use thiserror::Error;

/// Coarse classification of a [`GraphError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A checked precondition did not hold
    InvalidArgument,
    /// The traversed structure contains a cycle
    Cycle,
    /// The requested vertex cannot be reached from the source
    Unreachable,
    /// Generic failure outside the graph algorithms
    Failure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::Cycle => "cycle",
            ErrorKind::Unreachable => "unreachable",
            ErrorKind::Failure => "failure",
        }
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Precondition violations
    #[error("vertex {vertex} is not in the graph")]
    VertexNotFound { vertex: Vertex },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("shortest paths have not been computed; call set_paths first")]
    PathsNotComputed,

    // Structural findings
    #[error("circular dependency: edge {vertex} -> {successor} closes a cycle")]
    CyclicStructure { vertex: Vertex, successor: Vertex },

    #[error("vertex {target} is not reachable from {origin}")]
    Unreachable { origin: Vertex, target: Vertex },

    // Generic failures
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for an invalid value or argument
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a vertex that is not live
    pub fn vertex_not_found(vertex: Vertex) -> Self {
        GraphError::VertexNotFound { vertex }
    }

    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::VertexNotFound { .. }
            | GraphError::InvalidValue { .. }
            | GraphError::PathsNotComputed => ErrorKind::InvalidArgument,

            GraphError::CyclicStructure { .. } => ErrorKind::Cycle,

            GraphError::Unreachable { .. } => ErrorKind::Unreachable,

            GraphError::Io(_)
            | GraphError::Toml(_)
            | GraphError::Json(_)
            | GraphError::Other(_) => ErrorKind::Failure,
        }
    }

    /// Returns true for errors caused by the caller breaking a precondition
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::VertexNotFound { .. } => "vertex_not_found",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::PathsNotComputed => "paths_not_computed",
            GraphError::CyclicStructure { .. } => "cyclic_structure",
            GraphError::Unreachable { .. } => "unreachable",
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Json(_) => "json_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "kind": self.kind().as_str(),
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            GraphError::VertexNotFound { vertex } => {
                error_obj["vertex"] = serde_json::json!(vertex);
            }
            GraphError::CyclicStructure { vertex, successor } => {
                error_obj["edge"] = serde_json::json!([vertex, successor]);
            }
            GraphError::Unreachable { origin, target } => {
                error_obj["origin"] = serde_json::json!(origin);
                error_obj["target"] = serde_json::json!(target);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for trailgraph operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            GraphError::vertex_not_found(3).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(GraphError::PathsNotComputed.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            GraphError::CyclicStructure {
                vertex: 3,
                successor: 1
            }
            .kind(),
            ErrorKind::Cycle
        );
        assert_eq!(
            GraphError::Unreachable {
                origin: 1,
                target: 9
            }
            .kind(),
            ErrorKind::Unreachable
        );
        assert_eq!(GraphError::Other("x".into()).kind(), ErrorKind::Failure);
    }

    #[test]
    fn test_error_messages() {
        let err = GraphError::CyclicStructure {
            vertex: 3,
            successor: 1,
        };
        assert_eq!(
            err.to_string(),
            "circular dependency: edge 3 -> 1 closes a cycle"
        );
        assert_eq!(
            GraphError::invalid_value("edge weight", -1.5).to_string(),
            "invalid edge weight: -1.5"
        );
    }

    #[test]
    fn test_to_json() {
        let err = GraphError::CyclicStructure {
            vertex: 3,
            successor: 1,
        };
        let json = err.to_json();
        assert_eq!(json["error"]["kind"], "cycle");
        assert_eq!(json["error"]["type"], "cyclic_structure");
        assert_eq!(json["error"]["edge"], serde_json::json!([3, 1]));

        let json = GraphError::vertex_not_found(7).to_json();
        assert_eq!(json["error"]["kind"], "invalid_argument");
        assert_eq!(json["error"]["vertex"], 7);
    }
}
