//! Error macros for trailgraph

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for returning early when a vertex is not live in a graph
#[macro_export]
macro_rules! ensure_vertex {
    ($graph:expr, $vertex:expr) => {
        if !$graph.contains_vertex($vertex) {
            return Err($crate::error::GraphError::vertex_not_found($vertex));
        }
    };
}
