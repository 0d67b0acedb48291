/// Errors raised by graphs, trees and traversal containers.
///
/// Every variant carries a human-readable message.
/// Validation always happens before mutation,
/// so a structure that returned an error is unchanged and still usable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An operation referenced an absent vertex.
    #[error("{0}")]
    VertexNotFound(String),
    /// An operation referenced an absent edge.
    #[error("{0}")]
    EdgeNotFound(String),
    /// An operation would introduce a cycle where cycles are forbidden.
    #[error("{0}")]
    Cycle(String),
    /// Some vertices can not be reached where connectivity is required.
    #[error("{0}")]
    DisconnectedGraph(String),
    /// Graph data is malformed for the requested structure.
    #[error("{0}")]
    InvalidGraph(String),
    /// An argument is invalid for the receiver, e.g., in-degree of an undirected graph.
    #[error("{0}")]
    InvalidArgument(String),
    /// A vertex is neither endpoint of an edge.
    #[error("{0}")]
    NotPartOfEdge(String),
    /// Popping from an empty traversal container.
    #[error("cannot pop from an empty {0}")]
    EmptyContainer(&'static str),
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;

impl GraphError {
    pub(crate) fn vertex_not_found<V: std::fmt::Debug>(vertex: &V, operation: &str) -> Self {
        Self::VertexNotFound(format!(
            "vertex {:?} not found in graph for {}",
            vertex, operation
        ))
    }

    pub(crate) fn edge_not_found<V: std::fmt::Debug>(source: &V, target: &V) -> Self {
        Self::EdgeNotFound(format!("edge ({:?}, {:?}) not found in graph", source, target))
    }

    /// The message without the kind.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
