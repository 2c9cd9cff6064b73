use crate::graph::{EdgeId, VertexId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("vertex {id} already exists")]
    DuplicateVertex { id: VertexId },
    #[error("vertex {id} does not exist")]
    VertexNotFound { id: VertexId },
    #[error("cannot connect {tail} and {head}: vertex {missing} does not exist")]
    EdgeEndpointMissing {
        tail: VertexId,
        head: VertexId,
        missing: VertexId,
    },
    #[error("self-loop on vertex {id} rejected")]
    SelfLoopRejected { id: VertexId },
    #[error("no edge between {a} and {b}")]
    EdgeNotFound { a: VertexId, b: VertexId },
    #[error("edge {id} does not exist")]
    UnknownEdge { id: EdgeId },
}

pub type Result<T> = std::result::Result<T, GraphError>;
