//! Adjacency-list multigraph container used by `selkie`.
//!
//! Directed and undirected graphs share one [`Graph`] type; the flavour is picked through
//! [`GraphOptions`]. Parallel edges are tracked individually and self-loops are rejected.

#![forbid(unsafe_code)]

pub mod error;
mod graph;
pub mod io;
pub mod union_find;

pub use error::{GraphError, Result};
pub use graph::{Edge, EdgeId, Graph, GraphOptions, Vertex, VertexId};
pub use io::{LoadError, parse_graph, read_graph};
pub use union_find::{LazyUnionFind, UnionFind, UnionFindError};
