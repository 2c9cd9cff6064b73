//! Classical graph algorithms over [`selkie_graph::Graph`].
//!
//! Every algorithm owns its scratch state (visited marks, distance rows, leaders), so a
//! borrowed graph can be handed to several algorithms in a row without resetting anything.
//! The destructive ones (sink-removal topological sort, contraction min-cut) take the graph by
//! value; clone first if the original is still needed.

#![forbid(unsafe_code)]

pub use selkie_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod adjacency;
pub mod budget;
pub mod error;
mod heap;
pub mod min_cut;
pub mod mst;
pub mod shortest_paths;
pub mod traversal;
pub mod tsp;

pub use budget::Budget;
pub use error::{Error, Result};
