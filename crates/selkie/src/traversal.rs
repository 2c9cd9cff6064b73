//! Breadth-first and depth-first search, connected components and topological sorting.
//!
//! Visited marks live in an [`Explored`] value owned by the caller or by the algorithm, never
//! on the graph, so traversals over a shared `&Graph` do not interfere with each other.

mod bfs;
mod components;
mod dfs;
mod topological;

pub use bfs::{bfs, bfs_from, shortest_path_length};
pub use components::{
    connected_components, num_connected_components, num_connected_components_dfs,
    num_strongly_connected_components, strongly_connected_components,
};
pub use dfs::{dfs, dfs_from};
pub use topological::{topological_sort, topological_sort_straightforward};

use selkie_graph::Graph;

/// Visited marks for one or more traversals, indexed by dense vertex position.
///
/// Reusing one `Explored` across several [`bfs_from`] / [`dfs_from`] launches makes later
/// launches skip what earlier ones reached; [`Explored::clear`] starts over.
#[derive(Debug, Clone, Default)]
pub struct Explored {
    marks: Vec<bool>,
    count: usize,
}

impl Explored {
    pub fn new(g: &Graph) -> Self {
        Self::with_len(g.vertex_count())
    }

    pub(crate) fn with_len(len: usize) -> Self {
        Self {
            marks: vec![false; len],
            count: 0,
        }
    }

    pub fn clear(&mut self) {
        self.marks.fill(false);
        self.count = 0;
    }

    pub fn is_explored(&self, index: usize) -> bool {
        self.marks.get(index).copied().unwrap_or(false)
    }

    /// Number of vertices marked so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Marks `index` and returns `true` if it was not marked before.
    pub(crate) fn mark(&mut self, index: usize) -> bool {
        if index >= self.marks.len() {
            self.marks.resize(index + 1, false);
        }
        if self.marks[index] {
            return false;
        }
        self.marks[index] = true;
        self.count += 1;
        true
    }

    pub(crate) fn fit(&mut self, len: usize) {
        if self.marks.len() < len {
            self.marks.resize(len, false);
        }
    }
}
