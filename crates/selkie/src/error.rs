use selkie_graph::{GraphError, UnionFindError, VertexId};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    UnionFind(#[from] UnionFindError),
    #[error("negative cycle detected")]
    NegativeCycleDetected,
    #[error("graph has a cycle; no topological order exists")]
    GraphHasCycle,
    #[error("input is empty")]
    EmptyInput,
    #[error("{algorithm} requires {expected} graph")]
    UnsupportedGraphKind {
        algorithm: &'static str,
        expected: &'static str,
    },
    #[error("graph is not connected")]
    Disconnected,
    #[error("edge {tail} -> {head} has negative length {weight}")]
    NegativeWeight {
        tail: VertexId,
        head: VertexId,
        weight: f64,
    },
    #[error("cannot form {k} clusters from {vertices} vertices")]
    InvalidClusterCount { k: usize, vertices: usize },
    #[error("{cities} cities exceed the supported maximum of {max}")]
    TooManyCities { cities: usize, max: usize },
    #[error("step budget of {limit} exhausted")]
    BudgetExhausted { limit: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn require_directed(g: &selkie_graph::Graph, algorithm: &'static str) -> Result<()> {
    if g.is_directed() {
        Ok(())
    } else {
        Err(Error::UnsupportedGraphKind {
            algorithm,
            expected: "a directed",
        })
    }
}

pub(crate) fn require_undirected(g: &selkie_graph::Graph, algorithm: &'static str) -> Result<()> {
    if g.is_directed() {
        Err(Error::UnsupportedGraphKind {
            algorithm,
            expected: "an undirected",
        })
    } else {
        Ok(())
    }
}
