//! Graph configuration options.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// Directed graphs keep separate emissive (outgoing) and incident (incoming) lists per
    /// vertex; undirected graphs keep a single incidence list.
    pub directed: bool,
}

impl GraphOptions {
    pub fn directed() -> Self {
        Self { directed: true }
    }

    pub fn undirected() -> Self {
        Self { directed: false }
    }
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self { directed: true }
    }
}
