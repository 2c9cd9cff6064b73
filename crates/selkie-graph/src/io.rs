//! Loader for the plain-text graph format.
//!
//! The first line holds the vertex count `n`; vertices `1..=n` are created up front. Every
//! following non-blank line is `tail head` or `tail head weight`, separated by whitespace.
//! The file does not say whether it is directed, so the caller picks [`GraphOptions`].

use crate::error::GraphError;
use crate::graph::{Graph, GraphOptions, VertexId};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("graph input is empty; expected a vertex count on the first line")]
    MissingHeader,
    #[error("invalid vertex count {content:?} on line 1")]
    InvalidHeader { content: String },
    #[error("line {line}: expected `tail head [weight]`, got {content:?}")]
    InvalidLine { line: usize, content: String },
    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
}

pub fn read_graph(options: GraphOptions, path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_graph(options, &text)
}

pub fn parse_graph(options: GraphOptions, text: &str) -> Result<Graph, LoadError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (_, header) = lines.next().ok_or(LoadError::MissingHeader)?;
    let n: VertexId = header.parse().map_err(|_| LoadError::InvalidHeader {
        content: header.to_string(),
    })?;

    let mut g = Graph::new(options);
    for id in 1..=n {
        g.add_vertex(id)
            .map_err(|source| LoadError::Graph { line: 1, source })?;
    }

    for (line, content) in lines {
        let (tail, head, weight) = parse_edge_line(content).ok_or_else(|| LoadError::InvalidLine {
            line,
            content: content.to_string(),
        })?;
        g.add_weighted_edge(tail, head, weight)
            .map_err(|source| LoadError::Graph { line, source })?;
    }

    tracing::debug!(
        vertices = g.vertex_count(),
        edges = g.edge_count(),
        directed = options.directed,
        "loaded graph"
    );
    Ok(g)
}

fn parse_edge_line(content: &str) -> Option<(VertexId, VertexId, f64)> {
    let mut parts = content.split_whitespace();
    let tail = parts.next()?.parse().ok()?;
    let head = parts.next()?.parse().ok()?;
    let weight = match parts.next() {
        Some(w) => w.parse().ok()?,
        None => 1.0,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((tail, head, weight))
}
