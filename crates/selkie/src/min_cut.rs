//! Karger's randomized minimum cut.
//!
//! One contraction run returns the true minimum cut with probability at least
//! `2 / (n (n - 1))` and never returns less than it. [`compute_minimum_cut`] repeats the run
//! `ceil(n² ln n)` times by default and keeps the smallest result, which brings the failure
//! probability below `1 / n`.

use crate::error::{Result, require_undirected};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use selkie_graph::Graph;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinCutOptions {
    /// Number of contraction runs; `None` uses [`default_trials`].
    pub trials: Option<usize>,
    /// Seed for a reproducible run; `None` seeds from the operating system.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MinCut {
    /// Smallest number of crossing edges observed.
    pub cut: usize,
    pub trials: usize,
}

/// `ceil(n² ln n)`, and at least one.
pub fn default_trials(vertices: usize) -> usize {
    if vertices < 2 {
        return 1;
    }
    let n = vertices as f64;
    ((n * n * n.ln()).ceil() as usize).max(1)
}

/// Runs one contraction to completion and returns the number of edges left between the last
/// two super-vertices.
///
/// While more than two vertices remain, a uniformly random edge is contracted. Consumes the
/// graph; a graph that runs out of edges early is disconnected and has a cut of zero.
pub fn contract_once<R: Rng + ?Sized>(mut g: Graph, rng: &mut R) -> Result<usize> {
    require_undirected(&g, "contract_once")?;
    while g.vertex_count() > 2 {
        let m = g.edge_count();
        if m == 0 {
            return Ok(0);
        }
        let Some((a, b)) = g.edges().nth(rng.gen_range(0..m)).map(|e| e.endpoints()) else {
            return Ok(0);
        };
        g.contract(a, b)?;
    }
    Ok(g.edge_count())
}

/// Repeats [`contract_once`] on copies of `g` and keeps the minimum.
pub fn compute_minimum_cut(g: &Graph, options: &MinCutOptions) -> Result<MinCut> {
    require_undirected(g, "compute_minimum_cut")?;
    let n = g.vertex_count();
    if n <= 1 {
        return Ok(MinCut { cut: 0, trials: 0 });
    }

    let trials = options.trials.unwrap_or_else(|| default_trials(n)).max(1);
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut best = usize::MAX;
    let mut ran = 0;
    for _ in 0..trials {
        ran += 1;
        let cut = contract_once(g.clone(), &mut rng)?;
        if cut < best {
            best = cut;
            tracing::trace!(trial = ran, cut, "new smallest cut");
        }
        if best == 0 {
            break;
        }
    }

    tracing::debug!(vertices = n, trials = ran, cut = best, "minimum cut search finished");
    Ok(MinCut {
        cut: best,
        trials: ran,
    })
}
