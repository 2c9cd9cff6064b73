//! Exact travelling-salesman tours by dynamic programming over subsets.
//!
//! `A[v][S]` is the length of the shortest path that starts at city 0, visits exactly the
//! cities in `S` (which contains 0 and `v`) and ends at `v`:
//! `A[v][S] = min over w in S \ {v} of A[w][S \ {v}] + dist(w, v)`.
//! The tour length is `min over w != 0 of A[w][all] + dist(w, 0)`. Subsets are bit masks over
//! cities `1..n`; city 0 is implicit in every subset. O(n² 2ⁿ) time, which is only practical
//! for a couple of dozen cities at most, so the input size is capped at [`MAX_CITIES`].

use crate::budget::Budget;
use crate::error::{Error, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

pub const MAX_CITIES: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Shortest round trip through every city, keeping the full `n x 2ⁿ⁻¹` table.
pub fn tsp(cities: &[Point]) -> Result<f64> {
    tsp_with_budget(cities, &mut Budget::unlimited())
}

pub fn tsp_with_budget(cities: &[Point], budget: &mut Budget) -> Result<f64> {
    let Some(k) = others(cities)? else {
        return Ok(0.0);
    };
    let dist = distances(cities);
    let full: usize = (1 << k) - 1;

    // table[mask * k + j]: path from city 0 through `mask`, ending at city j + 1.
    let mut table: Vec<f64> = vec![f64::INFINITY; (full + 1) * k];
    for j in 0..k {
        table[(1 << j) * k + j] = dist[0][j + 1];
    }

    // Removing a city from a mask always yields a smaller mask, so increasing numeric order
    // sees every subset after all of its own subsets.
    for mask in 1..=full {
        if mask.count_ones() < 2 {
            continue;
        }
        budget.charge(u64::from(mask.count_ones()).pow(2))?;
        for j in members(mask, k) {
            let without = mask & !(1 << j);
            let best = members(without, k)
                .map(|i| table[without * k + i] + dist[i + 1][j + 1])
                .fold(f64::INFINITY, f64::min);
            table[mask * k + j] = best;
        }
    }

    let tour = close_tour(&table[full * k..], &dist);
    tracing::debug!(cities = cities.len(), tour, steps = budget.used(), "tsp finished");
    Ok(tour)
}

/// Same recurrence, keeping only the layer of the previous subset size.
pub fn tsp_optimized(cities: &[Point]) -> Result<f64> {
    tsp_optimized_with_budget(cities, &mut Budget::unlimited())
}

pub fn tsp_optimized_with_budget(cities: &[Point], budget: &mut Budget) -> Result<f64> {
    let Some(k) = others(cities)? else {
        return Ok(0.0);
    };
    let dist = distances(cities);

    let mut prev = Layer::new(k, 1);
    for (row, &mask) in prev.masks.iter().enumerate() {
        let j = mask.trailing_zeros() as usize;
        prev.rows[row][j] = dist[0][j + 1];
    }

    for size in 2..=k {
        let mut cur = Layer::new(k, size);
        budget.charge((cur.masks.len() * size * size) as u64)?;
        for row in 0..cur.masks.len() {
            let mask = cur.masks[row];
            for j in members(mask, k) {
                let without = mask & !(1 << j);
                let Some(prev_row) = prev.row(without) else {
                    continue;
                };
                cur.rows[row][j] = members(without, k)
                    .map(|i| prev_row[i] + dist[i + 1][j + 1])
                    .fold(f64::INFINITY, f64::min);
            }
        }
        tracing::trace!(size, subsets = cur.masks.len(), "tsp layer done");
        prev = cur;
    }

    let full: usize = (1 << k) - 1;
    let last = prev.row(full).unwrap_or_default();
    let tour = close_tour(last, &dist);
    tracing::debug!(cities = cities.len(), tour, steps = budget.used(), "tsp (layered) finished");
    Ok(tour)
}

/// All subsets of one size with their DP rows.
struct Layer {
    masks: Vec<usize>,
    rows: Vec<Vec<f64>>,
    index: FxHashMap<usize, usize>,
}

impl Layer {
    fn new(bits: usize, size: usize) -> Self {
        let masks = masks_of_size(bits, size);
        let rows = vec![vec![f64::INFINITY; bits]; masks.len()];
        let index = masks.iter().enumerate().map(|(i, &m)| (m, i)).collect();
        Self { masks, rows, index }
    }

    fn row(&self, mask: usize) -> Option<&[f64]> {
        self.index.get(&mask).map(|&i| self.rows[i].as_slice())
    }
}

/// Validates the input and returns the number of cities besides city 0, or `None` for a
/// single city.
fn others(cities: &[Point]) -> Result<Option<usize>> {
    match cities.len() {
        0 => Err(Error::EmptyInput),
        1 => Ok(None),
        n if n > MAX_CITIES => Err(Error::TooManyCities {
            cities: n,
            max: MAX_CITIES,
        }),
        n => Ok(Some(n - 1)),
    }
}

fn distances(cities: &[Point]) -> Vec<Vec<f64>> {
    cities
        .iter()
        .map(|a| cities.iter().map(|b| a.distance(b)).collect())
        .collect()
}

fn close_tour(last: &[f64], dist: &[Vec<f64>]) -> f64 {
    last.iter()
        .enumerate()
        .map(|(j, &len)| len + dist[j + 1][0])
        .fold(f64::INFINITY, f64::min)
}

fn members(mask: usize, bits: usize) -> impl Iterator<Item = usize> {
    (0..bits).filter(move |&j| mask & (1 << j) != 0)
}

/// Masks over `bits` bits with exactly `size` bits set, in increasing order (Gosper's hack).
fn masks_of_size(bits: usize, size: usize) -> Vec<usize> {
    let mut out: Vec<usize> = Vec::new();
    if size == 0 || size > bits {
        return out;
    }
    let limit: usize = 1 << bits;
    let mut x: usize = (1 << size) - 1;
    while x < limit {
        out.push(x);
        let lowest = x & x.wrapping_neg();
        let ripple = x + lowest;
        x = (((ripple ^ x) >> 2) / lowest) | ripple;
    }
    out
}
