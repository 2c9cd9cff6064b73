//! Min-heap entry keyed by an `f64` score.

use std::cmp::Ordering;

/// `BinaryHeap<MinScored<T>>` pops the smallest score first; ties pop the smaller item first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MinScored<T>(pub(crate) f64, pub(crate) T);

impl<T: Ord> PartialEq for MinScored<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for MinScored<T> {}

impl<T: Ord> PartialOrd for MinScored<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for MinScored<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .total_cmp(&self.0)
            .then_with(|| other.1.cmp(&self.1))
    }
}
