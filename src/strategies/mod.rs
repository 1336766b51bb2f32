//! Interchangeable k-th element algorithms.
//!
//! All strategies answer the same question and must agree on every sorted input.
use crate::boundary::Boundary;
use crate::errors::Result;

mod elimination;
mod partition_search;
pub use elimination::Elimination;
pub use partition_search::PartitionSearch;

/// Selection of the k-th smallest element (1-indexed) of two sorted slices.
pub trait KthSelect {
    /// Return the `k`-th smallest element of `a` and `b` taken together.
    fn select<T: PartialOrd + Copy>(&self, a: &[T], b: &[T], k: usize) -> Result<T>;

    /// Return the `k`-th smallest element together with the next one
    /// (`PosInf` if `k` is the last rank).
    fn select_pair<T: PartialOrd + Copy>(
        &self,
        a: &[T],
        b: &[T],
        k: usize,
    ) -> Result<(T, Boundary<T>)> {
        let kth = self.select(a, b, k)?;
        let next = if k < a.len() + b.len() {
            Boundary::Value(self.select(a, b, k + 1)?)
        } else {
            Boundary::PosInf
        };
        Ok((kth, next))
    }
}

/// Which algorithm to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Binary search of a cut point in the shorter slice.
    Partition,
    /// Discard `k/2` sized prefixes until `k` reaches 1.
    Elimination,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Partition
    }
}

impl KthSelect for Strategy {
    fn select<T: PartialOrd + Copy>(&self, a: &[T], b: &[T], k: usize) -> Result<T> {
        match self {
            Strategy::Partition => PartitionSearch.select(a, b, k),
            Strategy::Elimination => Elimination.select(a, b, k),
        }
    }
    fn select_pair<T: PartialOrd + Copy>(
        &self,
        a: &[T],
        b: &[T],
        k: usize,
    ) -> Result<(T, Boundary<T>)> {
        match self {
            Strategy::Partition => PartitionSearch.select_pair(a, b, k),
            Strategy::Elimination => Elimination.select_pair(a, b, k),
        }
    }
}
