use super::KthSelect;
use crate::boundary::Boundary;
use crate::errors::{check_rank, Result, SelectError};
use crate::partition::partition_search;

/// Bisect a cut putting exactly `k` elements on the left.
/// The k-th element is the largest one on the left and its successor the
/// smallest one on the right, so one search answers both.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartitionSearch;

impl KthSelect for PartitionSearch {
    fn select<T: PartialOrd + Copy>(&self, a: &[T], b: &[T], k: usize) -> Result<T> {
        self.select_pair(a, b, k).map(|(kth, _)| kth)
    }

    fn select_pair<T: PartialOrd + Copy>(
        &self,
        a: &[T],
        b: &[T],
        k: usize,
    ) -> Result<(T, Boundary<T>)> {
        let len = a.len() + b.len();
        check_rank(k, len)?;
        let partition = partition_search(a, b, k)?;
        // k >= 1 elements on the left so max_left is never a sentinel
        let kth = partition
            .max_left
            .value()
            .ok_or(SelectError::InvalidK { k, len })?;
        Ok((kth, partition.min_right))
    }
}
