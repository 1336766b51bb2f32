//! Merge of two sorted slices, cut anywhere by rank.
//!
//! Splitting the output at rank `r` boils down to finding the partition
//! holding `r` elements on its left side, so both halves can be merged
//! independently.
use crate::divisibility::Divisible;
use crate::errors::{Result, SelectError};
use crate::partition::cut;
use crate::schedulers::schedule;
use crate::Policy;

/// Return `(i, j)` with `i + j = rank` such that `a[..i]` and `b[..j]`
/// hold the `rank` smallest elements of both slices.
///
/// # Example
///
/// ```
/// use rank_partition::split_at_rank;
/// assert_eq!(split_at_rank(&[1, 4, 7], &[2, 3, 9], 4), Ok((2, 2)));
/// assert_eq!(split_at_rank::<u32>(&[], &[], 0), Ok((0, 0)));
/// ```
pub fn split_at_rank<T: PartialOrd + Copy>(a: &[T], b: &[T], rank: usize) -> Result<(usize, usize)> {
    let len = a.len() + b.len();
    if rank > len {
        return Err(SelectError::InvalidK { k: rank, len });
    }
    let partition = cut(a, b, rank);
    Ok((partition.left_a, partition.left_b))
}

/// The two input slices and the place where their merge goes.
struct MergeSlices<'a, T> {
    left: &'a [T],
    right: &'a [T],
    output: &'a mut [T],
}

impl<'a, T: PartialOrd + Copy + Send + Sync> Divisible for MergeSlices<'a, T> {
    const LOG_TAG: &'static str = "merge";
    fn base_length(&self) -> usize {
        self.output.len()
    }
    fn divide(self) -> (Self, Self) {
        let middle = self.output.len() / 2;
        let partition = cut(self.left, self.right, middle);
        let (left1, left2) = self.left.split_at(partition.left_a);
        let (right1, right2) = self.right.split_at(partition.left_b);
        let (output1, output2) = self.output.split_at_mut(middle);
        (
            MergeSlices {
                left: left1,
                right: right1,
                output: output1,
            },
            MergeSlices {
                left: left2,
                right: right2,
                output: output2,
            },
        )
    }
}

fn sequential_merge<T: PartialOrd + Copy>(slices: MergeSlices<T>) {
    slices
        .output
        .iter_mut()
        .zip(itertools::merge(slices.left, slices.right))
        .for_each(|(o, i)| *o = *i);
}

/// Merge sorted `a` and `b` into `output`.
/// This panics if `output` does not have the combined length.
pub fn merge_into<T>(a: &[T], b: &[T], output: &mut [T], policy: Policy)
where
    T: PartialOrd + Copy + Send + Sync,
{
    assert_eq!(
        output.len(),
        a.len() + b.len(),
        "output length does not match inputs"
    );
    let slices = MergeSlices {
        left: a,
        right: b,
        output,
    };
    schedule(slices, policy, &sequential_merge::<T>);
}

/// Merge sorted `a` and `b` into a new vector.
pub fn merge<T>(a: &[T], b: &[T], policy: Policy) -> Vec<T>
where
    T: PartialOrd + Copy + Send + Sync,
{
    // any initial content will do, everything gets overwritten
    let mut output: Vec<T> = a.iter().chain(b).cloned().collect();
    merge_into(a, b, &mut output, policy);
    output
}
