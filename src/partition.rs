//! Binary search of a balanced and ordered cut across two sorted slices.
//!
//! We look for `i` in the shorter slice `a` and `j = required - i` in `b`
//! such that `a[..i]` and `b[..j]` together hold exactly `required` elements
//! and `max(a[i-1], b[j-1]) <= min(a[i], b[j])`.
//! Cost is O(log(min(|a|, |b|))).
use crate::boundary::{left_boundary, right_boundary, Boundary};
use crate::errors::{Result, SelectError};
use std::cmp::min;

/// A cut point in each of the two slices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partition<T> {
    /// number of elements of the first slice on the left side
    pub left_a: usize,
    /// number of elements of the second slice on the left side
    pub left_b: usize,
    /// largest element on the left side (`NegInf` if the left side is empty)
    pub max_left: Boundary<T>,
    /// smallest element on the right side (`PosInf` if the right side is empty)
    pub min_right: Boundary<T>,
    /// how many times the search window was cut before finding the partition,
    /// that is the number of probed cuts minus one
    pub narrowings: usize,
}

impl<T> Partition<T> {
    /// Number of elements on the left side.
    pub fn left_len(&self) -> usize {
        self.left_a + self.left_b
    }
}

/// Find the partition putting `required_left_count` elements on the left.
///
/// Arguments may come in any order, the search always runs on the shorter
/// slice and the returned cut is expressed in the caller's order.
/// Inputs must be sorted; if they are not the result is unspecified
/// (but we do not panic).
///
/// # Example
///
/// ```
/// use rank_partition::partition_search;
/// use rank_partition::Boundary;
/// let p = partition_search(&[1, 3, 8], &[2, 4, 5, 6], 4).unwrap();
/// assert_eq!((p.left_a, p.left_b), (2, 2));
/// assert_eq!(p.max_left, Boundary::Value(4));
/// assert_eq!(p.min_right, Boundary::Value(5));
/// ```
pub fn partition_search<T: PartialOrd + Copy>(
    a: &[T],
    b: &[T],
    required_left_count: usize,
) -> Result<Partition<T>> {
    let total = a.len() + b.len();
    if total == 0 {
        return Err(SelectError::EmptyInput);
    }
    if required_left_count > total {
        return Err(SelectError::InvalidK {
            k: required_left_count,
            len: total,
        });
    }
    Ok(cut(a, b, required_left_count))
}

/// Search without validation. `required_left_count` must not exceed the
/// combined length; two empty slices give the empty cut.
pub(crate) fn cut<T: PartialOrd + Copy>(
    a: &[T],
    b: &[T],
    required_left_count: usize,
) -> Partition<T> {
    if a.len() <= b.len() {
        search_shorter(a, b, required_left_count)
    } else {
        let p = search_shorter(b, a, required_left_count);
        Partition {
            left_a: p.left_b,
            left_b: p.left_a,
            ..p
        }
    }
}

/// The actual search. `short` is the one we bisect.
/// `required` is at most `short.len() + long.len()`.
fn search_shorter<T: PartialOrd + Copy>(short: &[T], long: &[T], required: usize) -> Partition<T> {
    // j = required - i must stay in [0, long.len()]
    let mut low = required.saturating_sub(long.len());
    let mut high = min(short.len(), required);
    let mut narrowings = 0;
    let mut last_cut = low;
    while low <= high {
        let i = low + (high - low) / 2;
        let j = required - i;
        last_cut = i;
        let short_left = left_boundary(short, i);
        let short_right = right_boundary(short, i);
        let long_left = left_boundary(long, j);
        let long_right = right_boundary(long, j);
        if short_left > long_right {
            // too far right in short. short_left is a value so i > 0.
            if i == 0 {
                break;
            }
            high = i - 1;
        } else if long_left > short_right {
            // too far left in short
            low = i + 1;
        } else {
            return Partition {
                left_a: i,
                left_b: j,
                max_left: short_left.max(long_left),
                min_right: short_right.min(long_right),
                narrowings,
            };
        }
        narrowings += 1;
    }
    // only reachable on unsorted input
    let j = required - last_cut;
    Partition {
        left_a: last_cut,
        left_b: j,
        max_left: left_boundary(short, last_cut).max(left_boundary(long, j)),
        min_right: right_boundary(short, last_cut).min(right_boundary(long, j)),
        narrowings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ceil_log2(n: usize) -> usize {
        (0..).find(|&p| (1usize << p) >= n).unwrap()
    }

    #[test]
    fn median_cut() {
        let p = partition_search(&[1, 3], &[2], 2).unwrap();
        assert_eq!(p.max_left, Boundary::Value(2));
        assert_eq!(p.min_right, Boundary::Value(3));
        assert_eq!(p.left_len(), 2);
    }

    #[test]
    fn swapped_arguments_report_caller_order() {
        let long = [1, 2, 3, 4, 5, 6];
        let short = [10];
        let p = partition_search(&long, &short, 6).unwrap();
        assert_eq!((p.left_a, p.left_b), (6, 0));
        assert_eq!(p.max_left, Boundary::Value(6));
        assert_eq!(p.min_right, Boundary::Value(10));
        let q = partition_search(&short, &long, 6).unwrap();
        assert_eq!((q.left_a, q.left_b), (0, 6));
    }

    #[test]
    fn extreme_counts() {
        let a = [1, 5, 9];
        let b = [2, 3];
        let empty_left = partition_search(&a, &b, 0).unwrap();
        assert_eq!(empty_left.max_left, Boundary::NegInf);
        assert_eq!(empty_left.min_right, Boundary::Value(1));
        let everything = partition_search(&a, &b, 5).unwrap();
        assert_eq!(everything.max_left, Boundary::Value(9));
        assert_eq!(everything.min_right, Boundary::PosInf);
    }

    #[test]
    fn errors() {
        let empty: [i32; 0] = [];
        assert_eq!(
            partition_search(&empty, &empty, 0),
            Err(SelectError::EmptyInput)
        );
        assert_eq!(
            partition_search(&[1], &[2], 3),
            Err(SelectError::InvalidK { k: 3, len: 2 })
        );
    }

    #[test]
    fn narrowings_are_logarithmic() {
        for short_len in 0..40usize {
            let short: Vec<u32> = (0..short_len as u32).map(|x| 3 * x).collect();
            for long_len in short_len.max(1)..short_len + 20 {
                let long: Vec<u32> = (0..long_len as u32).map(|x| 2 * x + 1).collect();
                let bound = ceil_log2(short_len + 1);
                for required in 0..=short_len + long_len {
                    let p = partition_search(&short, &long, required).unwrap();
                    assert!(p.narrowings <= bound);
                    let q = partition_search(&long, &short, required).unwrap();
                    assert!(q.narrowings <= bound);
                }
            }
        }
    }

    #[test]
    fn narrowings_count_probes_minus_one() {
        // cut found on the first probe
        let p = partition_search(&[1, 4], &[2, 3], 2).unwrap();
        assert_eq!(p.narrowings, 0);
        // probes at i = 1, 2, 3: one more probe than the window bound allows
        let q = partition_search(&[1, 2, 3], &[10, 11, 12], 3).unwrap();
        assert_eq!((q.left_a, q.left_b), (3, 0));
        assert_eq!(q.narrowings, 2);
        assert_eq!(q.narrowings, ceil_log2(3 + 1));
    }

    #[test]
    fn unsorted_input_does_not_panic() {
        let a = [9, 1, 7, 3];
        let b = [8, 2, 6, 0, 5];
        for required in 0..=9 {
            let p = partition_search(&a, &b, required).unwrap();
            assert!(p.left_a <= a.len());
            assert!(p.left_b <= b.len());
        }
    }
}
