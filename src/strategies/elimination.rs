use super::KthSelect;
use crate::errors::{check_rank, Result};
use std::cmp::min;

/// Iterative elimination.
///
/// At each step compare the elements at rank `k/2` in both slices
/// (or the last one if a slice is shorter) and drop the prefix ending on
/// the smaller one: none of its elements can be the k-th.
/// Loop runs O(log k) times and uses constant stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct Elimination;

impl KthSelect for Elimination {
    fn select<T: PartialOrd + Copy>(&self, a: &[T], b: &[T], k: usize) -> Result<T> {
        check_rank(k, a.len() + b.len())?;
        let (mut a, mut b, mut k) = (a, b, k);
        // invariant: 1 <= k <= a.len() + b.len()
        loop {
            if a.is_empty() {
                return Ok(b[k - 1]);
            }
            if b.is_empty() {
                return Ok(a[k - 1]);
            }
            if k == 1 {
                return Ok(if b[0] < a[0] { b[0] } else { a[0] });
            }
            let half = k / 2;
            let in_a = min(half, a.len());
            let in_b = min(half, b.len());
            if a[in_a - 1] <= b[in_b - 1] {
                a = &a[in_a..];
                k -= in_a;
            } else {
                b = &b[in_b..];
                k -= in_b;
            }
        }
    }
}
