//! Median and k-th smallest element of two sorted slices.
use crate::boundary::Boundary;
use crate::errors::{Result, SelectError};
use crate::strategies::{KthSelect, Strategy};
use num_traits::AsPrimitive;

/// Median of `a` and `b` taken together, without merging them.
///
/// For an even number of elements this is the mean of the two middle ones,
/// computed in floating point.
///
/// # Example
///
/// ```
/// use rank_partition::median;
/// assert_eq!(median(&[1, 3], &[2]), Ok(2.0));
/// assert_eq!(median(&[1, 2], &[3, 4]), Ok(2.5));
/// ```
pub fn median<T>(a: &[T], b: &[T]) -> Result<f64>
where
    T: PartialOrd + Copy + AsPrimitive<f64>,
{
    median_with(Strategy::default(), a, b)
}

/// `k`-th smallest element (starting at 1) of `a` and `b` taken together.
///
/// # Example
///
/// ```
/// use rank_partition::kth_smallest;
/// assert_eq!(kth_smallest(&[2, 3, 6, 7, 9], &[1, 4, 8, 10], 5), Ok(6));
/// ```
pub fn kth_smallest<T: PartialOrd + Copy>(a: &[T], b: &[T], k: usize) -> Result<T> {
    kth_smallest_with(Strategy::default(), a, b, k)
}

/// Median using given selection strategy.
pub fn median_with<S, T>(strategy: S, a: &[T], b: &[T]) -> Result<f64>
where
    S: KthSelect,
    T: PartialOrd + Copy + AsPrimitive<f64>,
{
    let total = a.len() + b.len();
    if total == 0 {
        return Err(SelectError::EmptyInput);
    }
    let (lower, upper) = strategy.select_pair(a, b, (total + 1) / 2)?;
    if total % 2 == 1 {
        return Ok(lower.as_());
    }
    match upper {
        Boundary::Value(upper) => Ok(mean(lower.as_(), upper.as_())),
        // an even, non zero count always leaves an element on the right
        _ => Ok(lower.as_()),
    }
}

/// `k`-th smallest element using given selection strategy.
pub fn kth_smallest_with<S, T>(strategy: S, a: &[T], b: &[T], k: usize) -> Result<T>
where
    S: KthSelect,
    T: PartialOrd + Copy,
{
    strategy.select(a, b, k)
}

/// Both middle elements (equal for an odd count).
pub fn median_pair<T: PartialOrd + Copy>(a: &[T], b: &[T]) -> Result<(T, T)> {
    let total = a.len() + b.len();
    if total == 0 {
        return Err(SelectError::EmptyInput);
    }
    let (lower, upper) = Strategy::default().select_pair(a, b, (total + 1) / 2)?;
    if total % 2 == 1 {
        Ok((lower, lower))
    } else {
        Ok((lower, upper.value().unwrap_or(lower)))
    }
}

// halves only when the sum overflows, they underflow on subnormals
fn mean(lower: f64, upper: f64) -> f64 {
    let sum = lower + upper;
    if sum.is_finite() {
        sum / 2.0
    } else {
        lower / 2.0 + upper / 2.0
    }
}
