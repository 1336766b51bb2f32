//! Sentinel aware access to sorted slices.
//!
//! Reading left or right of a cut never fails: out of range positions
//! resolve to `NegInf` or `PosInf`, which compare below (resp. above)
//! any element, whatever the range of the element type.

/// A value read around a cut point, or one of the two infinities.
///
/// Variant order matters: the derived ordering gives
/// `NegInf < Value(_) < PosInf` and compares values with `T`'s ordering.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum Boundary<T> {
    /// Left of the first element.
    NegInf,
    /// An actual element.
    Value(T),
    /// Right of the last element.
    PosInf,
}

impl<T> Boundary<T> {
    /// Return the element if we are not on a sentinel.
    pub fn value(self) -> Option<T> {
        match self {
            Boundary::Value(v) => Some(v),
            _ => None,
        }
    }
    /// Are we an actual element ?
    pub fn is_value(&self) -> bool {
        matches!(self, Boundary::Value(_))
    }
}

impl<T: PartialOrd> Boundary<T> {
    /// Smallest of the two (left one on ties).
    pub fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }
    /// Largest of the two (right one on ties).
    pub fn max(self, other: Self) -> Self {
        if other >= self {
            other
        } else {
            self
        }
    }
}

/// Element just left of the cut at `index`, `NegInf` if the cut is at the start.
///
/// A cut past the end is clamped to the end: we return the last element
/// (`NegInf` for an empty slice), never read out of bounds.
pub fn left_boundary<T: Copy>(seq: &[T], index: usize) -> Boundary<T> {
    match index.checked_sub(1).and_then(|i| seq.get(i)) {
        Some(v) => Boundary::Value(*v),
        None if index == 0 => Boundary::NegInf,
        // cut is past the end: everything on the left, last element is the boundary
        None => seq.last().map_or(Boundary::NegInf, |v| Boundary::Value(*v)),
    }
}

/// Element just right of the cut at `index`, `PosInf` if the cut is at the end.
pub fn right_boundary<T: Copy>(seq: &[T], index: usize) -> Boundary<T> {
    seq.get(index).map_or(Boundary::PosInf, |v| Boundary::Value(*v))
}
