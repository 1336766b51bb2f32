//! Errors reported by selection queries.
use thiserror::Error;

/// Why a selection query has no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// Both sequences are empty: there is no median and no k-th element.
    #[error("both sequences are empty")]
    EmptyInput,
    /// Requested rank is outside `[1, len]` (or `[0, len]` for splits).
    #[error("rank {k} is out of range for {len} elements")]
    InvalidK {
        /// requested rank
        k: usize,
        /// total number of elements in both sequences
        len: usize,
    },
}

/// Result of all fallible operations of this crate.
pub type Result<T> = std::result::Result<T, SelectError>;

/// Check `1 <= k <= len` where `len` is the combined length.
/// Empty input is reported first.
pub(crate) fn check_rank(k: usize, len: usize) -> Result<()> {
    if len == 0 {
        Err(SelectError::EmptyInput)
    } else if k == 0 || k > len {
        Err(SelectError::InvalidK { k, len })
    } else {
        Ok(())
    }
}
