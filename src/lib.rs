//! This crate finds order statistics (k-th smallest element, median) of two
//! sorted slices without merging them, by bisecting a cut point in the shorter one.
//!
//! On top of that, the same cut lets us split merges anywhere and run them
//! (or many independent queries) in parallel with rayon.
#![warn(clippy::all)]
#![deny(missing_docs)]

#[cfg(feature = "logs")]
extern crate rayon_logs as rayon;

/// Algorithms using rank partitions: merges and batches of queries.
pub(crate) mod algorithms;
pub use algorithms::batch::{kth_batch, medians};
pub use algorithms::merge::{merge, merge_into, split_at_rank};
/// Median and k-th element queries.
pub mod assembler;
pub use assembler::{kth_smallest, kth_smallest_with, median, median_pair, median_with};
/// Sentinel aware access to sorted slices.
pub mod boundary;
pub use boundary::{left_boundary, right_boundary, Boundary};
/// Divisibility trait for parallel work.
pub(crate) mod divisibility;
/// Error types.
pub mod errors;
pub use errors::{Result, SelectError};
/// Partition search engine.
pub mod partition;
pub use partition::{partition_search, Partition};
/// Import all traits in prelude.
pub mod prelude;
/// Selection strategies.
pub mod strategies;
pub use strategies::{Elimination, KthSelect, PartitionSearch, Strategy};

/// Below this many elements (or queries) work is never divided
/// with the default policy.
pub const DEFAULT_BLOCK_SIZE: usize = 10_000;

/// Different available scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Just run sequentially
    Sequential,
    /// Split recursively until given size is reached.
    Join(usize),
    /// Use rayon's scheduling algorithm, don't go below given size.
    Rayon(usize),
}

impl Default for Policy {
    fn default() -> Self {
        Policy::Join(DEFAULT_BLOCK_SIZE)
    }
}

/// All scheduling algorithms.
pub(crate) mod schedulers;
