//! algorithms built on top of rank partitions

pub(crate) mod batch;
pub(crate) mod merge;
