pub use crate::strategies::KthSelect;
