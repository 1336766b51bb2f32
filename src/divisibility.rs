//! Work which can be cut in two independent halves.

/// All parallel work items implement this.
/// At size 0 nothing is left to do.
pub trait Divisible: Sized + Send {
    /// Tag used to name sequential leaves in logs.
    #[cfg_attr(not(feature = "logs"), allow(dead_code))]
    const LOG_TAG: &'static str;
    /// Return our size. This corresponds to the number of operations to be issued.
    fn base_length(&self) -> usize;
    /// Cut the `Divisible` into two parts.
    fn divide(self) -> (Self, Self);
}
