use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error, Diagnostic)]
pub enum ArrayError {
    /// `index` fell outside the valid range of the operation.
    ///
    /// `len` is the exclusive upper bound that was checked against: the
    /// element count for reads, writes and removals, and the element count
    /// plus one for insertions.
    #[error("index {index} is out of range, valid indices are 0..{len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("array is full, capacity of {capacity} can not grow")]
    #[diagnostic(help("create the array with a growable resize policy"))]
    CapacityExceeded { capacity: usize },
}

impl ArrayError {
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}
