/// An error returned by the checked operations of [`FixedString`](crate::FixedString).
///
/// A failed operation never modifies the string it was called on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// The operation would have grown the string past its fixed capacity.
    #[error("capacity exceeded: {required} code units required, but the capacity is {capacity}")]
    CapacityExceeded {
        /// The length the string would have needed to hold the result.
        required: usize,
        /// The capacity of the string.
        capacity: usize,
    },
    /// An index or position was outside of the valid range.
    #[error("position {position} is out of range for a string of length {len}")]
    OutOfRange {
        /// The offending position.
        position: usize,
        /// The length of the string at the time of the call.
        len: usize,
    },
    /// The operation requires at least one code unit, but the string was empty.
    #[error("the string is empty")]
    EmptyAccess,
}

impl Error {
    /// Creates an [`Error::CapacityExceeded`] for a string of length `len` that attempted to
    /// grow by `additional` code units.
    #[inline]
    pub(crate) const fn capacity_exceeded(len: usize, additional: usize, capacity: usize) -> Self {
        Self::CapacityExceeded {
            required: len.saturating_add(additional),
            capacity,
        }
    }
}
