use thiserror::Error;

/// Errors reported by the checked `DynArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynArrayError {
    /// Index is beyond the current array length
    #[error("Index out of bounds: index {index} is beyond array length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the array
        length: usize,
    },
    /// Pop was attempted on an array holding no elements
    #[error("Pop from an empty array")]
    EmptyArray,
    /// Requested capacity exceeds what a contiguous `i32` buffer can address
    #[error("Capacity overflow: {requested} slots exceed the maximum of {max}")]
    CapacityOverflow {
        /// Number of slots requested
        requested: usize,
        /// Maximum number of slots supported
        max: usize,
    },
}
